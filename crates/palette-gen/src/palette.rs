//! Palette model and loading.
//!
//! A palette is an ordered set of named collections, each an ordered map of
//! step name to raw color string:
//!
//! ```yaml
//! gray:
//!   gray1: hsl(0, 0%, 99.0%)
//!   gray2: hsl(0, 0%, 97.3%)
//! grayDark:
//!   gray1: hsl(0, 0%, 8.5%)
//! ```
//!
//! Document order is preserved at both levels; it decides the order of the
//! generated declarations.
//!
//! Collection names follow the Radix naming scheme, where a `Dark` suffix marks
//! a dark-theme scale and a trailing `A` marks a translucent (alpha) scale.
//! Both markers are exposed as flags on [`Collection`] and never change what
//! gets emitted.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::PaletteError;

/// Raw document shape: collection name to (step name to color string).
type RawPalette = IndexMap<String, IndexMap<String, String>>;

/// One named group of color steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    name: String,
    steps: IndexMap<String, String>,
    dark: bool,
    alpha: bool,
}

impl Collection {
    /// Creates a collection, deriving its dark and alpha flags from the name.
    pub fn new<N, I, K, V>(name: N, steps: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let dark = name.ends_with("Dark") || name.ends_with("DarkA");
        let alpha = name.ends_with('A');
        Self {
            name,
            steps: steps
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            dark,
            alpha,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Steps in insertion order.
    pub fn steps(&self) -> impl Iterator<Item = (&str, &str)> {
        self.steps.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// `true` for dark-theme scales (`grayDark`, `grayDarkA`).
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// `true` for translucent scales (`grayA`, `grayDarkA`).
    pub fn is_alpha(&self) -> bool {
        self.alpha
    }
}

/// An ordered set of collections with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    collections: Vec<Collection>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a collection at the end.
    ///
    /// A collection with the same name is replaced in place, keeping its
    /// original position.
    pub fn push(&mut self, collection: Collection) {
        match self
            .collections
            .iter_mut()
            .find(|c| c.name == collection.name)
        {
            Some(existing) => *existing = collection,
            None => self.collections.push(collection),
        }
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, collection: Collection) -> Self {
        self.push(collection);
        self
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn get(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Total number of color steps across all collections.
    pub fn color_count(&self) -> usize {
        self.collections.iter().map(Collection::len).sum()
    }

    /// Parses a palette from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, PaletteError> {
        let raw: RawPalette = serde_json::from_str(content)?;
        Self::from_raw(raw)
    }

    /// Parses a palette from a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self, PaletteError> {
        let raw: RawPalette = serde_yaml::from_str(content)?;
        Self::from_raw(raw)
    }

    /// Loads a palette file, choosing the format from its extension.
    ///
    /// | Extension | Format |
    /// |-----------|--------|
    /// | `.json` | JSON |
    /// | `.yaml`, `.yml` | YAML |
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PaletteError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, PaletteError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            _ => {
                return Err(PaletteError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let content = fs::read_to_string(path).map_err(|source| PaletteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let palette = parse(&content)?;
        tracing::debug!(
            "Loaded {} collections ({} colors) from {}",
            palette.len(),
            palette.color_count(),
            path.display()
        );
        Ok(palette)
    }

    fn from_raw(raw: RawPalette) -> Result<Self, PaletteError> {
        if raw.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self {
            collections: raw
                .into_iter()
                .map(|(name, steps)| Collection::new(name, steps))
                .collect(),
        })
    }
}

impl FromIterator<Collection> for Palette {
    fn from_iter<T: IntoIterator<Item = Collection>>(iter: T) -> Self {
        let mut palette = Palette::new();
        for collection in iter {
            palette.push(collection);
        }
        palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_flags() {
        let plain = Collection::new("gray", [("gray1", "hsl(0, 0%, 99%)")]);
        assert!(!plain.is_dark());
        assert!(!plain.is_alpha());

        let dark = Collection::new("grayDark", Vec::<(String, String)>::new());
        assert!(dark.is_dark());
        assert!(!dark.is_alpha());

        let alpha = Collection::new("grayA", Vec::<(String, String)>::new());
        assert!(!alpha.is_dark());
        assert!(alpha.is_alpha());

        let dark_alpha = Collection::new("grayDarkA", Vec::<(String, String)>::new());
        assert!(dark_alpha.is_dark());
        assert!(dark_alpha.is_alpha());
    }

    #[test]
    fn test_collection_name_is_preserved() {
        let c = Collection::new("blueDarkA", [("blueA1", "hsla(0, 0%, 0%, 0)")]);
        assert_eq!(c.name(), "blueDarkA");
    }

    #[test]
    fn test_from_json_preserves_order() {
        let palette = Palette::from_json_str(
            r#"{
                "zeta": { "z2": "hsl(0, 0%, 2%)", "z1": "hsl(0, 0%, 1%)" },
                "alpha": { "a1": "hsl(0, 0%, 3%)" }
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = palette.collections().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);

        let steps: Vec<&str> = palette.collections()[0].steps().map(|(k, _)| k).collect();
        assert_eq!(steps, vec!["z2", "z1"]);
    }

    #[test]
    fn test_from_yaml_preserves_order() {
        let palette = Palette::from_yaml_str(
            "tomato:\n  tomato2: hsl(10, 100%, 99.4%)\n  tomato1: hsl(10, 100%, 98%)\n\
             gray:\n  gray1: hsl(0, 0%, 99%)\n",
        )
        .unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.color_count(), 3);
        let tomato = palette.get("tomato").unwrap();
        let steps: Vec<(&str, &str)> = tomato.steps().collect();
        assert_eq!(
            steps,
            vec![
                ("tomato2", "hsl(10, 100%, 99.4%)"),
                ("tomato1", "hsl(10, 100%, 98%)")
            ]
        );
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        assert!(matches!(
            Palette::from_json_str("{}"),
            Err(PaletteError::Empty)
        ));
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            Palette::from_json_str("[1, 2]"),
            Err(PaletteError::Json(_))
        ));
        assert!(matches!(
            Palette::from_yaml_str("gray: [1, 2]"),
            Err(PaletteError::Yaml(_))
        ));
    }

    #[test]
    fn test_from_path_rejects_unknown_extension() {
        let err = Palette::from_path("colors.toml").unwrap_err();
        assert!(matches!(err, PaletteError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Palette::from_path("does/not/exist.json").unwrap_err();
        assert!(matches!(err, PaletteError::Io { .. }));
    }

    #[test]
    fn test_push_replaces_duplicate_in_place() {
        let mut palette = Palette::new()
            .with(Collection::new("a", [("a1", "x")]))
            .with(Collection::new("b", [("b1", "y")]));
        palette.push(Collection::new("a", [("a9", "z")]));

        let names: Vec<&str> = palette.collections().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(palette.get("a").unwrap().steps().next(), Some(("a9", "z")));
    }
}
