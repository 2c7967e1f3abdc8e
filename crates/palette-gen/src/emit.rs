//! Palette traversal and declaration emission.
//!
//! The [`Emitter`] walks a [`Palette`] in order and produces one declaration
//! block per collection:
//!
//! ```text
//! doc line          /** [Radix Colors] Collection: gray */
//! declaration line  @JvmStatic val gray: List<Color> = listOf(
//! entry per step        Color.hsl(0, 0.000, 0.990),
//! closing line      )
//! ```
//!
//! Emission is all-or-nothing: the first malformed color aborts the walk and
//! no lines are returned.

use crate::color::HslColor;
use crate::error::{EmitError, MalformedColorError};
use crate::palette::{Collection, Palette};
use crate::target::Target;

/// Turns palettes into declaration lines for one [`Target`].
pub struct Emitter<'a> {
    target: &'a dyn Target,
    title: &'a str,
}

impl<'a> Emitter<'a> {
    /// Creates an emitter. `title` labels every documentation line.
    pub fn new(target: &'a dyn Target, title: &'a str) -> Self {
        Self { target, title }
    }

    /// Emits every collection in palette order.
    pub fn emit(&self, palette: &Palette) -> Result<Vec<String>, EmitError> {
        let mut lines = Vec::with_capacity(palette.color_count() + palette.len() * 3);
        for collection in palette.collections() {
            self.emit_collection(collection, &mut lines)?;
        }
        Ok(lines)
    }

    /// Appends the declaration block for one collection to `out`.
    ///
    /// On error `out` is left as it was before the call.
    pub fn emit_collection(
        &self,
        collection: &Collection,
        out: &mut Vec<String>,
    ) -> Result<(), EmitError> {
        if collection.is_empty() {
            tracing::warn!("Collection {} has no steps", collection.name());
        }
        tracing::debug!(
            "Emitting {} ({} steps{}{})",
            collection.name(),
            collection.len(),
            if collection.is_dark() { ", dark" } else { "" },
            if collection.is_alpha() { ", alpha" } else { "" },
        );

        let mut block = Vec::with_capacity(collection.len() + 3);
        block.push(self.target.doc_line(self.title, collection));
        block.push(self.target.declaration_line(collection));
        for (step, raw) in collection.steps() {
            let color = parse_step(collection, step, raw)?;
            block.push(self.target.entry_line(&self.target.literal(&color)));
        }
        block.push(self.target.closing_line());

        out.extend(block);
        Ok(())
    }

    /// Parses one raw color string into a target literal.
    pub fn literal(&self, raw: &str) -> Result<String, MalformedColorError> {
        let color = HslColor::parse(raw)?;
        Ok(self.target.literal(&color))
    }
}

/// Parses the color at `step` of `collection`, locating any failure.
pub(crate) fn parse_step(
    collection: &Collection,
    step: &str,
    raw: &str,
) -> Result<HslColor, EmitError> {
    HslColor::parse(raw).map_err(|source| EmitError::MalformedColor {
        collection: collection.name().to_string(),
        step: step.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedReason;
    use crate::target::{Kotlin, Swift};

    fn palette() -> Palette {
        Palette::new()
            .with(Collection::new(
                "A",
                [("1", "hsl(0, 0%, 10%)"), ("2", "hsl(0, 0%, 20%)")],
            ))
            .with(Collection::new("B", [("1", "hsl(0, 0%, 30%)")]))
    }

    #[test]
    fn test_gray_end_to_end() {
        let palette = Palette::new().with(Collection::new("gray", [("gray1", "hsl(0, 0%, 99%)")]));
        let lines = Emitter::new(&Kotlin, "Radix Colors").emit(&palette).unwrap();
        assert_eq!(
            lines,
            vec![
                "    /** [Radix Colors] Collection: gray */",
                "    @JvmStatic val gray: List<Color> = listOf(",
                "        Color.hsl(0, 0.000, 0.990),",
                "    )",
            ]
        );
    }

    #[test]
    fn test_collections_emitted_in_order() {
        let lines = Emitter::new(&Kotlin, "T").emit(&palette()).unwrap();
        let pos = |needle: &str| lines.iter().position(|l| l.contains(needle)).unwrap();

        let a_decl = pos("val A:");
        let a1 = pos("0.100");
        let a2 = pos("0.200");
        let b_decl = pos("val B:");
        let b1 = pos("0.300");

        assert!(a_decl < a1 && a1 < a2);
        assert!(a2 < b_decl && b_decl < b1);
        // Closing line of A precedes B's doc line.
        assert_eq!(lines[4], "    )");
        assert_eq!(lines[5], "    /** [T] Collection: B */");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_dark_marker_kept_verbatim() {
        let palette = Palette::new().with(Collection::new(
            "grayDarkA",
            [("grayA1", "hsla(0, 0%, 100%, 0)")],
        ));
        let lines = Emitter::new(&Swift, "Radix Colors").emit(&palette).unwrap();
        assert_eq!(lines[0], "    /// [Radix Colors] Collection: grayDarkA");
        assert_eq!(lines[2], "        Color(hsl: 0, 0.000, 1.000, 0.000),");
    }

    #[test]
    fn test_malformed_color_reports_location() {
        let palette = palette().with(Collection::new(
            "C",
            [("c1", "hsl(0, 0%, 1%)"), ("c2", "hsl(200, 50%)")],
        ));
        let err = Emitter::new(&Kotlin, "T").emit(&palette).unwrap_err();
        let EmitError::MalformedColor {
            collection,
            step,
            source,
        } = err;
        assert_eq!(collection, "C");
        assert_eq!(step, "c2");
        assert_eq!(source.input, "hsl(200, 50%)");
        assert_eq!(source.reason, MalformedReason::ComponentCount(2));
    }

    #[test]
    fn test_failed_collection_leaves_output_untouched() {
        let emitter = Emitter::new(&Kotlin, "T");
        let mut out = vec!["existing".to_string()];
        let bad = Collection::new("bad", [("ok", "hsl(0, 0%, 1%)"), ("x", "hsl(abc, 1%, 1%)")]);
        assert!(emitter.emit_collection(&bad, &mut out).is_err());
        assert_eq!(out, vec!["existing"]);
    }

    #[test]
    fn test_empty_collection_still_declared() {
        let palette = Palette::new().with(Collection::new("empty", Vec::<(String, String)>::new()));
        let lines = Emitter::new(&Kotlin, "T").emit(&palette).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "    )");
    }
}
