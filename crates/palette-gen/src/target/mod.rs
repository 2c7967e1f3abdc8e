//! Output language dialects.
//!
//! A [`Target`] knows how one language spells a color literal, a list-valued
//! static member, and the fixed blocks around the generated declarations.
//! [`TargetLanguage`] is the serializable selector used by configuration and
//! the command line.

mod kotlin;
mod swift;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::HslColor;
use crate::palette::Collection;

pub use kotlin::Kotlin;
pub use swift::Swift;

/// Language-specific syntax for generated declarations.
///
/// Every method returns one complete line without a trailing newline.
pub trait Target {
    /// File extension without the dot.
    fn extension(&self) -> &'static str;

    /// Constructor call for one color.
    fn literal(&self, color: &HslColor) -> String;

    /// Documentation comment naming the collection.
    fn doc_line(&self, title: &str, collection: &Collection) -> String;

    /// Opening line of the list-valued member.
    fn declaration_line(&self, collection: &Collection) -> String;

    /// One list element, indented and followed by the separator.
    fn entry_line(&self, literal: &str) -> String;

    /// Line terminating the declaration.
    fn closing_line(&self) -> String;

    /// MiniJinja source for the block written before the declarations.
    fn header_template(&self) -> &'static str;

    /// MiniJinja source for the block written after the declarations.
    fn footer_template(&self) -> &'static str;
}

/// Supported output languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    /// Kotlin for Jetpack Compose.
    #[default]
    Kotlin,
    /// Swift for SwiftUI.
    Swift,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 2] = [TargetLanguage::Kotlin, TargetLanguage::Swift];

    pub fn name(self) -> &'static str {
        match self {
            TargetLanguage::Kotlin => "kotlin",
            TargetLanguage::Swift => "swift",
        }
    }

    /// The dialect implementing this language.
    pub fn target(self) -> &'static dyn Target {
        match self {
            TargetLanguage::Kotlin => &Kotlin,
            TargetLanguage::Swift => &Swift,
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a target name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown target '{0}' (expected one of: kotlin, swift)")]
pub struct UnknownTarget(pub String);

impl FromStr for TargetLanguage {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kotlin" | "kt" => Ok(TargetLanguage::Kotlin),
            "swift" => Ok(TargetLanguage::Swift),
            _ => Err(UnknownTarget(s.to_string())),
        }
    }
}
