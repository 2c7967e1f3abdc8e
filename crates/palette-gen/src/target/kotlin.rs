//! Kotlin / Jetpack Compose output.
//!
//! ```kotlin
//! /** [Radix Colors] Collection: gray */
//! @JvmStatic val gray: List<Color> = listOf(
//!     Color.hsl(0, 0.000, 0.990),
//! )
//! ```

use crate::color::HslColor;
use crate::palette::Collection;

use super::Target;

const HEADER: &str = include_str!("../../templates/kotlin/header.kt.jinja");
const FOOTER: &str = include_str!("../../templates/kotlin/footer.kt.jinja");

/// Declarations inside a Kotlin `object`, built with `Color.hsl`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kotlin;

impl Target for Kotlin {
    fn extension(&self) -> &'static str {
        "kt"
    }

    fn literal(&self, color: &HslColor) -> String {
        format!("Color.hsl({})", color.components().join(", "))
    }

    fn doc_line(&self, title: &str, collection: &Collection) -> String {
        format!("    /** [{}] Collection: {} */", title, collection.name())
    }

    fn declaration_line(&self, collection: &Collection) -> String {
        format!("    @JvmStatic val {}: List<Color> = listOf(", collection.name())
    }

    fn entry_line(&self, literal: &str) -> String {
        format!("        {},", literal)
    }

    fn closing_line(&self) -> String {
        "    )".to_string()
    }

    fn header_template(&self) -> &'static str {
        HEADER
    }

    fn footer_template(&self) -> &'static str {
        FOOTER
    }
}
