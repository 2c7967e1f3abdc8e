//! Swift / SwiftUI output.
//!
//! SwiftUI has no HSL initializer, so the footer adds `Color(hsl:_:_:_:)`,
//! which converts to the HSB model SwiftUI understands.

use crate::color::HslColor;
use crate::palette::Collection;

use super::Target;

const HEADER: &str = include_str!("../../templates/swift/header.swift.jinja");
const FOOTER: &str = include_str!("../../templates/swift/footer.swift.jinja");

/// Static members of a Swift `enum` namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct Swift;

impl Target for Swift {
    fn extension(&self) -> &'static str {
        "swift"
    }

    fn literal(&self, color: &HslColor) -> String {
        format!("Color(hsl: {})", color.components().join(", "))
    }

    fn doc_line(&self, title: &str, collection: &Collection) -> String {
        format!("    /// [{}] Collection: {}", title, collection.name())
    }

    fn declaration_line(&self, collection: &Collection) -> String {
        format!("    public static let {}: [Color] = [", collection.name())
    }

    fn entry_line(&self, literal: &str) -> String {
        format!("        {},", literal)
    }

    fn closing_line(&self) -> String {
        "    ]".to_string()
    }

    fn header_template(&self) -> &'static str {
        HEADER
    }

    fn footer_template(&self) -> &'static str {
        FOOTER
    }
}
