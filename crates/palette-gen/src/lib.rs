//! # palette-gen
//!
//! Generates source files of color declarations from HSL palettes such as
//! [Radix Colors](https://www.radix-ui.com/colors).
//!
//! Input is an ordered map of collections, each an ordered map of step names
//! to `hsl(...)` / `hsla(...)` strings. Output is one source file per run with
//! one list-valued static member per collection, in Kotlin (Jetpack Compose)
//! or Swift (SwiftUI).
//!
//! ## Quick Start
//!
//! ```rust
//! use palette_gen::{generate, Collection, GeneratorConfig, MemorySink, Palette};
//!
//! let palette = Palette::new().with(Collection::new(
//!     "gray",
//!     [("gray1", "hsl(0, 0%, 99%)"), ("gray2", "hsl(0, 0%, 97.3%)")],
//! ));
//!
//! let mut sink = MemorySink::new();
//! let summary = generate(&palette, &GeneratorConfig::default(), "inline", &mut sink).unwrap();
//!
//! assert_eq!(summary.colors, 2);
//! assert!(sink.contents().contains("@JvmStatic val gray: List<Color> = listOf("));
//! assert!(sink.contents().contains("        Color.hsl(0, 0.000, 0.973),"));
//! ```
//!
//! ## Pipeline
//!
//! 1. [`HslColor::parse`] turns each raw string into a validated value
//! 2. [`Emitter`] walks the [`Palette`] and produces declaration lines through a [`Target`]
//! 3. [`Frame`] renders the fixed header and footer around those lines
//! 4. A [`Sink`] writes the resulting [`Document`]
//!
//! Nothing is written unless every color parsed.

pub mod color;
pub mod config;
pub mod document;
pub mod emit;
pub mod error;
pub mod palette;
pub mod sink;
pub mod target;

pub use color::HslColor;
pub use config::GeneratorConfig;
pub use document::{Document, Frame, FrameContext};
pub use emit::Emitter;
pub use error::{
    ConfigError, EmitError, Error, MalformedColorError, MalformedReason, PaletteError, Result,
    SinkError,
};
pub use palette::{Collection, Palette};
pub use sink::{FileSink, MemorySink, Sink, WriterSink};
pub use target::{Kotlin, Swift, Target, TargetLanguage, UnknownTarget};

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub collections: usize,
    pub colors: usize,
    /// Collections marked as dark-theme scales.
    pub dark_collections: usize,
    /// Collections marked as translucent scales.
    pub alpha_collections: usize,
}

impl Summary {
    pub fn of(palette: &Palette) -> Self {
        let collections = palette.collections();
        Self {
            collections: collections.len(),
            colors: palette.color_count(),
            dark_collections: collections.iter().filter(|c| c.is_dark()).count(),
            alpha_collections: collections.iter().filter(|c| c.is_alpha()).count(),
        }
    }
}

/// Builds the complete document for `palette` without writing it.
///
/// `source` names the palette origin in the generated banner.
pub fn build_document(
    palette: &Palette,
    config: &GeneratorConfig,
    source: &str,
) -> Result<Document> {
    let target = config.target.target();
    let lines = Emitter::new(target, &config.title).emit(palette)?;

    let frame = Frame::new(target)?;
    let ctx = FrameContext::new(config, palette, source);
    Ok(Document {
        header: frame.header(&ctx)?,
        lines,
        footer: frame.footer(&ctx)?,
    })
}

/// Generates the document for `palette` and writes it to `sink`.
///
/// The sink is only touched after every color parsed and both templates
/// rendered.
pub fn generate(
    palette: &Palette,
    config: &GeneratorConfig,
    source: &str,
    sink: &mut dyn Sink,
) -> Result<Summary> {
    let document = build_document(palette, config, source)?;
    sink.write_document(&document)?;

    let summary = Summary::of(palette);
    tracing::info!(
        "Generated {} collections ({} colors) as {}",
        summary.collections,
        summary.colors,
        config.target
    );
    Ok(summary)
}

/// Parses every color in `palette` without producing output.
pub fn check(palette: &Palette) -> std::result::Result<Summary, EmitError> {
    for collection in palette.collections() {
        for (step, raw) in collection.steps() {
            emit::parse_step(collection, step, raw)?;
        }
    }
    Ok(Summary::of(palette))
}
