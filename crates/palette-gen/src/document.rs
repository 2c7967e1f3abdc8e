//! Generated file assembly.
//!
//! A [`Document`] is the emitted declaration lines wrapped in a fixed header
//! and footer. Both blocks come from per-target MiniJinja templates rendered
//! with a [`FrameContext`]; they carry no timestamps, so identical input always
//! produces identical bytes.

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::palette::Palette;
use crate::target::Target;

const HEADER: &str = "header";
const FOOTER: &str = "footer";

/// Values available to header and footer templates.
#[derive(Debug, Clone, Serialize)]
pub struct FrameContext {
    pub title: String,
    pub description: String,
    pub package: String,
    pub object_name: String,
    /// Name of the palette source, e.g. `radix.json`.
    pub source: String,
    pub version: String,
    pub collections: usize,
    pub colors: usize,
}

impl FrameContext {
    pub fn new(config: &GeneratorConfig, palette: &Palette, source: &str) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            package: config.package.clone(),
            object_name: config.object_name.clone(),
            source: source.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            collections: palette.len(),
            colors: palette.color_count(),
        }
    }
}

/// Header and footer templates for one target.
pub struct Frame {
    env: Environment<'static>,
}

impl Frame {
    /// Compiles the target's header and footer templates.
    pub fn new(target: &dyn Target) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.add_template(HEADER, target.header_template())?;
        env.add_template(FOOTER, target.footer_template())?;
        Ok(Self { env })
    }

    pub fn header(&self, ctx: &FrameContext) -> Result<String, minijinja::Error> {
        self.env.get_template(HEADER)?.render(ctx)
    }

    pub fn footer(&self, ctx: &FrameContext) -> Result<String, minijinja::Error> {
        self.env.get_template(FOOTER)?.render(ctx)
    }
}

/// A complete generated source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub header: String,
    pub lines: Vec<String>,
    pub footer: String,
}

impl Document {
    /// Header, then each line followed by `\n`, then footer.
    pub fn render(&self) -> String {
        let body: usize = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut out = String::with_capacity(self.header.len() + body + self.footer.len());
        out.push_str(&self.header);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&self.footer);
        out
    }
}
