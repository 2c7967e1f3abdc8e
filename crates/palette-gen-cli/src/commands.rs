//! Subcommands.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::style;
use palette_gen::{
    check, generate, FileSink, GeneratorConfig, Palette, Summary, TargetLanguage, WriterSink,
};

#[derive(Subcommand)]
pub enum Commands {
    /// Write the generated source file
    Generate(GenerateArgs),

    /// Parse every color without writing anything
    Check {
        /// Palette file (.json, .yaml or .yml)
        palette: PathBuf,
    },

    /// List collections with their step counts and markers
    List {
        /// Palette file (.json, .yaml or .yml)
        palette: PathBuf,
    },
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Palette file (.json, .yaml or .yml)
    palette: PathBuf,

    /// Generator config file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output language
    #[arg(short, long)]
    target: Option<TargetLanguage>,

    /// Output directory (created if missing)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Output file name inside the output directory
    #[arg(short, long)]
    file: Option<String>,

    /// Kotlin package name
    #[arg(long)]
    package: Option<String>,

    /// Name of the generated object / enum
    #[arg(long)]
    object: Option<String>,

    /// Label used in generated doc comments
    #[arg(long)]
    title: Option<String>,

    /// Print the generated file instead of writing it
    #[arg(long)]
    stdout: bool,
}

impl GenerateArgs {
    /// Config file first, then flag overrides.
    fn config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_path(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        if let Some(target) = self.target {
            config.target = target;
        }
        if let Some(dir) = &self.out_dir {
            config.output_dir = dir.clone();
        }
        if let Some(file) = &self.file {
            config.output_file = Some(file.clone());
        }
        if let Some(package) = &self.package {
            config.package = package.clone();
        }
        if let Some(object) = &self.object {
            config.object_name = object.clone();
        }
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        Ok(config)
    }
}

impl Commands {
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Generate(args) => run_generate(&args),
            Commands::Check { palette } => run_check(&palette),
            Commands::List { palette } => run_list(&palette),
        }
    }
}

fn load_palette(path: &Path) -> Result<Palette> {
    Palette::from_path(path).with_context(|| format!("failed to load palette {}", path.display()))
}

/// File name of the palette, used in the generated banner.
fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn describe(summary: &Summary) -> String {
    format!(
        "{} collections, {} colors ({} dark, {} alpha)",
        summary.collections, summary.colors, summary.dark_collections, summary.alpha_collections
    )
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let palette = load_palette(&args.palette)?;
    let config = args.config()?;
    let source = source_name(&args.palette);

    if args.stdout {
        let mut sink = WriterSink::new(io::stdout().lock());
        let summary = generate(&palette, &config, &source, &mut sink)
            .with_context(|| format!("failed to generate from {}", args.palette.display()))?;
        eprintln!("{} {}", style("✓").green(), describe(&summary));
        return Ok(());
    }

    let path = config.output_path();
    let mut sink = FileSink::new(&path);
    let summary = generate(&palette, &config, &source, &mut sink)
        .with_context(|| format!("failed to generate from {}", args.palette.display()))?;

    println!(
        "{} Wrote {} ({})",
        style("✓").green(),
        style(path.display()).bold(),
        describe(&summary)
    );
    Ok(())
}

fn run_check(path: &Path) -> Result<()> {
    let palette = load_palette(path)?;
    let summary = check(&palette).with_context(|| format!("{} is invalid", path.display()))?;
    println!("{} {}: {}", style("✓").green(), path.display(), describe(&summary));
    Ok(())
}

fn run_list(path: &Path) -> Result<()> {
    let palette = load_palette(path)?;
    let width = palette
        .collections()
        .iter()
        .map(|c| c.name().len())
        .max()
        .unwrap_or(0);

    for collection in palette.collections() {
        let mut markers = Vec::new();
        if collection.is_dark() {
            markers.push("dark");
        }
        if collection.is_alpha() {
            markers.push("alpha");
        }
        println!(
            "{:<width$}  {:>3} steps  {}",
            collection.name(),
            collection.len(),
            style(markers.join(", ")).dim(),
            width = width
        );
    }
    Ok(())
}
