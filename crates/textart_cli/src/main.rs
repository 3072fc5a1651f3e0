use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use textart_render::{RenderMode, RenderOptions, TextArtRenderer, TextGrid};

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert images to ASCII, dot, or block text art")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render text art to stdout for a quick preview
    Preview(PreviewArgs),
    /// Render text art and write the result to disk
    Convert(ConvertArgs),
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input image path
    input: PathBuf,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input image path
    input: PathBuf,
    /// Output file path
    #[arg(short, long)]
    output: PathBuf,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug, Clone)]
struct RenderSettings {
    /// Rendering mode
    #[arg(long, value_enum, default_value = "ascii")]
    mode: ModeChoice,
    /// Upper bound for the internal canvas on either axis
    #[arg(long, default_value_t = 300)]
    max_dimension: u32,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ModeChoice {
    Ascii,
    Dot,
    Pixel,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Preview(args) => preview(args),
        Commands::Convert(args) => convert(args),
    }
}

fn preview(args: PreviewArgs) -> Result<()> {
    let grid = render(&args.input, &args.settings)?;
    for row in grid.lines() {
        println!("{}", row);
    }
    Ok(())
}

fn convert(args: ConvertArgs) -> Result<()> {
    let grid = render(&args.input, &args.settings)?;
    let mut file = File::create(&args.output)
        .with_context(|| format!("failed to create {:?}", args.output))?;
    for row in grid.lines() {
        writeln!(file, "{}", row)?;
    }
    Ok(())
}

fn render(input: &Path, settings: &RenderSettings) -> Result<TextGrid> {
    let renderer = TextArtRenderer::new(settings.to_options());
    renderer
        .render_path(input, settings.mode.to_mode())
        .with_context(|| format!("failed to render {:?}", input))
}

impl RenderSettings {
    fn to_options(&self) -> RenderOptions {
        let mut options = RenderOptions::default();
        options.max_dimension = self.max_dimension.max(1);
        options
    }
}

impl ModeChoice {
    fn to_mode(self) -> RenderMode {
        match self {
            ModeChoice::Ascii => RenderMode::Ascii,
            ModeChoice::Dot => RenderMode::Dot,
            ModeChoice::Pixel => RenderMode::Pixel,
        }
    }
}
