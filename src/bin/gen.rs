//! Rasterize a font into a packed C++ glyph table.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use packfont::{logger, pack, Geometry, Rasterizer, SourceWriter, GLYPH_COUNT, PRINTABLE};

#[derive(Parser)]
#[command(about = "Generate a packed bitmap font table from a TrueType/OpenType font")]
struct Args {
    /// Font file to rasterize
    #[arg(long, short = 'f')]
    font: PathBuf,
    /// Glyph width in pixels
    #[arg(long, default_value_t = 16)]
    width: usize,
    /// Glyph height in pixels
    #[arg(long, default_value_t = 32)]
    height: usize,
    /// Font size in pixels per em
    #[arg(long, default_value_t = 20.0)]
    size: f32,
    /// Output file [default: font-WIDTHxHEIGHT.cpp]
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
    /// More logging; repeat for more
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
    /// No logging
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(logger::level_for(args.verbose, args.quiet))?;

    let geometry = Geometry::new(args.width, args.height);
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("font-{}x{}.cpp", args.width, args.height)));

    let data = fs::read(&args.font)
        .with_context(|| format!("couldn't read font {}", args.font.display()))?;
    let rasterizer = Rasterizer::from_bytes(&data, args.size)
        .with_context(|| format!("couldn't load font {}", args.font.display()))?;
    info!(
        "rasterizing {} at {}px into {}x{} glyphs",
        args.font.display(),
        args.size,
        geometry.width,
        geometry.height
    );

    let mut writer = SourceWriter::new(String::new(), &geometry, GLYPH_COUNT)?;
    for codepoint in 0x00..=0xFFu32 {
        if !PRINTABLE.contains(&codepoint) {
            continue;
        }
        let bitmap = rasterizer.rasterize(codepoint, geometry.width, geometry.height);
        if bitmap.is_blank() {
            debug!("0x{:02X} is blank", codepoint);
        }
        writer.glyph(codepoint, &pack(&bitmap))?;
    }
    let text = writer.finish()?;

    fs::write(&output, text).with_context(|| format!("couldn't write {}", output.display()))?;
    println!("Font data written to {}", output.display());
    Ok(())
}
