//! Print the glyphs of a generated font table as ASCII art.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use packfont::input::{resolve_input, DEFAULT_CANDIDATES};
use packfont::{logger, BitOrder, ByteOrder, Listing, RenderOptions, Selection, Table};

#[derive(Copy, Clone, ValueEnum)]
enum Endian {
    Little,
    Big,
}

impl From<Endian> for ByteOrder {
    fn from(x: Endian) -> Self {
        match x {
            Endian::Little => ByteOrder::Little,
            Endian::Big => ByteOrder::Big,
        }
    }
}

#[derive(Parser)]
#[command(about = "Render a packed bitmap font table as ASCII art")]
struct Args {
    /// Generated C++ font file [default: first of font-8x16.cpp,
    /// source/font-8x16.cpp, font-16x32.cpp, source/font-16x32.cpp that exists]
    #[arg(long, short = 'f')]
    font: Option<PathBuf>,
    /// Text to render (e.g. "Hello") or a code point range (e.g. "0x41-0x5A");
    /// everything if omitted
    #[arg(long, short = 's')]
    select: Option<String>,
    /// Character for set pixels
    #[arg(long, default_value_t = 'x')]
    on: char,
    /// Character for unset pixels
    #[arg(long, default_value_t = '-')]
    off: char,
    /// Treat bit 0 as the left-most pixel
    #[arg(long)]
    lsb_left: bool,
    /// Rotate output 90° clockwise
    #[arg(long)]
    rotate: bool,
    /// Glyph width in pixels, instead of inferring it
    #[arg(long)]
    width: Option<usize>,
    /// Glyph height in pixels, instead of inferring it
    #[arg(long)]
    height: Option<usize>,
    /// Byte order of multi-byte rows [default: big for 1-byte rows, else little]
    #[arg(long, value_enum)]
    endian: Option<Endian>,
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

    let path = match args.font {
        Some(path) => path,
        None => resolve_input(DEFAULT_CANDIDATES, Path::exists)
            .context("no font file given")?,
    };
    let text = fs::read(&path).with_context(|| format!("couldn't read {}", path.display()))?;
    let text = String::from_utf8_lossy(&text);

    let table = Table::parse(&text).with_context(|| format!("in {}", path.display()))?;
    let options = RenderOptions {
        on: args.on,
        off: args.off,
        bit_order: if args.lsb_left {
            BitOrder::LsbLeft
        } else {
            BitOrder::MsbLeft
        },
        byte_order: args.endian.map(ByteOrder::from),
        rotate: args.rotate,
        width: args.width,
        height: args.height,
    };
    let listing = Listing::new(&table, options)?;
    let geometry = listing.geometry();
    info!(
        "{}: {} glyphs of {}x{}, {} bytes per row, {:?}",
        path.display(),
        table.len(),
        geometry.width,
        geometry.height,
        geometry.bytes_per_row,
        listing.layout()
    );

    let selection = Selection::parse(args.select.as_deref());
    let out = listing.render(&table, &selection)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
