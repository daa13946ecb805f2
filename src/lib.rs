//! Packed monochrome glyph tables for firmware fonts.
//!
//! Glyphs are stored row-major, `ceil(width / 8)` bytes per row, and emitted as
//! a two-dimensional `uint8_t` array literal in C/C++ source. This crate
//! packs bitmaps into that form, writes the source text, and parses it back
//! for inspection.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitmap;
mod emit;
mod geometry;
mod glyph;
mod lexer;
mod listing;
mod pack;
mod select;
mod table;

#[cfg(feature = "std")]
pub mod input;
#[cfg(feature = "std")]
pub mod logger;
#[cfg(feature = "raster")]
mod raster;

pub use bitmap::Bitmap;
pub use emit::{separator_for, EmitError, SourceWriter};
pub use geometry::Geometry;
pub use glyph::{BitOrder, ByteOrder, ColumnIter, Glyph, Layout, RowIter};
pub use listing::{label, Listing, RenderOptions};
pub use pack::pack;
pub use select::Selection;
pub use table::{Declaration, Table};

#[cfg(feature = "raster")]
pub use raster::{RasterError, Rasterizer};

use core::ops::RangeInclusive;

/// Code point stored at index 0 of a parsed table.
pub const FIRST_CODEPOINT: u32 = 0x20;

/// Code points the generator emits glyphs for.
pub const PRINTABLE: RangeInclusive<u32> = 0x20..=0x7E;

/// Number of entries in a generated table.
pub const GLYPH_COUNT: usize = 0x7E - 0x20 + 1;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No `name[COUNT][BYTES]` declaration in the input
    DeclarationNotFound,
    /// Declaration found, but no `= { ... };` body follows it
    BodyNotFound,
    /// Glyph byte length with no known geometry
    UnsupportedGeometry(usize),
    /// Glyph byte length not divisible by the requested height
    IndivisibleGeometry { glyph_len: usize, height: usize },
    /// Requested width does not fit in the bytes available per row
    WidthOverflow { width: usize, bytes_per_row: usize },
    /// Glyphs zero pixels wide
    ZeroWidth,
    /// Body parsed, but no brace group had the declared length
    NoGlyphs,
    /// A glyph's byte count disagrees with its geometry
    LengthMismatch { expected: usize, actual: usize },
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error> {
        match *self {
            FormatError::DeclarationNotFound => {
                f.pad("couldn't find a two-dimensional array declaration")
            }
            FormatError::BodyNotFound => f.pad("couldn't find the glyph array body"),
            FormatError::UnsupportedGeometry(len) => write!(
                f,
                "unsupported glyph length {} bytes (expected 16 or 64, or pass --width/--height)",
                len
            ),
            FormatError::IndivisibleGeometry { glyph_len, height } => write!(
                f,
                "glyph length {} is not divisible by height {}",
                glyph_len, height
            ),
            FormatError::WidthOverflow {
                width,
                bytes_per_row,
            } => write!(
                f,
                "width {} does not fit in {} bytes per row",
                width, bytes_per_row
            ),
            FormatError::ZeroWidth => f.pad("glyph width must be at least 1"),
            FormatError::NoGlyphs => f.pad("parsed 0 glyphs"),
            FormatError::LengthMismatch { expected, actual } => write!(
                f,
                "glyph has {} bytes, expected {}",
                actual, expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {}
