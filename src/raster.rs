//! Glyph rasterization with fontdue.

use fontdue::{Font, FontSettings};
use log::trace;

use crate::{Bitmap, PRINTABLE};

/// Coverage at or above which a pixel counts as set.
const THRESHOLD: u8 = 128;

/// Renders single characters of one font at a fixed pixel size.
pub struct Rasterizer {
    font: Font,
    px: f32,
}

impl Rasterizer {
    /// Load a TrueType/OpenType font to render at `px` pixels per em.
    pub fn from_bytes(data: &[u8], px: f32) -> Result<Self, RasterError> {
        let settings = FontSettings {
            scale: px,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(data, settings).map_err(RasterError::Font)?;
        Ok(Self { font, px })
    }

    /// Draw `codepoint` onto a blank `width` × `height` canvas, centred on
    /// its ink bounding box.
    ///
    /// Non-printable code points stay blank, as do characters the font
    /// lacks (fontdue renders its empty notdef glyph for those).
    pub fn rasterize(&self, codepoint: u32, width: usize, height: usize) -> Bitmap {
        let mut bitmap = Bitmap::new(width, height);
        let Some(c) = printable(codepoint) else {
            return bitmap;
        };
        let (metrics, coverage) = self.font.rasterize(c, self.px);
        if self.font.lookup_glyph_index(c) == 0 {
            trace!("{:?} missing from font", c);
        }
        place(&mut bitmap, &coverage, metrics.width);
        bitmap
    }
}

fn printable(codepoint: u32) -> Option<char> {
    char::from_u32(codepoint).filter(|_| PRINTABLE.contains(&codepoint))
}

/// Threshold a `glyph_width`-wide coverage map onto the middle of `canvas`.
///
/// Offsets use floor division, so oversized glyphs clip evenly on both
/// sides.
fn place(canvas: &mut Bitmap, coverage: &[u8], glyph_width: usize) {
    if glyph_width == 0 {
        return;
    }
    let glyph_height = coverage.len() / glyph_width;
    let x0 = (canvas.width() as i64 - glyph_width as i64).div_euclid(2);
    let y0 = (canvas.height() as i64 - glyph_height as i64).div_euclid(2);
    for (gy, row) in coverage.chunks_exact(glyph_width).enumerate() {
        for (gx, &value) in row.iter().enumerate() {
            if value < THRESHOLD {
                continue;
            }
            let (x, y) = (x0 + gx as i64, y0 + gy as i64);
            if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
                canvas.set(x, y, true);
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// fontdue rejected the font data
    Font(&'static str),
}

impl std::fmt::Display for RasterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match *self {
            RasterError::Font(msg) => write!(f, "couldn't load font: {}", msg),
        }
    }
}

impl std::error::Error for RasterError {}
