use alloc::string::String;
use core::fmt::Write;

use crate::{BitOrder, Bitmap, ByteOrder, FormatError, Geometry, Glyph, Layout, Selection, Table};
use crate::{FIRST_CODEPOINT, PRINTABLE};

/// How to turn packed glyphs back into text.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Set pixel
    pub on: char,
    /// Clear pixel
    pub off: char,
    pub bit_order: BitOrder,
    /// `None` guesses from the row size; see [`ByteOrder::default_for`]
    pub byte_order: Option<ByteOrder>,
    /// Rotate 90° clockwise
    pub rotate: bool,
    pub width: Option<usize>,
    pub height: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            on: 'x',
            off: '-',
            bit_order: BitOrder::MsbLeft,
            byte_order: None,
            rotate: false,
            width: None,
            height: None,
        }
    }
}

impl RenderOptions {
    /// Geometry for glyphs of `glyph_len` bytes, honoring overrides.
    pub fn geometry(&self, glyph_len: usize) -> Result<Geometry, FormatError> {
        Geometry::resolve(glyph_len, self.width, self.height)
    }

    pub fn layout(&self, geometry: &Geometry) -> Layout {
        Layout {
            bit_order: self.bit_order,
            byte_order: self
                .byte_order
                .unwrap_or_else(|| ByteOrder::default_for(geometry.bytes_per_row)),
        }
    }
}

/// `0x41 'A'` for printable code points, `0x80` otherwise.
pub fn label(codepoint: u32) -> String {
    let mut out = String::new();
    // Writing to a String can't fail
    let _ = write!(out, "0x{:02X}", codepoint);
    if let Some(c) = char::from_u32(codepoint).filter(|_| PRINTABLE.contains(&codepoint)) {
        let _ = write!(out, " '{}'", c);
    }
    out
}

/// Renders selected glyphs of a table as labelled ASCII art.
#[derive(Debug, Clone)]
pub struct Listing {
    options: RenderOptions,
    geometry: Geometry,
    layout: Layout,
}

impl Listing {
    /// Resolves geometry and layout for `table` up front, so unsupported
    /// lengths fail before anything is printed.
    pub fn new(table: &Table, options: RenderOptions) -> Result<Self, FormatError> {
        let geometry = options.geometry(table.glyph_len())?;
        let layout = options.layout(&geometry);
        Ok(Self {
            options,
            geometry,
            layout,
        })
    }

    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Unpack one glyph, rotated if requested.
    pub fn bitmap(&self, bytes: &[u8]) -> Result<Bitmap, FormatError> {
        let bitmap = Glyph::new(bytes, self.geometry, self.layout)?.to_bitmap();
        Ok(if self.options.rotate {
            bitmap.rotate_cw()
        } else {
            bitmap
        })
    }

    /// Label line, pixel rows, then a blank line for each selected glyph.
    pub fn render(&self, table: &Table, selection: &Selection) -> Result<String, FormatError> {
        let mut out = String::new();
        for (index, bytes) in table.select(selection) {
            let bitmap = self.bitmap(bytes)?;
            let codepoint = u32::try_from(index)
                .ok()
                .and_then(|i| i.checked_add(FIRST_CODEPOINT))
                .unwrap_or(u32::MAX);
            out.push_str(&label(codepoint));
            out.push('\n');
            out.push_str(&bitmap.to_ascii(self.options.on, self.options.off));
            out.push_str("\n\n");
        }
        Ok(out)
    }
}
