use crate::FormatError;

/// Pixel dimensions of every glyph in a table, and how many bytes each row
/// occupies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Geometry {
    pub width: usize,
    pub height: usize,
    pub bytes_per_row: usize,
}

impl Geometry {
    pub const SMALL: Self = Self::new(8, 16);
    pub const LARGE: Self = Self::new(16, 32);

    /// Geometry for a `width` × `height` glyph packed at `ceil(width / 8)`
    /// bytes per row.
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bytes_per_row: (width + 7) / 8,
        }
    }

    /// Bytes per glyph.
    #[inline]
    pub fn glyph_len(&self) -> usize {
        self.bytes_per_row * self.height
    }

    /// Known geometry for a declared glyph length.
    pub fn infer(glyph_len: usize) -> Result<Self, FormatError> {
        match glyph_len {
            16 => Ok(Self::SMALL),
            64 => Ok(Self::LARGE),
            _ => Err(FormatError::UnsupportedGeometry(glyph_len)),
        }
    }

    /// Infer geometry, honoring explicit dimensions.
    ///
    /// With a height, `bytes_per_row` is `glyph_len / height` and must divide
    /// evenly; the width then defaults to every bit of the row. A width on its
    /// own keeps the inferred height.
    pub fn resolve(
        glyph_len: usize,
        width: Option<usize>,
        height: Option<usize>,
    ) -> Result<Self, FormatError> {
        let result = match height {
            None => {
                let inferred = Self::infer(glyph_len)?;
                Self {
                    width: width.unwrap_or(inferred.width),
                    ..inferred
                }
            }
            Some(height) => {
                if height == 0 || glyph_len % height != 0 {
                    return Err(FormatError::IndivisibleGeometry { glyph_len, height });
                }
                let bytes_per_row = glyph_len / height;
                Self {
                    width: width.unwrap_or(bytes_per_row * 8),
                    height,
                    bytes_per_row,
                }
            }
        };
        result.check()?;
        Ok(result)
    }

    /// Every column needs a bit of the row.
    pub fn check(&self) -> Result<(), FormatError> {
        if self.width == 0 {
            return Err(FormatError::ZeroWidth);
        }
        if self.width > self.bytes_per_row.saturating_mul(8) {
            return Err(FormatError::WidthOverflow {
                width: self.width,
                bytes_per_row: self.bytes_per_row,
            });
        }
        Ok(())
    }
}
