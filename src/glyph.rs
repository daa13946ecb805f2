use crate::{Bitmap, FormatError, Geometry};

/// Which bit of a row maps to the left-most column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum BitOrder {
    /// Bit `width - 1` is column 0
    #[default]
    MsbLeft,
    /// Bit 0 is column 0
    LsbLeft,
}

/// How the bytes of a multi-byte row combine into one row value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// First byte is least significant
    Little,
    /// First byte is most significant
    Big,
}

impl ByteOrder {
    /// Guess for tables of unknown origin: big for single-byte rows, little
    /// otherwise.
    pub fn default_for(bytes_per_row: usize) -> Self {
        if bytes_per_row <= 1 {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    pub bit_order: BitOrder,
    pub byte_order: ByteOrder,
}

impl Layout {
    /// The layout `pack` produces.
    pub const PACKED: Self = Self {
        bit_order: BitOrder::LsbLeft,
        byte_order: ByteOrder::Little,
    };
}

/// One glyph's packed bytes, checked against its geometry.
#[derive(Debug, Copy, Clone)]
pub struct Glyph<'a> {
    data: &'a [u8],
    geometry: Geometry,
    layout: Layout,
}

impl<'a> Glyph<'a> {
    pub fn new(data: &'a [u8], geometry: Geometry, layout: Layout) -> Result<Self, FormatError> {
        geometry.check()?;
        let expected = geometry.glyph_len();
        if data.len() != expected {
            return Err(FormatError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            geometry,
            layout,
        })
    }

    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn rows(&self) -> RowIter<'a> {
        RowIter {
            data: self.data,
            bytes_per_row: self.geometry.bytes_per_row,
            width: self.geometry.width,
            layout: self.layout,
        }
    }

    pub fn to_bitmap(&self) -> Bitmap {
        // Rows always have `width` columns, so this can't be ragged
        Bitmap::from_rows(self.rows()).unwrap_or_else(|| {
            Bitmap::new(self.geometry.width, self.geometry.height)
        })
    }
}

#[derive(Clone)]
pub struct RowIter<'a> {
    data: &'a [u8],
    bytes_per_row: usize,
    width: usize,
    layout: Layout,
}

impl<'a> RowIter<'a> {
    #[inline]
    fn row(&self, data: &'a [u8]) -> ColumnIter<'a> {
        ColumnIter {
            data,
            column: 0,
            end: self.width,
            width: self.width,
            layout: self.layout,
        }
    }
}

impl<'a> Iterator for RowIter<'a> {
    type Item = ColumnIter<'a>;
    #[inline]
    fn next(&mut self) -> Option<ColumnIter<'a>> {
        if self.bytes_per_row == 0 || self.data.len() < self.bytes_per_row {
            return None;
        }
        let (next, rest) = self.data.split_at(self.bytes_per_row);
        self.data = rest;
        Some(self.row(next))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl ExactSizeIterator for RowIter<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.data.len().checked_div(self.bytes_per_row).unwrap_or(0)
    }
}

impl<'a> DoubleEndedIterator for RowIter<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<ColumnIter<'a>> {
        if self.bytes_per_row == 0 || self.data.len() < self.bytes_per_row {
            return None;
        }
        let (rest, next) = self.data.split_at(self.data.len() - self.bytes_per_row);
        self.data = rest;
        Some(self.row(next))
    }
}

/// Pixels of one row, left to right.
#[derive(Clone)]
pub struct ColumnIter<'a> {
    data: &'a [u8],
    column: usize,
    end: usize,
    width: usize,
    layout: Layout,
}

impl ColumnIter<'_> {
    /// Pixel at `column`, reading the row as one integer in `layout`.
    #[inline]
    fn pixel(&self, column: usize) -> bool {
        let bit = match self.layout.bit_order {
            BitOrder::MsbLeft => self.width - 1 - column,
            BitOrder::LsbLeft => column,
        };
        let byte = match self.layout.byte_order {
            ByteOrder::Little => bit >> 3,
            ByteOrder::Big => self.data.len() - 1 - (bit >> 3),
        };
        self.data[byte] & (1 << (bit & 7)) != 0
    }
}

impl Iterator for ColumnIter<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        if self.column >= self.end {
            return None;
        }
        let result = self.pixel(self.column);
        self.column += 1;
        Some(result)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl ExactSizeIterator for ColumnIter<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.end - self.column
    }
}

impl DoubleEndedIterator for ColumnIter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<bool> {
        if self.column >= self.end {
            return None;
        }
        self.end -= 1;
        Some(self.pixel(self.end))
    }
}
