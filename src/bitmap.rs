use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// A width × height grid of monochrome pixels, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl Bitmap {
    /// A blank bitmap.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    /// Build from rows of pixels. Returns `None` if the rows are ragged.
    pub fn from_rows<R, C>(rows: R) -> Option<Self>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = bool>,
    {
        let mut pixels = Vec::new();
        let mut width = None;
        let mut height = 0;
        for row in rows {
            let start = pixels.len();
            pixels.extend(row);
            let len = pixels.len() - start;
            if *width.get_or_insert(len) != len {
                return None;
            }
            height += 1;
        }
        Some(Self {
            width: width.unwrap_or(0),
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at column `x`, row `y`; `false` outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x]
    }

    /// Set a pixel. Coordinates outside the grid are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = value;
        }
    }

    pub fn is_blank(&self) -> bool {
        !self.pixels.iter().any(|&p| p)
    }

    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[bool]> + '_ {
        // `chunks` panics on 0; a zero-width grid has no pixels anyway
        self.pixels.chunks(self.width.max(1))
    }

    /// Rotate 90° clockwise. The result is `height` wide and `width` tall.
    pub fn rotate_cw(&self) -> Self {
        let mut out = Self::new(self.height, self.width);
        for y in 0..out.height {
            for x in 0..out.width {
                out.pixels[y * out.width + x] = self.get(y, self.height - 1 - x);
            }
        }
        out
    }

    /// One line per row, `on` for set pixels and `off` for clear ones.
    pub fn to_ascii(&self, on: char, off: char) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (i, row) in self.rows().enumerate() {
            if i != 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(|&p| if p { on } else { off }));
        }
        out
    }
}
