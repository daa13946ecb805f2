use alloc::vec::Vec;

use crate::Bitmap;

/// Pack a bitmap row by row.
///
/// Pixels fill each byte starting at the least significant bit, left to right.
/// A byte is flushed after eight pixels or at the end of a row, so rows whose
/// width isn't a multiple of eight end in a byte with zeroed high bits. The
/// result is `height * ceil(width / 8)` bytes long.
pub fn pack(bitmap: &Bitmap) -> Vec<u8> {
    let bytes_per_row = (bitmap.width() + 7) / 8;
    let mut out = Vec::with_capacity(bytes_per_row * bitmap.height());
    for row in bitmap.rows() {
        let mut byte = 0u8;
        let mut bit = 0;
        for (x, &pixel) in row.iter().enumerate() {
            byte |= (pixel as u8) << bit;
            bit += 1;
            if bit == 8 || x == row.len() - 1 {
                out.push(byte);
                byte = 0;
                bit = 0;
            }
        }
    }
    out
}
