use core::fmt::{self, Write};

use crate::table::TABLE_NAME;
use crate::{FormatError, Geometry, PRINTABLE};

const SEPARATOR_SMALL: [u8; 4] = [0x02, 0xFF, 0xFF, 0xFF];
const SEPARATOR_LARGE: [u8; 4] = [0x05, 0xFF, 0xFF, 0xFF];

/// Separator bytes firmware expects between glyphs of a known format.
pub fn separator_for(geometry: &Geometry) -> Option<&'static [u8]> {
    if *geometry == Geometry::SMALL {
        Some(&SEPARATOR_SMALL)
    } else if *geometry == Geometry::LARGE {
        Some(&SEPARATOR_LARGE)
    } else {
        None
    }
}

/// Streams a generated font table as C++ source.
///
/// ```text
/// extern "C" const uint8_t font_data[95][16] = {
///     {0x00, 0x00, ...}, // 0x20 ' '
/// };
/// ```
pub struct SourceWriter<W> {
    out: W,
    glyph_len: usize,
}

impl<W: Write> SourceWriter<W> {
    /// Write the preamble and open a table of `glyph_count` glyphs.
    pub fn new(mut out: W, geometry: &Geometry, glyph_count: usize) -> Result<Self, fmt::Error> {
        let glyph_len = geometry.glyph_len();
        writeln!(
            out,
            "// Generated font data: {}x{} pixels, {} bytes per character\n",
            geometry.width, geometry.height, glyph_len
        )?;
        out.write_str("#include <stdint.h>\n\n")?;

        if let Some(separator) = separator_for(geometry) {
            out.write_str("// Separator bytes between characters\n")?;
            writeln!(out, "extern \"C\" const uint32_t BITMAP_SIZE = {};", glyph_len)?;
            writeln!(
                out,
                "extern \"C\" const uint32_t SEPARATOR_LEN = {};",
                separator.len()
            )?;
            write!(out, "extern \"C\" const uint8_t separator[{}] = {{", separator.len())?;
            write_bytes(&mut out, separator)?;
            out.write_str("};\n\n")?;
        }

        writeln!(
            out,
            "extern \"C\" const uint8_t {}[{}][{}] = {{",
            TABLE_NAME, glyph_count, glyph_len
        )?;
        Ok(Self { out, glyph_len })
    }

    /// Append one glyph entry, commented with its code point.
    pub fn glyph(&mut self, codepoint: u32, bytes: &[u8]) -> Result<(), EmitError> {
        if bytes.len() != self.glyph_len {
            return Err(EmitError::Format(FormatError::LengthMismatch {
                expected: self.glyph_len,
                actual: bytes.len(),
            }));
        }
        self.out.write_str("    {")?;
        write_bytes(&mut self.out, bytes)?;
        write!(self.out, "}}, // 0x{:02X}", codepoint)?;
        match char::from_u32(codepoint) {
            Some(c) if PRINTABLE.contains(&codepoint) => writeln!(self.out, " '{}'", c)?,
            _ => self.out.write_char('\n')?,
        }
        Ok(())
    }

    /// Close the table and hand back the writer.
    pub fn finish(mut self) -> Result<W, fmt::Error> {
        self.out.write_str("};\n")?;
        Ok(self.out)
    }
}

fn write_bytes<W: Write>(out: &mut W, bytes: &[u8]) -> fmt::Result {
    for (i, byte) in bytes.iter().enumerate() {
        if i != 0 {
            out.write_str(", ")?;
        }
        write!(out, "0x{:02X}", byte)?;
    }
    Ok(())
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EmitError {
    Format(FormatError),
    /// The underlying writer failed
    Write,
}

impl From<fmt::Error> for EmitError {
    fn from(_: fmt::Error) -> Self {
        EmitError::Write
    }
}

impl From<FormatError> for EmitError {
    fn from(x: FormatError) -> Self {
        EmitError::Format(x)
    }
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match *self {
            EmitError::Format(ref e) => fmt::Display::fmt(e, f),
            EmitError::Write => f.pad("failed to write font source"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EmitError {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::string::String;

    use super::*;
    use crate::Table;

    #[test]
    fn small_format() {
        let mut writer = SourceWriter::new(String::new(), &Geometry::SMALL, 2).unwrap();
        writer.glyph(0x20, &[0; 16]).unwrap();
        let mut a = [0u8; 16];
        a[3] = 0x3C;
        writer.glyph(0x41, &a).unwrap();
        let text = writer.finish().unwrap();

        let zeros = ["0x00"; 16].join(", ");
        let expected = std::format!(
            "// Generated font data: 8x16 pixels, 16 bytes per character\n\
             \n\
             #include <stdint.h>\n\
             \n\
             // Separator bytes between characters\n\
             extern \"C\" const uint32_t BITMAP_SIZE = 16;\n\
             extern \"C\" const uint32_t SEPARATOR_LEN = 4;\n\
             extern \"C\" const uint8_t separator[4] = {{0x02, 0xFF, 0xFF, 0xFF}};\n\
             \n\
             extern \"C\" const uint8_t font_data[2][16] = {{\n    \
             {{{zeros}}}, // 0x20 ' '\n    \
             {{0x00, 0x00, 0x00, 0x3C, {rest}}}, // 0x41 'A'\n\
             }};\n",
            zeros = zeros,
            rest = ["0x00"; 12].join(", "),
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn large_separator() {
        let text = SourceWriter::new(String::new(), &Geometry::LARGE, 95)
            .unwrap()
            .finish()
            .unwrap();
        assert!(text.contains("BITMAP_SIZE = 64;"));
        assert!(text.contains("separator[4] = {0x05, 0xFF, 0xFF, 0xFF};"));
        assert!(text.contains("font_data[95][64] = {\n};\n"));
    }

    #[test]
    fn other_sizes_skip_separator() {
        let text = SourceWriter::new(String::new(), &Geometry::new(6, 12), 1)
            .unwrap()
            .finish()
            .unwrap();
        assert!(!text.contains("separator"));
        assert!(text.contains("font_data[1][12]"));
    }

    #[test]
    fn non_printable_comment() {
        let mut writer = SourceWriter::new(String::new(), &Geometry::new(8, 1), 1).unwrap();
        writer.glyph(0x7F, &[0xA5]).unwrap();
        assert!(writer.finish().unwrap().ends_with("{0xA5}, // 0x7F\n};\n"));
    }

    #[test]
    fn wrong_length() {
        let mut writer = SourceWriter::new(String::new(), &Geometry::SMALL, 1).unwrap();
        assert_eq!(
            writer.glyph(0x20, &[0; 15]),
            Err(EmitError::Format(FormatError::LengthMismatch {
                expected: 16,
                actual: 15
            }))
        );
    }

    #[test]
    fn parses_back() {
        let geometry = Geometry::LARGE;
        let mut writer = SourceWriter::new(String::new(), &geometry, 3).unwrap();
        let glyphs = [[0x11u8; 64], [0x22; 64], [0x33; 64]];
        for (codepoint, glyph) in (0x20..).zip(&glyphs) {
            writer.glyph(codepoint, glyph).unwrap();
        }
        let table = Table::parse(&writer.finish().unwrap()).unwrap();
        assert_eq!(table.declaration().name, "font_data");
        assert_eq!(table.len(), 3);
        assert!(table.iter().eq(glyphs.iter().map(|g| &g[..])));
    }
}
