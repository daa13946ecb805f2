use alloc::string::{String, ToString};

/// Which glyphs of a table to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every glyph, in table order
    All,
    /// Code points `lo..=hi`, saturated at `u64::MAX`
    Range(u64, u64),
    /// The code point of each character, in order, repeats included
    Text(String),
}

impl Selection {
    /// Interpret a selection argument.
    ///
    /// Nothing (or an empty string) selects everything. Two integers joined
    /// by a dash, each decimal or `0x` hex, select an inclusive range in
    /// either order. Anything else is literal text.
    pub fn parse(selection: Option<&str>) -> Self {
        let s = match selection {
            None | Some("") => return Selection::All,
            Some(s) => s,
        };
        match parse_range(s) {
            Some((a, b)) => Selection::Range(a.min(b), a.max(b)),
            None => Selection::Text(s.to_string()),
        }
    }
}

fn parse_range(s: &str) -> Option<(u64, u64)> {
    let (a, b) = s.split_once('-')?;
    Some((parse_int(a.trim())?, parse_int(b.trim())?))
}

/// Decimal or `0x` hex digits. Too-large values saturate.
fn parse_int(s: &str) -> Option<u64> {
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0u64, |n, c| {
        let digit = c.to_digit(radix)?;
        Some(n.saturating_mul(u64::from(radix)).saturating_add(u64::from(digit)))
    })
}
