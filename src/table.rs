use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::ops::Range;
use core::str::Chars;

use log::{debug, warn};

use crate::lexer::{Lexer, Spanned, Token};
use crate::{FormatError, Selection, FIRST_CODEPOINT};

/// Name of the table the generator writes, preferred over other arrays.
pub(crate) const TABLE_NAME: &str = "font_data";

/// A `name[COUNT][BYTES]` array declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub glyph_count: usize,
    pub glyph_len: usize,
}

impl Declaration {
    /// Find the glyph table's declaration in C source.
    ///
    /// This is the declaration [`Table::parse`] reads, or failing that the
    /// first two-dimensional array declaration of any kind.
    pub fn scan(src: &str) -> Result<Self, FormatError> {
        let (first, defined) = Self::locate(src);
        defined
            .map(|(decl, _)| decl)
            .or(first)
            .ok_or(FormatError::DeclarationNotFound)
    }

    /// Returns the first declaration, and the declaration whose `= {`
    /// initializer to parse along with the tokens inside it. A
    /// `font_data` array wins over any other; otherwise the first with an
    /// initializer. Prototypes without one are passed over.
    fn locate(src: &str) -> (Option<Self>, Option<(Self, Lexer<'_>)>) {
        let mut first = None;
        let mut defined: Option<(Self, Lexer<'_>)> = None;
        let mut lexer = Lexer::new(src);
        while let Some((decl, rest)) = Self::find(lexer) {
            let mut body = rest.clone();
            if opens_initializer(&mut body) {
                if decl.name == TABLE_NAME {
                    return (first.or_else(|| Some(decl.clone())), Some((decl, body)));
                }
                if defined.is_none() {
                    defined = Some((decl.clone(), body));
                }
            } else {
                debug!("skipping {}, it has no initializer", decl.name);
            }
            if first.is_none() {
                first = Some(decl);
            }
            lexer = rest;
        }
        (first, defined)
    }

    /// Returns the declaration and the tokens following it.
    fn find(mut lexer: Lexer<'_>) -> Option<(Self, Lexer<'_>)> {
        loop {
            let Token::Ident(name) = lexer.next()?.token else {
                continue;
            };
            let mut ahead = lexer.clone();
            if let (Some(glyph_count), Some(glyph_len)) = (dimension(&mut ahead), dimension(&mut ahead)) {
                let decl = Self {
                    name: name.to_string(),
                    glyph_count,
                    glyph_len,
                };
                return Some((decl, ahead));
            }
        }
    }
}

/// `= {`
fn opens_initializer(lexer: &mut Lexer<'_>) -> bool {
    let mut next = || lexer.next().map(|t| t.token);
    (next(), next()) == (Some(Token::Punct('=')), Some(Token::Punct('{')))
}

/// `[N]`
fn dimension(lexer: &mut Lexer<'_>) -> Option<usize> {
    let mut next = || lexer.next().map(|t| t.token);
    match (next()?, next()?, next()?) {
        (Token::Punct('['), Token::Number(Some(n)), Token::Punct(']')) => usize::try_from(n).ok(),
        _ => None,
    }
}

/// Glyphs parsed from a generated array literal, all the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    data: Vec<u8>,
    glyph_len: usize,
    declaration: Declaration,
}

impl Table {
    /// Scan for the table's declaration and parse its initializer.
    pub fn parse(src: &str) -> Result<Self, FormatError> {
        match Declaration::locate(src) {
            (_, Some((declaration, body))) => Self::parse_body(body, declaration),
            (Some(_), None) => Err(FormatError::BodyNotFound),
            (None, None) => Err(FormatError::DeclarationNotFound),
        }
    }

    /// Build a table directly from glyphs of `glyph_len` bytes each.
    pub fn from_glyphs<I, G>(glyph_len: usize, glyphs: I) -> Result<Self, FormatError>
    where
        I: IntoIterator<Item = G>,
        G: AsRef<[u8]>,
    {
        let mut data = Vec::new();
        for glyph in glyphs {
            let glyph = glyph.as_ref();
            if glyph.len() != glyph_len {
                return Err(FormatError::LengthMismatch {
                    expected: glyph_len,
                    actual: glyph.len(),
                });
            }
            data.extend_from_slice(glyph);
        }
        if data.is_empty() {
            return Err(FormatError::NoGlyphs);
        }
        let declaration = Declaration {
            name: String::new(),
            glyph_count: data.len() / glyph_len,
            glyph_len,
        };
        Ok(Self {
            data,
            glyph_len,
            declaration,
        })
    }

    /// `tokens` starts just inside the outer brace.
    fn parse_body(mut tokens: Lexer<'_>, declaration: Declaration) -> Result<Self, FormatError> {
        let glyph_len = declaration.glyph_len;
        let mut data = Vec::with_capacity(declaration.glyph_count.saturating_mul(glyph_len));
        let mut group: Option<Group> = None;
        let mut depth = 1usize;
        loop {
            let Some(Spanned { token, line }) = tokens.next() else {
                return Err(FormatError::BodyNotFound);
            };
            match token {
                Token::Punct('{') => {
                    depth += 1;
                    if depth == 2 {
                        group = Some(Group::new(line));
                    }
                }
                Token::Punct('}') => {
                    depth -= 1;
                    if depth == 1 {
                        if let Some(group) = group.take() {
                            group.finish(glyph_len, &mut data);
                        }
                    } else if depth == 0 {
                        break;
                    }
                }
                Token::Number(n) => {
                    if let Some(ref mut group) = group {
                        group.push(n);
                    }
                }
                _ => {}
            }
        }
        if tokens.next().map(|t| t.token) != Some(Token::Punct(';')) {
            return Err(FormatError::BodyNotFound);
        }

        if data.is_empty() || glyph_len == 0 {
            return Err(FormatError::NoGlyphs);
        }
        let parsed = data.len() / glyph_len;
        if parsed != declaration.glyph_count {
            warn!(
                "{} declares {} glyphs, parsed {}",
                declaration.name, declaration.glyph_count, parsed
            );
        }
        Ok(Self {
            data,
            glyph_len,
            declaration,
        })
    }

    #[inline]
    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    /// Bytes per glyph.
    #[inline]
    pub fn glyph_len(&self) -> usize {
        self.glyph_len
    }

    /// Number of glyphs parsed.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.glyph_len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[u8]> {
        let start = index.checked_mul(self.glyph_len)?;
        self.data.get(start..start.checked_add(self.glyph_len)?)
    }

    /// Table index of a code point, if the table holds it.
    pub fn index_of(&self, codepoint: u32) -> Option<usize> {
        let index = usize::try_from(codepoint.checked_sub(FIRST_CODEPOINT)?).ok()?;
        (index < self.len()).then_some(index)
    }

    pub fn iter(&self) -> core::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.glyph_len)
    }

    /// Table indices of the code points `lo..=hi` the table holds.
    fn indices(&self, lo: u64, hi: u64) -> Range<usize> {
        let first = u64::from(FIRST_CODEPOINT);
        let len = u64::try_from(self.len()).unwrap_or(u64::MAX);
        let start = lo.saturating_sub(first).min(len);
        let end = hi
            .checked_sub(first)
            .map_or(0, |last| last.saturating_add(1).min(len));
        // both bounded by len
        start as usize..end.max(start) as usize
    }

    /// Selected `(index, bytes)` pairs, in selection order. Code points the
    /// table doesn't hold are skipped.
    pub fn select<'a>(&'a self, selection: &'a Selection) -> Select<'a> {
        let picks = match *selection {
            Selection::All => Picks::Indices(0..self.len()),
            Selection::Range(lo, hi) => Picks::Indices(self.indices(lo, hi)),
            Selection::Text(ref text) => Picks::Text(text.chars()),
        };
        Select { table: self, picks }
    }
}

/// One inner `{ ... }` group of the initializer.
struct Group {
    line: usize,
    values: Vec<u8>,
    /// Set once a token isn't a byte
    invalid: bool,
}

impl Group {
    fn new(line: usize) -> Self {
        Self {
            line,
            values: Vec::new(),
            invalid: false,
        }
    }

    fn push(&mut self, value: Option<u64>) {
        match value.and_then(|n| u8::try_from(n).ok()) {
            Some(byte) => self.values.push(byte),
            None => self.invalid = true,
        }
    }

    fn finish(self, glyph_len: usize, data: &mut Vec<u8>) {
        if self.invalid {
            debug!("line {}: discarding group with non-byte values", self.line);
        } else if self.values.len() != glyph_len {
            debug!(
                "line {}: discarding group of {} bytes, expected {}",
                self.line,
                self.values.len(),
                glyph_len
            );
        } else {
            data.extend_from_slice(&self.values);
        }
    }
}

enum Picks<'a> {
    Indices(Range<usize>),
    Text(Chars<'a>),
}

/// Iterator returned by [`Table::select`].
pub struct Select<'a> {
    table: &'a Table,
    picks: Picks<'a>,
}

impl<'a> Iterator for Select<'a> {
    type Item = (usize, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let index = match self.picks {
                Picks::Indices(ref mut range) => Some(range.next()?),
                Picks::Text(ref mut chars) => self.table.index_of(u32::from(chars.next()?)),
            };
            if let Some(glyph) = index.and_then(|i| Some((i, self.table.get(i)?))) {
                return Some(glyph);
            }
        }
    }
}
