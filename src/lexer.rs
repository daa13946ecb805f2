//! Just enough of a C tokenizer to read array declarations and initializers.
//!
//! Comments and string/char literals are skipped, integers are decoded
//! (decimal or `0x` hex, with any `u`/`l` suffix), and every other
//! non-whitespace character is passed through as punctuation.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Ident(&'a str),
    /// An integer literal; `None` if it didn't fit or had stray characters
    Number(Option<u64>),
    Punct(char),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Spanned<'a> {
    pub token: Token<'a>,
    pub line: usize,
}

#[derive(Clone)]
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    #[inline]
    fn peek2(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos + 1).copied()
    }

    fn bump(&mut self) {
        if self.peek() == Some(b'\n') {
            self.line += 1;
        }
        self.pos += 1;
    }

    fn take_while(&mut self, f: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().map_or(false, &f) {
            self.bump();
        }
        &self.src[start..self.pos]
    }

    /// Skip whitespace and comments.
    fn skip_trivia(&mut self) {
        loop {
            match (self.peek(), self.peek2()) {
                (Some(c), _) if c.is_ascii_whitespace() => self.bump(),
                (Some(b'/'), Some(b'/')) => {
                    self.take_while(|c| c != b'\n');
                }
                (Some(b'/'), Some(b'*')) => {
                    self.pos += 2;
                    while self.peek().is_some() && !(self.peek() == Some(b'*') && self.peek2() == Some(b'/')) {
                        self.bump();
                    }
                    // Unterminated comments run to end of input
                    self.pos = (self.pos + 2).min(self.src.len());
                }
                _ => return,
            }
        }
    }

    /// Skip a quoted literal, honoring backslash escapes.
    fn skip_quoted(&mut self, quote: u8) {
        self.bump();
        while let Some(c) = self.peek() {
            match c {
                b'\\' => {
                    self.bump();
                    if self.peek().is_some() {
                        self.bump();
                    }
                }
                b'\n' => return,
                c if c == quote => {
                    self.bump();
                    return;
                }
                _ => self.bump(),
            }
        }
    }
}

fn number(text: &str) -> Option<u64> {
    let digits = text.trim_end_matches(|c| matches!(c, 'u' | 'U' | 'l' | 'L'));
    match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => digits.parse().ok(),
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Spanned<'a>;

    fn next(&mut self) -> Option<Spanned<'a>> {
        loop {
            self.skip_trivia();
            let line = self.line;
            let c = self.peek()?;
            let token = match c {
                b'"' | b'\'' => {
                    self.skip_quoted(c);
                    continue;
                }
                b'0'..=b'9' => Token::Number(number(
                    self.take_while(|c| c.is_ascii_alphanumeric() || c == b'_'),
                )),
                c if c.is_ascii_alphabetic() || c == b'_' => {
                    Token::Ident(self.take_while(|c| c.is_ascii_alphanumeric() || c == b'_'))
                }
                _ => {
                    // Advance over the whole (possibly multi-byte) character
                    let ch = self.src[self.pos..].chars().next()?;
                    self.pos += ch.len_utf8();
                    Token::Punct(ch)
                }
            };
            return Some(Spanned { token, line });
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::vec::Vec;

    use super::*;

    fn tokens(src: &str) -> Vec<Token<'_>> {
        Lexer::new(src).map(|t| t.token).collect()
    }

    #[test]
    fn declaration() {
        assert_eq!(
            tokens(r#"extern "C" const uint8_t font_data[95][16] = {"#),
            &[
                Token::Ident("extern"),
                Token::Ident("const"),
                Token::Ident("uint8_t"),
                Token::Ident("font_data"),
                Token::Punct('['),
                Token::Number(Some(95)),
                Token::Punct(']'),
                Token::Punct('['),
                Token::Number(Some(16)),
                Token::Punct(']'),
                Token::Punct('='),
                Token::Punct('{'),
            ]
        );
    }

    #[test]
    fn numbers() {
        assert_eq!(
            tokens("0x1F, 0XaB 42u 7UL 0xZZ"),
            &[
                Token::Number(Some(0x1F)),
                Token::Punct(','),
                Token::Number(Some(0xAB)),
                Token::Number(Some(42)),
                Token::Number(Some(7)),
                Token::Number(None),
            ]
        );
    }

    #[test]
    fn comments_skipped() {
        let src = "{0x01}, // 0x27 '''\n/* { 1, 2 } */ {0x02}, // 0x5C '\\'\n";
        assert_eq!(
            tokens(src),
            &[
                Token::Punct('{'),
                Token::Number(Some(1)),
                Token::Punct('}'),
                Token::Punct(','),
                Token::Punct('{'),
                Token::Number(Some(2)),
                Token::Punct('}'),
                Token::Punct(','),
            ]
        );
    }

    #[test]
    fn line_numbers() {
        let lines = Lexer::new("a\n/* x\ny */ b\n\"s\\\"\" c")
            .map(|t| t.line)
            .collect::<Vec<_>>();
        assert_eq!(lines, &[1, 3, 4]);
    }

    #[test]
    fn unterminated_comment() {
        assert_eq!(tokens("a /* b"), &[Token::Ident("a")]);
    }
}
