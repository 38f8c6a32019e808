//! Tokenizer for the GCL configuration language.

use crate::{ErrorKind, GclError, Punct, Span, Token, TokenKind};
use tracing::trace;

/// A pull tokenizer that produces one token at a time from GCL source
/// text.
///
/// The tokenizer borrows the source for its whole lifetime and never
/// copies it. [`Tokenizer::advance`] replaces the current token with the
/// next one; [`Tokenizer::token`] exposes the current token until the
/// next call to `advance`.
pub struct Tokenizer<'src> {
    /// The remaining source text (suffix of the original input).
    remaining: &'src str,
    /// Line of the next character (1-based).
    line: usize,
    /// Column of the next character (0-based).
    col: usize,
    /// The token produced by the last `advance`.
    token: Token,
}

impl<'src> Tokenizer<'src> {
    /// Create a new tokenizer for the given source text.
    ///
    /// No token is produced yet: the current token is `Eof` until the
    /// first call to [`Tokenizer::advance`].
    pub fn new(source: &'src str) -> Self {
        Self {
            remaining: source,
            line: 1,
            col: 0,
            token: Token::new(TokenKind::Eof, Span::point(1, 0)),
        }
    }

    /// Get the current token.
    #[inline]
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Check if we're at the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Discard the current token, skip whitespace and comments, and
    /// produce exactly one new token.
    ///
    /// Returns `true` while the new token is not `Eof`.
    pub fn advance(&mut self) -> Result<bool, GclError> {
        self.skip_trivia();

        let start = Span::point(self.line, self.col);
        let kind = self.read_token(start)?;
        self.token = Token::new(
            kind,
            Span::new(start.begin_line, start.begin_col, self.line, self.col),
        );
        trace!("token `{}` at {:?}", self.token, self.token.span);
        Ok(!self.token.kind.is_eof())
    }

    /// Peek at the next character without consuming it.
    #[inline]
    fn peek(&self) -> Option<char> {
        self.remaining.chars().next()
    }

    /// Consume one character, updating the line/column counters.
    #[inline]
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.remaining = &self.remaining[c.len_utf8()..];
        if c == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    /// Skip whitespace and `#`-to-end-of-line comments.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\n') => {
                    self.bump();
                }
                Some('#') => {
                    // The terminating newline is left for the
                    // whitespace arm on the next iteration.
                    self.bump();
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                _ => break,
            }
        }
    }

    /// Read one token. Dispatch is fixed priority, first match wins:
    /// identifier, number, punctuation, string, then EOF/unknown.
    fn read_token(&mut self, start: Span) -> Result<TokenKind, GclError> {
        let Some(c) = self.peek() else {
            return Ok(TokenKind::Eof);
        };

        if c.is_ascii_alphabetic() {
            return Ok(self.read_identifier());
        }
        if c.is_ascii_digit() || c == '-' || c == '+' {
            return self.read_number(start);
        }
        if let Some(punct) = Punct::from_char(c) {
            self.bump();
            return Ok(TokenKind::Punct(punct));
        }
        if c == '"' {
            return self.read_string(start);
        }

        Err(GclError::new(
            ErrorKind::UnknownChar,
            start,
            format!("unknown character `{c}`"),
        ))
    }

    /// Read an identifier: `[A-Za-z][A-Za-z0-9_]*`.
    fn read_identifier(&mut self) -> TokenKind {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        TokenKind::Identifier(text)
    }

    /// Read an integer literal.
    ///
    /// An optional `+`/`-` sign, then either a bare `0`, a `0b`/`0x`
    /// base prefix, or a decimal digit run. The magnitude accumulates
    /// with wrapping arithmetic; large literals wrap rather than error.
    /// The sign applies two's-complement negation to the magnitude.
    fn read_number(&mut self, start: Span) -> Result<TokenKind, GclError> {
        let mut negative = false;
        match self.peek() {
            Some('-') => {
                negative = true;
                self.bump();
            }
            Some('+') => {
                self.bump();
            }
            _ => {}
        }

        let mut base = 10u32;

        if self.peek() == Some('0') {
            self.bump();
            match self.peek() {
                // A leading zero before more decimal digits falls
                // through to the base-10 digit run: `0123` is 123.
                Some(c) if c.is_ascii_digit() => {}
                Some('b' | 'B') => {
                    base = 2;
                    self.bump();
                }
                Some('x' | 'X') => {
                    base = 16;
                    self.bump();
                }
                _ => return Ok(TokenKind::Int(0)),
            }

            if base != 10 && !self.peek().is_some_and(|c| c.is_digit(base)) {
                return Err(self.invalid_digit(start, base));
            }
        }

        let mut value: u64 = 0;
        let mut digits = 0usize;
        while let Some(digit) = self.peek().and_then(|c| c.to_digit(base)) {
            value = value.wrapping_mul(base as u64).wrapping_add(digit as u64);
            digits += 1;
            self.bump();
        }

        if digits == 0 {
            // A sign with no digits after it.
            return Err(self.invalid_digit(start, base));
        }

        if self.peek().is_some_and(|c| c.is_ascii_alphanumeric()) {
            // Rejects malformed literals like `123abc` or `0b12`.
            return Err(self.invalid_digit(start, base));
        }

        if negative {
            value = value.wrapping_neg();
        }

        Ok(TokenKind::Int(value as i64))
    }

    fn invalid_digit(&self, start: Span, base: u32) -> GclError {
        let message = match self.peek() {
            Some(c) => format!("invalid digit `{c}` for base {base}"),
            None => format!("missing digits for base {base} literal"),
        };
        GclError::new(ErrorKind::InvalidDigit, start, message)
    }

    /// Read a quoted string, processing escape sequences.
    ///
    /// The escape set is `\n`, `\t`, `\\`, and `\"`. A raw newline or
    /// the end of input before the closing quote leaves the string
    /// unterminated.
    fn read_string(&mut self, start: Span) -> Result<TokenKind, GclError> {
        // Opening quote.
        self.bump();

        let mut text = String::new();
        loop {
            match self.bump() {
                None | Some('\n') => {
                    return Err(GclError::new(
                        ErrorKind::ExpectedStringEnd,
                        start,
                        "expected string end",
                    ));
                }
                Some('"') => break,
                Some('\\') => match self.bump() {
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    Some('\\') => text.push('\\'),
                    Some('"') => text.push('"'),
                    Some(c) => {
                        return Err(GclError::new(
                            ErrorKind::InvalidEscape,
                            start,
                            format!("invalid escape sequence `{c}`"),
                        ));
                    }
                    None => {
                        return Err(GclError::new(
                            ErrorKind::ExpectedStringEnd,
                            start,
                            "expected string end",
                        ));
                    }
                },
                Some(c) => text.push(c),
            }
        }

        Ok(TokenKind::String(text))
    }
}
