//! Recursive-descent parser building a [`Value`] tree.

use gcl_tokenizer::{ErrorKind, GclError, Punct, TokenKind, Tokenizer};

use crate::{Array, Dict, Value};

/// A recursive-descent parser over the tokenizer's one-token lookahead.
///
/// Pure LL(1): one token of lookahead, no backtracking, and no state
/// besides the tokenizer's current token. The first error aborts the
/// whole parse.
pub struct Parser<'src> {
    tokenizer: Tokenizer<'src>,
}

impl<'src> Parser<'src> {
    /// Create a parser for the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            tokenizer: Tokenizer::new(source),
        }
    }

    /// Parse one document.
    ///
    /// Primes the tokenizer, reads exactly one value, and ignores
    /// anything after it.
    pub fn parse_document(&mut self) -> Result<Value, GclError> {
        self.tokenizer.advance()?;
        match self.parse_value()? {
            Some(value) => Ok(value),
            None => Err(self.expected_value()),
        }
    }

    /// Try to parse one value starting at the current token.
    ///
    /// Returns `Ok(None)` when the current token cannot start a value;
    /// callers turn that into an `ExpectedValue` diagnostic naming the
    /// offending token.
    pub fn parse_value(&mut self) -> Result<Option<Value>, GclError> {
        let value = match &self.tokenizer.token().kind {
            TokenKind::Punct(Punct::LBrace) => Value::Dict(self.parse_dict()?),
            TokenKind::Punct(Punct::LBracket) => Value::Array(self.parse_array()?),
            TokenKind::String(text) => {
                let text = text.clone();
                self.tokenizer.advance()?;
                Value::String(text)
            }
            TokenKind::Int(value) => {
                let value = *value;
                self.tokenizer.advance()?;
                Value::Int(value)
            }
            TokenKind::Float(value) => {
                let value = *value;
                self.tokenizer.advance()?;
                Value::Float(value)
            }
            TokenKind::Identifier(word) => {
                let value = match word.as_str() {
                    "true" => Value::Bool(true),
                    "false" => Value::Bool(false),
                    "null" => Value::Null,
                    _ => return Ok(None),
                };
                self.tokenizer.advance()?;
                value
            }
            _ => return Ok(None),
        };

        Ok(Some(value))
    }

    /// Parse a `{ identifier ':' value, ... }` group. The opening brace
    /// is the current token.
    fn parse_dict(&mut self) -> Result<Dict, GclError> {
        // Eat the opening brace.
        self.tokenizer.advance()?;

        let mut dict = Dict::new();

        loop {
            let key = match &self.tokenizer.token().kind {
                TokenKind::Identifier(name) => name.clone(),
                _ => break,
            };
            let key_span = self.tokenizer.token().span;
            self.tokenizer.advance()?;

            if !self.eat_punct(Punct::Colon)? {
                return Err(self.expected_punct(':'));
            }

            let value = match self.parse_value()? {
                Some(value) => value,
                None => return Err(self.expected_value()),
            };

            if dict.contains_key(&key) {
                return Err(GclError::new(
                    ErrorKind::KeyAlreadyDefined,
                    key_span,
                    format!("key `{key}` already defined"),
                ));
            }
            dict.insert(key, value);

            if self.eat_punct(Punct::Comma)? {
                continue;
            }
            if self.at_punct(Punct::RBrace) {
                break;
            }
            return Err(self.expected_punct(','));
        }

        if !self.eat_punct(Punct::RBrace)? {
            return Err(self.expected_punct('}'));
        }

        Ok(dict)
    }

    /// Parse a `[ value, ... ]` sequence. The opening bracket is the
    /// current token.
    fn parse_array(&mut self) -> Result<Array, GclError> {
        // Eat the opening bracket.
        self.tokenizer.advance()?;

        let mut array = Array::new();

        if self.eat_punct(Punct::RBracket)? {
            return Ok(array);
        }

        loop {
            let value = match self.parse_value()? {
                Some(value) => value,
                None => return Err(self.expected_value()),
            };
            array.push(value);

            if self.eat_punct(Punct::Comma)? {
                continue;
            }
            if self.at_punct(Punct::RBracket) {
                break;
            }
            return Err(self.expected_punct(','));
        }

        if !self.eat_punct(Punct::RBracket)? {
            return Err(self.expected_punct(']'));
        }

        Ok(array)
    }

    /// Whether the current token is the given punctuation.
    fn at_punct(&self, punct: Punct) -> bool {
        matches!(self.tokenizer.token().kind, TokenKind::Punct(p) if p == punct)
    }

    /// Consume the given punctuation if it is the current token.
    fn eat_punct(&mut self, punct: Punct) -> Result<bool, GclError> {
        if self.at_punct(punct) {
            self.tokenizer.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expected_punct(&self, symbol: char) -> GclError {
        let token = self.tokenizer.token();
        GclError::new(
            ErrorKind::ExpectedPunctuaction,
            token.span,
            format!("expected `{symbol}` but found `{token}`"),
        )
    }

    fn expected_value(&self) -> GclError {
        let token = self.tokenizer.token();
        GclError::new(
            ErrorKind::ExpectedValue,
            token.span,
            format!("expected a value but found `{token}`"),
        )
    }
}
