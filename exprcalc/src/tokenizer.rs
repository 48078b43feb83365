use embedded_io::Read;

use crate::error::{Error, ErrorType, Result};

const CHUNK_SIZE: usize = 64;

/// A lexical unit of an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A non-negative decimal literal
    Number(i64),
    /// Any other non-whitespace byte
    Symbol(u8),
    /// The reader is exhausted
    End,
}

/// Splits a byte stream into [`Token`]s with one token of lookahead
///
/// The stream is pulled in small chunks, so the tokenizer works on any
/// `embedded_io::Read` source, including ones that hand out a byte at a
/// time. ASCII whitespace between tokens is skipped.
pub struct Tokenizer<'r, R: Read + ?Sized> {
    reader: &'r mut R,
    buf: [u8; CHUNK_SIZE],
    pos: usize,
    n_bytes: usize,
    n_consumed: usize, // Bytes before `buf[pos]`
    current: Option<Token>,
    token_index: usize,
}

impl<'r, R: Read + ?Sized> Tokenizer<'r, R> {
    #[must_use]
    pub fn new(reader: &'r mut R) -> Self {
        Tokenizer {
            reader,
            buf: [0; CHUNK_SIZE],
            pos: 0,
            n_bytes: 0,
            n_consumed: 0,
            current: None,
            token_index: 0,
        }
    }

    /// Returns the current token, reading it if needed.
    ///
    /// # Errors
    ///
    /// `NumberOverflow` for a literal beyond `i64::MAX`, `Io` if the reader fails.
    pub fn peek(&mut self) -> Result<Token> {
        if let Some(token) = self.current {
            return Ok(token);
        }
        let token = self.scan()?;
        self.current = Some(token);
        Ok(token)
    }

    /// Drops the current token, so the next `peek` reads a new one.
    pub fn consume(&mut self) {
        self.current = None;
    }

    /// Returns the current token and moves past it.
    ///
    /// # Errors
    ///
    /// As for `peek`.
    pub fn next_token(&mut self) -> Result<Token> {
        let token = self.peek()?;
        self.consume();
        Ok(token)
    }

    /// Byte index of the start of the last peeked token.
    #[must_use]
    pub fn token_index(&self) -> usize {
        self.token_index
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        if self.pos == self.n_bytes {
            self.n_consumed += self.n_bytes;
            self.pos = 0;
            self.n_bytes = 0;
            self.n_bytes = self
                .reader
                .read(&mut self.buf)
                .map_err(|e| Error::from_io_error(self.n_consumed, &e))?;
            if self.n_bytes == 0 {
                return Ok(None);
            }
        }
        Ok(Some(self.buf[self.pos]))
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn index(&self) -> usize {
        self.n_consumed + self.pos
    }

    fn scan(&mut self) -> Result<Token> {
        while let Some(byte) = self.peek_byte()? {
            if !byte.is_ascii_whitespace() {
                break;
            }
            self.bump();
        }
        self.token_index = self.index();

        let Some(first) = self.peek_byte()? else {
            return Ok(Token::End);
        };
        if !first.is_ascii_digit() {
            self.bump();
            return Ok(Token::Symbol(first));
        }

        let mut number: i64 = 0;
        while let Some(byte) = self.peek_byte()? {
            if !byte.is_ascii_digit() {
                break;
            }
            number = number
                .checked_mul(10)
                .and_then(|n| n.checked_add(i64::from(byte - b'0')))
                .ok_or_else(|| Error::new(ErrorType::NumberOverflow, self.token_index))?;
            self.bump();
        }
        Ok(Token::Number(number))
    }
}

impl<R: Read + ?Sized> core::fmt::Debug for Tokenizer<'_, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("current", &self.current)
            .field("token_index", &self.token_index)
            .field("buffered", &&self.buf[self.pos..self.n_bytes])
            .finish_non_exhaustive()
    }
}
