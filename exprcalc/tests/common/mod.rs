#![allow(dead_code)]

use embedded_io::{ErrorKind, ErrorType, Read};

/// Hands out the input one byte per `read` call.
pub struct TrickleReader<'a> {
    data: &'a [u8],
}

impl<'a> TrickleReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        TrickleReader { data }
    }
}

impl ErrorType for TrickleReader<'_> {
    type Error = ErrorKind;
}

impl Read for TrickleReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        match (self.data.split_first(), buf.first_mut()) {
            (Some((&byte, rest)), Some(slot)) => {
                *slot = byte;
                self.data = rest;
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

/// Serves `data`, then fails with `kind` instead of reporting the end.
pub struct FailingReader<'a> {
    data: &'a [u8],
    kind: ErrorKind,
}

impl<'a> FailingReader<'a> {
    pub fn new(data: &'a [u8], kind: ErrorKind) -> Self {
        FailingReader { data, kind }
    }
}

impl ErrorType for FailingReader<'_> {
    type Error = ErrorKind;
}

impl Read for FailingReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.data.is_empty() {
            return Err(self.kind);
        }
        let n = self.data.len().min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}
