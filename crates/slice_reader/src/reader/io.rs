//! `std::io` integration.
//!
//! The io traits follow Rust's conventions where they differ from the
//! inherent API: `Read::read` reports end of data as `Ok(0)`, and errors
//! convert to [`io::Error`] through `From<Error>`.

use std::io::{self, BufRead, Read, Seek, SeekFrom};

use super::{LastRead, Reader};
use crate::{Anchor, Error};

impl<S: AsRef<[u8]>> Read for Reader<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match Reader::read(self, buf) {
            Ok(n) => Ok(n),
            Err(Error::EndOfData { .. }) => Ok(0),
            Err(e) => Err(e.into()),
        }
    }
}

impl<S: AsRef<[u8]>> BufRead for Reader<S> {
    /// The unread data itself; empty at or past the end. Does not change
    /// any state.
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.tail().unwrap_or_default())
    }

    fn consume(&mut self, amt: usize) {
        let n = amt.min(self.remaining_length());
        self.advance(n);
        self.last_read = if n > 0 {
            LastRead::Opaque
        } else {
            LastRead::Invalid
        };
    }
}

impl<S: AsRef<[u8]>> Seek for Reader<S> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.last_read = LastRead::Invalid;
        let (offset, anchor) = Anchor::from_seek_from(pos)?;
        let pos = Reader::seek(self, offset, anchor)?;
        Ok(pos.unsigned_abs())
    }

    /// Pure query; unlike `seek(SeekFrom::Current(0))` it keeps a pending
    /// rune unread armed.
    fn stream_position(&mut self) -> io::Result<u64> {
        Ok(self.pos.unsigned_abs())
    }
}
