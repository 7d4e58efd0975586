//! Capability traits for code written against a reader's operations rather
//! than its concrete type.
//!
//! A tokenizer that only needs byte lookahead takes `impl ByteScanner`; one
//! that decodes text takes `impl RuneScanner`. [`Reader`](crate::Reader)
//! implements every trait here, and bounds are resolved statically.

use std::io;

use crate::Error;

/// Byte-at-a-time reading with one byte of pushback.
pub trait ByteScanner {
    /// Read the next byte.
    fn read_byte(&mut self) -> Result<u8, Error>;

    /// Step back one byte.
    fn unread_byte(&mut self) -> Result<(), Error>;
}

/// Rune-at-a-time reading with one rune of pushback.
pub trait RuneScanner {
    /// Read the next rune, returning it with its encoded width in bytes.
    fn read_rune(&mut self) -> Result<(char, usize), Error>;

    /// Undo the immediately preceding [`read_rune`](Self::read_rune).
    fn unread_rune(&mut self) -> Result<(), Error>;
}

/// Reads at an absolute offset without touching any cursor state.
pub trait ReadAt {
    /// Fill `buf` from `offset`, returning the number of bytes copied.
    fn read_at(&self, buf: &mut [u8], offset: i64) -> Result<usize, Error>;
}

/// Hands all remaining data to a sink in one transfer.
pub trait WriteTo {
    /// Write the remaining data to `sink`, returning the bytes it accepted.
    fn write_to<W: io::Write + ?Sized>(&mut self, sink: &mut W) -> Result<u64, Error>;
}
