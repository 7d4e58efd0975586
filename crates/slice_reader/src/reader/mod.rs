//! Seekable cursor over an immutable byte or text buffer.
//!
//! The reader tracks a signed byte position and a one-slot record of the
//! last read, which is all the state needed for a single step of rune
//! pushback. The position may sit anywhere at or beyond the end of the data;
//! reads from there report [`Error::EndOfData`].
//!
//! # Last Read
//!
//! Only a successful [`read_rune`](Reader::read_rune) arms
//! [`unread_rune`](Reader::unread_rune). Every other read, seek, or bulk
//! transfer disarms it, as does a failed rune read. Positional reads
//! ([`read_at`](Reader::read_at)) touch no state at all.

use tracing::{debug, trace};

use crate::scan::{ByteScanner, ReadAt, RuneScanner, WriteTo};
use crate::utf8::{decode_rune, RUNE_SELF};
use crate::{Anchor, Error};

mod io;

/// The last operation performed, so that `unread_rune` knows how far to step
/// back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum LastRead {
    /// Non-read operation, or nothing yet.
    #[default]
    Invalid,
    /// Any read other than a rune read.
    Opaque,
    Rune1,
    Rune2,
    Rune3,
    Rune4,
}

impl LastRead {
    fn rune(width: usize) -> Self {
        debug_assert!((1..=4).contains(&width), "rune width {width} out of range");
        match width {
            1 => LastRead::Rune1,
            2 => LastRead::Rune2,
            3 => LastRead::Rune3,
            _ => LastRead::Rune4,
        }
    }

    /// Width of the rune just read, if the last operation was a rune read.
    fn rune_width(self) -> Option<i64> {
        match self {
            LastRead::Rune1 => Some(1),
            LastRead::Rune2 => Some(2),
            LastRead::Rune3 => Some(3),
            LastRead::Rune4 => Some(4),
            LastRead::Invalid | LastRead::Opaque => None,
        }
    }
}

/// Read-only, seekable cursor over `S`.
///
/// `S` is any immutable byte view: `&[u8]`, `&str`, or an owned buffer such
/// as `Arc<[u8]>`. The data is never copied or modified.
///
/// `Reader::default()` behaves exactly like a reader over an empty buffer.
#[derive(Clone, Debug, Default)]
pub struct Reader<S> {
    src: S,
    /// Read position; never negative, may exceed the data length.
    pos: i64,
    last_read: LastRead,
}

impl<S: AsRef<[u8]>> Reader<S> {
    /// Create a reader at position 0 over `src`.
    pub fn new(src: S) -> Self {
        Reader {
            src,
            pos: 0,
            last_read: LastRead::Invalid,
        }
    }

    /// The backing data as bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.src.as_ref()
    }

    /// The backing buffer.
    pub fn get_ref(&self) -> &S {
        &self.src
    }

    /// Consume the reader, returning the backing buffer.
    pub fn into_inner(self) -> S {
        self.src
    }

    /// Current read position in bytes.
    ///
    /// May exceed [`total_size`](Self::total_size) after a seek past the end.
    #[inline]
    pub fn position(&self) -> i64 {
        self.pos
    }

    /// Number of unread bytes; zero once the position is at or past the end.
    pub fn remaining_length(&self) -> usize {
        self.tail().map_or(0, <[u8]>::len)
    }

    /// Length of the backing data.
    ///
    /// Unaffected by reads and seeks; only [`reset`](Self::reset) changes it.
    pub fn total_size(&self) -> i64 {
        i64::try_from(self.as_bytes().len()).unwrap_or(i64::MAX)
    }

    /// Index of `offset` into the data, if it addresses an existing byte.
    #[inline]
    fn index_of(&self, offset: i64) -> Option<usize> {
        usize::try_from(offset)
            .ok()
            .filter(|&i| i < self.as_bytes().len())
    }

    /// Unread data, or `None` at or past the end.
    #[inline]
    fn tail(&self) -> Option<&[u8]> {
        self.index_of(self.pos).map(|i| &self.as_bytes()[i..])
    }

    #[inline]
    #[allow(
        clippy::cast_possible_wrap,
        reason = "n never exceeds the data length, which fits in i64"
    )]
    fn advance(&mut self, n: usize) {
        self.pos += n as i64;
    }

    /// Copy unread bytes into `buf`, advancing past them.
    ///
    /// Fails with [`Error::EndOfData`] at or past the end, even for an empty
    /// `buf`. Before the end, an empty `buf` reads `Ok(0)`.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        self.last_read = LastRead::Invalid;
        let tail = self.tail().ok_or_else(Error::eof)?;
        let n = buf.len().min(tail.len());
        buf[..n].copy_from_slice(&tail[..n]);
        self.advance(n);
        if n > 0 {
            self.last_read = LastRead::Opaque;
        }
        Ok(n)
    }

    /// Copy bytes starting at `offset` into `buf` without touching the
    /// reader's position or pushback state.
    ///
    /// If the data ends before `buf` is full, the bytes that were available
    /// are still copied and the call fails with
    /// [`Error::EndOfData { copied }`](Error::EndOfData).
    pub fn read_at(&self, buf: &mut [u8], offset: i64) -> Result<usize, Error> {
        if offset < 0 {
            return Err(Error::InvalidOffset { offset });
        }
        let start = self.index_of(offset).ok_or_else(Error::eof)?;
        let tail = &self.as_bytes()[start..];
        let n = buf.len().min(tail.len());
        buf[..n].copy_from_slice(&tail[..n]);
        if n < buf.len() {
            return Err(Error::EndOfData { copied: n });
        }
        Ok(n)
    }

    /// Read one byte.
    pub fn read_byte(&mut self) -> Result<u8, Error> {
        self.last_read = LastRead::Invalid;
        let &byte = self
            .tail()
            .and_then(<[u8]>::first)
            .ok_or_else(Error::eof)?;
        self.pos += 1;
        self.last_read = LastRead::Opaque;
        Ok(byte)
    }

    /// Step back one byte.
    ///
    /// Only requires a position above zero; unlike
    /// [`unread_rune`](Self::unread_rune) it does not check what the last
    /// operation was.
    pub fn unread_byte(&mut self) -> Result<(), Error> {
        if self.pos <= 0 {
            return Err(Error::AtBeginning);
        }
        self.last_read = LastRead::Invalid;
        self.pos -= 1;
        Ok(())
    }

    /// Read one UTF-8 encoded rune, returning it with its width in bytes.
    ///
    /// Malformed input reads as U+FFFD with width 1.
    pub fn read_rune(&mut self) -> Result<(char, usize), Error> {
        let Some(tail) = self.tail() else {
            self.last_read = LastRead::Invalid;
            return Err(Error::eof());
        };
        let (ch, width) = match tail[0] {
            b if b < RUNE_SELF => (char::from(b), 1),
            _ => decode_rune(tail),
        };
        self.advance(width);
        self.last_read = LastRead::rune(width);
        Ok((ch, width))
    }

    /// Undo the immediately preceding [`read_rune`](Self::read_rune).
    ///
    /// Only one step is kept: a second consecutive call fails with
    /// [`Error::NoPriorRuneRead`].
    pub fn unread_rune(&mut self) -> Result<(), Error> {
        let width = self
            .last_read
            .rune_width()
            .ok_or(Error::NoPriorRuneRead)?;
        self.pos -= width;
        self.last_read = LastRead::Invalid;
        Ok(())
    }

    /// Move the position to `offset` relative to `anchor`, returning the new
    /// absolute position.
    ///
    /// Targets past the end are accepted. A negative target fails with
    /// [`Error::NegativePosition`] and leaves the position unchanged.
    pub fn seek(&mut self, offset: i64, anchor: Anchor) -> Result<i64, Error> {
        self.last_read = LastRead::Invalid;
        let base = match anchor {
            Anchor::Start => 0,
            Anchor::Current => self.pos,
            Anchor::End => self.total_size(),
        };
        let target = i128::from(base) + i128::from(offset);
        if target < 0 {
            debug!(offset, ?anchor, %target, "seek to negative position");
            return Err(Error::NegativePosition { position: target });
        }
        let pos = i64::try_from(target).map_err(|_| {
            debug!(offset, ?anchor, %target, "seek past i64::MAX");
            Error::PositionOverflow { position: target }
        })?;
        trace!(from = self.pos, to = pos, ?anchor, "seek");
        self.pos = pos;
        Ok(pos)
    }

    /// [`seek`](Self::seek) with a numeric anchor: 0 = start, 1 = current,
    /// 2 = end.
    pub fn seek_whence(&mut self, offset: i64, whence: i32) -> Result<i64, Error> {
        self.last_read = LastRead::Invalid;
        let anchor = Anchor::try_from(whence)?;
        self.seek(offset, anchor)
    }

    /// Offer all unread data to `sink` in a single `write` call, advancing by
    /// the number of bytes it accepted.
    ///
    /// Returns `Ok(0)` without calling the sink when nothing is left.
    ///
    /// # Panics
    ///
    /// Panics if the sink claims to have accepted more bytes than offered.
    pub fn write_to<W: std::io::Write + ?Sized>(&mut self, sink: &mut W) -> Result<u64, Error> {
        self.last_read = LastRead::Invalid;
        let Some(tail) = self.tail() else {
            return Ok(0);
        };
        let offered = tail.len();
        let written = sink.write(tail).map_err(|e| {
            debug!(offered, error = %e, "sink failed");
            Error::Sink(e)
        })?;
        assert!(
            written <= offered,
            "invalid write count: sink accepted {written} of {offered} bytes"
        );
        self.advance(written);
        trace!(written, offered, pos = self.pos, "write_to");
        if written != offered {
            debug!(written, offered, "short write");
            return Err(Error::ShortWrite { written, offered });
        }
        Ok(written as u64)
    }

    /// Return unread data up to and including the first `delim`, advancing
    /// past it, without copying.
    ///
    /// If `delim` does not occur, the rest of the data is returned. Fails
    /// with [`Error::EndOfData`] only when nothing is left.
    pub fn read_slice_until(&mut self, delim: u8) -> Result<&[u8], Error> {
        self.last_read = LastRead::Invalid;
        let start = self.index_of(self.pos).ok_or_else(Error::eof)?;
        let tail = &self.as_bytes()[start..];
        let n = memchr::memchr(delim, tail).map_or(tail.len(), |i| i + 1);
        self.advance(n);
        self.last_read = LastRead::Opaque;
        Ok(&self.as_bytes()[start..start + n])
    }

    /// Start over at position 0 on `src`, discarding all prior state,
    /// including any pending rune unread.
    pub fn reset(&mut self, src: S) {
        *self = Reader::new(src);
        trace!(size = self.total_size(), "reset");
    }
}

impl<S: AsRef<[u8]>> ByteScanner for Reader<S> {
    fn read_byte(&mut self) -> Result<u8, Error> {
        Reader::read_byte(self)
    }

    fn unread_byte(&mut self) -> Result<(), Error> {
        Reader::unread_byte(self)
    }
}

impl<S: AsRef<[u8]>> RuneScanner for Reader<S> {
    fn read_rune(&mut self) -> Result<(char, usize), Error> {
        Reader::read_rune(self)
    }

    fn unread_rune(&mut self) -> Result<(), Error> {
        Reader::unread_rune(self)
    }
}

impl<S: AsRef<[u8]>> ReadAt for Reader<S> {
    fn read_at(&self, buf: &mut [u8], offset: i64) -> Result<usize, Error> {
        Reader::read_at(self, buf, offset)
    }
}

impl<S: AsRef<[u8]>> WriteTo for Reader<S> {
    fn write_to<W: std::io::Write + ?Sized>(&mut self, sink: &mut W) -> Result<u64, Error> {
        Reader::write_to(self, sink)
    }
}
