//! Error taxonomy for reader operations.
//!
//! Every failure is local and synchronous, returned through `Result`.
//! [`Error::EndOfData`] is the ordinary terminal condition, not an
//! exceptional one; callers usually match it with
//! [`Error::is_end_of_data`].

use std::io;

/// Failure of a [`Reader`](crate::Reader) operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Position or offset at or past the end of the data.
    ///
    /// `copied` is the number of bytes still transferred before the end was
    /// hit. Only positional reads (`read_at`) report a non-zero count.
    #[error("end of data ({copied} bytes copied)")]
    EndOfData { copied: usize },

    /// A seek would have moved the position below zero.
    #[error("negative position {position}")]
    NegativePosition { position: i128 },

    /// A seek target does not fit in a signed 64-bit position.
    #[error("seek position {position} exceeds i64::MAX")]
    PositionOverflow { position: i128 },

    /// Negative offset passed to a positional read.
    #[error("negative offset {offset}")]
    InvalidOffset { offset: i64 },

    /// Unrecognized numeric seek anchor.
    #[error("invalid seek anchor {whence} (expected 0, 1 or 2)")]
    InvalidAnchor { whence: i32 },

    /// Byte unread at position zero.
    #[error("at beginning of data")]
    AtBeginning,

    /// Rune unread without an immediately preceding rune read.
    #[error("previous operation was not a rune read")]
    NoPriorRuneRead,

    /// The sink accepted fewer bytes than offered without failing.
    #[error("short write: sink accepted {written} of {offered} bytes")]
    ShortWrite { written: usize, offered: usize },

    /// The sink failed; its error is passed through unchanged.
    #[error("sink failed")]
    Sink(#[source] io::Error),
}

impl Error {
    /// End of data with nothing copied.
    pub(crate) const fn eof() -> Self {
        Error::EndOfData { copied: 0 }
    }

    /// Returns `true` for [`Error::EndOfData`], whatever the copied count.
    pub fn is_end_of_data(&self) -> bool {
        matches!(self, Error::EndOfData { .. })
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = match err {
            Error::Sink(inner) => return inner,
            Error::EndOfData { .. } => io::ErrorKind::UnexpectedEof,
            Error::NegativePosition { .. }
            | Error::PositionOverflow { .. }
            | Error::InvalidOffset { .. }
            | Error::InvalidAnchor { .. } => io::ErrorKind::InvalidInput,
            Error::ShortWrite { .. } => io::ErrorKind::WriteZero,
            Error::AtBeginning | Error::NoPriorRuneRead => io::ErrorKind::Other,
        };
        io::Error::new(kind, err)
    }
}
