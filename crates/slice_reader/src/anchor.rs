//! Seek anchors.

use std::io::SeekFrom;

use crate::Error;

/// Reference point for [`Reader::seek`](crate::Reader::seek).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Offset is absolute.
    Start,
    /// Offset is relative to the current position.
    Current,
    /// Offset is relative to the end of the data.
    End,
}

impl Anchor {
    /// Numeric value of the anchor (`0`, `1`, `2`), as accepted by
    /// [`Reader::seek_whence`](crate::Reader::seek_whence).
    pub const fn whence(self) -> i32 {
        match self {
            Anchor::Start => 0,
            Anchor::Current => 1,
            Anchor::End => 2,
        }
    }

    /// Split a [`SeekFrom`] into a signed offset and its anchor.
    ///
    /// `SeekFrom::Start` carries an unsigned offset; values above `i64::MAX`
    /// fail with [`Error::PositionOverflow`].
    pub fn from_seek_from(pos: SeekFrom) -> Result<(i64, Anchor), Error> {
        match pos {
            SeekFrom::Start(offset) => i64::try_from(offset)
                .map(|offset| (offset, Anchor::Start))
                .map_err(|_| Error::PositionOverflow {
                    position: i128::from(offset),
                }),
            SeekFrom::Current(offset) => Ok((offset, Anchor::Current)),
            SeekFrom::End(offset) => Ok((offset, Anchor::End)),
        }
    }
}

impl TryFrom<i32> for Anchor {
    type Error = Error;

    fn try_from(whence: i32) -> Result<Self, Self::Error> {
        match whence {
            0 => Ok(Anchor::Start),
            1 => Ok(Anchor::Current),
            2 => Ok(Anchor::End),
            _ => Err(Error::InvalidAnchor { whence }),
        }
    }
}
