//! Read-only, seekable cursor over an immutable byte or text buffer.
//!
//! [`Reader`] is the low-level primitive beneath parsers, decoders, and
//! protocol readers that need random access, linear scanning, and one step
//! of rune-aware backtracking without copying the underlying data.
//!
//! # Backing Storage
//!
//! The reader is generic over any `S: AsRef<[u8]>`: borrowed `&[u8]` and
//! `&str`, or owned immutable buffers such as `Arc<[u8]>` and `String`.
//! A text buffer and its byte-equivalent produce identical results from
//! every operation.
//!
//! # Positions
//!
//! Positions are signed 64-bit byte offsets. Seeking past the end is legal
//! and only shows up as [`Error::EndOfData`] on the next read; a position
//! can never become negative.
//!
//! # Example
//!
//! ```
//! use slice_reader::{Anchor, Reader};
//!
//! let mut reader = Reader::new("héllo");
//! assert_eq!(reader.read_rune().ok(), Some(('h', 1)));
//! assert_eq!(reader.read_rune().ok(), Some(('é', 2)));
//! assert!(reader.unread_rune().is_ok());
//! assert_eq!(reader.seek(-2, Anchor::End).ok(), Some(4));
//! assert_eq!(reader.remaining_length(), 2);
//! ```

mod anchor;
mod error;
mod reader;
pub mod scan;
mod utf8;

pub use anchor::Anchor;
pub use error::Error;
pub use reader::Reader;
pub use utf8::decode_rune;
