//! Zero-copy BER-TLV reading and writing.
//!
//! This crate is the byte-level engine behind `picky-cvc`. It knows nothing about
//! certificates: it walks tag/length/value elements inside a borrowed buffer and
//! appends elements to a caller-supplied output, nothing more.
//!
//! Every [`Tlv`] handed out by the [`Reader`] borrows from the input slice. No
//! element content is ever copied.
//!
//! ```
//! use picky_tlv::{Reader, Tag, Writer};
//!
//! let mut buf = [0u8; 16];
//! let mut writer = Writer::new_to_bytes(&mut buf);
//! writer.append_unsigned_integer(Tag::INTEGER, &[0x80]).unwrap();
//! writer.encapsulate(Tag::SEQUENCE, 0).unwrap();
//! let len = writer.len();
//! assert_eq!(&buf[..len], &[0x30, 0x04, 0x02, 0x02, 0x00, 0x80]);
//!
//! let mut reader = Reader::new(&buf[..len]);
//! let sequence = reader.read_tlv().unwrap();
//! assert_eq!(sequence.tag(), Tag::SEQUENCE);
//! assert!(reader.is_empty());
//! ```

#[macro_use]
mod debug_log;

pub mod integer;
pub mod length;
pub mod reader;
pub mod tag;
pub mod writer;

pub use reader::{validate, validate_all, Reader, Tlv, MAX_NESTING_DEPTH};
pub use tag::Tag;
pub use writer::Writer;

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "debug_log")]
    pub use tracing;
}

/// TLV engine errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TlvError {
    /// element extends past the end of the input
    #[error("truncated data")]
    TruncatedData,

    /// tag uses more than three bytes
    #[error("invalid tag encoding")]
    InvalidTag,

    /// indefinite or oversized length
    #[error("invalid length encoding")]
    InvalidLength,

    /// constructed elements nested deeper than [`MAX_NESTING_DEPTH`]
    #[error("elements nested deeper than {MAX_NESTING_DEPTH} levels")]
    NestingTooDeep,

    /// fixed output buffer can't hold the encoding
    #[error("buffer too small: {required} bytes required, capacity is {capacity}")]
    BufferTooSmall { required: usize, capacity: usize },

    /// encapsulation offset is past the written bytes
    #[error("offset {offset} is past the {len} bytes written")]
    InvalidOffset { offset: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, TlvError>;
