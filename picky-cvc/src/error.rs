use picky_tlv::{Tag, TlvError};
use thiserror::Error;

/// Errors raised while decoding or encoding certificates, domain parameters and signatures.
///
/// Every error is terminal: a structure rejected once is rejected again on retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CvcError {
    /// underlying TLV structure is invalid
    #[error("malformed encoding: {source}")]
    MalformedEncoding { source: TlvError },

    /// an element appears where another one is required
    #[error("{element}: expected tag {expected}, found {found}")]
    UnexpectedTag {
        element: &'static str,
        expected: Tag,
        found: Tag,
    },

    /// a mandatory element is absent
    #[error("{element} is missing")]
    MissingElement { element: &'static str },

    /// a captured element has no content
    #[error("{element} is empty")]
    EmptyElement { element: &'static str },

    #[error("unexpected outer tag {found}: neither a certificate nor a certificate request")]
    UnexpectedOuterTag { found: Tag },

    #[error("certificate request wraps a {found} element instead of a certificate")]
    UnexpectedRequestContent { found: Tag },

    /// field type is not the prime field
    #[error("unsupported field type: only prime fields are supported")]
    UnsupportedFieldType,

    /// base point is not in uncompressed form
    #[error("unsupported point format: only uncompressed points are supported")]
    UnsupportedPointFormat,

    #[error("unsupported domain parameters version")]
    Version,

    #[error("unsupported certificate profile identifier")]
    UnsupportedProfile,

    /// explicit curve parameters only partially present
    #[error("incomplete public key parameters: {missing} is missing")]
    IncompleteKeyParameters { missing: &'static str },

    #[error("{len} trailing byte(s) after {element}")]
    TrailingData { element: &'static str, len: usize },

    #[error("buffer too small: {required} bytes required, capacity is {capacity}")]
    BufferTooSmall { required: usize, capacity: usize },

    /// raw signature can't be split into two equal halves
    #[error("invalid raw signature length: {len}")]
    InvalidSignatureLength { len: usize },

    #[error("invalid date")]
    InvalidDate,

    #[error("invalid object identifier")]
    InvalidObjectIdentifier,
}

impl From<TlvError> for CvcError {
    fn from(e: TlvError) -> Self {
        match e {
            TlvError::BufferTooSmall { required, capacity } => Self::BufferTooSmall { required, capacity },
            source => Self::MalformedEncoding { source },
        }
    }
}

pub type Result<T> = std::result::Result<T, CvcError>;
