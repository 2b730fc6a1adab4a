//! Tags of the card verifiable certificate data objects.
//!
//! Universal tags used by the domain parameters structure are associated
//! constants of [`Tag`](picky_tlv::Tag) itself (`Tag::SEQUENCE`, `Tag::OID`, ...).

use picky_tlv::Tag;

/// Certificate request: a certificate followed by an outer authority reference and signature.
pub const AUTHENTICATION: Tag = Tag::new(0x67);
pub const CV_CERTIFICATE: Tag = Tag::new(0x7F21);
pub const CERTIFICATE_BODY: Tag = Tag::new(0x7F4E);
pub const SIGNATURE: Tag = Tag::new(0x5F37);

pub const PROFILE_IDENTIFIER: Tag = Tag::new(0x5F29);
pub const AUTHORITY_REFERENCE: Tag = Tag::new(0x42);
pub const PUBLIC_KEY: Tag = Tag::new(0x7F49);
pub const HOLDER_REFERENCE: Tag = Tag::new(0x5F20);
pub const HOLDER_AUTHORIZATION_TEMPLATE: Tag = Tag::new(0x7F4C);
pub const EFFECTIVE_DATE: Tag = Tag::new(0x5F25);
pub const EXPIRATION_DATE: Tag = Tag::new(0x5F24);
pub const EXTENSIONS: Tag = Tag::new(0x65);

// Public key data objects. RSA keys use the first two only.

/// Modulus (RSA) or prime (EC)
pub const PRIME_OR_MODULUS: Tag = Tag::new(0x81);
/// Public exponent (RSA) or first coefficient (EC)
pub const COEFFICIENT_A_OR_EXPONENT: Tag = Tag::new(0x82);
pub const COEFFICIENT_B: Tag = Tag::new(0x83);
pub const BASE_POINT: Tag = Tag::new(0x84);
pub const ORDER: Tag = Tag::new(0x85);
pub const PUBLIC_POINT: Tag = Tag::new(0x86);
pub const COFACTOR: Tag = Tag::new(0x87);
