//! # picky-cvc
//!
//! Card verifiable certificates (CVC) and the elliptic curve domain parameters they refer to.
//!
//! Decoding is zero-copy: a [`CertificateRecord`] and an [`EcDomainParameters`] only hold
//! views into the buffer they were decoded from.
//!
//! ```
//! use picky_cvc::{decode_certificate, PublicKey};
//!
//! let certificate = [
//!     0x7F, 0x21, 0x2B, 0x7F, 0x4E, 0x23, 0x5F, 0x29, 0x01, 0x00, 0x7F, 0x49, 0x11, 0x06, 0x0A,
//!     0x04, 0x00, 0x7F, 0x00, 0x07, 0x02, 0x02, 0x02, 0x02, 0x03, 0x86, 0x03, 0x04, 0x01, 0x02,
//!     0x5F, 0x20, 0x08, b'H', b'O', b'L', b'D', b'E', b'R', b'0', b'1', 0x5F, 0x37, 0x02, 0xAA,
//!     0xBB,
//! ];
//!
//! let (record, consumed) = decode_certificate(&certificate).unwrap();
//! assert_eq!(consumed, certificate.len());
//! assert_eq!(record.holder_reference, Some(&b"HOLDER01"[..]));
//! assert!(matches!(record.public_key().unwrap(), PublicKey::EcNamed { .. }));
//! ```

mod element;
mod encode;

pub mod certificate;
pub mod curve;
pub mod date;
pub mod domain_parameters;
pub mod error;
pub mod oids;
pub mod signature;
pub mod tag;

pub use certificate::{certificates, decode_certificate, CertificateRecord, Certificates, PublicKey};
pub use curve::NamedCurve;
pub use date::CvcDate;
pub use domain_parameters::EcDomainParameters;
pub use error::{CvcError, Result};
pub use signature::{decode_ecdsa_signature, encode_ecdsa_signature};

/// Domain parameters of the known curve identified by the encoded `oid`.
pub fn resolve_curve_by_identifier(oid: &[u8]) -> Option<&'static EcDomainParameters<'static>> {
    curve::lookup_by_identifier(oid)
}

/// Encoded identifier of the known curve matching the prime of a decoded certificate.
///
/// `None` when the certificate carries no prime or when no known curve uses it.
pub fn resolve_curve_identifier_for_certificate(certificate: &CertificateRecord<'_>) -> Option<&'static [u8]> {
    certificate.curve_identifier()
}

/// Extracts explicit domain parameters from an encoded `ECParameters` structure.
pub fn extract_explicit_domain_parameters(der: &[u8]) -> Result<EcDomainParameters<'_>> {
    EcDomainParameters::from_der(der)
}
