//! Explicit elliptic curve domain parameters.
//!
//! ```text
//! ECParameters ::= SEQUENCE {
//!     version   INTEGER { ecpVer1(1) },
//!     fieldID   SEQUENCE { fieldType OBJECT IDENTIFIER, prime INTEGER },
//!     curve     SEQUENCE { a OCTET STRING, b OCTET STRING, seed BIT STRING OPTIONAL },
//!     base      OCTET STRING,
//!     order     INTEGER,
//!     cofactor  INTEGER
//! }
//! ```

use crate::curve::NamedCurve;
use crate::element::{read_any, read_expected, read_unsigned_integer, read_value};
use crate::error::{CvcError, Result};
use hex_literal::hex;
use picky_tlv::{debug_log, Reader, Tag, Tlv, Writer};

const VERSION: u8 = 1;

/// `id-fieldType` arc of `prime-field` (1.2.840.10045.1.1)
const PRIME_FIELD_OID: [u8; 7] = hex!("2A 86 48 CE 3D 01 01");
const PRIME_FIELD_ARC: u8 = 0x01;

const UNCOMPRESSED_POINT: u8 = 0x04;

/// Domain parameters of a prime-field curve, borrowed from an encoded structure or from the registry.
///
/// Integers (`prime`, `order`, `cofactor`) are canonical unsigned big-endian values: the
/// sign byte of the INTEGER encoding is already dropped. Coefficients are raw field elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcDomainParameters<'a> {
    /// Encoded curve identifier. Only registry entries carry one.
    pub oid: Option<&'a [u8]>,
    pub prime: &'a [u8],
    pub coefficient_a: &'a [u8],
    pub coefficient_b: &'a [u8],
    /// Uncompressed point `04 || x || y`.
    pub base_point: &'a [u8],
    pub order: &'a [u8],
    pub cofactor: &'a [u8],
}

impl<'a> EcDomainParameters<'a> {
    /// Extracts explicit parameters from the `ECParameters` structure at the start of `der`.
    ///
    /// Only prime fields and uncompressed base points are supported. Elements following
    /// the cofactor, as well as the curve seed, are ignored.
    pub fn from_der(der: &'a [u8]) -> Result<Self> {
        let outer = Tlv::parse(der)?;
        if outer.tag() != Tag::SEQUENCE {
            debug_log!("domain parameters: {} instead of SEQUENCE", outer.tag());
            return Err(CvcError::UnexpectedTag {
                element: "domain parameters",
                expected: Tag::SEQUENCE,
                found: outer.tag(),
            });
        }
        let mut fields = Reader::new(outer.value());

        let version = read_any(&mut fields, "version")?;
        if version.tag() != Tag::INTEGER || version.value() != [VERSION] {
            debug_log!("unsupported domain parameters version {:02X?}", version.value());
            return Err(CvcError::Version);
        }

        let field_id = read_expected(&mut fields, Tag::SEQUENCE, "field identifier")?;
        let mut field = Reader::new(field_id.value());
        let field_type = read_any(&mut field, "field type")?;
        if field_type.tag() != Tag::OID || !matches!(field_type.value(), [_, _, _, _, _, _, PRIME_FIELD_ARC]) {
            debug_log!("unsupported field type {:02X?}", field_type.value());
            return Err(CvcError::UnsupportedFieldType);
        }
        let prime = read_unsigned_integer(&mut field, "prime")?;

        let curve = read_expected(&mut fields, Tag::SEQUENCE, "curve")?;
        let mut coefficients = Reader::new(curve.value());
        let coefficient_a = read_value(&mut coefficients, Tag::OCTET_STRING, "coefficient a")?;
        let coefficient_b = read_value(&mut coefficients, Tag::OCTET_STRING, "coefficient b")?;

        let base_point = read_expected(&mut fields, Tag::OCTET_STRING, "base point")?.value();
        if !is_uncompressed_point(base_point) {
            debug_log!("base point is not uncompressed ({} bytes)", base_point.len());
            return Err(CvcError::UnsupportedPointFormat);
        }

        let order = read_unsigned_integer(&mut fields, "order")?;
        let cofactor = read_unsigned_integer(&mut fields, "cofactor")?;

        Ok(Self {
            oid: None,
            prime,
            coefficient_a,
            coefficient_b,
            base_point,
            order,
            cofactor,
        })
    }

    /// Size of a field element in bytes.
    pub fn field_size(&self) -> usize {
        self.prime.len()
    }

    /// The registry curve sharing this prime, if any.
    pub fn named_curve(&self) -> Option<NamedCurve> {
        NamedCurve::from_prime(self.prime)
    }

    /// Encodes the parameters as an explicit `ECParameters` structure.
    ///
    /// Integers are written in canonical form, so extracting the output yields the same views.
    pub fn to_explicit_der(&self) -> Result<Vec<u8>> {
        let mut der = Vec::with_capacity(16 + 2 * self.base_point.len() + self.order.len());
        let mut writer = Writer::new_to_byte_buf(&mut der);

        writer.append_unsigned_integer(Tag::INTEGER, &[VERSION])?;

        let field_id = writer.len();
        writer.append_tlv(Tag::OID, &PRIME_FIELD_OID)?;
        writer.append_unsigned_integer(Tag::INTEGER, self.prime)?;
        writer.encapsulate(Tag::SEQUENCE, field_id)?;

        let curve = writer.len();
        writer.append_tlv(Tag::OCTET_STRING, self.coefficient_a)?;
        writer.append_tlv(Tag::OCTET_STRING, self.coefficient_b)?;
        writer.encapsulate(Tag::SEQUENCE, curve)?;

        writer.append_tlv(Tag::OCTET_STRING, self.base_point)?;
        writer.append_unsigned_integer(Tag::INTEGER, self.order)?;
        writer.append_unsigned_integer(Tag::INTEGER, self.cofactor)?;
        writer.encapsulate(Tag::SEQUENCE, 0)?;

        Ok(der)
    }
}

/// `04 || x || y` with coordinates of equal length.
fn is_uncompressed_point(point: &[u8]) -> bool {
    match point {
        [UNCOMPRESSED_POINT, coordinates @ ..] => !coordinates.is_empty() && coordinates.len() % 2 == 0,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// Small curve over F_23, structurally valid.
    const TOY_PARAMETERS: [u8; 39] = hex!(
        "30 25"
        "02 01 01"
        "30 0C 06 07 2A 86 48 CE 3D 01 01 02 01 17"
        "30 06 04 01 01 04 01 01"
        "04 03 04 03 0A"
        "02 02 00 80"
        "02 01 01"
    );

    #[test]
    fn toy_curve() {
        let parameters = EcDomainParameters::from_der(&TOY_PARAMETERS).unwrap();
        assert_eq!(parameters.oid, None);
        assert_eq!(parameters.prime, &[0x17]);
        assert_eq!(parameters.coefficient_a, &[0x01]);
        assert_eq!(parameters.base_point, &hex!("04 03 0A"));
        assert_eq!(parameters.order, &[0x80]);
        assert_eq!(parameters.cofactor, &[0x01]);
        assert_eq!(parameters.named_curve(), None);

        assert_eq!(parameters.to_explicit_der().unwrap(), TOY_PARAMETERS);
    }

    #[test]
    fn trailing_fields_are_ignored() {
        let mut data = TOY_PARAMETERS.to_vec();
        data[1] += 2;
        data.extend_from_slice(&hex!("05 00"));
        assert!(EcDomainParameters::from_der(&data).is_ok());
    }

    #[rstest]
    #[case::not_a_sequence(0, 0x31, CvcError::UnexpectedTag { element: "domain parameters", expected: Tag::SEQUENCE, found: Tag::SET })]
    #[case::version_value(4, 0x02, CvcError::Version)]
    #[case::version_tag(2, 0x04, CvcError::Version)]
    #[case::characteristic_two_field(15, 0x02, CvcError::UnsupportedFieldType)]
    #[case::compressed_point(29, 0x02, CvcError::UnsupportedPointFormat)]
    #[case::coefficient_as_integer(24, 0x02, CvcError::UnexpectedTag { element: "coefficient b", expected: Tag::OCTET_STRING, found: Tag::INTEGER })]
    fn rejected(#[case] offset: usize, #[case] byte: u8, #[case] error: CvcError) {
        let mut data = TOY_PARAMETERS;
        data[offset] = byte;
        assert_eq!(EcDomainParameters::from_der(&data).unwrap_err(), error);
    }

    #[test]
    fn truncated_structure() {
        assert_eq!(
            EcDomainParameters::from_der(&TOY_PARAMETERS[..20]).unwrap_err(),
            CvcError::MalformedEncoding {
                source: picky_tlv::TlvError::TruncatedData
            }
        );
    }

    #[test]
    fn empty_prime() {
        let data = hex!("30 10 02 01 01 30 0B 06 07 2A 86 48 CE 3D 01 01 02 00");
        assert_eq!(
            EcDomainParameters::from_der(&data).unwrap_err(),
            CvcError::EmptyElement { element: "prime" }
        );
    }
}
