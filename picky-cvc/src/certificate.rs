use crate::curve;
use crate::date::CvcDate;
use crate::domain_parameters::EcDomainParameters;
use crate::element::{expect_end, read_any, read_expected, read_optional, read_value};
use crate::error::{CvcError, Result};
use crate::tag;
use oid::ObjectIdentifier;
use picky_tlv::{debug_log, Reader, Tag, Tlv};
use std::iter::FusedIterator;

/// The only certificate profile in use.
pub(crate) const PROFILE_IDENTIFIER_V1: u8 = 0x00;

/// Flat view over a decoded certificate or certificate request.
///
/// Every field borrows from the decoded buffer and holds the content of the
/// matching element, header excluded. Absent elements are `None`; the decoder
/// never captures an empty element.
///
/// The public key fields follow one of two shapes: `public_point` alone for a key
/// on a curve known by reference, or `prime_or_modulus` and `coefficient_a_or_exponent`
/// for an RSA key, then completed by the remaining curve parameters and `public_point`
/// for an EC key with explicit parameters. [`CertificateRecord::public_key`] tells them apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateRecord<'a> {
    /// Authority reference of a certificate request, outside of the certificate itself.
    pub outer_authority_reference: Option<&'a [u8]>,
    /// Signature of a certificate request, computed over `outer_signed_content`.
    pub outer_signature: Option<&'a [u8]>,
    /// Signature computed over `certificate_body`.
    pub signature: Option<&'a [u8]>,

    /// Certificate authority reference (CAR, `42`) inside the body.
    pub authority_reference: Option<&'a [u8]>,
    /// Certificate holder reference (CHR, `5F20`). Always set on a decoded record.
    pub holder_reference: Option<&'a [u8]>,
    /// Certificate holder authorization template (CHAT, `7F4C`): role OID and access bits.
    pub holder_authorization_template: Option<&'a [u8]>,
    /// Six unpacked BCD digits (`5F25`), see [`CertificateRecord::effective_date`].
    pub effective_date: Option<&'a [u8]>,
    /// Six unpacked BCD digits (`5F24`), see [`CertificateRecord::expiration_date`].
    pub expiration_date: Option<&'a [u8]>,
    /// Content of the certificate extensions element (`65`).
    pub extensions: Option<&'a [u8]>,

    /// Encoded object identifier of the signature scheme the key is used with.
    pub public_key_algorithm_oid: Option<&'a [u8]>,
    /// RSA modulus or EC prime (`81`).
    pub prime_or_modulus: Option<&'a [u8]>,
    /// RSA public exponent or EC coefficient `a` (`82`).
    pub coefficient_a_or_exponent: Option<&'a [u8]>,
    /// EC coefficient `b` (`83`).
    pub coefficient_b: Option<&'a [u8]>,
    /// EC base point in uncompressed form (`84`).
    pub base_point: Option<&'a [u8]>,
    /// EC base point order (`85`).
    pub order: Option<&'a [u8]>,
    /// EC public point (`86`), the only key field of a key on a curve known by reference.
    pub public_point: Option<&'a [u8]>,
    /// EC cofactor (`87`).
    pub cofactor: Option<&'a [u8]>,

    /// The whole certificate body element, header included.
    pub certificate_body: Option<&'a [u8]>,
    /// Content of a certificate request covered by the outer signature: the nested
    /// certificate followed by the outer authority reference.
    pub outer_signed_content: Option<&'a [u8]>,
}

/// Public key of a certificate, by shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicKey<'a> {
    /// Point on a curve given by the issuer's certificate.
    EcNamed { algorithm: &'a [u8], public_point: &'a [u8] },
    EcExplicit {
        algorithm: &'a [u8],
        parameters: EcDomainParameters<'a>,
        public_point: &'a [u8],
    },
    Rsa {
        algorithm: &'a [u8],
        modulus: &'a [u8],
        exponent: &'a [u8],
    },
}

impl<'a> PublicKey<'a> {
    /// Encoded object identifier of the key's signature scheme.
    pub fn algorithm(&self) -> &'a [u8] {
        match *self {
            PublicKey::EcNamed { algorithm, .. }
            | PublicKey::EcExplicit { algorithm, .. }
            | PublicKey::Rsa { algorithm, .. } => algorithm,
        }
    }
}

impl<'a> CertificateRecord<'a> {
    /// Decodes the certificate (`7F21`) or certificate request (`67`) at the start of `bytes`.
    ///
    /// The whole buffer must be well formed TLV. Returns the record along with the number
    /// of bytes spanned by the outer element; bytes past that element are not decoded,
    /// they may hold further certificates.
    pub fn decode(bytes: &'a [u8]) -> Result<(Self, usize)> {
        picky_tlv::validate_all(bytes)?;
        Self::decode_validated(bytes)
    }

    /// Decodes the first element of a buffer already checked by [`picky_tlv::validate_all`].
    fn decode_validated(bytes: &'a [u8]) -> Result<(Self, usize)> {
        let outer = Tlv::parse(bytes)?;
        let mut record = Self::default();

        let certificate = match outer.tag() {
            tag::AUTHENTICATION => record.decode_request(&outer)?,
            tag::CV_CERTIFICATE => outer,
            other => {
                debug_log!("unexpected outer tag {}", other);
                return Err(CvcError::UnexpectedOuterTag { found: other });
            }
        };
        record.decode_certificate(&certificate)?;

        Ok((record, outer.encoded_len()))
    }

    /// Reads the outer fields of a request and returns the nested certificate.
    fn decode_request(&mut self, request: &Tlv<'a>) -> Result<Tlv<'a>> {
        let mut fields = Reader::new(request.value());

        let certificate = read_any(&mut fields, "certificate")?;
        self.outer_authority_reference = Some(read_value(
            &mut fields,
            tag::AUTHORITY_REFERENCE,
            "outer authority reference",
        )?);
        let signed_len = fields.position();
        self.outer_signature = Some(read_value(&mut fields, tag::SIGNATURE, "outer signature")?);
        expect_end(&fields, "certificate request")?;

        if certificate.tag() != tag::CV_CERTIFICATE {
            debug_log!("certificate request wraps {}", certificate.tag());
            return Err(CvcError::UnexpectedRequestContent {
                found: certificate.tag(),
            });
        }

        self.outer_signed_content = request.value().get(..signed_len);

        Ok(certificate)
    }

    fn decode_certificate(&mut self, certificate: &Tlv<'a>) -> Result<()> {
        let mut fields = Reader::new(certificate.value());

        let body = read_expected(&mut fields, tag::CERTIFICATE_BODY, "certificate body")?;
        self.signature = Some(read_value(&mut fields, tag::SIGNATURE, "signature")?);
        expect_end(&fields, "certificate")?;

        self.certificate_body = Some(body.raw());
        self.decode_body(body.value())
    }

    fn decode_body(&mut self, body: &'a [u8]) -> Result<()> {
        let mut fields = Reader::new(body);

        let profile = read_expected(&mut fields, tag::PROFILE_IDENTIFIER, "profile identifier")?;
        if profile.value() != [PROFILE_IDENTIFIER_V1] {
            debug_log!("unsupported profile identifier {:02X?}", profile.value());
            return Err(CvcError::UnsupportedProfile);
        }

        self.authority_reference = read_optional(&mut fields, tag::AUTHORITY_REFERENCE, "authority reference")?;

        let public_key = read_expected(&mut fields, tag::PUBLIC_KEY, "public key")?;
        self.decode_public_key(public_key.value())?;

        self.holder_reference = Some(read_value(&mut fields, tag::HOLDER_REFERENCE, "holder reference")?);

        self.holder_authorization_template = read_optional(
            &mut fields,
            tag::HOLDER_AUTHORIZATION_TEMPLATE,
            "holder authorization template",
        )?;
        self.effective_date = read_optional(&mut fields, tag::EFFECTIVE_DATE, "effective date")?;
        self.expiration_date = read_optional(&mut fields, tag::EXPIRATION_DATE, "expiration date")?;

        if !fields.is_empty() {
            self.extensions = Some(read_value(&mut fields, tag::EXTENSIONS, "extensions")?);
        }

        expect_end(&fields, "certificate body")
    }

    fn decode_public_key(&mut self, key: &'a [u8]) -> Result<()> {
        let mut fields = Reader::new(key);

        self.public_key_algorithm_oid = Some(read_value(&mut fields, Tag::OID, "public key algorithm")?);

        if fields.peek_tag() == Some(tag::PUBLIC_POINT) {
            self.public_point = Some(read_value(&mut fields, tag::PUBLIC_POINT, "public point")?);
        } else {
            self.prime_or_modulus = Some(read_value(&mut fields, tag::PRIME_OR_MODULUS, "prime or modulus")?);
            self.coefficient_a_or_exponent = Some(read_value(
                &mut fields,
                tag::COEFFICIENT_A_OR_EXPONENT,
                "coefficient a or exponent",
            )?);

            if !fields.is_empty() {
                self.coefficient_b = Some(read_key_parameter(&mut fields, tag::COEFFICIENT_B, "coefficient b")?);
                self.base_point = Some(read_key_parameter(&mut fields, tag::BASE_POINT, "base point")?);
                self.order = Some(read_key_parameter(&mut fields, tag::ORDER, "order")?);
                self.public_point = Some(read_key_parameter(&mut fields, tag::PUBLIC_POINT, "public point")?);
                self.cofactor = Some(read_key_parameter(&mut fields, tag::COFACTOR, "cofactor")?);
            }
        }

        expect_end(&fields, "public key")
    }

    /// Typed view over the public key fields.
    pub fn public_key(&self) -> Result<PublicKey<'a>> {
        let algorithm = self.public_key_algorithm_oid.ok_or(CvcError::MissingElement {
            element: "public key algorithm",
        })?;

        match (self.prime_or_modulus, self.coefficient_a_or_exponent) {
            (None, None) => {
                let public_point = self.public_point.ok_or(CvcError::MissingElement {
                    element: "public point",
                })?;
                Ok(PublicKey::EcNamed {
                    algorithm,
                    public_point,
                })
            }
            (Some(prime_or_modulus), Some(coefficient_a_or_exponent)) => match (
                self.coefficient_b,
                self.base_point,
                self.order,
                self.public_point,
                self.cofactor,
            ) {
                (None, None, None, None, None) => Ok(PublicKey::Rsa {
                    algorithm,
                    modulus: prime_or_modulus,
                    exponent: coefficient_a_or_exponent,
                }),
                (Some(coefficient_b), Some(base_point), Some(order), Some(public_point), Some(cofactor)) => {
                    Ok(PublicKey::EcExplicit {
                        algorithm,
                        parameters: EcDomainParameters {
                            oid: None,
                            prime: prime_or_modulus,
                            coefficient_a: coefficient_a_or_exponent,
                            coefficient_b,
                            base_point,
                            order,
                            cofactor,
                        },
                        public_point,
                    })
                }
                _ => Err(CvcError::IncompleteKeyParameters {
                    missing: self.first_missing_curve_parameter(),
                }),
            },
            (Some(_), None) => Err(CvcError::IncompleteKeyParameters {
                missing: "coefficient a or exponent",
            }),
            (None, Some(_)) => Err(CvcError::IncompleteKeyParameters {
                missing: "prime or modulus",
            }),
        }
    }

    fn first_missing_curve_parameter(&self) -> &'static str {
        [
            ("coefficient b", self.coefficient_b),
            ("base point", self.base_point),
            ("order", self.order),
            ("public point", self.public_point),
            ("cofactor", self.cofactor),
        ]
        .into_iter()
        .find_map(|(name, value)| value.is_none().then_some(name))
        .unwrap_or("cofactor")
    }

    /// Parses the algorithm identifier of the public key.
    pub fn public_key_algorithm(&self) -> Result<ObjectIdentifier> {
        let encoded = self.public_key_algorithm_oid.ok_or(CvcError::MissingElement {
            element: "public key algorithm",
        })?;
        ObjectIdentifier::try_from(encoded).map_err(|_e| {
            debug_log!("invalid public key algorithm {:02X?}: {:?}", encoded, _e);
            CvcError::InvalidObjectIdentifier
        })
    }

    /// Encoded identifier of the registry curve whose prime is `prime_or_modulus`.
    ///
    /// `None` when the certificate carries no explicit parameters or the curve is unknown.
    pub fn curve_identifier(&self) -> Option<&'static [u8]> {
        curve::lookup_by_prime(self.prime_or_modulus?)
    }

    pub fn effective_date(&self) -> Result<Option<CvcDate>> {
        self.effective_date.map(CvcDate::from_digits).transpose()
    }

    pub fn expiration_date(&self) -> Result<Option<CvcDate>> {
        self.expiration_date.map(CvcDate::from_digits).transpose()
    }

    /// Whether the record was decoded from a certificate request.
    pub fn is_request(&self) -> bool {
        self.outer_signature.is_some()
    }
}

/// Next element of an explicit curve parameter group, which must be complete once started.
fn read_key_parameter<'a>(reader: &mut Reader<'a>, tag: Tag, element: &'static str) -> Result<&'a [u8]> {
    if reader.peek_tag() != Some(tag) {
        debug_log!("public key: {} is missing", element);
        return Err(CvcError::IncompleteKeyParameters { missing: element });
    }

    read_value(reader, tag, element)
}

/// Decodes the certificate or certificate request at the start of `bytes`.
pub fn decode_certificate(bytes: &[u8]) -> Result<(CertificateRecord<'_>, usize)> {
    CertificateRecord::decode(bytes)
}

/// Iterates over certificates stored back to back in `bytes`.
///
/// Iteration ends after the last certificate or after the first decoding error.
pub fn certificates(bytes: &[u8]) -> Certificates<'_> {
    Certificates {
        remaining: bytes,
        validated: false,
        failed: false,
    }
}

/// Iterator returned by [`certificates`].
#[derive(Debug, Clone)]
pub struct Certificates<'a> {
    remaining: &'a [u8],
    validated: bool,
    failed: bool,
}

impl<'a> Iterator for Certificates<'a> {
    type Item = Result<CertificateRecord<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining.is_empty() {
            return None;
        }

        // the buffer is checked once, on the first call
        if !self.validated {
            if let Err(e) = picky_tlv::validate_all(self.remaining) {
                self.failed = true;
                return Some(Err(e.into()));
            }
            self.validated = true;
        }

        match CertificateRecord::decode_validated(self.remaining) {
            Ok((record, consumed)) => {
                self.remaining = self.remaining.get(consumed..).unwrap_or_default();
                Some(Ok(record))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Certificates<'_> {}
