use crate::certificate::{CertificateRecord, PublicKey, PROFILE_IDENTIFIER_V1};
use crate::error::{CvcError, Result};
use crate::tag;
use picky_tlv::{Tag, Writer};

impl CertificateRecord<'_> {
    /// Encodes the record as a certificate, or as a certificate request when both
    /// outer fields are set.
    ///
    /// `certificate_body` and `outer_signed_content` are not used: they are rebuilt
    /// from the individual fields.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write(&mut Writer::new_to_byte_buf(&mut buf))?;
        Ok(buf)
    }

    /// Encodes the record into `out` and returns the number of bytes written.
    pub fn encode_to_bytes(&self, out: &mut [u8]) -> Result<usize> {
        let mut writer = Writer::new_to_bytes(out);
        self.write(&mut writer)?;
        Ok(writer.len())
    }

    fn write(&self, writer: &mut Writer<'_>) -> Result<()> {
        let certificate = writer.len();

        let body = writer.len();
        writer.append_tlv(tag::PROFILE_IDENTIFIER, &[PROFILE_IDENTIFIER_V1])?;
        append_optional(writer, tag::AUTHORITY_REFERENCE, self.authority_reference)?;
        self.write_public_key(writer)?;
        writer.append_tlv(
            tag::HOLDER_REFERENCE,
            required(self.holder_reference, "holder reference")?,
        )?;
        append_optional(
            writer,
            tag::HOLDER_AUTHORIZATION_TEMPLATE,
            self.holder_authorization_template,
        )?;
        append_optional(writer, tag::EFFECTIVE_DATE, self.effective_date)?;
        append_optional(writer, tag::EXPIRATION_DATE, self.expiration_date)?;
        append_optional(writer, tag::EXTENSIONS, self.extensions)?;
        writer.encapsulate(tag::CERTIFICATE_BODY, body)?;

        writer.append_tlv(tag::SIGNATURE, required(self.signature, "signature")?)?;
        writer.encapsulate(tag::CV_CERTIFICATE, certificate)?;

        match (self.outer_authority_reference, self.outer_signature) {
            (None, None) => {}
            (Some(authority_reference), Some(signature)) => {
                writer.append_tlv(tag::AUTHORITY_REFERENCE, authority_reference)?;
                writer.append_tlv(tag::SIGNATURE, signature)?;
                writer.encapsulate(tag::AUTHENTICATION, certificate)?;
            }
            (None, Some(_)) => {
                return Err(CvcError::MissingElement {
                    element: "outer authority reference",
                })
            }
            (Some(_), None) => {
                return Err(CvcError::MissingElement {
                    element: "outer signature",
                })
            }
        }

        Ok(())
    }

    fn write_public_key(&self, writer: &mut Writer<'_>) -> Result<()> {
        let key = writer.len();
        let public_key = self.public_key()?;
        writer.append_tlv(Tag::OID, public_key.algorithm())?;

        match public_key {
            PublicKey::EcNamed { public_point, .. } => {
                writer.append_tlv(tag::PUBLIC_POINT, public_point)?;
            }
            PublicKey::Rsa { modulus, exponent, .. } => {
                writer.append_tlv(tag::PRIME_OR_MODULUS, modulus)?;
                writer.append_tlv(tag::COEFFICIENT_A_OR_EXPONENT, exponent)?;
            }
            PublicKey::EcExplicit {
                parameters,
                public_point,
                ..
            } => {
                writer.append_tlv(tag::PRIME_OR_MODULUS, parameters.prime)?;
                writer.append_tlv(tag::COEFFICIENT_A_OR_EXPONENT, parameters.coefficient_a)?;
                writer.append_tlv(tag::COEFFICIENT_B, parameters.coefficient_b)?;
                writer.append_tlv(tag::BASE_POINT, parameters.base_point)?;
                writer.append_tlv(tag::ORDER, parameters.order)?;
                writer.append_tlv(tag::PUBLIC_POINT, public_point)?;
                writer.append_tlv(tag::COFACTOR, parameters.cofactor)?;
            }
        }

        writer.encapsulate(tag::PUBLIC_KEY, key)?;
        Ok(())
    }
}

fn required<'a>(value: Option<&'a [u8]>, element: &'static str) -> Result<&'a [u8]> {
    value.ok_or(CvcError::MissingElement { element })
}

fn append_optional(writer: &mut Writer<'_>, tag: Tag, value: Option<&[u8]>) -> Result<()> {
    if let Some(value) = value {
        writer.append_tlv(tag, value)?;
    }
    Ok(())
}
