use num_bigint_dig::{BigInt, Sign};
use picky_cvc::signature::max_encoded_len;
use picky_cvc::{decode_ecdsa_signature, encode_ecdsa_signature, CvcError};
use picky_tlv::{Reader, Tag, Tlv};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Deterministic filler bytes.
fn pseudo_random(seed: u32, len: usize) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) as u8
        })
        .collect()
}

fn integers(der: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let sequence = Tlv::parse(der).unwrap();
    assert_eq!(sequence.tag(), Tag::SEQUENCE);
    assert_eq!(sequence.encoded_len(), der.len());

    let mut reader = Reader::new(sequence.value());
    let r = reader.read_tlv().unwrap();
    let s = reader.read_tlv().unwrap();
    assert!(reader.is_empty());
    assert_eq!((r.tag(), s.tag()), (Tag::INTEGER, Tag::INTEGER));

    (r.value().to_vec(), s.value().to_vec())
}

#[test]
fn p256_sized_signature() {
    let mut raw = [0x11; 64];
    raw[0] = 0x80;
    raw[32] = 0x01;

    let mut out = [0u8; 72];
    let len = encode_ecdsa_signature(&raw, &mut out).unwrap();
    assert_eq!(len, 71);
    assert_eq!(&out[..5], &[0x30, 0x45, 0x02, 0x21, 0x00]);
    assert_eq!(&out[5..37], &raw[..32]);
    assert_eq!(&out[37..39], &[0x02, 0x20]);
    assert_eq!(&out[39..len], &raw[32..]);

    assert_eq!(decode_ecdsa_signature(&out[..len], 32).unwrap(), raw);
}

#[rstest]
#[case(24)]
#[case(32)]
#[case(40)]
#[case(66)]
fn integers_keep_their_unsigned_value(#[case] component_len: usize) {
    for seed in 0..16 {
        let mut raw = pseudo_random(seed, 2 * component_len);
        raw[0] |= 0x80;
        if seed % 2 == 0 {
            raw[component_len] = 0;
        }

        let mut out = vec![0u8; max_encoded_len(raw.len())];
        let len = encode_ecdsa_signature(&raw, &mut out).unwrap();
        let (r, s) = integers(&out[..len]);

        let (raw_r, raw_s) = raw.split_at(component_len);
        assert_eq!(r.len(), component_len + 1);
        assert_eq!(BigInt::from_signed_bytes_be(&r), BigInt::from_bytes_be(Sign::Plus, raw_r));
        assert_eq!(BigInt::from_signed_bytes_be(&s), BigInt::from_bytes_be(Sign::Plus, raw_s));
        assert!(s.len() == 1 || s[0] != 0 || s[1] & 0x80 != 0, "non minimal integer");

        assert_eq!(decode_ecdsa_signature(&out[..len], component_len).unwrap(), raw);
    }
}

#[test]
fn zero_components() {
    let raw = [0u8; 64];
    let mut out = [0u8; 72];
    let len = encode_ecdsa_signature(&raw, &mut out).unwrap();
    assert_eq!(&out[..len], &[0x30, 0x06, 0x02, 0x01, 0x00, 0x02, 0x01, 0x00]);
}

#[test]
fn rejected_inputs() {
    let mut out = [0u8; 72];
    assert_eq!(
        encode_ecdsa_signature(&[0x01; 63], &mut out),
        Err(CvcError::InvalidSignatureLength { len: 63 })
    );

    let mut small = [0u8; 70];
    let mut raw = [0xFF; 64];
    raw[32] = 0x7F;
    assert_eq!(
        encode_ecdsa_signature(&raw, &mut small),
        Err(CvcError::BufferTooSmall {
            required: 71,
            capacity: 70
        })
    );
}
