//! OIDs used by card verifiable certificates and the known curves

macro_rules! define_oid {
    ($uppercase:ident => $lowercase:ident => $str_value:literal) => {
        pub const $uppercase: &str = $str_value;

        pub fn $lowercase() -> oid::ObjectIdentifier {
            use std::sync::OnceLock;

            static OID: OnceLock<oid::ObjectIdentifier> = OnceLock::new();
            OID.get_or_init(|| match oid::ObjectIdentifier::try_from($uppercase) {
                Ok(oid) => oid,
                Err(e) => panic!("invalid OID literal {}: {:?}", $uppercase, e),
            })
            .clone()
        }
    };
    ( $( $uppercase:ident => $lowercase:ident => $str_value:literal, )+ ) => {
        $( define_oid! { $uppercase => $lowercase => $str_value } )+
    };
}

define_oid! {
    // ANSI-X962
    PRIME_FIELD => prime_field => "1.2.840.10045.1.1",
    SECP192R1 => secp192r1 => "1.2.840.10045.3.1.1",
    SECP256R1 => secp256r1 => "1.2.840.10045.3.1.7",

    // Certicom
    SECP192K1 => secp192k1 => "1.3.132.0.31",
    SECP256K1 => secp256k1 => "1.3.132.0.10",

    // ECC Brainpool
    BRAINPOOL_P192R1 => brainpool_p192r1 => "1.3.36.3.3.2.8.1.1.3",
    BRAINPOOL_P224R1 => brainpool_p224r1 => "1.3.36.3.3.2.8.1.1.5",
    BRAINPOOL_P256R1 => brainpool_p256r1 => "1.3.36.3.3.2.8.1.1.7",
    BRAINPOOL_P320R1 => brainpool_p320r1 => "1.3.36.3.3.2.8.1.1.9",

    // BSI TR-03110 terminal authentication
    ID_TA_RSA_V1_5_SHA_1 => id_ta_rsa_v1_5_sha_1 => "0.4.0.127.0.7.2.2.2.1.1",
    ID_TA_RSA_V1_5_SHA_256 => id_ta_rsa_v1_5_sha_256 => "0.4.0.127.0.7.2.2.2.1.2",
    ID_TA_RSA_PSS_SHA_256 => id_ta_rsa_pss_sha_256 => "0.4.0.127.0.7.2.2.2.1.4",
    ID_TA_ECDSA_SHA_1 => id_ta_ecdsa_sha_1 => "0.4.0.127.0.7.2.2.2.2.1",
    ID_TA_ECDSA_SHA_224 => id_ta_ecdsa_sha_224 => "0.4.0.127.0.7.2.2.2.2.2",
    ID_TA_ECDSA_SHA_256 => id_ta_ecdsa_sha_256 => "0.4.0.127.0.7.2.2.2.2.3",
    ID_TA_ECDSA_SHA_384 => id_ta_ecdsa_sha_384 => "0.4.0.127.0.7.2.2.2.2.4",
    ID_TA_ECDSA_SHA_512 => id_ta_ecdsa_sha_512 => "0.4.0.127.0.7.2.2.2.2.5",
}
