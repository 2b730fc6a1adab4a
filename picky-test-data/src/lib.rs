//! Test data shared between the picky CVC crates.
//!
//! Certificates use the TR-03110 tag layout. Public points, signatures and RSA moduli
//! are fixed byte patterns, not real key material: nothing here verifies.

// profile 0, id-TA-ECDSA-SHA-256, public point only, CHR "HOLDER01", no optional fields
pub const CVC_EC_NAMED_CURVE: &[u8] = include_bytes!("../test_assets/cvc/ec-named-curve.cvcert");

// self-signed CVCA: CAR = CHR = "DECVCA00001", explicit brainpoolP256r1 parameters,
// CHAT (id-AT, C3), effective 2025-01-15, expiration 2028-01-14, one description extension
pub const CVC_EC_EXPLICIT_CVCA: &[u8] = include_bytes!("../test_assets/cvc/ec-explicit-cvca.cvcert");

// CAR "DEDV000001", id-TA-RSA-v1-5-SHA-256 with 1024-bit modulus and exponent 65537, CHR "DETERM00001"
pub const CVC_RSA_TERMINAL: &[u8] = include_bytes!("../test_assets/cvc/rsa-terminal.cvcert");

// authenticated request: inner certificate CHR "DETERM00002" issued by "DECVCA00001",
// outer CAR "DEDV000001"; the inner 0x7F21 element is the first 205 bytes of the content
pub const CVC_EC_REQUEST: &[u8] = include_bytes!("../test_assets/cvc/ec-request.cvreq");
pub const CVC_EC_REQUEST_INNER_OFFSET: usize = 4;
pub const CVC_EC_REQUEST_INNER_LEN: usize = 205;

// X9.62 ECParameters with explicit prime-field parameters (version 1, cofactor 1)
pub const EC_PARAMS_SECP256R1_EXPLICIT: &[u8] = include_bytes!("../test_assets/ec_params/secp256r1-explicit.der");
pub const EC_PARAMS_BRAINPOOLP320R1_EXPLICIT: &[u8] =
    include_bytes!("../test_assets/ec_params/brainpoolP320r1-explicit.der");
