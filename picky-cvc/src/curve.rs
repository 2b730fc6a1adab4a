//! Registry of the known prime-field curves.
//!
//! The table is immutable and lives in static memory: lookups are allocation
//! free and can run concurrently from any thread.

use crate::domain_parameters::EcDomainParameters;
use crate::oids;
use hex_literal::hex;
use oid::ObjectIdentifier;
use std::fmt;

/// A curve of the registry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NamedCurve {
    Secp192r1,
    /// NIST P-256
    Secp256r1,
    BrainpoolP192r1,
    BrainpoolP224r1,
    BrainpoolP256r1,
    BrainpoolP320r1,
    Secp192k1,
    Secp256k1,
}

impl NamedCurve {
    /// Every known curve, in registry order.
    pub const ALL: [NamedCurve; 8] = [
        NamedCurve::Secp192r1,
        NamedCurve::Secp256r1,
        NamedCurve::BrainpoolP192r1,
        NamedCurve::BrainpoolP224r1,
        NamedCurve::BrainpoolP256r1,
        NamedCurve::BrainpoolP320r1,
        NamedCurve::Secp192k1,
        NamedCurve::Secp256k1,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NamedCurve::Secp192r1 => "secp192r1",
            NamedCurve::Secp256r1 => "secp256r1",
            NamedCurve::BrainpoolP192r1 => "brainpoolP192r1",
            NamedCurve::BrainpoolP224r1 => "brainpoolP224r1",
            NamedCurve::BrainpoolP256r1 => "brainpoolP256r1",
            NamedCurve::BrainpoolP320r1 => "brainpoolP320r1",
            NamedCurve::Secp192k1 => "secp192k1",
            NamedCurve::Secp256k1 => "secp256k1",
        }
    }

    /// Domain parameters of the curve, with `oid` always set.
    pub fn parameters(self) -> &'static EcDomainParameters<'static> {
        &CURVES[self as usize]
    }

    /// Encoded object identifier (content bytes only, without tag and length).
    pub fn oid_bytes(self) -> &'static [u8] {
        // every registry entry carries its identifier
        self.parameters().oid.unwrap_or_default()
    }

    pub fn oid(self) -> ObjectIdentifier {
        match self {
            NamedCurve::Secp192r1 => oids::secp192r1(),
            NamedCurve::Secp256r1 => oids::secp256r1(),
            NamedCurve::BrainpoolP192r1 => oids::brainpool_p192r1(),
            NamedCurve::BrainpoolP224r1 => oids::brainpool_p224r1(),
            NamedCurve::BrainpoolP256r1 => oids::brainpool_p256r1(),
            NamedCurve::BrainpoolP320r1 => oids::brainpool_p320r1(),
            NamedCurve::Secp192k1 => oids::secp192k1(),
            NamedCurve::Secp256k1 => oids::secp256k1(),
        }
    }

    /// Finds the curve whose encoded identifier is exactly `oid`.
    pub fn from_oid_bytes(oid: &[u8]) -> Option<Self> {
        Self::ALL.into_iter().find(|curve| curve.oid_bytes() == oid)
    }

    /// Finds the curve defined over the field of canonical (unsigned, no leading zero) `prime`.
    pub fn from_prime(prime: &[u8]) -> Option<Self> {
        Self::ALL.into_iter().find(|curve| curve.parameters().prime == prime)
    }
}

impl fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<NamedCurve> for ObjectIdentifier {
    fn from(curve: NamedCurve) -> Self {
        curve.oid()
    }
}

/// Domain parameters of the curve identified by the encoded `oid`.
///
/// Matching is exact: a prefix of a known identifier finds nothing.
pub fn lookup_by_identifier(oid: &[u8]) -> Option<&'static EcDomainParameters<'static>> {
    NamedCurve::from_oid_bytes(oid).map(NamedCurve::parameters)
}

/// Encoded identifier of the curve defined over the field of `prime`.
pub fn lookup_by_prime(prime: &[u8]) -> Option<&'static [u8]> {
    NamedCurve::from_prime(prime).map(NamedCurve::oid_bytes)
}

const SECP192R1_OID: [u8; 8] = hex!("2a8648ce3d030101");
const SECP256R1_OID: [u8; 8] = hex!("2a8648ce3d030107");
const BRAINPOOL_P192R1_OID: [u8; 9] = hex!("2b2403030208010103");
const BRAINPOOL_P224R1_OID: [u8; 9] = hex!("2b2403030208010105");
const BRAINPOOL_P256R1_OID: [u8; 9] = hex!("2b2403030208010107");
const BRAINPOOL_P320R1_OID: [u8; 9] = hex!("2b2403030208010109");
const SECP192K1_OID: [u8; 5] = hex!("2b8104001f");
const SECP256K1_OID: [u8; 5] = hex!("2b8104000a");

// Indexed by `NamedCurve as usize`.
static CURVES: [EcDomainParameters<'static>; 8] = [
    // secp192r1
    EcDomainParameters {
        oid: Some(&SECP192R1_OID),
        prime: &hex!("fffffffffffffffffffffffffffffffeffffffffffffffff"),
        coefficient_a: &hex!("fffffffffffffffffffffffffffffffefffffffffffffffc"),
        coefficient_b: &hex!("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1"),
        base_point: &hex!("04188da80eb03090f67cbf20eb43a18800f4ff0afd82ff101207192b95ffc8da78631011ed6b24cdd573f977a11e794811"),
        order: &hex!("ffffffffffffffffffffffff99def836146bc9b1b4d22831"),
        cofactor: &hex!("01"),
    },
    // secp256r1
    EcDomainParameters {
        oid: Some(&SECP256R1_OID),
        prime: &hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
        coefficient_a: &hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
        coefficient_b: &hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
        base_point: &hex!("046b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c2964fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
        order: &hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
        cofactor: &hex!("01"),
    },
    // brainpoolP192r1
    EcDomainParameters {
        oid: Some(&BRAINPOOL_P192R1_OID),
        prime: &hex!("c302f41d932a36cda7a3463093d18db78fce476de1a86297"),
        coefficient_a: &hex!("6a91174076b1e0e19c39c031fe8685c1cae040e5c69a28ef"),
        coefficient_b: &hex!("469a28ef7c28cca3dc721d044f4496bcca7ef4146fbf25c9"),
        base_point: &hex!("04c0a0647eaab6a48753b033c56cb0f0900a2f5c4853375fd614b690866abd5bb88b5f4828c1490002e6773fa2fa299b8f"),
        order: &hex!("c302f41d932a36cda7a3462f9e9e916b5be8f1029ac4acc1"),
        cofactor: &hex!("01"),
    },
    // brainpoolP224r1
    EcDomainParameters {
        oid: Some(&BRAINPOOL_P224R1_OID),
        prime: &hex!("d7c134aa264366862a18302575d1d787b09f075797da89f57ec8c0ff"),
        coefficient_a: &hex!("68a5e62ca9ce6c1c299803a6c1530b514e182ad8b0042a59cad29f43"),
        coefficient_b: &hex!("2580f63ccfe44138870713b1a92369e33e2135d266dbb372386c400b"),
        base_point: &hex!("040d9029ad2c7e5cf4340823b2a87dc68c9e4ce3174c1e6efdee12c07d58aa56f772c0726f24c6b89e4ecdac24354b9e99caa3f6d3761402cd"),
        order: &hex!("d7c134aa264366862a18302575d0fb98d116bc4b6ddebca3a5a7939f"),
        cofactor: &hex!("01"),
    },
    // brainpoolP256r1
    EcDomainParameters {
        oid: Some(&BRAINPOOL_P256R1_OID),
        prime: &hex!("a9fb57dba1eea9bc3e660a909d838d726e3bf623d52620282013481d1f6e5377"),
        coefficient_a: &hex!("7d5a0975fc2c3057eef67530417affe7fb8055c126dc5c6ce94a4b44f330b5d9"),
        coefficient_b: &hex!("26dc5c6ce94a4b44f330b5d9bbd77cbf958416295cf7e1ce6bccdc18ff8c07b6"),
        base_point: &hex!("048bd2aeb9cb7e57cb2c4b482ffc81b7afb9de27e1e3bd23c23a4453bd9ace3262547ef835c3dac4fd97f8461a14611dc9c27745132ded8e545c1d54c72f046997"),
        order: &hex!("a9fb57dba1eea9bc3e660a909d838d718c397aa3b561a6f7901e0e82974856a7"),
        cofactor: &hex!("01"),
    },
    // brainpoolP320r1
    EcDomainParameters {
        oid: Some(&BRAINPOOL_P320R1_OID),
        prime: &hex!("d35e472036bc4fb7e13c785ed201e065f98fcfa6f6f40def4f92b9ec7893ec28fcd412b1f1b32e27"),
        coefficient_a: &hex!("3ee30b568fbab0f883ccebd46d3f3bb8a2a73513f5eb79da66190eb085ffa9f492f375a97d860eb4"),
        coefficient_b: &hex!("520883949dfdbc42d3ad198640688a6fe13f41349554b49acc31dccd884539816f5eb4ac8fb1f1a6"),
        base_point: &hex!("0443bd7e9afb53d8b85289bcc48ee5bfe6f20137d10a087eb6e7871e2a10a599c710af8d0d39e2061114fdd05545ec1cc8ab4093247f77275e0743ffed117182eaa9c77877aaac6ac7d35245d1692e8ee1"),
        order: &hex!("d35e472036bc4fb7e13c785ed201e065f98fcfa5b68f12a32d482ec7ee8658e98691555b44c59311"),
        cofactor: &hex!("01"),
    },
    // secp192k1
    EcDomainParameters {
        oid: Some(&SECP192K1_OID),
        prime: &hex!("fffffffffffffffffffffffffffffffffffffffeffffee37"),
        coefficient_a: &hex!("000000000000000000000000000000000000000000000000"),
        coefficient_b: &hex!("000000000000000000000000000000000000000000000003"),
        base_point: &hex!("04db4ff10ec057e9ae26b07d0280b7f4341da5d1b1eae06c7d9b2f2f6d9c5628a7844163d015be86344082aa88d95e2f9d"),
        order: &hex!("fffffffffffffffffffffffe26f2fc170f69466a74defd8d"),
        cofactor: &hex!("01"),
    },
    // secp256k1
    EcDomainParameters {
        oid: Some(&SECP256K1_OID),
        prime: &hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
        coefficient_a: &hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        coefficient_b: &hex!("0000000000000000000000000000000000000000000000000000000000000007"),
        base_point: &hex!("0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
        order: &hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
        cofactor: &hex!("01"),
    },
];
