use hex_literal::hex;
use picky_cvc::{
    extract_explicit_domain_parameters, resolve_curve_by_identifier, resolve_curve_identifier_for_certificate,
    CertificateRecord, EcDomainParameters, NamedCurve,
};
use picky_test_data::{EC_PARAMS_BRAINPOOLP320R1_EXPLICIT, EC_PARAMS_SECP256R1_EXPLICIT};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(&hex!("2A8648CE3D030101"), NamedCurve::Secp192r1)]
#[case(&hex!("2A8648CE3D030107"), NamedCurve::Secp256r1)]
#[case(&hex!("2B2403030208010103"), NamedCurve::BrainpoolP192r1)]
#[case(&hex!("2B2403030208010105"), NamedCurve::BrainpoolP224r1)]
#[case(&hex!("2B2403030208010107"), NamedCurve::BrainpoolP256r1)]
#[case(&hex!("2B2403030208010109"), NamedCurve::BrainpoolP320r1)]
#[case(&hex!("2B8104001F"), NamedCurve::Secp192k1)]
#[case(&hex!("2B8104000A"), NamedCurve::Secp256k1)]
fn known_identifiers(#[case] oid: &[u8], #[case] curve: NamedCurve) {
    let parameters = resolve_curve_by_identifier(oid).unwrap();
    assert_eq!(parameters.oid, Some(oid));
    assert_eq!(parameters, curve.parameters());
}

#[rstest]
#[case::empty(&[])]
#[case::prefix(&hex!("2A8648CE3D0301"))]
#[case::longer(&hex!("2A8648CE3D03010700"))]
#[case::secp384r1(&hex!("2B81040022"))]
#[case::brainpool_p384r1(&hex!("2B240303020801010B"))]
#[case::prime_field_type(&hex!("2A8648CE3D0101"))]
fn unknown_identifiers(#[case] oid: &[u8]) {
    assert_eq!(resolve_curve_by_identifier(oid), None);
}

#[test]
fn exactly_eight_curves() {
    let resolved = NamedCurve::ALL
        .iter()
        .filter(|curve| resolve_curve_by_identifier(curve.oid_bytes()).is_some())
        .count();
    assert_eq!(resolved, 8);
}

#[test]
fn primes_identify_curves() {
    for curve in NamedCurve::ALL {
        let record = CertificateRecord {
            prime_or_modulus: Some(curve.parameters().prime),
            ..Default::default()
        };
        assert_eq!(
            resolve_curve_identifier_for_certificate(&record),
            Some(curve.oid_bytes()),
            "{curve}"
        );

        for other in NamedCurve::ALL.into_iter().filter(|other| *other != curve) {
            assert_ne!(curve.parameters().prime, other.parameters().prime, "{curve} and {other}");
        }
    }

    assert_eq!(resolve_curve_identifier_for_certificate(&CertificateRecord::default()), None);
}

#[rstest]
#[case(EC_PARAMS_SECP256R1_EXPLICIT, NamedCurve::Secp256r1)]
#[case(EC_PARAMS_BRAINPOOLP320R1_EXPLICIT, NamedCurve::BrainpoolP320r1)]
fn explicit_parameters_match_the_registry(#[case] der: &[u8], #[case] curve: NamedCurve) {
    let parameters = extract_explicit_domain_parameters(der).unwrap();
    assert_eq!(
        parameters,
        EcDomainParameters {
            oid: None,
            ..*curve.parameters()
        }
    );
    assert_eq!(parameters.named_curve(), Some(curve));
    assert_eq!(parameters.field_size() * 2 + 1, parameters.base_point.len());

    assert_eq!(curve.parameters().to_explicit_der().unwrap(), der);
}

#[test]
fn every_registry_curve_survives_explicit_encoding() {
    for curve in NamedCurve::ALL {
        let der = curve.parameters().to_explicit_der().unwrap();
        let parameters = extract_explicit_domain_parameters(&der).unwrap();
        assert_eq!(parameters.named_curve(), Some(curve));
        assert_eq!(parameters.order, curve.parameters().order);
        assert_eq!(parameters.coefficient_a, curve.parameters().coefficient_a);
    }
}

#[test]
fn well_known_field_primes() {
    expect_test::expect![[r#"
        secp192r1: fffffffffffffffffffffffffffffffeffffffffffffffff
        secp256r1: ffffffff00000001000000000000000000000000ffffffffffffffffffffffff
        brainpoolP192r1: c302f41d932a36cda7a3463093d18db78fce476de1a86297
        brainpoolP224r1: d7c134aa264366862a18302575d1d787b09f075797da89f57ec8c0ff
        brainpoolP256r1: a9fb57dba1eea9bc3e660a909d838d726e3bf623d52620282013481d1f6e5377
        brainpoolP320r1: d35e472036bc4fb7e13c785ed201e065f98fcfa6f6f40def4f92b9ec7893ec28fcd412b1f1b32e27
        secp192k1: fffffffffffffffffffffffffffffffffffffffeffffee37
        secp256k1: fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f
    "#]]
    .assert_eq(
        &NamedCurve::ALL
            .iter()
            .map(|curve| format!("{curve}: {}\n", hex::encode(curve.parameters().prime)))
            .collect::<String>(),
    );
}
