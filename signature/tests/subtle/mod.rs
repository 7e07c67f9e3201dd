use tink::proto::{EcdsaSignatureEncoding, EllipticCurveType, HashType};
use tink::{Signer, Verifier};
use tink_signature::subtle::{EcdsaSigner, EcdsaVerifier, Ed25519Signer, Ed25519Verifier};

#[test]
fn ecdsa_p256_round_trip() {
    let key = tink_testutil::new_random_ecdsa_p256_private_key();
    let public_key = key.public_key.unwrap();
    let signer = EcdsaSigner::new(
        HashType::Sha256,
        EllipticCurveType::NistP256,
        EcdsaSignatureEncoding::Der,
        &key.key_value,
    )
    .unwrap();
    let verifier = EcdsaVerifier::new(
        HashType::Sha256,
        EllipticCurveType::NistP256,
        EcdsaSignatureEncoding::Der,
        &public_key.x,
        &public_key.y,
    )
    .unwrap();

    let data = b"hand-rolled signer/verifier pair";
    let sig = signer.sign(data).unwrap();
    verifier.verify(&sig, data).unwrap();
}

/// Signs with a key fixed across every test run (not freshly generated),
/// so the round trip exercises the same material every time and a second
/// signature over the same message can be compared for determinism.
#[test]
fn ecdsa_p256_fixed_key_round_trip_is_deterministic() {
    let key = tink_testutil::new_fixed_ecdsa_p256_private_key();
    let public_key = key.public_key.clone().unwrap();
    let signer = EcdsaSigner::new(
        HashType::Sha256,
        EllipticCurveType::NistP256,
        EcdsaSignatureEncoding::Der,
        &key.key_value,
    )
    .unwrap();
    let verifier = EcdsaVerifier::new(
        HashType::Sha256,
        EllipticCurveType::NistP256,
        EcdsaSignatureEncoding::Der,
        &public_key.x,
        &public_key.y,
    )
    .unwrap();

    let data = b"a fixed message for a fixed key";
    let sig1 = signer.sign(data).unwrap();
    let sig2 = signer.sign(data).unwrap();
    assert_eq!(sig1, sig2, "RFC 6979 nonce derivation must be deterministic");
    verifier.verify(&sig1, data).unwrap();
}

#[test]
fn ecdsa_rejects_mismatched_curve_params() {
    assert!(EcdsaSigner::new(
        HashType::Sha256,
        EllipticCurveType::NistP521,
        EcdsaSignatureEncoding::Der,
        &[0u8; 32],
    )
    .is_err());
}

#[test]
fn ecdsa_tampered_signature_fails() {
    let key = tink_testutil::new_random_ecdsa_p256_private_key();
    let public_key = key.public_key.unwrap();
    let signer = EcdsaSigner::new(
        HashType::Sha256,
        EllipticCurveType::NistP256,
        EcdsaSignatureEncoding::Der,
        &key.key_value,
    )
    .unwrap();
    let verifier = EcdsaVerifier::new(
        HashType::Sha256,
        EllipticCurveType::NistP256,
        EcdsaSignatureEncoding::Der,
        &public_key.x,
        &public_key.y,
    )
    .unwrap();

    let data = b"tamper with me";
    let sig = signer.sign(data).unwrap();
    for mutated in tink_testutil::generate_mutations(&sig) {
        assert!(verifier.verify(&mutated, data).is_err());
    }
}

#[test]
fn ed25519_round_trip() {
    let key = tink_testutil::new_random_ed25519_private_key();
    let public_key = key.public_key.unwrap();
    let signer = Ed25519Signer::new(&key.key_value).unwrap();
    let verifier = Ed25519Verifier::new(&public_key.key_value).unwrap();

    let data = b"ed25519 signed data";
    let sig = signer.sign(data).unwrap();
    verifier.verify(&sig, data).unwrap();
}

/// Exercises RFC 8032 §7.1 test vector 1's fixed seed, rather than a
/// freshly-generated key, so the key material is reproducible across runs.
#[test]
fn ed25519_fixed_key_round_trip() {
    let key = tink_testutil::new_fixed_ed25519_private_key();
    let public_key = key.public_key.clone().unwrap();
    let signer = Ed25519Signer::new(&key.key_value).unwrap();
    let verifier = Ed25519Verifier::new(&public_key.key_value).unwrap();

    let sig1 = signer.sign(b"").unwrap();
    let sig2 = signer.sign(b"").unwrap();
    assert_eq!(sig1, sig2, "Ed25519 signing is deterministic by construction");
    verifier.verify(&sig1, b"").unwrap();
}

#[test]
fn ed25519_rejects_bad_key_size() {
    assert!(Ed25519Signer::new(&[0u8; 16]).is_err());
    assert!(Ed25519Verifier::new(&[0u8; 16]).is_err());
}

#[test]
fn ed25519_tampered_message_fails() {
    let key = tink_testutil::new_random_ed25519_private_key();
    let public_key = key.public_key.unwrap();
    let signer = Ed25519Signer::new(&key.key_value).unwrap();
    let verifier = Ed25519Verifier::new(&public_key.key_value).unwrap();

    let sig = signer.sign(b"original").unwrap();
    assert!(verifier.verify(&sig, b"tampered").is_err());
}
