use tink::proto::{EcPointFormat, EllipticCurveType, HashType};
use tink::{HybridDecrypt, HybridEncrypt};
use tink_hybrid::subtle::{ecdh, DemHelper, EciesAeadHkdfHybridDecrypt, EciesAeadHkdfHybridEncrypt};

fn init() {
    let _ = tink_aead::init();
}

fn new_pair(
    curve: EllipticCurveType,
    point_format: EcPointFormat,
) -> (EciesAeadHkdfHybridEncrypt, EciesAeadHkdfHybridDecrypt) {
    init();
    let (private_key, public_key) = ecdh::generate_key_pair(curve).unwrap();
    let (x, y) = ecdh::coordinates(&public_key).unwrap();
    let key_value = match &private_key {
        ecdh::EcdhPrivateKey::P256(sk) => sk.to_bytes().to_vec(),
        _ => panic!("unexpected curve"),
    };
    let dem_helper = DemHelper::new(&tink_aead::aes128_gcm_key_template()).unwrap();
    let encrypt = EciesAeadHkdfHybridEncrypt::new(
        curve,
        &x,
        &y,
        vec![],
        HashType::Sha256,
        point_format,
        dem_helper,
    )
    .unwrap();
    let dem_helper = DemHelper::new(&tink_aead::aes128_gcm_key_template()).unwrap();
    let decrypt = EciesAeadHkdfHybridDecrypt::new(
        curve,
        &key_value,
        vec![],
        HashType::Sha256,
        point_format,
        dem_helper,
    )
    .unwrap();
    (encrypt, decrypt)
}

#[test]
fn round_trip_uncompressed() {
    let (encrypt, decrypt) = new_pair(EllipticCurveType::NistP256, EcPointFormat::Uncompressed);
    let ciphertext = encrypt.encrypt(b"hybrid encryption secret", b"context").unwrap();
    let got = decrypt.decrypt(&ciphertext, b"context").unwrap();
    assert_eq!(got, b"hybrid encryption secret");
}

#[test]
fn round_trip_compressed() {
    let (encrypt, decrypt) = new_pair(EllipticCurveType::NistP256, EcPointFormat::Compressed);
    let ciphertext = encrypt.encrypt(b"compressed points", b"context").unwrap();
    let got = decrypt.decrypt(&ciphertext, b"context").unwrap();
    assert_eq!(got, b"compressed points");

    // A compressed SEC1 point is 1 + 32 bytes, half the uncompressed size.
    let kem_size = ecdh::kem_bytes_size(EllipticCurveType::NistP256, EcPointFormat::Compressed).unwrap();
    assert_eq!(kem_size, 33);
}

#[test]
fn empty_plaintext_round_trips() {
    let (encrypt, decrypt) = new_pair(EllipticCurveType::NistP256, EcPointFormat::Uncompressed);
    let ciphertext = encrypt.encrypt(b"", b"context").unwrap();
    let got = decrypt.decrypt(&ciphertext, b"context").unwrap();
    assert_eq!(got, b"");
}

#[test]
fn each_encryption_uses_a_fresh_ephemeral_key() {
    let (encrypt, _decrypt) = new_pair(EllipticCurveType::NistP256, EcPointFormat::Uncompressed);
    let c1 = encrypt.encrypt(b"same message", b"context").unwrap();
    let c2 = encrypt.encrypt(b"same message", b"context").unwrap();
    assert_ne!(c1, c2, "encrypting twice should not repeat the ephemeral key");
}

#[test]
fn truncated_ciphertext_is_rejected() {
    let (encrypt, decrypt) = new_pair(EllipticCurveType::NistP256, EcPointFormat::Uncompressed);
    let ciphertext = encrypt.encrypt(b"hello", b"context").unwrap();
    assert!(decrypt.decrypt(&ciphertext[..10], b"context").is_err());
}

#[test]
fn tampering_is_detected() {
    let (encrypt, decrypt) = new_pair(EllipticCurveType::NistP256, EcPointFormat::Uncompressed);
    let ciphertext = encrypt.encrypt(b"hello, hybrid world", b"context").unwrap();
    for mutated in tink_testutil::generate_mutations(&ciphertext) {
        assert!(
            decrypt.decrypt(&mutated, b"context").is_err(),
            "mutation unexpectedly decrypted"
        );
    }
}

#[test]
fn wrong_context_info_is_rejected() {
    let (encrypt, decrypt) = new_pair(EllipticCurveType::NistP256, EcPointFormat::Uncompressed);
    let ciphertext = encrypt.encrypt(b"hello", b"context a").unwrap();
    assert!(decrypt.decrypt(&ciphertext, b"context b").is_err());
}

#[test]
fn dem_helper_rejects_unsupported_template() {
    let bogus = tink::proto::KeyTemplate {
        type_url: "type.googleapis.com/not.a.real.Dem".to_string(),
        value: vec![],
        output_prefix_type: tink::proto::OutputPrefixType::Tink as i32,
    };
    assert!(DemHelper::new(&bogus).is_err());
}
