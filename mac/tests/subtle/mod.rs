use tink::proto::HashType;
use tink::Mac;
use tink_mac::subtle::Hmac;

#[test]
fn round_trip_sha256() {
    let key = vec![0x42u8; 32];
    let hmac = Hmac::new(HashType::Sha256, &key, 32).unwrap();
    let tag = hmac.compute_mac(b"some data").unwrap();
    hmac.verify_mac(&tag, b"some data").unwrap();
}

#[test]
fn round_trip_truncated_tag() {
    let key = vec![0x11u8; 32];
    let hmac = Hmac::new(HashType::Sha256, &key, 16).unwrap();
    let tag = hmac.compute_mac(b"hi").unwrap();
    assert_eq!(tag.len(), 16);
    hmac.verify_mac(&tag, b"hi").unwrap();
}

#[test]
fn round_trip_sha512() {
    let key = vec![0x77u8; 64];
    let hmac = Hmac::new(HashType::Sha512, &key, 64).unwrap();
    let tag = hmac.compute_mac(b"other data").unwrap();
    hmac.verify_mac(&tag, b"other data").unwrap();
}

#[test]
fn rejects_short_key() {
    let key = vec![0u8; 8];
    assert!(Hmac::new(HashType::Sha256, &key, 32).is_err());
}

#[test]
fn rejects_oversized_tag() {
    let key = vec![0u8; 32];
    assert!(Hmac::new(HashType::Sha256, &key, 64).is_err());
}

#[test]
fn different_keys_produce_different_tags() {
    let hmac1 = Hmac::new(HashType::Sha256, &[0x01u8; 32], 32).unwrap();
    let hmac2 = Hmac::new(HashType::Sha256, &[0x02u8; 32], 32).unwrap();
    assert_ne!(
        hmac1.compute_mac(b"data").unwrap(),
        hmac2.compute_mac(b"data").unwrap()
    );
}

#[test]
fn mutated_tags_fail_verification() {
    let hmac = Hmac::new(HashType::Sha256, &[0x09u8; 32], 32).unwrap();
    let tag = hmac.compute_mac(b"message").unwrap();
    for mutated in tink_testutil::generate_mutations(&tag) {
        assert!(hmac.verify_mac(&mutated, b"message").is_err());
    }
}
