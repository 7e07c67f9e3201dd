use tink::DeterministicAead;
use tink_daead::subtle::AesSiv;

#[test]
fn round_trip() {
    let key = vec![0x22u8; 64];
    let siv = AesSiv::new(&key).unwrap();
    let ciphertext = siv.encrypt_deterministically(b"secret but linkable", b"ad").unwrap();
    let got = siv.decrypt_deterministically(&ciphertext, b"ad").unwrap();
    assert_eq!(got, b"secret but linkable");
}

#[test]
fn rejects_bad_key_size() {
    let key = vec![0u8; 32];
    assert!(AesSiv::new(&key).is_err());
}

#[test]
fn empty_plaintext_round_trips() {
    let key = vec![0x11u8; 64];
    let siv = AesSiv::new(&key).unwrap();
    let ciphertext = siv.encrypt_deterministically(b"", b"").unwrap();
    let got = siv.decrypt_deterministically(&ciphertext, b"").unwrap();
    assert_eq!(got, b"");
}

#[test]
fn same_plaintext_and_ad_produce_identical_ciphertext() {
    let key = vec![0x33u8; 64];
    let siv = AesSiv::new(&key).unwrap();
    let c1 = siv.encrypt_deterministically(b"repeat me", b"ad").unwrap();
    let c2 = siv.encrypt_deterministically(b"repeat me", b"ad").unwrap();
    assert_eq!(c1, c2);
}

#[test]
fn different_associated_data_changes_ciphertext() {
    let key = vec![0x44u8; 64];
    let siv = AesSiv::new(&key).unwrap();
    let c1 = siv.encrypt_deterministically(b"same plaintext", b"ad-1").unwrap();
    let c2 = siv.encrypt_deterministically(b"same plaintext", b"ad-2").unwrap();
    assert_ne!(c1, c2);
}

#[test]
fn detects_tampering() {
    let key = vec![0x55u8; 64];
    let siv = AesSiv::new(&key).unwrap();
    let ciphertext = siv.encrypt_deterministically(b"authenticate me", b"ad").unwrap();
    for mutated in tink_testutil::generate_mutations(&ciphertext) {
        assert!(siv.decrypt_deterministically(&mutated, b"ad").is_err());
    }
}
