use tink::keyset::{self, BinaryKeyset, Handle, Manager, Reader, Writer};
use tink::proto::OutputPrefixType;
use tink::Aead;

fn init() {
    tink_aead::init().unwrap();
}

#[test]
fn handle_new_generates_a_usable_keyset() {
    init();
    let template = tink_aead::aes128_gcm_key_template();
    let handle = Handle::new(&template).unwrap();
    let aead = tink_aead::new(&handle).unwrap();
    let ciphertext = aead.encrypt(b"hello", b"ad").unwrap();
    assert_eq!(aead.decrypt(&ciphertext, b"ad").unwrap(), b"hello");
}

#[test]
fn manager_add_and_rotate_changes_primary() {
    init();
    let template = tink_aead::aes128_gcm_key_template();
    let mut manager = Manager::new();
    let first = manager.add(&template).unwrap();
    let second = manager.rotate(&template).unwrap();
    assert_ne!(first, second);

    let handle = manager.handle().unwrap();
    let info = keyset::handle::keyset_info(&keyset::insecure::key_material(&handle));
    assert_eq!(info.primary_key_id, second);
    assert_eq!(info.key_info.len(), 2);
}

#[test]
fn manager_disable_refuses_to_disable_the_primary() {
    init();
    let template = tink_aead::aes128_gcm_key_template();
    let mut manager = Manager::new();
    let id = manager.add(&template).unwrap();
    assert!(manager.disable(id).is_err());
}

#[test]
fn manager_set_primary_rejects_unknown_key_id() {
    init();
    let template = tink_aead::aes128_gcm_key_template();
    let mut manager = Manager::new();
    manager.add(&template).unwrap();
    assert!(manager.set_primary(0xdead_beef).is_err());
}

#[test]
fn insecure_round_trips_cleartext_keyset() {
    init();
    let ks = tink_testutil::new_test_aes_gcm_keyset(OutputPrefixType::Tink);
    let handle = keyset::insecure::new_handle(ks.clone()).unwrap();
    assert_eq!(keyset::insecure::key_material(&handle), ks);
}

#[test]
fn validate_rejects_an_empty_keyset() {
    let ks = tink::proto::Keyset {
        primary_key_id: 0,
        key: vec![],
    };
    assert!(keyset::validate(&ks).is_err());
}

#[test]
fn validate_rejects_a_disabled_primary() {
    let mut ks = tink_testutil::new_test_aes_gcm_keyset(OutputPrefixType::Tink);
    for k in ks.key.iter_mut() {
        if k.key_id == ks.primary_key_id {
            k.status = tink::proto::KeyStatusType::Disabled as i32;
        }
    }
    assert!(keyset::validate(&ks).is_err());
}

#[test]
fn handle_write_and_read_round_trips_through_a_wrapping_aead() {
    init();
    let wrapping_template = tink_aead::aes128_gcm_key_template();
    let wrapping_handle = Handle::new(&wrapping_template).unwrap();
    let wrapping_aead = tink_aead::new(&wrapping_handle).unwrap();

    let template = tink_aead::aes128_gcm_key_template();
    let handle = Handle::new(&template).unwrap();

    let mut store = BinaryKeyset::default();
    handle.write(&mut store, wrapping_aead.as_ref()).unwrap();
    let read_back = Handle::read(&store, wrapping_aead.as_ref()).unwrap();

    let original_aead = tink_aead::new(&handle).unwrap();
    let read_back_aead = tink_aead::new(&read_back).unwrap();
    let ciphertext = original_aead.encrypt(b"round trip", b"").unwrap();
    assert_eq!(read_back_aead.decrypt(&ciphertext, b"").unwrap(), b"round trip");
}

#[test]
fn read_with_no_secrets_rejects_a_secret_keyset() {
    init();
    let ks = tink_testutil::new_test_aes_gcm_keyset(OutputPrefixType::Tink);
    let mut store = BinaryKeyset::default();
    store.write_with_no_secrets(&ks).unwrap();
    assert!(Handle::read_with_no_secrets(&store).is_err());
}

#[test]
fn public_handle_derivation_requires_private_keys() {
    init();
    let template = tink_aead::aes128_gcm_key_template();
    let handle = Handle::new(&template).unwrap();
    // AES-GCM keys are symmetric, not asymmetric-private.
    assert!(handle.public().is_err());
}
