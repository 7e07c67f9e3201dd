use std::sync::{Arc, Once};

static INIT: Once = Once::new();

fn init() {
    INIT.call_once(|| {
        tink::registry::register_key_manager(Arc::new(tink_testutil::DummyAeadKeyManager)).unwrap();
        tink::registry::register_kms_client(Arc::new(tink_testutil::DummyKmsClient)).unwrap();
    });
}

#[test]
fn registered_manager_is_found_by_type_url() {
    init();
    let km = tink::registry::get_key_manager(tink_testutil::AES_GCM_TYPE_URL).unwrap();
    assert_eq!(km.type_url(), tink_testutil::AES_GCM_TYPE_URL);
}

#[test]
fn unknown_type_url_is_rejected() {
    init();
    assert!(tink::registry::get_key_manager("type.googleapis.com/no.such.Key").is_err());
}

#[test]
fn re_registering_the_same_type_url_fails() {
    init();
    let err = tink::registry::register_key_manager(Arc::new(tink_testutil::DummyAeadKeyManager))
        .unwrap_err();
    assert!(err.to_string().contains("already registered"));
}

#[test]
fn primitive_rejects_empty_serialized_key() {
    init();
    let err = tink::registry::primitive(tink_testutil::AES_GCM_TYPE_URL, &[]).unwrap_err();
    assert!(err.to_string().contains("empty serialized key"));
}

#[test]
fn primitive_dispatches_to_the_registered_manager() {
    init();
    let primitive = tink::registry::primitive(tink_testutil::AES_GCM_TYPE_URL, &[0x01]).unwrap();
    assert!(primitive.as_aead().is_ok());
}

#[test]
fn kms_client_lookup_matches_by_supported_uri() {
    init();
    let client = tink::registry::get_kms_client("dummy").unwrap();
    assert!(client.get_aead("dummy").is_ok());
    assert!(tink::registry::get_kms_client("not-dummy").is_err());
}
