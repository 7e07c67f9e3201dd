use std::sync::Arc;
use tink::primitiveset::{Entry, PrimitiveSet};
use tink::proto::{KeyStatusType, OutputPrefixType};
use tink::Primitive;

fn mac_entry(name: &str, prefix: Vec<u8>, prefix_type: OutputPrefixType, key_id: u32) -> Entry {
    Entry {
        primitive: Primitive::Mac(Arc::new(tink_testutil::DummyMac {
            name: name.to_string(),
        })),
        prefix,
        prefix_type,
        status: KeyStatusType::Enabled,
        type_url: tink_testutil::HMAC_TYPE_URL.to_string(),
        key_id,
    }
}

#[test]
fn new_set_has_no_primary() {
    let ps = PrimitiveSet::new();
    assert!(ps.primary().is_none());
}

#[test]
fn entries_are_grouped_by_prefix() {
    let mut ps = PrimitiveSet::new();
    let raw = mac_entry("raw", vec![], OutputPrefixType::Raw, 1);
    let tink_prefixed = mac_entry("tink", vec![0x01, 0, 0, 0, 2], OutputPrefixType::Tink, 2);
    ps.add(raw.clone());
    ps.add(tink_prefixed.clone());

    assert_eq!(ps.raw_entries().len(), 1);
    assert_eq!(ps.raw_entries()[0].key_id, 1);
    assert_eq!(ps.entries_for_prefix(&[0x01, 0, 0, 0, 2]).len(), 1);
    assert_eq!(ps.entries_for_prefix(&[0x01, 0, 0, 0, 2])[0].key_id, 2);
}

#[test]
fn unknown_prefix_returns_empty_slice() {
    let ps = PrimitiveSet::new();
    assert!(ps.entries_for_prefix(&[0xff; 5]).is_empty());
}

#[test]
fn multiple_entries_can_share_a_prefix() {
    let mut ps = PrimitiveSet::new();
    ps.add(mac_entry("a", vec![], OutputPrefixType::Raw, 1));
    ps.add(mac_entry("b", vec![], OutputPrefixType::Raw, 2));
    assert_eq!(ps.raw_entries().len(), 2);
}

#[test]
fn set_primary_designates_the_primary_entry() {
    let mut ps = PrimitiveSet::new();
    let primary = mac_entry("primary", vec![0x01, 0, 0, 0, 9], OutputPrefixType::Tink, 9);
    ps.add(primary.clone());
    ps.set_primary(primary);
    assert_eq!(ps.primary().unwrap().key_id, 9);
}
