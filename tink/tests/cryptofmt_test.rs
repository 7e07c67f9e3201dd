use tink::cryptofmt;
use tink::proto::OutputPrefixType;

#[test]
fn tink_prefix_starts_with_tink_byte() {
    let prefix = cryptofmt::output_prefix(OutputPrefixType::Tink, 0x0102_0304).unwrap();
    assert_eq!(prefix.len(), cryptofmt::NON_RAW_PREFIX_SIZE);
    assert_eq!(prefix[0], cryptofmt::TINK_START_BYTE);
    assert_eq!(&prefix[1..], &[0x01, 0x02, 0x03, 0x04]);
}

#[test]
fn legacy_and_crunchy_share_the_same_prefix() {
    let legacy = cryptofmt::output_prefix(OutputPrefixType::Legacy, 42).unwrap();
    let crunchy = cryptofmt::output_prefix(OutputPrefixType::Crunchy, 42).unwrap();
    assert_eq!(legacy, crunchy);
    assert_eq!(legacy[0], cryptofmt::LEGACY_START_BYTE);
}

#[test]
fn raw_prefix_is_empty() {
    let prefix = cryptofmt::output_prefix(OutputPrefixType::Raw, 42).unwrap();
    assert!(prefix.is_empty());
}

#[test]
fn unknown_prefix_type_is_rejected() {
    assert!(cryptofmt::output_prefix(OutputPrefixType::UnknownPrefix, 42).is_err());
}

#[test]
fn distinct_key_ids_produce_distinct_prefixes() {
    let a = cryptofmt::output_prefix(OutputPrefixType::Tink, 1).unwrap();
    let b = cryptofmt::output_prefix(OutputPrefixType::Tink, 2).unwrap();
    assert_ne!(a, b);
}
