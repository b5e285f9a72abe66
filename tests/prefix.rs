//! Tests for the built-in prefix generators.

use synclog::prefix::{self, DEFAULT_TIMESTAMP_FORMAT};
use synclog::{Error, Prefix};

#[test]
fn text_prefix_repeats_literal() {
    let p = prefix::text("[app] ");
    assert_eq!(p.generate().unwrap(), "[app] ");
    assert_eq!(p.generate().unwrap(), "[app] ");
}

#[test]
fn timestamp_prefix_uses_format() {
    let p = prefix::timestamp("%Y");
    let year = p.generate().unwrap();
    assert_eq!(year.len(), 4);
    assert!(year.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn default_timestamp_format_shape() {
    // e.g. "17-10-2026 14:03:59 "
    let stamp = prefix::timestamp(DEFAULT_TIMESTAMP_FORMAT).generate().unwrap();
    assert_eq!(stamp.len(), 20);
    assert!(stamp.ends_with(' '));
    assert_eq!(&stamp[2..3], "-");
    assert_eq!(&stamp[5..6], "-");
}

#[test]
fn invalid_timestamp_format_fails_without_panic() {
    let p = prefix::timestamp("%Q-invalid");
    assert!(matches!(p.generate(), Err(Error::Prefix(_))));
}

#[test]
fn thread_name_prefix_uses_thread_name() {
    let text = std::thread::Builder::new()
        .name("worker-7".to_string())
        .spawn(|| prefix::thread_name().generate().unwrap())
        .unwrap()
        .join()
        .unwrap();
    assert_eq!(text, "[worker-7] ");
}

#[test]
fn closure_converts_into_prefix() {
    let p: Prefix = (|| "x".to_string()).into();
    assert_eq!(p.generate().unwrap(), "x");
}

#[test]
fn try_new_reports_error_message() {
    let p = Prefix::try_new(|| Err::<String, _>("boom"));
    match p.generate() {
        Err(Error::Prefix(msg)) => assert_eq!(msg, "boom"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn panicking_prefix_becomes_error() {
    let p = Prefix::new(|| panic!("generator bug"));
    assert!(matches!(p.generate(), Err(Error::Prefix(_))));
}
