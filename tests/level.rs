//! Tests for severity functionality.

use synclog::{Error, Severity};

#[test]
fn severity_ordering() {
    assert!(Severity::Debug < Severity::Info);
    assert!(Severity::Info < Severity::Warning);
    assert!(Severity::Warning < Severity::Error);
    assert!(Severity::Error < Severity::Critical);
}

#[test]
fn severity_tags_match_table() {
    let tags: Vec<&str> = Severity::all().iter().map(|s| s.as_str()).collect();
    assert_eq!(tags, ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"]);
}

#[test]
fn severity_display() {
    assert_eq!(Severity::Warning.to_string(), "WARNING");
    assert_eq!(Severity::Critical.to_string(), "CRITICAL");
}

#[test]
fn severity_from_u8() {
    for (i, severity) in Severity::all().into_iter().enumerate() {
        assert_eq!(Severity::try_from(u8::try_from(i).unwrap()).unwrap(), severity);
    }
}

#[test]
fn severity_from_u8_out_of_range() {
    assert!(matches!(Severity::try_from(5), Err(Error::InvalidSeverity(_))));
    assert!(Severity::try_from(u8::MAX).is_err());
}

#[test]
fn severity_from_str() {
    assert_eq!("debug".parse::<Severity>().unwrap(), Severity::Debug);
    assert_eq!("INFO".parse::<Severity>().unwrap(), Severity::Info);
    assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
    assert_eq!("Warning".parse::<Severity>().unwrap(), Severity::Warning);
    assert_eq!("err".parse::<Severity>().unwrap(), Severity::Error);
    assert_eq!("crit".parse::<Severity>().unwrap(), Severity::Critical);
}

#[test]
fn severity_from_str_invalid() {
    assert!("trace".parse::<Severity>().is_err());
}

#[test]
fn severity_default() {
    assert_eq!(Severity::default(), Severity::Debug);
}
