//! Tests for the error taxonomy

use eavo_domain::error::Error;

#[test]
fn test_cache_failures_degrade_to_miss() {
    assert!(Error::cache("backend down").is_cache_degradable());
    assert!(Error::timeout("cache load").is_cache_degradable());
    assert!(Error::cancelled("cache save").is_cache_degradable());

    let corrupt = serde_json::from_str::<Vec<u8>>("{not json").unwrap_err();
    let err = Error::CorruptCacheEntry {
        key: "ATTRIBUTE_OPTION_TEXT-5-1-10".to_string(),
        source: corrupt,
    };
    assert!(err.is_cache_degradable());
    assert!(err.to_string().contains("ATTRIBUTE_OPTION_TEXT-5-1-10"));
}

#[test]
fn test_load_failures_are_not_degradable() {
    let err = Error::load("store unavailable");
    assert!(err.is_load_failure());
    assert!(!err.is_cache_degradable());
    assert_eq!(err.to_string(), "Option load failed: store unavailable");
}

#[test]
fn test_source_is_preserved() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let err = Error::cache_with_source("redis GET failed", io);
    let source = std::error::Error::source(&err).expect("source should be kept");
    assert_eq!(source.to_string(), "refused");
}

#[test]
fn test_configuration_error_message() {
    let err = Error::config("timeout_ms must be positive");
    assert_eq!(
        err.to_string(),
        "Configuration error: timeout_ms must be positive"
    );
    assert!(!err.is_cache_degradable());
}
