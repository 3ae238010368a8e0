use super::*;

#[test]
fn missing_api_key_is_an_error() {
    let err = LlmConfig::from_parts(None, None, None, None);
    assert!(matches!(err, Err(LlmError::MissingApiKey { .. })));
}

#[test]
fn defaults_apply_when_only_the_key_is_set() {
    let config =
        LlmConfig::from_parts(Some("sk-test".into()), None, None, None).expect("valid config");
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(config.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
}

#[test]
fn overrides_are_respected() {
    let config = LlmConfig::from_parts(
        Some("sk-test".into()),
        Some("claude-opus-4-1".into()),
        Some("30".into()),
        Some("5".into()),
    )
    .expect("valid config");
    assert_eq!(config.model, "claude-opus-4-1");
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.connect_timeout_secs, 5);
}

#[test]
fn non_numeric_timeout_is_a_config_error() {
    let err = LlmConfig::from_parts(Some("sk-test".into()), None, Some("soon".into()), None);
    assert!(matches!(err, Err(LlmError::ConfigParse(_))));
}
