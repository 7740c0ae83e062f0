use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_vars_defaults_when_unset() {
    let cfg = ServerConfig::from_vars(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.endpoints.text_url, DEFAULT_TEXT_ENDPOINT);
    assert_eq!(cfg.endpoints.voice_url, DEFAULT_VOICE_ENDPOINT);
}

#[test]
fn from_vars_reads_overrides() {
    let cfg = ServerConfig::from_vars(lookup(&[
        ("PORT", "8080"),
        ("VOXCHAT_TEXT_ENDPOINT", "https://chat.test/ask"),
        ("VOXCHAT_VOICE_ENDPOINT", " http://localhost:9000/voice-chat "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.endpoints.text_url, "https://chat.test/ask");
    assert_eq!(cfg.endpoints.voice_url, "http://localhost:9000/voice-chat");
}

#[test]
fn from_vars_treats_blank_as_unset() {
    let cfg = ServerConfig::from_vars(lookup(&[("PORT", "  "), ("VOXCHAT_TEXT_ENDPOINT", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.endpoints.text_url, DEFAULT_TEXT_ENDPOINT);
}

#[test]
fn from_vars_rejects_bad_port() {
    let err = ServerConfig::from_vars(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { var: "PORT", value: "eighty".into() });
}

#[test]
fn from_vars_rejects_non_http_endpoint() {
    let err = ServerConfig::from_vars(lookup(&[("VOXCHAT_VOICE_ENDPOINT", "ftp://files.test/voice")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidEndpoint { var: "VOXCHAT_VOICE_ENDPOINT", value: "ftp://files.test/voice".into() }
    );
    assert!(err.to_string().contains("http(s)"));
}

#[test]
fn config_errors_name_the_variable_and_value() {
    let err = ServerConfig::from_vars(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err.to_string(), r#"invalid PORT: "70000" is not a port number"#);
}
