use super::*;

#[test]
fn defaults_listen_on_all_interfaces_port_3000() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg.addr, "0.0.0.0:3000".parse().unwrap());
}

#[test]
fn port_override_is_parsed() {
    let cfg = ServerConfig::from_values(None, Some("8080")).unwrap();
    assert_eq!(cfg.addr.port(), 8080);
}

#[test]
fn host_override_is_parsed() {
    let cfg = ServerConfig::from_values(Some("127.0.0.1"), Some("4000")).unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:4000".parse().unwrap());
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.addr.port(), DEFAULT_PORT);
    assert_eq!(cfg.addr.ip().to_string(), DEFAULT_HOST);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_values(None, Some("not-a-port")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "not-a-port"));
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(matches!(ServerConfig::from_values(None, Some("70000")), Err(ConfigError::InvalidPort { .. })));
}

#[test]
fn invalid_host_is_rejected() {
    assert!(matches!(ServerConfig::from_values(Some("localhost:80"), None), Err(ConfigError::InvalidHost { .. })));
}
