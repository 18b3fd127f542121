use std::path::Path;

use thiserror::Error;

use super::schema::GatewayConfig;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("validation: {0}")]
    Validation(String),
}

pub fn load_from_file(path: &Path) -> Result<GatewayConfig, LoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

pub fn load_from_str(yaml: &str) -> Result<GatewayConfig, LoadError> {
    let cfg: GatewayConfig = serde_yaml::from_str(yaml)?;
    validate(&cfg)?;
    Ok(cfg)
}

/// Applies `PORT` and `GATEWAY_UPSTREAM` from the process environment.
pub fn apply_env(cfg: GatewayConfig) -> Result<GatewayConfig, LoadError> {
    apply_overrides(
        cfg,
        std::env::var("PORT").ok().as_deref(),
        std::env::var("GATEWAY_UPSTREAM").ok().as_deref(),
    )
}

pub fn apply_overrides(
    mut cfg: GatewayConfig,
    port: Option<&str>,
    upstream: Option<&str>,
) -> Result<GatewayConfig, LoadError> {
    if let Some(port) = port.filter(|p| !p.is_empty()) {
        cfg.port = port
            .parse()
            .map_err(|_| LoadError::Validation(format!("PORT is not a valid port: {port}")))?;
    }
    if let Some(upstream) = upstream.filter(|u| !u.is_empty()) {
        cfg.proxy.upstream = upstream.to_string();
    }
    validate(&cfg)?;
    Ok(cfg)
}

fn validate(cfg: &GatewayConfig) -> Result<(), LoadError> {
    let upstream = &cfg.proxy.upstream;
    if !(upstream.starts_with("http://") || upstream.starts_with("https://")) {
        return Err(LoadError::Validation(format!(
            "proxy.upstream must be an http(s) URL, got {upstream:?}"
        )));
    }
    if !cfg.proxy.prefix.starts_with('/') || cfg.proxy.prefix.len() < 2 {
        return Err(LoadError::Validation(
            "proxy.prefix must start with '/' and name a path".into(),
        ));
    }
    if cfg.proxy.prefix.ends_with('/') {
        return Err(LoadError::Validation(
            "proxy.prefix must not end with '/'".into(),
        ));
    }
    if !cfg.proxy.rewrite_to.is_empty() && !cfg.proxy.rewrite_to.starts_with('/') {
        return Err(LoadError::Validation(
            "proxy.rewrite_to must be empty or start with '/'".into(),
        ));
    }
    if cfg.proxy.max_body_bytes == 0 {
        return Err(LoadError::Validation(
            "proxy.max_body_bytes must be > 0".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config() {
        let yaml = r#"
port: 4000
proxy:
  upstream: https://example.org
"#;
        let cfg = load_from_str(yaml).unwrap();
        assert_eq!(cfg.port, 4000);
        assert_eq!(cfg.proxy.upstream, "https://example.org");
        assert_eq!(cfg.proxy.prefix, "/api");
    }

    #[test]
    fn non_http_upstream_rejected() {
        let err = load_from_str("proxy:\n  upstream: ftp://example.org\n").unwrap_err();
        assert!(err.to_string().contains("proxy.upstream"));
    }

    #[test]
    fn bad_prefix_rejected() {
        let err = load_from_str("proxy:\n  prefix: api\n").unwrap_err();
        assert!(err.to_string().contains("proxy.prefix"));

        let err = load_from_str("proxy:\n  prefix: /api/\n").unwrap_err();
        assert!(err.to_string().contains("proxy.prefix"));
    }

    #[test]
    fn unknown_yaml_type_is_parse_error() {
        let err = load_from_str("port: not-a-number\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn env_overrides() {
        let cfg = apply_overrides(GatewayConfig::default(), Some("8088"), Some("http://upstream:1"))
            .unwrap();
        assert_eq!(cfg.port, 8088);
        assert_eq!(cfg.proxy.upstream, "http://upstream:1");
    }

    #[test]
    fn empty_env_values_ignored() {
        let cfg = apply_overrides(GatewayConfig::default(), Some(""), None).unwrap();
        assert_eq!(cfg.port, 3001);
    }

    #[test]
    fn invalid_port_rejected() {
        let err = apply_overrides(GatewayConfig::default(), Some("70000"), None).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn load_from_file_works() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gateway.yml");
        std::fs::write(&path, "port: 5005\nproxy:\n  upstream: http://localhost:9\n").unwrap();
        let cfg = load_from_file(&path).unwrap();
        assert_eq!(cfg.port, 5005);
        assert_eq!(cfg.proxy.upstream, "http://localhost:9");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_from_file(Path::new("/nonexistent/gateway.yml")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
