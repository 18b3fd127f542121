use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GatewayConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub proxy: ProxyConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProxyConfig {
    #[serde(default = "default_upstream")]
    pub upstream: String,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_rewrite")]
    pub rewrite_to: String,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl GatewayConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            proxy: ProxyConfig::default(),
        }
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            upstream: default_upstream(),
            prefix: default_prefix(),
            rewrite_to: default_rewrite(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_upstream() -> String {
    "http://20.244.56.144".to_string()
}

fn default_prefix() -> String {
    "/api".to_string()
}

fn default_rewrite() -> String {
    "/evaluation-service".to_string()
}

fn default_max_body_bytes() -> usize {
    2 * 1024 * 1024
}
