use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the Azure Functions host hands to custom handlers.
const FUNCTIONS_PORT_VAR: &str = "FUNCTIONS_CUSTOMHANDLER_PORT";
const DEFAULT_PORT: u16 = 7071;

#[derive(Debug, thiserror::Error)]
pub enum ServerConfigError {
    #[error("{name} is not a valid port: {value}")]
    InvalidPort { name: &'static str, value: String },

    #[error("BIND_HOST is not a valid IP address: {0}")]
    InvalidHost(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerConfigError> {
        let host = match lookup("BIND_HOST") {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|_| ServerConfigError::InvalidHost(raw))?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match [FUNCTIONS_PORT_VAR, "PORT"]
            .into_iter()
            .find_map(|name| lookup(name).map(|value| (name, value)))
        {
            Some((name, value)) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ServerConfigError::InvalidPort { name, value })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            addr: SocketAddr::new(host, port),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr, "127.0.0.1:7071".parse().unwrap());
    }

    #[test]
    fn test_functions_port_wins() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("FUNCTIONS_CUSTOMHANDLER_PORT", "40123"),
            ("PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(config.addr.port(), 40123);
    }

    #[test]
    fn test_bind_host_and_port() {
        let config =
            ServerConfig::from_lookup(lookup(&[("BIND_HOST", "0.0.0.0"), ("PORT", "8080")])).unwrap();
        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])),
            Err(ServerConfigError::InvalidPort { name: "PORT", .. })
        ));
        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[("BIND_HOST", "localhost")])),
            Err(ServerConfigError::InvalidHost(_))
        ));
    }
}
