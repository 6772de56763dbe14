//! Listening address configuration.
//!
//! Read from the environment: `PORT` (default `3000`) and `HOST`
//! (default `0.0.0.0`). An unset or empty variable takes the default, an
//! unparsable one is a [`ConfigError`].

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

const PORT_KEY: &str = "PORT";
const HOST_KEY: &str = "HOST";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    host: IpAddr,
    port: u16,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue { key: &'static str, value: String, reason: String },
}

impl ServerConfig {
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self { host, port }
    }

    /// Reads `HOST` and `PORT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_or(&lookup, HOST_KEY, DEFAULT_HOST)?;
        let port = parse_or(&lookup, PORT_KEY, DEFAULT_PORT)?;
        Ok(Self { host, port })
    }

    pub fn host(&self) -> IpAddr {
        self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => {
            value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue { key, reason: e.to_string(), value })
        }
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.address(), "0.0.0.0:3000".parse().unwrap());
    }

    #[test]
    fn reads_port_and_host() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "8080"), ("HOST", "127.0.0.1")])).unwrap();
        assert_eq!(config.port(), 8080);
        assert_eq!(config.host(), IpAddr::V4(Ipv4Addr::LOCALHOST));
    }

    #[test]
    fn empty_value_is_default() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", ""), ("HOST", "  ")])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn ipv6_host() {
        let config = ServerConfig::from_lookup(lookup(&[("HOST", "::1")])).unwrap();
        assert_eq!(config.address(), "[::1]:3000".parse().unwrap());
    }

    #[test]
    fn invalid_port() {
        let error = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        let ConfigError::InvalidValue { key, value, .. } = error;
        assert_eq!(key, "PORT");
        assert_eq!(value, "http");
    }

    #[test]
    fn port_out_of_range() {
        assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
    }

    #[test]
    fn invalid_host() {
        let error = ServerConfig::from_lookup(lookup(&[("HOST", "localhost")])).unwrap_err();
        assert!(error.to_string().contains("HOST"));
    }
}
