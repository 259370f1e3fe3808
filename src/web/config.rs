use std::env;

/// Environment variable overriding the listen address
pub const ADDR_ENV: &str = "FEN_BOARD_ADDR";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// `host:port` to listen on
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: DEFAULT_ADDR.to_string(),
        }
    }
}

impl ServerConfig {
    /// Defaults, then `FEN_BOARD_ADDR`, then the first command-line argument.
    #[must_use]
    pub fn resolve<I: IntoIterator<Item = String>>(args: I) -> Self {
        Self::from_sources(env::var(ADDR_ENV).ok(), args)
    }

    fn from_sources<I: IntoIterator<Item = String>>(env_addr: Option<String>, args: I) -> Self {
        let mut config = ServerConfig::default();
        if let Some(addr) = env_addr.filter(|a| !a.trim().is_empty()) {
            config.addr = addr.trim().to_string();
        }
        if let Some(addr) = args.into_iter().next() {
            config.addr = addr;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr() {
        let config = ServerConfig::from_sources(None, Vec::new());
        assert_eq!(config.addr, "127.0.0.1:3000");
    }

    #[test]
    fn test_env_overrides_default() {
        let config = ServerConfig::from_sources(Some(" 0.0.0.0:8080 ".to_string()), Vec::new());
        assert_eq!(config.addr, "0.0.0.0:8080");
        let config = ServerConfig::from_sources(Some(String::new()), Vec::new());
        assert_eq!(config.addr, "127.0.0.1:3000");
    }

    #[test]
    fn test_argument_overrides_env() {
        let config = ServerConfig::from_sources(
            Some("0.0.0.0:8080".to_string()),
            vec!["127.0.0.1:9000".to_string()],
        );
        assert_eq!(config.addr, "127.0.0.1:9000");
    }
}
