use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use url::Url;

pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not a valid {expected}: {value}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Process-wide settings, read once at startup and shared read-only.
#[derive(Clone)]
pub struct RelayConfig {
    pub api_key: Option<String>,
    pub api_url: Url,
    pub host: IpAddr,
    pub port: u16,
    pub upstream_timeout: Duration,
}

impl RelayConfig {
    pub fn new(api_key: Option<String>, api_url: Url) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            api_url,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = match lookup("GROQ_API_URL") {
            Some(raw) => parse_api_url(&raw)?,
            None => parse_api_url(DEFAULT_GROQ_API_URL)?,
        };

        let mut config = Self::new(lookup("GROQ_API_KEY"), api_url);

        if let Some(raw) = lookup("HOST") {
            config.host = parse_var("HOST", "IP address", &raw)?;
        }
        if let Some(raw) = lookup("PORT") {
            config.port = parse_var("PORT", "port number", &raw)?;
        }
        if let Some(raw) = lookup("UPSTREAM_TIMEOUT_SECS") {
            let secs: u64 = parse_var("UPSTREAM_TIMEOUT_SECS", "number of seconds", &raw)?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    name: "UPSTREAM_TIMEOUT_SECS",
                    expected: "non-zero number of seconds",
                    value: raw,
                });
            }
            config.upstream_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Key rendered for logs: only the last five characters are shown.
    pub fn masked_api_key(&self) -> String {
        match self.api_key.as_deref() {
            None => "Not found".to_string(),
            Some(key) => {
                let chars: Vec<char> = key.chars().collect();
                if chars.len() <= 5 {
                    return "*****".to_string();
                }
                let tail: String = chars[chars.len() - 5..].iter().collect();
                format!("*****{}", tail)
            }
        }
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &self.masked_api_key())
            .field("api_url", &self.api_url.as_str())
            .field("host", &self.host)
            .field("port", &self.port)
            .field("upstream_timeout", &self.upstream_timeout)
            .finish()
    }
}

fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = || ConfigError::Invalid {
        name: "GROQ_API_URL",
        expected: "http(s) URL",
        value: raw.to_string(),
    };

    let url = Url::parse(raw.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    Ok(url)
}

fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    expected: &'static str,
    raw: &str,
) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        expected,
        value: raw.to_string(),
    })
}
