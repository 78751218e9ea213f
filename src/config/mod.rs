use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_AUTH_TOKENS: &str = "EcoFitToken12345=919441391981";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub auth: AuthConfig,
    pub coach: CoachConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let tokens = AuthConfig::parse_tokens(
            &env::var("APP_AUTH_TOKENS").unwrap_or_else(|_| DEFAULT_AUTH_TOKENS.to_string()),
        )?;

        let tips_per_dimension = env::var("APP_TIPS_PER_DIMENSION")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidTipCount)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            auth: AuthConfig { tokens },
            coach: CoachConfig { tips_per_dimension },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Bearer tokens accepted by `/mcp/validate`, each mapped to the phone number it unlocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub tokens: Vec<(String, String)>,
}

impl AuthConfig {
    /// Parses `token=phone` pairs separated by `;`. Blank segments are skipped.
    pub fn parse_tokens(raw: &str) -> Result<Vec<(String, String)>, ConfigError> {
        raw.split(';')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((token, phone)) if !token.trim().is_empty() && !phone.trim().is_empty() => {
                    Ok((token.trim().to_string(), phone.trim().to_string()))
                }
                _ => Err(ConfigError::InvalidTokenEntry {
                    entry: segment.to_string(),
                }),
            })
            .collect()
    }
}

/// Knobs for response enrichment in the coach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoachConfig {
    pub tips_per_dimension: usize,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            tips_per_dimension: 1,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTokenEntry { entry: String },
    InvalidTipCount,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTokenEntry { entry } => write!(
                f,
                "APP_AUTH_TOKENS entry '{entry}' must look like token=phone"
            ),
            ConfigError::InvalidTipCount => {
                write!(f, "APP_TIPS_PER_DIMENSION must be a non-negative integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidTokenEntry { .. }
            | ConfigError::InvalidTipCount => None,
        }
    }
}
