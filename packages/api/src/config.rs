use std::fmt;
use std::net::SocketAddr;

/// Where games and players are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    DynamoDb {
        games_table: String,
        players_table: String,
    },
    /// Process-local maps; state is lost on restart.
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage: StorageBackend,
    /// Mounts the player/game create, update and delete endpoints.
    pub admin_routes: bool,
    /// Serve over plain TCP on this address instead of the Lambda runtime.
    pub bind_address: Option<SocketAddr>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    MissingVar(&'static str),
    InvalidValue { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::MissingVar(name) => {
                write!(f, "{} environment variable must be set", name)
            }
            ConfigError::InvalidValue { name, value } => {
                write!(f, "Invalid value for {}: '{}'", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage = match lookup("STORAGE_BACKEND").as_deref() {
            None | Some("dynamodb") => StorageBackend::DynamoDb {
                games_table: lookup("GAMES_TABLE").ok_or(ConfigError::MissingVar("GAMES_TABLE"))?,
                players_table: lookup("PLAYERS_TABLE")
                    .ok_or(ConfigError::MissingVar("PLAYERS_TABLE"))?,
            },
            Some("memory") => StorageBackend::Memory,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: "STORAGE_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        let admin_routes = match lookup("ENABLE_ADMIN_ROUTES").as_deref() {
            None | Some("") | Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: "ENABLE_ADMIN_ROUTES",
                    value: other.to_string(),
                })
            }
        };

        let bind_address = lookup("BIND_ADDRESS")
            .map(|value| {
                value.parse().map_err(|_| ConfigError::InvalidValue {
                    name: "BIND_ADDRESS",
                    value,
                })
            })
            .transpose()?;

        Ok(AppConfig {
            storage,
            admin_routes,
            bind_address,
        })
    }
}
