use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub otp: OtpConfig,
    pub smtp: SmtpConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in: i64, // seconds
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpConfig {
    pub ttl_seconds: i64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self { ttl_seconds: 600 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default = "default_starttls")]
    pub starttls: bool,
}

fn default_starttls() -> bool {
    true
}

impl SmtpConfig {
    /// Sender address; the SMTP login doubles as the sender when none is set.
    pub fn from_address(&self) -> &str {
        self.from.as_deref().unwrap_or(&self.username)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub bcrypt_cost: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

fn get_env(name: &str) -> Option<String> {
    env::var(name).ok()
}

fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_toml() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // without a config file everything comes from the environment
        let mut config: Config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => toml::from_str(&config_str)
                .map_err(|e| format!("Failed to parse config file {config_path}: {e}"))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let database_url = get_env("DATABASE_URL").ok_or(
                    "DATABASE_URL is not set and no config.toml was found",
                )?;
                Config::from_env_defaults(database_url)
            }
            Err(e) => {
                return Err(format!("Failed to read config file {config_path}: {e}").into());
            }
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn from_env_defaults(database_url: String) -> Self {
        Config {
            server: ServerConfig {
                host: get_env("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: get_env_parse("SERVER_PORT", 3000u16),
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections: get_env_parse("DB_MAX_CONNECTIONS", 10u32),
            },
            jwt: JwtConfig {
                secret: get_env("JWT_SECRET")
                    .unwrap_or_else(|| "change-me-in-production".to_string()),
                expires_in: get_env_parse("JWT_EXPIRES_IN", 86_400i64),
            },
            otp: OtpConfig {
                ttl_seconds: get_env_parse("OTP_TTL_SECONDS", 600i64),
            },
            smtp: SmtpConfig {
                host: get_env("MAIL_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string()),
                port: get_env_parse("MAIL_PORT", 587u16),
                username: get_env("MAIL_USERNAME").unwrap_or_default(),
                password: get_env("MAIL_PASSWORD").unwrap_or_default(),
                from: get_env("MAIL_FROM"),
                starttls: get_env_parse("MAIL_STARTTLS", true),
            },
            cors: CorsConfig {
                allowed_origin: get_env("CORS_ALLOWED_ORIGIN")
                    .unwrap_or_else(|| CorsConfig::default().allowed_origin),
            },
            security: SecurityConfig {
                bcrypt_cost: get_env_parse("BCRYPT_COST", bcrypt::DEFAULT_COST),
            },
        }
    }

    // environment wins over the file
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = env::var("SERVER_HOST") {
            self.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            self.server.port = p;
        }
        if let Ok(v) = env::var("DATABASE_URL") {
            self.database.url = v;
        }
        if let Ok(v) = env::var("DB_MAX_CONNECTIONS")
            && let Ok(mc) = v.parse()
        {
            self.database.max_connections = mc;
        }
        if let Ok(v) = env::var("JWT_SECRET") {
            self.jwt.secret = v;
        }
        if let Ok(v) = env::var("JWT_EXPIRES_IN")
            && let Ok(n) = v.parse()
        {
            self.jwt.expires_in = n;
        }
        if let Ok(v) = env::var("OTP_TTL_SECONDS")
            && let Ok(n) = v.parse()
        {
            self.otp.ttl_seconds = n;
        }
        if let Ok(v) = env::var("MAIL_HOST") {
            self.smtp.host = v;
        }
        if let Ok(v) = env::var("MAIL_PORT")
            && let Ok(p) = v.parse()
        {
            self.smtp.port = p;
        }
        if let Ok(v) = env::var("MAIL_USERNAME") {
            self.smtp.username = v;
        }
        if let Ok(v) = env::var("MAIL_PASSWORD") {
            self.smtp.password = v;
        }
        if let Ok(v) = env::var("MAIL_FROM") {
            self.smtp.from = Some(v);
        }
        if let Ok(v) = env::var("MAIL_STARTTLS")
            && let Ok(b) = v.parse()
        {
            self.smtp.starttls = b;
        }
        if let Ok(v) = env::var("CORS_ALLOWED_ORIGIN") {
            self.cors.allowed_origin = v;
        }
        if let Ok(v) = env::var("BCRYPT_COST")
            && let Ok(c) = v.parse()
        {
            self.security.bcrypt_cost = c;
        }
    }
}
