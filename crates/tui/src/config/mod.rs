use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/moneyboard.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root of the hosted backend (table API under `rest/v1`, auth under
    /// `auth/v1`).
    pub base_url: String,
    /// Public (anon) key sent as `apikey` on every request.
    pub api_key: String,
    /// Pre-filled on the login screen.
    pub email: String,
    pub log_level: String,
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:54321".to_string(),
            api_key: String::new(),
            email: String::new(),
            log_level: "info".to_string(),
            log_file: "logs/moneyboard.log".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "moneyboard", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL (e.g. https://xyz.example.co).
    #[arg(long)]
    base_url: Option<String>,
    /// Override the public API key.
    #[arg(long, env = "MONEYBOARD_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// Override email (password is never read from CLI).
    #[arg(long)]
    email: Option<String>,
    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("MONEYBOARD"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(api_key) = args.api_key {
        settings.api_key = api_key;
    }
    if let Some(email) = args.email {
        settings.email = email;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}
