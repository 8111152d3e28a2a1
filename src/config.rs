use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_MODEL_ID: &str = "@cf/google/gemma-3-12b-it";
pub const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful, friendly assistant. Provide concise and accurate responses.";

#[derive(Debug, Clone)]
pub struct Config {
    pub account_id: String,
    pub api_token: String,
    pub model_id: String,
    pub base_url: String,
    pub system_prompt: String,
    pub static_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let account_id = lookup("CLOUDFLARE_ACCOUNT_ID").context("CLOUDFLARE_ACCOUNT_ID is not set")?;
        let api_token = lookup("CLOUDFLARE_API_TOKEN").context("CLOUDFLARE_API_TOKEN is not set")?;

        let port = var("PORT", "8080");
        let port = port
            .parse::<u16>()
            .with_context(|| format!("PORT must be a port number, got {:?}", port))?;

        Ok(Self {
            account_id,
            api_token,
            model_id: var("MODEL_ID", DEFAULT_MODEL_ID),
            base_url: var("AI_BASE_URL", DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            system_prompt: var("SYSTEM_PROMPT", DEFAULT_SYSTEM_PROMPT),
            static_dir: PathBuf::from(var("STATIC_DIR", "./public")),
            host: var("HOST", "127.0.0.1"),
            port,
        })
    }
}
