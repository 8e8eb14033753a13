use once_cell::sync::Lazy;
use reqwest::Url;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

// baked in at build time, the wasm bundle has no process env to read
pub static API_BASE: Lazy<Url> = Lazy::new(|| {
    option_env!("API_BASE")
        .and_then(|base| Url::parse(base).ok())
        .unwrap_or_else(|| Url::parse(DEFAULT_API_BASE).unwrap())
});

pub const TELEGRAM_SUBSCRIBE_URL: &str = "https://t.me/your_bot?start=web_subscribe_tier1";
