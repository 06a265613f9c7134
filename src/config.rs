use std::env;

use dotenv::dotenv;
use once_cell::sync::Lazy;

use crate::error::{Error, Result};

pub const TOKEN_VAR: &str = "GT_TOKEN";

pub static GT_TOKEN: Lazy<Option<String>> = Lazy::new(|| {
    dotenv().ok();
    parse_token(env::var(TOKEN_VAR).ok())
});

pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const USER_AGENT: &str = "readme-activity";

// Profile repository, never counted
pub const EXCLUDED_REPO: &str = "wenzhuo4657/wenzhuo4657";

pub const README_PATH: &str = "README.md";
pub const START_MARKER: &str = "## 📊 最近活动";
pub const END_MARKER: &str = "*最后更新:";

pub const LOOKBACK_HOURS: i64 = 24;
// Footer timestamps are always rendered in UTC+8
pub const FOOTER_UTC_OFFSET_SECS: i32 = 8 * 3600;

// Returns the credential loaded from the environment (or `.env`)
pub fn github_token() -> Result<&'static str> {
    GT_TOKEN.as_deref().ok_or(Error::MissingToken)
}

fn parse_token(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}
