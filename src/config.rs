use url::Url;
use worker::{Env, Error, Result};

const DEFAULT_BASE_URL: &str = "https://www.instagram.com";
const DEFAULT_APP_ID: &str = "936619743392459";

/// Worker settings, read from `wrangler.toml` vars.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub app_id: String,
}

impl Config {
    pub fn from_env(env: &Env) -> Result<Self> {
        let base_url = env.var("INSTAGRAM_BASE_URL").ok().map(|v| v.to_string());
        let app_id = env.var("IG_APP_ID").ok().map(|v| v.to_string());
        Self::from_vars(base_url, app_id)
    }

    pub(crate) fn from_vars(base_url: Option<String>, app_id: Option<String>) -> Result<Self> {
        let raw = base_url
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let base_url = Url::parse(raw.trim())
            .map_err(|e| Error::RustError(format!("invalid INSTAGRAM_BASE_URL {raw:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::RustError(format!(
                "INSTAGRAM_BASE_URL {raw:?} cannot take a path"
            )));
        }

        let app_id = app_id
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_APP_ID.to_string());

        Ok(Self { base_url, app_id })
    }
}
