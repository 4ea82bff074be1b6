//! Site configuration from environment variables.

use crate::error::ConfigError;
use std::path::PathBuf;

/// Credentials for the hosted table backend. Present only when both
/// `SUPABASE_URL` and `SUPABASE_KEY` are set and non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteConfig {
    pub url: String,
    pub key: String,
}

/// Server configuration.
///
/// | Env Var               | Default      |
/// |-----------------------|--------------|
/// | `HOST`                | `0.0.0.0`    |
/// | `PORT`                | `3000`       |
/// | `DATA_PATH`           | `data.json`  |
/// | `STATIC_DIR`          | unset        |
/// | `BODY_LIMIT_BYTES`    | `1048576`    |
/// | `REMOTE_TIMEOUT_SECS` | `30`         |
/// | `SUPABASE_URL`        | unset        |
/// | `SUPABASE_KEY`        | unset        |
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Document file used when no remote backend is configured. Relative paths resolve against the working directory.
    pub data_path: PathBuf,
    /// When set, paths outside the API are served from this directory.
    pub static_dir: Option<PathBuf>,
    pub body_limit_bytes: usize,
    pub remote_timeout_secs: u64,
    pub remote: Option<RemoteConfig>,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_var("PORT", var("PORT"), 3000u16)?;
        let data_path = var("DATA_PATH").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("data.json"));
        let static_dir = var("STATIC_DIR").map(PathBuf::from);
        let body_limit_bytes = parse_var("BODY_LIMIT_BYTES", var("BODY_LIMIT_BYTES"), 1024 * 1024usize)?;
        let remote_timeout_secs = parse_var("REMOTE_TIMEOUT_SECS", var("REMOTE_TIMEOUT_SECS"), 30u64)?;

        let remote = match (var("SUPABASE_URL"), var("SUPABASE_KEY")) {
            (Some(url), Some(key)) => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::InvalidRemoteUrl(url));
                }
                Some(RemoteConfig { url, key })
            }
            _ => None,
        };

        Ok(SiteConfig {
            host,
            port,
            data_path,
            static_dir,
            body_limit_bytes,
            remote_timeout_secs,
            remote,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidVar { name, value: v }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        SiteConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_without_any_variables() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.data_path, PathBuf::from("data.json"));
        assert_eq!(config.body_limit_bytes, 1024 * 1024);
        assert!(config.static_dir.is_none());
        assert!(config.remote.is_none());
    }

    #[test]
    fn remote_requires_both_credentials() {
        assert!(config_from(&[("SUPABASE_URL", "https://x.supabase.co")]).unwrap().remote.is_none());
        assert!(config_from(&[("SUPABASE_KEY", "k")]).unwrap().remote.is_none());
        assert!(config_from(&[("SUPABASE_URL", "https://x.supabase.co"), ("SUPABASE_KEY", "  ")])
            .unwrap()
            .remote
            .is_none());

        let config = config_from(&[("SUPABASE_URL", "https://x.supabase.co"), ("SUPABASE_KEY", "k")]).unwrap();
        assert_eq!(
            config.remote,
            Some(RemoteConfig {
                url: "https://x.supabase.co".into(),
                key: "k".into()
            })
        );
    }

    #[test]
    fn rejects_remote_url_without_scheme() {
        let err = config_from(&[("SUPABASE_URL", "x.supabase.co"), ("SUPABASE_KEY", "k")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRemoteUrl(_)));
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "PORT", .. }));
    }
}
