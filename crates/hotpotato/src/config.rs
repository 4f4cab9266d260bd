//! Runtime configuration.

use serde::{Deserialize, Serialize};

use crate::HotPotatoError;

/// Settings for a Hot Potato deployment.
///
/// Defaults suit a local console session; [`from_env`](Self::from_env)
/// overrides any field from `HOTPOTATO_*` variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotPotatoConfig {
    /// Namespace stamped on every request (`HOTPOTATO_NAMESPACE`).
    pub namespace: String,

    /// Rows shown by the leaderboard command (`HOTPOTATO_LEADERBOARD_TOP`).
    /// 0 shows everyone.
    pub leaderboard_top: usize,

    /// `tracing` filter directive (`HOTPOTATO_LOG`). `RUST_LOG` wins if set.
    pub log_filter: String,

    /// Fixed RNG seed (`HOTPOTATO_SEED`). `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl Default for HotPotatoConfig {
    fn default() -> Self {
        Self {
            namespace: "console".to_string(),
            leaderboard_top: 10,
            log_filter: "info".to_string(),
            seed: None,
        }
    }
}

impl HotPotatoConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, HotPotatoError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`; missing keys keep their default.
    ///
    /// # Errors
    /// [`HotPotatoError::Config`] if a numeric variable doesn't parse or
    /// the namespace is blank.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, HotPotatoError> {
        let mut config = Self::default();

        if let Some(namespace) = lookup("HOTPOTATO_NAMESPACE") {
            if namespace.trim().is_empty() {
                return Err(HotPotatoError::Config(
                    "HOTPOTATO_NAMESPACE must not be empty".into(),
                ));
            }
            config.namespace = namespace;
        }
        if let Some(top) = lookup("HOTPOTATO_LEADERBOARD_TOP") {
            config.leaderboard_top = parse("HOTPOTATO_LEADERBOARD_TOP", &top)?;
        }
        if let Some(filter) = lookup("HOTPOTATO_LOG") {
            config.log_filter = filter;
        }
        if let Some(seed) = lookup("HOTPOTATO_SEED") {
            config.seed = Some(parse("HOTPOTATO_SEED", &seed)?);
        }

        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, HotPotatoError>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| HotPotatoError::Config(format!("{key}={value:?}: {e}")))
}
