//! Terminal driver configuration.
use std::env;
use std::path::PathBuf;

/// Settings for one terminal session.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `classes.ron`, `opponents.ron`, `actions.ron` and `rules.toml`.
    pub data_dir: PathBuf,
    /// Base seed. Each encounter derives its own seed from it.
    pub seed: u64,
    /// Class id to play. Prompted for when unset.
    pub class: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            seed: 0,
            class: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_DATA_DIR` - Content directory (default: `data`)
    /// - `BATTLE_SEED` - Base seed (default: derived from the clock)
    /// - `BATTLE_CLASS` - Class id to play (default: ask)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("BATTLE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.seed = read_env::<u64>("BATTLE_SEED").unwrap_or_else(clock_seed);
        config.class = env::var("BATTLE_CLASS").ok().filter(|c| !c.trim().is_empty());

        config
    }
}

fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
