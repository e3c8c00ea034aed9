use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_money: u32,
    pub bots: u8,
    pub entry_fee: u32,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

impl ValueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueSource::Default => "default",
            ValueSource::File => "file",
            ValueSource::Env => "env",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_money: ValueSource,
    pub bots: ValueSource,
    pub entry_fee: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_money: ValueSource::Default,
            bots: ValueSource::Default,
            entry_fee: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_money: 10_000,
            bots: 3,
            entry_fee: 50,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves the configuration with precedence defaults < file < env.
/// The file comes from `FIVEDRAW_CONFIG`; individual values can be
/// overridden with `FIVEDRAW_SEED`, `FIVEDRAW_MONEY` and `FIVEDRAW_BOTS`.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("FIVEDRAW_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_money {
            cfg.starting_money = v;
            sources.starting_money = ValueSource::File;
        }
        if let Some(v) = f.bots {
            cfg.bots = v;
            sources.bots = ValueSource::File;
        }
        if let Some(v) = f.entry_fee {
            cfg.entry_fee = v;
            sources.entry_fee = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("FIVEDRAW_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(money) = std::env::var("FIVEDRAW_MONEY")
        && !money.is_empty()
    {
        cfg.starting_money = money
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting money".into()))?;
        sources.starting_money = ValueSource::Env;
    }
    if let Ok(bots) = std::env::var("FIVEDRAW_BOTS")
        && !bots.is_empty()
    {
        cfg.bots = bots
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bot count".into()))?;
        sources.bots = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_money: Option<u32>,
    #[serde(default)]
    bots: Option<u8>,
    #[serde(default)]
    entry_fee: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_money == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_money must be >0".into(),
        ));
    }
    if !(1..=4).contains(&cfg.bots) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: bots must be between 1 and 4".into(),
        ));
    }
    if cfg.entry_fee == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: entry_fee must be >0".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write as _;

    fn clear_env() {
        for key in [
            "FIVEDRAW_CONFIG",
            "FIVEDRAW_SEED",
            "FIVEDRAW_MONEY",
            "FIVEDRAW_BOTS",
        ] {
            unsafe { std::env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_without_file_or_env() {
        clear_env();
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config, Config::default());
        assert!(matches!(
            resolved.sources.starting_money,
            ValueSource::Default
        ));
    }

    #[test]
    #[serial]
    fn file_values_override_defaults() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "starting_money = 5000\nbots = 2").unwrap();
        unsafe { std::env::set_var("FIVEDRAW_CONFIG", file.path()) };

        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config.starting_money, 5_000);
        assert_eq!(resolved.config.bots, 2);
        assert_eq!(resolved.config.entry_fee, 50);
        assert!(matches!(resolved.sources.starting_money, ValueSource::File));
        clear_env();
    }

    #[test]
    #[serial]
    fn env_values_override_the_file() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 1").unwrap();
        unsafe {
            std::env::set_var("FIVEDRAW_CONFIG", file.path());
            std::env::set_var("FIVEDRAW_SEED", "42");
        }

        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config.seed, Some(42));
        assert!(matches!(resolved.sources.seed, ValueSource::Env));
        clear_env();
    }

    #[test]
    #[serial]
    fn invalid_values_are_rejected() {
        clear_env();
        unsafe { std::env::set_var("FIVEDRAW_BOTS", "9") };
        assert!(load_with_sources().is_err());
        clear_env();
    }
}
