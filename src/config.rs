/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub dispatch: DispatchConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub fleet_size: usize,
    pub n_floors: i32,
    pub tick_interval_ms: u64,
    /// Stop after this many ticks, 0 runs until terminated
    pub max_ticks: u64,
    pub request_probability: f64,
    pub max_requests_per_tick: usize,
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            fleet_size: 3,
            n_floors: 10,
            tick_interval_ms: 1000,
            max_ticks: 0,
            request_probability: 0.3,
            max_requests_per_tick: 2,
            seed: None,
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DispatchConfig {
    /// Reorder each riding queue nearest-destination-first after loading
    pub reprioritize_by_distance: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sim = &self.simulation;

        if sim.fleet_size == 0 {
            return Err(ConfigError::Invalid("fleet_size must be at least 1".into()));
        }
        if sim.n_floors < 2 {
            return Err(ConfigError::Invalid(format!(
                "n_floors must be at least 2, got {}",
                sim.n_floors
            )));
        }
        if sim.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("tick_interval_ms must be positive".into()));
        }
        if !(0.0..=1.0).contains(&sim.request_probability) {
            return Err(ConfigError::Invalid(format!(
                "request_probability must be within [0, 1], got {}",
                sim.request_probability
            )));
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}
