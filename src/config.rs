//! Command-line configuration
//!
//! Values come from environment variables first and are then overridden by
//! command-line arguments.

use anyhow::{anyhow, Result};

use crate::core::config::parse_flag;
use crate::core::EngineConfig;
use crate::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u32,
    /// Print move results as JSON instead of styled text
    pub json: bool,
    /// Append every effect as a JSON line to this file
    pub log_path: Option<String>,
    pub engine: EngineConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: 1,
            json: false,
            log_path: None,
            engine: EngineConfig::default(),
        }
    }
}

impl CliConfig {
    /// Create from environment variables
    ///
    /// `MATCH3_WIDTH`, `MATCH3_HEIGHT`, `MATCH3_SEED`, `MATCH3_JSON`,
    /// `MATCH3_LOG_PATH`, plus the engine variables read by
    /// [`EngineConfig::from_env`].
    pub fn from_env() -> Self {
        use std::env;

        let width = env::var("MATCH3_WIDTH")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .filter(|&w: &usize| w > 0)
            .unwrap_or(DEFAULT_WIDTH);
        let height = env::var("MATCH3_HEIGHT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .filter(|&h: &usize| h > 0)
            .unwrap_or(DEFAULT_HEIGHT);
        let seed = env::var("MATCH3_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(1);
        let json = env::var("MATCH3_JSON")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        let log_path = env::var("MATCH3_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            width,
            height,
            seed,
            json,
            log_path,
            engine: EngineConfig::from_env(),
        }
    }

    /// Apply command-line arguments (without the program name) on top of `self`.
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--width" => {
                    self.width = parse_dimension("--width", args.get(i + 1))?;
                    i += 1;
                }
                "--height" => {
                    self.height = parse_dimension("--height", args.get(i + 1))?;
                    i += 1;
                }
                "--seed" => {
                    let v = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                    i += 1;
                }
                "--max-passes" => {
                    let v = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow!("missing value for --max-passes"))?;
                    let n = v
                        .parse::<usize>()
                        .map_err(|_| anyhow!("invalid --max-passes value: {}", v))?;
                    if n == 0 {
                        return Err(anyhow!("--max-passes must be positive"));
                    }
                    self.engine.max_cascade_passes = n;
                    i += 1;
                }
                "--log-path" => {
                    let v = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow!("missing value for --log-path"))?;
                    self.log_path = Some(v.clone());
                    i += 1;
                }
                "--json" => self.json = true,
                "--adjacent-only" => self.engine.rules.adjacent_only = true,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(self)
    }
}

fn parse_dimension(flag: &str, value: Option<&String>) -> Result<usize> {
    let v = value.ok_or_else(|| anyhow!("missing value for {}", flag))?;
    let n = v
        .parse::<usize>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))?;
    if n == 0 {
        return Err(anyhow!("{} must be positive", flag));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn args_override_defaults() {
        let config = CliConfig::default()
            .apply_args(&args(&[
                "--width",
                "5",
                "--height",
                "6",
                "--seed",
                "42",
                "--json",
                "--adjacent-only",
                "--max-passes",
                "7",
                "--log-path",
                "effects.jsonl",
            ]))
            .unwrap();

        assert_eq!(config.width, 5);
        assert_eq!(config.height, 6);
        assert_eq!(config.seed, 42);
        assert!(config.json);
        assert!(config.engine.rules.adjacent_only);
        assert_eq!(config.engine.max_cascade_passes, 7);
        assert_eq!(config.log_path.as_deref(), Some("effects.jsonl"));
    }

    #[test]
    fn empty_args_keep_config() {
        let config = CliConfig::default().apply_args(&[]).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(CliConfig::default().apply_args(&args(&["--width"])).is_err());
        assert!(CliConfig::default().apply_args(&args(&["--width", "0"])).is_err());
        assert!(CliConfig::default().apply_args(&args(&["--seed", "x"])).is_err());
        assert!(CliConfig::default().apply_args(&args(&["--max-passes", "0"])).is_err());
        assert!(CliConfig::default().apply_args(&args(&["--frobnicate"])).is_err());
    }
}
