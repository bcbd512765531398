//! Run configuration parsed from command-line arguments.

use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::types::{DEFAULT_BAUD, DEFAULT_REACTION_SECS, FRAME_MS};

/// Immutable configuration for one game run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Serial port of the button pad (e.g. /dev/ttyACM0). None = keyboard-only mode.
    pub port: Option<String>,
    pub baud: u32,
    pub reaction_window: Duration,
    pub frame_period: Duration,
    /// Fixed RNG seed for a reproducible target sequence.
    pub seed: Option<u32>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            port: None,
            baud: DEFAULT_BAUD,
            reaction_window: Duration::from_secs_f64(DEFAULT_REACTION_SECS),
            frame_period: Duration::from_millis(FRAME_MS),
            seed: None,
        }
    }
}

/// Parse `--port <dev> --baud <n> --reaction <secs> --seed <n>`.
pub fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--port" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --port"))?;
                config.port = Some(v.clone());
            }
            "--baud" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --baud"))?;
                config.baud = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --baud value: {}", v))?;
            }
            "--reaction" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --reaction"))?;
                let secs = v
                    .parse::<f64>()
                    .map_err(|_| anyhow!("invalid --reaction value: {}", v))?;
                if !(secs > 0.0) {
                    return Err(anyhow!("--reaction must be > 0, got {}", v));
                }
                config.reaction_window = Duration::from_secs_f64(secs);
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = parse_args(&[]).unwrap();
        assert_eq!(config.port, None);
        assert_eq!(config.baud, DEFAULT_BAUD);
        assert_eq!(config.reaction_window, Duration::from_secs_f64(1.5));
        assert_eq!(config.frame_period, Duration::from_millis(FRAME_MS));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_full_flag_set() {
        let config = parse_args(&args(&[
            "--port",
            "/dev/ttyACM0",
            "--baud",
            "9600",
            "--reaction",
            "0.8",
            "--seed",
            "42",
        ]))
        .unwrap();
        assert_eq!(config.port.as_deref(), Some("/dev/ttyACM0"));
        assert_eq!(config.baud, 9600);
        assert_eq!(config.reaction_window, Duration::from_secs_f64(0.8));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_reaction_must_be_positive() {
        assert!(parse_args(&args(&["--reaction", "0"])).is_err());
        assert!(parse_args(&args(&["--reaction", "-1.5"])).is_err());
        assert!(parse_args(&args(&["--reaction", "nan"])).is_err());
    }

    #[test]
    fn test_missing_value_rejected() {
        assert!(parse_args(&args(&["--port"])).is_err());
        assert!(parse_args(&args(&["--baud"])).is_err());
    }

    #[test]
    fn test_unknown_argument_rejected() {
        assert!(parse_args(&args(&["--frobnicate"])).is_err());
    }
}
