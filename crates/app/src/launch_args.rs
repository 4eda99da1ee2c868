//! Command-line flags for the desktop program and the runtime seed fallback.

use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchArgs {
    pub seed: SeedChoice,
    pub config_path: Option<PathBuf>,
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

/// Reads `--seed N` and `--config PATH` (either flag also as `--flag=value`).
/// Unknown arguments are ignored; a repeated flag is an error.
pub fn parse_launch_args(args: &[String], generated_seed: u64) -> Result<LaunchArgs, String> {
    let mut seed = None;
    let mut config_path = None;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();
        let (flag, inline_value) = match argument.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (argument, None),
        };
        if flag != "--seed" && flag != "--config" {
            index += 1;
            continue;
        }

        let value = match inline_value {
            Some(value) => value,
            None => {
                index += 1;
                args.get(index)
                    .map(String::as_str)
                    .ok_or_else(|| format!("missing value for {flag}"))?
            }
        };
        index += 1;

        if flag == "--seed" {
            if seed.is_some() {
                return Err("seed provided more than once".to_string());
            }
            seed = Some(parse_seed_value(value)?);
        } else {
            if config_path.is_some() {
                return Err("config provided more than once".to_string());
            }
            config_path = Some(PathBuf::from(value));
        }
    }

    Ok(LaunchArgs {
        seed: match seed {
            Some(seed) => SeedChoice::Cli(seed),
            None => SeedChoice::Generated(generated_seed),
        },
        config_path,
    })
}

fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    raw_value.parse::<u64>().map_err(|_| format!("seed value '{raw_value}' must be a number"))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn uses_generated_seed_and_default_config_when_flags_are_absent() {
        let args = as_args(&["fogmaze"]);
        let launch = parse_launch_args(&args, 9_876_543).expect("no flags should parse");
        assert_eq!(launch.seed, SeedChoice::Generated(9_876_543));
        assert_eq!(launch.config_path, None);
    }

    #[test]
    fn parses_flags_with_separate_values() {
        let args = as_args(&["fogmaze", "--seed", "4242", "--config", "maze.toml"]);
        let launch = parse_launch_args(&args, 1).expect("valid flags should parse");
        assert_eq!(launch.seed, SeedChoice::Cli(4_242));
        assert_eq!(launch.config_path, Some(PathBuf::from("maze.toml")));
    }

    #[test]
    fn parses_flags_with_inline_values() {
        let args = as_args(&["fogmaze", "--config=big.toml", "--seed=2026"]);
        let launch = parse_launch_args(&args, 1).expect("valid flags should parse");
        assert_eq!(launch.seed, SeedChoice::Cli(2_026));
        assert_eq!(launch.config_path, Some(PathBuf::from("big.toml")));
    }

    #[test]
    fn ignores_unrelated_arguments() {
        let args = as_args(&["fogmaze", "--fullscreen", "--seed", "3", "extra"]);
        let launch = parse_launch_args(&args, 1).expect("unknown flags are skipped");
        assert_eq!(launch.seed, SeedChoice::Cli(3));
    }

    #[test]
    fn errors_when_flag_has_no_value() {
        for flag in ["--seed", "--config"] {
            let args = as_args(&["fogmaze", flag]);
            let err = parse_launch_args(&args, 1).expect_err("missing value should error");
            assert!(err.contains("missing"), "error should explain missing value: {err}");
        }
    }

    #[test]
    fn errors_when_seed_value_is_not_a_number() {
        let args = as_args(&["fogmaze", "--seed=abc"]);
        let err = parse_launch_args(&args, 1).expect_err("non-numeric seed value should error");
        assert!(err.contains("number"), "error should explain numeric requirement: {err}");
    }

    #[test]
    fn errors_when_a_flag_is_provided_more_than_once() {
        let args = as_args(&["fogmaze", "--seed=1", "--seed", "2"]);
        let err = parse_launch_args(&args, 1).expect_err("duplicate seed flags should be rejected");
        assert!(err.contains("more than once"), "error should explain duplicate seed: {err}");

        let args = as_args(&["fogmaze", "--config=a.toml", "--config=b.toml"]);
        let err = parse_launch_args(&args, 1).expect_err("duplicate config should be rejected");
        assert!(err.contains("more than once"));
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        let first = generate_runtime_seed();
        let second = generate_runtime_seed();
        assert_ne!(first, second, "runtime seed generation should vary per call");
    }
}
