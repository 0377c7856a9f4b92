use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use maze_core::{ConfigError, MazeConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LaunchOptions {
    pub seed: Option<SeedChoice>,
    pub config_path: Option<PathBuf>,
}

impl LaunchOptions {
    /// Loads the config file if one was given, then applies any seed override.
    pub fn resolve_config(&self) -> Result<MazeConfig, ConfigError> {
        let mut config = match &self.config_path {
            Some(path) => MazeConfig::load(path)?,
            None => MazeConfig::default(),
        };
        if let Some(SeedChoice::Cli(seed) | SeedChoice::Generated(seed)) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

/// Parses `--seed N`, `--seed=N`, `--random-seed`, and `--config PATH` from process arguments.
pub fn resolve_launch_options(
    args: &[String],
    generated_seed: impl FnOnce() -> u64,
) -> Result<LaunchOptions, String> {
    let mut options = LaunchOptions::default();
    let mut random_requested = false;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();

        if argument == "--seed" {
            let Some(value) = args.get(index + 1) else {
                return Err("missing value for --seed".to_string());
            };
            set_seed(&mut options, SeedChoice::Cli(parse_seed_value(value)?))?;
            index += 2;
            continue;
        }

        if let Some(value) = argument.strip_prefix("--seed=") {
            set_seed(&mut options, SeedChoice::Cli(parse_seed_value(value)?))?;
        } else if argument == "--random-seed" {
            if random_requested || options.seed.is_some() {
                return Err("seed provided more than once".to_string());
            }
            random_requested = true;
        } else if argument == "--config" {
            let Some(value) = args.get(index + 1) else {
                return Err("missing value for --config".to_string());
            };
            options.config_path = Some(PathBuf::from(value));
            index += 2;
            continue;
        } else if let Some(value) = argument.strip_prefix("--config=") {
            options.config_path = Some(PathBuf::from(value));
        }
        index += 1;
    }

    if random_requested {
        if options.seed.is_some() {
            return Err("seed provided more than once".to_string());
        }
        options.seed = Some(SeedChoice::Generated(generated_seed()));
    }

    Ok(options)
}

fn set_seed(options: &mut LaunchOptions, choice: SeedChoice) -> Result<(), String> {
    if options.seed.is_some() {
        return Err("seed provided more than once".to_string());
    }
    options.seed = Some(choice);
    Ok(())
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
