//! Run configuration parsed from the command line.
//!
//! ```text
//! count_shared <array_size> <num_threads> [--target <value>] [--seed <u64>] [--json]
//! ```

use crate::error::ConfigError;
use serde::Serialize;
use std::num::NonZeroUsize;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Size of one hardware cache line on the platforms this benchmark targets.
pub const CACHE_LINE_SIZE: usize = 64;

/// Smallest value the workload generator produces.
pub const MIN_VALUE: i32 = 0;

/// Largest value the workload generator produces.
pub const MAX_VALUE: i32 = 5;

/// The value workers count unless `--target` says otherwise.
pub const DEFAULT_TARGET: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchConfig {
    pub array_size: usize,
    pub num_threads: NonZeroUsize,
    pub target: i32,
    pub min_value: i32,
    pub max_value: i32,
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

impl BenchConfig {
    pub fn new(array_size: usize, num_threads: NonZeroUsize) -> Self {
        Self {
            array_size,
            num_threads,
            target: DEFAULT_TARGET,
            min_value: MIN_VALUE,
            max_value: MAX_VALUE,
            seed: None,
            format: OutputFormat::Text,
        }
    }

    pub fn with_target(mut self, target: i32) -> Self {
        self.target = target;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn value_range(&self) -> RangeInclusive<i32> {
        self.min_value..=self.max_value
    }

    /// Parses everything after the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positionals: Vec<String> = Vec::with_capacity(2);
        let mut target = DEFAULT_TARGET;
        let mut seed = None;
        let mut format = OutputFormat::Text;

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_ref() {
                "--target" => {
                    let value = flag_value(&mut iter, "--target")?;
                    target = parse_number("target", &value)?;
                }
                "--seed" => {
                    let value = flag_value(&mut iter, "--seed")?;
                    seed = Some(parse_number("seed", &value)?);
                }
                "--json" => format = OutputFormat::Json,
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()));
                }
                value => {
                    if positionals.len() == 2 {
                        return Err(ConfigError::UnexpectedArgument(value.to_string()));
                    }
                    positionals.push(value.to_string());
                }
            }
        }

        let mut positionals = positionals.into_iter();
        let array_size = positionals
            .next()
            .ok_or(ConfigError::MissingArgument("array_size"))?;
        let num_threads = positionals
            .next()
            .ok_or(ConfigError::MissingArgument("num_threads"))?;

        let array_size: usize = parse_number("array_size", &array_size)?;
        let num_threads = parse_thread_count(&num_threads)?;

        Ok(Self {
            array_size,
            num_threads,
            target,
            min_value: MIN_VALUE,
            max_value: MAX_VALUE,
            seed,
            format,
        })
    }
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {} <array_size> <num_threads> [--target <value>] [--seed <u64>] [--json]",
        program
    )
}

fn flag_value<I, S>(iter: &mut I, flag: &'static str) -> Result<String, ConfigError>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    iter.next()
        .map(|value| value.as_ref().to_string())
        .ok_or(ConfigError::MissingFlagValue(flag))
}

fn parse_number<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid_number(name, value))
}

// Parsed as signed first so "0" and "-4" report as non-positive, not unparsable.
fn parse_thread_count(value: &str) -> Result<NonZeroUsize, ConfigError> {
    let count: i64 = parse_number("num_threads", value)?;
    if count <= 0 {
        return Err(ConfigError::NonPositiveThreads(count));
    }
    let count = usize::try_from(count).map_err(|_| ConfigError::invalid_number("num_threads", value))?;
    NonZeroUsize::new(count).ok_or(ConfigError::NonPositiveThreads(0))
}
