use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "primetally",
    about = "Terminal counter with a one-time primality check on its initial value",
    version
)]
pub struct Cli {
    /// Initial counter value (overrides the config file)
    #[arg(short = 'i', long, value_name = "N", allow_negative_numbers = true)]
    pub initial: Option<i64>,

    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Diagnostic verbosity: 0 = off, 1 = renders, 2 = adds computation detail
    #[arg(long, value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=2))]
    pub diag_level: Option<u8>,
}

impl Cli {
    /// Applies flag overrides on top of a loaded config.
    ///
    /// Flags win over the file; absent flags leave the file values alone.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(initial) = self.initial {
            config.counter.initial = initial;
        }
        if let Some(level) = self.diag_level {
            config.diag.level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_initial_short_and_long() {
        let cli = Cli::try_parse_from(["primetally", "-i", "7"]).unwrap();
        assert_eq!(cli.initial, Some(7));

        let cli = Cli::try_parse_from(["primetally", "--initial", "42"]).unwrap();
        assert_eq!(cli.initial, Some(42));
    }

    #[test]
    fn parses_negative_initial() {
        let cli = Cli::try_parse_from(["primetally", "--initial", "-13"]).unwrap();
        assert_eq!(cli.initial, Some(-13));

        let cli = Cli::try_parse_from(["primetally", "-i", "-7"]).unwrap();
        assert_eq!(cli.initial, Some(-7));
    }

    #[test]
    fn rejects_out_of_range_diag_level() {
        assert!(Cli::try_parse_from(["primetally", "--diag-level", "3"]).is_err());
        let cli = Cli::try_parse_from(["primetally", "--diag-level", "2"]).unwrap();
        assert_eq!(cli.diag_level, Some(2));
    }

    #[test]
    fn overrides_win_over_config() {
        let cli = Cli::try_parse_from(["primetally", "-i", "9", "--diag-level", "0"]).unwrap();
        let mut config = Config::default();
        config.counter.initial = 3;
        cli.apply_overrides(&mut config);
        assert_eq!(config.counter.initial, 9);
        assert_eq!(config.diag.level, 0);
    }

    #[test]
    fn absent_flags_leave_config_untouched() {
        let cli = Cli::try_parse_from(["primetally"]).unwrap();
        let mut config = Config::default();
        config.counter.initial = 3;
        cli.apply_overrides(&mut config);
        assert_eq!(config.counter.initial, 3);
        assert_eq!(config.diag.level, 2);
    }
}
