//! Command-line interface for the experiment driver.

use clap::Parser;
use std::num::ParseIntError;
use std::path::PathBuf;

/// OrbitLab emulation experiment driver
#[derive(Parser, Debug)]
#[command(name = "orbitlab-driver")]
#[command(about = "Run a LEO-constellation emulation experiment", long_about = None)]
pub struct Args {
    /// Number of satellites to emulate across the constellation
    // hyphen values allowed so a negative count reaches the integer
    // parser and the driver's own bound check instead of being taken
    // for an unknown flag
    #[arg(allow_hyphen_values = true)]
    pub sat_count: String,

    /// JSON settings file overriding the built-in experiment defaults
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Emulator program driven through the lifecycle subcommands
    #[arg(long, default_value = "orbitlab-emulator")]
    pub emulator: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses the satellite-count argument.
///
/// Kept separate from clap so the driver can report "`<arg>` is not an
/// integer" instead of a generic value error.
pub fn parse_sat_count(raw: &str) -> Result<i64, ParseIntError> {
    raw.parse::<i64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DriverError, Experiment, ExperimentSettings};

    #[test]
    fn requires_the_sat_count_argument() {
        assert!(Args::try_parse_from(["orbitlab-driver"]).is_err());
    }

    #[test]
    fn rejects_extra_positional_arguments() {
        assert!(Args::try_parse_from(["orbitlab-driver", "200", "300"]).is_err());
    }

    #[test]
    fn accepts_a_single_count() {
        let args = Args::try_parse_from(["orbitlab-driver", "200"]).unwrap();
        assert_eq!(args.sat_count, "200");
        assert_eq!(parse_sat_count(&args.sat_count).unwrap(), 200);
    }

    #[test]
    fn non_integer_count_fails_to_parse() {
        assert!(parse_sat_count("abc").is_err());
        assert!(parse_sat_count("3.5").is_err());
        assert!(parse_sat_count("").is_err());
    }

    #[test]
    fn negative_counts_parse_and_are_rejected_later() {
        // clap must hand "-5" through as the positional, not reject it
        // as an unknown flag; Experiment::new is where the bound lives
        let args = Args::try_parse_from(["orbitlab-driver", "-5"]).unwrap();
        assert_eq!(args.sat_count, "-5");
        assert_eq!(parse_sat_count(&args.sat_count).unwrap(), -5);

        let settings = ExperimentSettings::default();
        let err = Experiment::new(settings, -5).unwrap_err();
        assert!(matches!(err, DriverError::InvalidSatCount(-5)));
    }
}
