use std::path::PathBuf;
use clap::Parser;

/// Generate candidate usernames from a person's full name.
///
/// The name is a first name followed by one or more surnames. Candidates are
/// printed one per line: first every ordering of the surnames joined with the
/// first name, then combinations of their abbreviations.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Full name, quoted when it contains spaces (e.g. "Jane Doe")
    #[arg(short, long)]
    pub name: String,

    /// Lowercase the name before generating candidates
    #[arg(short, long)]
    pub lowercase: bool,

    /// Write candidates to FILE instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Read configuration from FILE instead of the XDG config directory
    #[arg(short, long, value_name = "FILE", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore any configuration file
    #[arg(long)]
    pub no_config: bool,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use crate::cli::Args;

    #[test]
    fn test_command_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_short_and_long_name() {
        let args = Args::try_parse_from(["usernamer", "-n", "Jane Doe"]).unwrap();
        assert_eq!(args.name, "Jane Doe");

        let args = Args::try_parse_from(["usernamer", "--name=Jane Doe", "-l"]).unwrap();
        assert_eq!(args.name, "Jane Doe");
        assert!(args.lowercase);
    }

    #[test]
    fn test_missing_name_is_an_error() {
        assert!(Args::try_parse_from(["usernamer"]).is_err());
        assert!(Args::try_parse_from(["usernamer", "-x", "Jane Doe"]).is_err());
    }

    #[test]
    fn test_config_conflicts_with_no_config() {
        assert!(Args::try_parse_from(["usernamer", "-n", "A B", "-c", "a.lst", "--no-config"]).is_err());
    }
}
