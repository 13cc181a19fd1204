//! Command-line interface definition and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the catalog server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, env = "APP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the OpenAPI document to this path and exit.
    #[arg(long)]
    pub schema: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn import() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_optional() {
        let cli = Cli::try_parse_from(["catalog"]).unwrap();
        assert!(cli.schema.is_none());
    }

    #[test]
    fn schema_takes_a_path() {
        let cli = Cli::try_parse_from(["catalog", "--schema", "api.json"]).unwrap();
        assert_eq!(cli.schema, Some(PathBuf::from("api.json")));
    }
}
