//! CLI argument parsing structures.

use clap::Parser;

/// Main CLI structure for smex.
#[derive(Parser, Debug)]
#[command(name = "smex")]
#[command(about = "Export AWS Secrets Manager secrets to a CSV file", long_about = None)]
pub struct Cli {
    /// AWS access key ID
    pub access_key: String,

    /// AWS secret access key
    pub secret_key: String,

    /// AWS region to export from (e.g. us-east-1)
    pub region: String,
}
