//! Application configuration from CLI flags and environment.

use clap::Parser;

/// pizzaduel — compare circular and trapezoidal pizza orders by area.
#[derive(Parser, Debug)]
#[command(name = "pizzaduel", version, about)]
pub struct AppConfig {
    /// Input file with the order list ("-" or omitted reads stdin).
    #[arg(short, long, env = "PIZZADUEL_INPUT")]
    pub input: Option<String>,

    /// Emit the summary as JSON.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (only output the overall verdict).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the plain summary to a file as well.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Verbose output (include the per-side totals).
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
