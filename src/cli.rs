use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "vscan-verbose-error-page-detector",
    version,
    about = "Detects verbose error pages that may expose sensitive information"
)]
pub struct Cli {
    /// The URL to scan.
    pub url: String,

    /// Timeout for HTTP requests in seconds (default: 10).
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Custom User-Agent header.
    #[arg(short, long)]
    pub user_agent: Option<String>,

    /// JSON file with timeout, userAgent and patterns.
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    #[arg(short, long)]
    pub quiet: bool,
}
