use clap::Parser;

use sub_hunter::config::{DEFAULT_CONCURRENCY, DEFAULT_PACING_MS, DEFAULT_TIMEOUT_SECS};

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Domain to check subdomains for (used in the Host header in vhost mode)
    #[arg(short = 'd', long)]
    pub domain: String,

    /// Wordlist file containing candidate labels, one per line
    #[arg(short = 'w', long)]
    pub wordlist: String,

    /// File to save discovered URLs
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Print a [current/total] progress line for each live candidate
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,

    /// Enable detailed debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// VHost brute-forcing: probe a fixed IP with spoofed Host headers
    #[arg(long, default_value_t = false)]
    pub vhost: bool,

    /// Target IP address for vhost mode
    #[arg(long)]
    pub ip: Option<String>,

    /// Maximum number of in-flight probes
    #[arg(short = 'c', long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Delay in milliseconds between consuming completed results (0 disables)
    #[arg(long, default_value_t = DEFAULT_PACING_MS)]
    pub delay_ms: u64,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
