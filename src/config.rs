use std::time::Duration;

pub const DEFAULT_CONCURRENCY: usize = 20;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PACING_MS: u64 = 100;

/// How candidates are turned into requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanMode {
    /// Hit `protocol://candidate.domain` directly, http then https.
    Standard,
    /// Send every request to a fixed IP with the candidate host in the
    /// Host header (name-based virtual-host discovery).
    VHost { target_ip: String },
}

/// Immutable per-scan settings. Everything the coordinator needs flows
/// through here; there is no process-wide scan state.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub domain: String,
    pub mode: ScanMode,
    pub concurrency: usize,
    pub timeout: Duration,
    /// Delay between consuming completed results; zero disables pacing.
    pub pacing: Duration,
    pub verbose: bool,
}

impl ScanConfig {
    pub fn new(domain: impl Into<String>, mode: ScanMode) -> Self {
        Self {
            domain: domain.into(),
            mode,
            concurrency: DEFAULT_CONCURRENCY,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            pacing: Duration::from_millis(DEFAULT_PACING_MS),
            verbose: false,
        }
    }
}

/// Resolve the vhost flags into a scan mode. `--vhost` without `--ip` must
/// fail before any file or network I/O; `--ip` on its own is ignored.
pub fn resolve_mode(vhost: bool, target_ip: Option<String>) -> anyhow::Result<ScanMode> {
    match (vhost, target_ip) {
        (true, Some(ip)) => Ok(ScanMode::VHost { target_ip: ip }),
        (true, None) => anyhow::bail!("--vhost requires --ip to specify the target IP address"),
        (false, _) => Ok(ScanMode::Standard),
    }
}
