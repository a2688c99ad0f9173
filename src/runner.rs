use std::path::PathBuf;
use std::time::Duration;

use indicatif::ProgressBar;

use crate::cli::Cli;
use sub_hunter::config::{resolve_mode, ScanConfig, ScanMode};
use sub_hunter::http_client::build_probe_client;
use sub_hunter::probe::{self, ProbeOutcome};
use sub_hunter::scanner::Scanner;
use sub_hunter::strategy::ProbeTarget;
use sub_hunter::{output, validate, wordlist};

fn print_ascii_logo() {
    println!(r#"
             ____  _   _ ____    _   _ _   _ _   _ _____ _____ ____
            / ___|| | | | __ )  | | | | | | | \ | |_   _| ____|  _ \
            \___ \| | | |  _ \  | |_| | | | |  \| | | | |  _| | |_) |
             ___) | |_| | |_) | |  _  | |_| | |\  | | | | |___|  _ <
            |____/ \___/|____/  |_| |_|\___/|_| \_| |_| |_____|_| \_\

                        Subdomain Checker v0.1.0
    "#);
}

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    // Configure logging based on global flags. Keep reqwest/hyper at warn
    // so per-request noise doesn't flood the CLI.
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    let filter_str = format!("sub_hunter={crate_level},reqwest=warn,hyper=warn");
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_target(false)
        .init();

    // Pre-flight: mode resolution comes before any file or network I/O.
    let mode = resolve_mode(cli.vhost, cli.ip)?;

    let mut config = ScanConfig::new(cli.domain, mode);
    config.concurrency = cli.concurrency;
    config.timeout = Duration::from_secs(cli.timeout);
    config.pacing = Duration::from_millis(cli.delay_ms);
    config.verbose = cli.verbose;

    let candidates = wordlist::read_wordlist(&PathBuf::from(&cli.wordlist))?;

    print_ascii_logo();
    println!("[>] Domain: {}", config.domain);
    if let ScanMode::VHost { ref target_ip } = config.mode {
        println!("[·] Mode: VHost brute-force against {}", target_ip);
    }
    println!(
        "[~] Candidates: {} (concurrency: {}, timeout: {}s)",
        candidates.len(),
        config.concurrency,
        cli.timeout
    );
    println!("\n{}\n", "-".repeat(60));

    tracing::info!(
        domain = %config.domain,
        candidates = candidates.len(),
        concurrency = config.concurrency,
        timeout = cli.timeout,
        vhost = cli.vhost,
        "Starting scan"
    );

    let client = build_probe_client(config.timeout)?;
    let timeout = config.timeout;
    let probe_fn = move |target: ProbeTarget| {
        let client = client.clone();
        async move { probe::probe(&client, target, timeout).await }
    };

    let total_valid = candidates.iter().filter(|c| validate::is_valid_label(c)).count();
    let bar = if config.verbose {
        None
    } else {
        Some(ProgressBar::new(total_valid as u64))
    };

    let verbose = config.verbose;
    let bar_handle = bar.clone();
    let on_progress = move |current: usize, total: usize, outcome: &ProbeOutcome| {
        if let Some(ref b) = bar_handle {
            b.inc(1);
        }
        if verbose && outcome.succeeded {
            if let Some(status) = outcome.status {
                println!(
                    "[{}/{}] Valid: {} -> {}",
                    current, total, outcome.target.display_name, status
                );
            }
        }
    };

    let scanner = Scanner::new(config);
    let cancel = scanner.cancel_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received, letting in-flight probes finish");
            cancel.cancel();
        }
    });

    let scan_start = std::time::Instant::now();
    let results = scanner.run(candidates, probe_fn, on_progress).await;
    if let Some(b) = bar {
        b.finish_and_clear();
    }

    for url in &results {
        println!("Valid domain: {}", url);
    }
    println!(
        "\n[+] {} live host(s) found in {:.1}s",
        results.len(),
        scan_start.elapsed().as_secs_f64()
    );

    if let Some(out) = cli.output {
        let path = PathBuf::from(out);
        output::write_results(&path, &results)?;
        println!("[+] Results written to {}", path.display());
    }

    Ok(())
}
