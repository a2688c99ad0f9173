use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Build the shared probe client with connection pooling enabled.
pub fn build_probe_client(timeout: Duration) -> anyhow::Result<Client> {
    let client = ClientBuilder::new()
        // Connection pooling - candidates on the same host reuse sockets
        .pool_max_idle_per_host(64)
        .pool_idle_timeout(Some(Duration::from_secs(90)))
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .tcp_nodelay(true)

        // Timeouts
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(5))

        // Compression
        .gzip(true)
        .brotli(true)

        // TLS
        .use_rustls_tls()
        .https_only(false)

        // Redirects
        .redirect(reqwest::redirect::Policy::limited(5))

        // Hosts behind self-signed or mismatched certs still count as live
        .danger_accept_invalid_certs(true)

        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = build_probe_client(Duration::from_secs(10));
        assert!(client.is_ok());
    }
}
