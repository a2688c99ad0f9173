use crate::config::{ScanConfig, ScanMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    pub fn scheme(self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

/// One concrete attempt for a candidate: where the request goes and what is
/// overridden on it. Built per attempt, discarded with the outcome.
#[derive(Debug, Clone)]
pub struct ProbeTarget {
    pub protocol: Protocol,
    pub url: String,
    pub header_overrides: Vec<(String, String)>,
    pub display_name: String,
}

/// Expand a candidate into its ordered probe attempts.
///
/// Standard mode tries http then https against `candidate.domain`. VHost
/// mode sends a single http request to the fixed IP with the candidate host
/// in the Host header; name-based virtual hosting is discriminated by the
/// header reaching the IP, not by DNS resolution of the candidate.
pub fn build_attempts(candidate: &str, config: &ScanConfig) -> Vec<ProbeTarget> {
    let display_name = format!("{}.{}", candidate, config.domain);
    match &config.mode {
        ScanMode::Standard => [Protocol::Http, Protocol::Https]
            .into_iter()
            .map(|protocol| ProbeTarget {
                protocol,
                url: format!("{}://{}", protocol.scheme(), display_name),
                header_overrides: Vec::new(),
                display_name: display_name.clone(),
            })
            .collect(),
        ScanMode::VHost { target_ip } => vec![ProbeTarget {
            protocol: Protocol::Http,
            url: format!("http://{}", target_ip),
            header_overrides: vec![("Host".to_string(), display_name.clone())],
            display_name,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_mode_tries_http_then_https() {
        let config = ScanConfig::new("example.com", ScanMode::Standard);
        let attempts = build_attempts("www", &config);
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].url, "http://www.example.com");
        assert_eq!(attempts[1].url, "https://www.example.com");
        assert!(attempts[0].header_overrides.is_empty());
        assert_eq!(attempts[0].display_name, "www.example.com");
        assert_eq!(attempts[1].display_name, "www.example.com");
    }

    #[test]
    fn vhost_mode_spoofs_host_header_at_fixed_ip() {
        let config = ScanConfig::new(
            "example.com",
            ScanMode::VHost { target_ip: "10.0.0.5".into() },
        );
        let attempts = build_attempts("admin", &config);
        assert_eq!(attempts.len(), 1);
        let target = &attempts[0];
        assert_eq!(target.protocol, Protocol::Http);
        assert_eq!(target.url, "http://10.0.0.5");
        assert_eq!(
            target.header_overrides,
            vec![("Host".to_string(), "admin.example.com".to_string())]
        );
        assert_eq!(target.display_name, "admin.example.com");
    }
}
