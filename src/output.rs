use std::fs;
use std::path::Path;

use anyhow::Context;

fn render(urls: &[String]) -> String {
    let mut body = urls.join("\n");
    if !body.is_empty() {
        body.push('\n');
    }
    body
}

/// Write discovered URLs newline-delimited, overwriting any existing file.
/// Called once, after the full candidate set has been processed.
pub fn write_results(path: &Path, urls: &[String]) -> anyhow::Result<()> {
    fs::write(path, render(urls))
        .with_context(|| format!("failed to write results to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_url_per_line() {
        let urls = vec![
            "http://a.example.com".to_string(),
            "http://b.example.com".to_string(),
        ];
        assert_eq!(render(&urls), "http://a.example.com\nhttp://b.example.com\n");
    }

    #[test]
    fn renders_empty_result_as_empty_file() {
        assert_eq!(render(&[]), "");
    }
}
