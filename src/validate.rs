use once_cell::sync::Lazy;
use regex::Regex;

static LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]{1,63}$").expect("label pattern"));

/// True iff `label` is a syntactically legal DNS label: non-empty, at most
/// 63 characters, ASCII letters, digits and hyphens only.
pub fn is_valid_label(label: &str) -> bool {
    LABEL_RE.is_match(label)
}
