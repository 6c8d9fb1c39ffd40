use validator::ValidateUrl;

const ALLOWED_SCHEMES: &[&str] = &["http://", "https://"];

/// Accept only absolute http(s) URLs that parse and carry no whitespace.
pub fn is_valid_long_url(url: &str) -> bool {
    if url.is_empty() || url.chars().any(char::is_whitespace) {
        return false;
    }

    let lower = url.to_ascii_lowercase();
    let Some(rest) = ALLOWED_SCHEMES
        .iter()
        .find_map(|scheme| lower.strip_prefix(scheme))
    else {
        return false;
    };

    // "https://" alone or "https:///path" has no host
    if rest.is_empty() || rest.starts_with('/') {
        return false;
    }

    url.validate_url()
}
