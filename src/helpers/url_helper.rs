use url::Url;

fn has_http_scheme(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Prefixes `https://` when no http(s) scheme was given.
pub fn format_url(input: &str) -> String {
    let trimmed = input.trim();
    if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// True when the input, once normalized, is an http(s) URL with a host.
pub fn is_valid_url(input: &str) -> bool {
    if input.trim().is_empty() {
        return false;
    }

    match Url::parse(&format_url(input)) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}
