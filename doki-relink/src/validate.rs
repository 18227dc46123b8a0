use url::Url;

/// Whether `input` is an absolute URL with the `http` or `https` scheme.
///
/// Purely syntactic, nothing is fetched.
pub fn is_valid_url(input: &str) -> bool {
    if input.trim().is_empty() {
        return false;
    }

    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
