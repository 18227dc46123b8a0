use crate::validate::is_valid_url;

/// The two URLs a run points the doki-docs assets at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementTarget {
    stylesheet_url: String,
    script_url: String,
}

impl ReplacementTarget {
    pub fn new(stylesheet_url: impl Into<String>, script_url: impl Into<String>) -> anyhow::Result<Self> {
        let stylesheet_url = stylesheet_url.into();
        let script_url = script_url.into();

        if !is_valid_url(&stylesheet_url) {
            anyhow::bail!("The stylesheet URL '{}' is not a valid http(s) URL!", stylesheet_url);
        }
        if !is_valid_url(&script_url) {
            anyhow::bail!("The script URL '{}' is not a valid http(s) URL!", script_url);
        }

        Ok(Self { stylesheet_url, script_url })
    }

    pub fn stylesheet_url(&self) -> &str {
        &self.stylesheet_url
    }

    pub fn script_url(&self) -> &str {
        &self.script_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_both_urls() {
        let target = ReplacementTarget::new("https://cdn.example.com/style.css", "https://cdn.example.com/script.js").unwrap();

        assert_eq!(target.stylesheet_url(), "https://cdn.example.com/style.css");
        assert_eq!(target.script_url(), "https://cdn.example.com/script.js");
    }

    #[test]
    fn refuses_an_invalid_url_on_either_side() {
        let error = ReplacementTarget::new("ftp://x", "https://cdn.example.com/script.js").unwrap_err();
        assert!(error.to_string().contains("stylesheet"));

        let error = ReplacementTarget::new("https://cdn.example.com/style.css", "").unwrap_err();
        assert!(error.to_string().contains("script"));
    }
}
