//! Request URL resolution
//!
//! Absolute `http(s)://` paths are used verbatim. `/api` paths go to the
//! development proxy when one is configured. Everything else is appended to
//! the base URL, keeping any path prefix the base URL carries.

use promohub_domain::{ApiConfig, ApiError};
use url::Url;

/// Turns route paths into absolute request URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlResolver {
    base_url: Option<Url>,
    proxy_target: Option<Url>,
}

impl UrlResolver {
    /// Parse the configured origins. Blank values count as unset.
    ///
    /// # Errors
    /// [`ApiError::Config`] if either value is not an absolute http(s) URL.
    pub fn new(base_url: &str, proxy_target: Option<&str>) -> Result<Self, ApiError> {
        let base_url = parse_origin(base_url)?;
        let proxy_target = proxy_target.map(parse_origin).transpose()?.flatten();
        Ok(Self { base_url, proxy_target })
    }

    /// # Errors
    /// As [`UrlResolver::new`].
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url, config.proxy_target.as_deref())
    }

    /// Absolute URL for `path`.
    ///
    /// # Errors
    /// [`ApiError::Config`] when `path` is relative and no base URL (or proxy
    /// for `/api` paths) is configured.
    pub fn resolve(&self, path: &str) -> Result<String, ApiError> {
        if is_absolute(path) {
            return Ok(path.to_string());
        }

        if let Some(proxy) = &self.proxy_target {
            if path == "/api" || path.starts_with("/api/") || path.starts_with("/api?") {
                return Ok(join(proxy, path));
            }
        }

        match &self.base_url {
            Some(base) => Ok(join(base, path)),
            None => Err(ApiError::Config(format!("No API base URL configured for {path}"))),
        }
    }

    /// Configured base URL, if any
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }
}

fn parse_origin(value: &str) -> Result<Option<Url>, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let url = Url::parse(value).map_err(|e| ApiError::Config(format!("Invalid API URL '{value}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(Some(url)),
        other => Err(ApiError::Config(format!("Unsupported URL scheme '{other}' in '{value}'"))),
    }
}

/// `base` with `path` appended to its path; the query string of `path`
/// replaces any query on `base`.
fn join(base: &Url, path: &str) -> String {
    let (route, query) = match path.split_once('?') {
        Some((route, query)) => (route, Some(query)),
        None => (path, None),
    };
    let prefix = base.path().trim_end_matches('/');
    let separator = if route.starts_with('/') { "" } else { "/" };

    let mut url = base.clone();
    url.set_path(&format!("{prefix}{separator}{route}"));
    url.set_query(query);
    url.into()
}

fn is_absolute(path: &str) -> bool {
    let lower = path.get(..8).unwrap_or(path).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_prefix() {
        let resolver = UrlResolver::new("https://api.example.com/", None).unwrap();
        assert_eq!(resolver.resolve("/api/promotions").unwrap(), "https://api.example.com/api/promotions");
        assert_eq!(
            resolver.resolve("/api/auth/refresh?refreshToken=a%2Bb").unwrap(),
            "https://api.example.com/api/auth/refresh?refreshToken=a%2Bb"
        );
    }

    #[test]
    fn test_base_url_path_prefix_is_kept() {
        let resolver = UrlResolver::new("https://example.com/backend/", None).unwrap();
        assert_eq!(resolver.resolve("/api/events").unwrap(), "https://example.com/backend/api/events");
        assert_eq!(resolver.resolve("api/events").unwrap(), "https://example.com/backend/api/events");
    }

    #[test]
    fn test_absolute_urls_are_untouched() {
        let resolver = UrlResolver::new("https://api.example.com", None).unwrap();
        assert_eq!(resolver.resolve("https://cdn.example.com/x").unwrap(), "https://cdn.example.com/x");
        assert_eq!(resolver.resolve("HTTP://cdn.example.com/x").unwrap(), "HTTP://cdn.example.com/x");
    }

    #[test]
    fn test_proxy_only_applies_to_api_paths() {
        let resolver =
            UrlResolver::new("https://api.example.com", Some("http://localhost:8080/")).unwrap();
        assert_eq!(resolver.resolve("/api/events").unwrap(), "http://localhost:8080/api/events");
        assert_eq!(resolver.resolve("/health").unwrap(), "https://api.example.com/health");
        assert_eq!(resolver.resolve("/apiary").unwrap(), "https://api.example.com/apiary");
    }

    #[test]
    fn test_missing_base_url_is_config_error() {
        let resolver = UrlResolver::new("", None).unwrap();
        assert!(matches!(resolver.resolve("/api/events"), Err(ApiError::Config(_))));

        let proxied = UrlResolver::new("  ", Some("http://localhost:8080")).unwrap();
        assert_eq!(proxied.resolve("/api/events").unwrap(), "http://localhost:8080/api/events");
    }

    #[test]
    fn test_malformed_urls_are_rejected() {
        assert!(matches!(UrlResolver::new("api.example.com", None), Err(ApiError::Config(_))));
        assert!(matches!(UrlResolver::new("ftp://files.example.com", None), Err(ApiError::Config(_))));
        assert!(matches!(
            UrlResolver::new("https://api.example.com", Some("not a url")),
            Err(ApiError::Config(_))
        ));
    }
}
