//! Backend endpoint configuration.
//!
//! The backend host is fixed at build time: set `API_BASE_URL` when
//! compiling to point at a deployed instance, otherwise the local
//! development server is assumed.

const DEFAULT_BASE: &str = "http://localhost:8000";

/// Base URL of the backend, without a trailing slash.
pub fn base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE)
}

/// Absolute URL for an endpoint path (`path` starts with `/`).
pub(crate) fn url(path: &str) -> String {
    format!("{}{path}", base_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!base_url().ends_with('/'));
    }

    #[test]
    fn url_joins_path() {
        assert_eq!(url("/login"), format!("{}/login", base_url()));
    }
}
