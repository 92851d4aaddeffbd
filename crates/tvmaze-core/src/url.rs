//! URL helper functions for the TVmaze API
//!
//! Provides functions for building the two read endpoints this crate uses.

/// Default public API root
pub const BASE_URL: &str = "https://api.tvmaze.com";

/// Builds the show search URL for a given term
///
/// URL encodes the term. An empty term is passed through as `q=`;
/// upstream decides what that means.
///
/// # Example
/// ```
/// use tvmaze_core::url::build_search_url;
/// let url = build_search_url("https://api.tvmaze.com", "the wire");
/// assert_eq!(url, "https://api.tvmaze.com/search/shows?q=the%20wire");
/// ```
pub fn build_search_url(base_url: &str, term: &str) -> String {
    let encoded = urlencoding::encode(term);
    format!("{}/search/shows?q={}", trim_base(base_url), encoded)
}

/// Builds the episode listing URL for a show, specials included
///
/// # Example
/// ```
/// use tvmaze_core::url::build_episodes_url;
/// let url = build_episodes_url("https://api.tvmaze.com", 139);
/// assert_eq!(url, "https://api.tvmaze.com/shows/139/episodes?specials=1");
/// ```
pub fn build_episodes_url(base_url: &str, show_id: i64) -> String {
    format!("{}/shows/{}/episodes?specials=1", trim_base(base_url), show_id)
}

fn trim_base(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_search_url_simple() {
        let url = build_search_url(BASE_URL, "girls");
        assert_eq!(url, "https://api.tvmaze.com/search/shows?q=girls");
    }

    #[test]
    fn test_build_search_url_with_spaces_and_symbols() {
        let url = build_search_url(BASE_URL, "law & order");
        assert_eq!(url, "https://api.tvmaze.com/search/shows?q=law%20%26%20order");
    }

    #[test]
    fn test_build_search_url_empty_term() {
        let url = build_search_url(BASE_URL, "");
        assert_eq!(url, "https://api.tvmaze.com/search/shows?q=");
    }

    #[test]
    fn test_build_episodes_url() {
        let url = build_episodes_url(BASE_URL, 139);
        assert_eq!(url, "https://api.tvmaze.com/shows/139/episodes?specials=1");
    }

    #[test]
    fn test_trailing_slash_on_base() {
        let url = build_episodes_url("http://127.0.0.1:8080/", 7);
        assert_eq!(url, "http://127.0.0.1:8080/shows/7/episodes?specials=1");
    }
}
