//! Embedded static assets.

/// URL path of the site stylesheet.
pub const STYLESHEET_PATH: &str = "/assets/site.css";

/// Site stylesheet.
pub const STYLESHEET: &str = include_str!("../assets/site.css");

/// Embedded asset for a URL path (leading slash optional).
#[must_use]
pub fn get(path: &str) -> Option<&'static str> {
    match path.trim_start_matches('/') {
        "assets/site.css" => Some(STYLESHEET),
        _ => None,
    }
}

/// MIME type for an asset path.
#[must_use]
pub fn mime_for(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("css") => "text/css; charset=utf-8",
        Some("html") => "text/html; charset=utf-8",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_stylesheet() {
        assert_eq!(get(STYLESHEET_PATH), Some(STYLESHEET));
        assert_eq!(get("assets/site.css"), Some(STYLESHEET));
        assert_eq!(get("/assets/app.js"), None);
        assert!(!STYLESHEET.is_empty());
    }

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for("assets/site.css"), "text/css; charset=utf-8");
        assert_eq!(mime_for("index.html"), "text/html; charset=utf-8");
        assert_eq!(mime_for("blob"), "application/octet-stream");
    }
}
