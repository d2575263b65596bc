//! Navigable site paths.

use std::fmt;
use std::path::PathBuf;

/// A page of the site.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Home,
    /// `/guides`
    Guides,
    /// `/guides/{slug}`
    Guide(String),
    /// `/about`
    About,
    /// `/resources`
    Resources,
    /// `/community`
    Community,
}

impl Route {
    /// URL path with leading slash.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Guides => "/guides".to_owned(),
            Self::Guide(slug) => format!("/guides/{slug}"),
            Self::About => "/about".to_owned(),
            Self::Resources => "/resources".to_owned(),
            Self::Community => "/community".to_owned(),
        }
    }

    /// File written for this route by the static build, relative to the
    /// output directory.
    #[must_use]
    pub fn output_file(&self) -> PathBuf {
        match self {
            Self::Home => PathBuf::from("index.html"),
            other => PathBuf::from(other.path().trim_start_matches('/')).join("index.html"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Guides.path(), "/guides");
        assert_eq!(Route::Guide("interview-prep".to_owned()).path(), "/guides/interview-prep");
        assert_eq!(Route::Community.to_string(), "/community");
    }

    #[test]
    fn test_route_output_files() {
        assert_eq!(Route::Home.output_file(), PathBuf::from("index.html"));
        assert_eq!(Route::Guides.output_file(), PathBuf::from("guides/index.html"));
        assert_eq!(
            Route::Guide("css-profile".to_owned()).output_file(),
            PathBuf::from("guides/css-profile/index.html")
        );
        assert_eq!(Route::About.output_file(), PathBuf::from("about/index.html"));
    }
}
