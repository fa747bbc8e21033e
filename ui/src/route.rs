//! Typed routes for the app shell.
//!
//! Paths are matched by [`AppRoute::resolve`], which walks the route table in a
//! fixed order and stops at the first hit. Anything the table does not cover
//! resolves to [`AppRoute::NotFound`].

use dioxus_logger::tracing::debug;
use std::fmt;
use std::str::FromStr;

/// Literal path of the explore view. Matched case-insensitively.
const EXPLORE: &str = "explore";

/// A profile handle taken from the first path segment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Username(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsernameError {
    #[error("username is empty")]
    Empty,

    #[error("username `{0}` contains a character that is not allowed in a path segment")]
    InvalidChar(String),
}

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Username {
    type Err = UsernameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(UsernameError::Empty);
        }
        if s.contains(['/', '?', '#']) {
            return Err(UsernameError::InvalidChar(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every view the Home shell can dispatch to.
#[derive(Clone, Debug, PartialEq, Eq, strum::EnumIs)]
pub enum AppRoute {
    /// `/`
    Home,
    /// `/explore`
    Explore,
    /// `/:username`
    Profile { username: Username },
    /// Any path the table does not match. Holds the path as given.
    NotFound { path: String },
}

impl AppRoute {
    /// Matches `path` against the route table, first match wins:
    ///
    /// 1. `/` exactly
    /// 2. `/explore` exactly
    /// 3. `/:username`, a prefix match on the first segment
    /// 4. otherwise `NotFound`
    ///
    /// Literal routes ignore ASCII case and a single trailing slash. Query
    /// strings and fragments are dropped before matching.
    pub fn resolve(path: &str) -> Self {
        let bare = path.split(['?', '#']).next().unwrap_or_default();
        let bare = bare.strip_prefix('/').unwrap_or(bare);
        let segments: Vec<&str> = if bare.is_empty() {
            Vec::new()
        } else {
            bare.split('/').collect()
        };

        let route = Self::match_segments(&segments).unwrap_or_else(|| Self::NotFound {
            path: path.to_string(),
        });
        debug!("resolved {path:?} to {route:?}");
        route
    }

    /// Same table as [`AppRoute::resolve`], fed with path segments that were
    /// already split and decoded by the router. A segment is never split again,
    /// so `/a%2Fb` arrives as the single segment `a/b`.
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        let segments: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();

        let route = Self::match_segments(&segments).unwrap_or_else(|| Self::NotFound {
            path: format!("/{}", segments.join("/")),
        });
        debug!("resolved segments {segments:?} to {route:?}");
        route
    }

    fn match_segments(segments: &[&str]) -> Option<Self> {
        let segments = match segments {
            [] => return Some(Self::Home),
            // one trailing slash
            [rest @ .., ""] if !rest.is_empty() => rest,
            all => all,
        };

        if let [only] = segments {
            if only.eq_ignore_ascii_case(EXPLORE) {
                return Some(Self::Explore);
            }
        }

        let username = segments.first()?.parse::<Username>().ok()?;
        Some(Self::Profile { username })
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Explore => format!("/{EXPLORE}"),
            Self::Profile { username } => format!("/{username}"),
            Self::NotFound { path } => path.clone(),
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> AppRoute {
        AppRoute::Profile {
            username: name.parse().unwrap(),
        }
    }

    #[test]
    fn root_is_home() {
        assert_eq!(AppRoute::resolve("/"), AppRoute::Home);
        assert_eq!(AppRoute::resolve(""), AppRoute::Home);
        assert_eq!(AppRoute::resolve("/?tab=feed"), AppRoute::Home);
    }

    #[test]
    fn explore_is_exact_and_case_insensitive() {
        assert_eq!(AppRoute::resolve("/explore"), AppRoute::Explore);
        assert_eq!(AppRoute::resolve("/explore/"), AppRoute::Explore);
        assert_eq!(AppRoute::resolve("/EXPLORE"), AppRoute::Explore);
        assert_eq!(AppRoute::resolve("explore#top"), AppRoute::Explore);
    }

    #[test]
    fn single_segment_is_profile() {
        assert_eq!(AppRoute::resolve("/alice"), profile("alice"));
        assert_eq!(AppRoute::resolve("/alice/"), profile("alice"));
        assert_eq!(AppRoute::resolve("/explorer"), profile("explorer"));
    }

    #[test]
    fn profile_ignores_trailing_segments() {
        assert_eq!(AppRoute::resolve("/alice/posts/3"), profile("alice"));
    }

    #[test]
    fn explore_with_more_segments_falls_through_to_profile() {
        assert_eq!(AppRoute::resolve("/explore/photos"), profile("explore"));
        assert_eq!(AppRoute::resolve("/Explore/x"), profile("Explore"));
    }

    #[test]
    fn unmatched_paths_are_not_found() {
        for path in ["//", "//alice", "///"] {
            let route = AppRoute::resolve(path);
            assert!(route.is_not_found(), "{path} resolved to {route:?}");
            assert_eq!(route.path(), path);
        }
    }

    #[test]
    fn canonical_paths_resolve_to_themselves() {
        for route in [AppRoute::Home, AppRoute::Explore, profile("bob_99")] {
            assert_eq!(AppRoute::resolve(&route.path()), route);
        }
    }

    #[test]
    fn profile_named_explore_is_shadowed() {
        // `/explore` wins the ordered match, so this profile has no canonical path.
        let route = profile("explore");
        assert_eq!(AppRoute::resolve(&route.path()), AppRoute::Explore);
    }

    #[test]
    fn segments_are_never_split_again() {
        assert!(AppRoute::from_segments(&["a/b"]).is_not_found());
        assert!(AppRoute::from_segments(&["a?b"]).is_not_found());
        assert!(AppRoute::from_segments(&["a#b"]).is_not_found());
    }

    #[test]
    fn segments_follow_the_same_table() {
        let none: [&str; 0] = [];
        assert_eq!(AppRoute::from_segments(&none), AppRoute::Home);
        assert_eq!(AppRoute::from_segments(&["EXPLORE", ""]), AppRoute::Explore);
        assert_eq!(AppRoute::from_segments(&["alice", "posts"]), profile("alice"));
        assert_eq!(AppRoute::from_segments(&["explore", "x"]), profile("explore"));
        assert_eq!(
            AppRoute::from_segments(&[""]),
            AppRoute::NotFound {
                path: "/".to_string()
            }
        );
    }

    #[test]
    fn username_validation() {
        assert_eq!("".parse::<Username>(), Err(UsernameError::Empty));
        assert_eq!(
            "a/b".parse::<Username>(),
            Err(UsernameError::InvalidChar("a/b".to_string()))
        );
        assert_eq!("explore".parse::<Username>().unwrap().as_str(), "explore");
        assert_eq!("alice".parse::<Username>().unwrap().as_str(), "alice");
    }
}
