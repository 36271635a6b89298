// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side route table.

/// Pages of the web client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientRoute {
    Home,
    Login,
    UserProfile { user_id: String },
    Events,
    MySubmissions,
}

impl ClientRoute {
    /// Match a path against the route table.
    pub fn resolve(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Some(ClientRoute::Home),
            "/login" => Some(ClientRoute::Login),
            "/events" => Some(ClientRoute::Events),
            "/my-submissions" => Some(ClientRoute::MySubmissions),
            _ => {
                let user_id = trimmed.strip_prefix("/user/")?;
                if user_id.is_empty() || user_id.contains('/') {
                    return None;
                }
                Some(ClientRoute::UserProfile {
                    user_id: user_id.to_string(),
                })
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            ClientRoute::Home => "/".to_string(),
            ClientRoute::Login => "/login".to_string(),
            ClientRoute::UserProfile { user_id } => format!("/user/{}", user_id),
            ClientRoute::Events => "/events".to_string(),
            ClientRoute::MySubmissions => "/my-submissions".to_string(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, ClientRoute::MySubmissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_paths() {
        assert_eq!(ClientRoute::resolve("/"), Some(ClientRoute::Home));
        assert_eq!(ClientRoute::resolve("/login"), Some(ClientRoute::Login));
        assert_eq!(ClientRoute::resolve("/events/"), Some(ClientRoute::Events));
        assert_eq!(
            ClientRoute::resolve("/user/abc?tab=posts"),
            Some(ClientRoute::UserProfile {
                user_id: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_resolve_unknown_paths() {
        assert_eq!(ClientRoute::resolve("/user/"), None);
        assert_eq!(ClientRoute::resolve("/user/a/b"), None);
        assert_eq!(ClientRoute::resolve("/settings"), None);
    }

    #[test]
    fn test_path_round_trip() {
        let route = ClientRoute::UserProfile {
            user_id: "u1".to_string(),
        };
        assert_eq!(ClientRoute::resolve(&route.path()), Some(route));
    }

    #[test]
    fn test_only_submissions_require_auth() {
        assert!(ClientRoute::MySubmissions.requires_auth());
        assert!(!ClientRoute::Login.requires_auth());
        assert!(!ClientRoute::Home.requires_auth());
    }
}
