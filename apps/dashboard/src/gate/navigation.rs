use std::fmt;

/// Query parameter carrying the return-to path through the sign-in flow.
pub const RETURN_TO_PARAM: &str = "next";

/// Where a navigation goes, optionally remembering where to come back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub path: String,
    pub return_to: Option<String>,
}

impl NavigationTarget {
    pub fn to(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            return_to: None,
        }
    }

    pub fn with_return_to(path: impl Into<String>, return_to: &str) -> Self {
        Self {
            path: path.into(),
            return_to: Some(sanitize_return_to(return_to)),
        }
    }

    /// Relative URL for the target, e.g. `/auth?next=/`.
    pub fn href(&self) -> String {
        match &self.return_to {
            Some(next) => format!(
                "{}?{}={}",
                self.path,
                RETURN_TO_PARAM,
                encode_query_value(next)
            ),
            None => self.path.clone(),
        }
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// The single navigation operation the access gate needs.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: &NavigationTarget);
}

/// Redirect to the sign-in route that brings the viewer back to `location`.
pub fn auth_redirect(auth_route: &str, location: &str) -> NavigationTarget {
    NavigationTarget::with_return_to(auth_route, location)
}

/// Return-to values must stay on this site: a single leading `/`, no scheme,
/// no backslashes, no control characters. Anything else becomes `/`.
pub fn sanitize_return_to(raw: &str) -> String {
    let candidate = raw.trim();
    let local = candidate.starts_with('/')
        && !candidate.starts_with("//")
        && !candidate.contains('\\')
        && !candidate.chars().any(char::is_control);

    if local {
        candidate.to_string()
    } else {
        "/".to_string()
    }
}

// Percent-encodes everything outside the unreserved set, keeping `/` readable.
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
