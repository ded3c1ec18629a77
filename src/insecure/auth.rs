//! Weak credential checks
//!
//! INTENTIONALLY INSECURE: neither check is constant-time, neither limits
//! attempts, and the token check accepts any string that merely contains
//! the token.

/// Plain string equality against a static password.
pub fn insecure_password_eq(supplied: &str, expected: &str) -> bool {
    supplied == expected
}

/// Substring match of `token` anywhere inside `header`.
///
/// An empty token matches every header, including a missing one.
pub fn insecure_token_contains(header: &str, token: &str) -> bool {
    header.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_eq_is_exact() {
        assert!(insecure_password_eq("admin123", "admin123"));
        assert!(!insecure_password_eq("admin1234", "admin123"));
        assert!(!insecure_password_eq("", "admin123"));
        assert!(!insecure_password_eq("ADMIN123", "admin123"));
    }

    #[test]
    fn test_token_substring_anywhere() {
        let token = "supersecrettoken";
        assert!(insecure_token_contains("supersecrettoken", token));
        assert!(insecure_token_contains("Bearer supersecrettoken", token));
        assert!(insecure_token_contains("Bearer XXXsupersecrettokenYYY", token));
        assert!(!insecure_token_contains("Bearer supersecret", token));
        assert!(!insecure_token_contains("", token));
    }

    #[test]
    fn test_empty_token_matches_everything() {
        assert!(insecure_token_contains("", ""));
        assert!(insecure_token_contains("anything", ""));
    }
}
