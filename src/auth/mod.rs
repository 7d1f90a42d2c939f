//! Authentication module: opaque token issuance and re-validation.
//!
//! Login checks credentials against the `users` table; token re-validation
//! on `/auth/check` deliberately does NOT go back to the database. It trusts
//! a fixed allowlist of three usernames and recomputes role/display name
//! from a hardcoded mapping, reproducing the behavior of the system this
//! backend replaces (a database user outside the allowlist can log in but
//! fails every subsequent check).

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};
use subtle::ConstantTimeEq;

use crate::models::AuthUser;

/// Token validity window in milliseconds (24 hours).
pub const TOKEN_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Usernames trusted by `/auth/check` without a database round trip.
const ALLOWED_USERNAMES: &[&str] = &["admin", "safety", "hrd"];

/// Issue an opaque token pairing the username with an issuance timestamp.
///
/// The token is `base64("username:<unix-millis>")` — reversible by the
/// caller and not cryptographically signed.
pub fn issue_token(username: &str, now: DateTime<Utc>) -> String {
    STANDARD.encode(format!("{}:{}", username, now.timestamp_millis()))
}

/// Decode a token into its `(username, issued_at_millis)` pair.
pub fn decode_token(token: &str) -> Option<(String, i64)> {
    let bytes = STANDARD.decode(token).ok()?;
    let decoded = String::from_utf8(bytes).ok()?;
    let (username, issued) = decoded.split_once(':')?;
    let issued_ms = issued.parse::<i64>().ok()?;
    Some((username.to_string(), issued_ms))
}

/// Role and display name for an allowlisted username.
fn directory_profile(username: &str) -> Option<(&'static str, &'static str)> {
    if !ALLOWED_USERNAMES.contains(&username) {
        return None;
    }
    match username {
        "admin" => Some(("admin", "Administrator")),
        "safety" => Some(("safety_officer", "Safety Officer")),
        _ => Some(("hrd", "HRD Officer")),
    }
}

/// Validate a token against the allowlist and the 24h validity window.
///
/// Returns the reconstructed user on success. Tokens older than the window
/// are rejected; the issuance timestamp is otherwise trusted as-is.
pub fn verify_token(token: &str, now: DateTime<Utc>) -> Option<AuthUser> {
    let (username, issued_ms) = decode_token(token)?;

    let age_ms = now.timestamp_millis() - issued_ms;
    if age_ms > TOKEN_TTL_MS {
        return None;
    }

    let (role, name) = directory_profile(&username)?;
    Some(AuthUser {
        username,
        role: role.to_string(),
        name: name.to_string(),
    })
}

/// Constant-time plaintext password comparison.
///
/// `ConstantTimeEq` compares both buffers in full regardless of where they
/// first differ and returns false for unequal lengths without early exit.
pub fn passwords_match(expected: &str, provided: &str) -> bool {
    expected.as_bytes().ct_eq(provided.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_token_round_trip() {
        let issued = at(1_700_000_000_000);
        let token = issue_token("admin", issued);
        let (username, issued_ms) = decode_token(&token).unwrap();
        assert_eq!(username, "admin");
        assert_eq!(issued_ms, 1_700_000_000_000);
    }

    #[test]
    fn test_fresh_token_verifies() {
        let issued = at(1_700_000_000_000);
        let token = issue_token("safety", issued);
        let user = verify_token(&token, at(1_700_000_000_000 + TOKEN_TTL_MS / 2)).unwrap();
        assert_eq!(user.username, "safety");
        assert_eq!(user.role, "safety_officer");
        assert_eq!(user.name, "Safety Officer");
    }

    #[test]
    fn test_expired_token_rejected() {
        let issued = at(1_700_000_000_000);
        let token = issue_token("admin", issued);
        assert!(verify_token(&token, at(1_700_000_000_000 + TOKEN_TTL_MS + 1)).is_none());
    }

    #[test]
    fn test_token_at_exact_ttl_still_valid() {
        let issued = at(1_700_000_000_000);
        let token = issue_token("hrd", issued);
        assert!(verify_token(&token, at(1_700_000_000_000 + TOKEN_TTL_MS)).is_some());
    }

    #[test]
    fn test_non_allowlisted_username_rejected() {
        // A fourth database user can log in, but check must fail
        let token = issue_token("budi", at(1_700_000_000_000));
        assert!(verify_token(&token, at(1_700_000_000_000)).is_none());
    }

    #[test]
    fn test_garbage_tokens_rejected() {
        let now = at(1_700_000_000_000);
        assert!(verify_token("not-base64!!!", now).is_none());
        assert!(verify_token(&STANDARD.encode("no-separator"), now).is_none());
        assert!(verify_token(&STANDARD.encode("admin:not-a-number"), now).is_none());
    }

    #[test]
    fn test_passwords_match() {
        assert!(passwords_match("admin123", "admin123"));
        assert!(!passwords_match("admin123", "admin124"));
        assert!(!passwords_match("admin123", "admin1234"));
        assert!(!passwords_match("admin123", ""));
    }
}
