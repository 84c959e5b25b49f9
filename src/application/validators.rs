/// Loose signup check: non-empty and contains an `@`.
///
/// This is deliberately not an RFC address check. Strings like `"a@"` pass.
pub fn is_plausible_email(email: &str) -> bool {
    !email.is_empty() && email.contains('@')
}

/// Canonical form used as the store's unique key.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
