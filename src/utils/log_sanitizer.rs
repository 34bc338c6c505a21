//! Log sanitization utilities for masking sensitive data.
//!
//! Emails are lookup keys in this service and show up in debug logs; they are
//! masked before they are written.

/// Number of leading characters left visible in a masked value.
const VISIBLE_CHARS: usize = 3;

/// Mask an email address for safe logging.
///
/// Keeps the first three characters of the local part (fewer if it is shorter)
/// followed by asterisks and the domain.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local_part, domain)) => format!("{}***@{}", visible_prefix(local_part), domain),
        None => format!("{}***", visible_prefix(email)),
    }
}

fn visible_prefix(value: &str) -> &str {
    match value.char_indices().nth(VISIBLE_CHARS) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email_normal() {
        assert_eq!(mask_email("user@example.com"), "use***@example.com");
        assert_eq!(mask_email("johndoe@test.org"), "joh***@test.org");
    }

    #[test]
    fn test_mask_email_short_local_part() {
        assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
        assert_eq!(mask_email("a@test.org"), "a***@test.org");
        assert_eq!(mask_email("@test.org"), "***@test.org");
    }

    #[test]
    fn test_mask_email_invalid() {
        assert_eq!(mask_email("notanemail"), "not***");
        assert_eq!(mask_email(""), "***");
    }

    #[test]
    fn test_mask_email_multibyte() {
        assert_eq!(mask_email("jürgen@example.de"), "jür***@example.de");
    }
}
