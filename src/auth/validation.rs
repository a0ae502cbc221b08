/**
 * Input Validation
 *
 * Pure validation helpers used by the registration and login handlers.
 * None of these touch the database; they only inspect the supplied string.
 *
 * # Rules
 *
 * - Email: syntactic validity per RFC email-address grammar
 * - Password: at least 8 chars with lowercase, uppercase, and a digit
 * - Name: 2-50 characters after trimming whitespace
 */

use email_address::EmailAddress;

/// Validate email address syntax.
///
/// Returns `true` for any syntactically valid email address. No DNS or
/// deliverability checks are performed.
pub fn validate_email(email: &str) -> bool {
    email.parse::<EmailAddress>().is_ok()
}

/// Validate password strength.
///
/// Checks run in a fixed order and the first failing rule determines the
/// returned message: presence, length, lowercase, uppercase, digit.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one number");
    }
    Ok(())
}

/// Validate display name length.
///
/// Passes iff the trimmed name is between 2 and 50 characters inclusive.
pub fn validate_name(name: &str) -> bool {
    let trimmed = name.trim();
    (2..=50).contains(&trimmed.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_email_accepts_valid() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("user.name+tag@example.co.uk"));
    }

    #[test]
    fn test_validate_email_rejects_invalid() {
        assert!(!validate_email(""));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("missing-domain@"));
        assert!(!validate_email("@missing-local.com"));
        assert!(!validate_email("spaces in@example.com"));
    }

    #[test]
    fn test_validate_password_first_failing_rule_wins() {
        assert_eq!(validate_password(""), Err("Password is required"));
        assert_eq!(
            validate_password("abc"),
            Err("Password must be at least 8 characters long")
        );
        assert_eq!(
            validate_password("ABCDEFG1"),
            Err("Password must contain at least one lowercase letter")
        );
        assert_eq!(
            validate_password("abcdefgh"),
            Err("Password must contain at least one uppercase letter")
        );
        assert_eq!(
            validate_password("Abcdefgh"),
            Err("Password must contain at least one number")
        );
    }

    #[test]
    fn test_validate_password_length_counts_chars_not_bytes() {
        // 7 characters but 8 bytes; length is measured in characters.
        assert_eq!(
            validate_password("Aa1aaa\u{e4}"),
            Err("Password must be at least 8 characters long")
        );
        // 8 characters including a multi-byte one passes the length rule.
        assert_eq!(validate_password("Aa1aaaa\u{e4}"), Ok(()));
    }

    #[test]
    fn test_validate_password_accepts_strong() {
        assert_eq!(validate_password("Abcd1234"), Ok(()));
        assert_eq!(validate_password("correcthorseBattery1"), Ok(()));
    }

    #[test]
    fn test_validate_name_bounds() {
        assert!(validate_name("Jo"));
        assert!(validate_name("  Jo  ")); // trimmed before measuring
        assert!(validate_name(&"a".repeat(50)));
        assert!(!validate_name("J"));
        assert!(!validate_name("   "));
        assert!(!validate_name(&"a".repeat(51)));
    }
}
