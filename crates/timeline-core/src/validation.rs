//! Submission validation.
//!
//! Fields are checked in a fixed order (name, content, email) and the first
//! failure wins, so a draft missing several fields always reports the same
//! error.

use crate::domain::{NewTimelinePost, PostDraft};
use crate::error::ValidationError;

/// Longest accepted author name, in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// Longest accepted email, in characters.
pub const MAX_EMAIL_CHARS: usize = 254;

/// Longest accepted message body, in characters.
pub const MAX_CONTENT_CHARS: usize = 1000;

/// Validate a draft, producing a post ready to be stored.
pub fn validate(draft: PostDraft) -> Result<NewTimelinePost, ValidationError> {
    let name = draft
        .name
        .filter(|name| is_present(name, MAX_NAME_CHARS))
        .ok_or(ValidationError::InvalidName)?;

    let content = draft
        .content
        .filter(|content| is_present(content, MAX_CONTENT_CHARS))
        .ok_or(ValidationError::InvalidContent)?;

    let email = draft
        .email
        .filter(|email| email.chars().count() <= MAX_EMAIL_CHARS && has_email_shape(email))
        .ok_or(ValidationError::InvalidEmail)?;

    Ok(NewTimelinePost::new(name, email, content))
}

fn is_present(value: &str, max_chars: usize) -> bool {
    !value.trim().is_empty() && value.chars().count() <= max_chars
}

/// Shape check only: an `@`, and a `.` somewhere after it.
///
/// Deliberately weaker than RFC 5322; `a@b.c@d` passes.
pub fn has_email_shape(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(_, rest)| rest.contains('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: Option<&str>, email: Option<&str>, content: Option<&str>) -> PostDraft {
        PostDraft {
            name: name.map(str::to_owned),
            email: email.map(str::to_owned),
            content: content.map(str::to_owned),
        }
    }

    #[test]
    fn test_accepts_complete_draft() {
        let post = validate(PostDraft::new("Alice", "alice@x.com", "hi")).unwrap();
        assert_eq!(post.name(), "Alice");
        assert_eq!(post.email(), "alice@x.com");
        assert_eq!(post.content(), "hi");
    }

    #[test]
    fn test_name_is_checked_before_content() {
        let result = validate(draft(None, Some("alice@x.com"), None));
        assert_eq!(result, Err(ValidationError::InvalidName));
    }

    #[test]
    fn test_content_is_checked_before_email() {
        let result = validate(draft(Some("Alice"), Some("nope"), Some("")));
        assert_eq!(result, Err(ValidationError::InvalidContent));
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert_eq!(
            validate(draft(Some("   "), Some("a@b.c"), Some("hi"))),
            Err(ValidationError::InvalidName)
        );
        assert_eq!(
            validate(draft(Some("Alice"), Some("a@b.c"), Some("\n\t "))),
            Err(ValidationError::InvalidContent)
        );
        assert_eq!(
            validate(draft(Some("Alice"), None, Some("hi"))),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_email_shape() {
        assert!(has_email_shape("a@b.c"));
        assert!(has_email_shape("a@b.c@d"));
        assert!(!has_email_shape("noat.com"));
        assert!(!has_email_shape("a@bcom"));
        assert!(!has_email_shape(""));
    }

    #[test]
    fn test_dot_must_follow_the_at() {
        assert!(!has_email_shape("first.last@localhost"));
        assert!(validate(draft(Some("A"), Some("a@b.c@d"), Some("hi"))).is_ok());
    }

    #[test]
    fn test_length_bounds() {
        let long_name = "n".repeat(MAX_NAME_CHARS + 1);
        assert_eq!(
            validate(draft(Some(&long_name), Some("a@b.c"), Some("hi"))),
            Err(ValidationError::InvalidName)
        );

        let long_content = "c".repeat(MAX_CONTENT_CHARS + 1);
        assert_eq!(
            validate(draft(Some("A"), Some("a@b.c"), Some(&long_content))),
            Err(ValidationError::InvalidContent)
        );

        let max_content = "é".repeat(MAX_CONTENT_CHARS);
        assert!(validate(draft(Some("A"), Some("a@b.c"), Some(&max_content))).is_ok());
    }
}
