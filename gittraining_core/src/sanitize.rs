//! Email sanitization and per-student repository naming
//!
//! Each student is identified by an email address; the repository that
//! holds their fork is named after a sanitized form of that address.
//! Sanitization is pure and total: any string in, a slug out, never an
//! error.

use serde::{Deserialize, Serialize};

/// Sanitize an email address into a repository-name slug.
///
/// Steps, in order: replace every `@` with `_at_`, drop every character
/// outside `[A-Za-z0-9-_@.]`, then lower-case the result. The filter
/// runs after the replacement, so the injected `_at_` always survives.
/// Sub-addressing (`user+tag@...`) gets no special handling: the `+` is
/// simply removed by the character filter.
pub fn clean(email: &str) -> String {
    email
        .replace('@', "_at_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '@' | '.'))
        .collect::<String>()
        .to_lowercase()
}

/// Full repository name for a sanitized slug within an organisation.
pub fn repo_name(organisation: &str, clean: &str) -> String {
    format!("{organisation}/{clean}")
}

/// One roster entry: a raw email plus its derived identifiers.
///
/// Derived fresh every time the email list is loaded; the email list
/// file itself stores only raw addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    pub email: String,
    pub clean: String,
    pub repo: String,
}

impl EmailRecord {
    /// Derive a record from a raw email and the course organisation.
    pub fn derive(organisation: &str, email: &str) -> Self {
        let clean = clean(email);
        let repo = repo_name(organisation, &clean);
        Self {
            email: email.to_string(),
            clean,
            repo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn replaces_at_sign_with_separator() {
        assert_eq!(clean("user@example.com"), "user_at_example.com");
    }

    #[test]
    fn lowercases_the_result() {
        assert_eq!(clean("User@Example.com"), "user_at_example.com");
    }

    #[test]
    fn strips_disallowed_characters() {
        assert_eq!(clean("user+name@example.com"), "username_at_example.com");
        assert_eq!(clean("a b\tc@d!e"), "abc_at_de");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(clean(""), "");
    }

    #[test]
    fn repo_name_joins_with_slash() {
        assert_eq!(
            repo_name("training-demo-for-phil", "b"),
            "training-demo-for-phil/b"
        );
    }

    #[test]
    fn derive_builds_all_three_fields() {
        let record = EmailRecord::derive("training-demo-for-phil", "a+b@example.com");
        assert_eq!(record.email, "a+b@example.com");
        assert_eq!(record.clean, "ab_at_example.com");
        assert_eq!(record.repo, "training-demo-for-phil/ab_at_example.com");
    }

    proptest! {
        #[test]
        fn clean_is_total(input in ".*") {
            // Must never panic, whatever the input.
            let _ = clean(&input);
        }

        #[test]
        fn clean_is_idempotent(input in ".*") {
            let once = clean(&input);
            prop_assert_eq!(clean(&once), once);
        }

        #[test]
        fn repo_name_is_deterministic(org in "[a-z-]{1,20}", email in ".*") {
            prop_assert_eq!(
                repo_name(&org, &clean(&email)),
                repo_name(&org, &clean(&email))
            );
        }
    }
}
