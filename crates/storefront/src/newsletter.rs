//! Newsletter signup seam.
//!
//! No email provider is wired in. [`PlaceholderNewsletter`] accepts plausible
//! addresses and tells the operator to connect a real provider.

use serde::{Deserialize, Serialize};
use tracing::info;

use luxor_core::DomainError;

use crate::error::StorefrontResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Accepted but not delivered anywhere yet.
    Pending { email: String, notice: String },
    Subscribed { email: String },
}

pub trait NewsletterGateway {
    fn subscribe(&self, email: &str) -> StorefrontResult<SubscriptionStatus>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderNewsletter;

impl NewsletterGateway for PlaceholderNewsletter {
    fn subscribe(&self, email: &str) -> StorefrontResult<SubscriptionStatus> {
        let email = email.trim();
        if !looks_like_email(email) {
            return Err(DomainError::validation(format!("`{email}` is not an email address")).into());
        }
        info!("newsletter signup accepted by placeholder gateway");
        Ok(SubscriptionStatus::Pending {
            email: email.to_string(),
            notice: "Subscribed! Replace with your email provider integration.".to_string(),
        })
    }
}

/// Cheap shape check: one `@`, non-empty local part, dotted domain, no whitespace.
pub fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorefrontError;

    #[test]
    fn email_shape() {
        assert!(looks_like_email("sales@luxorslz.com"));
        assert!(looks_like_email("a.b@mail.example.org"));
        assert!(!looks_like_email("sales"));
        assert!(!looks_like_email("@luxorslz.com"));
        assert!(!looks_like_email("sales@localhost"));
        assert!(!looks_like_email("sa les@luxorslz.com"));
        assert!(!looks_like_email("a@b@c.com"));
    }

    #[test]
    fn placeholder_accepts_and_rejects() {
        let gateway = PlaceholderNewsletter;
        match gateway.subscribe("  fan@watches.com ").unwrap() {
            SubscriptionStatus::Pending { email, .. } => assert_eq!(email, "fan@watches.com"),
            other => panic!("Expected Pending, got {other:?}"),
        }
        assert!(matches!(
            gateway.subscribe("nope"),
            Err(StorefrontError::Domain(DomainError::Validation(_)))
        ));
    }
}
