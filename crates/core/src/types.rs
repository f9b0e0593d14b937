use crate::error::ValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// A blog post compiled into the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    /// URL-safe identifier, also the output file stem
    pub slug: &'static str,
    pub title: &'static str,
    /// Post body in CommonMark
    pub content: &'static str,
    /// Publication date as `YYYY-MM-DD`
    pub date: &'static str,
}

impl BlogPost {
    /// Parsed publication date, `None` if `date` is not `YYYY-MM-DD`
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    /// Output file name relative to the blog directory
    pub fn file_name(&self) -> String {
        format!("{}.html", self.slug)
    }
}

/// Smallest accepted donation, one cent
pub const MIN_DONATION: f64 = 0.01;
/// Largest accepted single donation
pub const MAX_DONATION: f64 = 1_000_000.0;

/// A stored donation
#[derive(Debug, Clone, PartialEq)]
pub struct Donation {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub amount: f64,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Donation as submitted by a client, before validation.
///
/// Every field defaults so that a missing field is reported as a
/// validation failure rather than a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewDonation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub message: Option<String>,
}

impl NewDonation {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        amount: f64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            amount,
            message: Some(message.into()),
        }
    }

    /// Trim text fields and check the donation is acceptable.
    ///
    /// Name and email must be non-blank and the amount between
    /// [`MIN_DONATION`] and [`MAX_DONATION`]. A blank message becomes `None`.
    pub fn validate(self) -> Result<Self, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }

        if !self.amount.is_finite() || self.amount < MIN_DONATION {
            return Err(ValidationError::InvalidAmount);
        }
        if self.amount > MAX_DONATION {
            return Err(ValidationError::AmountTooLarge);
        }

        let message = self
            .message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            amount: self.amount,
            message,
        })
    }
}

/// Aggregate figures over all stored donations
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DonationStats {
    pub total: f64,
    pub count: usize,
}

/// Format an amount as dollars with two decimals
pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_and_trims() {
        let d = NewDonation::new("  Alice ", " a@x.com", 50.0, "  ")
            .validate()
            .unwrap();
        assert_eq!(d.name, "Alice");
        assert_eq!(d.email, "a@x.com");
        assert_eq!(d.message, None);
    }

    #[test]
    fn test_validate_keeps_message() {
        let d = NewDonation::new("Bob", "b@x.com", 25.0, "go team")
            .validate()
            .unwrap();
        assert_eq!(d.message.as_deref(), Some("go team"));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        assert_eq!(
            NewDonation::new("", "a@x.com", 50.0, "").validate(),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            NewDonation::new("   ", "a@x.com", 50.0, "").validate(),
            Err(ValidationError::MissingName)
        );
    }

    #[test]
    fn test_validate_rejects_blank_email() {
        assert_eq!(
            NewDonation::new("Alice", "", 50.0, "").validate(),
            Err(ValidationError::MissingEmail)
        );
    }

    #[test]
    fn test_validate_rejects_bad_amounts() {
        for amount in [0.0, -1.0, 0.001, 0.009, f64::NAN, f64::INFINITY] {
            assert_eq!(
                NewDonation::new("Alice", "a@x.com", amount, "").validate(),
                Err(ValidationError::InvalidAmount),
                "amount {amount} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_amount_bounds() {
        for amount in [MIN_DONATION, 1.0, MAX_DONATION] {
            assert!(
                NewDonation::new("Alice", "a@x.com", amount, "")
                    .validate()
                    .is_ok(),
                "amount {amount} should be accepted"
            );
        }
        for amount in [MAX_DONATION + 0.01, 1e308] {
            assert_eq!(
                NewDonation::new("Alice", "a@x.com", amount, "").validate(),
                Err(ValidationError::AmountTooLarge)
            );
        }
    }

    #[test]
    fn test_new_donation_missing_fields_default() {
        let d: NewDonation = serde_json::from_str(r#"{"name": "Alice"}"#).unwrap();
        assert_eq!(d.email, "");
        assert_eq!(d.amount, 0.0);
        assert_eq!(d.message, None);
    }

    #[test]
    fn test_blog_post_helpers() {
        let post = BlogPost {
            slug: "welcome",
            title: "Welcome",
            content: "",
            date: "2025-11-02",
        };
        assert_eq!(post.file_name(), "welcome.html");
        assert_eq!(
            post.published_on(),
            NaiveDate::from_ymd_opt(2025, 11, 2)
        );

        let undated = BlogPost {
            date: "November 2nd",
            ..post
        };
        assert_eq!(undated.published_on(), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(75.0), "$75.00");
        assert_eq!(format_amount(12.5), "$12.50");
        assert_eq!(format_amount(0.333), "$0.33");
    }
}
