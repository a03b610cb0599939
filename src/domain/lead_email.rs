use std::fmt::Display;

use validator::validate_email;

/// An email address entered into one of the lead forms.
///
/// Only the shape is checked. The value is kept exactly as it was typed, no
/// trimming or case-folding, so the confirmation page shows what the visitor
/// submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadEmail(String);

impl LeadEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        if validate_email(&s) {
            Ok(Self(s))
        } else {
            Err(format!("{s} is not a valid email address."))
        }
    }
}

impl Display for LeadEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for LeadEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
