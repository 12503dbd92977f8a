//! Signature contact record with construction-time validation.
//!
//! `SignatureData` is immutable after construction: the renderer receives
//! it by reference and never mutates it. Required fields (`name`,
//! `position`, `address`, `email`) must be non-empty after trimming;
//! violations fail construction with [`DataError::Validation`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Website used when the caller leaves the field empty.
pub const DEFAULT_WEBSITE: &str = "www.eos.pt";

/// Separator between the parts of the phone and email lines.
const PART_SEPARATOR: &str = " | ";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DataError {
    #[error("validation failed for field '{field}': {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("unknown element identifier '{0}'")]
    UnknownElement(String),
}

/// Immutable contact record rendered into the signature.
///
/// Fields are private so a constructed value is always valid; accessors
/// return trimmed strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureData {
    name: String,
    position: String,
    address: String,
    phone: String,
    mobile: String,
    email: String,
    website: String,
}

impl SignatureData {
    /// Build a validated record.
    ///
    /// `phone` and `mobile` may be empty; an empty `website` falls back to
    /// [`DEFAULT_WEBSITE`].
    pub fn new(
        name: &str,
        position: &str,
        address: &str,
        phone: &str,
        mobile: &str,
        email: &str,
        website: &str,
    ) -> Result<Self, DataError> {
        let name = required("name", name)?;
        let position = required("position", position)?;
        let address = required("address", address)?;
        let email = required("email", email)?;

        let website = website.trim();
        let website = if website.is_empty() {
            DEFAULT_WEBSITE.to_string()
        } else {
            website.to_string()
        };

        Ok(Self {
            name,
            position,
            address,
            phone: phone.trim().to_string(),
            mobile: mobile.trim().to_string(),
            email,
            website,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    /// The rendered phone line: `"Tel: …"` and `"Tlm: …"` joined by `" | "`.
    ///
    /// Empty when both phone fields are absent, in which case the phone
    /// element is skipped entirely.
    pub fn phone_line(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if !self.phone.is_empty() {
            parts.push(format!("Tel: {}", self.phone));
        }
        if !self.mobile.is_empty() {
            parts.push(format!("Tlm: {}", self.mobile));
        }
        parts.join(PART_SEPARATOR)
    }

    /// The rendered email line: `"{email} | {website}"`.
    pub fn email_line(&self) -> String {
        format!("{}{}{}", self.email, PART_SEPARATOR, self.website)
    }
}

fn required(field: &'static str, value: &str) -> Result<String, DataError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DataError::Validation {
            field,
            reason: "required and cannot be empty".into(),
        });
    }
    Ok(trimmed.to_string())
}

// ===================================================================
// Tests
// ===================================================================
