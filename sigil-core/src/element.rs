//! The closed set of signature elements and order parsing.
//!
//! The render order is configuration-driven: a permutation or subset of
//! the eight known elements. Representing the set as an enum (rather than
//! the string keys a config file carries) makes dispatch in the
//! composition engine exhaustive, so adding an element kind is a
//! compile-time-checked change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::DataError;

/// One renderable part of the signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Logo,
    Name,
    Position,
    Address,
    Phone,
    Email,
    Separator,
    Confidentiality,
}

impl Element {
    /// Every element, in the default render order.
    pub const ALL: [Element; 8] = [
        Element::Logo,
        Element::Name,
        Element::Position,
        Element::Address,
        Element::Phone,
        Element::Email,
        Element::Separator,
        Element::Confidentiality,
    ];

    /// The configuration identifier for this element.
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Logo => "logo",
            Element::Name => "name",
            Element::Position => "position",
            Element::Address => "address",
            Element::Phone => "phone",
            Element::Email => "email",
            Element::Separator => "separator",
            Element::Confidentiality => "confidentiality",
        }
    }

    /// Look up an element by its configuration identifier.
    pub fn from_id(id: &str) -> Option<Element> {
        Element::ALL.iter().copied().find(|e| e.as_str() == id)
    }

    /// Parse an ordered list of identifiers into an element order.
    ///
    /// Unknown identifiers are dropped with a warning (forward
    /// compatibility with newer config files); duplicates keep their
    /// first occurrence so the order stays duplicate-free.
    pub fn parse_order<S: AsRef<str>>(ids: &[S]) -> Vec<Element> {
        let mut order = Vec::with_capacity(ids.len().min(Element::ALL.len()));
        for id in ids {
            let id = id.as_ref();
            match Element::from_id(id) {
                Some(element) if order.contains(&element) => {
                    log::warn!("duplicate element '{id}' in element order, keeping first");
                }
                Some(element) => order.push(element),
                None => log::warn!("unknown element '{id}' in element order, skipping"),
            }
        }
        order
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Element {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::from_id(s).ok_or_else(|| DataError::UnknownElement(s.to_string()))
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for element in Element::ALL {
            assert_eq!(Element::from_id(element.as_str()), Some(element));
            assert_eq!(element.as_str().parse::<Element>().unwrap(), element);
        }
    }

    #[test]
    fn test_from_id_unknown() {
        assert_eq!(Element::from_id("banner"), None);
        assert!(matches!(
            "banner".parse::<Element>(),
            Err(DataError::UnknownElement(_))
        ));
    }

    #[test]
    fn test_parse_order_drops_unknown() {
        let order = Element::parse_order(&["logo", "banner", "name"]);
        assert_eq!(order, vec![Element::Logo, Element::Name]);
    }

    #[test]
    fn test_parse_order_dedupes_keeping_first() {
        let order = Element::parse_order(&["name", "logo", "name"]);
        assert_eq!(order, vec![Element::Name, Element::Logo]);
    }

    #[test]
    fn test_parse_order_empty() {
        let order = Element::parse_order::<&str>(&[]);
        assert!(order.is_empty());
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&Element::Confidentiality).unwrap();
        assert_eq!(json, "\"confidentiality\"");
        let back: Element = serde_json::from_str("\"separator\"").unwrap();
        assert_eq!(back, Element::Separator);
    }

    #[test]
    fn test_display() {
        assert_eq!(Element::Phone.to_string(), "phone");
    }
}
