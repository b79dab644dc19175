//! Newtype wrappers for semantic identifiers
//!
//! These keep item identifiers, layout content identities and layout source
//! keys from being mixed up with each other or with arbitrary strings.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// The identifier of an addressable item inside a layout.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ItemId(Arc<str>);

impl ItemId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content identity of a compiled layout, derived from its raw source bytes.
///
/// Two layouts compiled from byte-identical documents share an identifier.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct LayoutIdentifier(Arc<str>);

impl LayoutIdentifier {
    pub fn new(identifier: impl Into<Arc<str>>) -> Self {
        Self(identifier.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LayoutIdentifier {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for LayoutIdentifier {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl fmt::Display for LayoutIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_item_id_creation() {
        let id1 = ItemId::new("customer_name");
        let id2 = ItemId::from("customer_name");
        let id3 = ItemId::from(String::from("customer_name"));

        assert_eq!(id1, id2);
        assert_eq!(id2, id3);
        assert_eq!(id1.as_str(), "customer_name");
    }

    #[test]
    fn test_item_id_borrows_as_str() {
        let mut map = HashMap::new();
        map.insert(ItemId::from("total"), 1);
        assert_eq!(map.get("total"), Some(&1));
    }

    #[test]
    fn test_layout_identifier_display() {
        let identifier = LayoutIdentifier::from("1a2b3c4d-2f");
        assert_eq!(identifier.to_string(), "1a2b3c4d-2f");
    }
}
