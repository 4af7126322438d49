//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.
//!
//! IDs here are sequence keys assigned by the database, so there is no
//! constructor that invents a fresh value in process; an `Id` always wraps
//! a value the store handed back.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generic typed ID wrapper over an `i64` sequence value
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type LandId = Id<markers::Land>;
///
/// let id = LandId::from_value(1);
/// assert_eq!(id.value(), 1);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create from a database-assigned value
    pub fn from_value(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying value
    pub fn value(&self) -> i64 {
        self.value
    }
}

// Manual impls: derives would bound T, but the marker is phantom.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Ok(Self::from_value(value))
    }
}

/// Marker types distinguishing entity ID spaces
pub mod markers {
    /// Marker for Land record IDs
    #[derive(Debug, Clone, Copy)]
    pub struct Land;
}

#[cfg(test)]
mod tests {
    use super::*;

    type LandId = Id<markers::Land>;

    #[test]
    fn test_from_value() {
        let id = LandId::from_value(42);
        assert_eq!(id.value(), 42);
        assert_eq!(i64::from(id), 42);
    }

    #[test]
    fn test_equality_and_ordering() {
        let a = LandId::from_value(1);
        let b = LandId::from_value(2);
        assert_ne!(a, b);
        assert!(a < b);
        assert_eq!(a, LandId::from_value(1));
    }

    #[test]
    fn test_display() {
        let id = LandId::from_value(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(format!("{:?}", id), "Id(7)");
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = LandId::from_value(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "5");
        let back: LandId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
