//! Compact resource identifier: the first 8 characters of a UUID.
//!
//! Per-resource grant maps are keyed by an 8-character prefix of the
//! resource's 36-character UUID instead of the full identifier, so a
//! payload holding a handful of resources stays small enough to embed in
//! a signed session token. The truncation is not collision-proof: two
//! resources of the same kind sharing an 8-character prefix would share a
//! grant entry. That risk is accepted; every boundary that takes an
//! identifier still requires (and validates) the full 36-character form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PermpackError, Result};

/// Length of a canonical hyphenated UUID string
pub const UUID_LEN: usize = 36;

/// Length of a short identifier
pub const SHORT_ID_LEN: usize = 8;

/// First 8 characters of a validated 36-character UUID.
///
/// Stored as a fixed byte buffer rather than a `String`. The leading 8
/// characters of a canonical UUID are hex digits, so a `ShortId` is
/// always ASCII.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShortId([u8; SHORT_ID_LEN]);

impl ShortId {
    /// Extract the short id from a full resource UUID.
    ///
    /// Only the canonical 36-character hyphenated form is accepted.
    ///
    /// # Example
    /// ```
    /// use permpack::ShortId;
    ///
    /// let sid = ShortId::from_uuid("abcdef01-2345-6789-abcd-ef0123456789").unwrap();
    /// assert_eq!(sid.as_str(), "abcdef01");
    /// assert!(ShortId::from_uuid("abcdef01").is_err());
    /// ```
    pub fn from_uuid(id: &str) -> Result<Self> {
        if id.len() != UUID_LEN || Uuid::parse_str(id).is_err() {
            return Err(PermpackError::InvalidIdentifier { id: Some(id.to_string()) });
        }
        let mut buf = [0u8; SHORT_ID_LEN];
        buf.copy_from_slice(&id.as_bytes()[..SHORT_ID_LEN]);
        Ok(Self(buf))
    }

    /// View as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: constructed only from hex-digit UUID prefixes
        unsafe { std::str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Debug for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShortId({})", self.as_str())
    }
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShortId {
    type Err = PermpackError;

    /// Parse a short id back out of a payload key (exactly 8 hex digits).
    fn from_str(s: &str) -> Result<Self> {
        if s.len() != SHORT_ID_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PermpackError::InvalidIdentifier { id: Some(s.to_string()) });
        }
        let mut buf = [0u8; SHORT_ID_LEN];
        buf.copy_from_slice(s.as_bytes());
        Ok(Self(buf))
    }
}

impl Serialize for ShortId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ShortId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
