//! Permission-key taxonomy and its compact encoding tables.
//!
//! Every grantable capability is one [`PermissionKey`]. A key belongs to
//! exactly one [`Scope`] and maps many-to-one onto a single-character
//! [`ShortKey`]. Both mappings are fixed tables shared by the issuance
//! and evaluation sides of the payload; they are contract, not
//! configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PermpackError, Result};

/// Single-character compact code a permission key encodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortKey {
    /// `'a'` - assess competencies
    Assess,
    /// `'r'` - read
    Read,
    /// `'w'` - write
    Write,
}

impl ShortKey {
    /// The character this key occupies in a grant string.
    #[inline]
    pub const fn code(self) -> char {
        match self {
            Self::Assess => 'a',
            Self::Read => 'r',
            Self::Write => 'w',
        }
    }

    /// Decode a grant-string character.
    #[inline]
    pub const fn from_code(c: char) -> Option<Self> {
        match c {
            'a' => Some(Self::Assess),
            'r' => Some(Self::Read),
            'w' => Some(Self::Write),
            _ => None,
        }
    }
}

/// Scope a permission key applies to.
///
/// The scope decides which section of the payload a grant lands in and
/// whether a resource identifier is required when checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Global capability, no resource identifier
    System,
    /// Scoped to one skill package
    SkillPackage,
    /// Scoped to one team
    Team,
}

impl Scope {
    /// Wire prefix of the scope in a full permission string.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::SkillPackage => "skill-package",
            Self::Team => "team",
        }
    }

    /// Whether keys of this scope take a resource identifier.
    #[inline]
    pub const fn takes_id(self) -> bool {
        !matches!(self, Self::System)
    }
}

/// One recognized, fully-qualified capability.
///
/// The taxonomy is closed: system scope carries a single capability,
/// skill-package scope one, team scope three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionKey {
    /// `"system:write"` - administer the whole installation
    #[serde(rename = "system:write")]
    SystemWrite,
    /// `"skill-package:write"` - edit one skill package
    #[serde(rename = "skill-package:write")]
    SkillPackageWrite,
    /// `"team:read"` - view one team
    #[serde(rename = "team:read")]
    TeamRead,
    /// `"team:write"` - edit one team
    #[serde(rename = "team:write")]
    TeamWrite,
    /// `"team:assess"` - assess competencies on one team
    #[serde(rename = "team:assess")]
    TeamAssess,
}

impl PermissionKey {
    /// Every recognized key, in taxonomy order.
    pub const ALL: [Self; 5] = [
        Self::SystemWrite,
        Self::SkillPackageWrite,
        Self::TeamRead,
        Self::TeamWrite,
        Self::TeamAssess,
    ];

    /// Scope this key belongs to.
    #[inline]
    pub const fn scope(self) -> Scope {
        match self {
            Self::SystemWrite => Scope::System,
            Self::SkillPackageWrite => Scope::SkillPackage,
            Self::TeamRead | Self::TeamWrite | Self::TeamAssess => Scope::Team,
        }
    }

    /// Fixed compact code this key encodes to.
    #[inline]
    pub const fn short_key(self) -> ShortKey {
        match self {
            Self::SystemWrite | Self::SkillPackageWrite | Self::TeamWrite => ShortKey::Write,
            Self::TeamRead => ShortKey::Read,
            Self::TeamAssess => ShortKey::Assess,
        }
    }

    /// Full string form, e.g. `"team:write"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SystemWrite => "system:write",
            Self::SkillPackageWrite => "skill-package:write",
            Self::TeamRead => "team:read",
            Self::TeamWrite => "team:write",
            Self::TeamAssess => "team:assess",
        }
    }
}

impl fmt::Display for PermissionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionKey {
    type Err = PermpackError;

    /// Parse the full string form; anything outside the taxonomy is
    /// [`PermpackError::UnknownPermission`].
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "system:write" => Ok(Self::SystemWrite),
            "skill-package:write" => Ok(Self::SkillPackageWrite),
            "team:read" => Ok(Self::TeamRead),
            "team:write" => Ok(Self::TeamWrite),
            "team:assess" => Ok(Self::TeamAssess),
            _ => Err(PermpackError::UnknownPermission { permission: s.to_string() }),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
