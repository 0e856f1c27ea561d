//! Compact permission payload carried inside a trusted session.
//!
//! A [`CompactPermissions`] value is assembled once when a session is
//! issued, embedded in the signed session token, and from then on only
//! read by the evaluator. Grants are stored as single-character short
//! keys: a bare string for system scope, and per-resource grant strings
//! keyed by 8-character UUID prefixes for the two resource scopes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PermpackError, Result};
use crate::keys::{PermissionKey, Scope, ShortKey};
use crate::short_id::ShortId;

/// Set of short keys held on one resource, encoded as a string with one
/// character per grant.
///
/// Duplicates carry no meaning; inserting an already-held key is a
/// no-op. Grants inserted through [`insert`](Self::insert) keep a fixed
/// character order so equal grant sets encode identically, but any order
/// is accepted when decoding a payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantSet(String);

impl GrantSet {
    /// Whether this set holds the given key.
    #[inline]
    pub fn contains(&self, key: ShortKey) -> bool {
        self.0.contains(key.code())
    }

    /// Add a key; adding a key already present has no effect.
    pub fn insert(&mut self, key: ShortKey) {
        let c = key.code();
        if !self.0.contains(c) {
            let pos = self.0.bytes().position(|b| b > c as u8).unwrap_or(self.0.len());
            self.0.insert(pos, c);
        }
    }

    /// Whether no key is held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The encoded string form, e.g. `"rw"`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for GrantSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for GrantSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if let Some(c) = s.chars().find(|&c| ShortKey::from_code(c).is_none()) {
            return Err(serde::de::Error::custom(format!("invalid grant code {c:?}")));
        }
        Ok(Self(s))
    }
}

/// The full encoded grant payload embedded in a trusted session.
///
/// Field names on the wire match the session-token convention
/// (`systemPermissions`, `skillPackagePermissions`, `teamPermissions`);
/// empty sections are omitted to keep the payload small. An empty value
/// holds no grants and denies everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompactPermissions {
    /// System-scope grants (in practice `""` or `"w"`)
    #[serde(skip_serializing_if = "GrantSet::is_empty")]
    pub system_permissions: GrantSet,
    /// Per-skill-package grants, keyed by short id
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub skill_package_permissions: BTreeMap<ShortId, GrantSet>,
    /// Per-team grants, keyed by short id
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub team_permissions: BTreeMap<ShortId, GrantSet>,
}

impl CompactPermissions {
    /// Empty payload; denies everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one grant at issuance time.
    ///
    /// Resource-scoped keys require the resource's full 36-character
    /// UUID; anything else (including the wildcard marker, which is a
    /// query-side concept) fails with
    /// [`PermpackError::InvalidIdentifier`]. System-scope keys take no
    /// identifier and ignore one if passed.
    pub fn grant(&mut self, permission: PermissionKey, id: Option<&str>) -> Result<()> {
        let short = permission.short_key();
        match permission.scope() {
            Scope::System => self.system_permissions.insert(short),
            Scope::SkillPackage => {
                let sid = require_uuid(id)?;
                self.skill_package_permissions.entry(sid).or_default().insert(short);
            }
            Scope::Team => {
                let sid = require_uuid(id)?;
                self.team_permissions.entry(sid).or_default().insert(short);
            }
        }
        Ok(())
    }

    /// Whether no grant of any scope is held.
    pub fn is_empty(&self) -> bool {
        self.system_permissions.is_empty()
            && self.skill_package_permissions.is_empty()
            && self.team_permissions.is_empty()
    }
}

fn require_uuid(id: Option<&str>) -> Result<ShortId> {
    match id {
        Some(id) => ShortId::from_uuid(id),
        None => Err(PermpackError::InvalidIdentifier { id: None }),
    }
}

// ============================================================================
// Tests
// ============================================================================
