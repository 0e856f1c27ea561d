//! Permission evaluation over a compact claims payload.
//!
//! Pure functions: no I/O, no shared state, nothing retained across
//! calls. The claims value is a read-only snapshot supplied per call, so
//! evaluation is safe from any number of request handlers at once.

use std::collections::BTreeMap;

use crate::claims::{CompactPermissions, GrantSet};
use crate::error::{PermpackError, Result};
use crate::keys::{PermissionKey, Scope, ShortKey};
use crate::short_id::ShortId;

/// Marker accepted in place of a resource id: "does the principal hold
/// this capability on at least one resource of this scope?"
///
/// Strictly coarser than a specific-id check; not a stand-in for "on
/// every resource of this scope".
pub const WILDCARD: &str = "*";

/// Check whether `claims` grant `permission`, optionally on the resource
/// identified by `id`.
///
/// Absent claims (`None`) always deny without error. System-scope keys
/// never take an identifier; one passed anyway is ignored. Resource-
/// scoped keys require either a full 36-character UUID or [`WILDCARD`];
/// anything else fails with [`PermpackError::InvalidIdentifier`] rather
/// than returning `false`, so a malformed guard call surfaces as a
/// defect instead of reading as a denial. A resource simply missing from
/// the payload is the normal `Ok(false)`.
///
/// # Example
/// ```
/// use permpack::{check, CompactPermissions, PermissionKey};
///
/// let team = "99999999-aaaa-bbbb-cccc-dddddddddddd";
/// let mut claims = CompactPermissions::new();
/// claims.grant(PermissionKey::TeamRead, Some(team))?;
///
/// assert!(check(Some(&claims), PermissionKey::TeamRead, Some(team))?);
/// assert!(!check(Some(&claims), PermissionKey::TeamWrite, Some(team))?);
/// assert!(!check(None, PermissionKey::TeamRead, Some(team))?);
/// # Ok::<(), permpack::PermpackError>(())
/// ```
pub fn check(
    claims: Option<&CompactPermissions>,
    permission: PermissionKey,
    id: Option<&str>,
) -> Result<bool> {
    let Some(claims) = claims else {
        return Ok(false);
    };
    let short = permission.short_key();
    match permission.scope() {
        Scope::System => Ok(claims.system_permissions.contains(short)),
        Scope::SkillPackage => scoped(&claims.skill_package_permissions, short, id),
        Scope::Team => scoped(&claims.team_permissions, short, id),
    }
}

/// String-boundary variant of [`check`] for callers that carry
/// permissions as plain strings (route guards, RPC procedure names).
///
/// A string outside the taxonomy, including any unrecognized scope
/// prefix, fails with [`PermpackError::UnknownPermission`].
pub fn check_str(
    claims: Option<&CompactPermissions>,
    permission: &str,
    id: Option<&str>,
) -> Result<bool> {
    check(claims, permission.parse()?, id)
}

/// Probe one resource scope's grant map.
fn scoped(map: &BTreeMap<ShortId, GrantSet>, short: ShortKey, id: Option<&str>) -> Result<bool> {
    match id {
        Some(WILDCARD) => Ok(map.values().any(|grants| grants.contains(short))),
        Some(id) => {
            let sid = ShortId::from_uuid(id)?;
            Ok(map.get(&sid).map_or(false, |grants| grants.contains(short)))
        }
        None => Err(PermpackError::InvalidIdentifier { id: None }),
    }
}
