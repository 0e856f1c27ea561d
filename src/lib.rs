//! Permpack - compact permission claims for session tokens
//!
//! Encodes per-resource authorization grants (system-wide, per skill
//! package, per team) into a small fixed-shape payload that fits inside
//! a signed session token, and evaluates requested permissions against
//! that payload.
//!
//! Two size tricks keep the payload small: every capability collapses to
//! a single-character short key (`a`/`r`/`w`), and resources are keyed by
//! the first 8 characters of their UUID instead of the full identifier.
//! Issuance builds a [`CompactPermissions`] once per session; request
//! guards then call [`check`] (or [`check_str`] at a string boundary)
//! with the claims, a [`PermissionKey`], and a resource id or
//! [`WILDCARD`].
//!
//! # Example
//!
//! ```
//! use permpack::{check, CompactPermissions, PermissionKey, WILDCARD};
//!
//! let team = "99999999-aaaa-bbbb-cccc-dddddddddddd";
//! let mut claims = CompactPermissions::new();
//! claims.grant(PermissionKey::SystemWrite, None)?;
//! claims.grant(PermissionKey::TeamRead, Some(team))?;
//!
//! assert!(check(Some(&claims), PermissionKey::SystemWrite, None)?);
//! assert!(check(Some(&claims), PermissionKey::TeamRead, Some(team))?);
//! assert!(check(Some(&claims), PermissionKey::TeamRead, Some(WILDCARD))?);
//! assert!(!check(Some(&claims), PermissionKey::TeamWrite, Some(WILDCARD))?);
//! # Ok::<(), permpack::PermpackError>(())
//! ```
//!
//! Denial is always the plain `Ok(false)`; an error means the caller
//! asked a malformed question (bad identifier, unknown permission) and
//! must be treated as an integration fault, never as "denied".

pub mod check;
pub mod claims;
pub mod error;
pub mod keys;
pub mod short_id;

pub use check::{check, check_str, WILDCARD};
pub use claims::{CompactPermissions, GrantSet};
pub use error::{PermpackError, Result};
pub use keys::{PermissionKey, Scope, ShortKey};
pub use short_id::{ShortId, SHORT_ID_LEN, UUID_LEN};
