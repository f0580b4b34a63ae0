//! User accounts, roles, and session projections.
//!
//! # Responsibility
//! - Define the persisted account shape and the two session views derived
//!   from it (public identity and profile).
//!
//! # Invariants
//! - `email` is unique within the users collection (case-sensitive, per
//!   the stored representation).
//! - `password` is an opaque comparison string. It is stored as entered;
//!   see DESIGN.md for the deliberate no-hashing decision.

use serde::{Deserialize, Serialize};

/// Access role attached to every account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access: may attribute records to any faculty member and view
    /// aggregate reports.
    Admin,
    /// Records are always attributed to the acting user.
    Faculty,
}

/// One stored account, including the plaintext credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Stable identifier assigned at sign-up.
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Public identity of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub email: String,
}

/// Profile of the signed-in user, used for display and role gating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl UserAccount {
    /// Derives the public identity stored under the session identity slot.
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            id: self.id.clone(),
            email: self.email.clone(),
        }
    }

    /// Derives the profile stored under the session profile slot.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            department: self.department.clone(),
        }
    }
}
