//! Authentication and session use-case service.
//!
//! # Responsibility
//! - Own the durable users collection and the single current session.
//! - Provide sign-up, sign-in, sign-out, restore, and profile
//!   maintenance entry points.
//!
//! # Invariants
//! - At most one session is active per service instance.
//! - Sign-up never starts a session; callers sign in separately.
//! - Session slots are persisted on sign-in and removed on sign-out; no
//!   default session is ever seeded.
//! - Credential matching is exact on both email and password, per the
//!   stored representation.

use crate::model::ident;
use crate::model::user::{Role, UserAccount, UserIdentity, UserProfile};
use crate::store::{DurableStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

const USERS_KEY: &str = "users";
const CURRENT_USER_KEY: &str = "currentUser";
const CURRENT_PROFILE_KEY: &str = "currentProfile";

/// Minimum accepted password length for password changes.
pub const MIN_PASSWORD_LEN: usize = 6;

pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication and session error taxonomy.
///
/// Every variant is returned as a value for user-facing messaging; none
/// unwinds across the service boundary.
#[derive(Debug)]
pub enum AuthError {
    /// Sign-up target email already has an account.
    DuplicateEmail(String),
    /// No account matches the supplied email and password.
    InvalidCredentials,
    /// Replacement password is shorter than [`MIN_PASSWORD_LEN`].
    WeakPassword { minimum: usize },
    /// Profile operation attempted without a signed-in user.
    NoActiveSession,
    /// Durable storage transport failure.
    Store(StoreError),
    /// Collection or session slot could not be encoded for persistence.
    Encode(serde_json::Error),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEmail(email) => {
                write!(f, "an account already exists for `{email}`")
            }
            Self::InvalidCredentials => write!(f, "invalid email or password"),
            Self::WeakPassword { minimum } => {
                write!(f, "password must be at least {minimum} characters long")
            }
            Self::NoActiveSession => write!(f, "no active session"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode session data: {err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Request model for account creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    pub department: Option<String>,
}

/// Session store owning the users collection and the current session.
pub struct SessionService<'s, S> {
    store: &'s S,
    users: Vec<UserAccount>,
    identity: Option<UserIdentity>,
    profile: Option<UserProfile>,
}

impl<'s, S: DurableStore> SessionService<'s, S> {
    /// Hydrates the users collection and starts with no session.
    ///
    /// Users have no seed set: an absent key is an empty collection, and
    /// an unreadable value is logged and treated the same way. Call
    /// [`SessionService::restore_session`] once per process start to pick
    /// up a persisted session.
    pub fn new(store: &'s S) -> AuthResult<Self> {
        let users = match store.get(USERS_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<UserAccount>>(&raw) {
                Ok(users) => users,
                Err(err) => {
                    warn!(
                        "event=users_hydrate module=session status=corrupt key={USERS_KEY} error={err}"
                    );
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Ok(Self {
            store,
            users,
            identity: None,
            profile: None,
        })
    }

    /// Public identity of the signed-in user, when any.
    pub fn current_user(&self) -> Option<&UserIdentity> {
        self.identity.as_ref()
    }

    /// Profile of the signed-in user, when any.
    pub fn current_profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Returns whether a session is active.
    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }

    /// Creates an account.
    ///
    /// Fails with [`AuthError::DuplicateEmail`] when the email is already
    /// taken (case-sensitive exact match). Does not start a session.
    pub fn sign_up(&mut self, request: SignUpRequest) -> AuthResult<()> {
        if self.users.iter().any(|user| user.email == request.email) {
            info!("event=sign_up module=session status=duplicate_email");
            return Err(AuthError::DuplicateEmail(request.email));
        }

        let account = UserAccount {
            id: ident::next_record_id(),
            email: request.email,
            password: request.password,
            name: request.name,
            role: request.role,
            department: request.department,
        };
        self.users.push(account);
        self.persist_users()?;

        info!("event=sign_up module=session status=ok users={}", self.users.len());
        Ok(())
    }

    /// Authenticates and starts a session.
    ///
    /// On success the derived identity and profile are held in memory and
    /// persisted for restart survival. Failure leaves any existing session
    /// untouched.
    pub fn sign_in(&mut self, email: &str, password: &str) -> AuthResult<UserProfile> {
        let account = self
            .users
            .iter()
            .find(|user| user.email == email && user.password == password)
            .ok_or_else(|| {
                info!("event=sign_in module=session status=invalid_credentials");
                AuthError::InvalidCredentials
            })?;

        let identity = account.identity();
        let profile = account.profile();
        self.write_session_slots(&identity, &profile)?;

        info!("event=sign_in module=session status=ok role={:?}", profile.role);
        self.identity = Some(identity);
        self.profile = Some(profile.clone());
        Ok(profile)
    }

    /// Ends the session and removes its durable representation.
    ///
    /// Safe to call with no active session.
    pub fn sign_out(&mut self) -> AuthResult<()> {
        self.identity = None;
        self.profile = None;
        self.store.remove(CURRENT_USER_KEY)?;
        self.store.remove(CURRENT_PROFILE_KEY)?;
        info!("event=sign_out module=session status=ok");
        Ok(())
    }

    /// Restores a persisted session, if one survives from a prior run.
    ///
    /// Both slots must be present and parse; anything less leaves the
    /// session absent, which is the expected cold-start state.
    pub fn restore_session(&mut self) -> AuthResult<()> {
        let stored_identity = self.store.get(CURRENT_USER_KEY)?;
        let stored_profile = self.store.get(CURRENT_PROFILE_KEY)?;

        let (raw_identity, raw_profile) = match (stored_identity, stored_profile) {
            (Some(identity), Some(profile)) => (identity, profile),
            _ => {
                info!("event=session_restore module=session status=absent");
                return Ok(());
            }
        };

        match (
            serde_json::from_str::<UserIdentity>(&raw_identity),
            serde_json::from_str::<UserProfile>(&raw_profile),
        ) {
            (Ok(identity), Ok(profile)) => {
                info!(
                    "event=session_restore module=session status=restored role={:?}",
                    profile.role
                );
                self.identity = Some(identity);
                self.profile = Some(profile);
            }
            _ => {
                warn!("event=session_restore module=session status=corrupt");
            }
        }

        Ok(())
    }

    /// Rewrites the signed-in user's display fields.
    ///
    /// Updates the stored account and the persisted profile slot so the
    /// change survives a restart.
    pub fn update_profile(
        &mut self,
        name: &str,
        department: Option<String>,
    ) -> AuthResult<UserProfile> {
        let account_id = self
            .profile
            .as_ref()
            .map(|profile| profile.id.clone())
            .ok_or(AuthError::NoActiveSession)?;

        let position = self
            .users
            .iter()
            .position(|user| user.id == account_id)
            .ok_or(AuthError::NoActiveSession)?;

        self.users[position].name = name.to_string();
        self.users[position].department = department;
        self.persist_users()?;

        let profile = self.users[position].profile();
        let encoded = serde_json::to_string(&profile)?;
        self.store.set(CURRENT_PROFILE_KEY, &encoded)?;
        self.profile = Some(profile.clone());

        info!("event=profile_update module=session status=ok");
        Ok(profile)
    }

    /// Replaces the signed-in user's password.
    ///
    /// The current password must match exactly and the replacement must
    /// be at least [`MIN_PASSWORD_LEN`] characters.
    pub fn change_password(&mut self, current: &str, replacement: &str) -> AuthResult<()> {
        let account_id = self
            .profile
            .as_ref()
            .map(|profile| profile.id.clone())
            .ok_or(AuthError::NoActiveSession)?;

        let position = self
            .users
            .iter()
            .position(|user| user.id == account_id)
            .ok_or(AuthError::NoActiveSession)?;

        if self.users[position].password != current {
            return Err(AuthError::InvalidCredentials);
        }
        if replacement.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword {
                minimum: MIN_PASSWORD_LEN,
            });
        }

        self.users[position].password = replacement.to_string();
        self.persist_users()?;
        info!("event=password_change module=session status=ok");
        Ok(())
    }

    fn persist_users(&self) -> AuthResult<()> {
        let encoded = serde_json::to_string(&self.users)?;
        self.store.set(USERS_KEY, &encoded)?;
        Ok(())
    }

    fn write_session_slots(
        &self,
        identity: &UserIdentity,
        profile: &UserProfile,
    ) -> AuthResult<()> {
        let encoded_identity = serde_json::to_string(identity)?;
        let encoded_profile = serde_json::to_string(profile)?;
        self.store.set(CURRENT_USER_KEY, &encoded_identity)?;
        self.store.set(CURRENT_PROFILE_KEY, &encoded_profile)?;
        Ok(())
    }
}
