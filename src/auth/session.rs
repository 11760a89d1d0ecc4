//! # Session Provider
//!
//! Holds the signed-in user for one client of the system and publishes every change on a
//! `watch` channel, so dashboards can re-render when the user signs in or out.

use crate::auth::account::{normalize_email, AccountClient, AccountCreate};
use crate::auth::password::{hash_password, verify_password};
use crate::auth::AuthError;
use crate::clients::ProfileClient;
use crate::error::ValidationError;
use crate::framework::DomainClient;
use crate::model::{Principal, Profile, ProfileCreate, ProfileId, Role};
use tokio::sync::watch;
use tracing::{info, instrument, warn};

/// The signed-in user together with their profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: ProfileId,
    pub email: String,
    pub profile: Profile,
}

impl Session {
    pub fn principal(&self) -> Principal {
        self.profile.principal()
    }

    pub fn role(&self) -> Role {
        self.profile.role
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// A sign-in or sign-up is in flight.
    Loading,
    SignedOut,
    SignedIn(Session),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::SignedIn(session) => Some(session),
            _ => None,
        }
    }
}

/// Sign-up form.
#[derive(Debug, Clone)]
pub struct SignUp {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: Role,
}

pub struct SessionProvider {
    accounts: AccountClient,
    profiles: ProfileClient,
    min_password_len: usize,
    state: watch::Sender<SessionState>,
}

impl SessionProvider {
    pub fn new(accounts: AccountClient, profiles: ProfileClient, min_password_len: usize) -> Self {
        let (state, _) = watch::channel(SessionState::SignedOut);
        Self {
            accounts,
            profiles,
            min_password_len,
            state,
        }
    }

    /// Creates the credential account and the profile sharing its id, then signs in.
    ///
    /// If the profile cannot be written the account is removed again, so an email is never
    /// left registered without a profile.
    #[instrument(skip(self, form), fields(email = %form.email, role = %form.role))]
    pub async fn sign_up(&self, form: SignUp) -> Result<Session, AuthError> {
        if form.email.trim().is_empty() || form.full_name.trim().is_empty() {
            return Err(ValidationError::MissingFields.into());
        }
        if form.password.chars().count() < self.min_password_len {
            return Err(AuthError::WeakPassword(self.min_password_len));
        }

        self.state.send_replace(SessionState::Loading);
        let result = self.register(form).await;
        self.settle(result)
    }

    async fn register(&self, form: SignUp) -> Result<Session, AuthError> {
        let password_hash = hash_blocking(form.password).await?;
        let account = self
            .accounts
            .create_account(AccountCreate {
                email: form.email,
                password_hash,
            })
            .await?;

        let created = self
            .profiles
            .create_profile(ProfileCreate {
                id: account.id,
                email: account.email.clone(),
                full_name: form.full_name,
                phone: form.phone,
                role: form.role,
            })
            .await;
        let profile = match created {
            Ok(profile) => profile,
            Err(e) => {
                warn!(account_id = %account.id, error = %e, "Profile not created, removing account");
                if let Err(cleanup) = self.accounts.delete(account.id).await {
                    warn!(account_id = %account.id, error = %cleanup, "Account cleanup failed");
                }
                return Err(e.into());
            }
        };

        info!(user_id = %account.id, "Signed up");
        Ok(Session {
            user_id: account.id,
            email: account.email,
            profile,
        })
    }

    #[instrument(skip(self, password))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ValidationError::MissingFields.into());
        }

        self.state.send_replace(SessionState::Loading);
        let result = self.authenticate(email, password).await;
        self.settle(result)
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let hash = account.password_hash.clone();
        let password = password.to_string();
        let verified = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?;
        if !verified {
            warn!(email = %normalize_email(email), "Password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let profile = self
            .profiles
            .get(account.id)
            .await?
            .ok_or_else(|| AuthError::MissingProfile(account.id.to_string()))?;

        info!(user_id = %account.id, role = %profile.role, "Signed in");
        Ok(Session {
            user_id: account.id,
            email: account.email,
            profile,
        })
    }

    pub fn sign_out(&self) {
        if let Some(session) = self.current() {
            info!(user_id = %session.user_id, "Signed out");
        }
        self.state.send_replace(SessionState::SignedOut);
    }

    /// The signed-in session, if any.
    pub fn current(&self) -> Option<Session> {
        self.state.borrow().session().cloned()
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receives every session change from now on.
    pub fn watch(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    fn settle(&self, result: Result<Session, AuthError>) -> Result<Session, AuthError> {
        let next = match &result {
            Ok(session) => SessionState::SignedIn(session.clone()),
            Err(_) => SessionState::SignedOut,
        };
        self.state.send_replace(next);
        result
    }
}

async fn hash_blocking(password: String) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))?
        .map_err(|e| AuthError::Hashing(e.to_string()))
}
