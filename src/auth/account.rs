//! Credential accounts. The account id becomes the profile id at sign-up.

use crate::auth::AuthError;
use crate::framework::{DomainClient, Query, Record, StoreError, TableClient};
use crate::model::ProfileId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;
use tracing::instrument;

#[derive(Clone, PartialEq)]
pub struct Account {
    pub id: ProfileId,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

pub struct AccountCreate {
    pub email: String,
    pub password_hash: String,
}

impl fmt::Debug for AccountCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountCreate")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub enum AccountUpdate {}

#[derive(Debug)]
pub enum AccountAction {}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl Record for Account {
    const TABLE: &'static str = "accounts";
    type Id = ProfileId;
    type Create = AccountCreate;
    type Update = AccountUpdate;
    type Action = AccountAction;
    type ActionResult = ();
    type Context = ();
    type Error = AuthError;

    fn id(&self) -> &ProfileId {
        &self.id
    }

    /// One account per email address.
    fn unique_key(&self) -> Option<String> {
        Some(self.email.clone())
    }

    fn from_create_params(id: ProfileId, params: AccountCreate) -> Result<Self, AuthError> {
        Ok(Self {
            id,
            email: normalize_email(&params.email),
            password_hash: params.password_hash,
            created_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, update: AccountUpdate, _ctx: &()) -> Result<(), AuthError> {
        match update {}
    }

    async fn handle_action(&mut self, action: AccountAction, _ctx: &()) -> Result<(), AuthError> {
        match action {}
    }
}

#[derive(Clone)]
pub struct AccountClient {
    inner: TableClient<Account>,
}

impl AccountClient {
    pub fn new(inner: TableClient<Account>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_account(&self, params: AccountCreate) -> Result<Account, AuthError> {
        self.inner.insert(params).await.map_err(AuthError::from)
    }

    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AuthError> {
        let email = normalize_email(email);
        let rows = self
            .inner
            .select(Query::all().filter(move |a: &Account| a.email == email).limit(1))
            .await?;
        Ok(rows.into_iter().next())
    }
}

#[async_trait]
impl DomainClient<Account> for AccountClient {
    type Error = AuthError;

    fn inner(&self) -> &TableClient<Account> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        AuthError::from(e)
    }
}
