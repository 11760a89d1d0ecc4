use crate::error::ValidationError;
use crate::framework::Record;
use crate::model::{Profile, ProfileCreate, ProfileId, ProfileUpdate};
use crate::profile_actor::ProfileError;
use async_trait::async_trait;
use chrono::Utc;

/// Profiles have no custom actions.
#[derive(Debug)]
pub enum ProfileAction {}

#[async_trait]
impl Record for Profile {
    const TABLE: &'static str = "profiles";
    type Id = ProfileId;
    type Create = ProfileCreate;
    type Update = ProfileUpdate;
    type Action = ProfileAction;
    type ActionResult = ();
    type Context = ();
    type Error = ProfileError;

    fn id(&self) -> &ProfileId {
        &self.id
    }

    fn preassigned_id(params: &ProfileCreate) -> Option<ProfileId> {
        Some(params.id)
    }

    fn from_create_params(id: ProfileId, params: ProfileCreate) -> Result<Self, ProfileError> {
        if params.email.trim().is_empty() || params.full_name.trim().is_empty() {
            return Err(ValidationError::MissingFields.into());
        }
        let now = Utc::now();
        Ok(Self {
            id,
            email: params.email.trim().to_lowercase(),
            full_name: params.full_name.trim().to_string(),
            phone: params.phone,
            role: params.role,
            created_at: now,
            updated_at: now,
        })
    }

    async fn on_update(&mut self, update: ProfileUpdate, _ctx: &()) -> Result<(), ProfileError> {
        if let Some(name) = update.full_name {
            if name.trim().is_empty() {
                return Err(ValidationError::MissingFields.into());
            }
            self.full_name = name.trim().to_string();
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone).filter(|p| !p.trim().is_empty());
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(&mut self, action: ProfileAction, _ctx: &()) -> Result<(), ProfileError> {
        match action {}
    }
}
