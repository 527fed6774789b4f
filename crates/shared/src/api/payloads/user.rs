use serde::{Deserialize, Serialize};

use super::non_empty;
use crate::{
    api::response_errors::CreateUserError,
    model::{NewUser, User},
    types::Id,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = CreateUserError;

    fn try_from(req: CreateUserRequest) -> Result<Self, Self::Error> {
        let username = non_empty(req.username).ok_or(CreateUserError::UsernameRequired)?;
        Ok(NewUser::new(username))
    }
}

/// A user as the api exposes it. Used both for creation and for listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: Id,
}

impl From<User> for UserResponse {
    fn from(User { id, username }: User) -> Self {
        Self { username, id }
    }
}
