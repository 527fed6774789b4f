use axum::{extract::rejection::FormRejection, Form, Json};
use shared::{
    api::{
        error::ServerError,
        payloads::{CreateUserRequest, UserResponse},
        response_errors::CreateUserError,
    },
    model::{NewUser, User},
};
use tracing::{info, instrument};

use super::form_or_empty;
use crate::db::DatabaseConnection;

#[instrument(skip(conn))]
pub async fn create_user(
    DatabaseConnection(conn): DatabaseConnection,
    form: Result<Form<CreateUserRequest>, FormRejection>,
) -> Result<Json<UserResponse>, ServerError<CreateUserError>> {
    let new_user = NewUser::try_from(form_or_empty(form))?;

    let user = conn
        .interact(move |conn| User::create(conn, new_user))
        .await??;

    info!(id = %user.id, "Created user");
    Ok(Json(user.into()))
}
