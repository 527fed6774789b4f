use axum::Json;
use shared::{
    api::{error::ServerError, payloads::UserResponse, response_errors::ListUsersError},
    model::User,
};
use tracing::instrument;

use crate::db::DatabaseConnection;

#[instrument(skip(conn))]
pub async fn list_users(
    DatabaseConnection(conn): DatabaseConnection,
) -> Result<Json<Vec<UserResponse>>, ServerError<ListUsersError>> {
    let users = conn.interact(|conn| User::fetch_all(conn)).await??;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
