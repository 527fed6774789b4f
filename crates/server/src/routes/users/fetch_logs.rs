use axum::{
    extract::{Path, Query},
    Json,
};
use shared::{
    api::{
        error::ServerError,
        payloads::{LogQuery, LogResponse},
        response_errors::LogsError,
    },
    model::{Exercise, LogFilter, User},
    types::Id,
};
use tracing::{debug, instrument};

use crate::db::DatabaseConnection;

#[instrument(skip(conn))]
pub async fn fetch_logs(
    DatabaseConnection(conn): DatabaseConnection,
    Path(user_id): Path<String>,
    Query(query): Query<LogQuery>,
) -> Result<Json<LogResponse>, ServerError<LogsError>> {
    let user_id = Id::parse(&user_id).map_err(|_| LogsError::UserNotFound)?;

    let res = conn
        .interact(move |conn| -> Result<_, ServerError<LogsError>> {
            let Some(user) = User::fetch_by_id(conn, &user_id)? else {
                return Err(LogsError::UserNotFound.into());
            };

            let filter = LogFilter::new(user.id, &query);
            debug!(?filter);
            let log = Exercise::fetch_log(conn, &filter)?;

            Ok(LogResponse::new(user.username, user.id, log))
        })
        .await??;

    Ok(Json(res))
}
