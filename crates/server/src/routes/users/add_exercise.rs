use axum::{
    extract::{rejection::FormRejection, Path},
    Form, Json,
};
use shared::{
    api::{
        error::ServerError,
        payloads::{AddExerciseRequest, ExerciseResponse},
        response_errors::AddExerciseError,
    },
    model::{Exercise, ExerciseDetails, NewExercise, User},
    types::Id,
};
use tracing::{info, instrument};

use super::form_or_empty;
use crate::db::DatabaseConnection;

#[instrument(skip(conn))]
pub async fn add_exercise(
    DatabaseConnection(conn): DatabaseConnection,
    Path(user_id): Path<String>,
    form: Result<Form<AddExerciseRequest>, FormRejection>,
) -> Result<Json<ExerciseResponse>, ServerError<AddExerciseError>> {
    let details = ExerciseDetails::try_from(form_or_empty(form))?;
    // An id that doesn't parse can't belong to anybody
    let user_id = Id::parse(&user_id).map_err(|_| AddExerciseError::UserNotFound)?;

    let res = conn
        .interact(move |conn| -> Result<_, ServerError<AddExerciseError>> {
            // The table doesn't enforce the reference, so this lookup is what
            // keeps exercises from pointing at nobody
            let Some(user) = User::fetch_by_id(conn, &user_id)? else {
                return Err(AddExerciseError::UserNotFound.into());
            };

            let exercise = Exercise::create(conn, NewExercise::new(user.id, details))?;
            info!(id = %exercise.id, user_id = %user.id, "Added exercise");

            Ok(ExerciseResponse {
                username: user.username,
                description: exercise.description,
                duration: exercise.duration,
                date: exercise.date,
                id: user.id,
            })
        })
        .await??;

    Ok(Json(res))
}
