mod create_user;
pub use create_user::*;

mod list_users;
pub use list_users::*;

mod add_exercise;
pub use add_exercise::*;

mod fetch_logs;
pub use fetch_logs::*;

use axum::{extract::rejection::FormRejection, Form};
use tracing::debug;

/// A body that isn't a form, or no body at all, reads as a form with no
/// fields so the handler reports which field is missing.
fn form_or_empty<T: Default>(form: Result<Form<T>, FormRejection>) -> T {
    match form {
        Ok(Form(req)) => req,
        Err(rejection) => {
            debug!(%rejection, "Treating body as an empty form");
            T::default()
        }
    }
}
