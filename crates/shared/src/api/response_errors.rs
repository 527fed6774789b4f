use std::fmt;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::{ResponseError, ServerError};

macro_rules! response_error {
    ($name:ident ($fallback:tt) {
        $(
            #[code($variant_code:expr)]
            #[message($variant_message:tt)]
            $variant:ident
            $({ $($var_struct_body_tt:tt)* })?
        ,)*
    }) => {

        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
        pub enum $name {
            $(
                #[error($variant_message)]
                $variant $({
                    $($var_struct_body_tt)*
                })?,
            )*
        }

        impl ResponseError for $name {
            const FALLBACK_MESSAGE: &'static str = $fallback;
        }

        impl From<$name> for ServerError<$name> {
            fn from(inner: $name) -> Self {
                let code = match &inner {
                    $( $name::$variant { .. } => $variant_code, )*
                };
                Self::Inner { code, inner }
            }
        }
    };
}

response_error!(CreateUserError ("Failed to create user") {
    #[code(StatusCode::BAD_REQUEST)]
    #[message("Username required")]
    UsernameRequired,
});

/// Listing can only fail in the store
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListUsersError {}

impl fmt::Display for ListUsersError {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl std::error::Error for ListUsersError {}

impl ResponseError for ListUsersError {
    const FALLBACK_MESSAGE: &'static str = "Failed to fetch users";
}

response_error!(AddExerciseError ("Failed to add exercise") {
    #[code(StatusCode::BAD_REQUEST)]
    #[message("Description and duration required")]
    DescriptionAndDurationRequired,
    // The store refuses a duration that isn't a number and callers only
    // ever saw the generic failure for it
    #[code(StatusCode::INTERNAL_SERVER_ERROR)]
    #[message("Failed to add exercise")]
    DurationNotANumber,
    // Not 404, existing clients expect 400 here
    #[code(StatusCode::BAD_REQUEST)]
    #[message("User not found")]
    UserNotFound,
});

response_error!(LogsError ("Failed to fetch logs") {
    #[code(StatusCode::BAD_REQUEST)]
    #[message("User not found")]
    UserNotFound,
});
