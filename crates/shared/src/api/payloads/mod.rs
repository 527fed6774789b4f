mod user;
pub use user::*;

mod exercise;
pub use exercise::*;

mod log;
pub use log::*;

/// Form fields count as missing when they are absent or empty
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.is_empty())
}
