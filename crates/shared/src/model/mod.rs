mod user;
pub use user::*;

mod exercise;
pub use exercise::*;

mod log_filter;
pub use log_filter::*;
