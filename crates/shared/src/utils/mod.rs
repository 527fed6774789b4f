mod logging;
pub use logging::*;
