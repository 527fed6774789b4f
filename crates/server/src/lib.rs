pub mod db;

mod cli;
pub use cli::*;

mod state;
pub use state::*;

mod router;
pub use router::*;

pub mod routes;
