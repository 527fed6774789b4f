mod id;
pub use id::*;

mod calendar_date;
pub use calendar_date::*;

mod limit;
pub use limit::*;

mod number;
pub use number::*;
