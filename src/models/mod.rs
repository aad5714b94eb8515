pub mod schedule;
pub mod session;
pub mod time;

pub use schedule::Schedule;
pub use session::Session;
pub use time::{is_valid_time, TimeOfDay};
