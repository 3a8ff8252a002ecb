// Domain layer modules
pub mod clock;
pub mod response;

// Re-exports
pub use clock::{format_timestamp, Clock, FixedClock, TIMESTAMP_FORMAT};
pub use response::{HandlerResponse, GREETING_BODY, STATUS_OK};
