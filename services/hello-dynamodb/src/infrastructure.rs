// Infrastructure layer modules
pub mod event_source;
pub mod invocation_context;
pub mod log_config;
pub mod logging;
pub mod system_clock;

// Re-exports
pub use event_source::{parse_json, EventSource, EventSourceError};
pub use invocation_context::invocation_context;
pub use log_config::{LogConfig, LogConfigError, LogFormat};
pub use logging::{init_cli_logging, init_logging};
pub use system_clock::SystemClock;
