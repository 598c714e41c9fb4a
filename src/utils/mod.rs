pub mod logger;
pub mod signal;

pub use logger::setup_logging;
pub use signal::reset_sigpipe;
