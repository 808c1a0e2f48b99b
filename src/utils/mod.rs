// Mon Jan 19 2026 - Alex

pub mod hash;
pub mod logging;

pub use hash::HashComputer;
pub use logging::LoggingUtils;
