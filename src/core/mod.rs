pub mod backup;
pub mod progress;
pub mod session;
pub mod tips;
