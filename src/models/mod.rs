// Domain models: monitored servers, probe run results, status payloads

mod result;
mod server;
mod status;

pub use result::{RunResult, SubTestRecord, TestOutcome};
pub use server::{ServerConfig, ServerSnapshot};
pub use status::{FleetStatus, InvalidCategory, ResultCategory, ServerStatus};
