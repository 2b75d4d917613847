//! Mock collaborator implementations

mod executor;
mod fileops;
mod transport;

pub use executor::MockExecutor;
pub use fileops::MockFileOps;
pub use transport::MockTransport;
