//! Browser plumbing: driver process supervision, the shared session, and
//! bounded condition waits.

pub mod process;
pub mod session;
pub mod wait;

pub use process::DriverProcess;
pub use session::Session;
