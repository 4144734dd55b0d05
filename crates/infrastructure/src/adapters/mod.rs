//! Transport adapters implementing the `HttpTransport` port.

mod recording_transport;
mod reqwest_transport;

pub use recording_transport::RecordingTransport;
pub use reqwest_transport::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, ReqwestTransport};
