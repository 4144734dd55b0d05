//! Application use cases (orchestration over ports and plugins).

mod open_session;

pub use open_session::{OpenSession, OpenSessionInput};
