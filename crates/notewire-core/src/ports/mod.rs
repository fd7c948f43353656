//! Port definitions (hexagonal architecture)
//!
//! Ports are the trait interfaces through which the core interacts with the
//! outside world. Adapter crates provide the implementations:
//!
//! - [`INoteTransport`] - driven port for the notes HTTP API
//!   (implemented by `notewire-api`)
//! - [`INoticeSink`] - driven port for surfacing user-visible notices
//!   (implemented by the CLI)

pub mod notice;
pub mod transport;

pub use notice::{INoticeSink, Notice, NoticeSeverity};
pub use transport::{DeleteAck, INoteTransport, TransportError};
