//! Integration tests for notewire-api
//!
//! Uses wiremock to simulate the Notewire server and verifies end-to-end
//! behavior of the ApiClient and HttpNoteTransport: wire shapes, status →
//! error mapping, and the delete acknowledgment variants.

mod common;

mod test_crud;
mod test_error_mapping;
