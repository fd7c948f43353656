//! Domain model for Notewire
//!
//! Pure business types with no I/O: the `Note` entity, the values that
//! travel toward the server (`NoteDraft`, `NotePatch`), validated newtypes,
//! and domain error definitions.

pub mod errors;
pub mod newtypes;
pub mod note;

pub use errors::DomainError;
pub use newtypes::NoteId;
pub use note::{Note, NoteDraft, NotePatch};
