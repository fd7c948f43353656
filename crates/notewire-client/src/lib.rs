//! Notewire Client - the state/view synchronization core
//!
//! This crate keeps an in-memory mirror of the server's notes consistent
//! with what the user sees, across create/edit/delete round-trips that may
//! overlap and complete out of order.
//!
//! ## Key Components
//!
//! - [`view`] - pure View Renderer: `NoteCollection` → [`view::ViewTree`]
//! - [`events`] - the typed UI event contract (submit/click surface)
//! - [`controller`] - the Interaction Controller: the only component that
//!   sequences transport calls with collection mutations and renders
//!
//! ## Concurrency Model
//!
//! Event-driven with run-to-completion completions: the controller never
//! holds its state lock across an in-flight request, only while applying a
//! completed operation's single keyed mutation and re-render. Overlapping
//! operations on different ids therefore commute, and a completion arriving
//! late (even after the note it addresses was deleted) is applied gracefully
//! or dropped without corrupting the mirror.

pub mod controller;
pub mod events;
pub mod view;

pub use controller::{Controller, EditForm, Handled};
pub use events::UiEvent;
pub use view::{render, ViewItem, ViewTree};
