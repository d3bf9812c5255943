//! # input_state
//!
//! UI-agnostic state layer for the interactive controls the engine writes to:
//! - [`ControlId`]: opaque identifier, decoupled from any document id type
//! - [`ControlValueStore`]: text values (with revision tracking), selected
//!   option indices, and the focused control
//!
//! This crate depends only on `std`. Integration layers convert their native
//! node ids to [`ControlId`] at the call boundary.

mod id;
mod state;
mod store;

pub use id::ControlId;
pub use store::ControlValueStore;
