//! Components - Reusable UI Components
//!
//! Pure UI components that don't own application state.

pub mod charts;
pub mod layout;
pub mod primitives;
