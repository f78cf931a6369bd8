//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by update frequency to avoid unnecessary re-renders.

pub mod burn_state;
pub mod locale_state;
pub mod nav_state;
pub mod tier_state;
