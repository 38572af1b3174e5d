//! State Management
//!
//! Process-wide reactive state shared with every component.

pub mod global;

pub use global::{provide_global_state, GlobalState};
