//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate string and browser concerns from routing logic so
//! they can be tested natively.

pub mod location;
