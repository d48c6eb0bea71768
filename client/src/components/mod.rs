//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components here are route-agnostic building blocks; `route_outlet` is the
//! one piece that talks to the router and the navigation guard.

pub mod route_outlet;
