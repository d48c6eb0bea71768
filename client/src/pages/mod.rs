//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The storefront and admin screens are owned by separate view crates; the
//! router renders a titled placeholder per view identifier.

pub mod not_found;
pub mod screen;
