//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State the router reads is kept behind small capability traits so the
//! navigation guard can be exercised without a browser.

pub mod credentials;
