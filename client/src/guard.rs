//! Navigation guard: decides whether a navigation proceeds or redirects.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router host builds a [`NavigationIntent`] for every location change
//! and asks the guard for a [`NavigationDecision`]. The guard never
//! navigates itself; the caller applies the redirect. Credentials are read
//! once per decision through the injected [`CredentialStore`].
//!
//! DECISION ORDER
//! ==============
//! 1. An admin with a token visiting the login page goes to the admin
//!    product list.
//! 2. A chain that requires auth without a token goes to login, carrying
//!    the requested location in `redirect`.
//! 3. A chain that requires admin without the admin role goes home.
//! 4. Everything else proceeds.
//!
//! This is a UX guard only. Authorization is enforced by the backend API.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::sync::Arc;

use crate::routes::{
    ADMIN_HOME_PATH, HOME_PATH, LOGIN_PATH, RouteDescriptor, RouteMatch, chain_requires_admin, chain_requires_auth,
};
use crate::state::credentials::{CredentialStore, Credentials};
use crate::util::location::{QueryPairs, build_href, parse_query, split_location};

/// Query parameter carrying the originally requested location to login.
pub const REDIRECT_QUERY_KEY: &str = "redirect";

/// One navigation attempt, as seen by the guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationIntent {
    /// Target path without query or hash.
    pub target_path: String,
    /// Target path with query and hash, as requested.
    pub full_path: String,
    pub origin_path: Option<String>,
    /// Matched records, outermost first. Empty for unmatched paths.
    pub matched: Vec<&'static RouteDescriptor>,
    pub query: QueryPairs,
}

impl NavigationIntent {
    /// Build an intent for `full_path` against an already-resolved match.
    pub fn new(full_path: &str, origin_path: Option<&str>, matched: Vec<&'static RouteDescriptor>) -> Self {
        let parts = split_location(full_path);
        Self {
            target_path: parts.path.to_owned(),
            full_path: full_path.to_owned(),
            origin_path: origin_path.map(str::to_owned),
            matched,
            query: parse_query(parts.query),
        }
    }

    pub fn from_match(full_path: &str, origin_path: Option<&str>, route: &RouteMatch) -> Self {
        Self::new(full_path, origin_path, route.chain.clone())
    }

    fn requires_auth(&self) -> bool {
        chain_requires_auth(&self.matched)
    }

    fn requires_admin(&self) -> bool {
        chain_requires_admin(&self.matched)
    }
}

/// Outcome of a guard check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    RedirectTo { path: String, query: QueryPairs },
}

impl NavigationDecision {
    fn redirect(path: &str) -> Self {
        Self::RedirectTo { path: path.to_owned(), query: Vec::new() }
    }

    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }

    /// Rendered redirect target, or `None` when navigation proceeds.
    pub fn href(&self) -> Option<String> {
        match self {
            Self::Proceed => None,
            Self::RedirectTo { path, query } => Some(build_href(path, query)),
        }
    }
}

/// Decide a navigation from a credentials snapshot. Pure.
pub fn decide(intent: &NavigationIntent, credentials: &Credentials) -> NavigationDecision {
    if intent.target_path == LOGIN_PATH && credentials.has_token() && credentials.is_admin() {
        return NavigationDecision::redirect(ADMIN_HOME_PATH);
    }

    if !intent.requires_auth() {
        return NavigationDecision::Proceed;
    }

    if !credentials.has_token() {
        return NavigationDecision::RedirectTo {
            path: LOGIN_PATH.to_owned(),
            query: vec![(REDIRECT_QUERY_KEY.to_owned(), intent.full_path.clone())],
        };
    }

    if intent.requires_admin() && !credentials.is_admin() {
        return NavigationDecision::redirect(HOME_PATH);
    }

    NavigationDecision::Proceed
}

/// Guard bound to a credential store.
#[derive(Clone, Debug)]
pub struct NavigationGuard<S> {
    store: S,
}

/// Guard shape shared through the Leptos context.
pub type SharedGuard = NavigationGuard<Arc<dyn CredentialStore + Send + Sync>>;

impl<S: CredentialStore> NavigationGuard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the store and decide `intent`.
    pub fn check(&self, intent: &NavigationIntent) -> NavigationDecision {
        decide(intent, &Credentials::read(&self.store))
    }
}

impl SharedGuard {
    pub fn shared<T: CredentialStore + Send + Sync + 'static>(store: T) -> Self {
        Self::new(Arc::new(store))
    }
}
