//! Router host: resolves the current location, runs the navigation guard,
//! applies redirects, and renders the matched screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! `leptos_router` owns history and the reactive location. Every path is
//! routed to this outlet, which matches it against the static route table
//! so the table stays the single source of truth for paths and access
//! flags. Redirects replace the current history entry.
//!
//! HYDRATION
//! =========
//! Credentials live in browser storage, which the server cannot see. Until
//! the outlet has mounted in the browser, routes whose outcome depends on
//! credentials render a neutral pending placeholder, so the server markup
//! and the first client render agree. The guard runs once mounted.

#[cfg(test)]
#[path = "route_outlet_test.rs"]
mod route_outlet_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::guard::{NavigationDecision, NavigationGuard, NavigationIntent, SharedGuard};
use crate::pages::not_found::NotFoundPage;
use crate::pages::screen::ScreenPage;
use crate::routes::{LOGIN_PATH, ROUTES, Resolution, RouteParams, RouteTable, ViewId};
use crate::state::credentials::{CredentialStore, LocalStorageCredentials};
use crate::util::location::{join_location, split_location};

/// What the outlet does for one location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteOutcome {
    Render { view: ViewId, params: RouteParams },
    Redirect(String),
    NotFound,
    /// Waiting for the browser before reading credentials.
    Pending,
}

/// Resolve `full_path` and run the guard over the matched chain.
///
/// With `mounted == false` (server render and the first hydration pass) the
/// guard is not consulted: routes it could redirect come back as
/// [`RouteOutcome::Pending`].
pub fn route_outcome<S: CredentialStore>(
    table: &RouteTable,
    guard: &NavigationGuard<S>,
    full_path: &str,
    origin_path: Option<&str>,
    mounted: bool,
) -> RouteOutcome {
    let path = split_location(full_path).path;
    let route = match table.resolve(path) {
        Resolution::Matched(route) => route,
        Resolution::Redirect(target) => return RouteOutcome::Redirect(target.to_owned()),
        Resolution::NotFound => return RouteOutcome::NotFound,
    };

    let credential_dependent = route.requires_auth() || route.leaf().is_some_and(|record| record.path == LOGIN_PATH);
    if !mounted && credential_dependent {
        return RouteOutcome::Pending;
    }

    let intent = NavigationIntent::from_match(full_path, origin_path, &route);
    match guard.check(&intent) {
        NavigationDecision::Proceed => match route.leaf().and_then(|record| record.view) {
            Some(view) => RouteOutcome::Render { view, params: route.params },
            None => RouteOutcome::NotFound,
        },
        decision @ NavigationDecision::RedirectTo { .. } => {
            decision.href().map_or(RouteOutcome::NotFound, RouteOutcome::Redirect)
        }
    }
}

/// Catch-all route view driven by the route table and the guard in context.
#[component]
pub fn RouteOutlet() -> impl IntoView {
    let guard = use_context::<SharedGuard>().unwrap_or_else(|| SharedGuard::shared(LocalStorageCredentials));
    let location = use_location();
    let navigate = use_navigate();
    let previous = StoredValue::new(None::<String>);
    let mounted = RwSignal::new(false);

    // Effects only run in the browser, after hydration.
    Effect::new(move || mounted.set(true));

    let full_path = Memo::new(move |_| {
        join_location(&location.pathname.get(), &location.search.get(), &location.hash.get())
    });

    let outcome = Memo::new(move |_| {
        let origin = previous.get_value();
        route_outcome(&ROUTES, &guard, &full_path.get(), origin.as_deref(), mounted.get())
    });

    Effect::new(move || match outcome.get() {
        RouteOutcome::Redirect(href) => {
            #[cfg(feature = "hydrate")]
            log::info!("navigation to {} redirected to {href}", full_path.get_untracked());
            navigate(&href, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        RouteOutcome::Render { .. } => previous.set_value(Some(full_path.get_untracked())),
        RouteOutcome::NotFound | RouteOutcome::Pending => {}
    });

    move || match outcome.get() {
        RouteOutcome::Render { view, params } => view! { <ScreenPage view=view params=params/> }.into_any(),
        RouteOutcome::Redirect(_) => view! { <p class="route-pending">"Redirigiendo..."</p> }.into_any(),
        RouteOutcome::Pending => view! { <p class="route-pending">"Cargando..."</p> }.into_any(),
        RouteOutcome::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
