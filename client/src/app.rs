//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_outlet::RouteOutlet;
use crate::guard::SharedGuard;
use crate::pages::not_found::NotFoundPage;
use crate::state::credentials::LocalStorageCredentials;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the navigation guard and hands every path to [`RouteOutlet`],
/// which matches it against the static route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SharedGuard::shared(LocalStorageCredentials));

    view! {
        <Stylesheet id="leptos" href="/pkg/tienda.css"/>
        <Title text="Tienda"/>

        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=RouteOutlet/>
                    <Route path=WildcardSegment("path") view=RouteOutlet/>
                </Routes>
            </main>
        </Router>
    }
}
