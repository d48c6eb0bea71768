//! Fallback screen for paths that match no route.

use leptos::prelude::*;

use crate::routes::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="screen screen--not-found">
            <h1>"Página no encontrada"</h1>
            <a href=HOME_PATH>"Volver al inicio"</a>
        </section>
    }
}
