//! Placeholder screen rendered for a routed view.
//!
//! Shows the view title and the captured route params so every route in
//! the table is reachable and inspectable in the browser.

#[cfg(test)]
#[path = "screen_test.rs"]
mod screen_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::{RouteParams, ViewId};

/// CSS modifier for the screen container, derived from the view identifier.
fn screen_class(view: ViewId) -> String {
    let slug: String = format!("{view:?}")
        .chars()
        .flat_map(|c| {
            let lower = c.to_ascii_lowercase();
            let dash = if c.is_ascii_uppercase() { Some('-') } else { None };
            dash.into_iter().chain(std::iter::once(lower))
        })
        .collect();
    format!("screen screen-{}", slug.trim_start_matches('-'))
}

fn param_rows(params: &RouteParams) -> Vec<(String, String)> {
    params.iter().map(|(name, value)| ((*name).to_owned(), value.clone())).collect()
}

#[component]
pub fn ScreenPage(view: ViewId, params: RouteParams) -> impl IntoView {
    let rows = param_rows(&params);
    view! {
        <Title text=view.title()/>
        <section class=screen_class(view)>
            <h1>{view.title()}</h1>
            <dl class="screen__params">
                {rows
                    .into_iter()
                    .map(|(name, value)| view! {
                        <dt>{name}</dt>
                        <dd>{value}</dd>
                    })
                    .collect_view()}
            </dl>
        </section>
    }
}
