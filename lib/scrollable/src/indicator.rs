use leptos::prelude::*;

pub const LOADING_MESSAGE: &str = "Loading...";

const INDICATOR_STYLES: &str =
    "display: flex; justify-content: center; align-items: center; height: 100%; width: 100%; padding: 1rem";

/// Centered indicator displayed below the viewport while the caller reports
/// a load in flight.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div style=INDICATOR_STYLES>
            <p>{LOADING_MESSAGE}</p>
        </div>
    }
}
