use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

/// Centered spinner used as a `Suspense` fallback.
#[component]
pub fn LoadingView(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-container" aria-busy="true">
            <Spinner size=SpinnerSize::Medium />
            <p class="loading-message">{message.unwrap_or_else(|| "Loading...".to_string())}</p>
        </div>
    }
}
