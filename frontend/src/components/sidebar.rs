use leptos::prelude::*;

use crate::state::AppState;

/// Sidebar with the product title, disclaimer and transcript download.
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <h1>"⚖ Justice AI"</h1>
            </div>
            <p class="quote">"\"Justice delayed is justice denied.\""</p>
            <div class="sidebar-footer">
                <p class="about">
                    "This AI provides legal information based on Indian Law (BNS, Constitution)."
                </p>
                <div class="disclaimer">"⚠️ Not a substitute for a professional lawyer."</div>
                <button
                    class="download-btn"
                    on:click=move |_| state.download_transcript()
                    disabled=move || !state.can_export()
                >
                    "Download Transcript"
                </button>
            </div>
        </aside>
    }
}
