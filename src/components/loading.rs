//! Loading Component
//!
//! Spinner shown while the startup load is in flight.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center min-h-[60vh]">
            <div class="animate-spin rounded-full h-32 w-32 border-t-2 border-b-2 border-red-600" />
        </div>
    }
}
