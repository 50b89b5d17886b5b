//! App Root Component
//!
//! Main application component with global providers and the main-column
//! switch between loading, the featured article, and a selected post.

use leptos::*;

use crate::components::{Footer, Header, Loading};
use crate::pages::{Home, PostDetail};
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::loader;
use crate::state::theme::{provide_theme, ThemeService};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide theme and global state to all components
    provide_theme();
    provide_global_state();

    // Kick off the one-shot post fetch
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    loader::start(state.clone());

    let theme = use_context::<ThemeService>().expect("ThemeService not found");

    view! {
        <div class=move || {
            if theme.dark.get() {
                "min-h-screen transition-colors duration-300 dark bg-gray-900"
            } else {
                "min-h-screen transition-colors duration-300 bg-white"
            }
        }>
            // Sticky header with navigation and theme toggle
            <Header />

            // Main content area
            <main class="container mx-auto px-4 py-12">
                <div class="max-w-4xl mx-auto">
                    {move || {
                        if state.loading.get() {
                            view! { <Loading /> }.into_view()
                        } else if let Some(post) = state.selected.get() {
                            view! { <PostDetail post=post /> }.into_view()
                        } else {
                            view! { <Home /> }.into_view()
                        }
                    }}
                </div>
            </main>

            <Footer />
        </div>
    }
}
