//! Header Component
//!
//! Sticky site header with brand, navigation links, theme toggle, and the
//! mobile menu.

use leptos::*;

use crate::state::global::GlobalState;
use crate::state::theme::ThemeService;

/// A static navigation entry, shown in the header and the footer.
#[derive(Clone, Copy)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// The four fixed navigation entries.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        name: "Home",
        href: "#",
    },
    NavLink {
        name: "Articles",
        href: "#articles",
    },
    NavLink {
        name: "About",
        href: "#about",
    },
    NavLink {
        name: "Contact",
        href: "#contact",
    },
];

/// Site header with desktop and mobile navigation
#[component]
pub fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = use_context::<ThemeService>().expect("ThemeService not found");

    let toggle_state = state.clone();
    let label_state = state.clone();
    let panel_state = state;

    view! {
        <header class="sticky top-0 z-50 bg-red-600 bg-opacity-50 dark:bg-red-800 dark:bg-opacity-50 backdrop-blur-lg shadow-lg transition-colors duration-300">
            <nav class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <div class="flex items-center gap-3">
                        <div class="w-12 h-12 bg-white dark:bg-gray-800 rounded-full flex justify-center items-center shadow-lg transition-colors duration-300">
                            <span class="text-2xl text-red-600 dark:text-red-400">"🧠"</span>
                        </div>
                        <h1 class="text-3xl font-bold text-white">"Mind Chit"</h1>
                    </div>

                    // Desktop navigation
                    <div class="hidden md:flex items-center gap-8">
                        {NAV_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        class="text-white hover:text-red-200 transition-colors duration-200"
                                    >
                                        {link.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <button
                            on:click=move |_| theme.toggle()
                            class="p-2 rounded-full hover:bg-red-700 dark:hover:bg-red-900 transition-colors duration-300"
                            aria-label="Toggle dark mode"
                        >
                            <span class="text-2xl">
                                {move || if theme.dark.get() { "☀️" } else { "🌙" }}
                            </span>
                        </button>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden flex items-center">
                        <button
                            on:click=move |_| toggle_state.toggle_menu()
                            class="text-white p-2"
                            aria-label="Toggle menu"
                        >
                            {move || if label_state.menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                // Mobile navigation panel
                {move || {
                    if panel_state.menu_open.get() {
                        let links_state = panel_state.clone();
                        let menu_theme_state = panel_state.clone();
                        view! {
                            <div class="md:hidden py-4">
                                {NAV_LINKS
                                    .into_iter()
                                    .map(|link| {
                                        let state = links_state.clone();
                                        view! {
                                            <a
                                                href=link.href
                                                class="block py-2 text-white hover:text-red-200 transition-colors duration-200"
                                                on:click=move |_| state.close_menu()
                                            >
                                                {link.name}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                                <div class="pt-4 border-t border-red-500">
                                    <button
                                        on:click=move |_| {
                                            theme.toggle();
                                            menu_theme_state.close_menu();
                                        }
                                        class="flex items-center gap-2 text-white hover:text-red-200 transition-colors duration-200"
                                    >
                                        <span>
                                            {move || {
                                                if theme.dark.get() {
                                                    "Light Mode ☀️"
                                                } else {
                                                    "Dark Mode 🌙"
                                                }
                                            }}
                                        </span>
                                    </button>
                                </div>
                            </div>
                        }
                            .into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </nav>
        </header>
    }
}
