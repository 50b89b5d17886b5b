//! Footer Component
//!
//! Site footer: about blurb, quick links, social icons, and a newsletter
//! form that goes nowhere.

use chrono::Datelike;
use leptos::*;

use crate::components::nav::NAV_LINKS;

/// Site footer
#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="bg-red-600 dark:bg-red-800 text-white py-12 mt-16">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    // About
                    <div>
                        <h4 class="text-xl font-bold mb-4">"About Mind Chit"</h4>
                        <p class="text-red-100">
                            "Exploring the fascinating world of psychology and human behavior through engaging articles and insights."
                        </p>
                    </div>

                    // Quick links, same four entries as the header
                    <div>
                        <h4 class="text-xl font-bold mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {NAV_LINKS
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a
                                                href=link.href
                                                class="text-red-100 hover:text-white transition-colors duration-200"
                                            >
                                                {link.name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    // Social links
                    <div>
                        <h4 class="text-xl font-bold mb-4">"Connect"</h4>
                        <div class="flex space-x-4">
                            <a href="#" class="text-2xl hover:text-red-200 transition-colors duration-200">
                                "📱"
                            </a>
                            <a href="#" class="text-2xl hover:text-red-200 transition-colors duration-200">
                                "✉️"
                            </a>
                            <a href="#" class="text-2xl hover:text-red-200 transition-colors duration-200">
                                "📸"
                            </a>
                        </div>
                    </div>

                    // Newsletter form; decorative, submission is swallowed
                    <div>
                        <h4 class="text-xl font-bold mb-4">"Newsletter"</h4>
                        <form
                            class="space-y-4"
                            on:submit=move |ev: web_sys::SubmitEvent| ev.prevent_default()
                        >
                            <input
                                type="email"
                                placeholder="Enter your email"
                                class="w-full px-4 py-2 rounded-lg bg-red-700 dark:bg-red-900 text-white placeholder-red-200 focus:outline-none focus:ring-2 focus:ring-red-400"
                            />
                            <button class="px-6 py-2 bg-white text-red-600 rounded-lg hover:bg-red-100 transition-colors duration-200">
                                "Subscribe"
                            </button>
                        </form>
                    </div>
                </div>

                <div class="mt-8 pt-8 border-t border-red-500 text-center">
                    <p class="text-red-100">
                        {format!("© {} Mind Chit. All rights reserved.", year)}
                    </p>
                </div>
            </div>
        </footer>
    }
}
