//! Post Detail Page
//!
//! Full view of a selected psychology post, with a back button that
//! returns to the featured article.

use leptos::*;

use crate::state::{GlobalState, Post};

/// Full view of the selected post
#[component]
pub fn PostDetail(post: Post) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="animate-slide-in">
            <button
                class="mb-6 px-4 py-2 flex items-center gap-2 text-red-600 dark:text-red-400 hover:text-red-700 dark:hover:text-red-300 transition-colors"
                on:click=move |_| state.clear_selection()
            >
                <span class="text-xl">"←"</span>
                <span>"Back to Main Content"</span>
            </button>

            <h2 class="text-5xl font-bold text-red-600 dark:text-red-400 mb-8 leading-tight">
                {post.title.clone()}
            </h2>

            <div class="mb-8 rounded-2xl overflow-hidden shadow-2xl transform hover:scale-[1.02] transition-transform duration-300">
                <img
                    src=post.image_url.clone()
                    alt=post.title.clone()
                    class="w-full h-[500px] object-cover"
                    loading="lazy"
                />
            </div>

            <div class="space-y-6">
                <p class="text-xl leading-relaxed text-gray-800 dark:text-gray-200">
                    {post.summary.clone()}
                </p>

                <div class="pt-4 border-t border-red-200 dark:border-red-800">
                    <p class="text-red-600 dark:text-red-400 font-semibold flex items-center gap-2">
                        <span>"📅"</span>
                        <span>{format!("Published on: {}", post.date)}</span>
                    </p>
                </div>
            </div>
        </div>
    }
}
