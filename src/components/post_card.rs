//! Post Card Component
//!
//! Clickable summary card for one post in the articles grid.

use leptos::*;

use crate::state::global::{GlobalState, Post};

/// Summary card; clicking it opens the post in the detail view
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let post_for_select = post.clone();

    view! {
        <article
            on:click=move |_| state.select_post(post_for_select.clone())
            class="group cursor-pointer bg-white dark:bg-gray-800 rounded-xl shadow-md hover:shadow-xl transition-all duration-300 transform hover:-translate-y-1"
        >
            <div class="aspect-video overflow-hidden rounded-t-xl">
                <img
                    src=post.image_url.clone()
                    alt=post.title.clone()
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-300"
                    loading="lazy"
                />
            </div>
            <div class="p-6">
                <div class="flex items-center text-red-500 dark:text-red-400 text-sm mb-2">
                    <span class="mr-2">"📅"</span>
                    <span>{post.date.clone()}</span>
                </div>
                <h4 class="text-xl font-semibold text-gray-900 dark:text-gray-100 mb-2 line-clamp-2">
                    {post.title.clone()}
                </h4>
                <p class="text-gray-600 dark:text-gray-300 line-clamp-3 mb-4">
                    {post.summary.clone()}
                </p>
                <div class="flex items-center text-red-600 dark:text-red-400 font-semibold group-hover:gap-2 transition-all duration-300">
                    "Read More"
                    <span class="ml-1 group-hover:translate-x-1 transition-transform">"→"</span>
                </div>
            </div>
        </article>
    }
}
