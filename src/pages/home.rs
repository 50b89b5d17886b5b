//! Home Page
//!
//! Default main-column view: the featured article followed by the grid
//! of fetched psychology posts.

use leptos::*;

use crate::components::PostCard;
use crate::state::GlobalState;

/// Featured article plus the post grid
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Hero />
        <PostGrid />
    }
}

/// Static featured article
#[component]
fn Hero() -> impl IntoView {
    view! {
        <h2 class="text-5xl font-bold text-red-600 dark:text-red-400 mb-8 leading-tight animate-fade-in">
            "STRANGER THINGS WEB SERIES"
        </h2>

        <div class="mb-8 rounded-2xl overflow-hidden shadow-2xl transform hover:scale-[1.02] transition-transform duration-300">
            <img
                src="https://ia.tmgrup.com.tr/fd2afa/0/0/0/0/1600/900?u=https://i.tmgrup.com.tr/es/2022/09/15/stranger-things-5-sezon-hakkinda-her-sey-1663231064384.jpg"
                alt="Stranger Things"
                class="w-full h-[500px] object-cover"
                loading="lazy"
            />
        </div>

        <div class="space-y-6">
            <p class="text-xl leading-relaxed text-gray-800 dark:text-gray-200 animate-fade-in">
                <span class="font-semibold text-red-600 dark:text-red-400">"Stranger Things"</span>
                " is a chilling descent into the eerie unknown, where the normalcy of small-town life is shattered by supernatural horrors lurking just beneath the surface. As a group of friends unravels the mysteries surrounding their missing friend, they stumble upon a hidden world—a parallel dimension known as the \"Upside Down.\""
            </p>
            <p class="text-xl leading-relaxed text-gray-800 dark:text-gray-200 animate-fade-in delay-100">
                "A dark, decaying mirror of their own reality, it is filled with nightmarish creatures and a relentless malevolence that creeps into their lives. The tension builds with every flicker of the lights, every whispered warning, as sinister forces manipulate time, space, and minds, leaving viewers on the edge of their seats."
            </p>
            <p class="text-xl leading-relaxed text-gray-800 dark:text-gray-200 animate-fade-in delay-200">
                "The show perfectly captures the dread of the unseen, the terror of isolation, and the unnerving feeling that no one, not even those closest to you, are safe from the horrors that lurk in the shadows."
            </p>

            <div class="pt-4 border-t border-red-200 dark:border-red-800">
                <p class="text-red-600 dark:text-red-400 font-semibold flex items-center gap-2">
                    <span>"Source: ChatGPT, Google"</span>
                </p>
            </div>
        </div>
    }
}

/// Grid of fetched posts below the featured article
#[component]
fn PostGrid() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section id="articles" class="mt-16 pt-12 border-t border-red-100 dark:border-red-800">
            <h3 class="text-3xl font-bold text-red-600 dark:text-red-400 mb-8">
                "More Psychology Facts"
            </h3>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                {move || {
                    state
                        .posts
                        .get()
                        .into_iter()
                        .map(|post| view! { <PostCard post=post /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
