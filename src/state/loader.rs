//! Startup Post Loader
//!
//! One-shot task that pulls the post list from the document store when the
//! app boots.

use leptos::*;

use crate::api;
use crate::state::global::{GlobalState, Post};

/// Kicks off the startup load.
///
/// Fired exactly once from the app root. There is no retry, cancellation, or
/// timeout: if the store never answers, the loading indicator stays up.
pub fn start(state: GlobalState) {
    state.loading.set(true);
    spawn_local(async move {
        let result = api::fetch_posts().await;
        finish(&state, result);
    });
}

/// Applies a completed load to the store.
///
/// Success replaces the post list wholesale with the fetched sequence
/// (newest first, as queried). Failure goes to the console and leaves the
/// list at its previous value; nothing is shown to the user. The loading
/// flag clears either way.
fn finish(state: &GlobalState, result: Result<Vec<Post>, String>) {
    match result {
        Ok(posts) => state.posts.set(posts),
        Err(e) => logging::error!("Failed to fetch posts: {}", e),
    }
    state.loading.set(false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            date: String::new(),
            title: format!("Post {}", id),
            summary: "Summary".to_string(),
            image_url: "https://img.example/p.jpg".to_string(),
        }
    }

    #[test]
    fn successful_load_replaces_the_list_wholesale() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        state.posts.set(vec![post("stale")]);

        finish(&state, Ok(vec![post("newest"), post("older")]));

        let ids: Vec<String> = state
            .posts
            .get_untracked()
            .iter()
            .map(|p| p.id.clone())
            .collect();
        assert_eq!(ids, vec!["newest", "older"]);
        assert!(!state.loading.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn failed_load_keeps_the_list_and_clears_loading() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        assert!(state.loading.get_untracked());

        finish(&state, Err("collection unreachable".to_string()));

        assert!(state.posts.get_untracked().is_empty());
        assert!(!state.loading.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn failed_load_after_a_success_keeps_the_old_posts() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        finish(&state, Ok(vec![post("kept")]));
        finish(&state, Err("flaky network".to_string()));

        assert_eq!(state.posts.get_untracked().len(), 1);
        assert!(!state.loading.get_untracked());

        runtime.dispose();
    }
}
