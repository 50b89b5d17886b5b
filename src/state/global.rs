//! Global Application State
//!
//! Reactive view state management using Leptos signals.

use leptos::*;

/// A psychology post in display form.
///
/// Built in bulk by the startup loader from stored documents. Posts are never
/// mutated afterwards; a refetch would replace the whole list at once.
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    /// Opaque identifier assigned by the document store, unique per fetch
    pub id: String,
    /// Display-formatted publication date; may be empty
    pub date: String,
    pub title: String,
    pub summary: String,
    pub image_url: String,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Posts fetched from the document store, newest first
    pub posts: RwSignal<Vec<Post>>,
    /// Post open in the detail view; `None` shows the default article
    pub selected: RwSignal<Option<Post>>,
    /// Whether the startup load is still in flight
    pub loading: RwSignal<bool>,
    /// Whether the mobile navigation menu is open
    pub menu_open: RwSignal<bool>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl GlobalState {
    /// Initial state: no posts, nothing selected, menu closed. The loading
    /// flag starts true so the spinner shows from the first paint.
    pub fn new() -> Self {
        Self {
            posts: create_rw_signal(Vec::new()),
            selected: create_rw_signal(None),
            loading: create_rw_signal(true),
            menu_open: create_rw_signal(false),
        }
    }

    /// Opens a post in the detail view. Leaves the post list untouched.
    pub fn select_post(&self, post: Post) {
        self.selected.set(Some(post));
    }

    /// Returns to the default article view.
    pub fn clear_selection(&self) {
        self.selected.set(None);
    }

    /// Flips the mobile menu open or closed.
    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    /// Closes the mobile menu. Following a navigation link or toggling the
    /// theme from inside the menu both end here.
    pub fn close_menu(&self) {
        self.menu_open.set(false);
    }
}
