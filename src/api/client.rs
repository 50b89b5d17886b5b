//! HTTP API Client
//!
//! Functions for reading post documents from the hosted document store.

use gloo_net::http::Request;

use crate::state::global::Post;

/// Default document store base URL
pub const DEFAULT_API_BASE: &str = "https://api.mindchit.app/v1";

/// Collection holding the blog's posts
pub const POSTS_COLLECTION: &str = "psychology-posts";

/// Local storage key for overriding the store base URL
const API_URL_KEY: &str = "mindchit_api_url";

/// Get the store base URL from local storage or use the default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct DocumentListResponse {
    pub documents: Vec<PostDocument>,
}

/// A post as stored, before display mapping.
#[derive(Debug, serde::Deserialize)]
pub struct PostDocument {
    /// Store-assigned document key
    pub id: String,
    /// Either an epoch-millisecond timestamp or an already-formatted string;
    /// older documents may omit it entirely
    #[serde(default)]
    pub date: Option<DateValue>,
    pub title: String,
    pub summary: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// The stored `date` field in either of its wire forms.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Timestamp(i64),
    Text(String),
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

impl PostDocument {
    /// Converts the stored document into its display form. Everything except
    /// the date carries over unchanged.
    pub fn into_post(self) -> Post {
        Post {
            id: self.id,
            date: display_date(self.date.as_ref()),
            title: self.title,
            summary: self.summary,
            image_url: self.image_url,
        }
    }
}

/// Renders a stored date field for display.
///
/// Millisecond timestamps become "Mon D, YYYY" (e.g. "Mar 3, 2024"); plain
/// strings pass through unchanged; a missing field renders as empty.
pub fn display_date(date: Option<&DateValue>) -> String {
    match date {
        Some(DateValue::Timestamp(millis)) => chrono::DateTime::from_timestamp_millis(*millis)
            .map(|dt| dt.format("%b %-d, %Y").to_string())
            .unwrap_or_default(),
        Some(DateValue::Text(raw)) => raw.clone(),
        None => String::new(),
    }
}

/// URL for the full post collection, newest first.
fn posts_url(api_base: &str) -> String {
    format!(
        "{}/collections/{}/documents?orderBy=date&direction=desc",
        api_base, POSTS_COLLECTION
    )
}

// ============ API Functions ============

/// Fetch all posts, ordered by date descending.
pub async fn fetch_posts() -> Result<Vec<Post>, String> {
    let api_base = get_api_base();

    let response = Request::get(&posts_url(&api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
            code: None,
        });
        return Err(error.error);
    }

    let result: DocumentListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    // Query order is the display order: newest first
    Ok(result
        .documents
        .into_iter()
        .map(PostDocument::into_post)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_date_formats_millisecond_timestamps() {
        // 2024-03-03T00:00:00Z
        let date = DateValue::Timestamp(1_709_424_000_000);
        assert_eq!(display_date(Some(&date)), "Mar 3, 2024");
    }

    #[test]
    fn display_date_keeps_single_digit_days_unpadded() {
        // 2023-12-25T12:00:00Z vs 2024-01-05T12:00:00Z
        let christmas = DateValue::Timestamp(1_703_505_600_000);
        assert_eq!(display_date(Some(&christmas)), "Dec 25, 2023");
        let january = DateValue::Timestamp(1_704_456_000_000);
        assert_eq!(display_date(Some(&january)), "Jan 5, 2024");
    }

    #[test]
    fn display_date_passes_plain_strings_through() {
        let date = DateValue::Text("sometime last winter".to_string());
        assert_eq!(display_date(Some(&date)), "sometime last winter");
    }

    #[test]
    fn display_date_renders_missing_fields_empty() {
        assert_eq!(display_date(None), "");
    }

    #[test]
    fn documents_decode_with_wire_field_names() {
        let json = r#"{
            "documents": [
                {"id": "p2", "date": 1709424000000, "title": "Two", "summary": "s2", "imageUrl": "https://img.example/2.jpg"},
                {"id": "p1", "date": "Mar 1, 2024", "title": "One", "summary": "s1", "imageUrl": "https://img.example/1.jpg"},
                {"id": "p0", "title": "Zero", "summary": "s0", "imageUrl": "https://img.example/0.jpg"}
            ]
        }"#;

        let response: DocumentListResponse = serde_json::from_str(json).unwrap();
        let posts: Vec<Post> = response
            .documents
            .into_iter()
            .map(PostDocument::into_post)
            .collect();

        assert_eq!(posts.len(), 3);
        // Query order survives the mapping: newest first
        assert_eq!(posts[0].id, "p2");
        assert_eq!(posts[1].id, "p1");
        assert_eq!(posts[2].id, "p0");

        // Each date form renders per its rule
        assert_eq!(posts[0].date, "Mar 3, 2024");
        assert_eq!(posts[1].date, "Mar 1, 2024");
        assert_eq!(posts[2].date, "");

        // Remaining fields carry over unchanged
        assert_eq!(posts[0].title, "Two");
        assert_eq!(posts[0].summary, "s2");
        assert_eq!(posts[0].image_url, "https://img.example/2.jpg");

        // The mapping introduces no duplicate identifiers
        let mut ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn error_bodies_decode_with_optional_code() {
        let with_code: ApiError =
            serde_json::from_str(r#"{"error": "not found", "code": "404"}"#).unwrap();
        assert_eq!(with_code.error, "not found");
        assert_eq!(with_code.code.as_deref(), Some("404"));

        let bare: ApiError = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert_eq!(bare.error, "boom");
        assert!(bare.code.is_none());
    }

    #[test]
    fn posts_url_targets_the_ordered_collection() {
        assert_eq!(
            posts_url("https://api.mindchit.app/v1"),
            "https://api.mindchit.app/v1/collections/psychology-posts/documents?orderBy=date&direction=desc"
        );
    }
}
