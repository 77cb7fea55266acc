//! DummyJSON news posts.
//!
//! [DummyJSON](https://dummyjson.com) serves a paged `posts` collection and
//! per-post detail documents. Headlines come from the page; the chained mode
//! additionally pulls one detail document for its snippet.

use tracing::{info, instrument};
use url::form_urlencoded;

use crate::fetch::{self, FetchError};
use crate::models::{Post, PostFeed};

/// DummyJSON API base URL.
pub const DUMMYJSON_API_BASE: &str = "https://dummyjson.com";

/// Build the posts listing URL for a page size.
pub fn posts_url(base: &str, limit: usize) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("limit", &limit.to_string())
        .finish();
    format!("{}/posts?{}", base.trim_end_matches('/'), query)
}

/// Build the detail URL for a single post.
pub fn post_url(base: &str, id: u64) -> String {
    format!("{}/posts/{}", base.trim_end_matches('/'), id)
}

/// Fetch the latest posts page.
#[instrument(level = "info", skip(base))]
pub async fn latest(base: &str, limit: usize) -> Result<PostFeed, FetchError> {
    let url = posts_url(base, limit);
    let feed: PostFeed = fetch::decode(fetch::fetch_json(&url).await?)?;
    info!(count = feed.posts.len(), "fetched news posts");
    Ok(feed)
}

/// Fetch the detail document for one post.
#[instrument(level = "info", skip(base))]
pub async fn detail(base: &str, id: u64) -> Result<Post, FetchError> {
    let url = post_url(base, id);
    let post: Post = fetch::decode(fetch::fetch_json(&url).await?)?;
    info!(id = post.id, bytes = post.body.len(), "fetched post detail");
    Ok(post)
}
