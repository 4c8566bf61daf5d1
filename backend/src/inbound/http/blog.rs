//! Blog endpoints.
//!
//! ```text
//! GET /api/v1/blog?tag=&category=&limit=
//! GET /api/v1/blog/tags
//! GET /api/v1/blog/{slug}
//! ```

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{BlogPost, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::public_content_header;
use crate::inbound::http::listings::to_json_value;
use crate::inbound::http::schemas::ErrorEnvelopeSchema;
use crate::inbound::http::state::HttpState;

/// Filters for the blog listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BlogQuery {
    /// Exact tag match such as `Wandern`.
    pub tag: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Keep only the newest `limit` posts after filtering.
    pub limit: Option<usize>,
}

/// Blog posts, newest first.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogListResponse {
    /// Matching posts.
    #[schema(value_type = Vec<serde_json::Value>)]
    pub posts: serde_json::Value,
    /// Number of posts returned.
    pub count: usize,
    /// Size of the whole blog.
    pub total: usize,
}

/// Distinct blog tags.
#[derive(Debug, Serialize, ToSchema)]
pub struct BlogTagsResponse {
    /// Tags in alphabetical order.
    pub tags: Vec<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// List blog posts.
#[utoipa::path(
    get,
    path = "/api/v1/blog",
    params(BlogQuery),
    responses((status = 200, description = "Blog posts, newest first", body = BlogListResponse)),
    tags = ["blog"],
    operation_id = "listBlogPosts"
)]
#[get("/blog")]
pub async fn list_blog_posts(
    state: web::Data<HttpState>,
    query: web::Query<BlogQuery>,
) -> ApiResult<HttpResponse> {
    let content = &state.content;
    let mut posts: Vec<&BlogPost> = match non_blank(query.tag.as_deref()) {
        Some(tag) => content.blog_posts_by_tag(tag),
        None => content.blog_posts().iter().collect(),
    };
    if let Some(category) = non_blank(query.category.as_deref()) {
        posts.retain(|post| post.category == category);
    }
    if let Some(limit) = query.limit {
        posts.truncate(limit);
    }

    let response = BlogListResponse {
        count: posts.len(),
        posts: to_json_value(&posts)?,
        total: content.blog_posts().len(),
    };
    Ok(HttpResponse::Ok()
        .insert_header(public_content_header())
        .json(response))
}

/// List distinct blog tags.
#[utoipa::path(
    get,
    path = "/api/v1/blog/tags",
    responses((status = 200, description = "Distinct tags", body = BlogTagsResponse)),
    tags = ["blog"],
    operation_id = "listBlogTags"
)]
#[get("/blog/tags")]
pub async fn list_blog_tags(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let tags = state
        .content
        .blog_tags()
        .into_iter()
        .map(str::to_owned)
        .collect();
    Ok(HttpResponse::Ok()
        .insert_header(public_content_header())
        .json(BlogTagsResponse { tags }))
}

/// Fetch a blog post by slug.
#[utoipa::path(
    get,
    path = "/api/v1/blog/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Blog post", body = serde_json::Value),
        (status = 404, description = "Unknown slug", body = ErrorEnvelopeSchema)
    ),
    tags = ["blog"],
    operation_id = "getBlogPost"
)]
#[get("/blog/{slug}")]
pub async fn get_blog_post(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let slug = path.into_inner();
    let post = state.content.blog_post_by_slug(&slug).ok_or_else(|| {
        Error::not_found(format!("blog post {slug} not found"))
            .with_details(serde_json::json!({ "slug": slug }))
    })?;
    Ok(HttpResponse::Ok()
        .insert_header(public_content_header())
        .json(post))
}
