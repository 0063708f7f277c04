//! Timeline guestbook handlers.

use actix_web::{HttpRequest, HttpResponse, web};

use timeline_core::domain::{PostDraft, PostId, TimelinePost};
use timeline_shared::dto::{
    CreatePostForm, DeletePostResponse, TimelinePostResponse, TimelinePostsResponse,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(post: TimelinePost) -> TimelinePostResponse {
    TimelinePostResponse {
        id: post.id,
        name: post.name,
        email: post.email,
        content: post.content,
        created_at: post.created_at.to_rfc3339(),
    }
}

/// Rate limiting key for a request: the peer IP, or the forwarded client
/// address when the deployment trusts its proxy.
fn origin(req: &HttpRequest, trust_forwarded_for: bool) -> String {
    if trust_forwarded_for {
        let info = req.connection_info();
        if let Some(addr) = info.realip_remote_addr() {
            return addr.to_owned();
        }
    }

    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_owned())
}

/// POST /api/timeline_post
pub async fn create_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<CreatePostForm>,
) -> AppResult<HttpResponse> {
    let origin = origin(&req, state.trust_forwarded_for);

    let form = form.into_inner();
    let draft = PostDraft {
        name: form.name,
        email: form.email,
        content: form.content,
    };

    let post = state.timeline.create(&origin, draft).await?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// GET /api/timeline_post, GET /api/timeline_posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.timeline.list().await?;

    Ok(HttpResponse::Ok().json(TimelinePostsResponse {
        timeline_posts: posts.into_iter().map(to_response).collect(),
    }))
}

/// DELETE /api/timeline_post/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.timeline.delete(id).await?;

    Ok(HttpResponse::Ok().json(DeletePostResponse::new(id)))
}
