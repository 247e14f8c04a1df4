//! The four task-list operations: list, add, search, complete.
//!
//! Each handler maps one request plus the request scope to a status code and
//! an optional JSON body. Validation stays local: a missing required field or
//! parameter answers 400 with an empty body and leaves the store untouched.

use hyper::{Body, Request, Response, StatusCode};
use serde_derive::Serialize;
use tracing::{debug, info};
use url::form_urlencoded;

use super::error::ApiError;
use super::scope::RequestScope;
use crate::datastore::TaskStore;
use crate::model::Task;

/// Wire representation of a task. The schema is fixed: one `text` field,
/// no id, field order as declared.
#[derive(Serialize)]
struct TaskRepr<'a> {
    text: &'a str,
}

/// GET /tasks — all tasks in insertion order.
pub async fn task_list<S: TaskStore>(
    scope: &RequestScope<S>,
    _req: Request<Body>,
) -> Result<Response<Body>, ApiError> {
    json_response(&scope.tasks().items())
}

/// POST /tasks — append a task from the form field `text`.
pub async fn task_add<S: TaskStore>(
    scope: &RequestScope<S>,
    req: Request<Body>,
) -> Result<Response<Body>, ApiError> {
    let fields = form_fields(req).await?;
    let text = match form_value(&fields, "text") {
        Some(text) if !text.is_empty() => text,
        _ => return Ok(status_only(StatusCode::BAD_REQUEST)),
    };

    let id = scope.tasks().add(text.to_string());
    debug!(id = %id, "task added");

    Ok(status_only(StatusCode::NO_CONTENT))
}

/// GET /tasks?text=<substr> — tasks whose text contains the query substring.
pub async fn task_search<S: TaskStore>(
    scope: &RequestScope<S>,
    req: Request<Body>,
) -> Result<Response<Body>, ApiError> {
    let query: Vec<(String, String)> =
        form_urlencoded::parse(req.uri().query().unwrap_or("").as_bytes())
            .into_owned()
            .collect();
    let needle = match form_value(&query, "text") {
        Some(needle) => needle,
        None => return Ok(status_only(StatusCode::BAD_REQUEST)),
    };

    json_response(&scope.tasks().search(needle))
}

/// POST /tasks/complete — remove the task named by the form field `id`.
pub async fn task_complete<S: TaskStore>(
    scope: &RequestScope<S>,
    req: Request<Body>,
) -> Result<Response<Body>, ApiError> {
    let fields = form_fields(req).await?;
    let id = match form_value(&fields, "id") {
        Some(id) => id,
        None => return Ok(status_only(StatusCode::BAD_REQUEST)),
    };

    match scope.tasks().complete(id) {
        Ok(task) => {
            info!(id = %task.id, "task completed");
            Ok(status_only(StatusCode::NO_CONTENT))
        }
        Err(_) => Ok(status_only(StatusCode::NOT_FOUND)),
    }
}

/// An empty-bodied response. 4xx discrimination is by status code alone.
pub fn status_only(status: StatusCode) -> Response<Body> {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    response
}

fn json_response(tasks: &[Task]) -> Result<Response<Body>, ApiError> {
    let reprs: Vec<TaskRepr> = tasks.iter().map(|t| TaskRepr { text: &t.text }).collect();
    let body = serde_json::to_vec(&reprs)?;
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))?)
}

async fn form_fields(req: Request<Body>) -> Result<Vec<(String, String)>, ApiError> {
    let body = hyper::body::to_bytes(req.into_body()).await?;
    Ok(form_urlencoded::parse(&body).into_owned().collect())
}

/// The value for a key, only if the key itself is present.
fn form_value<'a>(fields: &'a [(String, String)], key: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
