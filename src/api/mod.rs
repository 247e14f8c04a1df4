mod error;
mod handlers;
mod scope;

pub use error::ApiError;
pub use scope::RequestScope;

use std::convert::Infallible;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Result;
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Method, Request, Response, StatusCode};
use tracing::{error, info, span, Instrument, Level};
use uuid::Uuid;

use crate::config::Listen;
use crate::datastore::TaskStore;
use crate::model::CorrelationId;

pub struct Server<S> {
    config: Listen,
    scope: RequestScope<S>,
}

impl<S> Server<S>
where
    S: TaskStore,
{
    pub fn new(config: Listen, scope: RequestScope<S>) -> Server<S> {
        return Server { config, scope };
    }

    pub async fn start(self) -> Result<()> {
        info!("Starting api...");
        let hostaddr = self
            .config
            .host
            .as_deref()
            .and_then(|host| host.parse().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        let saddr = SocketAddr::new(hostaddr, self.config.port);

        let scope = self.scope.clone();
        let make_svc = make_service_fn(move |_conn| {
            let scope = scope.clone();
            async move {
                Ok::<_, Infallible>(service_fn(move |req| {
                    let scope = scope.clone();
                    async move { Ok::<_, Infallible>(route(scope, req).await) }
                }))
            }
        });

        match hyper::Server::try_bind(&saddr) {
            Ok(builder) => match builder.serve(make_svc).await {
                Ok(_) => (),
                Err(err) => {
                    error!(reason=%err.to_string(), "API terminated.");
                    anyhow::bail!("API terminated.")
                }
            },
            Err(err) => {
                error!(reason=%err.to_string(), "Unable to start API.");
                anyhow::bail!("Unable to start API.")
            }
        }
        Ok(())
    }
}

/// Method/path dispatch to the handler functions.
///
/// `GET /tasks` with a query string goes to search so that a request with the
/// wrong parameter name still reaches search's own validation; without one it
/// is a plain list. Handler failures (body read, JSON encode) answer 500 with
/// an empty body, never partial JSON.
pub(crate) async fn route<S: TaskStore>(
    scope: RequestScope<S>,
    req: Request<Body>,
) -> Response<Body> {
    let correlation_id = CorrelationId::from_header_map(req.headers())
        .unwrap_or_else(|_| CorrelationId::from(Uuid::new_v4()));
    let request_span = span!(
        Level::INFO,
        "request",
        correlation_id = %correlation_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let outcome = async {
        match (req.method(), req.uri().path()) {
            (&Method::GET, "/tasks") if req.uri().query().is_some() => {
                handlers::task_search(&scope, req).await
            }
            (&Method::GET, "/tasks") => handlers::task_list(&scope, req).await,
            (&Method::POST, "/tasks") => handlers::task_add(&scope, req).await,
            (&Method::POST, "/tasks/complete") => handlers::task_complete(&scope, req).await,
            _ => Ok(handlers::status_only(StatusCode::NOT_FOUND)),
        }
    }
    .instrument(request_span)
    .await;

    match outcome {
        Ok(response) => response,
        Err(err) => {
            error!(correlation_id = %correlation_id, reason = %err, "request failed");
            handlers::status_only(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
