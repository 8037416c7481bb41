//! HTTP front for the pipeline structure check.
//!
//! Two routes: `GET /` answers a ping so the editor can probe for the
//! backend, and `POST /pipelines/parse` runs the structural check over a
//! submitted document. CORS is locked to the single origin the editor is
//! served from, since the browser sends the request with credentials.

use std::net::SocketAddr;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use flowstack::service::{self, PipelineRequest};
use flowstack::validate::Verdict;

#[derive(Debug, Parser)]
#[command(name = "flowstack-server", about = "Structure checks for editor pipelines over HTTP")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "FLOWSTACK_BIND", default_value = "127.0.0.1:8000")]
    bind: SocketAddr,

    /// Origin the editor is served from. Credentialed CORS does not allow a
    /// wildcard here.
    #[arg(long, env = "FLOWSTACK_ALLOW_ORIGIN", default_value = "http://localhost:3000")]
    allow_origin: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flowstack_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cors = CorsLayer::new()
        .allow_origin(args.allow_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let app = Router::new()
        .route("/", get(ping))
        .route("/pipelines/parse", post(parse_pipeline))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = TcpListener::bind(args.bind).await?;
    tracing::info!(addr = %args.bind, origin = %args.allow_origin, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn ping() -> Json<Value> {
    Json(json!({ "Ping": "Pong" }))
}

async fn parse_pipeline(Json(request): Json<PipelineRequest>) -> Json<Verdict> {
    let verdict = service::analyze(&request);
    tracing::info!(
        num_nodes = verdict.num_nodes,
        num_edges = verdict.num_edges,
        is_dag = verdict.is_dag,
        "pipeline analyzed"
    );
    Json(verdict)
}
