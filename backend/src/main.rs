use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    extract::State,
    response::IntoResponse,
    routing::get,
    Router,
};
use futures::{sink::SinkExt, stream::StreamExt};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

use fold_core::geometry::Point;
use fold_core::paper::{CreaseError, Paper};

/// Format a fold error as a JSON message for the frontend
fn format_error(code: &str, message: &str, severity: &str) -> String {
    format!(
        "ERROR_UPDATE:{}",
        json!({
            "code": code,
            "message": message,
            "severity": severity
        })
    )
}

fn format_paper(paper: &Paper) -> String {
    format!(
        "PAPER_UPDATE:{}",
        serde_json::to_string(paper).unwrap_or_else(|_| "{}".to_string())
    )
}

/// A fold request: two previously reported points, selected by the client.
/// Coordinates are in paper space (unit square, y up); any pixel transform
/// is the client's.
#[derive(Debug, Deserialize)]
struct FoldRequest {
    p1: [f64; 2],
    p2: [f64; 2],
}

// Application State
struct AppState {
    paper: Arc<RwLock<Paper>>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let shared_state = Arc::new(AppState {
        paper: Arc::new(RwLock::new(Paper::new())),
    });

    // build our application with a route
    let app = Router::new()
        .route("/", get(root))
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn root() -> &'static str {
    "Hello from the fold backend!"
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let session = Uuid::new_v4();
    info!("client connected, session {}", session);

    let (mut sender, mut receiver) = socket.split();

    // Send the current sheet so the client can draw it.
    {
        let update = {
            let paper = state.paper.read().unwrap();
            format_paper(&paper)
        };
        if sender.send(Message::Text(update)).await.is_err() {
            return;
        }
    }

    while let Some(msg) = receiver.next().await {
        let msg = if let Ok(msg) = msg {
            msg
        } else {
            return;
        };

        if let Message::Text(text) = msg {
            info!("session {}: {}", session, text);
            let reply = handle_command(&text, &state);
            if sender.send(Message::Text(reply)).await.is_err() {
                return;
            }
        }
    }

    info!("client disconnected, session {}", session);
}

/// Apply one text command to the shared sheet and produce the reply.
fn handle_command(text: &str, state: &AppState) -> String {
    if text == "RESET" {
        let mut paper = state.paper.write().unwrap();
        *paper = Paper::new();
        return format_paper(&paper);
    }

    if let Some(body) = text.strip_prefix("FOLD:") {
        let request: FoldRequest = match serde_json::from_str(body) {
            Ok(request) => request,
            Err(e) => {
                warn!("malformed fold request: {}", e);
                return format_error(
                    "BAD_REQUEST",
                    &format!("malformed fold request: {}", e),
                    "error",
                );
            }
        };

        let p1 = Point::new(request.p1[0], request.p1[1]);
        let p2 = Point::new(request.p2[0], request.p2[1]);

        let mut paper = state.paper.write().unwrap();

        // Selection must name points the sheet already knows; the core
        // trusts its inputs, so the check lives here.
        for p in [&p1, &p2] {
            if !paper.contains_point(p) {
                return format_error(
                    "UNKNOWN_POINT",
                    &format!("({}, {}) is not a point of the paper", p.x, p.y),
                    "error",
                );
            }
        }

        return match paper.crease(p1, p2) {
            Ok(folded) => {
                *paper = folded;
                format_paper(&paper)
            }
            Err(err @ CreaseError::Degenerate(_)) => {
                format_error("DEGENERATE_SEGMENT", &err.to_string(), "warning")
            }
            Err(err @ CreaseError::InvalidCrease { .. }) => {
                format_error("INVALID_CREASE", &err.to_string(), "warning")
            }
        };
    }

    format_error(
        "UNKNOWN_COMMAND",
        &format!("unrecognized command: {}", text),
        "error",
    )
}
