use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    response::IntoResponse,
    routing::get,
    Router,
};
use axum_extra::{headers, TypedHeader};
use futures::{sink::SinkExt, stream::StreamExt};
use serde::Serialize;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use triangle_core::form::FormState;
use triangle_core::units::AngleUnit;
use uuid::Uuid;

/// Error payload sent to the frontend
#[derive(Serialize)]
struct ErrorMsg<'a> {
    code: &'a str,
    message: &'a str,
    severity: &'a str,
}

/// Diagram anchor payload sent to the frontend
#[derive(Serialize)]
struct PointMsg {
    x: f64,
    y: f64,
}

fn format_error(code: &str, message: &str, severity: &str) -> String {
    let payload = ErrorMsg { code, message, severity };
    let json = serde_json::to_string(&payload).unwrap_or("{}".to_string());
    format!("ERROR_UPDATE:{}", json)
}

fn values_update(form: &FormState) -> String {
    let json = serde_json::to_string(form.values()).unwrap_or("{}".to_string());
    format!("VALUES_UPDATE:{}", json)
}

fn point_update(form: &FormState) -> String {
    let p = form.point();
    let payload = PointMsg { x: p.x, y: p.y };
    let json = serde_json::to_string(&payload).unwrap_or("{}".to_string());
    format!("POINT_UPDATE:{}", json)
}

fn app() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app = app();

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn root() -> &'static str {
    "Hello from Triangle Calculator Backend!"
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    user_agent: Option<TypedHeader<headers::UserAgent>>,
) -> impl IntoResponse {
    if let Some(TypedHeader(agent)) = user_agent {
        info!("WebSocket upgrade from {}", agent.as_str());
    }
    ws.on_upgrade(handle_socket)
}

async fn handle_socket(socket: WebSocket) {
    let (mut sender, mut receiver) = socket.split();

    // One form per connection; nothing survives a reconnect.
    let session = Uuid::new_v4();
    let mut form = FormState::new();
    info!("Client connected (session {})", session);

    // Send the empty form so the frontend starts from a known state
    if sender.send(Message::Text(values_update(&form))).await.is_err() {
        return;
    }
    if sender.send(Message::Text(point_update(&form))).await.is_err() {
        return;
    }

    while let Some(msg) = receiver.next().await {
        let msg = if let Ok(msg) = msg {
            msg
        } else {
            info!("Client disconnected (session {})", session);
            return;
        };

        if let Message::Text(text) = msg {
            info!("Received message: {}", text);

            if text == "CALC" {
                form.calculate();
                if sender.send(Message::Text(values_update(&form))).await.is_err() {
                    return;
                }
                if sender.send(Message::Text(point_update(&form))).await.is_err() {
                    return;
                }

            } else if text == "CLEAR" {
                form.clear();
                info!("Form cleared (session {})", session);
                if sender.send(Message::Text(values_update(&form))).await.is_err() {
                    return;
                }
                if sender.send(Message::Text(point_update(&form))).await.is_err() {
                    return;
                }

            } else if let Some(assignment) = text.strip_prefix("SET:") {
                // Expected format: SET:<field>=<text>; empty text clears
                // the field and garbage becomes NaN, so only an unknown
                // field name is an error.
                match form.apply_assignment(assignment) {
                    Ok(field) => {
                        info!("Set {} = {:?}", field, form.values().get(field));
                        if sender.send(Message::Text(values_update(&form))).await.is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        warn!("Rejected assignment '{}': {}", assignment, e);
                        let _ = sender
                            .send(Message::Text(format_error("UNKNOWN_FIELD", &e.to_string(), "warning")))
                            .await;
                    }
                }

            } else if let Some(unit_str) = text.strip_prefix("UNIT:") {
                match unit_str.parse::<AngleUnit>() {
                    Ok(unit) => {
                        form.set_angle_unit(unit);
                        info!("Angle unit set to {}", unit);
                        if sender.send(Message::Text(values_update(&form))).await.is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        warn!("Rejected unit '{}': {}", unit_str, e);
                        let _ = sender
                            .send(Message::Text(format_error("UNKNOWN_UNIT", &e.to_string(), "warning")))
                            .await;
                    }
                }

            } else {
                warn!("Unrecognized command: {}", text);
                let _ = sender
                    .send(Message::Text(format_error(
                        "UNKNOWN_COMMAND",
                        &format!("Unrecognized command: {}", text),
                        "warning",
                    )))
                    .await;
            }
        }
    }

    info!("Client disconnected (session {})", session);
}
