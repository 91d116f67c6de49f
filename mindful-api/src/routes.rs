use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, Method},
    routing::{get, post},
    Json, Router,
};
use mindful_app::domain::{ChatRequest, ServiceResponse};
use mindful_app::{AppContext, SERVICE_NAME};
use mindful_errors::AppError;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};

pub fn router(app_context: AppContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(home))
        .route("/initialize", post(initialize))
        .route("/chat", post(chat))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(app_context)
}

async fn home() -> Json<ServiceResponse> {
    Json(ServiceResponse::message(format!("{} is running", SERVICE_NAME)))
}

async fn initialize(State(ctx): State<AppContext>) -> Result<Json<ServiceResponse>, AppError> {
    tracing::info!("Initialize endpoint called");

    ctx.relay_chat.initialize().inspect_err(log_failure)?;

    Ok(Json(ServiceResponse::message(
        "LLM service initialized successfully",
    )))
}

async fn chat(
    State(ctx): State<AppContext>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ServiceResponse>, AppError> {
    tracing::info!("Chat endpoint called");

    let body = body.map_err(|e| {
        tracing::warn!("Unreadable chat body: {}", e);
        AppError::InvalidInput
    })?;
    let request = ChatRequest::parse(&body).inspect_err(log_failure)?;
    let reply = ctx
        .relay_chat
        .execute(&request)
        .await
        .inspect_err(log_failure)?;

    Ok(Json(ServiceResponse::reply(reply)))
}

fn log_failure(err: &AppError) {
    if err.is_client_error() {
        tracing::warn!("Rejected request: {}", err);
    } else {
        tracing::error!("{}", err.user_message());
    }
}
