use super::{
    page::INDEX_HTML,
    types::{ErrorResponse, HealthResponse, InputRequest, ModelRequest},
};
use crate::{
    Error,
    config::ExportConfig,
    shell::{ShellEvent, ShellHandle, ShellSnapshot},
};
use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Json},
};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub shell: ShellHandle,
    pub export: ExportConfig,
}

type ApiResult<T> = Result<T, (StatusCode, Json<ErrorResponse>)>;

fn error_response(e: Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &e {
        Error::InvalidTransition { .. } | Error::Fsm(_) => StatusCode::CONFLICT,
        Error::UnknownModel { .. } | Error::Export(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!("Request failed: {}", e);
    } else {
        warn!("Request rejected: {}", e);
    }

    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn state(State(state): State<AppState>) -> Json<ShellSnapshot> {
    Json(state.shell.snapshot().await)
}

pub async fn check(State(state): State<AppState>) -> ApiResult<Json<ShellSnapshot>> {
    info!("Received connection check request");
    state.shell.check().await.map(Json).map_err(error_response)
}

pub async fn update_input(
    State(state): State<AppState>,
    Json(request): Json<InputRequest>,
) -> ApiResult<Json<ShellSnapshot>> {
    state
        .shell
        .dispatch(ShellEvent::InputChanged(request.text))
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn load_sample(State(state): State<AppState>) -> ApiResult<Json<ShellSnapshot>> {
    state
        .shell
        .dispatch(ShellEvent::SampleRequested)
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn select_model(
    State(state): State<AppState>,
    Json(request): Json<ModelRequest>,
) -> ApiResult<Json<ShellSnapshot>> {
    info!("Received model selection: {}", request.model);
    state
        .shell
        .dispatch(ShellEvent::ModelSelected(request.model))
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn toggle_preview(State(state): State<AppState>) -> ApiResult<Json<ShellSnapshot>> {
    state
        .shell
        .dispatch(ShellEvent::PreviewToggled)
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn convert(State(state): State<AppState>) -> ApiResult<Json<ShellSnapshot>> {
    info!("Received convert request");
    state.shell.convert().await.map(Json).map_err(error_response)
}

pub async fn download(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let document = state
        .shell
        .export(&state.export.file_name)
        .await
        .map_err(error_response)?;

    info!("Serving {} ({} bytes)", document.file_name, document.content.len());

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "application/x-tex; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", document.file_name),
            ),
        ],
        document.content,
    ))
}
