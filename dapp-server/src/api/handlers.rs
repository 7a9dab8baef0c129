use axum::{
    extract::{Form, State},
    response::{Html, Redirect},
    Json,
};
use simple_dapp::{render_page, U256, DEMO_DATA, DEMO_NAME};

use super::types::{ChangeOwnerForm, DetailsResponse, SessionResponse};
use super::AppState;
use crate::error::ServerError;

/// GET /
/// Renders the page; a connected session without data gets its one read here
pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let mut session = state.session.lock().await;

    if session.needs_details() {
        session.get_details().await;
    }

    let notice = session.take_notice();
    Html(render_page(&session.view(), notice.as_deref()))
}

/// POST /connect
pub async fn connect_handler(State(state): State<AppState>) -> Redirect {
    state.session.lock().await.connect_account().await;
    Redirect::to("/")
}

/// POST /set-data
pub async fn set_data_handler(State(state): State<AppState>) -> Redirect {
    log::info!("Set data to {}", DEMO_DATA);
    state
        .session
        .lock()
        .await
        .set_data(U256::from(DEMO_DATA))
        .await;
    Redirect::to("/")
}

/// POST /set-name
pub async fn set_name_handler(State(state): State<AppState>) -> Redirect {
    log::info!("Set name to {}", DEMO_NAME);
    state.session.lock().await.set_name(DEMO_NAME).await;
    Redirect::to("/")
}

/// POST /change-owner
pub async fn change_owner_handler(
    State(state): State<AppState>,
    Form(form): Form<ChangeOwnerForm>,
) -> Redirect {
    let mut session = state.session.lock().await;
    session.set_new_owner(form.new_owner);
    session.change_owner().await;
    Redirect::to("/")
}

/// GET /api/session
pub async fn session_handler(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session.lock().await;
    Json(SessionResponse {
        view: session.view(),
        has_wallet: session.has_wallet(),
        has_contract: session.has_contract(),
    })
}

/// GET /api/details
/// Explicit read; answers 409 while no account is connected
pub async fn details_handler(
    State(state): State<AppState>,
) -> Result<Json<DetailsResponse>, ServerError> {
    let mut session = state.session.lock().await;
    if !session.has_contract() {
        return Err(ServerError::NotConnected);
    }

    session.get_details().await;
    Ok(Json(DetailsResponse {
        details: session.details().clone(),
    }))
}

/// GET /health
pub async fn health_handler() -> &'static str {
    "OK"
}
