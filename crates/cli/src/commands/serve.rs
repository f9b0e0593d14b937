use anyhow::{Context, Result};
use axum::{
    Form, Json, Router,
    extract::{FromRequest, Request, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use campaign_core::{CampaignConfig, NewDonation, ValidationError};
use campaign_generator::Template;
use campaign_generator::fragments::{
    DonationSuccessFragment, RecentDonorsFragment, StatsFragment,
};
use campaign_generator::pages::DONATION_COMPLETE_EVENT;
use campaign_store::DonationStore;
use std::path::Path;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Response header htmx reads to fire client-side events
const HX_TRIGGER: &str = "HX-Trigger";

#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<DonationStore>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid form data")]
    MalformedBody,

    #[error("Failed to render response: {0}")]
    Render(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            ApiError::Render(ref e) => {
                tracing::error!(error = %e, "Fragment render failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}

/// An HTML fragment response body
struct Fragment<T>(T);

impl<T: Template> IntoResponse for Fragment<T> {
    fn into_response(self) -> Response {
        let mut body = Vec::new();
        match self.0.render(&mut body) {
            Ok(()) => Html(body).into_response(),
            Err(e) => ApiError::Render(e).into_response(),
        }
    }
}

/// Donation body accepted as either JSON or an urlencoded form
pub struct DonationForm(pub NewDonation);

impl<S> FromRequest<S> for DonationForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let parsed = if is_json {
            Json::<NewDonation>::from_request(req, state)
                .await
                .map(|Json(d)| d)
                .map_err(|e| e.body_text())
        } else {
            Form::<NewDonation>::from_request(req, state)
                .await
                .map(|Form(d)| d)
                .map_err(|e| e.body_text())
        };

        parsed.map(DonationForm).map_err(|reason| {
            tracing::debug!(%reason, "Malformed donation body");
            ApiError::MalformedBody
        })
    }
}

/// Build the application router: donation API plus the generated site
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/api/stats", get(stats_handler))
        .route("/api/recent-donors", get(recent_donors_handler))
        .route("/api/donations", post(create_donation_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server until interrupted
pub async fn run(config: CampaignConfig) -> Result<()> {
    let static_dir = config.paths.output.as_path();
    if !static_dir.join("index.html").exists() {
        tracing::warn!(
            dir = %static_dir.display(),
            "No generated site found, run with --generate first"
        );
    }

    let app = router(AppState::default(), static_dir);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    println!("🚀 Server running on http://{addr}");
    println!("   Static files: {}", static_dir.display());
    println!("   API: GET /api/stats, GET /api/recent-donors, POST /api/donations");
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

async fn stats_handler(State(state): State<AppState>) -> Response {
    Fragment(StatsFragment {
        stats: state.store.stats(),
    })
    .into_response()
}

async fn recent_donors_handler(State(state): State<AppState>) -> Response {
    let donations = state.store.recent();
    Fragment(RecentDonorsFragment {
        donations: &donations,
    })
    .into_response()
}

async fn create_donation_handler(
    State(state): State<AppState>,
    DonationForm(donation): DonationForm,
) -> Result<Response, ApiError> {
    let stored = state.store.record(donation)?;

    Ok((
        [(HX_TRIGGER, DONATION_COMPLETE_EVENT)],
        Fragment(DonationSuccessFragment {
            name: &stored.name,
            amount: stored.amount,
        }),
    )
        .into_response())
}
