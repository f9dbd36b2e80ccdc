use axum::{
    http::HeaderValue,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::middleware::bearer_auth_middleware;
use crate::services::Services;

/// Shared by every request. Cloning is cheap: services hold `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    pub max_page_limit: u64,
    /// Pinged by `/health`; absent when running on non-Postgres stores
    pub pool: Option<PgPool>,
}

impl AppState {
    pub fn new(services: Services, max_page_limit: u64, pool: Option<PgPool>) -> Self {
        Self {
            services,
            max_page_limit,
            pool,
        }
    }
}

pub fn app(state: AppState, config: &AppConfig) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_public_routes())
        // Protected API
        .merge(protected_routes(state.clone()))
        .layer(cors_layer(&config.security.cors_origins));

    let router = if config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };

    router.with_state(state)
}

fn auth_public_routes() -> Router<AppState> {
    use crate::handlers::public::auth;

    Router::new()
        .route("/api/v1/auth/signup", post(auth::signup_post))
        .route("/api/v1/auth/signin", post(auth::signin_post))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use crate::handlers::protected::{forms, pool_answers, questions, users};

    Router::new()
        .route("/api/v1/users/:id", get(users::user_get))
        // Forms
        .route("/api/v1/forms", post(forms::form_post).get(forms::form_list))
        .route(
            "/api/v1/forms/:formid",
            get(forms::form_get)
                .patch(forms::form_patch)
                .delete(forms::form_delete),
        )
        // Questions
        .route(
            "/api/v1/forms/:formid/questions",
            post(questions::question_post).get(questions::question_list),
        )
        .route(
            "/api/v1/forms/:formid/questions/:questionid",
            axum::routing::put(questions::question_put).delete(questions::question_delete),
        )
        // Submissions
        .route(
            "/api/v1/forms/:formid/poolsanswer",
            post(pool_answers::pool_answer_post).get(pool_answers::pool_answer_list),
        )
        .route(
            "/api/v1/forms/:formid/poolsanswer/:poolanswerid",
            get(pool_answers::pool_answer_get),
        )
        .route_layer(middleware::from_fn_with_state(state, bearer_auth_middleware))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Quiz API (Rust)",
            "version": version,
            "description": "Forms, questions and pooled answers with owner-scoped access",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "auth": "/api/v1/auth/signup, /api/v1/auth/signin (public - token acquisition)",
                "users": "/api/v1/users/:id (protected)",
                "forms": "/api/v1/forms[/:formid] (protected)",
                "questions": "/api/v1/forms/:formid/questions[/:questionid] (protected)",
                "poolsanswer": "/api/v1/forms/:formid/poolsanswer[/:poolanswerid] (protected)",
            }
        }
    }))
}

/// 503 through `ApiError` when the database does not answer
async fn health(axum::extract::State(state): axum::extract::State<AppState>) -> Result<Json<Value>, ApiError> {
    let database = match state.pool.as_ref() {
        Some(pool) => {
            DatabaseManager::health_check(pool).await?;
            "ok"
        }
        None => "not configured",
    };

    Ok(Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
            "database": database
        }
    })))
}
