use axum::{
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::events::EventBus;
use crate::middleware::{
    metrics_handler, metrics_middleware, rate_limit_middleware, require_admin, require_user_auth,
    trace_id, RateLimiterState,
};
use crate::routes::{
    auth, beepers, cars, health, locations, payments, queue, ratings, reports, users,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub events: EventBus,
    pub rate_limiter: Option<Arc<RateLimiterState>>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    // Rate limiting is enabled when rate_limit_per_minute > 0
    let rate_limiter = if config.security.rate_limit_per_minute > 0 {
        Some(Arc::new(RateLimiterState::new(
            config.security.rate_limit_per_minute,
        )))
    } else {
        None
    };

    let state = AppState {
        pool,
        config: config.clone(),
        events: EventBus::new(),
        rate_limiter,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Authentication routes (public by nature)
    let auth_routes = Router::new()
        .route("/api/v1/auth/signup", post(auth::signup))
        .route("/api/v1/auth/login", post(auth::login));

    // Protected routes (require a valid access token)
    // Middleware order: auth runs first, then rate limiting (keyed by user id)
    let protected_routes = Router::new()
        .route("/api/v1/users/me", get(users::me))
        .route("/api/v1/location", post(locations::insert_location))
        .route("/api/v1/beeper/status", put(beepers::set_beeper_status))
        .route("/api/v1/beeper/queue", get(beepers::get_queue))
        .route("/api/v1/beepers", get(beepers::get_beeper_list))
        .route("/api/v1/queue", post(queue::join_queue))
        .route(
            "/api/v1/queue/:id",
            patch(queue::update_queue_entry).delete(queue::leave_queue),
        )
        .route("/api/v1/reports", post(reports::create_report))
        .route("/api/v1/ratings", post(ratings::create_rating))
        // Rate limiting runs after auth (needs the user id from auth)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        // Auth runs first (outermost layer = runs first)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_user_auth,
        ));

    // Admin routes (require the admin role, checked against the database)
    let admin_routes = Router::new()
        .route("/api/v1/admin/reports", get(reports::list_reports))
        .route(
            "/api/v1/admin/reports/:id",
            get(reports::get_report)
                .patch(reports::update_report)
                .delete(reports::delete_report),
        )
        .route("/api/v1/admin/ratings", get(ratings::list_ratings))
        .route("/api/v1/admin/payments", get(payments::list_payments))
        .route("/api/v1/admin/cars", get(cars::list_cars))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_user_auth,
        ));

    // WebSocket subscriptions authenticate the token query parameter inside
    // the handler, before accepting the upgrade
    let subscription_routes = Router::new()
        .route(
            "/api/v1/location/:user_id/subscribe",
            get(locations::subscribe_location),
        )
        .route(
            "/api/v1/beeper/queue/subscribe",
            get(beepers::subscribe_queue),
        );

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(auth_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .merge(subscription_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware)) // Prometheus metrics
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id)) // Request ID and logging
        .layer(cors)
        .with_state(state)
}
