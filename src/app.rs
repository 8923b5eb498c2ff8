use axum::{extract::DefaultBodyLimit, http::HeaderValue, middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config;
use crate::handlers::{protected, public};
use crate::middleware::jwt_auth_middleware;

/// Build the full router: public routes, token-protected routes and the
/// global layers driven by configuration.
pub fn app() -> Router {
    let settings = config::config();

    let router = Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .merge(auth_public_routes())
        // Protected API
        .merge(
            Router::new()
                .merge(user_routes())
                .merge(university_routes())
                .merge(faculty_routes())
                .merge(major_routes())
                .route_layer(middleware::from_fn(jwt_auth_middleware)),
        )
        .layer(DefaultBodyLimit::max(settings.api.max_request_size_bytes));

    let router = if settings.security.enable_cors {
        router.layer(cors_layer(&settings.security.cors_origins))
    } else {
        router
    };

    if settings.api.enable_request_logging {
        router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    } else {
        router
    }
}

/// Permissive CORS in development or when no origins are configured
fn cors_layer(origins: &[String]) -> CorsLayer {
    if crate::is_development!() || origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

fn auth_public_routes() -> Router {
    use axum::routing::post;

    Router::new()
        .route("/api/auth/test", get(public::ping))
        .route("/api/auth/register", post(public::register_post))
        .route("/api/auth/login", post(public::login_post))
}

fn user_routes() -> Router {
    use axum::routing::{delete, post, put};
    use protected::auth;

    Router::new()
        .route("/api/auth/users", get(auth::user_list))
        .route("/api/auth/users/:id", delete(auth::user_delete))
        .route("/api/auth/change-password", put(auth::session_change_password))
        .route("/api/auth/logout", post(auth::session_logout))
}

fn university_routes() -> Router {
    use protected::universities;

    Router::new()
        .route(
            "/api/auth/universities",
            get(universities::list).post(universities::create),
        )
        .route(
            "/api/auth/universities/:id",
            axum::routing::put(universities::update).delete(universities::delete),
        )
}

fn faculty_routes() -> Router {
    use protected::faculties;

    Router::new()
        .route(
            "/api/auth/faculties",
            get(faculties::list)
                .post(faculties::create)
                .delete(faculties::delete),
        )
        // GET addresses a university by name, PUT a faculty by id
        .route(
            "/api/auth/faculties/:key",
            get(faculties::list_by_university).put(faculties::update),
        )
}

fn major_routes() -> Router {
    use axum::routing::post;
    use protected::majors;

    Router::new()
        .route("/api/auth/majors", post(majors::create))
        .route(
            "/api/auth/majors/:university_name/:faculty_name",
            get(majors::list),
        )
        .route(
            "/api/auth/majors/:university_name/:faculty_name/:major_name",
            axum::routing::put(majors::update).delete(majors::delete),
        )
}
