use bloglist_api::{app, routes::testing, states::AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    // JWT Secret
    let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set!");

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());

    // Create application state
    let state = AppState::new(jwt_secret);

    let mut router = app(state.clone());

    if std::env::var("APP_ENV").as_deref() == Ok("test") {
        info!("Testing router initialized");
        router = router.merge(testing::router(state));
    }

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /health                  - Health check");
    info!("  POST   /api/users               - Create account");
    info!("  GET    /api/users               - List users (owned blogs populated)");
    info!("  GET    /api/users/:id           - Get specific user");
    info!("  POST   /api/login               - Login, returns bearer token");
    info!("  GET    /api/blogs               - List blogs (owner populated)");
    info!("  GET    /api/blogs/:id           - Get specific blog");
    info!("  POST   /api/blogs               - Create blog (auth)");
    info!("  PUT    /api/blogs/:id           - Update like count");
    info!("  DELETE /api/blogs/:id           - Delete blog (auth, owner only)");
    info!("  POST   /api/blogs/:id/comments  - Add comment");

    axum::serve(listener, router).await.expect("Server failed");
}
