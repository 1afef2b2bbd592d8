use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use vehicle_rental::config::environment::EnvironmentConfig;
use vehicle_rental::database::connection::{create_pool, mask_database_url, run_migrations};
use vehicle_rental::middleware::cors::cors_middleware;
use vehicle_rental::routes::create_api_router;
use vehicle_rental::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    let default_level = if config.is_development() {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();

    info!("🚗 Locadora de Vehículos - API de alquiler");
    info!("==========================================");

    // Inicializar base de datos
    info!("🔌 Conectando a {}", mask_database_url(&config.database_url));
    let pool = match create_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    run_migrations(&pool).await?;
    info!("✅ Migraciones aplicadas");

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .merge(create_api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware(&config.cors_origins))
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🏭 Fabricantes:");
    info!("   GET|POST /api/manufacturers, GET|PUT|DELETE /api/manufacturers/:id");
    info!("🏷️ Categorías:");
    info!("   GET|POST /api/vehicle-categories, GET|PUT|DELETE /api/vehicle-categories/:id");
    info!("👤 Clientes:");
    info!("   GET|POST /api/customers, GET|PUT|DELETE /api/customers/:id");
    info!("🚙 Vehículos:");
    info!("   GET|POST /api/vehicles, GET|PUT|DELETE /api/vehicles/:id");
    info!("   GET  /api/vehicles/available/category/:category_id - Disponibles por categoría");
    info!("   GET  /api/vehicles/rented/manufacturer/:manufacturer_id - Alquilados por fabricante");
    info!("📋 Alquileres:");
    info!("   GET|POST /api/rentals, GET|PUT|DELETE /api/rentals/:id");
    info!("   GET  /api/rentals/active/customer/:customer_id - Activos por cliente");
    info!("   GET  /api/rentals/period?start=&end= - Por período de retirada");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de health check
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "vehicle-rental",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
