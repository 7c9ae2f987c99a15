use spots_api::app::create_app;
use spots_api::config::{apply_env_overrides, load_config, save_default_config};
use spots_api::constants::{CONFIG_PATH, DATA_DIR};
use spots_api::database::{create_pool, fetch_count, init_database, queries};
use spots_api::importer::import_spots_file;
use spots_api::logging::{init_logging, install_panic_hook};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{error, info};

fn import_path() -> Option<PathBuf> {
    let mut args = std::env::args().skip_while(|arg| arg != "--import");
    args.next()?;
    args.next().map(PathBuf::from)
}

#[tokio::main]
async fn main() {
    if std::env::args().any(|arg| arg == "--init-config") {
        match save_default_config(&CONFIG_PATH) {
            Ok(_) => {
                println!("Default configuration saved to {:?}", *CONFIG_PATH);
                std::process::exit(0);
            }
            Err(e) => {
                eprintln!("Failed to save default configuration: {}", e);
                std::process::exit(1);
            }
        }
    }

    // Initialize logging
    init_logging();
    install_panic_hook();

    // Load configuration
    let mut config = load_config(&CONFIG_PATH);
    if let Err(e) = apply_env_overrides(&mut config) {
        error!("{}", e);
        std::process::exit(1);
    }

    std::fs::create_dir_all(&*DATA_DIR).ok();

    // Create database pool
    let database_path = config.database.resolved_path();
    let pool = create_pool(&database_path, config.database.max_connections)
        .expect("Failed to create database pool");

    // Initialize database schema
    {
        let conn = pool.get().expect("Failed to get connection");
        init_database(&conn).expect("Failed to initialize database");
    }

    if let Some(path) = import_path() {
        let mut conn = pool.get().expect("Failed to get connection");
        match import_spots_file(&mut conn, &path) {
            Ok(_) => std::process::exit(0),
            Err(e) => {
                error!("Import of {:?} failed: {}", path, e);
                std::process::exit(1);
            }
        }
    }

    {
        let conn = pool.get().expect("Failed to get connection");
        let total = fetch_count(&conn, queries::spots::COUNT).expect("Failed to count spots");
        info!("Serving {} spots from {:?}", total, database_path);
    }

    // Create the application
    let app = create_app(pool);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .expect("Invalid server address");
    info!("Starting spots API on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server failed");
}
