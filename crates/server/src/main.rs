use database::db::create_store;
use log::info;
use server::{AppState, app, config::Config, utils::shutdown::shutdown_signal};

#[tokio::main]
async fn main() {
    let config = Config::from_env();
    env_logger::init();

    let store = create_store(&config.data_dir).expect("Failed to load catalog data");
    let app = app(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .unwrap();
    info!("Running axum on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
