use tracing::error;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(error) = nestor_core::observability::init_observability("nestor-api") {
        eprintln!("Failed to initialize logging: {error}");
        std::process::exit(1);
    }

    if let Err(error) = nestor_api::run().await {
        error!("Backend exited with error: {:?}", error);
        std::process::exit(1);
    }
}
