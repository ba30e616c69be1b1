//! Inserts one place straight into the database, bypassing the HTTP API.
//!
//! ```text
//! add_place --file karura.json
//! add_place                      # inserts the Hell's Gate sample
//! ```

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use nestor_api::usecases::places::PlacesUseCase;
use nestor_core::{
    domain::value_objects::places::{ContactModel, InsertPlaceModel},
    infra::db::{
        repositories::places::PlaceSqlite,
        sqlite::{schema_manager, sqlite_connection},
    },
};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "add_place", about = "Insert a place into the places database")]
struct Args {
    /// SQLite database file
    #[arg(long, env = "DATABASE_URL", default_value = "nestor.db")]
    database_url: String,

    /// JSON file shaped like the `POST /api/places` body
    #[arg(long)]
    file: Option<PathBuf>,

    /// Seconds allowed for the insert
    #[arg(long, default_value_t = 10)]
    query_timeout: u64,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(error) = nestor_core::observability::init_observability("add_place") {
        eprintln!("Failed to initialize logging: {error}");
        std::process::exit(1);
    }

    if let Err(error) = run(Args::parse()).await {
        error!("add_place failed: {:?}", error);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let insert_place_model = match &args.file {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str::<InsertPlaceModel>(&raw)
                .with_context(|| format!("{} is not a valid place", path.display()))?
        }
        None => sample_place(),
    };

    let sqlite_pool =
        sqlite_connection::establish_connection(&args.database_url, 1, Duration::from_secs(5))?;
    schema_manager::ensure_places_schema(&sqlite_pool)?;

    let place_repository = PlaceSqlite::new(
        Arc::new(sqlite_pool),
        Duration::from_secs(args.query_timeout),
    );
    let places_usecase = PlacesUseCase::new(Arc::new(place_repository));

    let id = places_usecase.create(insert_place_model).await?;
    info!(place_id = id, database_url = %args.database_url, "Inserted place");
    println!("{id}");

    Ok(())
}

fn sample_place() -> InsertPlaceModel {
    InsertPlaceModel {
        name: Some("Hell's Gate".to_string()),
        location: Some("Naivasha".to_string()),
        county: Some("Nakuru".to_string()),
        price: Some(300),
        category: Some("Adventure".to_string()),
        description: Some("Gorges, cycling & geothermal activity".to_string()),
        highlights: Some(strings(&["Gorge walk", "Cycling"])),
        opening_hours: Some("6 AM - 6 PM".to_string()),
        best_time_to_visit: Some("Morning".to_string()),
        difficulty: Some("Moderate".to_string()),
        duration: Some("4-6 hours".to_string()),
        facilities: Some(strings(&["Parking", "Guides"])),
        contact: Some(ContactModel {
            phone: Some("+254722222222".to_string()),
            email: Some("info@hellsgate.ke".to_string()),
        }),
        phone: None,
        email: None,
        images: Some(strings(&["https://example.com/hellsgate.jpg"])),
        featured: Some(true),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestor_core::domain::value_objects::places::PlaceModel;

    #[test]
    fn sample_place_passes_validation() {
        assert!(sample_place().missing_required_fields().is_empty());
    }

    #[test]
    fn args_default_to_sample_and_local_database() {
        let args = Args::try_parse_from(["add_place"]).unwrap();
        assert!(args.file.is_none());
        assert_eq!(args.query_timeout, 10);
    }

    async fn stored_places(database_url: &str) -> Vec<PlaceModel> {
        let sqlite_pool =
            sqlite_connection::establish_connection(database_url, 1, Duration::from_secs(5))
                .unwrap();
        let place_repository = PlaceSqlite::new(Arc::new(sqlite_pool), Duration::from_secs(5));
        PlacesUseCase::new(Arc::new(place_repository))
            .list()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn run_inserts_the_sample_place() {
        let dir = tempfile::tempdir().unwrap();
        let database_url = dir.path().join("nestor.db").to_str().unwrap().to_string();

        run(Args {
            database_url: database_url.clone(),
            file: None,
            query_timeout: 10,
        })
        .await
        .unwrap();

        let places = stored_places(&database_url).await;
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "Hell's Gate");
        assert_eq!(places[0].highlights, strings(&["Gorge walk", "Cycling"]));
        assert_eq!(places[0].phone.as_deref(), Some("+254722222222"));
        assert!(places[0].featured);
    }

    #[tokio::test]
    async fn run_inserts_place_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let database_url = dir.path().join("nestor.db").to_str().unwrap().to_string();
        let file = dir.path().join("karura.json");
        std::fs::write(
            &file,
            r#"{"name": "Karura Forest", "location": "Nairobi", "county": "Nairobi", "featured": 1}"#,
        )
        .unwrap();

        run(Args {
            database_url: database_url.clone(),
            file: Some(file),
            query_timeout: 10,
        })
        .await
        .unwrap();

        let places = stored_places(&database_url).await;
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "Karura Forest");
        assert!(places[0].highlights.is_empty());
        assert!(places[0].featured);
    }

    #[tokio::test]
    async fn run_rejects_file_missing_required_fields() {
        let dir = tempfile::tempdir().unwrap();
        let database_url = dir.path().join("nestor.db").to_str().unwrap().to_string();
        let file = dir.path().join("partial.json");
        std::fs::write(&file, r#"{"name": "Karura Forest"}"#).unwrap();

        let result = run(Args {
            database_url: database_url.clone(),
            file: Some(file),
            query_timeout: 10,
        })
        .await;

        assert!(result.is_err());
        assert!(stored_places(&database_url).await.is_empty());
    }
}
