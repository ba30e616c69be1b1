use nestor_core::domain::{
    repositories::places::PlaceRepository,
    value_objects::places::{InsertPlaceModel, PlaceModel, UpdatePlaceModel},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),

    #[error("invalid required fields: {}", .0.join(", "))]
    InvalidRequiredFields(Vec<&'static str>),

    #[error("no fields to update")]
    NoFieldsToUpdate,

    #[error("place {0} not found")]
    NotFound(i64),

    #[error("storage failure")]
    Storage(#[source] anyhow::Error),
}

pub struct PlacesUseCase<T>
where
    T: PlaceRepository + Send + Sync + 'static,
{
    place_repository: Arc<T>,
}

impl<T> PlacesUseCase<T>
where
    T: PlaceRepository + Send + Sync + 'static,
{
    pub fn new(place_repository: Arc<T>) -> Self {
        Self { place_repository }
    }

    pub async fn create(&self, insert_place_model: InsertPlaceModel) -> Result<i64, PlacesError> {
        let missing = insert_place_model.missing_required_fields();
        if !missing.is_empty() {
            warn!(?missing, "places: create rejected, missing required fields");
            return Err(PlacesError::MissingRequiredFields(missing));
        }

        let insert_place_entity = insert_place_model.into_entity();
        let id = self
            .place_repository
            .insert(insert_place_entity)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "places: failed to insert place");
                PlacesError::Storage(err)
            })?;

        info!(place_id = id, "places: place created");
        Ok(id)
    }

    pub async fn list(&self) -> Result<Vec<PlaceModel>, PlacesError> {
        let places = self.place_repository.list().await.map_err(|err| {
            error!(db_error = ?err, "places: failed to list places");
            PlacesError::Storage(err)
        })?;

        Ok(places.into_iter().map(PlaceModel::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<PlaceModel, PlacesError> {
        let place = self.place_repository.find_by_id(id).await.map_err(|err| {
            error!(place_id = id, db_error = ?err, "places: failed to load place");
            PlacesError::Storage(err)
        })?;

        place
            .map(PlaceModel::from)
            .ok_or(PlacesError::NotFound(id))
    }

    /// Applies only the fields present in `update_place_model`.
    pub async fn update(
        &self,
        id: i64,
        update_place_model: UpdatePlaceModel,
    ) -> Result<i64, PlacesError> {
        let invalid = update_place_model.invalid_required_fields();
        if !invalid.is_empty() {
            warn!(place_id = id, ?invalid, "places: update rejected, invalid required fields");
            return Err(PlacesError::InvalidRequiredFields(invalid));
        }

        let update_place_entity = update_place_model.into_entity();
        if update_place_entity.is_empty() {
            warn!(place_id = id, "places: update rejected, no fields to update");
            return Err(PlacesError::NoFieldsToUpdate);
        }

        let matched = self
            .place_repository
            .update(id, update_place_entity)
            .await
            .map_err(|err| {
                error!(place_id = id, db_error = ?err, "places: failed to update place");
                PlacesError::Storage(err)
            })?;

        if matched == 0 {
            return Err(PlacesError::NotFound(id));
        }

        info!(place_id = id, "places: place updated");
        Ok(id)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<i64, PlacesError> {
        let removed = self.place_repository.delete(id).await.map_err(|err| {
            error!(place_id = id, db_error = ?err, "places: failed to delete place");
            PlacesError::Storage(err)
        })?;

        if removed == 0 {
            return Err(PlacesError::NotFound(id));
        }

        info!(place_id = id, "places: place deleted");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use nestor_core::domain::{
        entities::places::{PlaceEntity, UpdatePlaceEntity},
        repositories::places::MockPlaceRepository,
    };
    use serde_json::json;

    fn sample_entity(id: i64) -> PlaceEntity {
        PlaceEntity {
            id,
            name: "Hell's Gate".to_string(),
            location: "Naivasha".to_string(),
            county: "Nakuru".to_string(),
            price: Some(300),
            category: Some("Adventure".to_string()),
            description: None,
            highlights: Some(r#"["Gorge walk","Cycling"]"#.to_string()),
            opening_hours: None,
            best_time_to_visit: None,
            difficulty: None,
            duration: None,
            facilities: Some("[]".to_string()),
            phone: None,
            email: None,
            images: Some("[]".to_string()),
            featured: Some(1),
            rating: Some(0.0),
            review_count: Some(0),
        }
    }

    fn insert_model(body: serde_json::Value) -> InsertPlaceModel {
        serde_json::from_value(body).unwrap()
    }

    fn update_model(body: serde_json::Value) -> UpdatePlaceModel {
        serde_json::from_value(body).unwrap()
    }

    #[tokio::test]
    async fn create_rejects_missing_fields_without_touching_storage() {
        let mut place_repo = MockPlaceRepository::new();
        place_repo.expect_insert().never();

        let usecase = PlacesUseCase::new(Arc::new(place_repo));
        let err = usecase
            .create(insert_model(json!({ "name": "Karura Forest", "county": " " })))
            .await
            .unwrap_err();

        match err {
            PlacesError::MissingRequiredFields(fields) => {
                assert_eq!(fields, vec!["location", "county"])
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_inserts_trimmed_and_encoded_row() {
        let mut place_repo = MockPlaceRepository::new();
        place_repo
            .expect_insert()
            .withf(|entity| {
                entity.name == "Hell's Gate"
                    && entity.highlights == r#"["Gorge walk","Cycling"]"#
                    && entity.featured == 1
                    && entity.price == 300
            })
            .times(1)
            .returning(|_| Box::pin(async { Ok(5) }));

        let usecase = PlacesUseCase::new(Arc::new(place_repo));
        let id = usecase
            .create(insert_model(json!({
                "name": " Hell's Gate ",
                "location": "Naivasha",
                "county": "Nakuru",
                "price": 300,
                "highlights": ["Gorge walk", "Cycling"],
                "featured": true
            })))
            .await
            .unwrap();

        assert_eq!(id, 5);
    }

    #[tokio::test]
    async fn create_surfaces_storage_failures() {
        let mut place_repo = MockPlaceRepository::new();
        place_repo
            .expect_insert()
            .returning(|_| Box::pin(async { Err(anyhow::anyhow!("disk I/O error")) }));

        let usecase = PlacesUseCase::new(Arc::new(place_repo));
        let err = usecase
            .create(insert_model(json!({
                "name": "Ngong Hills",
                "location": "Ngong",
                "county": "Kajiado"
            })))
            .await
            .unwrap_err();

        assert!(matches!(err, PlacesError::Storage(_)));
    }

    #[tokio::test]
    async fn list_surfaces_timeouts_as_storage_failures() {
        let mut place_repo = MockPlaceRepository::new();
        place_repo.expect_list().returning(|| {
            Box::pin(async { Err(anyhow::anyhow!("places list timed out after 1s")) })
        });

        let usecase = PlacesUseCase::new(Arc::new(place_repo));
        let err = usecase.list().await.unwrap_err();

        assert!(matches!(err, PlacesError::Storage(_)));
    }

    #[tokio::test]
    async fn get_by_id_decodes_row() {
        let mut place_repo = MockPlaceRepository::new();
        place_repo
            .expect_find_by_id()
            .with(eq(9))
            .returning(|id| {
                let entity = sample_entity(id);
                Box::pin(async move { Ok(Some(entity)) })
            });

        let usecase = PlacesUseCase::new(Arc::new(place_repo));
        let place = usecase.get_by_id(9).await.unwrap();

        assert_eq!(place.id, 9);
        assert_eq!(place.highlights, vec!["Gorge walk", "Cycling"]);
        assert!(place.featured);
        assert_eq!(place.price, 300);
    }

    #[tokio::test]
    async fn get_by_id_reports_missing_place() {
        let mut place_repo = MockPlaceRepository::new();
        place_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = PlacesUseCase::new(Arc::new(place_repo));
        let err = usecase.get_by_id(404).await.unwrap_err();

        assert!(matches!(err, PlacesError::NotFound(404)));
    }

    #[tokio::test]
    async fn list_keeps_repository_order_and_falls_back_on_bad_lists() {
        let mut place_repo = MockPlaceRepository::new();
        place_repo.expect_list().returning(|| {
            let mut newest = sample_entity(3);
            newest.facilities = Some("{broken".to_string());
            let rows = vec![newest, sample_entity(2), sample_entity(1)];
            Box::pin(async move { Ok(rows) })
        });

        let usecase = PlacesUseCase::new(Arc::new(place_repo));
        let places = usecase.list().await.unwrap();

        let ids: Vec<i64> = places.iter().map(|place| place.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert!(places[0].facilities.is_empty());
    }

    #[tokio::test]
    async fn update_without_fields_is_rejected() {
        let mut place_repo = MockPlaceRepository::new();
        place_repo.expect_update().never();

        let usecase = PlacesUseCase::new(Arc::new(place_repo));
        let err = usecase.update(1, update_model(json!({}))).await.unwrap_err();

        assert!(matches!(err, PlacesError::NoFieldsToUpdate));
    }

    #[tokio::test]
    async fn update_with_blank_name_is_rejected() {
        let mut place_repo = MockPlaceRepository::new();
        place_repo.expect_update().never();

        let usecase = PlacesUseCase::new(Arc::new(place_repo));
        let err = usecase
            .update(1, update_model(json!({ "name": "  " })))
            .await
            .unwrap_err();

        match err {
            PlacesError::InvalidRequiredFields(fields) => assert_eq!(fields, vec!["name"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_sends_only_present_fields() {
        let expected = UpdatePlaceEntity {
            name: Some("Lake Naivasha".to_string()),
            description: Some(None),
            ..Default::default()
        };

        let mut place_repo = MockPlaceRepository::new();
        place_repo
            .expect_update()
            .with(eq(6), eq(expected))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(1) }));

        let usecase = PlacesUseCase::new(Arc::new(place_repo));
        let id = usecase
            .update(
                6,
                update_model(json!({ "name": " Lake Naivasha", "description": null })),
            )
            .await
            .unwrap();

        assert_eq!(id, 6);
    }

    #[tokio::test]
    async fn update_of_unknown_place_is_not_found() {
        let mut place_repo = MockPlaceRepository::new();
        place_repo
            .expect_update()
            .returning(|_, _| Box::pin(async { Ok(0) }));

        let usecase = PlacesUseCase::new(Arc::new(place_repo));
        let err = usecase
            .update(77, update_model(json!({ "price": 100 })))
            .await
            .unwrap_err();

        assert!(matches!(err, PlacesError::NotFound(77)));
    }

    #[tokio::test]
    async fn delete_reports_missing_place() {
        let mut place_repo = MockPlaceRepository::new();
        place_repo
            .expect_delete()
            .with(eq(3))
            .returning(|_| Box::pin(async { Ok(0) }));

        let usecase = PlacesUseCase::new(Arc::new(place_repo));
        let err = usecase.delete_by_id(3).await.unwrap_err();

        assert!(matches!(err, PlacesError::NotFound(3)));
    }

    #[tokio::test]
    async fn delete_returns_removed_id() {
        let mut place_repo = MockPlaceRepository::new();
        place_repo
            .expect_delete()
            .returning(|_| Box::pin(async { Ok(1) }));

        let usecase = PlacesUseCase::new(Arc::new(place_repo));
        assert_eq!(usecase.delete_by_id(3).await.unwrap(), 3);
    }
}
