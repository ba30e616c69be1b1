use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::places::{InsertPlaceEntity, PlaceEntity, UpdatePlaceEntity},
    value_objects::{
        flag::{deserialize_flag, deserialize_present_flag},
        presence::deserialize_present,
        text_list::{decode_text_list, encode_text_list},
    },
};

pub const REQUIRED_FIELDS: [&str; 3] = ["name", "location", "county"];

/// A place as served to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceModel {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub county: String,
    pub price: i64,
    pub category: Option<String>,
    pub description: Option<String>,
    pub highlights: Vec<String>,
    pub opening_hours: Option<String>,
    pub best_time_to_visit: Option<String>,
    pub difficulty: Option<String>,
    pub duration: Option<String>,
    pub facilities: Vec<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub images: Vec<String>,
    pub featured: bool,
    pub rating: f64,
    pub review_count: i64,
}

impl From<PlaceEntity> for PlaceModel {
    fn from(entity: PlaceEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            location: entity.location,
            county: entity.county,
            price: entity.price.unwrap_or(0),
            category: entity.category,
            description: entity.description,
            highlights: decode_text_list(entity.highlights.as_deref()),
            opening_hours: entity.opening_hours,
            best_time_to_visit: entity.best_time_to_visit,
            difficulty: entity.difficulty,
            duration: entity.duration,
            facilities: decode_text_list(entity.facilities.as_deref()),
            phone: entity.phone,
            email: entity.email,
            images: decode_text_list(entity.images.as_deref()),
            featured: entity.featured.is_some_and(|featured| featured != 0),
            rating: entity.rating.unwrap_or(0.0),
            review_count: entity.review_count.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactModel {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of a create request. Required fields are optional here so that a
/// missing one is reported as a validation failure rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct InsertPlaceModel {
    pub name: Option<String>,
    pub location: Option<String>,
    pub county: Option<String>,
    pub price: Option<i64>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub opening_hours: Option<String>,
    pub best_time_to_visit: Option<String>,
    pub difficulty: Option<String>,
    pub duration: Option<String>,
    pub facilities: Option<Vec<String>>,
    pub contact: Option<ContactModel>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub images: Option<Vec<String>>,
    #[serde(deserialize_with = "deserialize_flag")]
    pub featured: Option<bool>,
}

impl InsertPlaceModel {
    /// Required fields that are absent, null or blank.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let values = [&self.name, &self.location, &self.county];

        REQUIRED_FIELDS
            .into_iter()
            .zip(values)
            .filter(|(_, value)| is_blank(value.as_deref()))
            .map(|(field, _)| field)
            .collect()
    }

    /// Builds the row to insert. Call after `missing_required_fields` came back empty.
    pub fn into_entity(self) -> InsertPlaceEntity {
        let contact = self.contact.unwrap_or_default();

        InsertPlaceEntity {
            name: trimmed(self.name),
            location: trimmed(self.location),
            county: trimmed(self.county),
            price: self.price.unwrap_or(0),
            category: non_empty(self.category),
            description: non_empty(self.description),
            highlights: encode_text_list(&self.highlights.unwrap_or_default()),
            opening_hours: non_empty(self.opening_hours),
            best_time_to_visit: non_empty(self.best_time_to_visit),
            difficulty: non_empty(self.difficulty),
            duration: non_empty(self.duration),
            facilities: encode_text_list(&self.facilities.unwrap_or_default()),
            phone: non_empty(contact.phone.or(self.phone)),
            email: non_empty(contact.email.or(self.email)),
            images: encode_text_list(&self.images.unwrap_or_default()),
            featured: i32::from(self.featured.unwrap_or(false)),
        }
    }
}

/// Body of a partial update. For scalar fields the outer `Option` records
/// whether the key was sent at all and the inner one whether it was `null`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlaceModel {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub county: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub price: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub description: Option<Option<String>>,
    // A null list is treated like an absent one.
    #[serde(default)]
    pub highlights: Option<Vec<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub opening_hours: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub best_time_to_visit: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub difficulty: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub duration: Option<Option<String>>,
    #[serde(default)]
    pub facilities: Option<Vec<String>>,
    #[serde(default)]
    pub contact: Option<ContactModel>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub email: Option<Option<String>>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "deserialize_present_flag")]
    pub featured: Option<Option<bool>>,
}

impl UpdatePlaceModel {
    /// Required fields that were sent but are null or blank.
    pub fn invalid_required_fields(&self) -> Vec<&'static str> {
        let values = [&self.name, &self.location, &self.county];

        REQUIRED_FIELDS
            .into_iter()
            .zip(values)
            .filter(|(_, value)| value.as_ref().is_some_and(|v| is_blank(v.as_deref())))
            .map(|(field, _)| field)
            .collect()
    }

    /// Builds the changeset. Call after `invalid_required_fields` came back empty.
    pub fn into_entity(self) -> UpdatePlaceEntity {
        let contact = self.contact.unwrap_or_default();

        UpdatePlaceEntity {
            name: self.name.flatten().map(|name| name.trim().to_string()),
            location: self
                .location
                .flatten()
                .map(|location| location.trim().to_string()),
            county: self.county.flatten().map(|county| county.trim().to_string()),
            price: self.price,
            category: self.category,
            description: self.description,
            highlights: self.highlights.as_deref().map(encode_text_list),
            opening_hours: self.opening_hours,
            best_time_to_visit: self.best_time_to_visit,
            difficulty: self.difficulty,
            duration: self.duration,
            facilities: self.facilities.as_deref().map(encode_text_list),
            phone: contact.phone.map(Some).or(self.phone),
            email: contact.email.map(Some).or(self.email),
            images: self.images.as_deref().map(encode_text_list),
            featured: self
                .featured
                .map(|featured| i32::from(featured.unwrap_or(false))),
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|value| value.trim().is_empty())
}

fn trimmed(value: Option<String>) -> String {
    value.map(|value| value.trim().to_string()).unwrap_or_default()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
