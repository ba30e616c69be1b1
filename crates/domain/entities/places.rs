use diesel::prelude::*;

use crate::infra::db::sqlite::schema::places;

#[derive(Debug, Clone, PartialEq, Identifiable, Selectable, Queryable)]
#[diesel(table_name = places)]
pub struct PlaceEntity {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub county: String,
    pub price: Option<i64>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub highlights: Option<String>, // JSON text, see value_objects::text_list
    pub opening_hours: Option<String>,
    pub best_time_to_visit: Option<String>,
    pub difficulty: Option<String>,
    pub duration: Option<String>,
    pub facilities: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub images: Option<String>,
    pub featured: Option<i32>, // 0 or 1
    pub rating: Option<f64>,
    pub review_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = places)]
pub struct InsertPlaceEntity {
    pub name: String,
    pub location: String,
    pub county: String,
    pub price: i64,
    pub category: Option<String>,
    pub description: Option<String>,
    pub highlights: String,
    pub opening_hours: Option<String>,
    pub best_time_to_visit: Option<String>,
    pub difficulty: Option<String>,
    pub duration: Option<String>,
    pub facilities: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub images: String,
    pub featured: i32,
}

/// Outer `None` leaves the column untouched, `Some(None)` writes NULL.
#[derive(Debug, Clone, Default, PartialEq, AsChangeset)]
#[diesel(table_name = places)]
pub struct UpdatePlaceEntity {
    pub name: Option<String>,
    pub location: Option<String>,
    pub county: Option<String>,
    pub price: Option<Option<i64>>,
    pub category: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub highlights: Option<String>,
    pub opening_hours: Option<Option<String>>,
    pub best_time_to_visit: Option<Option<String>>,
    pub difficulty: Option<Option<String>>,
    pub duration: Option<Option<String>>,
    pub facilities: Option<String>,
    pub phone: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub images: Option<String>,
    pub featured: Option<i32>,
}

impl UpdatePlaceEntity {
    /// True when no column would be touched.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
