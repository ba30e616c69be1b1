// Column names follow the existing `nestor.db` layout, hence the camelCase `sql_name`s.

diesel::table! {
    places (id) {
        id -> BigInt,
        name -> Text,
        location -> Text,
        county -> Text,
        price -> Nullable<BigInt>,
        category -> Nullable<Text>,
        description -> Nullable<Text>,
        highlights -> Nullable<Text>,
        #[sql_name = "openingHours"]
        opening_hours -> Nullable<Text>,
        #[sql_name = "bestTimeToVisit"]
        best_time_to_visit -> Nullable<Text>,
        difficulty -> Nullable<Text>,
        duration -> Nullable<Text>,
        facilities -> Nullable<Text>,
        phone -> Nullable<Text>,
        email -> Nullable<Text>,
        images -> Nullable<Text>,
        featured -> Nullable<Integer>,
        rating -> Nullable<Double>,
        #[sql_name = "reviewCount"]
        review_count -> Nullable<BigInt>,
    }
}
