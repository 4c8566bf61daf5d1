//! Diesel table definitions for the gateway schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Dated island events.
    events (id) {
        /// Caller-supplied identifier.
        id -> Text,
        title -> Text,
        event_date -> Date,
        event_time -> Nullable<Time>,
        location -> Nullable<Text>,
        description -> Nullable<Text>,
        category -> Nullable<Text>,
        image -> Nullable<Text>,
        link -> Nullable<Text>,
    }
}

diesel::table! {
    /// Places with opening periods.
    locations (id) {
        /// Caller-supplied identifier.
        id -> Text,
        /// Index in the last replace payload; preserves display order.
        position -> Int4,
        name -> Text,
        category -> Nullable<Text>,
        description -> Nullable<Text>,
        address -> Nullable<Text>,
        phone -> Nullable<Text>,
        website -> Nullable<Text>,
    }
}

diesel::table! {
    /// Opening periods; rows are removed with their location.
    opening_periods (id) {
        id -> Text,
        /// Owning location (`ON DELETE CASCADE`).
        location_id -> Text,
        /// Index within the owning location.
        position -> Int4,
        name -> Text,
        days -> Text,
        hours -> Text,
    }
}

diesel::joinable!(opening_periods -> locations (location_id));

diesel::allow_tables_to_appear_in_same_query!(events, locations, opening_periods);
