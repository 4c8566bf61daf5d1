//! Tests for the content store lookups and load-time validation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rstest::{fixture, rstest};

use super::*;

fn accommodation(id: &str, category: &str) -> Accommodation {
    Accommodation {
        id: id.to_owned(),
        name: format!("Haus {id}"),
        category: category.to_owned(),
        description: "Ruhige Lage".to_owned(),
        location: "Nebel".to_owned(),
        image: None,
        features: vec!["WLAN".to_owned()],
        price_range: None,
        rating: None,
        phone: None,
        website: None,
    }
}

fn restaurant(id: &str, cuisine: &[&str]) -> Restaurant {
    Restaurant {
        id: id.to_owned(),
        name: format!("Restaurant {id}"),
        category: "Restaurant".to_owned(),
        cuisine: cuisine.iter().map(|c| (*c).to_owned()).collect(),
        description: "Frischer Fisch".to_owned(),
        location: "Wittdün".to_owned(),
        image: None,
        features: Vec::new(),
        opening_hours: None,
        rating: None,
        phone: None,
        website: None,
    }
}

fn activity(id: &str, seasons: &[&str]) -> Activity {
    Activity {
        id: id.to_owned(),
        name: format!("Aktivität {id}"),
        category: "Natur".to_owned(),
        description: "Wattwanderung".to_owned(),
        location: "Norddorf".to_owned(),
        image: None,
        features: Vec::new(),
        seasons: seasons.iter().map(|s| (*s).to_owned()).collect(),
        duration: None,
        price: None,
    }
}

fn post(id: &str, date: (i32, u32, u32), tags: &[&str]) -> BlogPost {
    BlogPost {
        id: id.to_owned(),
        slug: format!("post-{id}"),
        title: format!("Post {id}"),
        excerpt: String::new(),
        content: String::new(),
        author: "Redaktion".to_owned(),
        publish_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid date"),
        category: "Natur".to_owned(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        image: None,
    }
}

fn empty_ferry() -> FerrySchedule {
    FerrySchedule::new(Vec::new(), BTreeMap::new()).expect("empty schedule is valid")
}

#[fixture]
fn collections() -> ContentCollections {
    ContentCollections {
        accommodations: vec![
            accommodation("a1", "Hotel"),
            accommodation("a2", "Ferienwohnung"),
            accommodation("a3", "Hotel"),
        ],
        restaurants: vec![
            restaurant("r1", &["Fisch", "Regional"]),
            restaurant("r2", &["Italienisch"]),
        ],
        beaches: Vec::new(),
        activities: vec![
            activity("x1", &["Sommer"]),
            activity("x2", &["Winter", "Herbst"]),
        ],
        blog_posts: vec![
            post("b1", (2024, 3, 1), &["Wandern"]),
            post("b2", (2024, 6, 1), &["Strand"]),
            post("b3", (2024, 6, 1), &["Wandern", "Natur"]),
            post("b4", (2023, 11, 20), &["Wandern"]),
        ],
        ferry: empty_ferry(),
    }
}

#[fixture]
fn store(collections: ContentCollections) -> ContentStore {
    ContentStore::new(collections).expect("fixture collections are valid")
}

#[rstest]
fn lookup_by_id_returns_item_or_none(store: ContentStore) {
    assert_eq!(store.accommodation_by_id("a2").map(|a| a.id.as_str()), Some("a2"));
    assert!(store.accommodation_by_id("zz").is_none());
    assert!(store.beach_by_id("a1").is_none());
}

#[rstest]
fn category_filter_preserves_fixture_order(store: ContentStore) {
    let ids: Vec<_> = store
        .accommodations_by_category("Hotel")
        .into_iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(ids, ["a1", "a3"]);
    assert!(store.accommodations_by_category("Camping").is_empty());
}

#[rstest]
fn cuisine_and_season_lookups_find_tagged_items(store: ContentStore) {
    let restaurants: Vec<_> = store
        .restaurants_by_cuisine("Regional")
        .into_iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(restaurants, ["r1"]);

    let activities: Vec<_> = store
        .activities_by_season("Herbst")
        .into_iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(activities, ["x2"]);
}

#[rstest]
fn blog_posts_are_newest_first_with_stable_ties(store: ContentStore) {
    let ids: Vec<_> = store.blog_posts().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["b2", "b3", "b1", "b4"]);
}

#[rstest]
fn blog_posts_by_tag_returns_only_tagged_posts_newest_first(store: ContentStore) {
    let posts = store.blog_posts_by_tag("Wandern");

    assert!(posts.iter().all(|p| p.has_tag("Wandern")));
    assert!(posts.windows(2).all(|w| w[0].publish_date >= w[1].publish_date));
    let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["b3", "b1", "b4"]);
}

#[rstest]
#[case(0, 0)]
#[case(2, 2)]
#[case(4, 4)]
#[case(10, 4)]
#[case(usize::MAX, 4)]
fn recent_posts_are_capped_by_collection_size(
    store: ContentStore,
    #[case] limit: usize,
    #[case] expected: usize,
) {
    assert_eq!(store.recent_blog_posts(limit).len(), expected);
}

#[rstest]
#[case(1, &["b2"])]
#[case(3, &["b2", "b3", "b1"])]
#[case(usize::MAX, &["b2", "b3", "b1", "b4"])]
fn recent_posts_are_the_newest_prefix(
    store: ContentStore,
    #[case] limit: usize,
    #[case] expected: &[&str],
) {
    let ids: Vec<_> = store.recent_blog_posts(limit).iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, expected);
}

#[rstest]
fn recent_posts_of_an_empty_blog_are_empty(collections: ContentCollections) {
    let store = ContentStore::new(ContentCollections {
        blog_posts: Vec::new(),
        ..collections
    })
    .expect("empty blog is valid");
    assert!(store.recent_blog_posts(3).is_empty());
}

#[rstest]
fn blog_lookups_by_slug_and_id(store: ContentStore) {
    assert_eq!(store.blog_post_by_slug("post-b3").map(|p| p.id.as_str()), Some("b3"));
    assert_eq!(store.blog_post_by_id("b4").map(|p| p.slug.as_str()), Some("post-b4"));
    assert!(store.blog_post_by_slug("unbekannt").is_none());
}

#[rstest]
fn blog_tags_are_distinct_and_sorted(store: ContentStore) {
    assert_eq!(store.blog_tags(), ["Natur", "Strand", "Wandern"]);
}

#[rstest]
fn rejects_duplicate_ids(mut collections: ContentCollections) {
    collections.restaurants.push(restaurant("r1", &[]));
    let err = ContentStore::new(collections).expect_err("duplicate id rejected");

    assert_eq!(
        err,
        ContentValidationError::DuplicateId {
            collection: "restaurants",
            id: "r1".to_owned(),
        }
    );
}

#[rstest]
fn rejects_blank_ids(mut collections: ContentCollections) {
    collections.activities.push(activity("  ", &[]));
    let err = ContentStore::new(collections).expect_err("blank id rejected");

    assert!(matches!(err, ContentValidationError::EmptyId { collection: "activities", index: 2 }));
}

#[rstest]
#[case("Mit Leerzeichen")]
#[case("")]
fn rejects_invalid_slugs(mut collections: ContentCollections, #[case] slug: &str) {
    collections.blog_posts[0].slug = slug.to_owned();
    let err = ContentStore::new(collections).expect_err("invalid slug rejected");

    assert!(matches!(err, ContentValidationError::InvalidSlug { .. }));
}

#[rstest]
fn rejects_duplicate_slugs(mut collections: ContentCollections) {
    collections.blog_posts[1].slug = "post-b1".to_owned();
    let err = ContentStore::new(collections).expect_err("duplicate slug rejected");

    assert_eq!(
        err,
        ContentValidationError::DuplicateSlug {
            slug: "post-b1".to_owned(),
        }
    );
}
