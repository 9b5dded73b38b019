//! Catalog loading tests over an inline JSON fixture.

use bracket_catalog::{Catalog, CatalogError, ItemId};

const FIXTURE: &str = r#"[
    {
        "id": "food_001",
        "name": "bibimbap",
        "cuisine": "korean",
        "attributes": {"spicy": true},
        "img": "./food_images/korean/bibimbap.png",
        "character_img": "./food_character_images/korean/bibimbap.png"
    },
    {
        "id": "food_002",
        "name": "ramen",
        "cuisine": "japanese",
        "img": "food_images/japanese/ramen.png"
    },
    {
        "id": "food_003",
        "name": "kimchi stew",
        "cuisine": "korean"
    }
]"#;

#[test]
fn loads_and_normalizes_items() {
    let catalog = Catalog::from_json_str(FIXTURE).expect("parse fixture");
    assert_eq!(catalog.len(), 3);

    let bibimbap = &catalog.items()[0];
    assert_eq!(bibimbap.name, "bibimbap");
    assert_eq!(bibimbap.image, "food_images/korean/bibimbap.png");
    assert_eq!(
        bibimbap.character_image,
        "food_character_images/korean/bibimbap.png"
    );

    // No character_img in the record: derived default.
    let ramen = &catalog.items()[1];
    assert_eq!(ramen.image, "food_images/japanese/ramen.png");
    assert_eq!(ramen.character_image, "food_character_images/japanese/ramen.png");

    // No image paths at all: both derived.
    let stew = &catalog.items()[2];
    assert_eq!(stew.image, "food_images/korean/kimchi stew.png");
}

#[test]
fn queries_follow_catalog_order() {
    let catalog = Catalog::from_json_str(FIXTURE).expect("parse fixture");

    let ids = catalog.ids();
    assert_eq!(
        ids,
        vec![
            ItemId::new("food_001").expect("id"),
            ItemId::new("food_002").expect("id"),
            ItemId::new("food_003").expect("id"),
        ]
    );

    let korean = catalog.by_cuisine("korean");
    assert_eq!(korean.len(), 2);
    assert_eq!(korean[0].name, "bibimbap");
    assert_eq!(korean[1].name, "kimchi stew");
    assert!(catalog.by_cuisine("italian").is_empty());

    assert_eq!(catalog.cuisines(), ["japanese", "korean"]);

    let id = ItemId::new("food_002").expect("id");
    assert_eq!(catalog.get(&id).map(|item| item.name.as_str()), Some("ramen"));
    let missing = ItemId::new("food_999").expect("id");
    assert!(catalog.get(&missing).is_none());
}

#[test]
fn duplicate_identifiers_fail_to_load() {
    let json = r#"[
        {"id": "food_001", "name": "a", "cuisine": "x"},
        {"id": "food_001", "name": "b", "cuisine": "y"}
    ]"#;
    let err = Catalog::from_json_str(json).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId { id } if id == "food_001"));
}

#[test]
fn blank_identifier_fails_to_load() {
    let json = r#"[{"id": "  ", "name": "a", "cuisine": "x"}]"#;
    let err = Catalog::from_json_str(json).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidItemId { .. }));
}

#[test]
fn missing_file_reports_the_path() {
    let err = Catalog::from_path("/nonexistent/final_foods.json").unwrap_err();
    assert!(matches!(err, CatalogError::FileRead { .. }));
    assert!(err.to_string().contains("/nonexistent/final_foods.json"));
}
