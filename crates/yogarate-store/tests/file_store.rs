//! Integration tests for the file-backed rating store.

use std::fs;

use tempfile::tempdir;
use yogarate_core::{
    ClassType, Dimensions, NewInstructor, NewRating, RatingStore, Score, StudioLocation,
};
use yogarate_store::{INSTRUCTORS_KEY, RATINGS_KEY, StoreFactory, open_store};

fn new_rating(instructor: &str, overall: u8) -> NewRating {
    NewRating {
        instructor_id: instructor.into(),
        class_type: ClassType::HotPowerFusion,
        studio_location: StudioLocation::CapitolHill,
        overall_rating: Score::new(overall).unwrap(),
        dimensions: Dimensions::default(),
        notes: None,
        is_favorite: false,
    }
}

#[test]
fn persisted_layout_matches_documented_shape() {
    let temp = tempdir().unwrap();
    let store = open_store(temp.path()).unwrap();
    let created = store.create_rating(new_rating("2", 5)).unwrap();

    let path = temp.path().join("store").join(format!("{RATINGS_KEY}.json"));
    let raw = fs::read_to_string(path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = &value[0];
    assert_eq!(record["id"], created.id.as_str());
    assert_eq!(record["instructorId"], "2");
    assert_eq!(record["classType"], "Hot Power Fusion");
    assert_eq!(record["studioLocation"], "Capitol Hill");
    assert_eq!(record["overallRating"], 5);
    assert_eq!(record["isFavorite"], false);
    assert!(record["createdAt"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn reads_collections_written_by_earlier_versions() {
    let temp = tempdir().unwrap();
    let dir = temp.path().join("store");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(format!("{INSTRUCTORS_KEY}.json")),
        r#"[{"id":"1","name":"Sarah Johnson"},{"id":"1712345678901","name":"Dana Lee"}]"#,
    )
    .unwrap();
    fs::write(
        dir.join(format!("{RATINGS_KEY}.json")),
        r#"[{"id":"1712345679000","instructorId":"1712345678901","classType":"Yoga 3",
            "studioLocation":"Bellevue","createdAt":"2024-04-05T19:21:19.000Z",
            "overallRating":4,"dimensions":{"intensity":2,"flow":5,"energy":4,"music":3},
            "notes":"","isFavorite":true}]"#,
    )
    .unwrap();

    let store = open_store(temp.path()).unwrap();
    assert_eq!(store.list_instructors().len(), 2);
    let ratings = store.list_ratings_for_instructor(&"1712345678901".into());
    assert_eq!(ratings.len(), 1);
    assert!(ratings[0].is_favorite);
    assert_eq!(ratings[0].dimensions.flow.get(), 5);
}

#[test]
fn corrupted_file_degrades_to_empty_and_next_write_replaces_it() {
    let temp = tempdir().unwrap();
    let store = open_store(temp.path()).unwrap();
    let path = temp.path().join("store").join("ratings.json");
    fs::write(&path, "[{\"id\": truncated").unwrap();

    assert!(store.list_ratings().is_empty());
    assert!(store.toggle_favorite(&"anything".into()).unwrap().is_none());

    store.create_rating(new_rating("1", 3)).unwrap();
    assert_eq!(store.list_ratings().len(), 1);
}

#[test]
fn out_of_range_score_on_disk_skips_only_that_record() {
    let temp = tempdir().unwrap();
    let store = open_store(temp.path()).unwrap();
    store.create_rating(new_rating("1", 3)).unwrap();
    let kept = store.create_rating(new_rating("2", 4)).unwrap();

    let path = temp.path().join("store").join("ratings.json");
    let raw = fs::read_to_string(&path)
        .unwrap()
        .replace("\"overallRating\":3", "\"overallRating\":9");
    fs::write(&path, raw).unwrap();

    assert_eq!(store.list_ratings(), vec![kept]);
}

#[test]
fn one_bad_record_does_not_wipe_valid_ratings_on_next_write() {
    let temp = tempdir().unwrap();
    let store = open_store(temp.path()).unwrap();
    let first = store.create_rating(new_rating("1", 5)).unwrap();
    let second = store.create_rating(new_rating("2", 4)).unwrap();

    // Splice in a record with a class type nobody knows.
    let path = temp.path().join("store").join("ratings.json");
    let mut records: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let mut unknown = records[0].clone();
    unknown["id"] = "legacy-1".into();
    unknown["classType"] = "Pilates".into();
    records.insert(1, unknown);
    fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

    assert_eq!(store.list_ratings(), vec![first.clone(), second.clone()]);

    let third = store.create_rating(new_rating("3", 3)).unwrap();
    assert_eq!(store.list_ratings(), vec![first, second, third]);

    let on_disk: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk.len(), 3);
}

#[test]
fn instructors_and_ratings_are_persisted_independently() {
    let temp = tempdir().unwrap();
    let dir = temp.path().join("store");
    let store = StoreFactory::file_store(&dir).unwrap();

    // No initialize: writing one collection never touches the other.
    store.create_instructor(NewInstructor::new("Dana Lee")).unwrap();
    assert!(dir.join("instructors.json").is_file());
    assert!(!dir.join("ratings.json").exists());

    store.initialize().unwrap();
    assert_eq!(store.list_instructors().len(), 1);
    assert!(store.list_ratings().is_empty());
}
