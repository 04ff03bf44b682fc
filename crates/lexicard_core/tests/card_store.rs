use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use lexicard_core::db::open_db_in_memory;
use lexicard_core::{
    apply_outcome, CardRepository, Flashcard, IntervalTable, JsonCardRepository,
    SqliteCardRepository, StorageError,
};
use rusqlite::Connection;

fn sample_cards() -> Vec<Flashcard> {
    let base: DateTime<Utc> = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
    let precise = base + TimeDelta::nanoseconds(123_456_789);
    let table = IntervalTable::default();

    let mut casa = Flashcard::new("casa", "house", precise).unwrap();
    apply_outcome(&mut casa, true, precise, &table);
    apply_outcome(&mut casa, false, precise + TimeDelta::microseconds(17), &table);
    let perro = Flashcard::new("perro", "dog", base).unwrap();
    let mut gato = Flashcard::new("gato", "cat", base).unwrap();
    for _ in 0..7 {
        apply_outcome(&mut gato, true, base, &table);
    }
    vec![casa, perro, gato]
}

#[test]
fn json_load_without_snapshot_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonCardRepository::new(dir.path().join("flashcards.json"));
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn json_roundtrip_preserves_order_and_precision() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonCardRepository::new(dir.path().join("nested").join("flashcards.json"));
    let cards = sample_cards();

    repo.save(&cards).unwrap();
    let loaded = repo.load().unwrap();

    assert_eq!(loaded, cards);
    assert_eq!(loaded[0].next_review(), cards[0].next_review());
    assert!(!dir.path().join("nested").join("flashcards.json.tmp").exists());
}

#[test]
fn json_save_overwrites_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonCardRepository::new(dir.path().join("flashcards.json"));
    let cards = sample_cards();

    repo.save(&cards).unwrap();
    repo.save(&cards[..1]).unwrap();

    assert_eq!(repo.load().unwrap(), cards[..1].to_vec());
    assert!(!dir.path().join("flashcards.json.tmp").exists());
}

#[test]
fn json_failed_rename_removes_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flashcards.json");
    // A non-empty directory cannot be replaced by a file.
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("keep"), "").unwrap();

    let err = JsonCardRepository::new(&path).save(&sample_cards()).unwrap_err();
    assert!(matches!(err, StorageError::Io { .. }));
    assert!(!dir.path().join("flashcards.json.tmp").exists());
}

#[test]
fn json_loads_offsetless_timestamps_as_utc() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flashcards.json");
    std::fs::write(
        &path,
        r#"[{"word":"casa","translation":"house","level":1,
             "next_review":"2024-05-01T10:00:00.123456","reviews":2,"correct":1}]"#,
    )
    .unwrap();

    let repo = JsonCardRepository::new(&path);
    let cards = repo.load().unwrap();
    let expected = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
        + TimeDelta::microseconds(123_456);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].next_review(), expected);
    assert_eq!(cards[0].reviews(), 2);

    repo.save(&cards).unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("2024-05-01T10:00:00.123456Z"), "unexpected snapshot: {raw}");
}

#[test]
fn json_snapshot_is_a_plain_record_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flashcards.json");
    let repo = JsonCardRepository::new(&path);
    repo.save(&sample_cards()).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let records = raw.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["word"], "casa");
    assert_eq!(records[2]["level"], 5);
    assert!(records[0]["next_review"].as_str().unwrap().starts_with("2026-03-02T"));
}

#[test]
fn json_malformed_snapshot_is_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flashcards.json");
    std::fs::write(&path, "[{\"word\": \"casa\"").unwrap();

    let err = JsonCardRepository::new(&path).load().unwrap_err();
    assert!(matches!(err, StorageError::Json(_)));
}

#[test]
fn json_missing_field_is_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flashcards.json");
    std::fs::write(
        &path,
        r#"[{"word": "casa", "translation": "house", "level": 0,
             "next_review": "2026-03-01T09:30:00Z", "reviews": 0}]"#,
    )
    .unwrap();

    let err = JsonCardRepository::new(&path).load().unwrap_err();
    assert!(err.to_string().contains("correct"), "unexpected error: {err}");
}

#[test]
fn json_invalid_record_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flashcards.json");
    std::fs::write(
        &path,
        r#"[{"word": "casa", "translation": "house", "level": 0,
             "next_review": "2026-03-01T09:30:00Z", "reviews": 1, "correct": 2}]"#,
    )
    .unwrap();

    let err = JsonCardRepository::new(&path).load().unwrap_err();
    assert!(matches!(err, StorageError::InvalidData(message) if message.contains("record 0")));
}

#[test]
fn json_unreadable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the snapshot file should be.
    let path = dir.path().join("flashcards.json");
    std::fs::create_dir(&path).unwrap();

    let err = JsonCardRepository::new(&path).load().unwrap_err();
    assert!(matches!(err, StorageError::Io { .. }));
}

#[test]
fn sqlite_roundtrip_preserves_order_and_precision() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCardRepository::try_new(&conn).unwrap();
    let cards = sample_cards();

    assert!(repo.load().unwrap().is_empty());
    repo.save(&cards).unwrap();
    assert_eq!(repo.load().unwrap(), cards);

    repo.save(&cards[1..]).unwrap();
    assert_eq!(repo.load().unwrap(), cards[1..].to_vec());
}

#[test]
fn sqlite_file_roundtrip_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flashcards.sqlite3");
    let cards = sample_cards();

    {
        let conn = lexicard_core::db::open_db(&path).unwrap();
        SqliteCardRepository::try_new(&conn).unwrap().save(&cards).unwrap();
    }

    let conn = lexicard_core::db::open_db(&path).unwrap();
    let loaded = SqliteCardRepository::try_new(&conn).unwrap().load().unwrap();
    assert_eq!(loaded, cards);
}

#[test]
fn sqlite_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteCardRepository::try_new(&conn) {
        Err(StorageError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn sqlite_corrupt_timestamp_is_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO flashcards (position, word, translation, level, next_review, reviews, correct)
         VALUES (0, 'casa', 'house', 0, 'yesterday', 0, 0);",
        [],
    )
    .unwrap();

    let err = SqliteCardRepository::try_new(&conn).unwrap().load().unwrap_err();
    assert!(matches!(err, StorageError::InvalidData(message) if message.contains("next_review")));
}

#[test]
fn sqlite_loads_offsetless_timestamps_as_utc() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO flashcards (position, word, translation, level, next_review, reviews, correct)
         VALUES (0, 'casa', 'house', 1, '2024-05-01T10:00:00', 2, 1);",
        [],
    )
    .unwrap();

    let cards = SqliteCardRepository::try_new(&conn).unwrap().load().unwrap();
    assert_eq!(
        cards[0].next_review(),
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    );
}
