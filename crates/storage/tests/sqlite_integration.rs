use habit_core::model::{DailyRecord, DateKey, ExerciseDraft};
use habit_core::time::fixed_now;
use storage::repository::{DailyRecordRepository, StorageError};
use storage::sqlite::SqliteRepository;

fn key(s: &str) -> DateKey {
    DateKey::parse(s).unwrap()
}

#[tokio::test]
async fn sqlite_round_trips_a_record() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let mut record = DailyRecord::default();
    record.add_water();
    record.add_water();
    record.set_sleep(7.5);
    record.add_exercise(
        ExerciseDraft::new("Running", 20)
            .validate(fixed_now())
            .unwrap(),
    );
    record.set_water_goal(12);
    record.set_sleep_goal(9.0);

    let today = key("2024-03-15");
    repo.save_record(&today, &record).await.unwrap();

    let loaded = repo.get_record(&today).await.expect("get").expect("some");
    assert_eq!(loaded, record);
    assert_eq!(loaded.water_goal(), 12);
    assert_eq!(loaded.sleep_goal(), 9.0);
    assert_eq!(loaded.exercise_goal(), 30);
}

#[tokio::test]
async fn sqlite_isolates_date_keys_and_upserts() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_isolation?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let mut record = DailyRecord::default();
    record.add_water();
    repo.save_record(&key("2024-03-15"), &record).await.unwrap();

    // A different day never sees the record.
    assert!(
        repo.get_record(&key("2024-03-16"))
            .await
            .unwrap()
            .is_none()
    );

    // A second save for the same day replaces, not appends.
    record.add_water();
    repo.save_record(&key("2024-03-15"), &record).await.unwrap();
    let loaded = repo
        .get_record(&key("2024-03-15"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.water(), 2);
}

#[tokio::test]
async fn sqlite_reports_corrupt_payloads_as_serialization_errors() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_corrupt?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    sqlx::query(
        "INSERT INTO daily_records (date_key, payload, updated_at) VALUES (?1, ?2, ?3)",
    )
    .bind("2024-03-15")
    .bind("not json {")
    .bind("2024-03-15T08:30:00Z")
    .execute(repo.pool())
    .await
    .expect("insert garbage");

    let err = repo.get_record(&key("2024-03-15")).await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[tokio::test]
async fn sqlite_tolerates_payloads_from_older_writers() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_forward?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    // A payload with a missing field and an unknown one still decodes.
    sqlx::query(
        "INSERT INTO daily_records (date_key, payload, updated_at) VALUES (?1, ?2, ?3)",
    )
    .bind("2024-03-15")
    .bind(r#"{"water": 4, "mood": "fine"}"#)
    .bind("2024-03-15T08:30:00Z")
    .execute(repo.pool())
    .await
    .expect("insert old payload");

    let loaded = repo
        .get_record(&key("2024-03-15"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.water(), 4);
    assert_eq!(loaded.sleep(), 0.0);
    assert!(loaded.exercises().is_empty());
}
