mod common;

use axum::http::StatusCode;
use common::{app_from_json, get, json, migrate, sample_app};

const COUNTER_CONFIG: &str = r#"{"endpoints":[
    {"route":"/steps","method":"GET","query":"SELECT Step FROM Steps ORDER BY Seq","returnType":"Array"}
]}"#;

#[tokio::test]
async fn sample_migrations_apply_in_order() {
    let app = sample_app().await;
    let (status, body) = migrate(&app).await;
    assert_eq!(status, StatusCode::OK);
    let report = json(&body);
    assert_eq!(report["message"], "Migrations applied successfully");
    assert_eq!(
        report["appliedMigrations"],
        serde_json::json!(["001_create_customers.sql", "002_seed_customers.sql"])
    );
}

#[tokio::test]
async fn sample_migrations_can_run_twice() {
    let app = sample_app().await;
    assert_eq!(migrate(&app).await.0, StatusCode::OK);
    assert_eq!(migrate(&app).await.0, StatusCode::OK);
    let (_, body) = get(&app, "/customers/all").await;
    assert_eq!(json(&body).as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn empty_directory_applies_nothing() {
    let migrations = tempfile::tempdir().unwrap();
    std::fs::write(migrations.path().join("README.md"), "not a migration").unwrap();
    let app = app_from_json(COUNTER_CONFIG, true, migrations.path()).await;

    let (status, body) = migrate(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body), serde_json::json!({"message": "No migration files found"}));

    let tables: Vec<String> = sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table'")
        .fetch_all(&app.state.pool)
        .await
        .unwrap();
    assert!(tables.is_empty());
}

#[tokio::test]
async fn files_run_in_ascending_name_order() {
    let migrations = tempfile::tempdir().unwrap();
    let files = [
        ("010_third.sql", "INSERT INTO Steps (Step) VALUES ('third');"),
        ("001_first.sql", "CREATE TABLE Steps (Seq INTEGER PRIMARY KEY AUTOINCREMENT, Step TEXT NOT NULL);\nINSERT INTO Steps (Step) VALUES ('first');"),
        ("002_second.sql", "INSERT INTO Steps (Step) VALUES ('second');"),
    ];
    for (name, sql) in files {
        std::fs::write(migrations.path().join(name), sql).unwrap();
    }
    let app = app_from_json(COUNTER_CONFIG, true, migrations.path()).await;

    let (status, body) = migrate(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json(&body)["appliedMigrations"],
        serde_json::json!(["001_first.sql", "002_second.sql", "010_third.sql"])
    );

    let (_, body) = get(&app, "/steps").await;
    assert_eq!(
        json(&body),
        serde_json::json!([{"Step": "first"}, {"Step": "second"}, {"Step": "third"}])
    );
}

#[tokio::test]
async fn missing_directory_is_a_problem_response() {
    let root = tempfile::tempdir().unwrap();
    let app = app_from_json(COUNTER_CONFIG, true, &root.path().join("missing")).await;

    let (status, body) = migrate(&app).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let problem = json(&body);
    assert_eq!(problem["error"]["code"], "migrations_not_found");
    assert!(problem["error"]["message"].as_str().unwrap().contains("missing"));
}

#[tokio::test]
async fn failing_file_stops_the_run() {
    let migrations = tempfile::tempdir().unwrap();
    std::fs::write(migrations.path().join("001_ok.sql"), "CREATE TABLE Steps (Seq INTEGER PRIMARY KEY, Step TEXT);").unwrap();
    std::fs::write(migrations.path().join("002_broken.sql"), "THIS IS NOT SQL;").unwrap();
    std::fs::write(migrations.path().join("003_never.sql"), "INSERT INTO Steps (Step) VALUES ('never');").unwrap();
    let app = app_from_json(COUNTER_CONFIG, true, migrations.path()).await;

    let (status, body) = migrate(&app).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(String::from_utf8(body).unwrap(), "An error occurred while executing the query");

    let (status, body) = get(&app, "/steps").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body), serde_json::json!([]));
}
