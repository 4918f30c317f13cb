use httpmock::prelude::*;
use stream_recipes::adapters::sqlite_store::demo_users;
use stream_recipes::domain::ports::UserStore;
use stream_recipes::{build_catalogue, HttpUserApi, RecipeReport, RecipeRunner, SqliteUserStore};

fn mock_users_endpoint(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/users");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": 1, "name": "Ann", "email": "ann@example.com"},
                {"id": 2, "name": "Ben", "email": "ben@example.com"}
            ]));
    });
}

async fn catalogue_runner(server: &MockServer) -> RecipeRunner {
    let api = HttpUserApi::new(server.url("/users"));
    let store = SqliteUserStore::connect("sqlite::memory:").await.unwrap();
    store.seed_users(&demo_users()).await.unwrap();

    RecipeRunner::new(build_catalogue(api, store))
}

fn report_for<'a>(reports: &'a [RecipeReport], name: &str) -> &'a RecipeReport {
    reports
        .iter()
        .find(|r| r.recipe == name)
        .unwrap_or_else(|| panic!("no report for recipe '{}'", name))
}

#[tokio::test]
async fn test_full_catalogue_completes_with_expected_outputs() {
    let server = MockServer::start();
    mock_users_endpoint(&server);

    let runner = catalogue_runner(&server).await;
    let reports = runner.run(&[]).await.unwrap();

    assert_eq!(reports.len(), 9);
    for report in &reports {
        assert!(report.completed, "recipe '{}' did not complete", report.recipe);
    }

    assert_eq!(
        report_for(&reports, "single").emitted,
        vec!["hello, streams".to_string()]
    );
    assert_eq!(
        report_for(&reports, "events").emitted,
        vec!["Apple".to_string(), "Banana".to_string()]
    );
    assert_eq!(
        report_for(&reports, "map").emitted,
        vec!["APPLE".to_string()]
    );
    assert_eq!(
        report_for(&reports, "chain").emitted,
        vec!["BANANA".to_string()]
    );
    assert_eq!(
        report_for(&reports, "threads").emitted,
        vec!["Threaded Data".to_string()]
    );
    assert_eq!(
        report_for(&reports, "recovery").emitted,
        vec!["default value".to_string()]
    );
    assert_eq!(
        report_for(&reports, "disposal").emitted,
        vec!["clean up".to_string()]
    );
    assert_eq!(
        report_for(&reports, "api").emitted,
        vec![
            "Ann <ann@example.com>".to_string(),
            "Ben <ben@example.com>".to_string()
        ]
    );
    assert_eq!(
        report_for(&reports, "store").emitted,
        vec![
            "Grace Hopper <grace@example.com>".to_string(),
            "Alan Turing <alan@example.com>".to_string(),
            "Barbara Liskov <barbara@example.com>".to_string()
        ]
    );
}

#[tokio::test]
async fn test_recipes_are_independent_of_selection_order() {
    let server = MockServer::start();
    mock_users_endpoint(&server);

    let runner = catalogue_runner(&server).await;

    let forward = runner
        .run(&["map".to_string(), "chain".to_string()])
        .await
        .unwrap();
    let reversed = runner
        .run(&["chain".to_string(), "map".to_string()])
        .await
        .unwrap();

    // Selection order does not matter; reports come back in catalogue order
    // with the same contents.
    assert_eq!(forward.len(), 2);
    assert_eq!(reversed.len(), 2);
    for (a, b) in forward.iter().zip(reversed.iter()) {
        assert_eq!(a.recipe, b.recipe);
        assert_eq!(a.emitted, b.emitted);
    }
}

#[tokio::test]
async fn test_recovery_report_records_the_swallowed_error() {
    let server = MockServer::start();
    mock_users_endpoint(&server);

    let runner = catalogue_runner(&server).await;
    let reports = runner.run(&["recovery".to_string()]).await.unwrap();

    let recovery = report_for(&reports, "recovery");
    assert!(recovery.completed);
    assert_eq!(recovery.errors.len(), 1);
    assert!(recovery.errors[0].contains("upstream produced no value"));
}
