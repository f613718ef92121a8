//! Application router configuration.

use axum::{
    Extension, Router, middleware,
    routing::{delete, get, post, put},
};

use crate::{
    AppState, endpoints,
    ledger::get_summary_endpoint,
    logging_middleware,
    not_found::{get_404_not_found, get_405_method_not_allowed},
    record::{
        RecordKind, SQLiteRecordStore, add_record_endpoint, delete_record_endpoint,
        get_records_endpoint, update_record_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new();

    for kind in RecordKind::ALL {
        router = router.merge(record_routes(kind));
    }

    router
        .route(
            endpoints::SUMMARY,
            get(get_summary_endpoint::<SQLiteRecordStore>),
        )
        .method_not_allowed_fallback(get_405_method_not_allowed)
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// The add, list, delete and update routes for records of `kind`.
///
/// The handlers are shared by both kinds and read `kind` from a request extension.
fn record_routes(kind: RecordKind) -> Router<AppState> {
    Router::new()
        .route(
            endpoints::add_endpoint(kind),
            post(add_record_endpoint::<SQLiteRecordStore>),
        )
        .route(
            endpoints::list_endpoint(kind),
            get(get_records_endpoint::<SQLiteRecordStore>),
        )
        .route(
            endpoints::delete_endpoint(kind),
            delete(delete_record_endpoint::<SQLiteRecordStore>),
        )
        .route(
            endpoints::update_endpoint(kind),
            put(update_record_endpoint::<SQLiteRecordStore>),
        )
        .layer(Extension(kind))
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        AppState, Message, Record, RecordKind, Summary, build_router,
        endpoints::{self, format_endpoint},
    };

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection).expect("Could not create app state.");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    fn salary() -> serde_json::Value {
        json!({
            "title": "Salary",
            "amount": 2500,
            "category": "salary",
            "description": "October pay",
            "date": "2025-10-15",
        })
    }

    #[tokio::test]
    async fn added_record_is_listed_once() {
        let server = get_test_server();

        let response = server.post(endpoints::ADD_INCOME).json(&salary()).await;

        response.assert_status_ok();
        let incomes = server.get(endpoints::GET_INCOMES).await.json::<Vec<Record>>();
        assert_eq!(incomes.len(), 1);
        let income = &incomes[0];
        assert_eq!(income.kind, RecordKind::Income);
        assert_eq!(income.title, "Salary");
        assert_eq!(income.amount, 2500.0);
        assert_eq!(income.category, "salary");
        assert_eq!(income.description, "October pay");
        assert_eq!(income.date.to_string(), "2025-10-15");

        let expenses = server.get(endpoints::GET_EXPENSES).await.json::<Vec<Record>>();
        assert!(expenses.is_empty());
    }

    #[tokio::test]
    async fn record_json_uses_original_field_names() {
        let server = get_test_server();

        let body = server
            .post(endpoints::ADD_EXPENSE)
            .json(&salary())
            .await
            .json::<serde_json::Value>();

        assert_eq!(body["message"], "Expense Added");
        assert_eq!(body["record"]["type"], "expense");
        assert_eq!(body["record"]["date"], "2025-10-15");
        assert!(body["record"]["createdAt"].is_string());
    }

    #[tokio::test]
    async fn missing_field_is_400_with_message() {
        let server = get_test_server();

        let response = server
            .post(endpoints::ADD_EXPENSE)
            .json(&json!({ "title": "Rent", "amount": 950 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Message>(),
            Message::new("All fields are required!")
        );
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let server = get_test_server();

        let response = server
            .post(endpoints::ADD_INCOME)
            .content_type("application/json")
            .text("{not json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Message>(),
            Message::new("Request body must be a JSON object!")
        );
    }

    #[tokio::test]
    async fn can_update_and_delete_over_http() {
        let server = get_test_server();
        let record = server
            .post(endpoints::ADD_INCOME)
            .json(&salary())
            .await
            .json::<serde_json::Value>()["record"]["id"]
            .as_i64()
            .expect("record ID missing");

        let mut changes = salary();
        changes["amount"] = json!(2600);
        let updated = server
            .put(&format_endpoint(endpoints::UPDATE_INCOME, record))
            .json(&changes)
            .await
            .json::<Record>();
        assert_eq!(updated.amount, 2600.0);

        server
            .delete(&format_endpoint(endpoints::DELETE_INCOME, record))
            .await
            .assert_status_ok();
        server
            .delete(&format_endpoint(endpoints::DELETE_INCOME, record))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_numeric_id_is_not_found() {
        let server = get_test_server();

        server
            .delete("/api/v1/delete-expense/abc")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn summary_reflects_records() {
        let server = get_test_server();
        server.post(endpoints::ADD_INCOME).json(&salary()).await;
        server
            .post(endpoints::ADD_EXPENSE)
            .json(&json!({
                "title": "Rent",
                "amount": "950.50",
                "category": "housing",
                "description": "October rent",
                "date": "2025-10-01",
            }))
            .await
            .assert_status_ok();

        let summary = server.get(endpoints::SUMMARY).await.json::<Summary>();

        assert_eq!(summary.total_income, 2500.0);
        assert_eq!(summary.total_expenses, 950.5);
        assert_eq!(summary.total_balance, 1549.5);
        assert_eq!(summary.history.len(), 2);
    }

    #[tokio::test]
    async fn invalid_summary_limit_is_400_with_message() {
        let server = get_test_server();

        let response = server
            .get(endpoints::SUMMARY)
            .add_query_param("limit", "abc")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Message>(),
            Message::new("Limit must be a non-negative whole number!")
        );
    }

    #[tokio::test]
    async fn wrong_method_is_405_json() {
        let server = get_test_server();

        let response = server.get(endpoints::ADD_INCOME).await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.json::<Message>(), Message::new("Method Not Allowed"));
    }

    #[tokio::test]
    async fn numeric_title_is_stored_as_text() {
        let server = get_test_server();
        let mut body = salary();
        body["title"] = json!(5);

        let response = server.post(endpoints::ADD_INCOME).json(&body).await;

        response.assert_status_ok();
        assert_eq!(response.json::<serde_json::Value>()["record"]["title"], "5");
    }

    #[tokio::test]
    async fn wrongly_typed_field_is_named_in_message() {
        let server = get_test_server();
        let mut body = salary();
        body["title"] = json!({ "name": "Salary" });

        let response = server.post(endpoints::ADD_INCOME).json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let message = response.json::<Message>().message;
        assert!(message.contains("title"), "message was {message:?}");
    }

    #[tokio::test]
    async fn unknown_route_is_404_json() {
        let server = get_test_server();

        let response = server.get("/api/v1/get-budgets").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Message>(), Message::new("Not Found"));
    }
}
