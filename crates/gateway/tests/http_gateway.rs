//! `HttpGateway` against a stub catalog service.
//!
//! Each test starts an axum stub on an ephemeral port in a background
//! thread, then drives the blocking client from the test thread.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use hawks_core::{
    GatewayError, Gender, Hawk, HawkGateway, HawkId, QueryParams, Size, SortDirection, SortField,
};
use hawks_gateway::HttpGateway;
use serde_json::{json, Value};

type Seen = Arc<Mutex<Vec<Value>>>;

fn spawn(router: Router) -> SocketAddr {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind stub");
            tx.send(listener.local_addr().expect("stub address"))
                .expect("report address");
            axum::serve(listener, router).await.expect("stub server");
        });
    });
    rx.recv().expect("stub address")
}

async fn list(
    State(seen): State<Seen>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    seen.lock().unwrap().push(json!(query));
    if query.get("filter").map(String::as_str) == Some("boom") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "database unavailable"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "hawks": [
                {
                    "id": 2, "name": "Red Tail Hawk", "size": "LARGE", "gender": "FEMALE",
                    "lengthBegin": 45, "lengthEnd": 65, "wingspanBegin": 114, "wingspanEnd": 133,
                    "weightBegin": 690, "weightEnd": 1600, "colorDescription": "brown",
                    "behaviorDescription": "soars", "habitatDescription": "fields",
                    "pictureUrl": "https://example.org/rth.jpg"
                },
                {
                    "id": 1, "name": "Fire Hawk", "size": "MEDIUM", "gender": "MALE",
                    "lengthBegin": 30, "lengthEnd": 40, "wingspanBegin": 80, "wingspanEnd": 95,
                    "weightBegin": 400, "weightEnd": 700, "colorDescription": "red",
                    "behaviorDescription": "spreads fire", "habitatDescription": "savanna",
                    "pictureUrl": "https://example.org/fire.jpg"
                }
            ]
        })),
    )
}

async fn create(State(seen): State<Seen>, Json(body): Json<Value>) -> impl IntoResponse {
    seen.lock().unwrap().push(body.clone());
    if body["name"].as_str().unwrap_or("").is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "name is required"})),
        );
    }
    let mut stored = body;
    stored["id"] = json!(3);
    (StatusCode::OK, Json(stored))
}

async fn update(
    State(seen): State<Seen>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    seen.lock().unwrap().push(json!({"id": id, "body": body}));
    if id == 404 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "hawk 404 not found"})),
        );
    }
    (StatusCode::OK, Json(body))
}

async fn remove(State(seen): State<Seen>, Path(id): Path<i64>) -> StatusCode {
    seen.lock().unwrap().push(json!({"deleted": id}));
    if id == 1 {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::OK
    }
}

fn stub() -> (HttpGateway, Seen) {
    let seen: Seen = Arc::default();
    let router = Router::new()
        .route("/hawks", post(create))
        .route("/hawks/list", get(list))
        .route("/hawks/{id}", put(update).delete(remove))
        .with_state(seen.clone());
    let addr = spawn(router);
    let gateway = HttpGateway::new(&format!("http://{}/hawks/", addr), None);
    (gateway, seen)
}

fn sample() -> Hawk {
    Hawk {
        name: "Cooper's Hawk".to_string(),
        size: Size::Small,
        gender: Gender::Female,
        length_begin: 35.0,
        length_end: 50.0,
        ..Hawk::default()
    }
}

#[test]
fn list_sends_query_parameters_and_keeps_order() {
    let (gateway, seen) = stub();
    let params = QueryParams {
        filter: "red tail".to_string(),
        sort_field: SortField::Gender,
        sort_dir: SortDirection::Desc,
    };

    let hawks = gateway.list(&params).expect("list succeeds");
    let names: Vec<_> = hawks.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Red Tail Hawk", "Fire Hawk"]);
    assert_eq!(hawks[0].id, Some(HawkId(2)));
    assert_eq!(hawks[0].size, Size::Large);

    let query = &seen.lock().unwrap()[0];
    assert_eq!(query["filter"], "red tail");
    assert_eq!(query["sortField"], "gender");
    assert_eq!(query["sortDir"], "desc");
}

#[test]
fn list_failure_carries_status_and_service_message() {
    let (gateway, _) = stub();
    let err = gateway
        .list(&QueryParams::default().with_filter("boom"))
        .unwrap_err();
    assert_eq!(
        err,
        GatewayError::Rejected {
            status: 500,
            message: "database unavailable".to_string(),
        }
    );
}

#[test]
fn create_posts_record_without_id() {
    let (gateway, seen) = stub();
    let mut hawk = sample();
    hawk.id = Some(HawkId(-1));
    gateway.create(&hawk).expect("create succeeds");

    let body = &seen.lock().unwrap()[0];
    assert!(body.get("id").is_none());
    assert_eq!(body["name"], "Cooper's Hawk");
    assert_eq!(body["gender"], "FEMALE");
    assert_eq!(body["lengthEnd"], 50.0);
}

#[test]
fn create_rejection_returns_error_text() {
    let (gateway, _) = stub();
    let err = gateway.create(&Hawk::default()).unwrap_err();
    assert_eq!(err.user_message(), "name is required");
}

#[test]
fn update_puts_to_record_path() {
    let (gateway, seen) = stub();
    gateway.update(HawkId(7), &sample()).expect("update succeeds");
    assert_eq!(seen.lock().unwrap()[0]["id"], 7);

    let err = gateway.update(HawkId(404), &sample()).unwrap_err();
    assert_eq!(err.user_message(), "hawk 404 not found");
}

#[test]
fn delete_requires_no_content() {
    let (gateway, _) = stub();
    gateway.delete(HawkId(1)).expect("204 is success");

    match gateway.delete(HawkId(2)) {
        Err(GatewayError::Rejected { status: 200, .. }) => {}
        other => panic!("expected rejection of 200, got {:?}", other),
    }
}

#[test]
fn unreachable_service_is_a_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let gateway = HttpGateway::new(&format!("http://127.0.0.1:{}/hawks", port), None);
    match gateway.list(&QueryParams::default()) {
        Err(GatewayError::Transport(_)) => {}
        other => panic!("expected transport error, got {:?}", other),
    }
}
