//! An in-memory hawk catalog service for driving the `hawks` binary.
//!
//! Behaves like the real REST service: lists are filtered by a
//! case-insensitive name match and sorted server-side, creates reject an
//! empty name with `400 {"error": ...}`, deletes answer `204`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use hawks_core::{Gender, Hawk, HawkId, HawkList, Size};
use serde_json::json;

#[derive(Default)]
struct Catalog {
    hawks: Vec<Hawk>,
    next_id: i64,
}

type Shared = Arc<Mutex<Catalog>>;

pub struct MockCatalog {
    addr: SocketAddr,
}

impl MockCatalog {
    /// Start a catalog holding `hawks` (ids are assigned in order).
    pub fn start(hawks: Vec<Hawk>) -> Self {
        let mut catalog = Catalog::default();
        for hawk in hawks {
            catalog.next_id += 1;
            catalog.hawks.push(Hawk {
                id: Some(HawkId(catalog.next_id)),
                ..hawk
            });
        }
        let shared: Shared = Arc::new(Mutex::new(catalog));
        let router = Router::new()
            .route("/hawks", post(create))
            .route("/hawks/list", get(list))
            .route("/hawks/{id}", put(update).delete(remove))
            .with_state(shared);

        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("tokio runtime");
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind catalog");
                tx.send(listener.local_addr().expect("catalog address"))
                    .expect("report address");
                axum::serve(listener, router).await.expect("catalog server");
            });
        });
        Self {
            addr: rx.recv().expect("catalog address"),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/hawks", self.addr)
    }
}

/// A URL nothing listens on.
pub fn dead_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    format!("http://127.0.0.1:{}/hawks", port)
}

pub fn hawk(name: &str, size: Size, gender: Gender) -> Hawk {
    Hawk {
        name: name.to_string(),
        size,
        gender,
        length_begin: 40.0,
        length_end: 60.0,
        wingspan_begin: 100.0,
        wingspan_end: 130.0,
        weight_begin: 500.0,
        weight_end: 1500.0,
        color_description: "brown".to_string(),
        behavior_description: "soars".to_string(),
        habitat_description: "open country".to_string(),
        picture_url: format!("https://example.org/{}.jpg", name.replace(' ', "-")),
        ..Hawk::default()
    }
}

/// Fire Hawk (id 1) and Red Tail Hawk (id 2).
pub fn two_hawks() -> Vec<Hawk> {
    vec![
        hawk("Fire Hawk", Size::Medium, Gender::Male),
        hawk("Red Tail Hawk", Size::Large, Gender::Female),
    ]
}

async fn list(
    State(catalog): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<HawkList> {
    let catalog = catalog.lock().unwrap();
    let needle = query.get("filter").cloned().unwrap_or_default().to_lowercase();
    let mut hawks: Vec<Hawk> = catalog
        .hawks
        .iter()
        .filter(|h| h.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    match query.get("sortField").map(String::as_str) {
        Some("size") => hawks.sort_by_key(|h| h.size as u8),
        Some("gender") => hawks.sort_by_key(|h| h.gender as u8),
        _ => hawks.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    if query.get("sortDir").map(String::as_str) == Some("desc") {
        hawks.reverse();
    }
    Json(HawkList { hawks })
}

async fn create(State(catalog): State<Shared>, Json(hawk): Json<Hawk>) -> Response {
    if hawk.name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "name is required"})),
        )
            .into_response();
    }
    let mut catalog = catalog.lock().unwrap();
    catalog.next_id += 1;
    let stored = Hawk {
        id: Some(HawkId(catalog.next_id)),
        ..hawk
    };
    catalog.hawks.push(stored.clone());
    Json(stored).into_response()
}

async fn update(
    State(catalog): State<Shared>,
    Path(id): Path<i64>,
    Json(hawk): Json<Hawk>,
) -> Response {
    let mut catalog = catalog.lock().unwrap();
    match catalog.hawks.iter_mut().find(|h| h.id == Some(HawkId(id))) {
        Some(slot) => {
            *slot = Hawk {
                id: Some(HawkId(id)),
                ..hawk
            };
            Json(slot.clone()).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("hawk {} not found", id)})),
        )
            .into_response(),
    }
}

async fn remove(State(catalog): State<Shared>, Path(id): Path<i64>) -> StatusCode {
    let mut catalog = catalog.lock().unwrap();
    let before = catalog.hawks.len();
    catalog.hawks.retain(|h| h.id != Some(HawkId(id)));
    if catalog.hawks.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
