use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes;
use server::state::ServerState;
use service::memory::InMemoryBookingRepository;

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

fn build_app() -> (Router, InMemoryBookingRepository) {
    let repo = InMemoryBookingRepository::new();
    let state = ServerState::new(Arc::new(repo.clone()));
    (routes::build_router(state, cors()), repo)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    send_raw(app, req).await
}

async fn send_raw(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

async fn create_named(app: &Router, path: &str, name: &str) -> anyhow::Result<Value> {
    let (status, body) = send(app, "POST", path, Some(json!({ "name": name }))).await?;
    assert_eq!(status, StatusCode::CREATED);
    Ok(body)
}

async fn count(app: &Router, path: &str) -> anyhow::Result<usize> {
    let (status, body) = send(app, "GET", path, None).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(body.as_array().map(Vec::len).unwrap_or_default())
}

#[tokio::test]
async fn health_ok() -> anyhow::Result<()> {
    let (app, _) = build_app();
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn create_customer_returns_record_with_fresh_id() -> anyhow::Result<()> {
    let (app, _) = build_app();
    let a = create_named(&app, "/api/customers", "Ada").await?;
    let b = create_named(&app, "/api/customers", "Ada").await?;
    assert_eq!(a["name"], "Ada");
    let id_a: Uuid = serde_json::from_value(a["id"].clone())?;
    let id_b: Uuid = serde_json::from_value(b["id"].clone())?;
    assert_ne!(id_a, id_b);

    let (_, list) = send(&app, "GET", "/api/customers", None).await?;
    let ids: Vec<&Value> = list.as_array().unwrap().iter().map(|c| &c["id"]).collect();
    assert!(ids.contains(&&a["id"]));
    assert!(ids.contains(&&b["id"]));
    Ok(())
}

#[tokio::test]
async fn customer_without_name_is_400_and_creates_nothing() -> anyhow::Result<()> {
    let (app, _) = build_app();
    create_named(&app, "/api/customers", "Ada").await?;
    let before = count(&app, "/api/customers").await?;

    for body in [Some(json!({})), Some(json!({ "name": "" })), Some(json!({ "name": null })), None] {
        let (status, err) = send(&app, "POST", "/api/customers", body).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err, json!({ "error": "Name is required" }));
    }

    assert_eq!(count(&app, "/api/customers").await?, before);
    Ok(())
}

#[tokio::test]
async fn whitespace_only_names_are_accepted() -> anyhow::Result<()> {
    let (app, _) = build_app();
    for path in ["/api/customers", "/api/restaurants"] {
        for name in ["   ", "\t"] {
            let created = create_named(&app, path, name).await?;
            assert_eq!(created["name"], name);
        }
        assert_eq!(count(&app, path).await?, 2);
    }
    Ok(())
}

#[tokio::test]
async fn restaurants_mirror_customers() -> anyhow::Result<()> {
    let (app, _) = build_app();
    let r = create_named(&app, "/api/restaurants", "Luigi's").await?;
    assert_eq!(r["name"], "Luigi's");
    assert!(serde_json::from_value::<Uuid>(r["id"].clone()).is_ok());

    let (status, err) = send(&app, "POST", "/api/restaurants", Some(json!({}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "Name is required");
    assert_eq!(count(&app, "/api/restaurants").await?, 1);
    Ok(())
}

#[tokio::test]
async fn reservation_is_created_and_listed_once() -> anyhow::Result<()> {
    let (app, _) = build_app();
    let c = create_named(&app, "/api/customers", "Ada").await?;
    let r = create_named(&app, "/api/restaurants", "Luigi's").await?;
    let uri = format!("/api/customers/{}/reservations", c["id"].as_str().unwrap());

    let (status, res) = send(
        &app,
        "POST",
        &uri,
        Some(json!({ "restaurant_id": r["id"], "date": "2024-05-01", "party_count": 4 })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(res["date"], "2024-05-01");
    assert_eq!(res["party_count"], 4);
    assert_eq!(res["restaurant_id"], r["id"]);
    assert_eq!(res["customer_id"], c["id"]);
    assert_ne!(res["id"], c["id"]);
    assert_ne!(res["id"], r["id"]);

    let (_, list) = send(&app, "GET", "/api/reservations", None).await?;
    let hits = list.as_array().unwrap().iter().filter(|x| x["id"] == res["id"]).count();
    assert_eq!(hits, 1);
    Ok(())
}

#[tokio::test]
async fn reservation_for_unknown_restaurant_is_500_without_row() -> anyhow::Result<()> {
    let (app, _) = build_app();
    let c = create_named(&app, "/api/customers", "Ada").await?;
    let uri = format!("/api/customers/{}/reservations", c["id"].as_str().unwrap());

    let (status, err) = send(
        &app,
        "POST",
        &uri,
        Some(json!({ "restaurant_id": Uuid::new_v4(), "date": "2024-05-01", "party_count": 2 })),
    )
    .await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err["error"], "Internal Server Error");
    assert_eq!(err["reason"], "invalid_reference");
    assert_eq!(count(&app, "/api/reservations").await?, 0);
    Ok(())
}

#[tokio::test]
async fn reservation_for_unknown_customer_is_500() -> anyhow::Result<()> {
    let (app, _) = build_app();
    let r = create_named(&app, "/api/restaurants", "Luigi's").await?;
    let uri = format!("/api/customers/{}/reservations", Uuid::new_v4());
    let (status, _) = send(
        &app,
        "POST",
        &uri,
        Some(json!({ "restaurant_id": r["id"], "date": "2024-05-01", "party_count": 2 })),
    )
    .await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(count(&app, "/api/reservations").await?, 0);
    Ok(())
}

#[tokio::test]
async fn malformed_reservation_input_is_500() -> anyhow::Result<()> {
    let (app, _) = build_app();
    let c = create_named(&app, "/api/customers", "Ada").await?;
    let r = create_named(&app, "/api/restaurants", "Luigi's").await?;
    let uri = format!("/api/customers/{}/reservations", c["id"].as_str().unwrap());

    let bad_bodies = [
        json!({ "restaurant_id": r["id"], "date": "2024-05-01" }),
        json!({ "restaurant_id": r["id"], "date": "01/05/2024", "party_count": 2 }),
        json!({ "restaurant_id": "not-a-uuid", "date": "2024-05-01", "party_count": 2 }),
        json!({ "restaurant_id": r["id"], "date": "2024-05-01", "party_count": "four" }),
    ];
    for body in bad_bodies {
        let (status, err) = send(&app, "POST", &uri, Some(body)).await?;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err, json!({ "error": "Internal Server Error" }));
    }

    let (status, _) = send(
        &app,
        "POST",
        "/api/customers/not-a-uuid/reservations",
        Some(json!({ "restaurant_id": r["id"], "date": "2024-05-01", "party_count": 2 })),
    )
    .await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(count(&app, "/api/reservations").await?, 0);
    Ok(())
}

#[tokio::test]
async fn unparsable_json_and_wrong_types_are_500() -> anyhow::Result<()> {
    let (app, _) = build_app();
    let req = Request::builder()
        .method("POST")
        .uri("/api/customers")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\":"))?;
    let (status, err) = send_raw(&app, req).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err["error"], "Internal Server Error");

    let (status, _) = send(&app, "POST", "/api/customers", Some(json!({ "name": 5 }))).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(count(&app, "/api/customers").await?, 0);
    Ok(())
}

#[tokio::test]
async fn delete_reservation_is_idempotent() -> anyhow::Result<()> {
    let (app, _) = build_app();
    let c = create_named(&app, "/api/customers", "Ada").await?;
    let r = create_named(&app, "/api/restaurants", "Luigi's").await?;
    let cid = c["id"].as_str().unwrap().to_string();
    let (_, res) = send(
        &app,
        "POST",
        &format!("/api/customers/{cid}/reservations"),
        Some(json!({ "restaurant_id": r["id"], "date": "2024-05-01", "party_count": 4 })),
    )
    .await?;
    let rid = res["id"].as_str().unwrap().to_string();

    let uri = format!("/api/customers/{cid}/reservations/{rid}");
    let (status, body) = send(&app, "DELETE", &uri, None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
    assert_eq!(count(&app, "/api/reservations").await?, 0);

    let (status, _) = send(&app, "DELETE", &uri, None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // The customer segment does not scope the delete
    let other = format!("/api/customers/anyone/reservations/{}", Uuid::new_v4());
    let (status, _) = send(&app, "DELETE", &other, None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn delete_ignores_customer_segment() -> anyhow::Result<()> {
    let (app, _) = build_app();
    let c = create_named(&app, "/api/customers", "Ada").await?;
    let r = create_named(&app, "/api/restaurants", "Luigi's").await?;
    let (_, res) = send(
        &app,
        "POST",
        &format!("/api/customers/{}/reservations", c["id"].as_str().unwrap()),
        Some(json!({ "restaurant_id": r["id"], "date": "2024-05-01", "party_count": 4 })),
    )
    .await?;

    let uri = format!("/api/customers/{}/reservations/{}", Uuid::new_v4(), res["id"].as_str().unwrap());
    let (status, _) = send(&app, "DELETE", &uri, None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(count(&app, "/api/reservations").await?, 0);
    Ok(())
}

#[tokio::test]
async fn reset_clears_everything() -> anyhow::Result<()> {
    let (app, repo) = build_app();
    let c = create_named(&app, "/api/customers", "Ada").await?;
    let r = create_named(&app, "/api/restaurants", "Luigi's").await?;
    send(
        &app,
        "POST",
        &format!("/api/customers/{}/reservations", c["id"].as_str().unwrap()),
        Some(json!({ "restaurant_id": r["id"], "date": "2024-05-01", "party_count": 4 })),
    )
    .await?;

    repo.reset().await;
    assert_eq!(count(&app, "/api/customers").await?, 0);
    assert_eq!(count(&app, "/api/restaurants").await?, 0);
    assert_eq!(count(&app, "/api/reservations").await?, 0);
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_404_json() -> anyhow::Result<()> {
    let (app, _) = build_app();
    let (status, body) = send(&app, "GET", "/api/tables", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> anyhow::Result<()> {
    let (app, _) = build_app();
    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/customers"].is_object());
    Ok(())
}

async fn boom() -> &'static str {
    panic!("boom")
}

#[tokio::test]
async fn panics_become_uniform_500() -> anyhow::Result<()> {
    let app = routes::with_middleware(Router::new().route("/boom", get(boom)), cors());
    let (status, body) = send(&app, "GET", "/boom", None).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
    Ok(())
}
