use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, seed_heroes, Hero};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

fn hero(id: u64, name: &str) -> Hero {
    Hero {
        id,
        name: name.to_string(),
    }
}

// --- list ---

#[tokio::test]
async fn list_heroes_empty() {
    let resp = app().oneshot(empty_request("GET", "/heroes")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let heroes: Vec<Hero> = body_json(resp).await;
    assert!(heroes.is_empty());
}

#[tokio::test]
async fn list_heroes_ordered_by_id() {
    let app = app_with(vec![hero(20, "Tornado"), hero(12, "Dr. Nice"), hero(15, "Magneta")]);
    let resp = app.oneshot(empty_request("GET", "/heroes")).await.unwrap();

    let heroes: Vec<Hero> = body_json(resp).await;
    let ids: Vec<u64> = heroes.iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![12, 15, 20]);
}

// --- create ---

#[tokio::test]
async fn create_hero_without_id_gets_generated_id() {
    let resp = app()
        .oneshot(json_request("POST", "/heroes", r#"{"name":"Narco"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Hero = body_json(resp).await;
    assert_eq!(created, hero(11, "Narco"));
}

#[tokio::test]
async fn create_hero_follows_highest_existing_id() {
    let resp = app_with(seed_heroes())
        .oneshot(json_request("POST", "/heroes", r#"{"id":0,"name":"Windstorm"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Hero = body_json(resp).await;
    assert_eq!(created.id, 21);
}

#[tokio::test]
async fn create_hero_with_taken_id_returns_409() {
    let resp = app_with(seed_heroes())
        .oneshot(json_request("POST", "/heroes", r#"{"id":12,"name":"Impostor"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn create_hero_after_max_id_returns_507() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/heroes",
            &format!(r#"{{"id":{},"name":"Last"}}"#, u64::MAX),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/heroes", r#"{"name":"Next"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INSUFFICIENT_STORAGE);

    // The store is still usable.
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/heroes"))
        .await
        .unwrap();
    let heroes: Vec<Hero> = body_json(resp).await;
    assert_eq!(heroes, vec![hero(u64::MAX, "Last")]);
}

#[tokio::test]
async fn create_hero_missing_name_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/heroes", r#"{"id":5}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_hero_found() {
    let resp = app_with(seed_heroes())
        .oneshot(empty_request("GET", "/heroes/13"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Hero = body_json(resp).await;
    assert_eq!(fetched, hero(13, "Bombasto"));
}

#[tokio::test]
async fn get_hero_not_found() {
    let resp = app().oneshot(empty_request("GET", "/heroes/99")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn get_hero_non_numeric_id_returns_400() {
    let resp = app().oneshot(empty_request("GET", "/heroes/abc")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- update ---

#[tokio::test]
async fn update_hero_not_found() {
    let resp = app()
        .oneshot(json_request("PUT", "/heroes/99", r#"{"id":99,"name":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_hero_id_mismatch_returns_400() {
    let resp = app_with(seed_heroes())
        .oneshot(json_request("PUT", "/heroes/12", r#"{"id":13,"name":"Mixed up"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delete ---

#[tokio::test]
async fn delete_hero_not_found() {
    let resp = app().oneshot(empty_request("DELETE", "/heroes/99")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/heroes", r#"{"name":"Celeritas"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Hero = body_json(resp).await;
    assert_eq!(created.name, "Celeritas");
    let id = created.id;

    // list — should contain the one hero
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/heroes"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let heroes: Vec<Hero> = body_json(resp).await;
    assert_eq!(heroes, vec![created.clone()]);

    // update
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/heroes/{id}"),
            &format!(r#"{{"id":{id},"name":"Celeritas Prime"}}"#),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Hero = body_json(resp).await;
    assert_eq!(updated, hero(id, "Celeritas Prime"));

    // get reflects the update
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/heroes/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Hero = body_json(resp).await;
    assert_eq!(fetched, updated);

    // delete returns the removed hero
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/heroes/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: Hero = body_json(resp).await;
    assert_eq!(deleted, updated);

    // get after delete — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/heroes/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete — empty
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/heroes"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let heroes: Vec<Hero> = body_json(resp).await;
    assert!(heroes.is_empty());
}
