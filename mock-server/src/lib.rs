use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub type HeroId = u64;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
}

/// Body accepted by POST and PUT. A missing or zero id means "not assigned".
#[derive(Deserialize)]
pub struct HeroInput {
    #[serde(default)]
    pub id: HeroId,
    pub name: String,
}

pub type Db = Arc<RwLock<BTreeMap<HeroId, Hero>>>;

/// The roster the server starts with when run as a binary.
pub fn seed_heroes() -> Vec<Hero> {
    [
        (12, "Dr. Nice"),
        (13, "Bombasto"),
        (14, "Celeritas"),
        (15, "Magneta"),
        (16, "RubberMan"),
        (17, "Dynama"),
        (18, "Dr. IQ"),
        (19, "Magma"),
        (20, "Tornado"),
    ]
    .into_iter()
    .map(|(id, name)| Hero {
        id,
        name: name.to_string(),
    })
    .collect()
}

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(heroes: Vec<Hero>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        heroes.into_iter().map(|hero| (hero.id, hero)).collect(),
    ));
    Router::new()
        .route("/heroes", get(list_heroes).post(create_hero))
        .route("/heroes/{id}", get(get_hero).put(update_hero).delete(delete_hero))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener, heroes: Vec<Hero>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(heroes)).await
}

/// Next free id: one past the highest, or 11 for an empty store.
/// `None` once the highest id is `HeroId::MAX`.
fn gen_id(heroes: &BTreeMap<HeroId, Hero>) -> Option<HeroId> {
    match heroes.keys().next_back() {
        Some(max) => max.checked_add(1),
        None => Some(11),
    }
}

async fn list_heroes(State(db): State<Db>) -> Json<Vec<Hero>> {
    let heroes = db.read().await;
    Json(heroes.values().cloned().collect())
}

async fn create_hero(
    State(db): State<Db>,
    Json(input): Json<HeroInput>,
) -> Result<(StatusCode, Json<Hero>), StatusCode> {
    let mut heroes = db.write().await;
    let id = if input.id == 0 {
        gen_id(&heroes).ok_or_else(|| {
            tracing::warn!("hero id space exhausted");
            StatusCode::INSUFFICIENT_STORAGE
        })?
    } else {
        input.id
    };
    if heroes.contains_key(&id) {
        tracing::warn!(id, "hero already exists");
        return Err(StatusCode::CONFLICT);
    }
    let hero = Hero {
        id,
        name: input.name,
    };
    heroes.insert(id, hero.clone());
    tracing::info!(id, name = %hero.name, "hero created");
    Ok((StatusCode::CREATED, Json(hero)))
}

async fn get_hero(
    State(db): State<Db>,
    Path(id): Path<HeroId>,
) -> Result<Json<Hero>, StatusCode> {
    let heroes = db.read().await;
    heroes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_hero(
    State(db): State<Db>,
    Path(id): Path<HeroId>,
    Json(input): Json<HeroInput>,
) -> Result<Json<Hero>, StatusCode> {
    if input.id != 0 && input.id != id {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut heroes = db.write().await;
    let hero = heroes.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    hero.name = input.name;
    tracing::info!(id, name = %hero.name, "hero updated");
    Ok(Json(hero.clone()))
}

async fn delete_hero(
    State(db): State<Db>,
    Path(id): Path<HeroId>,
) -> Result<Json<Hero>, StatusCode> {
    let mut heroes = db.write().await;
    let hero = heroes.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    tracing::info!(id, "hero deleted");
    Ok(Json(hero))
}
