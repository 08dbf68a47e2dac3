//! Stateless HTTP request builder and response parser for the heroes API.
//!
//! # Design
//! `HeroClient` holds only the heroes collection URL and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. A `Transport` executes the round-trip in between, keeping
//! this half deterministic and free of I/O.

use serde::de::DeserializeOwned;

use crate::error::TransportFailure;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Hero, HeroId};

/// Headers attached to every mutating request.
fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// Synchronous, stateless client for the heroes API.
#[derive(Debug, Clone)]
pub struct HeroClient {
    heroes_url: String,
}

impl HeroClient {
    /// `heroes_url` is the collection URL, e.g. `http://localhost:3333/heroes`.
    pub fn new(heroes_url: &str) -> Self {
        Self {
            heroes_url: heroes_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn heroes_url(&self) -> &str {
        &self.heroes_url
    }

    fn hero_url(&self, id: HeroId) -> String {
        format!("{}/{id}", self.heroes_url)
    }

    pub fn build_list_heroes(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.heroes_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_hero(&self, id: HeroId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.hero_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_add_hero(&self, hero: &Hero) -> Result<HttpRequest, TransportFailure> {
        let body = serde_json::to_string(hero).map_err(TransportFailure::encode)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.heroes_url.clone(),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_update_hero(&self, hero: &Hero) -> Result<HttpRequest, TransportFailure> {
        let body = serde_json::to_string(hero).map_err(TransportFailure::encode)?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: self.hero_url(hero.id),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete_hero(&self, id: HeroId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.hero_url(id),
            headers: json_headers(),
            body: None,
        }
    }

    pub fn parse_list_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, TransportFailure> {
        decode(&check_status(response)?)
    }

    pub fn parse_get_hero(&self, response: HttpResponse) -> Result<Hero, TransportFailure> {
        decode(&check_status(response)?)
    }

    pub fn parse_add_hero(&self, response: HttpResponse) -> Result<Hero, TransportFailure> {
        decode(&check_status(response)?)
    }

    /// `Ok(None)` when the server acknowledged the update without a body.
    pub fn parse_update_hero(&self, response: HttpResponse) -> Result<Option<Hero>, TransportFailure> {
        decode_optional(&check_status(response)?)
    }

    /// `Ok(None)` when the server acknowledged the delete without a body.
    pub fn parse_delete_hero(&self, response: HttpResponse) -> Result<Option<Hero>, TransportFailure> {
        decode_optional(&check_status(response)?)
    }
}

/// Turn a non-2xx response into a `TransportFailure`, otherwise yield the body.
fn check_status(response: HttpResponse) -> Result<String, TransportFailure> {
    if response.is_success() {
        Ok(response.body)
    } else {
        Err(TransportFailure::from_status(response.status, &response.body))
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, TransportFailure> {
    serde_json::from_str(body).map_err(TransportFailure::decode)
}

fn decode_optional<T: DeserializeOwned>(body: &str) -> Result<Option<T>, TransportFailure> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    decode(body).map(Some)
}
