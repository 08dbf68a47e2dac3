//! Domain DTOs for the heroes API.
//!
//! # Design
//! The client only relies on `id` (for URL construction) and `name`. Every
//! other field the server sends is captured in `extra` and written back
//! unchanged, so the record stays opaque to this crate. These types mirror the
//! mock-server's schema but are defined independently; integration tests catch
//! drift between the two crates.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a hero. Integer ids are assigned by the server.
pub type HeroId = u64;

/// A single hero record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hero {
    /// `0` for a hero the server has not assigned an id to yet.
    #[serde(default)]
    pub id: HeroId,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Hero {
    pub fn new(id: HeroId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// A hero without an id, ready to be sent to `add_hero`.
    pub fn unsaved(name: impl Into<String>) -> Self {
        Self::new(0, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_defaults_to_zero() {
        let hero: Hero = serde_json::from_str(r#"{"name":"Narco"}"#).unwrap();
        assert_eq!(hero.id, 0);
        assert_eq!(hero.name, "Narco");
    }

    #[test]
    fn unknown_fields_survive_a_roundtrip() {
        let hero: Hero =
            serde_json::from_str(r#"{"id":13,"name":"Bombasto","power":"explosions"}"#).unwrap();
        assert_eq!(hero.extra["power"], "explosions");

        let json = serde_json::to_value(&hero).unwrap();
        assert_eq!(json["id"], 13);
        assert_eq!(json["power"], "explosions");
    }

    #[test]
    fn missing_name_is_rejected() {
        let result: Result<Hero, _> = serde_json::from_str(r#"{"id":1}"#);
        assert!(result.is_err());
    }
}
