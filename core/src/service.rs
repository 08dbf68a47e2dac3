//! `HeroService`: the five hero operations over an injected transport.
//!
//! # Design
//! Each operation is `build_*` -> `Transport::execute` -> `parse_*`, wrapped in
//! `with_fallback`. Success and failure are both reported to the injected
//! `MessageLog`, prefixed with `HeroService: `. No operation returns an error:
//! list failures yield an empty vector, everything else yields `None`.

use std::sync::Arc;

use crate::client::HeroClient;
use crate::config::HeroServiceConfig;
use crate::error::TransportFailure;
use crate::fallback::with_fallback;
use crate::http::Transport;
use crate::messages::MessageLog;
use crate::types::{Hero, HeroId};

/// Client-side access to the heroes REST resource.
#[derive(Clone)]
pub struct HeroService {
    client: HeroClient,
    transport: Arc<dyn Transport>,
    messages: Arc<dyn MessageLog>,
}

impl HeroService {
    pub fn new(
        config: &HeroServiceConfig,
        transport: Arc<dyn Transport>,
        messages: Arc<dyn MessageLog>,
    ) -> Self {
        Self {
            client: HeroClient::new(&config.heroes_url),
            transport,
            messages,
        }
    }

    pub fn heroes_url(&self) -> &str {
        self.client.heroes_url()
    }

    fn log(&self, message: &str) {
        self.messages.add(&format!("HeroService: {message}"));
    }

    /// GET all heroes. Empty on failure.
    pub async fn get_heroes(&self) -> Vec<Hero> {
        let operation = async {
            let request = self.client.build_list_heroes();
            tracing::debug!(url = %request.url, "listing heroes");
            let heroes = self.client.parse_list_heroes(self.transport.execute(request).await?)?;
            self.log("fetched heroes");
            Ok::<_, TransportFailure>(heroes)
        };
        with_fallback("getHeroes", operation, Vec::new(), |m| self.log(m)).await
    }

    /// GET one hero by id. `None` on failure, including 404.
    pub async fn get_hero(&self, id: HeroId) -> Option<Hero> {
        let operation = async {
            let request = self.client.build_get_hero(id);
            tracing::debug!(url = %request.url, "fetching hero");
            let hero = self.client.parse_get_hero(self.transport.execute(request).await?)?;
            self.log(&format!("fetched hero id: {id}"));
            Ok::<_, TransportFailure>(Some(hero))
        };
        with_fallback(&format!("getHero id: {id}"), operation, None, |m| self.log(m)).await
    }

    /// PUT the hero to its own URL.
    ///
    /// Returns the server's copy, or `None` if the server replied without a
    /// body or the request failed.
    pub async fn update_hero(&self, hero: &Hero) -> Option<Hero> {
        let operation = async {
            let request = self.client.build_update_hero(hero)?;
            tracing::debug!(url = %request.url, "updating hero");
            let updated = self.client.parse_update_hero(self.transport.execute(request).await?)?;
            self.log(&format!("updated hero id: {}", hero.id));
            Ok::<_, TransportFailure>(updated)
        };
        with_fallback("updateHero", operation, None, |m| self.log(m)).await
    }

    /// POST a new hero. The returned record carries the server-assigned id.
    pub async fn add_hero(&self, hero: &Hero) -> Option<Hero> {
        let operation = async {
            let request = self.client.build_add_hero(hero)?;
            tracing::debug!(url = %request.url, "adding hero");
            let created = self.client.parse_add_hero(self.transport.execute(request).await?)?;
            self.log(&format!("added hero id: {}", created.id));
            Ok::<_, TransportFailure>(Some(created))
        };
        with_fallback("addHero", operation, None, |m| self.log(m)).await
    }

    /// DELETE a hero by id. Returns the deleted record if the server sent one.
    pub async fn delete_hero(&self, id: HeroId) -> Option<Hero> {
        let operation = async {
            let request = self.client.build_delete_hero(id);
            tracing::debug!(url = %request.url, "deleting hero");
            let deleted = self.client.parse_delete_hero(self.transport.execute(request).await?)?;
            self.log(&format!("deleted hero id: {id}"));
            Ok::<_, TransportFailure>(deleted)
        };
        with_fallback("deleteHero", operation, None, |m| self.log(m)).await
    }
}
