//! Shared fixtures for tests against a mock catalog API.

#![allow(dead_code)]

use std::time::Duration;

use mockito::{Mock, ServerGuard};
use pokedex::{PokeApiClient, TtlCache};
use serde_json::{json, Value};

pub const TEST_TTL: Duration = Duration::from_secs(60);

/// Client pointed at the mock server, with a fresh cache.
pub fn client_for(server: &ServerGuard) -> PokeApiClient {
    let cache = TtlCache::new(TEST_TTL);
    PokeApiClient::with_base_url(server.url(), cache).unwrap()
}

/// Registers a JSON response at `path`, expected to be hit `hits` times.
pub async fn mock_json(server: &mut ServerGuard, path: &str, body: &Value, hits: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(hits)
        .create_async()
        .await
}

pub fn location_page(next: Option<String>, previous: Option<String>, names: &[&str]) -> Value {
    let results: Vec<Value> = names
        .iter()
        .map(|name| json!({ "name": name, "url": format!("https://example.test/{}", name) }))
        .collect();
    json!({
        "count": 40,
        "next": next,
        "previous": previous,
        "results": results,
    })
}

pub fn location_area(name: &str, pokemon: &[&str]) -> Value {
    let encounters: Vec<Value> = pokemon
        .iter()
        .map(|p| json!({ "pokemon": { "name": p, "url": "u" }, "version_details": [] }))
        .collect();
    json!({
        "id": 1,
        "name": name,
        "pokemon_encounters": encounters,
    })
}

pub fn pokemon(name: &str, base_experience: u32) -> Value {
    json!({
        "id": 1,
        "name": name,
        "base_experience": base_experience,
        "height": 7,
        "weight": 69,
        "stats": [
            { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "u" } },
            { "base_stat": 49, "effort": 0, "stat": { "name": "attack", "url": "u" } }
        ],
        "types": [
            { "slot": 1, "type": { "name": "grass", "url": "u" } },
            { "slot": 2, "type": { "name": "poison", "url": "u" } }
        ]
    })
}
