//! In-memory data provider shared by the integration suites.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use pokedex::error::{PokedexError, Result};
use pokedex::sources::{
    CreatureRecord, FlavorTextEntry, Locator, NamedResource, PokeProvider, SpeciesRecord, TypeSlot,
};

/// Base used for the URLs inside fake listings.
pub const FAKE_BASE: &str = "https://fake.test/api/v2";

/// One provider request, in the order it was issued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    List { offset: u32, limit: u32 },
    Creature(Locator),
    Species(u32),
    Types,
    TypeMembers(String),
}

/// What: Provider over a fixed creature table that records every call.
///
/// Details:
/// - Creature `n` is named `mon{n}` with type `normal`, except 4 (`charmander`, fire) and
///   25 (`pikachu`, electric).
/// - Species have a Spanish and an English entry unless listed in `no_spanish`.
/// - With `delay` set, each record lookup sleeps that long and `max_inflight` keeps the
///   highest number of record lookups running at once.
pub struct FakeProvider {
    pub count: u32,
    pub calls: Mutex<Vec<Call>>,
    pub network_down: AtomicBool,
    pub types_down: AtomicBool,
    pub broken: HashSet<u32>,
    pub no_spanish: HashSet<u32>,
    pub delay: Option<Duration>,
    pub inflight: AtomicUsize,
    pub max_inflight: AtomicUsize,
}

impl FakeProvider {
    /// Provider with creatures `1..=count`.
    pub fn new(count: u32) -> Self {
        Self {
            count,
            calls: Mutex::new(Vec::new()),
            network_down: AtomicBool::new(false),
            types_down: AtomicBool::new(false),
            broken: HashSet::new(),
            no_spanish: HashSet::new(),
            delay: None,
            inflight: AtomicUsize::new(0),
            max_inflight: AtomicUsize::new(0),
        }
    }

    /// Snapshot of the calls so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    /// Forget recorded calls.
    pub fn clear_calls(&self) {
        self.calls.lock().expect("calls lock").clear();
    }

    /// Make every request fail (or succeed again).
    pub fn set_network_down(&self, down: bool) {
        self.network_down.store(down, Ordering::SeqCst);
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().expect("calls lock").push(call);
        if self.network_down.load(Ordering::SeqCst) {
            return Err(PokedexError::Network {
                url: FAKE_BASE.into(),
                message: "connection refused".into(),
            });
        }
        Ok(())
    }

    pub fn creature_url(id: u32) -> String {
        format!("{FAKE_BASE}/pokemon/{id}/")
    }

    fn name_of(id: u32) -> String {
        match id {
            4 => "charmander".into(),
            25 => "pikachu".into(),
            n => format!("mon{n}"),
        }
    }

    fn type_of(id: u32) -> &'static str {
        match id {
            4 => "fire",
            25 => "electric",
            _ => "normal",
        }
    }

    fn resolve(&self, locator: &Locator) -> Option<u32> {
        let key = match locator {
            Locator::Url(u) => u
                .trim_end_matches('/')
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .to_string(),
            Locator::Key(k) => k.clone(),
        };
        if let Ok(id) = key.parse::<u32>() {
            return (1..=self.count).contains(&id).then_some(id);
        }
        (1..=self.count).find(|&id| Self::name_of(id) == key)
    }

    fn by_type(&self) -> BTreeMap<&'static str, Vec<u32>> {
        let mut map: BTreeMap<&'static str, Vec<u32>> = BTreeMap::new();
        for id in 1..=self.count {
            map.entry(Self::type_of(id)).or_default().push(id);
        }
        map
    }
}

fn named(name: &str, url: String) -> NamedResource {
    NamedResource {
        name: name.to_string(),
        url,
    }
}

#[async_trait]
impl PokeProvider for FakeProvider {
    async fn list_creatures(&self, offset: u32, limit: u32) -> Result<Vec<NamedResource>> {
        self.record(Call::List { offset, limit })?;
        let first = offset.saturating_add(1);
        let last = offset.saturating_add(limit).min(self.count);
        Ok((first..=last)
            .map(|id| named(&Self::name_of(id), Self::creature_url(id)))
            .collect())
    }

    async fn creature(&self, locator: &Locator) -> Result<CreatureRecord> {
        self.record(Call::Creature(locator.clone()))?;
        if let Some(delay) = self.delay {
            let now = self.inflight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_inflight.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(delay).await;
            self.inflight.fetch_sub(1, Ordering::SeqCst);
        }
        let url = match locator {
            Locator::Url(u) => u.clone(),
            Locator::Key(k) => format!("{FAKE_BASE}/pokemon/{k}"),
        };
        let Some(id) = self.resolve(locator) else {
            return Err(PokedexError::NotFound { url });
        };
        if self.broken.contains(&id) {
            return Err(PokedexError::Network {
                url,
                message: "HTTP status 500".into(),
            });
        }
        Ok(CreatureRecord {
            id,
            name: Self::name_of(id),
            types: vec![TypeSlot {
                kind: named(Self::type_of(id), format!("{FAKE_BASE}/type/{}/", Self::type_of(id))),
            }],
        })
    }

    async fn species(&self, id: u32) -> Result<SpeciesRecord> {
        self.record(Call::Species(id))?;
        let mut entries = vec![FlavorTextEntry {
            flavor_text: format!("Creature\n{id}\u{c}description."),
            language: named("en", String::new()),
        }];
        if !self.no_spanish.contains(&id) {
            entries.push(FlavorTextEntry {
                flavor_text: format!("Descripción\nde la\u{c}criatura {id}."),
                language: named("es", String::new()),
            });
        }
        Ok(SpeciesRecord {
            flavor_text_entries: entries,
        })
    }

    async fn types(&self) -> Result<Vec<NamedResource>> {
        self.record(Call::Types)?;
        if self.types_down.load(Ordering::SeqCst) {
            return Err(PokedexError::Network {
                url: format!("{FAKE_BASE}/type/"),
                message: "timed out".into(),
            });
        }
        Ok(self
            .by_type()
            .keys()
            .map(|t| named(t, format!("{FAKE_BASE}/type/{t}/")))
            .collect())
    }

    async fn type_members(&self, name: &str) -> Result<Vec<NamedResource>> {
        self.record(Call::TypeMembers(name.to_string()))?;
        let map = self.by_type();
        let Some(ids) = map.get(name) else {
            return Err(PokedexError::NotFound {
                url: format!("{FAKE_BASE}/type/{name}/"),
            });
        };
        Ok(ids
            .iter()
            .map(|&id| named(&Self::name_of(id), Self::creature_url(id)))
            .collect())
    }
}
