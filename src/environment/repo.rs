use chrono::{DateTime, Utc};
use im::Vector;
use navicula::publisher::RefPublisher;

use crate::actions::PlanetAction;
use crate::domains::{Domain, PlanetsDomain};

/// The complete application state. Cloning is cheap, all slices are
/// persistent collections.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AppState {
    pub planets: Vector<String>,
}

#[derive(Clone, Copy, Debug)]
pub struct RepoOptions {
    /// How many dispatched actions to remember. `0` disables the history.
    pub max_history: usize,
}

impl Default for RepoOptions {
    fn default() -> Self {
        Self { max_history: 100 }
    }
}

#[derive(Clone, Debug)]
pub struct HistoryEntry {
    pub id: u64,
    pub action: PlanetAction,
    pub dispatched_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default)]
struct Journal {
    entries: Vector<HistoryEntry>,
    next_id: u64,
    closed: bool,
}

impl Journal {
    /// Returns `false` once the journal is closed
    fn record(&mut self, action: &PlanetAction, max_history: usize) -> bool {
        if self.closed {
            return false;
        }
        let id = self.next_id;
        self.next_id += 1;
        if max_history == 0 {
            return true;
        }
        while self.entries.len() >= max_history {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            id,
            action: action.clone(),
            dispatched_at: Utc::now(),
        });
        true
    }
}

/// Owner of the application state.
///
/// State only changes through [`Repo::dispatch`]. Presenters follow it by
/// subscribing to `storage`. Handles are cheap to clone and all refer to
/// the same container.
#[derive(Clone)]
pub struct Repo {
    pub storage: RefPublisher<AppState>,
    journal: RefPublisher<Journal>,
    options: RepoOptions,
    planets: PlanetsDomain,
}

impl Repo {
    pub fn new(options: RepoOptions) -> Self {
        let planets = PlanetsDomain;
        let state = AppState {
            planets: planets.initial_state(),
        };
        Self {
            storage: RefPublisher::new(state),
            journal: RefPublisher::new(Journal::default()),
            options,
            planets,
        }
    }

    pub fn state(&self) -> AppState {
        self.storage.with(|state| state.clone())
    }

    /// Run `action` through the domains and publish the new state
    pub fn dispatch(&self, action: PlanetAction) {
        let max_history = self.options.max_history;
        if !self
            .journal
            .with_mutation(|mut journal| journal.record(&action, max_history))
        {
            log::warn!("ignoring {} on a torn down repo", action.identifier());
            return;
        }
        log::debug!("dispatch {}", action.identifier());
        let planets = self.planets;
        self.storage.with_mutation(|mut state| {
            let next = reduce(&planets, &state, &action);
            *state = next;
        });
    }

    /// Dispatched actions, oldest first
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.journal
            .with(|journal| journal.entries.iter().cloned().collect())
    }

    /// End the lifecycle of the container. Any further dispatch is ignored.
    pub fn teardown(&self) {
        let dispatched = self.journal.with_mutation(|mut journal| {
            journal.closed = true;
            journal.next_id
        });
        log::info!("tearing down repo after {dispatched} actions");
    }
}

impl Default for Repo {
    fn default() -> Self {
        Self::new(RepoOptions::default())
    }
}

impl std::fmt::Debug for Repo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repo")
            .field("state", &self.state())
            .field("options", &self.options)
            .finish()
    }
}

fn reduce(planets: &PlanetsDomain, state: &AppState, action: &PlanetAction) -> AppState {
    AppState {
        planets: planets.reduce(&state.planets, action),
    }
}
