//! Fetch lifecycle as plain data.
//!
//! # Design
//! `FetchState` is an immutable snapshot: the last good value plus a tagged
//! `Phase`. Because loading and failure are variants of the same enum, a
//! snapshot can never claim to be loading and failed at once.
//!
//! `Resource` is the sans-IO state machine behind a hook. `begin` hands out a
//! `Ticket` stamped with a fresh generation; `settle` commits an outcome only
//! if its ticket still carries the current generation. Any response for a
//! superseded key is therefore dropped, whatever order responses arrive in.

use crate::error::FetchError;

/// Where a resource is in its request lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// No request was issued for the active key (e.g. an empty post id).
    Idle,
    Loading,
    Ready,
    Failed(FetchError),
}

/// Snapshot of a resource as seen by views.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    data: T,
    phase: Phase,
}

impl<T: Default> FetchState<T> {
    /// The state a hook starts in: loading, empty data, no error.
    pub fn loading() -> Self {
        Self {
            data: T::default(),
            phase: Phase::Loading,
        }
    }
}

impl<T: Default> Default for FetchState<T> {
    fn default() -> Self {
        Self::loading()
    }
}

impl<T> FetchState<T> {
    /// Last successfully resolved value, or the empty default before the
    /// first success.
    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.phase {
            Phase::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Proof that a request was started for a particular generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Keyed fetch state machine, independent of any transport or runtime.
#[derive(Debug, Clone)]
pub struct Resource<K, T> {
    key: Option<K>,
    generation: u64,
    state: FetchState<T>,
    /// Phase before the in-flight request began, restored on `abandon`.
    prior: Phase,
}

impl<K: PartialEq, T: Default> Default for Resource<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, T: Default> Resource<K, T> {
    pub fn new() -> Self {
        Self {
            key: None,
            generation: 0,
            state: FetchState::loading(),
            prior: Phase::Idle,
        }
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// True if `key` is already the active key, i.e. a new call with it
    /// should not issue another request.
    pub fn is_active(&self, key: &K) -> bool {
        self.key.as_ref() == Some(key)
    }

    /// Make `key` active and mark a request as in flight. Data from the
    /// previous key is kept until the new request resolves.
    pub fn begin(&mut self, key: K) -> Ticket {
        self.generation += 1;
        self.key = Some(key);
        self.prior = match std::mem::replace(&mut self.state.phase, Phase::Loading) {
            Phase::Loading => Phase::Idle,
            phase => phase,
        };
        Ticket {
            generation: self.generation,
        }
    }

    /// Make `key` active without issuing a request. Outstanding tickets are
    /// invalidated and the state becomes `Idle` with empty data.
    pub fn park(&mut self, key: K) {
        self.generation += 1;
        self.key = Some(key);
        self.state = FetchState {
            data: T::default(),
            phase: Phase::Idle,
        };
    }

    /// Commit the outcome of the request behind `ticket`. Returns `false`
    /// and leaves the state untouched if the ticket is stale or already
    /// settled.
    pub fn settle(&mut self, ticket: Ticket, outcome: Result<T, FetchError>) -> bool {
        if ticket.generation != self.generation || !self.state.is_loading() {
            return false;
        }
        self.state = match outcome {
            Ok(data) => FetchState {
                data,
                phase: Phase::Ready,
            },
            Err(err) => FetchState {
                data: std::mem::take(&mut self.state.data),
                phase: Phase::Failed(err),
            },
        };
        true
    }

    /// Give up on the request behind `ticket` without an outcome. The key is
    /// cleared so the next `begin` for it goes out again, and the phase
    /// returns to what it was before the request (`Idle` if that was itself
    /// a request). Stale or settled tickets are ignored.
    pub fn abandon(&mut self, ticket: Ticket) -> bool {
        if ticket.generation != self.generation || !self.state.is_loading() {
            return false;
        }
        self.key = None;
        self.state.phase = std::mem::replace(&mut self.prior, Phase::Idle);
        true
    }
}
