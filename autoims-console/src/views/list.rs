//! Local list cache shared by every data screen
//!
//! A successful fetch replaces the whole list; mutations patch it in place
//! only after the backend confirmed the operation, and always with the
//! server-returned canonical record.

/// Entity with a server-assigned integer id
pub trait HasId {
    fn id(&self) -> i64;
}

/// Fetch lifecycle of a list view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Retryable inline error (not a popup)
    Failed(String),
}

/// Per-view list state with stale-response protection
#[derive(Debug)]
pub struct ListState<T> {
    items: Vec<T>,
    phase: LoadPhase,
    generation: u64,
}

impl<T: HasId> ListState<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            phase: LoadPhase::Idle,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// The inline error message, when the last fetch failed
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Start a fetch, invalidating any fetch still in flight.
    ///
    /// Returns the generation to hand back to [`finish_fetch`]; a response
    /// carrying a superseded generation is dropped on arrival, which is how
    /// a view that "unmounted" (or re-fetched) ignores late responses.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.generation
    }

    /// Apply a finished fetch. Returns `false` when the response was stale
    /// and ignored.
    pub fn finish_fetch(&mut self, generation: u64, outcome: Result<Vec<T>, String>) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "dropping stale fetch result");
            return false;
        }
        match outcome {
            Ok(items) => {
                self.items = items;
                self.phase = LoadPhase::Loaded;
            }
            Err(message) => {
                // keep whatever was on screen; the error renders inline
                self.phase = LoadPhase::Failed(message);
            }
        }
        true
    }

    /// Append the canonical record returned by a confirmed create.
    pub fn append(&mut self, canonical: T) {
        self.items.push(canonical);
    }

    /// Replace the matching record with the canonical one from a confirmed
    /// update. Unknown ids are ignored.
    pub fn replace(&mut self, canonical: T) {
        if let Some(slot) = self.items.iter_mut().find(|item| item.id() == canonical.id()) {
            *slot = canonical;
        }
    }

    /// Remove the record after a confirmed delete.
    pub fn remove(&mut self, id: i64) {
        self.items.retain(|item| item.id() != id);
    }
}
