//! Session-scoped itinerary selection.
//!
//! [`ItineraryState`] owns the producers a visitor has picked. It is the
//! only way to mutate a selection and enforces two invariants: a producer id
//! appears at most once and the selection never exceeds its capacity.
//! Insertion order is kept for display; visiting order comes from a
//! [`Sequencer`](crate::Sequencer).
//!
//! State transitions can be observed through a [`SelectionObserver`], which
//! keeps analytics and UI hooks out of the core.

use std::fmt;

use log::info;

use crate::Producer;

/// Default capacity for manually curated itineraries.
pub const DEFAULT_CAPACITY: usize = 4;

/// A change to an [`ItineraryState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A producer joined the selection.
    Added {
        /// Identifier of the added producer.
        producer_id: String,
    },
    /// A producer left the selection.
    Removed {
        /// Identifier of the removed producer.
        producer_id: String,
    },
    /// The selection was emptied.
    Cleared,
}

/// Receives [`SelectionEvent`]s after each successful mutation.
pub trait SelectionObserver: Send + Sync {
    /// Handle an event.
    fn notify(&self, event: &SelectionEvent);
}

/// Observer that records every event through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SelectionObserver for LogObserver {
    fn notify(&self, event: &SelectionEvent) {
        match event {
            SelectionEvent::Added { producer_id } => info!("itinerary: added {producer_id}"),
            SelectionEvent::Removed { producer_id } => info!("itinerary: removed {producer_id}"),
            SelectionEvent::Cleared => info!("itinerary: cleared"),
        }
    }
}

/// Capacity-bounded, id-unique selection of producers.
///
/// # Examples
/// ```
/// use agro_core::{ItineraryState, Producer, lat_lng};
///
/// # fn main() -> Result<(), agro_core::ProducerError> {
/// let mut state = ItineraryState::with_capacity(2);
/// let farm = Producer::new("p1", "Farm", lat_lng(45.0, -75.0))?;
///
/// assert!(state.add(farm.clone()));
/// assert!(!state.add(farm));
/// assert!(state.contains("p1"));
/// assert!(state.can_add_more());
/// # Ok(())
/// # }
/// ```
pub struct ItineraryState {
    capacity: usize,
    producers: Vec<Producer>,
    observer: Option<Box<dyn SelectionObserver>>,
}

impl ItineraryState {
    /// Construct an empty selection with [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Construct an empty selection holding at most `capacity` producers.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            producers: Vec::new(),
            observer: None,
        }
    }

    /// Attach an observer notified after each successful mutation.
    #[must_use]
    pub fn with_observer(mut self, observer: impl SelectionObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Add `producer` unless its id is already present or the selection is
    /// full.
    ///
    /// Returns `false` without mutating when the add is rejected.
    pub fn add(&mut self, producer: Producer) -> bool {
        if !self.can_add_more() || self.contains(&producer.id) {
            return false;
        }
        let producer_id = producer.id.clone();
        self.producers.push(producer);
        self.emit(&SelectionEvent::Added { producer_id });
        true
    }

    /// Remove the producer with `producer_id`; absent ids are ignored.
    pub fn remove(&mut self, producer_id: &str) {
        let Some(index) = self.position(producer_id) else {
            return;
        };
        let removed = self.producers.remove(index);
        self.emit(&SelectionEvent::Removed {
            producer_id: removed.id,
        });
    }

    /// Empty the selection.
    pub fn clear(&mut self) {
        self.producers.clear();
        self.emit(&SelectionEvent::Cleared);
    }

    /// Start a new flow: clear, then add `producers` in order.
    ///
    /// Returns how many producers were accepted.
    pub fn replace_with<I>(&mut self, producers: I) -> usize
    where
        I: IntoIterator<Item = Producer>,
    {
        self.clear();
        producers
            .into_iter()
            .map(|producer| self.add(producer))
            .filter(|accepted| *accepted)
            .count()
    }

    /// Report whether a producer with `producer_id` is selected.
    #[must_use]
    pub fn contains(&self, producer_id: &str) -> bool {
        self.position(producer_id).is_some()
    }

    /// Report whether another producer fits.
    #[must_use]
    pub fn can_add_more(&self) -> bool {
        self.producers.len() < self.capacity
    }

    /// Number of selected producers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.producers.len()
    }

    /// Report whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }

    /// Maximum number of producers.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Selected producers in insertion order.
    #[must_use]
    pub fn producers(&self) -> &[Producer] {
        &self.producers
    }

    /// Selected producer ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.producers.iter().map(|producer| producer.id.as_str())
    }

    fn position(&self, producer_id: &str) -> Option<usize> {
        self.producers
            .iter()
            .position(|producer| producer.id == producer_id)
    }

    fn emit(&self, event: &SelectionEvent) {
        if let Some(observer) = &self.observer {
            observer.notify(event);
        }
    }
}

impl Default for ItineraryState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ItineraryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItineraryState")
            .field("capacity", &self.capacity)
            .field("producers", &self.ids().collect::<Vec<_>>())
            .field("observed", &self.observer.is_some())
            .finish()
    }
}
