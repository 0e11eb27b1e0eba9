//! Bounded trailing window of generation states.
//!
//! [`History`] keeps the most recent `capacity` state tokens in
//! generation order. Recording past capacity evicts from the front, and
//! the window remembers which generation its oldest entry belongs to so
//! detection results can be reported as absolute generation numbers.

use std::collections::VecDeque;

use lifeloop_core::{Generation, GenerationState};

use crate::detect::{self, LoopInfo};

/// A capped, generation-indexed window of [`GenerationState`] tokens.
///
/// The backing deque is kept contiguous after every mutation so the
/// whole window can be handed to the detector as one slice.
#[derive(Clone, Debug)]
pub struct History {
    states: VecDeque<GenerationState>,
    capacity: usize,
    /// Generation of `states[0]`. Meaningless while empty.
    first_generation: Generation,
}

impl History {
    /// Create an empty history retaining at most `capacity` states.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "History capacity must be >= 1, got {capacity}");
        Self {
            states: VecDeque::with_capacity(capacity + 1),
            capacity,
            first_generation: Generation(0),
        }
    }

    /// Maximum number of retained states.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether nothing has been recorded since creation or the last clear.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Generation of the oldest retained state, if any.
    pub fn first_generation(&self) -> Option<Generation> {
        (!self.is_empty()).then_some(self.first_generation)
    }

    /// Generation of the newest retained state, if any.
    pub fn last_generation(&self) -> Option<Generation> {
        (!self.is_empty()).then(|| Generation(self.first_generation.0 + self.len() as u64 - 1))
    }

    /// Append the state of `generation`, then [`trim`](Self::trim).
    ///
    /// The first record after creation or [`clear`](Self::clear) anchors
    /// the window at `generation`. A record that does not follow the
    /// newest one consecutively discards the window and re-anchors it,
    /// since the retained states no longer form an unbroken run.
    pub fn record(&mut self, generation: Generation, state: GenerationState) {
        if self.last_generation().map(Generation::next) != Some(generation) {
            self.states.clear();
            self.first_generation = generation;
        }
        self.states.push_back(state);
        self.trim();
        self.states.make_contiguous();
    }

    /// Evict the oldest entries while over capacity. Returns how many
    /// were evicted.
    pub fn trim(&mut self) -> usize {
        let mut evicted = 0;
        while self.states.len() > self.capacity {
            self.states.pop_front();
            self.first_generation = self.first_generation.next();
            evicted += 1;
        }
        evicted
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.states.clear();
        self.first_generation = Generation(0);
    }

    /// All retained states, oldest first.
    pub fn states(&self) -> &[GenerationState] {
        let (front, back) = self.states.as_slices();
        debug_assert!(back.is_empty(), "history deque must stay contiguous");
        front
    }

    /// State recorded for `generation`, if still retained.
    pub fn get(&self, generation: Generation) -> Option<&GenerationState> {
        let offset = generation.0.checked_sub(self.first_generation.0)?;
        self.states.get(usize::try_from(offset).ok()?)
    }

    /// Most recently recorded state.
    pub fn latest(&self) -> Option<&GenerationState> {
        self.states.back()
    }

    /// Run the loop detector over the retained window.
    ///
    /// The start generation is absolute: window index plus the
    /// generation of the oldest retained entry.
    pub fn detect(&self) -> Option<LoopInfo> {
        detect::detect(self.states()).map(|info| info.offset_by(self.first_generation))
    }
}
