//! Event types and sinks for observing clustering runs.
//!
//! This module defines [`ClusterEvent`] and a set of sinks and adapters to emit,
//! collect, or forward events while executing
//! [`crate::cluster::runner::cluster_with_events`] or
//! [`crate::cluster::runner::ClusterRunner::run_with_events`].
use glam::Vec2;

use crate::cluster::config::GroupingBackend;
use crate::cluster::ClusterSummary;
use crate::marker::{MarkerId, UtilityType};

/// Describes events emitted by clustering runs.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum ClusterEvent {
    /// Emitted when a run starts.
    RunStarted {
        /// Grouping radius in map units.
        radius: f32,
        /// Backend used for neighbor search, `None` for a caller-supplied strategy.
        backend: Option<GroupingBackend>,
        /// Number of input markers.
        marker_count: usize,
    },

    /// Emitted for every cluster in output order.
    ClusterFormed {
        /// Index of the item in the output.
        index: usize,
        /// Shared category of the members.
        category: UtilityType,
        /// Mean member position.
        centroid: Vec2,
        /// Member ids, anchor first.
        member_ids: Vec<MarkerId>,
    },

    /// Emitted for every singleton in output order.
    SingletonKept {
        /// Index of the item in the output.
        index: usize,
        /// Marker id.
        id: MarkerId,
        category: UtilityType,
        position: Vec2,
    },

    /// Emitted when the run finishes.
    RunFinished {
        /// Counts for the produced items.
        summary: ClusterSummary,
    },

    /// Non-fatal warning generated during clustering.
    Warning {
        /// Context string (e.g. marker id).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

impl ClusterEvent {
    pub fn kind(&self) -> ClusterEventKind {
        match self {
            ClusterEvent::RunStarted { .. } => ClusterEventKind::RunStarted,
            ClusterEvent::ClusterFormed { .. } => ClusterEventKind::ClusterFormed,
            ClusterEvent::SingletonKept { .. } => ClusterEventKind::SingletonKept,
            ClusterEvent::RunFinished { .. } => ClusterEventKind::RunFinished,
            ClusterEvent::Warning { .. } => ClusterEventKind::Warning,
        }
    }
}

/// Discriminant of [`ClusterEvent`], used by sinks to opt out of event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClusterEventKind {
    RunStarted,
    ClusterFormed,
    SingletonKept,
    RunFinished,
    Warning,
}

/// A generic event sink that accepts [`ClusterEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: ClusterEvent);

    /// Whether events of `kind` should be built and sent at all.
    #[inline]
    fn wants(&self, _kind: ClusterEventKind) -> bool {
        true
    }

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = ClusterEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: ClusterEvent) {}

    #[inline]
    fn wants(&self, _kind: ClusterEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(ClusterEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(ClusterEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(ClusterEvent),
{
    #[inline]
    fn send(&mut self, event: ClusterEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally restricted to
/// a set of kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<ClusterEvent>,
    only: Option<Vec<ClusterEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
            only: None,
        }
    }

    /// Collect only events of the given kinds.
    pub fn only(kinds: impl IntoIterator<Item = ClusterEventKind>) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.into_iter().collect()),
        }
    }

    pub fn into_inner(self) -> Vec<ClusterEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[ClusterEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: ClusterEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    fn wants(&self, kind: ClusterEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn into_inner(self) -> Vec<S> {
        self.sinks
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: ClusterEvent) {
        let kind = event.kind();
        let mut targets: Vec<&mut S> = self.sinks.iter_mut().filter(|s| s.wants(kind)).collect();
        if let Some(last) = targets.pop() {
            for sink in targets {
                sink.send(event.clone());
            }
            last.send(event);
        }
    }

    fn wants(&self, kind: ClusterEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}
