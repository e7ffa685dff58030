use crate::{Event, EventEnvelope};

/// A projection builds a read model from an append-only event stream.
///
/// Read models are **disposable**: they can be dropped and rebuilt by replaying the
/// session history at any time. Events are the source of truth.
///
/// Projections see each envelope once. [`Replay`] admits envelopes in sequence
/// order only, so duplicates and gaps never reach `apply`.
///
/// [`Replay`]: crate::Replay
pub trait Projection {
    type Ev: Event;

    /// Apply a single event to the projection, updating the read model.
    ///
    /// Events the projection does not care about are ignored. This method does not
    /// return errors; structural problems (wrong session, replayed sequence numbers)
    /// are caught by the replay before the event gets here.
    fn apply(&mut self, envelope: &EventEnvelope<Self::Ev>);
}
