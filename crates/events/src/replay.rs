//! Session log checking and replay.
//!
//! A session log is dense: envelopes carry sequence numbers 1, 2, 3, ... with no
//! gaps, all belong to one session, and all name the same aggregate stream.

use luxor_core::SessionId;
use thiserror::Error;
use uuid::Uuid;

use crate::{EventEnvelope, Projection};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("event {event_id} belongs to session {found}, not {expected}")]
    ForeignSession {
        event_id: Uuid,
        expected: SessionId,
        found: SessionId,
    },

    #[error("event {event_id} is on stream `{found}`, expected `{expected}`")]
    WrongStream {
        event_id: Uuid,
        expected: String,
        found: String,
    },

    #[error("out of sequence: expected #{expected}, found #{found}")]
    OutOfSequence { expected: u64, found: u64 },
}

/// How much of one session's stream has been admitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLog {
    session_id: SessionId,
    aggregate_type: String,
    len: u64,
}

impl SessionLog {
    pub fn new(session_id: SessionId, aggregate_type: impl Into<String>) -> Self {
        Self {
            session_id,
            aggregate_type: aggregate_type.into(),
            len: 0,
        }
    }

    /// Check a complete log from the start.
    pub fn verify<'a, E: 'a>(
        session_id: SessionId,
        aggregate_type: impl Into<String>,
        envelopes: impl IntoIterator<Item = &'a EventEnvelope<E>>,
    ) -> Result<Self, ReplayError> {
        let mut log = Self::new(session_id, aggregate_type);
        for envelope in envelopes {
            log.admit(envelope)?;
        }
        Ok(log)
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Number of envelopes admitted so far (also the last sequence number).
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sequence number the next envelope must carry.
    pub fn next_sequence(&self) -> u64 {
        self.len + 1
    }

    /// Accept `envelope` as the next entry, or say why it cannot follow.
    pub fn admit<E>(&mut self, envelope: &EventEnvelope<E>) -> Result<(), ReplayError> {
        if envelope.session_id() != self.session_id {
            return Err(ReplayError::ForeignSession {
                event_id: envelope.event_id(),
                expected: self.session_id,
                found: envelope.session_id(),
            });
        }
        if envelope.aggregate_type() != self.aggregate_type {
            return Err(ReplayError::WrongStream {
                event_id: envelope.event_id(),
                expected: self.aggregate_type.clone(),
                found: envelope.aggregate_type().to_string(),
            });
        }
        if envelope.sequence_number() != self.next_sequence() {
            return Err(ReplayError::OutOfSequence {
                expected: self.next_sequence(),
                found: envelope.sequence_number(),
            });
        }
        self.len += 1;
        Ok(())
    }
}

/// Feeds a session log into a projection, admitting each envelope first.
#[derive(Debug)]
pub struct Replay<P: Projection> {
    log: SessionLog,
    projection: P,
}

impl<P: Projection> Replay<P> {
    pub fn new(session_id: SessionId, aggregate_type: impl Into<String>, projection: P) -> Self {
        Self {
            log: SessionLog::new(session_id, aggregate_type),
            projection,
        }
    }

    /// Apply one envelope. A rejected envelope leaves the projection untouched.
    pub fn apply(&mut self, envelope: &EventEnvelope<P::Ev>) -> Result<(), ReplayError> {
        self.log.admit(envelope)?;
        self.projection.apply(envelope);
        Ok(())
    }

    pub fn run<'a>(
        &mut self,
        envelopes: impl IntoIterator<Item = &'a EventEnvelope<P::Ev>>,
    ) -> Result<(), ReplayError>
    where
        P::Ev: 'a,
    {
        envelopes.into_iter().try_for_each(|env| self.apply(env))
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub fn projection(&self) -> &P {
        &self.projection
    }

    pub fn into_projection(self) -> P {
        self.projection
    }
}

/// Build `projection` from a full session log.
pub fn replay<'a, P>(
    session_id: SessionId,
    aggregate_type: &str,
    projection: P,
    envelopes: impl IntoIterator<Item = &'a EventEnvelope<P::Ev>>,
) -> Result<P, ReplayError>
where
    P: Projection,
    P::Ev: 'a,
{
    let mut replay = Replay::new(session_id, aggregate_type, projection);
    replay.run(envelopes)?;
    Ok(replay.into_projection())
}
