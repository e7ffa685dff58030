//! Domain events, envelopes, and projections.
//!
//! Events are the record of what happened in a shopping session; read models such
//! as cart summaries are projections over them.

pub mod envelope;
pub mod event;
pub mod projection;
pub mod replay;

pub use envelope::EventEnvelope;
pub use event::Event;
pub use projection::Projection;
pub use replay::{Replay, ReplayError, SessionLog, replay};
