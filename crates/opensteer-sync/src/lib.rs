//! Safety-layer synchronization primitives for OpenSteer
//!
//! The actuator's fault detector treats any unexplained jump in its
//! received sequence counter as a hard fault. This crate tracks which
//! command the safety-validation layer last accepted and derives the next
//! sequence identifier from it, so the command stream stays contiguous
//! with what the actuator actually saw even across disengagement gaps.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod echo;
pub mod seq;

pub use echo::{EchoTracker, SyncState};
pub use seq::{SEQ_SLOTS, next_seq};
