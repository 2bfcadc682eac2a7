//! Typed host-service contracts shared by the desktop shell runtime and its
//! browser adapters.
//!
//! The shell consumes these services best-effort: a missing or failing
//! adapter must never affect window state, so call sites log the returned
//! error and continue. Concrete browser adapters live in `shell_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod sound;

pub use sound::{NoopSoundService, SoundError, SoundEvent, SoundService};
