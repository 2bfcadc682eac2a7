//! Browser adapters for the `shell_host` service contracts.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod sound;

pub use sound::WebAudioSoundService;
