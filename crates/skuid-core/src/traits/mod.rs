//! Core traits for injected side effects.

mod sink;

pub use sink::EntrySink;
