//! Storage backends for the session's current dataset.

pub mod in_memory;
