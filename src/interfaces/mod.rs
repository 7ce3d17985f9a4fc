//! Outer adapters: file readers, the upload loader and response bodies.

pub mod csv;
pub mod loader;
pub mod response;
pub mod xlsx;
