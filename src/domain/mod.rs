//! Domain types: the sales dataset, query arguments and the storage port.

pub mod dataset;
pub mod ports;
pub mod query;
pub mod timestamp;
