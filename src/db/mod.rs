//! Database gateway: one shared connection, statements serialized.

mod gateway;
pub mod mysql;
pub use gateway::*;
