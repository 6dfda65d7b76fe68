//! Widget state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `canvas`, `config`) and kept as plain
//! structs with pure transition methods. The owning component wraps each one
//! in an `RwSignal`, so every embedded instance gets its own copy and the
//! transitions stay testable without a browser.

pub mod canvas;
pub mod chat;
pub mod config;
pub mod reply;
pub mod sample;
