//! Widget component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_window` owns all state for one widget instance. Every other
//! component renders from read-only signals and reports user actions through
//! callbacks.

pub mod canvas_panel;
pub mod chat_header;
pub mod chat_input;
pub mod chat_message;
pub mod chat_window;
pub mod message_list;
