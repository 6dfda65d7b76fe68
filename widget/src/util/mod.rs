//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so the logic stays testable off the browser.

pub mod clock;
pub mod sanitize;
