//! Input transports for the widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `input_source` reads the URL query string and `embed` talks to an
//! embedding parent frame. Decoding itself lives in the `payload` crate.

pub mod embed;
pub mod input_source;
