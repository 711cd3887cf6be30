//! Core building blocks of the argument layer: the option schema, the
//! configuration object it fills, the binder, and help/example rendering.
//! These are consumed through the high-level `api` module.
pub mod binder;
pub mod examples;
pub mod help;
pub mod options;
pub mod schema;
