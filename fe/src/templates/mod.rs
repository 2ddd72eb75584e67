//! Template Registry
//!
//! Compiles element templates once, before any render, and serves read-only
//! lookups by element type afterwards.
//!
//! Template sources:
//! 1. Built-in `.hbs` files embedded at build time
//! 2. `{type}.hbs` files from a configured template directory (adds new types,
//!    or overrides a built-in of the same name)
//!
//! Templates use Handlebars syntax and are HTML-escaped on interpolation.

pub mod embedded;
mod registry;

pub use registry::TemplateRegistry;
