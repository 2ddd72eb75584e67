//! formelements - Form element rendering
//!
//! Renders declarative descriptions of form controls (select lists, textareas,
//! alert banners, PDF placeholders, horizontal rules) into HTML fragments for
//! assembly into campaign and survey forms.
//!
//! # Core Concepts
//!
//! - **Compile Once**: templates are compiled into a [`TemplateRegistry`] before
//!   any render; afterwards the registry is only read
//! - **Snapshot Rendering**: templates see a serialized snapshot of the element
//!   plus a fixed helper set, never the live object
//! - **Typed Failures**: unknown types and template failures are per-element
//!   errors, never a process exit
//!
//! # Example
//!
//! ```ignore
//! use formelements::{Element, Renderer, SelectOption, TemplateRegistry};
//!
//! let registry = TemplateRegistry::with_builtins()?;
//! let element = Element::new("select_element")
//!     .with_id("f1")
//!     .with_label("Pick one")
//!     .with_option(SelectOption::new("a", "A"));
//! let html = Renderer::new(&registry).render(&element)?;
//! ```
//!
//! # Modules
//!
//! - [`element`] - Element and select option model
//! - [`templates`] - Template registry and embedded templates
//! - [`helpers`] - Predicate helpers callable from templates
//! - [`render`] - Render engine
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod element;
pub mod error;
pub mod helpers;
pub mod render;
pub mod templates;

pub use config::Config;
pub use element::{Element, SelectOption, sort_by_order};
pub use error::{CompileError, RenderError};
pub use helpers::is_blank;
pub use render::{Renderer, render};
pub use templates::TemplateRegistry;
