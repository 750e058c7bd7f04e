//! Artifact renderers.

mod typescript;

pub use typescript::TypeScriptRenderer;
