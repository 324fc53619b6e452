//! Core types for the Cairn vector store.
//!
//! This crate defines the vocabulary shared by every layer:
//! - [`Document`] / [`DocumentSpec`] / [`QueryMatch`]: the data model
//! - [`Scalar`] / [`Metadata`]: the closed metadata value model
//! - [`Embedder`]: the external text-embedding collaborator
//! - [`Cancellation`]: cooperative cancellation for long operations
//! - [`Error`] / [`Result`]: the canonical error taxonomy

pub mod cancel;
pub mod embed;
pub mod error;
pub mod types;
pub mod value;

pub use cancel::{CancelHandle, Cancellation};
pub use embed::{EmbedError, Embedder, StaticEmbedder};
pub use error::{Error, Result};
pub use types::{Document, DocumentSpec, QueryMatch};
pub use value::{Metadata, Scalar};
