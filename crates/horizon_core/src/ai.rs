//! Streaming text-generation contract.
//!
//! # Responsibility
//! - Define the seam between the journal and an external text generator.
//!
//! # Invariants
//! - Chunks arrive in generation order; the channel closes when generation
//!   completes or after the first error.
//! - Consumers inject received text through the normal editor update path;
//!   the generator never touches storage.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::mpsc;

/// One streamed piece of generated text, or the failure that ended the
/// stream.
pub type GenerationChunk = Result<String, GenerationError>;

/// Failure modes of a generation stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The generation request could not be built or sent.
    Request(String),
    /// A response chunk could not be decoded.
    Decode(String),
}

impl Display for GenerationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request(message) => write!(f, "generation request failed: {message}"),
            Self::Decode(message) => write!(f, "generation response invalid: {message}"),
        }
    }
}

impl Error for GenerationError {}

/// A source of streamed text completions.
pub trait TextGenerator {
    /// Starts generating text for `prompt`.
    ///
    /// Chunks are delivered on the returned channel; the sender side is
    /// dropped when the stream ends.
    fn generate(&self, prompt: &str) -> mpsc::Receiver<GenerationChunk>;
}
