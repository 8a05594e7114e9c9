// Gist: extractive summarization by weighted term frequency
//
// This is the library root. Each module corresponds to a stage of the
// summarization pipeline or to the thin shell around it.

pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod scoring;
pub mod summary;
pub mod text;
