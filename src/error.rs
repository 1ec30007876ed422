//! Draw-time error kinds.
//!
//! Both kinds are raised before any rendering-surface mutation and are
//! non-recoverable for the failing call.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    /// No rendering surface is attached to the annotation.
    #[error("can't draw text annotation without a context")]
    NoContext,

    /// No owning note is attached to the annotation.
    #[error("can't draw text annotation without an attached note")]
    NoNoteForAnnotation,
}

pub type Result<T> = std::result::Result<T, AnnotationError>;
