//! annolib — note annotation layout and rendering library.
//!
//! Positions textual annotations (lyric syllables, articulation text,
//! dynamics labels) relative to notes inside a score-rendering pipeline,
//! in two phases: [`Annotation::format`] allocates horizontal space for a
//! group of annotations sharing a note during the layout pass, and
//! [`Annotation::draw`] resolves each annotation's anchor and paints it
//! during the draw pass. Note and staff geometry are supplied by the
//! surrounding pipeline; this crate never computes them.
//!
//! # Example
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use annolib::{
//!     Annotation, BoundingBox, Justify, LayoutState, Note, Stave, StemExtents,
//!     SvgContext, VerticalJustify,
//! };
//!
//! let note = Note {
//!     x: 100.0,
//!     ys: vec![60.0],
//!     stem_x: 104.0,
//!     has_stem: true,
//!     bounding_box: BoundingBox { x: 94.0, y: 30.0, w: 12.0, h: 34.0 },
//!     stem_extents: StemExtents { top_y: 30.0, base_y: 60.0 },
//!     stave: Stave::new(40.0),
//! };
//!
//! let mut annotation = Annotation::new("dolce");
//! annotation
//!     .set_justification(Justify::Center)
//!     .set_vertical_justification(VerticalJustify::Bottom)
//!     .set_note(note);
//!
//! let mut state = LayoutState::new();
//! let mut group = vec![annotation];
//! assert!(Annotation::format(&mut group, &mut state));
//!
//! let ctx = Rc::new(RefCell::new(SvgContext::new(820.0, 200.0)));
//! group[0].set_context(ctx.clone());
//! group[0].draw().unwrap();
//!
//! let svg = ctx.borrow().build();
//! assert!(svg.contains("dolce"));
//! ```

pub mod annotation;
pub mod constants;
pub mod context;
pub mod error;
pub mod model;
pub mod modifier;

pub use annotation::{Annotation, Justify, VerticalJustify};
pub use context::{estimate_text_width, RenderContext, SharedContext, SvgContext};
pub use error::{AnnotationError, Result};
pub use model::{BoundingBox, FontInfo, Note, Point, Stave, StemExtents};
pub use modifier::{LayoutState, Modifier, Position};

/// Convert a note geometry snapshot to a JSON string.
/// Useful for passing geometry across pipeline boundaries.
pub fn note_to_json(note: &Note) -> std::result::Result<String, String> {
    serde_json::to_string_pretty(note).map_err(|e| format!("JSON serialization error: {e}"))
}

/// Parse a note geometry snapshot from a JSON string.
pub fn note_from_json(json: &str) -> std::result::Result<Note, String> {
    serde_json::from_str(json).map_err(|e| format!("JSON deserialization error: {e}"))
}
