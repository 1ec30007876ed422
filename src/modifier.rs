//! The modifier capability and the layout state shared across one
//! modifier-context pass.
//!
//! A modifier is any decoration attached to a note (annotation text,
//! accidentals, ornaments, ...). The broader modifier context arranges
//! different kinds of modifiers in sequence; each kind contributes to a
//! shared [`LayoutState`] so later kinds can avoid the space earlier
//! kinds claimed.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Where a modifier sits relative to its note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Above,
    Below,
    Left,
    Right,
}

/// Capability exposed by every note modifier.
pub trait Modifier {
    /// Category name, used by the modifier context to group kinds.
    fn category(&self) -> &'static str;

    /// Horizontal space this modifier occupies.
    fn width(&self) -> f64;

    /// Side of the note this modifier sits on.
    fn position(&self) -> Position;

    /// Render the modifier onto its attached surface.
    fn draw(&self) -> Result<()>;
}

/// Counters and accumulators threaded through one modifier-context pass
/// over a single note.
///
/// `top_text_line` and `text_line` are independent: above-note text and
/// default-position text stack in separate rows. `left_shift` and
/// `right_shift` grow monotonically within a pass and feed the modifier
/// context's spacing of neighboring layout elements.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutState {
    /// Next free text row above the note.
    pub top_text_line: u32,
    /// Next free text row for default-position modifiers.
    pub text_line: u32,
    /// Space claimed left of the note anchor.
    pub left_shift: f64,
    /// Space claimed right of the note anchor.
    pub right_shift: f64,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }
}
