//! Data model for note and staff geometry consumed by annotation layout.
//!
//! These structures are snapshots of geometry computed elsewhere in the
//! rendering pipeline (note layout, stem assignment, staff placement).
//! Annotation code reads them; it never computes or mutates geometry.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::modifier::Position;

/// A point on the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned bounding box of a rendered note (noteheads plus stem).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl BoundingBox {
    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// Vertical span of a note's stem.
///
/// For a stemless note both ends collapse to the notehead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StemExtents {
    /// Y of the stem tip (the end away from the notehead).
    pub top_y: f64,
    /// Y of the stem base (the notehead end).
    pub base_y: f64,
}

/// Staff-line geometry provider.
///
/// Supplies line spacing and the anchor rows for text stacked above and
/// below the staff. `y` is the top staff line; a standard five-line staff
/// spans `4 * spacing` below it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stave {
    /// Y coordinate of the top staff line.
    pub y: f64,
    /// Distance between adjacent staff lines.
    pub spacing: f64,
}

impl Stave {
    pub fn new(y: f64) -> Self {
        Self { y, spacing: STAFF_LINE_SPACING }
    }

    pub fn spacing_between_lines(&self) -> f64 {
        self.spacing
    }

    /// Y coordinate of the bottom staff line.
    pub fn bottom_y(&self) -> f64 {
        self.y + (STAFF_LINE_COUNT - 1) as f64 * self.spacing
    }

    /// Baseline for text row `line` above the staff. Rows stack upward,
    /// one line spacing apart.
    pub fn y_for_top_text(&self, line: u32) -> f64 {
        self.y - (line as f64 + 1.0) * self.spacing
    }

    /// Baseline for text row `line` below the staff. Rows stack downward.
    pub fn y_for_bottom_text(&self, line: u32) -> f64 {
        self.bottom_y() + (line as f64 + 1.0) * self.spacing
    }
}

/// Geometry snapshot of one rendered note, as supplied by the note
/// renderer: anchor coordinates for attached modifiers, stem data, the
/// overall bounding box, and the owning stave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// X at which modifiers attached to this note start.
    pub x: f64,
    /// Y per notehead slot, index 0 = first notehead. Chords carry one
    /// entry per head.
    pub ys: Vec<f64>,
    /// X of the stem line.
    pub stem_x: f64,
    /// Whether the note carries a stem.
    pub has_stem: bool,
    /// Bounding box of noteheads plus stem.
    pub bounding_box: BoundingBox,
    /// Vertical stem span.
    pub stem_extents: StemExtents,
    /// Owning staff geometry.
    pub stave: Stave,
}

impl Note {
    /// Starting coordinate for a modifier attached at `index`.
    ///
    /// The `position` argument selects which side's anchor the caller
    /// wants; the x anchor is shared, the y comes from the notehead slot.
    pub fn modifier_start_xy(&self, _position: Position, index: usize) -> Point {
        let y = self
            .ys
            .get(index)
            .copied()
            .unwrap_or(self.bounding_box.y);
        Point { x: self.x, y }
    }

    pub fn stem_x(&self) -> f64 {
        self.stem_x
    }

    pub fn has_stem(&self) -> bool {
        self.has_stem
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    pub fn stem_extents(&self) -> &StemExtents {
        &self.stem_extents
    }

    pub fn stave(&self) -> &Stave {
        &self.stave
    }
}

/// Font descriptor applied to the rendering surface before text emission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontInfo {
    pub family: String,
    pub size: f64,
    pub weight: String,
}

impl Default for FontInfo {
    fn default() -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.into(),
            size: DEFAULT_FONT_SIZE,
            weight: DEFAULT_FONT_WEIGHT.into(),
        }
    }
}
