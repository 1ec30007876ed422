//! Text annotations attached to notes.
//!
//! An annotation is one positioned text label (a lyric syllable, an
//! articulation marking, a dynamics label). Several annotations may share
//! a note; [`Annotation::format`] allocates the horizontal space the group
//! needs during the layout pass, and [`Annotation::draw`] resolves the
//! final anchor and paints during the draw pass.

use std::rc::Rc;

use log::debug;

use crate::constants::*;
use crate::context::{estimate_text_width, RenderContext, SharedContext, StyleGuard};
use crate::error::{AnnotationError, Result};
use crate::model::{FontInfo, Note};
use crate::modifier::{LayoutState, Modifier, Position};

/// Horizontal anchoring mode for annotation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Left,
    Center,
    Right,
    /// Center on the note's stem instead of the modifier anchor.
    CenterStem,
}

/// Vertical anchoring mode for annotation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalJustify {
    Top,
    Center,
    Bottom,
    /// Center on the vertical span of the note's stem.
    CenterStem,
}

/// One positioned text label attached to a note.
///
/// Created with its text, configured through setters before the layout
/// pass, then consumed read-only by layout and draw.
pub struct Annotation {
    text: String,
    /// Measured once from `text` at construction; re-styling does not
    /// re-measure.
    width: f64,
    justification: Justify,
    vertical_justification: VerticalJustify,
    font: FontInfo,
    position: Position,
    text_line: u32,
    x_shift: f64,
    y_shift: f64,
    /// Explicit y override; when set, draw uses it verbatim.
    y: Option<f64>,
    /// Fill color applied inside the draw's save/restore bracket.
    style: Option<String>,
    index: usize,
    note: Option<Note>,
    context: Option<SharedContext>,
}

impl Annotation {
    /// Create a new annotation with the string `text`.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            width: estimate_text_width(text, DEFAULT_FONT_SIZE),
            justification: Justify::Center,
            vertical_justification: VerticalJustify::Top,
            font: FontInfo::default(),
            position: Position::Above,
            text_line: 0,
            x_shift: 0.0,
            y_shift: 0.0,
            y: None,
            style: None,
            index: 0,
            note: None,
            context: None,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn get_width(&self) -> f64 {
        self.width
    }

    pub fn get_justification(&self) -> Justify {
        self.justification
    }

    pub fn get_text_line(&self) -> u32 {
        self.text_line
    }

    // ── Setters ─────────────────────────────────────────────────────

    /// Set horizontal justification.
    pub fn set_justification(&mut self, justification: Justify) -> &mut Self {
        self.justification = justification;
        self
    }

    /// Set vertical position of text relative to the staff.
    pub fn set_vertical_justification(&mut self, just: VerticalJustify) -> &mut Self {
        self.vertical_justification = just;
        self
    }

    /// Set an explicit y; draw uses it verbatim, skipping vertical
    /// justification entirely.
    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.y = Some(y);
        self
    }

    pub fn set_x_shift(&mut self, x_shift: f64) -> &mut Self {
        self.x_shift = x_shift;
        self
    }

    pub fn set_y_shift(&mut self, y_shift: f64) -> &mut Self {
        self.y_shift = y_shift;
        self
    }

    pub fn set_font(&mut self, family: &str, size: f64, weight: &str) -> &mut Self {
        self.font = FontInfo {
            family: family.into(),
            size,
            weight: weight.into(),
        };
        self
    }

    pub fn set_style(&mut self, color: &str) -> &mut Self {
        self.style = Some(color.into());
        self
    }

    pub fn set_position(&mut self, position: Position) -> &mut Self {
        self.position = position;
        self
    }

    /// Modifier slot on the note this annotation occupies.
    pub fn set_index(&mut self, index: usize) -> &mut Self {
        self.index = index;
        self
    }

    /// Attach the owning note's geometry.
    pub fn set_note(&mut self, note: Note) -> &mut Self {
        self.note = Some(note);
        self
    }

    /// Attach the rendering surface shared by the score's draw pass.
    pub fn set_context(&mut self, context: SharedContext) -> &mut Self {
        self.context = Some(context);
        self
    }

    // ── Layout ──────────────────────────────────────────────────────

    /// Arrange a group of annotations sharing one note within a modifier
    /// context.
    ///
    /// Assigns each annotation its text row (above-note and
    /// default-position rows count independently) and accumulates the
    /// horizontal space the group claims into `state`. Sharing a note
    /// means sharing a horizontal band, so only the widest extent on each
    /// side matters: extents fold with `max`, not sum.
    ///
    /// Returns `false` without touching `state` when `annotations` is
    /// empty.
    pub fn format(annotations: &mut [Annotation], state: &mut LayoutState) -> bool {
        if annotations.is_empty() {
            return false;
        }

        let mut left_shift = 0.0f64;
        let mut right_shift = 0.0f64;
        for annotation in annotations.iter_mut() {
            if annotation.position == Position::Above {
                annotation.text_line = state.top_text_line;
                state.top_text_line += 1;
            } else {
                annotation.text_line = state.text_line;
                state.text_line += 1;
            }

            let width = annotation.width;
            match annotation.justification {
                Justify::Center | Justify::CenterStem => {
                    left_shift = left_shift.max(width / 2.0);
                    right_shift = right_shift.max(width / 2.0);
                }
                Justify::Left => {
                    right_shift = right_shift.max(width);
                }
                Justify::Right => {
                    left_shift = left_shift.max(width);
                }
            }
        }

        debug!(
            "annotation group claims left {:.1}, right {:.1}",
            left_shift, right_shift
        );
        state.left_shift += left_shift;
        state.right_shift += right_shift;
        true
    }

    // ── Drawing ─────────────────────────────────────────────────────

    /// Render the annotation beside its note.
    ///
    /// Fails before any surface mutation if no rendering surface or no
    /// note is attached. The surface's style state is saved on entry and
    /// restored on every exit path.
    pub fn draw(&self) -> Result<()> {
        let ctx = self
            .context
            .as_ref()
            .map(Rc::clone)
            .ok_or(AnnotationError::NoContext)?;
        let note = self
            .note
            .as_ref()
            .ok_or(AnnotationError::NoNoteForAnnotation)?;

        // Horizontal anchoring always references the ABOVE modifier start,
        // whatever the vertical justification (CENTER_STEM excepted).
        let start = note.modifier_start_xy(Position::Above, self.index);

        ctx.borrow_mut().save();
        let _style = StyleGuard::new(Rc::clone(&ctx));
        {
            let mut c = ctx.borrow_mut();
            c.set_fill_style(self.style.as_deref().unwrap_or(ANNOTATION_COLOR));
            c.set_font(&self.font.family, self.font.size, &self.font.weight);
        }

        // Text height is estimated as the width of an 'm': canvas/SVG-like
        // surfaces cannot measure text height.
        let (text_width, text_height) = {
            let c = ctx.borrow();
            (c.measure_text(&self.text), c.measure_text("m"))
        };

        let mut x = match self.justification {
            Justify::Left => start.x,
            Justify::Right => start.x - text_width,
            Justify::Center => start.x - text_width / 2.0,
            Justify::CenterStem => note.stem_x() - text_width / 2.0,
        };
        x += self.x_shift;

        let stave = note.stave();
        let spacing = stave.spacing_between_lines();
        let line = self.text_line;

        let y = match self.y {
            // Explicit placement wins outright.
            Some(y) => y,
            None => {
                let y = match self.vertical_justification {
                    VerticalJustify::Bottom => {
                        // Clamp below the note's bounding box so stacked
                        // rows clear the note.
                        let anchor = stave.y_for_bottom_text(line);
                        let bottom = note.bounding_box().bottom();
                        anchor.max(bottom + spacing * (line as f64 + 1.0) + text_height / 3.0)
                    }
                    VerticalJustify::Center => {
                        let yt = stave.y_for_top_text(line) - 1.0;
                        let yb = stave.y_for_bottom_text(line);
                        yt + (yb - yt) / 2.0 + text_height / 2.0
                    }
                    VerticalJustify::Top => {
                        // The higher candidate wins so the label never
                        // collides with the note.
                        stave.y_for_top_text(line).min(
                            note.bounding_box().y - spacing * line as f64 - text_height / 3.0,
                        )
                    }
                    VerticalJustify::CenterStem => {
                        let extents = note.stem_extents();
                        extents.top_y + (extents.base_y - extents.top_y) / 2.0
                            + text_height / 2.0
                    }
                };
                y + self.y_shift
            }
        };

        debug!("rendering annotation {:?} at ({:.1}, {:.1})", self.text, x, y);
        ctx.borrow_mut().fill_text(&self.text, x, y);
        Ok(())
    }
}

impl Modifier for Annotation {
    fn category(&self) -> &'static str {
        "annotations"
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn position(&self) -> Position {
        self.position
    }

    fn draw(&self) -> Result<()> {
        Annotation::draw(self)
    }
}
