//! Rendering surface seam — the `RenderContext` trait and an SVG-building
//! implementation.
//!
//! The surface is a shared mutable resource: every draw brackets its style
//! mutations with `save`/`restore` so interleaved draws of other elements
//! never observe leaked style state.

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::*;
use crate::model::FontInfo;

/// Estimate the rendered width of a text string in user units for a given
/// font size.
///
/// Canvas/SVG-like surfaces expose no reliable glyph metrics, so width is
/// approximated from character count. The same estimate measured on the
/// glyph "m" stands in for text height throughout annotation layout.
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * CHAR_WIDTH_FACTOR
}

/// Minimal drawing surface consumed by annotation rendering.
pub trait RenderContext {
    /// Push the current style state.
    fn save(&mut self);
    /// Pop back to the previously saved style state.
    fn restore(&mut self);
    /// Set the font used by subsequent measurement and text emission.
    fn set_font(&mut self, family: &str, size: f64, weight: &str);
    /// Set the fill color used by subsequent text emission.
    fn set_fill_style(&mut self, color: &str);
    /// Width of `text` under the current font.
    fn measure_text(&self, text: &str) -> f64;
    /// Emit `text` with its anchor at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// A rendering surface shared by all modifiers drawn onto one score.
pub type SharedContext = Rc<RefCell<dyn RenderContext>>;

// ═══════════════════════════════════════════════════════════════════════
// SvgContext
// ═══════════════════════════════════════════════════════════════════════

#[derive(Clone)]
struct SvgState {
    font: FontInfo,
    fill: String,
}

impl Default for SvgState {
    fn default() -> Self {
        Self {
            font: FontInfo::default(),
            fill: ANNOTATION_COLOR.into(),
        }
    }
}

/// SVG surface — accumulates elements and produces the final string.
pub struct SvgContext {
    elements: Vec<String>,
    width: f64,
    height: f64,
    state: SvgState,
    state_stack: Vec<SvgState>,
}

impl SvgContext {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
            state: SvgState::default(),
            state_stack: Vec::new(),
        }
    }

    /// Number of emitted elements. Lets callers check that a failed draw
    /// touched nothing.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Depth of the saved-style stack.
    pub fn state_depth(&self) -> usize {
        self.state_stack.len()
    }

    pub fn build(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl RenderContext for SvgContext {
    fn save(&mut self) {
        self.state_stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.state_stack.pop() {
            self.state = state;
        }
    }

    fn set_font(&mut self, family: &str, size: f64, weight: &str) {
        self.state.font = FontInfo {
            family: family.into(),
            size,
            weight: weight.into(),
        };
    }

    fn set_fill_style(&mut self, color: &str) {
        self.state.fill = color.into();
    }

    fn measure_text(&self, text: &str) -> f64 {
        estimate_text_width(text, self.state.font.size)
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let escaped = text
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        let weight = if self.state.font.weight.is_empty() {
            "normal"
        } else {
            self.state.font.weight.as_str()
        };
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-family="{}" font-size="{:.0}" font-weight="{}" fill="{}">{}</text>"#,
            x, y, self.state.font.family, self.state.font.size, weight, self.state.fill, escaped
        ));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Style guard
// ═══════════════════════════════════════════════════════════════════════

/// Restores the surface's style state when dropped, so a draw that exits
/// early never leaves the surface partially modified.
///
/// The caller is expected to have called `save` before constructing the
/// guard.
pub(crate) struct StyleGuard {
    ctx: SharedContext,
}

impl StyleGuard {
    pub(crate) fn new(ctx: SharedContext) -> Self {
        Self { ctx }
    }
}

impl Drop for StyleGuard {
    fn drop(&mut self) {
        self.ctx.borrow_mut().restore();
    }
}
