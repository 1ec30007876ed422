//! Shared constants for annotation layout (all in SVG user units).

// ── Staff dimensions ────────────────────────────────────────────────
/// Distance between adjacent staff lines.
pub const STAFF_LINE_SPACING: f64 = 10.0;
/// Number of lines in a standard staff.
pub const STAFF_LINE_COUNT: u32 = 5;

// ── Text metrics ────────────────────────────────────────────────────
/// Approximate glyph width as a fraction of the font size.
pub const CHAR_WIDTH_FACTOR: f64 = 0.55;

// ── Annotation defaults ─────────────────────────────────────────────
pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_FONT_SIZE: f64 = 10.0;
pub const DEFAULT_FONT_WEIGHT: &str = "";
pub const ANNOTATION_COLOR: &str = "#1a1a1a";
