//! "Load more" trigger heuristic.

/// Scroll geometry reported by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    /// Distance scrolled from the top of the content
    pub offset: f64,
    /// Total height of the rendered content
    pub content_height: f64,
    /// Height of the visible viewport
    pub viewport_height: f64,
}

impl ScrollPosition {
    pub fn new(offset: f64, content_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            content_height,
            viewport_height,
        }
    }

    /// Whether the bottom of the viewport is within `threshold` of the end.
    pub fn is_near_end(&self, threshold: f64) -> bool {
        self.offset > self.content_height - self.viewport_height - threshold
    }
}
