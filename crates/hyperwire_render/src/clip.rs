//! Line clipping and depth-buffered drawing
//!
//! A projected segment runs through four stages: depth rejection against the
//! near/far range, near-plane clipping, Cohen-Sutherland clipping against
//! the padded viewport, and depth-sampled drawing through the [`Surface`].

use bitflags::bitflags;

use crate::depth::DepthBuffer;
use crate::projector::ScreenPoint;
use crate::surface::Surface;
use hyperwire_core::Color;

bitflags! {
    /// Cohen-Sutherland region code: which padded viewport edges a point
    /// violates
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Outcode: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const BOTTOM = 1 << 2;
        const TOP = 1 << 3;
    }
}

/// The clipping rectangle, expanded by a padding margin.
///
/// The padding keeps lines from visibly popping at the window edge; the
/// depth buffer still ignores samples outside the visible area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Margin in pixels added on every side before clipping
    pub padding: i32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            padding: 100,
        }
    }

    pub fn with_padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    fn min_x(&self) -> f32 {
        -self.padding as f32
    }

    fn max_x(&self) -> f32 {
        self.width as f32 + self.padding as f32
    }

    fn min_y(&self) -> f32 {
        -self.padding as f32
    }

    fn max_y(&self) -> f32 {
        self.height as f32 + self.padding as f32
    }

    fn outcode(&self, x: f32, y: f32) -> Outcode {
        let mut code = Outcode::empty();
        if x < self.min_x() {
            code |= Outcode::LEFT;
        } else if x > self.max_x() {
            code |= Outcode::RIGHT;
        }
        if y < self.min_y() {
            code |= Outcode::BOTTOM;
        } else if y > self.max_y() {
            code |= Outcode::TOP;
        }
        code
    }
}

/// Depth interval segments must intersect to be drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthRange {
    pub near: f32,
    pub far: f32,
}

impl Default for DepthRange {
    fn default() -> Self {
        Self {
            near: 0.1,
            far: 100.0,
        }
    }
}

/// A clipped endpoint in continuous pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipPoint {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

impl ClipPoint {
    fn from_screen(p: ScreenPoint) -> Self {
        Self {
            x: p.x as f32,
            y: p.y as f32,
            depth: p.depth,
        }
    }
}

/// What happened to a segment in [`rasterize_segment`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentOutcome {
    /// Rejected entirely; nothing drawn, nothing written
    Culled,
    /// Collapsed to a single pixel after clipping and rounding; nothing
    /// drawn, nothing written. Happens to edges pointing straight along the
    /// view depth axis.
    Degenerate,
    /// Issued to the surface
    Drawn {
        /// True when clipping moved either endpoint
        clipped: bool,
    },
}

/// Clip a segment against the depth range and the padded viewport.
///
/// Returns the surviving endpoints, or None when the segment is rejected:
/// both endpoints before the near plane, both beyond the far plane, or the
/// whole segment outside one viewport edge.
pub fn clip_segment(
    a: ScreenPoint,
    b: ScreenPoint,
    viewport: &Viewport,
    range: &DepthRange,
) -> Option<(ClipPoint, ClipPoint)> {
    // Depth rejection
    if a.depth < range.near && b.depth < range.near {
        return None;
    }
    if a.depth > range.far && b.depth > range.far {
        return None;
    }

    let mut p1 = ClipPoint::from_screen(a);
    let mut p2 = ClipPoint::from_screen(b);

    // Near-plane clip: replace the one endpoint in front of the near plane
    if p1.depth < range.near {
        let t = (range.near - p1.depth) / (p2.depth - p1.depth);
        p1 = ClipPoint {
            x: p1.x + t * (p2.x - p1.x),
            y: p1.y + t * (p2.y - p1.y),
            depth: range.near,
        };
    } else if p2.depth < range.near {
        let t = (range.near - p2.depth) / (p1.depth - p2.depth);
        p2 = ClipPoint {
            x: p2.x + t * (p1.x - p2.x),
            y: p2.y + t * (p1.y - p2.y),
            depth: range.near,
        };
    }

    // Cohen-Sutherland against the padded viewport
    let mut code1 = viewport.outcode(p1.x, p1.y);
    let mut code2 = viewport.outcode(p2.x, p2.y);

    loop {
        if (code1 | code2).is_empty() {
            // Both inside
            return Some((p1, p2));
        }
        if !(code1 & code2).is_empty() {
            // Both outside the same edge
            return None;
        }

        let code = if !code1.is_empty() { code1 } else { code2 };
        let (x, y);
        if code.contains(Outcode::TOP) {
            x = p1.x + (p2.x - p1.x) * (viewport.max_y() - p1.y) / (p2.y - p1.y);
            y = viewport.max_y();
        } else if code.contains(Outcode::BOTTOM) {
            x = p1.x + (p2.x - p1.x) * (viewport.min_y() - p1.y) / (p2.y - p1.y);
            y = viewport.min_y();
        } else if code.contains(Outcode::RIGHT) {
            y = p1.y + (p2.y - p1.y) * (viewport.max_x() - p1.x) / (p2.x - p1.x);
            x = viewport.max_x();
        } else {
            y = p1.y + (p2.y - p1.y) * (viewport.min_x() - p1.x) / (p2.x - p1.x);
            x = viewport.min_x();
        }

        if code == code1 {
            p1.x = x;
            p1.y = y;
            code1 = viewport.outcode(p1.x, p1.y);
        } else {
            p2.x = x;
            p2.y = y;
            code2 = viewport.outcode(p2.x, p2.y);
        }
    }
}

/// Sample interpolated depth along a clipped segment into the depth buffer,
/// then issue the line to the surface.
///
/// The depth buffer records the nearest depth seen at each sampled pixel;
/// the line command itself is issued regardless of per-pixel outcomes, since
/// only edges are drawn and the adapter may anti-alias. Returns false when
/// the segment rounds down to a single pixel and nothing is issued.
pub fn draw_clipped(
    surface: &mut dyn Surface,
    depth_buffer: &mut DepthBuffer,
    p1: ClipPoint,
    p2: ClipPoint,
    color: Color,
    line_width: u32,
    depth_samples: usize,
) -> bool {
    let (x1, y1) = (p1.x.round() as i32, p1.y.round() as i32);
    let (x2, y2) = (p2.x.round() as i32, p2.y.round() as i32);

    // Zero-length after clipping
    if x1 == x2 && y1 == y2 {
        return false;
    }

    let samples = depth_samples.max(1);
    for i in 0..samples {
        let t = if samples == 1 {
            0.5
        } else {
            i as f32 / (samples - 1) as f32
        };
        let x = (p1.x + t * (p2.x - p1.x)).round() as i32;
        let y = (p1.y + t * (p2.y - p1.y)).round() as i32;
        let depth = p1.depth + t * (p2.depth - p1.depth);
        depth_buffer.test_and_set(x, y, depth);
    }

    surface.draw_line(x1, y1, x2, y2, color, line_width);
    true
}

/// Full per-segment pipeline: clip, depth-sample, draw.
#[allow(clippy::too_many_arguments)]
pub fn rasterize_segment(
    surface: &mut dyn Surface,
    depth_buffer: &mut DepthBuffer,
    a: ScreenPoint,
    b: ScreenPoint,
    viewport: &Viewport,
    range: &DepthRange,
    color: Color,
    line_width: u32,
    depth_samples: usize,
) -> SegmentOutcome {
    match clip_segment(a, b, viewport, range) {
        None => SegmentOutcome::Culled,
        Some((p1, p2)) => {
            let clipped = p1 != ClipPoint::from_screen(a) || p2 != ClipPoint::from_screen(b);
            if draw_clipped(surface, depth_buffer, p1, p2, color, line_width, depth_samples) {
                SegmentOutcome::Drawn { clipped }
            } else {
                SegmentOutcome::Degenerate
            }
        }
    }
}
