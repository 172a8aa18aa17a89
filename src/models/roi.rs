use serde::{Deserialize, Serialize};

/// A pointer position on the display surface, in frame coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Region of Interest over the current frame
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Roi {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Roi {
    /// Create a new ROI from coordinates
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build an ROI from two opposite corners, normalized so that
    /// x_min <= x_max and y_min <= y_max regardless of drag direction
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x_min = a.x.min(b.x);
        let x_max = a.x.max(b.x);
        let y_min = a.y.min(b.y);
        let y_max = a.y.max(b.y);

        Self {
            x: x_min,
            y: y_min,
            width: (x_max - x_min) as u32,
            height: (y_max - y_min) as u32,
        }
    }

    /// An ROI with zero area never produces a crop
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Get the end coordinates
    pub fn x2(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn y2(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Calculate area
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Intersect with a frame of the given dimensions.
    ///
    /// Returns `None` when nothing of the ROI lies inside the frame,
    /// i.e. the clamped crop would have zero area.
    pub fn clamp_to(&self, frame_width: u32, frame_height: u32) -> Option<Roi> {
        let x0 = self.x.max(0).min(frame_width as i32);
        let y0 = self.y.max(0).min(frame_height as i32);
        let x1 = self.x2().max(0).min(frame_width as i32);
        let y1 = self.y2().max(0).min(frame_height as i32);

        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        Some(Roi::new(x0, y0, (x1 - x0) as u32, (y1 - y0) as u32))
    }
}

/// Tracks a pointer-drag gesture and resolves it into an axis-aligned
/// rectangle.
///
/// Pointer-down sets the anchor and discards any prior selection;
/// drag and release set the far corner. The rectangle only exists once
/// both corners are set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoiSelection {
    anchor: Option<Point>,
    cursor: Option<Point>,
}

impl RoiSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new selection at the anchor point, clearing the old one
    pub fn begin(&mut self, p: Point) {
        self.anchor = Some(p);
        self.cursor = None;
    }

    /// Update the provisional far corner during a drag
    pub fn drag(&mut self, p: Point) {
        if self.anchor.is_some() {
            self.cursor = Some(p);
        }
    }

    /// Finalize the far corner on pointer release
    pub fn finish(&mut self, p: Point) {
        self.drag(p);
    }

    /// Discard the selection entirely
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The normalized rectangle, present once both corners are set.
    /// May have zero area; callers check `is_valid` before cropping.
    pub fn rect(&self) -> Option<Roi> {
        Some(Roi::from_corners(self.anchor?, self.cursor?))
    }
}
