//! Rectangles with independently rounded corners
//!
//! A `RoundedPath` is the union of an octagon, inset at each corner by
//! that corner's radius, and one disk per corner. It is filled with the
//! non-zero winding rule. A radius of zero collapses the disk to a point
//! and leaves the corner square.

/// Corner radii, clockwise from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Same radius on all four corners
    pub const fn uniform(radius: f32) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// Rounded top corners, square bottom corners
    pub const fn top(radius: f32) -> Self {
        Self::new(radius, radius, 0.0, 0.0)
    }
}

/// One corner disk of the path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
}

impl Disk {
    fn contains(&self, x: f32, y: f32) -> bool {
        if self.radius <= 0.0 {
            return false;
        }
        let dx = x - self.cx;
        let dy = y - self.cy;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Supersampling grid per axis used for antialiased coverage
const SAMPLES: usize = 4;

/// Closed region describing a rectangle with per-corner rounding
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedPath {
    width: f32,
    height: f32,
    radii: CornerRadii,
    polygon: [(f32, f32); 8],
    disks: [Disk; 4],
}

impl RoundedPath {
    /// Build the path for a `width` x `height` box
    pub fn build(width: f32, height: f32, radii: CornerRadii) -> Self {
        let CornerRadii {
            top_left: r1,
            top_right: r2,
            bottom_right: r3,
            bottom_left: r4,
        } = radii;
        let (w, h) = (width, height);

        let polygon = [
            (0.0, r1),
            (r1, 0.0),
            (w - r2, 0.0),
            (w, r2),
            (w, h - r3),
            (w - r3, h),
            (r4, h),
            (0.0, h - r4),
        ];

        let disks = [
            Disk { cx: r1, cy: r1, radius: r1 },
            Disk { cx: w - r2, cy: r2, radius: r2 },
            Disk { cx: w - r3, cy: h - r3, radius: r3 },
            Disk { cx: r4, cy: h - r4, radius: r4 },
        ];

        Self {
            width,
            height,
            radii,
            polygon,
            disks,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// The inset octagon, clockwise from the left end of the top-left cut
    pub fn polygon(&self) -> &[(f32, f32); 8] {
        &self.polygon
    }

    /// Corner disks in top-left, top-right, bottom-right, bottom-left order
    pub fn disks(&self) -> &[Disk; 4] {
        &self.disks
    }

    /// True when no corner is rounded
    pub fn is_rectangle(&self) -> bool {
        self.disks.iter().all(|disk| disk.radius <= 0.0)
    }

    /// Point-in-region test with the winding fill rule
    pub fn contains(&self, x: f32, y: f32) -> bool {
        if x < 0.0 || y < 0.0 || x > self.width || y > self.height {
            return false;
        }
        self.winding_number(x, y) != 0 || self.disks.iter().any(|disk| disk.contains(x, y))
    }

    /// Fraction of the pixel `(px, py)` covered by the region
    pub fn coverage(&self, px: i32, py: i32) -> f32 {
        let (x0, y0) = (px as f32, py as f32);
        let (x1, y1) = (x0 + 1.0, y0 + 1.0);

        if x1 <= 0.0 || y1 <= 0.0 || x0 >= self.width || y0 >= self.height {
            return 0.0;
        }

        let inside_bounds = x0 >= 0.0 && y0 >= 0.0 && x1 <= self.width && y1 <= self.height;
        if inside_bounds && !self.touches_corner(x0, y0, x1, y1) {
            return 1.0;
        }

        let step = 1.0 / SAMPLES as f32;
        let mut hits = 0usize;
        for sy in 0..SAMPLES {
            for sx in 0..SAMPLES {
                let x = x0 + (sx as f32 + 0.5) * step;
                let y = y0 + (sy as f32 + 0.5) * step;
                if self.contains(x, y) {
                    hits += 1;
                }
            }
        }
        hits as f32 / (SAMPLES * SAMPLES) as f32
    }

    /// Whether the box overlaps any rounded corner square
    fn touches_corner(&self, x0: f32, y0: f32, x1: f32, y1: f32) -> bool {
        let CornerRadii {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        } = self.radii;
        let (w, h) = (self.width, self.height);

        (x0 < top_left && y0 < top_left)
            || (x1 > w - top_right && y0 < top_right)
            || (x1 > w - bottom_right && y1 > h - bottom_right)
            || (x0 < bottom_left && y1 > h - bottom_left)
    }

    fn winding_number(&self, x: f32, y: f32) -> i32 {
        let mut winding = 0;
        for i in 0..self.polygon.len() {
            let (x0, y0) = self.polygon[i];
            let (x1, y1) = self.polygon[(i + 1) % self.polygon.len()];
            let side = (x1 - x0) * (y - y0) - (x - x0) * (y1 - y0);

            if y0 <= y {
                if y1 > y && side > 0.0 {
                    winding += 1;
                }
            } else if y1 <= y && side < 0.0 {
                winding -= 1;
            }
        }
        winding
    }
}
