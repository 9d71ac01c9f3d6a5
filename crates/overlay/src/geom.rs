/// Cursor and layout positions, in framebuffer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Axis-aligned rectangle in pixel space. Positions are floats so that
/// screen areas derived from normalized viewport fractions stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Clamps this rectangle's position so it lies fully inside `area`,
    /// each axis independently. A rectangle larger than `area` pins to
    /// the area's origin on that axis.
    pub fn clamp_position_within(&mut self, area: &Rect) {
        self.x = clamp_axis(self.x, area.x, area.x + area.width - self.width);
        self.y = clamp_axis(self.y, area.y, area.y + area.height - self.height);
    }
}

fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if max < min {
        return min;
    }
    value.clamp(min, max)
}

/// Normalized camera viewport: fractions of the display in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportFraction {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportFraction {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
        }
    }
}

/// Scales a normalized viewport by the display resolution to get the
/// drawable screen area in pixels. Pure; computed once at panel setup.
pub fn screen_area_of_viewport(viewport: ViewportFraction, resolution: (u32, u32)) -> Rect {
    let (res_w, res_h) = resolution;
    Rect {
        x: viewport.x * res_w as f32,
        y: viewport.y * res_h as f32,
        width: viewport.width * res_w as f32,
        height: viewport.height * res_h as f32,
    }
}
