use glam::Vec2;

/// RGBA color
pub type Rgba = [u8; 4];

/// 2D drawing operations for the clock canvas
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill entire canvas with color
    Clear(Rgba),

    /// Single pixel
    Pixel { x: i32, y: i32, color: Rgba },

    /// One pixel wide line
    Line { from: Vec2, to: Vec2, color: Rgba },

    /// Line with round caps, `width` in pixels
    ThickLine { from: Vec2, to: Vec2, width: f32, color: Rgba },

    /// Circle outline
    Circle { center: Vec2, radius: f32, color: Rgba },

    /// Filled disc
    FilledCircle { center: Vec2, radius: f32, color: Rgba },
}

/// CPU pixel buffer with queued draw operations
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Vec<Rgba>,
    operations: Vec<DrawOp>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![[0; 4]; (width * height) as usize],
            operations: Vec::new(),
            width,
            height,
        }
    }

    /// Queue a draw operation - functional style
    pub fn draw(mut self, op: DrawOp) -> Self {
        self.operations.push(op);
        self
    }

    /// Queue several operations
    pub fn draw_all<I: IntoIterator<Item = DrawOp>>(mut self, ops: I) -> Self {
        self.operations.extend(ops);
        self
    }

    /// Run every queued operation in order
    pub fn execute_ops(mut self) -> Self {
        let ops = std::mem::take(&mut self.operations);
        for op in &ops {
            self.execute_op(op);
        }
        self
    }

    pub fn pending(&self) -> usize {
        self.operations.len()
    }

    fn execute_op(&mut self, op: &DrawOp) {
        match *op {
            DrawOp::Clear(color) => self.pixels.fill(color),
            DrawOp::Pixel { x, y, color } => self.set_pixel(x, y, color),
            DrawOp::Line { from, to, color } => self.draw_line(from, to, color),
            DrawOp::ThickLine { from, to, width, color } => {
                self.draw_thick_line(from, to, width, color)
            }
            DrawOp::Circle { center, radius, color } => self.draw_circle(center, radius, color),
            DrawOp::FilledCircle { center, radius, color } => {
                self.draw_filled_circle(center, radius, color)
            }
        }
    }

    /// Clipped pixel write
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        self.pixels[idx] = color;
    }

    /// Bresenham
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        let (mut x, mut y) = (from.x.round() as i32, from.y.round() as i32);
        let (x2, y2) = (to.x.round() as i32, to.y.round() as i32);

        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x, y, color);

            if x == x2 && y == y2 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Every pixel within `width / 2` of the segment
    fn draw_thick_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        let half = (width * 0.5).max(0.5);
        let min = from.min(to) - Vec2::splat(half);
        let max = from.max(to) + Vec2::splat(half);
        let segment = to - from;
        let len_sq = segment.length_squared();

        for py in min.y.floor() as i32..=max.y.ceil() as i32 {
            for px in min.x.floor() as i32..=max.x.ceil() as i32 {
                let p = Vec2::new(px as f32, py as f32);
                let t = if len_sq > 0.0 {
                    ((p - from).dot(segment) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                if p.distance(from + segment * t) <= half {
                    self.set_pixel(px, py, color);
                }
            }
        }
    }

    /// Midpoint circle
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let (cx, cy) = (center.x.round() as i32, center.y.round() as i32);
        let radius = radius.round().max(0.0) as i32;
        let (mut x, mut y) = (radius, 0i32);
        let mut p = 1 - radius;

        while x >= y {
            for (dx, dy) in [(x, y), (y, x), (-y, x), (-x, y), (-x, -y), (-y, -x), (y, -x), (x, -y)] {
                self.set_pixel(cx + dx, cy + dy, color);
            }
            y += 1;

            if p <= 0 {
                p += 2 * y + 1;
            } else {
                x -= 1;
                p += 2 * (y - x) + 1;
            }
        }
    }

    fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let (cx, cy) = (center.x.round() as i32, center.y.round() as i32);
        let r = radius.round().max(0.0) as i32;
        let r_sq = r * r;

        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r_sq {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Pixel at (x, y), `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Raw RGBA bytes, row major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Drop pixel data and start over at a new size
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![[0; 4]; (width * height) as usize];
        self.operations.clear();
    }
}
