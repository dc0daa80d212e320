/// An axis-aligned box in top-left-origin page coordinates (points).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Splits the box horizontally into `count` equal-width columns.
    pub fn columns(&self, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let width = self.width / count as f32;
        (0..count)
            .map(|i| Rect::new(self.x + width * i as f32, self.y, width, self.height))
            .collect()
    }
}
