//! Straight lines sampled at equal spacing.

/// A straight line between two `(x, y)` coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

impl Line {
    pub fn new(start: (f64, f64), end: (f64, f64)) -> Self {
        Self { start, end }
    }

    /// `count` equally spaced points from `start` to `end` inclusive.
    ///
    /// The final point is always exactly `end`, so a single point yields
    /// just the end coordinate.
    pub fn points(&self, count: usize) -> Vec<(f64, f64)> {
        if count == 0 {
            return Vec::new();
        }

        let steps = (count - 1) as f64;
        let x_diff = self.end.0 - self.start.0;
        let y_diff = self.end.1 - self.start.1;

        let mut points: Vec<(f64, f64)> = (0..count - 1)
            .map(|i| {
                let t = i as f64 / steps;
                (self.start.0 + x_diff * t, self.start.1 + y_diff * t)
            })
            .collect();
        points.push(self.end);

        points
    }
}
