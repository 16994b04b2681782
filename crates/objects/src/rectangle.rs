use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described only by its size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_is_width_times_height() {
        let r = Rectangle::new(10.0, 20.0);
        assert_eq!(r.width, 10.0);
        assert_eq!(r.height, 20.0);
        assert_eq!(r.area(), 200.0);
    }

    #[test]
    fn zero_sized() {
        assert_eq!(Rectangle::default().area(), 0.0);
    }
}
