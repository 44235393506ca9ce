//! Click ripple geometry for buttons.

use std::time::Duration;

/// How long a ripple stays in the button before removal
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);

/// A circular ripple, positioned relative to the button's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Ripple for a click at (`x`, `y`) inside a `width` x `height` button,
    /// with the click point at the circle's center.
    pub fn at(width: f64, height: f64, x: f64, y: f64) -> Self {
        let size = width.max(height);
        Self {
            size,
            left: x - size / 2.0,
            top: y - size / 2.0,
        }
    }

    /// Inline style for the ripple span
    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {left}px; top: {top}px; \
             background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); \
             animation: ripple 0.6s ease-out; pointer-events: none;",
            size = self.size,
            left = self.left,
            top = self.top,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_larger_dimension() {
        let ripple = Ripple::at(120.0, 40.0, 10.0, 10.0);
        assert_eq!(ripple.size, 120.0);
    }

    #[test]
    fn centered_on_click() {
        let ripple = Ripple::at(100.0, 40.0, 30.0, 20.0);
        assert_eq!(ripple.left + ripple.size / 2.0, 30.0);
        assert_eq!(ripple.top + ripple.size / 2.0, 20.0);
        assert_eq!((ripple.left, ripple.top), (-20.0, -30.0));
    }

    #[test]
    fn style_contains_geometry() {
        let style = Ripple::at(80.0, 40.0, 40.0, 20.0).style();
        assert!(style.contains("width: 80px"));
        assert!(style.contains("left: 0px"));
        assert!(style.contains("top: -20px"));
    }
}
