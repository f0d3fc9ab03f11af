//! Pointer-tracked glow math.
//!
//! The glow's only interface to styling is a pair of custom properties on
//! the card; CSS positions the effect from them.

pub const MOUSE_X_VAR: &str = "--mouse-x";
pub const MOUSE_Y_VAR: &str = "--mouse-y";

/// Pointer position as a percentage of a card's bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowPoint {
    pub x_pct: f64,
    pub y_pct: f64,
}

/// `x`/`y` are the pointer's offsets within the box. A degenerate box
/// yields no point.
pub fn glow_point(x: f64, y: f64, width: f64, height: f64) -> Option<GlowPoint> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(GlowPoint {
        x_pct: (x / width) * 100.0,
        y_pct: (y / height) * 100.0,
    })
}

pub fn format_pct(pct: f64) -> String {
    format!("{pct}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_of_box() {
        let p = glow_point(50.0, 25.0, 200.0, 100.0).unwrap();
        assert_eq!(p.x_pct, 25.0);
        assert_eq!(p.y_pct, 25.0);
    }

    #[test]
    fn degenerate_box_yields_nothing() {
        assert_eq!(glow_point(10.0, 10.0, 0.0, 100.0), None);
        assert_eq!(glow_point(10.0, 10.0, 100.0, 0.0), None);
    }

    #[test]
    fn formats_css_percentage() {
        assert_eq!(format_pct(42.5), "42.5%");
    }
}
