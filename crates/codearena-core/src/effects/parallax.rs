//! Scroll-driven background offset.

/// Background moves at this multiple of the scroll distance
pub const PARALLAX_RATE: f64 = -0.5;

pub fn background_offset(scroll_y: f64) -> f64 {
    let offset = scroll_y * PARALLAX_RATE;
    // Avoid rendering "-0px" at the top of the page
    if offset == 0.0 {
        0.0
    } else {
        offset
    }
}

/// CSS `background-position` value for the given scroll position
pub fn background_position(scroll_y: f64) -> String {
    format!("center {}px", background_offset(scroll_y))
}
