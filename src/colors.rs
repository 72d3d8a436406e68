//! Lane colors. Purely presentational - callers are free to ignore the palette and color
//! edges however they like. The only load-bearing rule is the modulo wrap: any lane index
//! maps to *some* palette entry, no matter how wide the graph gets.

use crate::Lane;

/// The default lane palette, cycled by lane index. Exported so callers can build a legend or
/// pre-tint other UI to match.
pub const PALETTE: [&str; 8] = [
    "#4073d9", // blue
    "#d9433e", // red
    "#3ea355", // green
    "#9452d4", // purple
    "#d98e25", // orange
    "#2aa8a8", // teal
    "#d44f9c", // pink
    "#8a8f98", // grey
];

/// Color for a lane. Lanes beyond the palette wrap around rather than fault.
pub fn color_for_lane(lane: Lane) -> &'static str {
    PALETTE[lane % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_past_palette_end() {
        assert_eq!(color_for_lane(0), PALETTE[0]);
        assert_eq!(color_for_lane(PALETTE.len()), PALETTE[0]);
        assert_eq!(color_for_lane(PALETTE.len() * 3 + 2), PALETTE[2]);
        // Nothing faults for absurd lane counts.
        let _ = color_for_lane(usize::MAX);
    }
}
