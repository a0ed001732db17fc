//! Lane choice for new captions.
//!
//! Each lane is summarised by the trailing edge of its furthest-right
//! caption (-1 when empty). The lane with the smallest edge has the most
//! runway; ties go to the lowest index.

/// Trailing edge reported for a lane with no captions
pub const EMPTY_LANE_EDGE: f64 = -1.0;

/// Index and edge of the lane with the most runway, or None with no lanes
pub fn select_lane<I>(rightmost_edges: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(usize, f64)> = None;

    for (lane, edge) in rightmost_edges.into_iter().enumerate() {
        match best {
            Some((_, best_edge)) if edge >= best_edge => {}
            _ => best = Some((lane, edge)),
        }
    }

    best
}

/// A lane can take a caption when its trailing edge leaves at least `gap`
/// px before the right screen edge
pub fn has_runway(edge: f64, screen_width: f64, gap: f64) -> bool {
    screen_width - edge >= gap
}
