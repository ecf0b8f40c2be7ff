//! Fading-edge strengths for the host to paint.

/// Strength of the left fade in `0.0..=1.0` at scroll offset `current_x`.
pub fn left_strength(current_x: i32, fading_edge_length: i32) -> f32 {
    if current_x <= 0 {
        0.0
    } else if current_x < fading_edge_length {
        current_x as f32 / fading_edge_length as f32
    } else {
        1.0
    }
}

/// Strength of the right fade; `max_x` is `None` while the bound is unknown.
pub fn right_strength(current_x: i32, max_x: Option<i32>, fading_edge_length: i32) -> f32 {
    let Some(max_x) = max_x else {
        return 1.0;
    };
    let remaining = max_x - current_x;
    if remaining <= 0 {
        0.0
    } else if remaining < fading_edge_length {
        remaining as f32 / fading_edge_length as f32
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_ramps_in() {
        assert_eq!(left_strength(0, 40), 0.0);
        assert_eq!(left_strength(10, 40), 0.25);
        assert_eq!(left_strength(400, 40), 1.0);
    }

    #[test]
    fn right_ramps_out_against_bound() {
        assert_eq!(right_strength(500, Some(500), 40), 0.0);
        assert_eq!(right_strength(480, Some(500), 40), 0.5);
        assert_eq!(right_strength(0, Some(500), 40), 1.0);
        assert_eq!(right_strength(0, None, 40), 1.0);
    }
}
