//! Level composition: walls, death zone, paddle, block pattern and balls
//!
//! Pure functions from a [`GameConfig`] to rectangles and positions; wiring
//! them into an environment happens in [`super::state`].

use super::color::Color;
use crate::geometry::{Point, Rectangle};
use crate::settings::GameConfig;

/// Spiral of blocks, 8 rows by 10 columns (true = block)
pub const SPIRAL: [[bool; 10]; 8] = {
    const X: bool = true;
    const O: bool = false;
    [
        [X, X, X, X, X, X, X, X, X, X],
        [X, O, O, O, O, O, O, O, O, X],
        [X, O, X, X, X, X, X, O, O, X],
        [X, O, X, O, O, O, X, O, O, X],
        [X, O, X, O, X, X, X, O, O, X],
        [X, O, X, O, X, O, O, O, O, X],
        [X, O, X, X, X, X, X, X, O, X],
        [X, X, X, X, X, X, X, X, X, X],
    ]
};

/// Block colors, cycled by row
pub const BLOCK_PALETTE: [Color; 6] = [
    Color::rgb(57, 53, 88),
    Color::rgb(100, 102, 159),
    Color::rgb(255, 204, 138),
    Color::rgb(255, 159, 128),
    Color::rgb(230, 135, 124),
    Color::rgb(211, 118, 132),
];

pub const BORDER_COLOR: Color = Color::rgb(40, 46, 60);
pub const DEATH_ZONE_COLOR: Color = Color::LIGHT_GRAY;
pub const PADDLE_COLOR: Color = Color::rgb(152, 136, 41);
pub const BALL_COLOR: Color = Color::BLACK;

/// Horizontal gap between neighbouring balls at launch
const BALL_SPACING: f64 = 50.0;
/// Launch height above the paddle's top edge
const BALL_LAUNCH_HEIGHT: f64 = 60.0;

/// Left, top and right walls
pub fn border_rects(config: &GameConfig) -> [Rectangle; 3] {
    let t = config.border_thickness;
    [
        Rectangle::new(Point::new(0.0, 0.0), t, config.arena_height),
        Rectangle::new(Point::new(0.0, 0.0), config.arena_width, t),
        Rectangle::new(
            Point::new(config.arena_width - t, 0.0),
            t,
            config.arena_height,
        ),
    ]
}

/// Strip along the bottom that swallows balls
pub fn death_zone_rect(config: &GameConfig) -> Rectangle {
    let t = config.border_thickness;
    Rectangle::new(
        Point::new(0.0, config.arena_height - t),
        config.arena_width,
        t,
    )
}

/// Paddle centered horizontally at `paddle_y`
pub fn paddle_rect(config: &GameConfig) -> Rectangle {
    Rectangle::new(
        Point::new((config.arena_width - config.paddle_width) / 2.0, config.paddle_y),
        config.paddle_width,
        config.paddle_height,
    )
}

/// Rectangle and color of every block in `pattern`, row by row
pub fn pattern_blocks<R: AsRef<[bool]>>(
    config: &GameConfig,
    pattern: &[R],
) -> Vec<(Rectangle, Color)> {
    let (origin_x, origin_y) = config.block_origin;

    pattern
        .iter()
        .enumerate()
        .flat_map(|(row, cells)| {
            let color = BLOCK_PALETTE[row % BLOCK_PALETTE.len()];
            let y = origin_y + row as f64 * config.block_spacing_y;
            cells
                .as_ref()
                .iter()
                .enumerate()
                .filter(|(_, filled)| **filled)
                .map(move |(col, _)| {
                    let x = origin_x + col as f64 * config.block_spacing_x;
                    (
                        Rectangle::new(Point::new(x, y), config.block_width, config.block_height),
                        color,
                    )
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Launch positions: centered above the paddle, then alternating left and
/// right (0, -50, +50, -100, ...)
pub fn ball_positions(config: &GameConfig) -> Vec<Point> {
    let center_x = config.arena_width / 2.0;
    let y = config.paddle_y - BALL_LAUNCH_HEIGHT;

    (0..config.ball_count)
        .map(|i| {
            let step = f64::from(i.div_ceil(2));
            let side = if i % 2 == 1 { -1.0 } else { 1.0 };
            Point::new(center_x + side * step * BALL_SPACING, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spiral_block_count() {
        let config = GameConfig::default();
        let blocks = pattern_blocks(&config, &SPIRAL);
        let expected = SPIRAL.iter().flatten().filter(|b| **b).count();
        assert_eq!(blocks.len(), expected);
        assert_eq!(expected, 50);
    }

    #[test]
    fn test_pattern_positions_and_colors() {
        let config = GameConfig::default();
        let blocks = pattern_blocks(&config, &SPIRAL);

        let (first, color) = blocks[0];
        assert!(first.upper_left.approx_eq(Point::new(25.0, 50.0)));
        assert_eq!(first.width, 50.0);
        assert_eq!(color, BLOCK_PALETTE[0]);

        // Last row is row 7, palette wraps to index 1
        let (last, color) = blocks[blocks.len() - 1];
        assert!(last.upper_left.approx_eq(Point::new(25.0 + 9.0 * 75.0, 50.0 + 7.0 * 35.0)));
        assert_eq!(color, BLOCK_PALETTE[1]);
    }

    #[test]
    fn test_blocks_stay_inside_walls() {
        let config = GameConfig::default();
        let [left, top, right] = border_rects(&config);
        for (rect, _) in pattern_blocks(&config, &SPIRAL) {
            assert!(rect.left_x() >= left.right_x());
            assert!(rect.right_x() <= right.left_x());
            assert!(rect.top_y() >= top.bottom_y());
        }
    }

    #[test]
    fn test_ball_positions() {
        let config = GameConfig::default();
        let positions = ball_positions(&config);
        let xs: Vec<f64> = positions.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![400.0, 350.0, 450.0]);
        assert!(positions.iter().all(|p| p.y == 500.0));
    }

    #[test]
    fn test_paddle_and_death_zone() {
        let config = GameConfig::default();
        let paddle = paddle_rect(&config);
        assert_eq!(paddle.left_x(), 337.5);
        assert_eq!(paddle.top_y(), 560.0);
        assert_eq!(death_zone_rect(&config).top_y(), 575.0);
    }
}
