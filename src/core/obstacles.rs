//! Scrolling obstacle pairs and the field that recycles them.

use crate::config::GameConfig;
use crate::geometry::{overlaps, Rect};
use rand::Rng;

/// A top + bottom obstacle sharing one horizontal position and one
/// randomized vertical gap.
#[derive(Debug, Clone)]
pub struct ObstaclePair {
    /// Horizontal position of the pair's left edge.
    pub x: f64,
    /// Height of the top obstacle, hanging down from the field ceiling.
    pub top_height: f64,
    /// Height of the bottom obstacle, rising from the field floor.
    pub bottom_height: f64,
}

impl ObstaclePair {
    fn new<R: Rng>(x: f64, field_height: f64, gap_size: f64, rng: &mut R) -> Self {
        let mut pair = Self {
            x,
            top_height: 0.0,
            bottom_height: 0.0,
        };
        pair.randomize_gap(field_height, gap_size, rng);
        pair
    }

    /// Redraw the gap position.
    ///
    /// The two obstacle heights plus the gap always fill the field exactly:
    /// `top_height + bottom_height + gap_size == field_height`.
    pub fn randomize_gap<R: Rng>(&mut self, field_height: f64, gap_size: f64, rng: &mut R) {
        self.top_height = rng.gen_range(0.0..field_height - gap_size);
        self.bottom_height = field_height - gap_size - self.top_height;
    }
}

/// Fixed-size ordered collection of obstacle pairs.
///
/// Pairs advance leftward each tick; a pair that leaves the screen is
/// recycled one full field cycle ahead with a fresh gap, which keeps the
/// spacing even forever. Iteration order is insertion order and stays
/// stable so recycling and scoring are deterministic.
#[derive(Debug, Clone)]
pub struct ObstacleField {
    pub pairs: Vec<ObstaclePair>,
    field_width: f64,
    field_height: f64,
    gap_size: f64,
    pair_spacing: f64,
    obstacle_width: f64,
}

impl ObstacleField {
    /// Build `pair_count` pairs lined up off the right edge, each with an
    /// independently randomized gap.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let pairs = (0..config.pair_count)
            .map(|i| {
                ObstaclePair::new(
                    config.field_width + config.pair_spacing * i as f64,
                    config.field_height,
                    config.gap_size,
                    rng,
                )
            })
            .collect();

        Self {
            pairs,
            field_width: config.field_width,
            field_height: config.field_height,
            gap_size: config.gap_size,
            pair_spacing: config.pair_spacing,
            obstacle_width: config.obstacle_width,
        }
    }

    pub fn obstacle_width(&self) -> f64 {
        self.obstacle_width
    }

    /// Advance every pair one tick leftward. Returns how many pairs crossed
    /// the field midpoint during this tick.
    pub fn advance<R: Rng>(&mut self, deslocation: f64, rng: &mut R) -> u32 {
        let midpoint = self.field_width / 2.0;
        let cycle = self.pair_spacing * self.pairs.len() as f64;
        let mut scored = 0;

        for pair in &mut self.pairs {
            pair.x -= deslocation;

            if pair.x < -self.obstacle_width {
                pair.x += cycle;
                pair.randomize_gap(self.field_height, self.gap_size, rng);
            }

            // Half-open straddle check on the post-move position: exactly one
            // tick claims the crossing even if a single step carries the pair
            // past the midpoint.
            if pair.x + deslocation >= midpoint && pair.x < midpoint {
                scored += 1;
            }
        }

        scored
    }

    /// Logical collision rectangles (top, bottom) for one pair.
    pub fn rects(&self, pair: &ObstaclePair) -> (Rect, Rect) {
        let top = Rect::new(
            pair.x,
            self.field_height - pair.top_height,
            self.obstacle_width,
            pair.top_height,
        );
        let bottom = Rect::new(pair.x, 0.0, self.obstacle_width, pair.bottom_height);
        (top, bottom)
    }

    /// Whether `rect` overlaps any obstacle in the field. Short-circuits on
    /// the first hit; only existence matters.
    pub fn collides_with(&self, rect: &Rect) -> bool {
        self.pairs.iter().any(|pair| {
            let (top, bottom) = self.rects(pair);
            overlaps(rect, &top) || overlaps(rect, &bottom)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn test_field_starts_with_evenly_spaced_pairs() {
        let config = test_config();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let field = ObstacleField::new(&config, &mut rng);

        assert_eq!(field.pairs.len(), 4);
        for (i, pair) in field.pairs.iter().enumerate() {
            let expected = config.field_width + config.pair_spacing * i as f64;
            assert!((pair.x - expected).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_randomize_gap_preserves_invariant() {
        let config = test_config();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut pair = ObstaclePair {
            x: 0.0,
            top_height: 0.0,
            bottom_height: 0.0,
        };

        for _ in 0..1000 {
            pair.randomize_gap(config.field_height, config.gap_size, &mut rng);
            assert!(pair.top_height >= 0.0);
            assert!(pair.bottom_height >= 0.0);
            let total = pair.top_height + pair.bottom_height + config.gap_size;
            assert!((total - config.field_height).abs() < 1e-9);
        }
    }

    #[test]
    fn test_advance_moves_every_pair_left() {
        let config = test_config();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut field = ObstacleField::new(&config, &mut rng);
        let before: Vec<f64> = field.pairs.iter().map(|p| p.x).collect();

        field.advance(config.scroll_speed, &mut rng);

        for (pair, old_x) in field.pairs.iter().zip(before) {
            assert!((pair.x - (old_x - config.scroll_speed)).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_offscreen_pair_recycles_one_cycle_ahead() {
        let config = test_config();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut field = ObstacleField::new(&config, &mut rng);

        // Drop a pair just past the recycle threshold.
        field.pairs[0].x = -config.obstacle_width - 1.0;
        let old_gap = field.pairs[0].top_height;

        field.advance(config.scroll_speed, &mut rng);

        let expected = -config.obstacle_width - 1.0 - config.scroll_speed
            + config.pair_spacing * config.pair_count as f64;
        assert!((field.pairs[0].x - expected).abs() < f64::EPSILON);
        // A fresh gap was drawn (astronomically unlikely to repeat exactly).
        assert_ne!(field.pairs[0].top_height, old_gap);
    }

    #[test]
    fn test_pair_exactly_at_threshold_is_not_recycled() {
        let config = test_config();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut field = ObstacleField::new(&config, &mut rng);

        // After this tick the pair sits exactly at -obstacle_width, which is
        // not yet past the threshold.
        field.pairs[0].x = -config.obstacle_width + config.scroll_speed;
        field.advance(config.scroll_speed, &mut rng);
        assert!((field.pairs[0].x - (-config.obstacle_width)).abs() < f64::EPSILON);

        // One more tick pushes it past and recycles it.
        field.advance(config.scroll_speed, &mut rng);
        assert!(field.pairs[0].x > 0.0);
    }

    #[test]
    fn test_midpoint_crossing_scores_once() {
        let config = test_config();
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut field = ObstacleField::new(&config, &mut rng);

        // Park the other pairs far away so only pair 0 can score.
        for pair in field.pairs.iter_mut().skip(1) {
            pair.x = 10_000.0;
        }
        field.pairs[0].x = config.field_width / 2.0 + 12.0;

        let mut total = 0;
        for _ in 0..10 {
            total += field.advance(config.scroll_speed, &mut rng);
        }
        assert_eq!(total, 1);
    }

    #[test]
    fn test_landing_exactly_on_midpoint_does_not_score_until_passed() {
        let config = test_config();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut field = ObstacleField::new(&config, &mut rng);
        for pair in field.pairs.iter_mut().skip(1) {
            pair.x = 10_000.0;
        }
        let midpoint = config.field_width / 2.0;
        field.pairs[0].x = midpoint + config.scroll_speed;

        // Lands exactly on the midpoint: the half-open check keeps this tick
        // from scoring.
        assert_eq!(field.advance(config.scroll_speed, &mut rng), 0);
        // The next tick moves strictly below and claims the crossing.
        assert_eq!(field.advance(config.scroll_speed, &mut rng), 1);
    }

    #[test]
    fn test_collides_with_obstacle_body() {
        let config = test_config();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut field = ObstacleField::new(&config, &mut rng);

        field.pairs[0].x = 100.0;
        field.pairs[0].top_height = 200.0;
        field.pairs[0].bottom_height = config.field_height - config.gap_size - 200.0;

        // Inside the top obstacle.
        let in_top = Rect::new(110.0, config.field_height - 50.0, 10.0, 10.0);
        assert!(field.collides_with(&in_top));

        // Inside the gap.
        let gap_bottom = field.pairs[0].bottom_height;
        let in_gap = Rect::new(110.0, gap_bottom + 50.0, 10.0, 10.0);
        assert!(!field.collides_with(&in_gap));

        // Clear of the pair horizontally.
        let elsewhere = Rect::new(400.0, 10.0, 10.0, 10.0);
        assert!(!field.collides_with(&elsewhere));
    }

    #[test]
    fn test_grazing_the_gap_edge_collides() {
        let config = test_config();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut field = ObstacleField::new(&config, &mut rng);

        field.pairs[0].x = 100.0;
        field.pairs[0].top_height = 100.0;
        field.pairs[0].bottom_height = config.field_height - config.gap_size - 100.0;

        // Bottom edge resting exactly on top of the bottom obstacle:
        // inclusive boundaries make the touch count.
        let grazing = Rect::new(110.0, field.pairs[0].bottom_height, 10.0, 10.0);
        assert!(field.collides_with(&grazing));
    }
}
