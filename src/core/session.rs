//! The per-game state machine driving the obstacle field and bird each tick.

use crate::config::GameConfig;
use crate::core::bird::Bird;
use crate::core::obstacles::ObstacleField;
use rand::Rng;
use std::io;

/// Lifecycle of one game instance.
///
/// `Ended` is terminal: playing again means constructing a brand-new session,
/// never resuming this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Ended,
}

/// What happened during one tick.
///
/// Communicates tick events to the caller so presentation stays separate
/// from the simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickResult {
    /// Obstacle pairs whose leading edge crossed the field midpoint.
    pub scored: u32,
    /// The bird hit an obstacle; the session is now ended.
    pub collided: bool,
}

/// One game instance: bird + obstacle field + score, advanced by a fixed
/// external tick source.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub state: SessionState,
    /// Monotonically non-decreasing; +1 per pair per midpoint pass.
    pub score: u32,
    pub tick_count: u64,
    pub bird: Bird,
    pub field: ObstacleField,
    pub config: GameConfig,
}

impl GameSession {
    /// Build a fresh `Running` session.
    ///
    /// Fails if the config cannot support a well-formed simulation, so the
    /// per-tick operations below never have to.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> io::Result<Self> {
        config.validate()?;
        Ok(Self {
            state: SessionState::Running,
            score: 0,
            tick_count: 0,
            bird: Bird::new(config),
            field: ObstacleField::new(config, rng),
            config: config.clone(),
        })
    }

    /// Forward a flap trigger to the bird. Ignored once the session ended.
    pub fn flap(&mut self) {
        if self.state == SessionState::Running {
            self.bird.flap();
        }
    }

    pub fn is_over(&self) -> bool {
        self.state == SessionState::Ended
    }

    /// Run one simulation tick: scroll the field, integrate the bird, then
    /// check the bird against every obstacle.
    ///
    /// Ticks against an ended session mutate nothing, so a stray timer
    /// firing after game over is harmless.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> TickResult {
        if self.state == SessionState::Ended {
            return TickResult::default();
        }

        let scored = self.field.advance(self.config.scroll_speed, rng);
        self.score += scored;

        self.bird.advance();

        let collided = self.field.collides_with(&self.bird.rect());
        if collided {
            self.state = SessionState::Ended;
        }

        self.tick_count += 1;
        TickResult { scored, collided }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_session_starts_running() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let session = GameSession::new(&GameConfig::default(), &mut rng).unwrap();

        assert_eq!(session.state, SessionState::Running);
        assert_eq!(session.score, 0);
        assert_eq!(session.tick_count, 0);
        assert!(!session.is_over());
    }

    #[test]
    fn test_new_session_rejects_degenerate_config() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let config = GameConfig {
            gap_size: 1000.0,
            ..Default::default()
        };
        assert!(GameSession::new(&config, &mut rng).is_err());
    }

    #[test]
    fn test_tick_advances_entities() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let config = GameConfig::default();
        let mut session = GameSession::new(&config, &mut rng).unwrap();
        let bird_y = session.bird.y;
        let pair_x = session.field.pairs[0].x;

        let result = session.tick(&mut rng);

        assert_eq!(session.tick_count, 1);
        assert!(session.bird.y < bird_y); // fell, no flap queued
        assert!(session.field.pairs[0].x < pair_x);
        assert_eq!(result.scored, 0); // pairs all start off the right edge
        assert!(!result.collided);
    }

    #[test]
    fn test_collision_transitions_to_ended() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let config = GameConfig::default();
        let mut session = GameSession::new(&config, &mut rng).unwrap();

        // Wall directly on the bird: top obstacle reaching down past it.
        session.field.pairs[0].x = config.bird_x;
        session.field.pairs[0].top_height = config.field_height - config.gap_size;
        session.field.pairs[0].bottom_height = 0.0;

        let result = session.tick(&mut rng);
        assert!(result.collided);
        assert_eq!(session.state, SessionState::Ended);
    }

    #[test]
    fn test_ticks_after_end_mutate_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let config = GameConfig::default();
        let mut session = GameSession::new(&config, &mut rng).unwrap();
        session.field.pairs[0].x = config.bird_x;
        session.field.pairs[0].top_height = config.field_height - config.gap_size;
        session.field.pairs[0].bottom_height = 0.0;
        session.tick(&mut rng);
        assert!(session.is_over());

        let bird_y = session.bird.y;
        let score = session.score;
        let ticks = session.tick_count;
        let xs: Vec<f64> = session.field.pairs.iter().map(|p| p.x).collect();

        for _ in 0..5 {
            let result = session.tick(&mut rng);
            assert_eq!(result.scored, 0);
            assert!(!result.collided);
        }

        assert_eq!(session.bird.y, bird_y);
        assert_eq!(session.score, score);
        assert_eq!(session.tick_count, ticks);
        let after: Vec<f64> = session.field.pairs.iter().map(|p| p.x).collect();
        assert_eq!(after, xs);
    }

    #[test]
    fn test_flap_ignored_after_end() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let config = GameConfig::default();
        let mut session = GameSession::new(&config, &mut rng).unwrap();
        session.field.pairs[0].x = config.bird_x;
        session.field.pairs[0].top_height = config.field_height - config.gap_size;
        session.field.pairs[0].bottom_height = 0.0;
        session.tick(&mut rng);
        assert!(session.is_over());

        session.flap();
        assert!(!session.bird.is_flapping());
    }

    #[test]
    fn test_score_accumulates_from_field_events() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let config = GameConfig::default();
        let mut session = GameSession::new(&config, &mut rng).unwrap();

        // Park one pair just right of the midpoint. Every pair stays well
        // clear of the bird's column, so the tick can only score, not end.
        session.field.pairs[0].x = config.field_width / 2.0 + 2.0;
        let before = session.score;
        session.tick(&mut rng);

        assert_eq!(session.score, before + 1);
        assert!(!session.is_over());
    }
}
