//! Headless Monte Carlo harness for tuning the simulation.
//!
//! Runs seeded sessions under a naive autopilot with no terminal attached,
//! so tuning changes to `GameConfig` can be judged by score distributions
//! instead of by feel.

use crate::config::GameConfig;
use crate::core::session::GameSession;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;

/// Simulation run parameters.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of sessions to run.
    pub runs: u32,
    /// Safety cap per session; a session still alive here counts as survived.
    pub max_ticks: u64,
    /// RNG seed for reproducible runs. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: 100,
            max_ticks: 20_000,
            seed: None,
        }
    }
}

/// Aggregated results across all runs.
#[derive(Debug, Clone, Default)]
pub struct SimReport {
    pub runs: u32,
    pub min_score: u32,
    pub max_score: u32,
    pub total_score: u64,
    pub total_ticks: u64,
    /// Sessions that hit the tick cap without crashing.
    pub survived: u32,
}

impl SimReport {
    pub fn avg_score(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.total_score as f64 / self.runs as f64
    }

    pub fn avg_ticks(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.total_ticks as f64 / self.runs as f64
    }

    pub fn to_text(&self) -> String {
        format!(
            "Runs:           {}\n\
             Score:          min {} / avg {:.1} / max {}\n\
             Ticks survived: avg {:.0}\n\
             Full survivals: {}\n",
            self.runs,
            self.min_score,
            self.avg_score(),
            self.max_score,
            self.avg_ticks(),
            self.survived,
        )
    }
}

/// Run `sim.runs` sessions and aggregate their outcomes.
pub fn run_simulation(sim: &SimConfig, game: &GameConfig) -> io::Result<SimReport> {
    let mut rng = match sim.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut report = SimReport {
        runs: sim.runs,
        min_score: u32::MAX,
        ..Default::default()
    };

    for _ in 0..sim.runs {
        let mut session = GameSession::new(game, &mut rng)?;

        while !session.is_over() && session.tick_count < sim.max_ticks {
            autopilot(&mut session);
            session.tick(&mut rng);
        }

        if !session.is_over() {
            report.survived += 1;
        }
        report.min_score = report.min_score.min(session.score);
        report.max_score = report.max_score.max(session.score);
        report.total_score += u64::from(session.score);
        report.total_ticks += session.tick_count;
    }

    if report.runs == 0 {
        report.min_score = 0;
    }
    Ok(report)
}

/// Naive pilot: flap whenever the bird's center sits below the center of the
/// gap it must pass through next.
fn autopilot(session: &mut GameSession) {
    let bird = session.bird.rect();
    let bird_center = bird.y + bird.height / 2.0;
    let obstacle_width = session.field.obstacle_width();

    let should_flap = session
        .field
        .pairs
        .iter()
        .filter(|pair| pair.x + obstacle_width >= bird.x)
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .map(|pair| bird_center < pair.bottom_height + session.config.gap_size / 2.0)
        .unwrap_or(false);

    if should_flap {
        session.flap();
    }
}
