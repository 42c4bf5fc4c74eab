//! Collision relaxation for the bubble cluster.
//!
//! Bubbles start on a phyllotaxis spiral around the origin and push apart
//! wherever they overlap. Each tick cools `alpha`; the run is over once alpha
//! drops below `alpha_min` or the iteration budget is spent. Nothing pulls the
//! bubbles back together, so the result is a loosely packed round cluster.
//!
//! The stepper is independent of rendering: [`CollisionSimulation::tick`] is
//! driven once per animation frame by the detail view, and [`relax`] runs the
//! same process to completion in one call.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Golden angle, used to seed the spiral.
const INITIAL_ANGLE: f64 = std::f64::consts::PI * 0.763_932_022_500_210_3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub alpha_min: f64,
    pub alpha_decay: f64,
    /// Fraction of velocity lost every tick.
    pub velocity_decay: f64,
    pub collide_strength: f64,
    pub initial_radius: f64,
    pub max_iterations: usize,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let alpha_min = 0.001;
        Self {
            alpha_min,
            // Cools from 1 to alpha_min in 300 ticks.
            alpha_decay: 1.0 - alpha_min.powf(1.0 / 300.0),
            velocity_decay: 0.4,
            collide_strength: 1.0,
            initial_radius: 10.0,
            max_iterations: 300,
            seed: 0x5eed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Body {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
}

#[derive(Debug, Clone)]
pub struct CollisionSimulation {
    bodies: Vec<Body>,
    radii: Vec<f64>,
    max_radius: f64,
    alpha: f64,
    iterations: usize,
    config: SimulationConfig,
    rng: StdRng,
}

/// Default placement for `n` bodies: a sunflower spiral around the origin.
pub fn spiral_positions(n: usize, initial_radius: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let radius = initial_radius * (0.5 + i as f64).sqrt();
            let angle = i as f64 * INITIAL_ANGLE;
            Point {
                x: radius * angle.cos(),
                y: radius * angle.sin(),
            }
        })
        .collect()
}

impl CollisionSimulation {
    /// Bodies on the default spiral.
    pub fn new(radii: Vec<f64>, config: SimulationConfig) -> Self {
        let positions = spiral_positions(radii.len(), config.initial_radius);
        Self::with_positions(positions, radii, config)
    }

    /// Missing or non-finite radii are treated as zero.
    pub fn with_positions(positions: Vec<Point>, radii: Vec<f64>, config: SimulationConfig) -> Self {
        let radii: Vec<f64> = (0..positions.len())
            .map(|i| radii.get(i).copied().filter(|r| r.is_finite()).unwrap_or(0.0).max(0.0))
            .collect();
        let max_radius = radii.iter().copied().fold(0.0, f64::max);
        let bodies = positions
            .into_iter()
            .map(|p| Body {
                x: p.x,
                y: p.y,
                vx: 0.0,
                vy: 0.0,
            })
            .collect();
        Self {
            bodies,
            radii,
            max_radius,
            alpha: 1.0,
            iterations: 0,
            config,
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn is_settled(&self) -> bool {
        self.bodies.is_empty()
            || self.alpha < self.config.alpha_min
            || self.iterations >= self.config.max_iterations
    }

    pub fn positions(&self) -> Vec<Point> {
        self.bodies.iter().map(|b| Point { x: b.x, y: b.y }).collect()
    }

    /// One relaxation step. Returns `false` once the run has settled.
    pub fn tick(&mut self) -> bool {
        if self.is_settled() {
            return false;
        }
        self.alpha += (0.0 - self.alpha) * self.config.alpha_decay;
        self.resolve_collisions();

        let keep = 1.0 - self.config.velocity_decay;
        for body in &mut self.bodies {
            body.vx *= keep;
            body.vy *= keep;
            body.x += body.vx;
            body.y += body.vy;
        }
        self.iterations += 1;
        true
    }

    /// Push overlapping pairs apart. Bodies are swept in x order so only
    /// neighbours within reach are compared.
    fn resolve_collisions(&mut self) {
        let n = self.bodies.len();
        if n < 2 {
            return;
        }
        let strength = self.config.collide_strength;

        // Sweep order is fixed for the whole pass.
        let predicted: Vec<f64> = self.bodies.iter().map(|b| b.x + b.vx).collect();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| predicted[a].total_cmp(&predicted[b]));

        for (pos, &i) in order.iter().enumerate() {
            let ri = self.radii[i];
            let reach = ri + self.max_radius;
            for &j in &order[pos + 1..] {
                if predicted[j] - predicted[i] > reach {
                    break;
                }
                let xi = self.bodies[i].x + self.bodies[i].vx;
                let yi = self.bodies[i].y + self.bodies[i].vy;
                let rj = self.radii[j];
                let r = ri + rj;
                let mut dx = xi - (self.bodies[j].x + self.bodies[j].vx);
                let mut dy = yi - (self.bodies[j].y + self.bodies[j].vy);
                let mut l = dx * dx + dy * dy;
                if l >= r * r {
                    continue;
                }
                if dx == 0.0 {
                    dx = self.jiggle();
                    l += dx * dx;
                }
                if dy == 0.0 {
                    dy = self.jiggle();
                    l += dy * dy;
                }
                let dist = l.sqrt();
                let push = (r - dist) / dist * strength;
                dx *= push;
                dy *= push;

                // Smaller bodies move further.
                let rj2 = rj * rj;
                let share = if ri * ri + rj2 > 0.0 {
                    rj2 / (ri * ri + rj2)
                } else {
                    0.5
                };
                self.bodies[i].vx += dx * share;
                self.bodies[i].vy += dy * share;
                self.bodies[j].vx -= dx * (1.0 - share);
                self.bodies[j].vy -= dy * (1.0 - share);
            }
        }
    }

    fn jiggle(&mut self) -> f64 {
        (self.rng.gen::<f64>() - 0.5) * 1e-6
    }
}

/// Run a full relaxation from the given start and return the final positions.
pub fn relax(positions: &[Point], radii: &[f64], config: SimulationConfig) -> Vec<Point> {
    let mut simulation = CollisionSimulation::with_positions(positions.to_vec(), radii.to_vec(), config);
    while simulation.tick() {}
    simulation.positions()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlap_depth(positions: &[Point], radii: &[f64]) -> f64 {
        let mut worst: f64 = 0.0;
        for i in 0..positions.len() {
            for j in i + 1..positions.len() {
                let dx = positions[i].x - positions[j].x;
                let dy = positions[i].y - positions[j].y;
                let gap = (dx * dx + dy * dy).sqrt() - (radii[i] + radii[j]);
                worst = worst.max(-gap);
            }
        }
        worst
    }

    #[test]
    fn default_config_cools_in_three_hundred_ticks() {
        let config = SimulationConfig::default();
        let mut sim = CollisionSimulation::new(vec![4.0; 3], config);
        let mut ticks = 0;
        while sim.tick() {
            ticks += 1;
        }
        assert!(ticks <= 300);
        assert!(sim.is_settled());
        assert!(!sim.tick());
    }

    #[test]
    fn spiral_starts_near_the_origin() {
        let points = spiral_positions(50, 10.0);
        assert_eq!(points.len(), 50);
        for (i, p) in points.iter().enumerate() {
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert!((r - 10.0 * (0.5 + i as f64).sqrt()).abs() < 1e-9);
        }
    }

    #[test]
    fn relaxation_removes_most_overlap() {
        let radii: Vec<f64> = (0..60).map(|i| 4.0 + (i % 7) as f64 * 2.5).collect();
        let start = spiral_positions(radii.len(), 10.0);
        let before = overlap_depth(&start, &radii);
        let after = overlap_depth(&relax(&start, &radii, SimulationConfig::default()), &radii);
        assert!(before > 5.0);
        assert!(after < before * 0.25, "overlap {before} -> {after}");
    }

    #[test]
    fn stacked_bodies_are_separated() {
        let start = vec![Point { x: 0.0, y: 0.0 }; 2];
        let out = relax(&start, &[5.0, 5.0], SimulationConfig::default());
        let dx = out[0].x - out[1].x;
        let dy = out[0].y - out[1].y;
        assert!((dx * dx + dy * dy).sqrt() > 5.0);
    }

    #[test]
    fn separated_bodies_stay_put() {
        let start = vec![Point { x: -50.0, y: 0.0 }, Point { x: 50.0, y: 0.0 }];
        let out = relax(&start, &[3.0, 3.0], SimulationConfig::default());
        assert_eq!(out, start);
    }

    #[test]
    fn same_seed_same_layout() {
        let radii = vec![6.0; 20];
        let start = vec![Point { x: 0.0, y: 0.0 }; 20];
        let a = relax(&start, &radii, SimulationConfig::default());
        let b = relax(&start, &radii, SimulationConfig::default());
        assert_eq!(a, b);
    }

    #[test]
    fn empty_and_single_inputs() {
        assert!(relax(&[], &[], SimulationConfig::default()).is_empty());
        let one = [Point { x: 1.0, y: 2.0 }];
        assert_eq!(relax(&one, &[10.0], SimulationConfig::default()), one.to_vec());
    }

    #[test]
    fn iteration_budget_caps_the_run() {
        let config = SimulationConfig {
            max_iterations: 5,
            ..SimulationConfig::default()
        };
        let mut sim = CollisionSimulation::new(vec![8.0; 10], config);
        while sim.tick() {}
        assert_eq!(sim.iterations(), 5);
    }
}
