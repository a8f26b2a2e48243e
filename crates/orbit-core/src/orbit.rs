//! Orbit clock and the antipodal circular paths of the two spheres.

use glam::Vec3;

/// Monotonic animation angle.
///
/// The angle is derived from the tick count rather than accumulated, so after
/// `n` ticks it is exactly `start + n * step` with no summation drift. There
/// is no wraparound; the trigonometry handles periodicity.
#[derive(Clone, Debug)]
pub struct OrbitClock {
    start: f64,
    step: f64,
    ticks: u64,
}

impl OrbitClock {
    pub fn new(start: f64, step: f64) -> Self {
        Self {
            start,
            step,
            ticks: 0,
        }
    }

    /// Advance by one step and return the new angle.
    pub fn advance(&mut self) -> f64 {
        self.ticks += 1;
        self.angle()
    }

    pub fn angle(&self) -> f64 {
        self.start + self.ticks as f64 * self.step
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Positions of sphere A and sphere B for angle `theta`.
///
/// A runs at `(r cos θ, y_a, r sin θ)` and B sits diametrically opposite at
/// `(-r cos θ, y_b, -r sin θ)`.
#[inline]
pub fn orbit_positions(theta: f64, radius: f32, heights: [f32; 2]) -> [Vec3; 2] {
    let (s, c) = theta.sin_cos();
    let x = (radius as f64 * c) as f32;
    let z = (radius as f64 * s) as f32;
    [
        Vec3::new(x, heights[0], z),
        Vec3::new(-x, heights[1], -z),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_exact_after_many_ticks() {
        let mut clock = OrbitClock::new(0.25, 0.01);
        for _ in 0..10_000 {
            clock.advance();
        }
        assert_eq!(clock.ticks(), 10_000);
        assert_eq!(clock.angle(), 0.25 + 10_000.0 * 0.01);
    }

    #[test]
    fn zero_angle_puts_spheres_on_x_axis() {
        let [a, b] = orbit_positions(0.0, 4.0, [5.0, 3.0]);
        assert_eq!(a, Vec3::new(4.0, 5.0, 0.0));
        assert_eq!(b, Vec3::new(-4.0, 3.0, 0.0));
    }

    #[test]
    fn quarter_turn_moves_to_z_axis() {
        let [a, b] = orbit_positions(std::f64::consts::FRAC_PI_2, 4.0, [5.0, 5.0]);
        assert!(a.abs_diff_eq(Vec3::new(0.0, 5.0, 4.0), 1e-5));
        assert!(b.abs_diff_eq(Vec3::new(0.0, 5.0, -4.0), 1e-5));
    }
}
