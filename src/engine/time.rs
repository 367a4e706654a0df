// Simulation clock driven by the update loop

/// Target update rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// Accumulated simulation time.
///
/// Advanced once per update with the delta time for that step, so elapsed
/// time is deterministic for a given frame sequence rather than read from a
/// wall clock.
pub struct GameTime {
    /// Total simulated seconds
    elapsed: f32,

    /// Total updates executed
    frame_count: u64,
}

impl GameTime {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            frame_count: 0,
        }
    }

    /// Advance the clock by one update step
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        self.frame_count += 1;
    }

    /// Get total simulated time in seconds
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed
    }

    /// Get total number of updates executed
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for GameTime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_creation() {
        let time = GameTime::new();
        assert_eq!(time.elapsed_secs(), 0.0);
        assert_eq!(time.frame_count(), 0);
    }

    #[test]
    fn test_fixed_timestep() {
        assert!((FIXED_TIMESTEP - 1.0 / 60.0).abs() < 0.0001);
    }

    #[test]
    fn test_advance_accumulates() {
        let mut time = GameTime::new();
        time.advance(0.25);
        time.advance(0.25);
        assert_eq!(time.elapsed_secs(), 0.5);
        assert_eq!(time.frame_count(), 2);
    }

    #[test]
    fn test_advance_at_fixed_timestep() {
        let mut time = GameTime::new();
        for _ in 0..60 {
            time.advance(FIXED_TIMESTEP);
        }
        assert_eq!(time.frame_count(), 60);
        assert!((time.elapsed_secs() - 1.0).abs() < 0.001);
    }
}
