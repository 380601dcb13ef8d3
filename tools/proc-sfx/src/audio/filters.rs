//! Audio filters
//!
//! Only the leaky integrator is needed: it turns white noise into the
//! low, rolling rumble under the fire crackle.

/// Leaky integrator: `y = (y + input_gain * x) * leak`
///
/// A cheap one-pole low-pass. With white noise in it produces an
/// approximation of Brownian (red) noise that never drifts off because the
/// state leaks back towards zero.
#[derive(Debug, Clone, Copy)]
pub struct LeakyIntegrator {
    /// Gain applied to each input sample before accumulation
    pub input_gain: f64,
    /// Fraction of the state kept per sample
    ///
    /// Used as given. Values in 0.0..1.0 keep the filter stable; 1.0 or
    /// more turns it into a plain (or growing) accumulator.
    pub leak: f64,
    state: f64,
}

impl Default for LeakyIntegrator {
    fn default() -> Self {
        Self::new(0.1, 0.95)
    }
}

impl LeakyIntegrator {
    /// Create a new integrator with zero state
    pub fn new(input_gain: f64, leak: f64) -> Self {
        Self {
            input_gain,
            leak,
            state: 0.0,
        }
    }

    /// Process one sample
    pub fn process(&mut self, input: f64) -> f64 {
        self.state = (self.state + input * self.input_gain) * self.leak;
        self.state
    }
}
