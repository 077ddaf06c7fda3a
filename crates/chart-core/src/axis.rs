// File: crates/chart-core/src/axis.rs
// Summary: Linear axis model with title, visible range and zero anchoring.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub title: String,
    pub min: f64,
    pub max: f64,
    /// Keep `0` inside the range when autoscaling.
    pub begin_at_zero: bool,
}

impl Axis {
    pub fn new(title: impl Into<String>, min: f64, max: f64) -> Self {
        Self { title: title.into(), min, max, begin_at_zero: false }
    }

    pub fn begin_at_zero(mut self) -> Self {
        self.begin_at_zero = true;
        self
    }

    /// Elapsed pattern time.
    pub fn time_minutes() -> Self {
        Self::new("Time (minutes)", 0.0, 10.0)
    }

    pub fn temperature_celsius() -> Self {
        Self::new("Temperature (°C)", 0.0, 100.0).begin_at_zero()
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}
