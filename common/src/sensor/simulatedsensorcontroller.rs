use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::sensor::sensorcontroller::{SensorController, SensorData};

/// An inclusive range a simulated reading is clamped into.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SensorRange {
    pub min: f64,
    pub max: f64,
}

impl SensorRange {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Start values and clamp ranges of the simulated sensors.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SimulatorConfig {
    pub initial_temperature: f64,
    pub initial_humidity: f64,
    pub temperature_range: SensorRange,
    pub humidity_range: SensorRange,
}

impl SimulatorConfig {
    /// The defaults shipped with the demo (22.5 °C / 55 %).
    pub fn embedded() -> Result<Self, serde_json::Error> {
        serde_json::from_str(include_str!("./simulator.json"))
    }
}

/// A bounded random walk standing in for real temperature and humidity
/// sensors.
///
/// The first reading returns the configured start values unchanged, so the
/// dashboard shows them right after startup. Every later reading perturbs
/// both values by one uniformly drawn step and clamps them back into their
/// ranges. The generator is injected so tests can replay exact trajectories.
pub struct SimulatedSensorController {
    config: SimulatorConfig,
    rng: StdRng,
    temperature: f64,
    humidity: f64,
    primed: bool,
}

impl SimulatedSensorController {
    /// Number of equally likely steps in one perturbation draw.
    const WALK_STEPS: i32 = 20;

    pub fn new() -> Result<Self, serde_json::Error> {
        Ok(Self::with_rng(
            SimulatorConfig::embedded()?,
            StdRng::from_entropy(),
        ))
    }

    pub fn with_rng(config: SimulatorConfig, rng: StdRng) -> Self {
        Self {
            temperature: config.initial_temperature,
            humidity: config.initial_humidity,
            config,
            rng,
            primed: false,
        }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// One perturbation step. With `unit` 0.1 the draw covers
    /// {-1.0, -0.9, ..., +0.9}; with 0.2 it covers {-2.0, -1.8, ..., +1.8}.
    fn step(&mut self, unit: f64) -> f64 {
        f64::from(self.rng.gen_range(0..Self::WALK_STEPS) - 10) * unit
    }

    fn advance(&mut self) {
        let delta = self.step(0.1);
        self.temperature = self.config.temperature_range.clamp(self.temperature + delta);

        let delta = self.step(0.2);
        self.humidity = self.config.humidity_range.clamp(self.humidity + delta);
    }
}

impl SensorController for SimulatedSensorController {
    fn current_data(&mut self) -> Result<SensorData, Box<dyn std::error::Error>> {
        if self.primed {
            self.advance();
        } else {
            self.primed = true;
        }

        log::debug!(
            "Simulated reading: {:.1}°C, {:.0}%",
            self.temperature,
            self.humidity
        );

        Ok(SensorData {
            temperature_celsius: self.temperature,
            humidity_percent: self.humidity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulator(seed: u64) -> SimulatedSensorController {
        SimulatedSensorController::with_rng(
            SimulatorConfig::embedded().unwrap(),
            StdRng::seed_from_u64(seed),
        )
    }

    #[test]
    fn embedded_config_loads() {
        let config = SimulatorConfig::embedded().unwrap();

        assert_eq!(config.initial_temperature, 22.5);
        assert_eq!(config.initial_humidity, 55.0);
        assert_eq!(config.temperature_range, SensorRange { min: 15.0, max: 35.0 });
        assert_eq!(config.humidity_range, SensorRange { min: 30.0, max: 80.0 });
    }

    #[test]
    fn first_reading_is_the_start_values() {
        let mut sim = simulator(0);
        let data = sim.current_data().unwrap();

        assert_eq!(data.temperature_celsius, 22.5);
        assert_eq!(data.humidity_percent, 55.0);
    }

    #[test]
    fn steps_are_bounded() {
        let mut sim = simulator(7);
        let mut prev = sim.current_data().unwrap();

        for _ in 0..200 {
            let next = sim.current_data().unwrap();
            assert!((next.temperature_celsius - prev.temperature_celsius).abs() <= 1.0 + 1e-9);
            assert!((next.humidity_percent - prev.humidity_percent).abs() <= 2.0 + 1e-9);
            prev = next;
        }
    }

    #[test]
    fn readings_stay_in_range() {
        for seed in 0..32 {
            let mut sim = simulator(seed);
            for _ in 0..20 {
                let data = sim.current_data().unwrap();
                assert!((15.0..=35.0).contains(&data.temperature_celsius));
                assert!((30.0..=80.0).contains(&data.humidity_percent));
            }
        }
    }

    #[test]
    fn walk_saturates_at_the_rails() {
        let mut config = SimulatorConfig::embedded().unwrap();
        config.initial_temperature = 35.0;
        config.initial_humidity = 80.0;

        let mut sim =
            SimulatedSensorController::with_rng(config, StdRng::seed_from_u64(3));
        for _ in 0..100 {
            let data = sim.current_data().unwrap();
            assert!(data.temperature_celsius <= 35.0);
            assert!(data.humidity_percent <= 80.0);
        }
    }

    #[test]
    fn clamp_is_idempotent() {
        let range = SensorRange { min: 15.0, max: 35.0 };

        for value in [-4.0, 14.9, 15.0, 22.5, 35.0, 35.4, 120.0] {
            let once = range.clamp(value);
            assert_eq!(range.clamp(once), once);
            assert!((range.min..=range.max).contains(&once));
        }
    }

    #[test]
    fn same_seed_same_trajectory() {
        let mut a = simulator(42);
        let mut b = simulator(42);

        for _ in 0..50 {
            assert_eq!(a.current_data().unwrap(), b.current_data().unwrap());
        }
    }
}
