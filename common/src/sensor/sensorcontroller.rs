use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// One reading of the sensors driving the dashboard.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct SensorData {
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
}

pub type SensorControllerPointer = Box<dyn SensorController + Send>;

pub type SensorControllerSharedPointer = Arc<Mutex<SensorControllerPointer>>;

/// The sensor controller trait that provides the readings shown on screen.
pub trait SensorController {
    /// Fetches the current reading, advancing the source if it is simulated.
    fn current_data(&mut self) -> Result<SensorData, Box<dyn std::error::Error>>;
}
