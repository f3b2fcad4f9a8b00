mod sensorcontroller;
mod simulatedsensorcontroller;

pub use sensorcontroller::SensorControllerPointer;
pub use sensorcontroller::SensorControllerSharedPointer;
pub use sensorcontroller::{SensorController, SensorData};

pub use simulatedsensorcontroller::{SensorRange, SimulatedSensorController, SimulatorConfig};

mod history;

pub use history::TemperatureHistory;

pub mod format;
