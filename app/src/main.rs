// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod chart;

slint::include_modules!();

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use weather_station_common::sensor::{
    format, SensorController, SensorControllerPointer, SensorControllerSharedPointer,
    SimulatedSensorController, TemperatureHistory,
};

/// Our App struct that holds the UI, the sensor controller and the chart
/// history. It also holds a timer that refreshes the displayed readings
/// every 2 seconds.
///
/// The App struct is responsible for initializing the UI and the sensor
/// controller, performing the first refresh and starting the timer.
struct App {
    ui: AppWindow,
    sensor: SensorControllerSharedPointer,
    timer: slint::Timer,
    history: Rc<RefCell<TemperatureHistory>>,
}

impl App {
    const TIMER_INTERVAL: std::time::Duration = std::time::Duration::from_millis(2000);

    /// Create a new App struct.
    fn new() -> anyhow::Result<Self> {
        // Make a new AppWindow
        let ui = AppWindow::new()?;

        let simulator = SimulatedSensorController::new()?;

        // Pre-fill the chart window with the start temperature so it has no
        // empty lead-in.
        let history = Rc::new(RefCell::new(TemperatureHistory::new(
            TemperatureHistory::CHART_POINTS,
            simulator.config().initial_temperature as i32,
        )));

        // The sensor controller is shared between the first refresh and the
        // timer, so we wrap it in an Arc<Mutex>.
        let controller: SensorControllerPointer = Box::new(simulator);
        let sensor = Arc::new(Mutex::new(controller));

        // Return the App struct
        Ok(Self {
            ui,
            sensor,
            timer: slint::Timer::default(),
            history,
        })
    }

    /// Run the App, start the timer and refresh the readings periodically.
    fn run(&mut self) -> anyhow::Result<()> {
        // The first refresh happens synchronously, so the window never shows
        // its placeholder labels once it is up.
        refresh(&self.ui, &self.sensor, &self.history);

        // Get the handle to the UI as a weak reference for the timer closure.
        let ui_handle = self.ui.as_weak();
        let sensor = self.sensor.clone();
        let history = self.history.clone();

        // Start the timer with a 2 second interval.
        self.timer.start(
            slint::TimerMode::Repeated,
            Self::TIMER_INTERVAL,
            move || {
                let ui = ui_handle.unwrap();
                refresh(&ui, &sensor, &history);
            },
        );

        // Run the UI (and map an error to an anyhow::Error).
        self.ui.run().map_err(|e| e.into())
    }
}

/// One refresh cycle: fetch the readings and push them, plus the current
/// wall-clock time, to the view model.
///
/// The controller guard is held for the whole cycle, so no other controller
/// client can interleave mid-update.
fn refresh(
    ui: &AppWindow,
    sensor: &SensorControllerSharedPointer,
    history: &RefCell<TemperatureHistory>,
) {
    let mut sensor = sensor.lock().unwrap();
    let data = sensor.current_data().unwrap();

    let now = chrono::Local::now().naive_local();
    let model = ViewModel::get(ui);
    model.set_current(WeatherRecord {
        temperature: format::format_temperature(data.temperature_celsius).into(),
        humidity: format::format_humidity(data.humidity_percent).into(),
        time: format::format_time(&now).into(),
        date: format::format_date(&now).into(),
    });

    let mut history = history.borrow_mut();
    history.push(data.temperature_celsius as i32);
    model.set_chart_commands(chart::path_commands(&history).into());

    log::info!(
        "Temperature: {:.1}°C, Humidity: {:.0}%",
        data.temperature_celsius,
        data.humidity_percent
    );
}

/// A minimal main function that initializes the App and runs it.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut app = App::new()?;

    app.run()
}
