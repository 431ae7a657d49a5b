//! Terminal preview for myrtio-button-fsm
//!
//! Simulates the button with the keyboard: the first Enter starts a press,
//! the next one releases it. Lamp changes are printed to the console.
//! Set `BUTTON_FSM_CONFIG` to a `key = value` file to override defaults.

use std::io::{self, BufRead};
use std::thread;

use anyhow::{Context, Result};
use log::{info, warn};
use myrtio_button_fsm::{
    Classifier, Controller, ControllerConfig, Delay, Duration, Inbox, IndicatorDriver,
    Instant, Lamps,
};

/// Environment variable naming an optional config file
const CONFIG_ENV: &str = "BUTTON_FSM_CONFIG";

/// Static inbox shared by the input thread and the controller
static INBOX: Inbox = Inbox::new();

/// Prints lamp changes instead of driving GPIOs
#[derive(Default)]
struct ConsoleIndicators {
    current: Option<Lamps>,
}

impl IndicatorDriver for ConsoleIndicators {
    fn set(&mut self, lamps: Lamps) {
        if self.current != Some(lamps) {
            info!("lamps {}", lamps);
            self.current = Some(lamps);
        }
    }
}

/// Sleeps the controller thread
struct ThreadDelay;

impl Delay for ThreadDelay {
    fn delay(&mut self, duration: Duration) {
        thread::sleep(std::time::Duration::from_micros(duration.as_micros()));
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let mut controller =
        Controller::new(&INBOX, ConsoleIndicators::default(), ThreadDelay, &config)
            .context("invalid controller config")?;
    let classifier = controller.classifier();

    thread::Builder::new()
        .name("button".into())
        .spawn(move || read_button(&classifier))
        .context("failed to start button input thread")?;

    info!("press Enter to push the button, Enter again to release it");
    controller.run()
}

fn load_config() -> Result<ControllerConfig> {
    let Some(path) = std::env::var_os(CONFIG_ENV) else {
        return Ok(ControllerConfig::default());
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.to_string_lossy()))?;
    let config = ControllerConfig::parse(&text)
        .with_context(|| format!("invalid config {}", path.to_string_lossy()))?;
    info!("loaded config from {}", path.to_string_lossy());
    Ok(config)
}

/// Turn Enter keystrokes into press edges
fn read_button(classifier: &Classifier<'_>) {
    for line in io::stdin().lock().lines() {
        if line.is_err() {
            break;
        }
        let now = Instant::now();
        if classifier.is_pressed() {
            let outcome = classifier.on_press_end(now);
            if !outcome.delivered {
                info!("{} ignored", outcome.message);
            }
        } else {
            classifier.on_press_start(now);
            info!("button down");
        }
    }
    warn!("button input closed");
}
