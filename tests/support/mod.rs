//! Simulated clock and lamp recorder shared by the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;

use myrtio_button_fsm::{
    Classifier, Controller, ControllerConfig, Delay, Duration, Inbox, IndicatorDriver, Instant,
    Lamps,
};

/// Upper bound of simulated time; reaching it means a state never returned.
pub const TIME_LIMIT: Duration = Duration::from_secs(600);

/// Button edge scripted at a simulated time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Down,
    Up,
}

/// Records every lamp change
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub history: Vec<Lamps>,
}

impl RecordingDriver {
    /// History with consecutive repeats collapsed
    pub fn changes(&self) -> Vec<Lamps> {
        let mut changes = self.history.clone();
        changes.dedup();
        changes
    }
}

impl IndicatorDriver for RecordingDriver {
    fn set(&mut self, lamps: Lamps) {
        self.history.push(lamps);
    }
}

/// Delay that advances simulated time and replays scripted presses
pub struct SimClock<'a> {
    now: Duration,
    sleeps: Vec<Duration>,
    classifier: Classifier<'a>,
    script: VecDeque<(Duration, Edge)>,
}

impl<'a> SimClock<'a> {
    pub fn new(classifier: Classifier<'a>) -> Self {
        Self {
            now: Duration::from_ticks(0),
            sleeps: Vec::new(),
            classifier,
            script: VecDeque::new(),
        }
    }

    /// Schedule a press from `down` to `up` (milliseconds of simulated time)
    pub fn press(mut self, down_ms: u64, up_ms: u64) -> Self {
        self.script.push_back((Duration::from_millis(down_ms), Edge::Down));
        self.script.push_back((Duration::from_millis(up_ms), Edge::Up));
        self
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn sleeps(&self) -> &[Duration] {
        &self.sleeps
    }

    pub fn total_slept(&self) -> Duration {
        self.sleeps
            .iter()
            .fold(Duration::from_ticks(0), |total, sleep| total + *sleep)
    }

    pub fn clear_sleeps(&mut self) {
        self.sleeps.clear();
    }

    pub fn pending_edges(&self) -> usize {
        self.script.len()
    }
}

impl Delay for SimClock<'_> {
    fn delay(&mut self, duration: Duration) {
        self.sleeps.push(duration);
        self.now = self.now + duration;
        assert!(self.now < TIME_LIMIT, "simulated time limit reached");

        while let Some(&(at, edge)) = self.script.front() {
            if at > self.now {
                break;
            }
            self.script.pop_front();
            let instant = Instant::from_ticks(at.as_ticks());
            match edge {
                Edge::Down => self.classifier.on_press_start(instant),
                Edge::Up => {
                    self.classifier.on_press_end(instant);
                }
            }
        }
    }
}

pub type SimController<'a> = Controller<'a, RecordingDriver, SimClock<'a>>;

/// Controller wired to a recording driver and a simulated clock whose
/// presses go through a classifier on the same inbox
pub fn controller<'a>(
    inbox: &'a Inbox,
    config: &ControllerConfig,
    script: impl FnOnce(SimClock<'a>) -> SimClock<'a>,
) -> SimController<'a> {
    let classifier = Classifier::new(inbox, config.thresholds, config.unrecognized);
    let clock = script(SimClock::new(classifier));
    Controller::new(inbox, RecordingDriver::default(), clock, config).unwrap()
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
