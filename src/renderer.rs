use embassy_time::Duration;

use crate::pattern::{Flash, Lamps, LightPattern};
use crate::{Delay, IndicatorDriver};

/// Light renderer - turns patterns into driver calls and timed sequences
pub struct Renderer<D: IndicatorDriver> {
    driver: D,
    current: Lamps,
}

impl<D: IndicatorDriver> Renderer<D> {
    /// Create a new renderer, switching every lamp off
    pub fn new(mut driver: D) -> Self {
        driver.set(Lamps::OFF);
        Self {
            driver,
            current: Lamps::OFF,
        }
    }

    /// Apply lamp intents immediately
    pub fn set_pattern(&mut self, lamps: Lamps) {
        self.driver.set(lamps);
        self.current = lamps;
    }

    /// Light `lamps` for `on`, then switch everything off for `off`
    pub fn flash<T: Delay>(&mut self, lamps: Lamps, on: Duration, off: Duration, delay: &mut T) {
        self.set_pattern(lamps);
        pause(delay, on);
        self.set_pattern(Lamps::OFF);
        pause(delay, off);
    }

    /// Play a full flash animation
    pub fn animate<T: Delay>(&mut self, lamps: Lamps, flash: Flash, delay: &mut T) {
        for _ in 0..flash.repeat {
            self.flash(lamps, flash.on, flash.off, delay);
        }
    }

    /// Render a pattern: steady patterns are applied and returned from
    /// immediately, flashing ones block until the animation is over
    pub fn render<T: Delay>(&mut self, pattern: LightPattern, delay: &mut T) {
        match pattern.flash {
            Some(flash) => self.animate(pattern.lamps, flash, delay),
            None => self.set_pattern(pattern.lamps),
        }
    }

    /// Lamps currently lit
    pub const fn current(&self) -> Lamps {
        self.current
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }
}

fn pause<T: Delay>(delay: &mut T, duration: Duration) {
    if duration.as_ticks() > 0 {
        delay.delay(duration);
    }
}
