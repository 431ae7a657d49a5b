//! Indicator lamps on addressable LEDs.
//!
//! Maps the three lamps onto the first three pixels of a `smart-leds`
//! strip: pixel 0 red, pixel 1 yellow, pixel 2 blue.

use log::warn;
use smart_leds::{RGB8, SmartLedsWrite};

use crate::IndicatorDriver;
use crate::pattern::Lamps;

/// Colors used for lit lamps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LampColors {
    pub red: RGB8,
    pub yellow: RGB8,
    pub blue: RGB8,
}

impl LampColors {
    pub const DEFAULT: Self = Self {
        red: RGB8::new(255, 0, 0),
        yellow: RGB8::new(255, 160, 0),
        blue: RGB8::new(0, 0, 255),
    };
}

impl Default for LampColors {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const DARK: RGB8 = RGB8::new(0, 0, 0);

/// [`IndicatorDriver`] writing to a smart LED strip
pub struct SmartLedIndicators<W> {
    writer: W,
    colors: LampColors,
}

impl<W> SmartLedIndicators<W>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    pub const fn new(writer: W) -> Self {
        Self::with_colors(writer, LampColors::DEFAULT)
    }

    pub const fn with_colors(writer: W, colors: LampColors) -> Self {
        Self { writer, colors }
    }

    /// Pixel colors for the given lamp intents
    pub fn pixels(&self, lamps: Lamps) -> [RGB8; 3] {
        let pick = |lit: bool, color: RGB8| if lit { color } else { DARK };
        [
            pick(lamps.red, self.colors.red),
            pick(lamps.yellow, self.colors.yellow),
            pick(lamps.blue, self.colors.blue),
        ]
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> IndicatorDriver for SmartLedIndicators<W>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    fn set(&mut self, lamps: Lamps) {
        let pixels = self.pixels(lamps);
        if self.writer.write(pixels).is_err() {
            warn!("failed to write lamps {}", lamps);
        }
    }
}
