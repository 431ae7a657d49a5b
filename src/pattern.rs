//! Light patterns for the three indicator lamps.

use core::fmt;

use embassy_time::Duration;

/// On/off intent for each lamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lamps {
    pub red: bool,
    pub yellow: bool,
    pub blue: bool,
}

impl Lamps {
    pub const OFF: Self = Self::new(false, false, false);
    pub const RED: Self = Self::new(true, false, false);
    pub const YELLOW: Self = Self::new(false, true, false);
    pub const BLUE: Self = Self::new(false, false, true);
    pub const RED_YELLOW: Self = Self::new(true, true, false);
    pub const RED_BLUE: Self = Self::new(true, false, true);

    pub const fn new(red: bool, yellow: bool, blue: bool) -> Self {
        Self { red, yellow, blue }
    }

    pub const fn is_off(self) -> bool {
        !self.red && !self.yellow && !self.blue
    }
}

/// Lit lamps are shown in upper case, e.g. `Ryb` for red only.
impl fmt::Display for Lamps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |lit: bool, on: char, off: char| if lit { on } else { off };
        write!(
            f,
            "{}{}{}",
            mark(self.red, 'R', 'r'),
            mark(self.yellow, 'Y', 'y'),
            mark(self.blue, 'B', 'b'),
        )
    }
}

/// Timed on/off cycle repeated a fixed number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flash {
    /// Time the lamps stay lit
    pub on: Duration,
    /// Time all lamps stay dark afterwards
    pub off: Duration,
    /// Number of cycles
    pub repeat: u16,
}

impl Flash {
    pub const fn new(on: Duration, off: Duration, repeat: u16) -> Self {
        Self { on, off, repeat }
    }
}

/// Lamp intents plus an optional animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightPattern {
    pub lamps: Lamps,
    pub flash: Option<Flash>,
}

impl LightPattern {
    /// Pattern held steadily until replaced.
    pub const fn steady(lamps: Lamps) -> Self {
        Self { lamps, flash: None }
    }

    /// Pattern flashed according to `flash`.
    pub const fn flashing(lamps: Lamps, flash: Flash) -> Self {
        Self {
            lamps,
            flash: Some(flash),
        }
    }
}
