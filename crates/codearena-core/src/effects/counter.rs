//! Count-up animation for dashboard stat numbers.

use std::time::Duration;

use crate::error::{Error, Result};

/// Number of frames from zero to the target
pub const COUNT_UP_STEPS: u32 = 50;

/// Delay between frames
pub const COUNT_UP_INTERVAL: Duration = Duration::from_millis(30);

/// Fraction of a stat card that must be on screen before it animates
pub const STAT_VISIBILITY_THRESHOLD: f64 = 0.5;

/// How the number is decorated when displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    /// `127`
    Plain,
    /// `#2847`
    Rank,
    /// `15 days`
    Days,
}

impl StatFormat {
    pub fn render(&self, value: u64) -> String {
        match self {
            StatFormat::Plain => value.to_string(),
            StatFormat::Rank => format!("#{value}"),
            StatFormat::Days => format!("{value} days"),
        }
    }
}

/// Counts from zero up to the number shown in a stat card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountUp {
    target: u64,
    format: StatFormat,
    step: u32,
    finished: bool,
}

impl CountUp {
    /// Parse the final display text of a stat.
    ///
    /// A leading `#` marks a rank, text containing `days` marks a streak.
    /// The number is the run of digits at the start (after the `#` and any
    /// leading whitespace); trailing text is ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let (format, number) = if let Some(rest) = text.strip_prefix('#') {
            (StatFormat::Rank, rest)
        } else if text.contains("days") {
            (StatFormat::Days, text)
        } else {
            (StatFormat::Plain, text)
        };

        let number = number.trim_start();
        let digits_end = number
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(number.len());
        let target = number[..digits_end]
            .parse::<u64>()
            .map_err(|_| Error::InvalidStat(text.to_string()))?;

        Ok(Self::new(target, format))
    }

    pub fn new(target: u64, format: StatFormat) -> Self {
        Self {
            target,
            format,
            step: 0,
            finished: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn format(&self) -> StatFormat {
        self.format
    }

    /// Value shown at the current frame (floor of the fractional count)
    pub fn current(&self) -> u64 {
        if self.finished {
            return self.target;
        }
        (u128::from(self.target) * u128::from(self.step) / u128::from(COUNT_UP_STEPS)) as u64
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one frame and return the text to display, or `None` once the
    /// target was already reached.
    pub fn tick(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        self.step += 1;
        if self.step >= COUNT_UP_STEPS || self.current() >= self.target {
            self.finished = true;
        }
        Some(self.format.render(self.current()))
    }

    /// Text shown before the first frame.
    pub fn initial_text(&self) -> String {
        self.format.render(0)
    }

    /// Text shown once finished.
    pub fn final_text(&self) -> String {
        self.format.render(self.target)
    }
}

impl Iterator for CountUp {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.tick()
    }
}
