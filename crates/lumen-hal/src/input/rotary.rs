//! Quadrature rotary encoder with push button.
//!
//! Every poll samples all three pins once. The A/B pair is tracked as a
//! position on the Gray-code cycle `00 → 10 → 11 → 01`; whole detents
//! become `Next`/`Previous` and a debounced press becomes `Activate`.

use embedded_hal::digital::InputPin;
use heapless::Deque;
use log::trace;
use lumen_core::input::{InputEvent, InputProvider};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RotaryConfig {
    /// Swap which rotation direction means `Next`.
    pub reversed: bool,
    pub button_active_low: bool,
    /// Consecutive samples a new button level must hold before it counts.
    pub debounce_samples: u8,
    /// Gray-code edges per mechanical detent.
    pub edges_per_detent: u8,
}

impl Default for RotaryConfig {
    fn default() -> Self {
        Self {
            reversed: false,
            button_active_low: true,
            debounce_samples: 3,
            edges_per_detent: 4,
        }
    }
}

impl RotaryConfig {
    pub const fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    pub const fn with_button_active_low(mut self, button_active_low: bool) -> Self {
        self.button_active_low = button_active_low;
        self
    }

    pub const fn with_debounce_samples(mut self, debounce_samples: u8) -> Self {
        self.debounce_samples = debounce_samples;
        self
    }

    pub const fn with_edges_per_detent(mut self, edges_per_detent: u8) -> Self {
        self.edges_per_detent = edges_per_detent;
        self
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
}

/// Counts Gray-code edges on the A/B pair and reports whole detents.
#[derive(Debug, Clone)]
pub struct QuadratureDecoder {
    phase: u8,
    edges: i8,
    edges_per_detent: i8,
}

impl QuadratureDecoder {
    pub fn new(a: bool, b: bool, edges_per_detent: u8) -> Self {
        Self {
            phase: gray_phase(a, b),
            edges: 0,
            edges_per_detent: edges_per_detent.clamp(1, i8::MAX as u8) as i8,
        }
    }

    pub fn sample(&mut self, a: bool, b: bool) -> Option<Turn> {
        let phase = gray_phase(a, b);
        let step = phase.wrapping_sub(self.phase) & 0b11;
        self.phase = phase;

        match step {
            1 => self.edges += 1,
            3 => self.edges -= 1,
            // 2 means both lines flipped between samples: direction unknown.
            _ => return None,
        }

        if self.edges.abs() < self.edges_per_detent {
            return None;
        }
        let turn = if self.edges > 0 {
            Turn::Clockwise
        } else {
            Turn::CounterClockwise
        };
        self.edges = 0;
        Some(turn)
    }
}

/// Position of an A/B pair on the cycle `00 → 10 → 11 → 01`.
fn gray_phase(a: bool, b: bool) -> u8 {
    match (a, b) {
        (false, false) => 0,
        (true, false) => 1,
        (true, true) => 2,
        (false, true) => 3,
    }
}

/// Accepts a new level once it has been sampled `samples` times in a row.
#[derive(Debug, Clone)]
pub struct Debouncer {
    stable: bool,
    streak: u8,
    samples: u8,
}

impl Debouncer {
    pub fn new(level: bool, samples: u8) -> Self {
        Self {
            stable: level,
            streak: 0,
            samples: samples.max(1),
        }
    }

    pub fn level(&self) -> bool {
        self.stable
    }

    /// Returns the new stable level on the sample that commits it.
    pub fn sample(&mut self, level: bool) -> Option<bool> {
        if level == self.stable {
            self.streak = 0;
            return None;
        }

        self.streak = self.streak.saturating_add(1);
        if self.streak < self.samples {
            return None;
        }
        self.stable = level;
        self.streak = 0;
        Some(level)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RotaryInputError<ClkErr, DtErr, SwErr> {
    Clk(ClkErr),
    Dt(DtErr),
    Sw(SwErr),
}

type RotaryResult<ClkErr, DtErr, SwErr, T> = Result<T, RotaryInputError<ClkErr, DtErr, SwErr>>;

/// `InputProvider` over three GPIO inputs.
///
/// A sample can yield both a press and a detent. The press is delivered
/// first and the detent on the next poll, before the pins are read again.
#[derive(Debug)]
pub struct RotaryInput<CLK, DT, SW> {
    clk: CLK,
    dt: DT,
    sw: SW,
    config: RotaryConfig,
    decoder: QuadratureDecoder,
    button: Debouncer,
    queue: Deque<InputEvent, 2>,
}

impl<CLK, DT, SW> RotaryInput<CLK, DT, SW>
where
    CLK: InputPin,
    DT: InputPin,
    SW: InputPin,
{
    pub fn new(
        mut clk: CLK,
        mut dt: DT,
        mut sw: SW,
        config: RotaryConfig,
    ) -> RotaryResult<CLK::Error, DT::Error, SW::Error, Self> {
        let a = clk.is_high().map_err(RotaryInputError::Clk)?;
        let b = dt.is_high().map_err(RotaryInputError::Dt)?;
        let pressed = sw.is_high().map_err(RotaryInputError::Sw)? != config.button_active_low;

        Ok(Self {
            clk,
            dt,
            sw,
            config,
            decoder: QuadratureDecoder::new(a, b, config.edges_per_detent),
            button: Debouncer::new(pressed, config.debounce_samples),
            queue: Deque::new(),
        })
    }

    pub fn config(&self) -> RotaryConfig {
        self.config
    }

    pub fn is_pressed(&self) -> bool {
        self.button.level()
    }

    pub fn release(self) -> (CLK, DT, SW) {
        (self.clk, self.dt, self.sw)
    }

    fn sample(&mut self) -> RotaryResult<CLK::Error, DT::Error, SW::Error, ()> {
        let a = self.clk.is_high().map_err(RotaryInputError::Clk)?;
        let b = self.dt.is_high().map_err(RotaryInputError::Dt)?;
        let sw_high = self.sw.is_high().map_err(RotaryInputError::Sw)?;

        if self.button.sample(sw_high != self.config.button_active_low) == Some(true) {
            self.enqueue(InputEvent::Activate);
        }
        if let Some(turn) = self.decoder.sample(a, b) {
            let event = match (turn, self.config.reversed) {
                (Turn::Clockwise, false) | (Turn::CounterClockwise, true) => InputEvent::Next,
                _ => InputEvent::Previous,
            };
            self.enqueue(event);
        }
        Ok(())
    }

    fn enqueue(&mut self, event: InputEvent) {
        if let Err(event) = self.queue.push_back(event) {
            trace!("rotary: queue full, dropped {:?}", event);
        }
    }
}

impl<CLK, DT, SW> InputProvider for RotaryInput<CLK, DT, SW>
where
    CLK: InputPin,
    DT: InputPin,
    SW: InputPin,
{
    type Error = RotaryInputError<CLK::Error, DT::Error, SW::Error>;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        if self.queue.is_empty() {
            self.sample()?;
        }
        let event = self.queue.pop_front();
        if let Some(event) = event {
            trace!("rotary: {:?}", event);
        }
        Ok(event)
    }
}
