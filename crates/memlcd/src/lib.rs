#![cfg_attr(not(test), no_std)]

//! Sharp memory LCD (LS027B7DH01, LS013B7DH03, ...) driver primitives.

mod framebuffer;
pub mod protocol;

pub use framebuffer::{FrameBuffer, Ls013Frame, Ls027Frame};

use embedded_hal::{
    digital::OutputPin,
    spi::{Operation, SpiDevice},
};

/// LCD inversion strategy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InversionMode {
    /// COM inversion is driven via dedicated `EXTCOMIN` pin toggling.
    ExtComInPin,
    /// COM inversion is carried in the M1 bit of every command.
    SerialM1,
}

/// Driver configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// Expected SPI clock in Hz (documented for board glue).
    pub spi_hz: u32,
    /// Inversion strategy.
    pub inversion: InversionMode,
    /// Additional CS-active delay used for clear command hold time.
    pub clear_hold_ns: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spi_hz: 1_000_000,
            inversion: InversionMode::ExtComInPin,
            clear_hold_ns: 220_000,
        }
    }
}

impl Config {
    pub const fn with_spi_hz(mut self, spi_hz: u32) -> Self {
        self.spi_hz = spi_hz;
        self
    }

    pub const fn with_inversion(mut self, inversion: InversionMode) -> Self {
        self.inversion = inversion;
        self
    }

    pub const fn with_clear_hold_ns(mut self, clear_hold_ns: u32) -> Self {
        self.clear_hold_ns = clear_hold_ns;
        self
    }
}

/// Driver errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error<SpiErr, DispErr, ExtErr> {
    /// SPI transaction failed.
    Spi(SpiErr),
    /// DISP pin operation failed.
    Disp(DispErr),
    /// EXTCOMIN pin operation failed.
    ExtCom(ExtErr),
    /// Input parameters are outside supported bounds.
    InvalidInput,
}

pub type DriverResult<SpiErr, DispErr, ExtErr> = Result<(), Error<SpiErr, DispErr, ExtErr>>;

/// Memory LCD driver, independent of panel resolution.
#[derive(Debug)]
pub struct MemoryLcd<SPI, DISP, EXTCOM> {
    spi: SPI,
    disp: DISP,
    extcom: EXTCOM,
    config: Config,
    com_high: bool,
}

impl<SPI, DISP, EXTCOM> MemoryLcd<SPI, DISP, EXTCOM>
where
    SPI: SpiDevice<u8>,
    DISP: OutputPin,
    EXTCOM: OutputPin,
{
    pub fn new(spi: SPI, disp: DISP, extcom: EXTCOM, config: Config) -> Self {
        Self {
            spi,
            disp,
            extcom,
            config,
            com_high: false,
        }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Releases owned bus and pins.
    pub fn release(self) -> (SPI, DISP, EXTCOM) {
        (self.spi, self.disp, self.extcom)
    }

    /// Drives `DISP` high.
    pub fn enable_display(&mut self) -> DriverResult<SPI::Error, DISP::Error, EXTCOM::Error> {
        self.disp.set_high().map_err(Error::Disp)
    }

    /// Drives `DISP` low.
    pub fn disable_display(&mut self) -> DriverResult<SPI::Error, DISP::Error, EXTCOM::Error> {
        self.disp.set_low().map_err(Error::Disp)
    }

    /// Flips the COM polarity. Must run at least once per second while the
    /// panel is enabled; the frame loop calls it after every flush.
    pub fn toggle_extcomin(&mut self) -> DriverResult<SPI::Error, DISP::Error, EXTCOM::Error> {
        self.com_high = !self.com_high;

        match self.config.inversion {
            InversionMode::ExtComInPin if self.com_high => {
                self.extcom.set_high().map_err(Error::ExtCom)
            }
            InversionMode::ExtComInPin => self.extcom.set_low().map_err(Error::ExtCom),
            InversionMode::SerialM1 => Ok(()),
        }
    }

    fn m1_high(&self) -> bool {
        matches!(self.config.inversion, InversionMode::SerialM1) && self.com_high
    }

    /// Issues all-clear command.
    pub fn clear_all(&mut self) -> DriverResult<SPI::Error, DISP::Error, EXTCOM::Error> {
        let packet = protocol::build_clear_packet(self.m1_high());
        let mut ops = [
            Operation::Write(&packet),
            Operation::DelayNs(self.config.clear_hold_ns),
        ];
        self.spi.transaction(&mut ops).map_err(Error::Spi)
    }

    /// Writes one 1-based line of a panel with `height` gate lines.
    pub fn write_line(
        &mut self,
        line: u16,
        height: usize,
        data: &[u8],
    ) -> DriverResult<SPI::Error, DISP::Error, EXTCOM::Error> {
        let header = protocol::build_line_header(line, height, self.m1_high())
            .ok_or(Error::InvalidInput)?;

        let mut ops = [
            Operation::Write(&header),
            Operation::Write(data),
            Operation::Write(&protocol::LINE_TRAILER),
        ];
        self.spi.transaction(&mut ops).map_err(Error::Spi)
    }

    /// Flushes every line of a framebuffer.
    pub fn flush<const LINE_BYTES: usize, const HEIGHT: usize>(
        &mut self,
        frame: &FrameBuffer<LINE_BYTES, HEIGHT>,
    ) -> DriverResult<SPI::Error, DISP::Error, EXTCOM::Error> {
        for (line, payload) in frame.lines() {
            self.write_line(line, HEIGHT, payload)?;
        }

        Ok(())
    }
}
