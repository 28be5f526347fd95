//! Surface that presents to a Sharp memory LCD.

use embedded_hal::{digital::OutputPin, spi::SpiDevice};
use log::{debug, info};
use lumen_core::{
    geometry::Size,
    surface::{Canvas, PixelSurface},
};
use memlcd::{Error, MemoryLcd};

use crate::{clock::Clock, surface::FrameSurface};

pub type PanelError<SPI, DISP, EXTCOM> = Error<
    <SPI as embedded_hal::spi::ErrorType>::Error,
    <DISP as embedded_hal::digital::ErrorType>::Error,
    <EXTCOM as embedded_hal::digital::ErrorType>::Error,
>;

/// Framebuffer surface flushed to glass on every `present`.
pub struct PanelSurface<SPI, DISP, EXTCOM, C, const LINE_BYTES: usize, const HEIGHT: usize> {
    lcd: MemoryLcd<SPI, DISP, EXTCOM>,
    back: FrameSurface<LINE_BYTES, HEIGHT, C>,
}

impl<SPI, DISP, EXTCOM, C, const LINE_BYTES: usize, const HEIGHT: usize>
    PanelSurface<SPI, DISP, EXTCOM, C, LINE_BYTES, HEIGHT>
where
    SPI: SpiDevice<u8>,
    DISP: OutputPin,
    EXTCOM: OutputPin,
    C: Clock,
{
    pub fn new(lcd: MemoryLcd<SPI, DISP, EXTCOM>, clock: C) -> Self {
        Self {
            lcd,
            back: FrameSurface::new(clock),
        }
    }

    pub fn back_buffer(&self) -> &FrameSurface<LINE_BYTES, HEIGHT, C> {
        &self.back
    }

    /// Blanks the glass and drives `DISP` low.
    pub fn shutdown(&mut self) -> Result<(), PanelError<SPI, DISP, EXTCOM>> {
        self.lcd.clear_all()?;
        self.lcd.disable_display()?;
        debug!("panel: display disabled");
        Ok(())
    }

    pub fn release(self) -> (MemoryLcd<SPI, DISP, EXTCOM>, C) {
        (self.lcd, self.back.into_clock())
    }
}

impl<SPI, DISP, EXTCOM, C, const LINE_BYTES: usize, const HEIGHT: usize> Canvas
    for PanelSurface<SPI, DISP, EXTCOM, C, LINE_BYTES, HEIGHT>
where
    C: Clock,
{
    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        self.back.set_pixel(x, y, on);
    }

    fn draw_string(&mut self, x: i32, baseline_y: i32, text: &str) {
        self.back.draw_string(x, baseline_y, text);
    }

    fn string_width(&self, text: &str) -> i32 {
        self.back.string_width(text)
    }

    fn size(&self) -> Size {
        self.back.size()
    }
}

impl<SPI, DISP, EXTCOM, C, const LINE_BYTES: usize, const HEIGHT: usize> PixelSurface
    for PanelSurface<SPI, DISP, EXTCOM, C, LINE_BYTES, HEIGHT>
where
    SPI: SpiDevice<u8>,
    DISP: OutputPin,
    EXTCOM: OutputPin,
    C: Clock,
{
    type Error = PanelError<SPI, DISP, EXTCOM>;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.lcd.enable_display()?;
        self.lcd.clear_all()?;
        let Ok(()) = self.back.init();
        info!(
            "panel: {}x{} enabled ({:?})",
            self.back.size().width,
            HEIGHT,
            self.lcd.config().inversion
        );
        Ok(())
    }

    fn clear(&mut self) {
        self.back.clear();
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.lcd.flush(self.back.frame())?;
        self.lcd.toggle_extcomin()?;
        let Ok(()) = self.back.present();
        Ok(())
    }

    fn now_millis(&self) -> u64 {
        self.back.now_millis()
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use embedded_hal::{
        digital,
        spi::{self, Operation},
    };
    use lumen_core::graphics::Graphics;
    use memlcd::Config;

    use super::*;
    use crate::clock::ManualClock;

    #[derive(Default)]
    struct RecordingSpi {
        transactions: Vec<Vec<u8>>,
    }

    impl spi::ErrorType for RecordingSpi {
        type Error = Infallible;
    }

    impl SpiDevice<u8> for RecordingSpi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Infallible> {
            let mut bytes = Vec::new();
            for op in operations.iter() {
                if let Operation::Write(data) = op {
                    bytes.extend_from_slice(data);
                }
            }
            self.transactions.push(bytes);
            Ok(())
        }
    }

    #[derive(Default)]
    struct Pin {
        high: bool,
        toggles: u32,
    }

    impl digital::ErrorType for Pin {
        type Error = Infallible;
    }

    impl OutputPin for Pin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            self.toggles += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            self.toggles += 1;
            Ok(())
        }
    }

    type TestPanel<'a> = PanelSurface<RecordingSpi, Pin, Pin, &'a ManualClock, 2, 4>;

    fn panel(clock: &ManualClock) -> TestPanel<'_> {
        let lcd = MemoryLcd::new(RecordingSpi::default(), Pin::default(), Pin::default(), Config::default());
        PanelSurface::new(lcd, clock)
    }

    #[test]
    fn init_enables_and_clears_glass() {
        let clock = ManualClock::new(0);
        let mut panel = panel(&clock);
        panel.init().unwrap();

        let (lcd, _) = panel.release();
        let (spi, disp, _) = lcd.release();
        assert!(disp.high);
        assert_eq!(spi.transactions, vec![vec![0x20, 0x00, 0x00]]);
    }

    #[test]
    fn present_flushes_every_line_and_toggles_com() {
        let clock = ManualClock::new(0);
        let mut panel = panel(&clock);
        panel.init().unwrap();

        Graphics::new(&mut panel).pixel(0, 3);
        panel.present().unwrap();
        panel.present().unwrap();
        assert_eq!(panel.back_buffer().presented_frames(), 2);

        let (lcd, _) = panel.release();
        let (spi, _, extcom) = lcd.release();
        // One clear plus four lines per present.
        assert_eq!(spi.transactions.len(), 1 + 2 * 4);
        assert_eq!(spi.transactions[4], vec![0x80, 0x20, 0x80, 0x00, 0x00, 0x00]);
        assert_eq!(extcom.toggles, 2);
        assert!(!extcom.high);
    }

    #[test]
    fn shutdown_disables_display() {
        let clock = ManualClock::new(0);
        let mut panel = panel(&clock);
        panel.init().unwrap();
        panel.shutdown().unwrap();

        let (lcd, _) = panel.release();
        let (_, disp, _) = lcd.release();
        assert!(!disp.high);
    }
}
