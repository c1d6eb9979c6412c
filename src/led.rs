//! AQI color display on the STM32F303 Discovery user LEDs.

use aqi::{Category, Color};
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::peripherals::{PE10, PE11, PE12, PE13, PE14, PE15, PE8, PE9};

/// The eight user LEDs, in pin order PE8..PE15.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum Led {
    Blue1,
    Red1,
    Orange1,
    Green1,
    Blue2,
    Red2,
    Orange2,
    Green2,
}

/// LEDs lit for each AQI color.
///
/// This is an approximation, since the Discovery board doesn't have
/// individual LEDs with the exact colors needed.
pub const fn pattern(color: Color) -> &'static [Led] {
    match color {
        Color::Green => &[Led::Green1, Led::Green2],
        Color::Yellow => &[Led::Green1, Led::Orange1],
        Color::Orange => &[Led::Orange1, Led::Orange2],
        Color::Red => &[Led::Red1, Led::Red2],
        Color::Purple => &[Led::Red1, Led::Blue1],
        Color::DarkPurple => &[Led::Red2, Led::Blue1, Led::Blue2],
    }
}

pub struct LedController {
    leds: [Output<'static>; 8],
}

impl LedController {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pe8: PE8,
        pe9: PE9,
        pe10: PE10,
        pe11: PE11,
        pe12: PE12,
        pe13: PE13,
        pe14: PE14,
        pe15: PE15,
    ) -> Self {
        Self {
            leds: [
                Output::new(pe8, Level::Low, Speed::Low),
                Output::new(pe9, Level::Low, Speed::Low),
                Output::new(pe10, Level::Low, Speed::Low),
                Output::new(pe11, Level::Low, Speed::Low),
                Output::new(pe12, Level::Low, Speed::Low),
                Output::new(pe13, Level::Low, Speed::Low),
                Output::new(pe14, Level::Low, Speed::Low),
                Output::new(pe15, Level::Low, Speed::Low),
            ],
        }
    }

    /// Light the pattern for the category's color, clearing the rest.
    pub fn show(&mut self, category: Category) {
        self.all_off();
        for &led in pattern(category.color()) {
            self.leds[led as usize].set_high();
        }
    }

    pub fn all_off(&mut self) {
        for led in self.leds.iter_mut() {
            led.set_low();
        }
    }
}
