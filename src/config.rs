//! Runtime configuration for the monitor.

use embassy_stm32::time::Hertz;

use crate::pmsa003i::SENSOR_I2C_ADDR;

/// Settings the monitor is brought up with.
#[derive(Clone, Copy, Debug)]
pub struct MonitorConfig {
    /// I2C address of the PMSA003I
    pub sensor_addr: u8,
    /// I2C bus frequency
    pub i2c_frequency: Hertz,
    /// Ping the sensor once at startup
    pub ping_on_boot: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            sensor_addr: SENSOR_I2C_ADDR,
            // TODO: try 400kHz once the sensor is on a shorter cable
            i2c_frequency: Hertz(100_000),
            ping_on_boot: true,
        }
    }
}
