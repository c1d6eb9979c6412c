//! PMSA003I module
//!
//! This module provides supporting functionality for data retrieval
//! and validation from the PMSA003I sensor, and hands the particulate
//! concentrations over to the AQI engine.

use core::fmt;

use aqi::{ReadingError, Readings};
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::mode::Async;

pub const SENSOR_I2C_ADDR: u8 = 0x12;
pub const EXPECTED_HEADER: [u8; 2] = [0x42, 0x4D];
pub const FRAME_LEN: usize = 32;
/// Number of leading bytes covered by the checksum
const CHECKSUM_SPAN: usize = 30;

/// Everything that can go wrong while reading a frame.
#[derive(Clone, Copy, Debug, PartialEq, defmt::Format)]
pub enum SensorError {
    /// The I2C transfer failed
    I2c(i2c::Error),
    /// Fewer than 32 bytes were supplied
    ShortBuffer { len: usize },
    /// The frame did not start with 0x42 0x4D
    InvalidHeader { got: [u8; 2] },
    /// The trailing checksum does not match the payload
    ChecksumMismatch { calculated: u16, received: u16 },
    /// A decoded concentration is outside the instrument range
    Reading(ReadingError),
}

impl From<ReadingError> for SensorError {
    fn from(err: ReadingError) -> Self {
        SensorError::Reading(err)
    }
}

impl From<i2c::Error> for SensorError {
    fn from(err: i2c::Error) -> Self {
        SensorError::I2c(err)
    }
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::I2c(e) => write!(f, "I2C transfer failed: {:?}", e),
            SensorError::ShortBuffer { len } => {
                write!(f, "expected {} bytes, received {}", FRAME_LEN, len)
            }
            SensorError::InvalidHeader { got } => write!(
                f,
                "invalid header 0x{:02X}{:02X}, expected 0x{:02X}{:02X}",
                got[0], got[1], EXPECTED_HEADER[0], EXPECTED_HEADER[1]
            ),
            SensorError::ChecksumMismatch {
                calculated,
                received,
            } => write!(
                f,
                "checksum mismatch, calculated 0x{:04X} but frame carries 0x{:04X}",
                calculated, received
            ),
            SensorError::Reading(e) => write!(f, "rejected reading: {}", e),
        }
    }
}

/// A decoded PMSA003I frame. Concentrations are in µg/m³, particle
/// counts per 0.1 L of air.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, defmt::Format)]
pub struct SensorFrame {
    // CF=1 "standard particle" values, generally not useful for our needs.
    pub pm1_0_standard: u16,
    pub pm2_5_standard: u16,
    pub pm10_standard: u16,

    // The environmental units take into account factors like ambient pressure.
    // This is typically what is used in an AQI report or forecast.
    pub pm1_0_env: u16,
    pub pm2_5_env: u16,
    pub pm10_env: u16,

    // Particles with diameter beyond the given size, as used in cleanrooms.
    pub particles_0_3: u16,
    pub particles_0_5: u16,
    pub particles_1_0: u16,
    pub particles_2_5: u16,
    pub particles_5_0: u16,
    pub particles_10: u16,
}

impl SensorFrame {
    /// Validates and decodes a raw frame.
    ///
    /// # Arguments
    ///
    /// * `buffer` - At least 32 bytes of data from the sensor
    ///
    /// # Returns
    ///
    /// The decoded frame, or the first validation failure.
    pub fn parse(buffer: &[u8]) -> Result<Self, SensorError> {
        validate_header(buffer)?;
        validate_checksum(buffer)?;

        let word = |at: usize| u16::from_be_bytes([buffer[at], buffer[at + 1]]);
        Ok(Self {
            pm1_0_standard: word(4),
            pm2_5_standard: word(6),
            pm10_standard: word(8),
            pm1_0_env: word(10),
            pm2_5_env: word(12),
            pm10_env: word(14),
            particles_0_3: word(16),
            particles_0_5: word(18),
            particles_1_0: word(20),
            particles_2_5: word(22),
            particles_5_0: word(24),
            particles_10: word(26),
        })
    }

    /// Engine input built from the environmental PM2.5 and PM10 values.
    /// The sensor measures no gases, so those readings stay absent.
    pub fn readings(&self) -> Readings {
        Readings {
            pm25: Some(f64::from(self.pm2_5_env)),
            pm10: Some(f64::from(self.pm10_env)),
            ..Readings::empty()
        }
    }

    /// Like [`readings`](Self::readings), but rejects concentrations the
    /// sensor cannot legitimately report.
    pub fn checked_readings(&self) -> Result<Readings, SensorError> {
        let readings = self.readings();
        readings.validate()?;
        Ok(readings)
    }
}

/// Fetches a raw frame using a non-blocking I2C instance.
///
/// # Arguments
///
/// * `i2c` - An Embassy Async I2C instance
/// * `addr` - The sensor address, normally [`SENSOR_I2C_ADDR`]
///
/// # Examples
///
/// ```ignore
/// let buffer = fetch_data(&mut i2c, SENSOR_I2C_ADDR).await?;
/// let frame = SensorFrame::parse(&buffer)?;
/// let result = aqi::calculate(&frame.checked_readings()?);
/// hprintln!("{}", result);
/// ```
pub async fn fetch_data(
    i2c: &mut I2c<'_, Async>,
    addr: u8,
) -> Result<[u8; FRAME_LEN], SensorError> {
    let mut buffer = [0u8; FRAME_LEN];
    i2c.write_read(addr, &[0x00], &mut buffer).await?;
    Ok(buffer)
}

/// Validates the header data retrieved from the PMSA003I sensor.
/// The sensor has hardcoded values of 0x42 and 0x4D in the first
/// two registers; anything after them is ignored.
pub fn validate_header(header_bytes: &[u8]) -> Result<(), SensorError> {
    match header_bytes {
        [a, b, ..] if [*a, *b] == EXPECTED_HEADER => Ok(()),
        [a, b, ..] => Err(SensorError::InvalidHeader { got: [*a, *b] }),
        _ => Err(SensorError::ShortBuffer {
            len: header_bytes.len(),
        }),
    }
}

/// Validates the payload against the checksum carried in the last two
/// bytes, which must equal the sum of the first 30 bytes.
pub fn validate_checksum(checksum_bytes: &[u8]) -> Result<(), SensorError> {
    if checksum_bytes.len() < FRAME_LEN {
        return Err(SensorError::ShortBuffer {
            len: checksum_bytes.len(),
        });
    }

    let calculated = checksum_bytes
        .iter()
        .take(CHECKSUM_SPAN)
        .fold(0u16, |sum, &byte| sum.wrapping_add(u16::from(byte)));
    let received = u16::from_be_bytes([
        checksum_bytes[CHECKSUM_SPAN],
        checksum_bytes[CHECKSUM_SPAN + 1],
    ]);

    if calculated == received {
        Ok(())
    } else {
        Err(SensorError::ChecksumMismatch {
            calculated,
            received,
        })
    }
}

/// Debugging helper to dump every register of a raw frame.
pub fn log_registers(buffer: &[u8]) {
    for (i, &value) in buffer.iter().enumerate() {
        defmt::debug!("Register {=usize}: {=u8:#x}", i, value);
    }
}
