#![no_std]
#![no_main]

use defmt_rtt as _;
use defmt_test as _;
use embassy_stm32 as _;
use panic_probe as _;

use aqi_monitor as _;

/// A valid frame carrying the given environmental PM2.5 and PM10 values.
fn frame_with(pm2_5_env: u16, pm10_env: u16) -> [u8; 32] {
    let mut data = [0u8; 32];
    data[0..2].copy_from_slice(&[0x42, 0x4D]);
    data[2..4].copy_from_slice(&28u16.to_be_bytes());
    data[12..14].copy_from_slice(&pm2_5_env.to_be_bytes());
    data[14..16].copy_from_slice(&pm10_env.to_be_bytes());
    let checksum: u16 = data[..30].iter().map(|&b| b as u16).sum();
    data[30..32].copy_from_slice(&checksum.to_be_bytes());
    data
}

#[defmt_test::tests]
mod tests {
    use super::frame_with;
    use aqi::{Category, Color, Dominant, Pollutant, ReadingError};
    use aqi_monitor::led::{pattern, Led};
    use aqi_monitor::pmsa003i::{validate_checksum, validate_header, SensorError, SensorFrame};
    use defmt::{assert, assert_eq};

    #[test]
    fn test_validate_checksum() {
        let mut data = [0u8; 32];
        data[..30].copy_from_slice(&[1; 30]);
        let checksum: u16 = data[..30].iter().map(|&b| b as u16).sum();
        data[30..32].copy_from_slice(&checksum.to_be_bytes());

        assert_eq!(validate_checksum(&data), Ok(()));

        data[30..32].copy_from_slice(&[0x00, 0x00]);
        assert_eq!(
            validate_checksum(&data),
            Err(SensorError::ChecksumMismatch {
                calculated: 30,
                received: 0
            })
        );

        let data = [0u8; 31];
        assert_eq!(
            validate_checksum(&data),
            Err(SensorError::ShortBuffer { len: 31 })
        );
    }

    #[test]
    fn test_validate_header() {
        assert_eq!(validate_header(&[0x42, 0x4D]), Ok(()));
        assert_eq!(
            validate_header(&[0x42, 0x00]),
            Err(SensorError::InvalidHeader { got: [0x42, 0x00] })
        );
        assert_eq!(validate_header(&[]), Err(SensorError::ShortBuffer { len: 0 }));
    }

    #[test]
    fn test_parse_frame() {
        let frame = SensorFrame::parse(&frame_with(25, 54)).unwrap();
        assert_eq!(frame.pm2_5_env, 25);
        assert_eq!(frame.pm10_env, 54);
        assert_eq!(frame.pm1_0_standard, 0);

        let mut corrupt = frame_with(25, 54);
        corrupt[0] = 0x00;
        corrupt[31] = corrupt[31].wrapping_sub(0x42);
        assert!(matches!(
            SensorFrame::parse(&corrupt),
            Err(SensorError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_header_reported_before_checksum() {
        let mut corrupt = frame_with(25, 54);
        corrupt[0] = 0x00;
        // Checksum left stale, so both checks would fail
        assert_eq!(
            SensorFrame::parse(&corrupt),
            Err(SensorError::InvalidHeader { got: [0x00, 0x4D] })
        );
        assert_eq!(
            SensorFrame::parse(&[0x42]),
            Err(SensorError::ShortBuffer { len: 1 })
        );
    }

    #[test]
    fn test_out_of_range_frame_is_rejected() {
        let frame = SensorFrame::parse(&frame_with(1500, 54)).unwrap();
        assert_eq!(
            frame.checked_readings(),
            Err(SensorError::Reading(ReadingError::OutOfRange {
                pollutant: Pollutant::Pm25,
                value: 1500.0,
                max: 1000.0
            }))
        );

        let frame = SensorFrame::parse(&frame_with(1000, 54)).unwrap();
        assert_eq!(frame.checked_readings(), Ok(frame.readings()));
    }

    #[test]
    fn test_frame_feeds_engine() {
        let frame = SensorFrame::parse(&frame_with(25, 54)).unwrap();
        let readings = frame.checked_readings().unwrap();
        assert_eq!(readings.co, None);

        let result = aqi::calculate(&readings);
        assert_eq!(result.index, 78);
        assert_eq!(result.dominant, Dominant::Pollutant(Pollutant::Pm25));
        assert_eq!(result.category, Category::Moderate);

        let frame = SensorFrame::parse(&frame_with(5, 400)).unwrap();
        let result = aqi::calculate(&frame.readings());
        assert_eq!(result.dominant, Dominant::Pollutant(Pollutant::Pm10));
        assert_eq!(result.category, Category::VeryUnhealthy);
    }

    #[test]
    fn test_led_patterns() {
        assert_eq!(pattern(Color::Green), &[Led::Green1, Led::Green2][..]);
        assert_eq!(
            pattern(Color::DarkPurple),
            &[Led::Red2, Led::Blue1, Led::Blue2][..]
        );
        for category in Category::ALL {
            assert!(!pattern(category.color()).is_empty());
        }
    }
}
