#![no_std]
#![no_main]

use aqi::{AqiResult, Readings, GAUGE_MAX};
use cortex_m_semihosting::hprintln;
use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_stm32::bind_interrupts;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::Pull;
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::peripherals::I2C2;
use {defmt_rtt as _, panic_probe as _};

use aqi_monitor::config::MonitorConfig;
use aqi_monitor::led::LedController;
use aqi_monitor::pmsa003i::{self, SensorFrame};

bind_interrupts!(struct Irqs {
    I2C2_EV => i2c::EventInterruptHandler<I2C2>;
    I2C2_ER => i2c::ErrorInterruptHandler<I2C2>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    let config = MonitorConfig::default();
    let mut button = ExtiInput::new(p.PA0, p.EXTI0, Pull::Down);

    // PA9 is SCL, PA10 is SDA
    let mut i2c = I2c::new(
        p.I2C2,
        p.PA9,
        p.PA10,
        Irqs,
        p.DMA1_CH4,
        p.DMA1_CH5,
        config.i2c_frequency,
        i2c::Config::default(),
    );

    let mut leds = LedController::new(p.PE8, p.PE9, p.PE10, p.PE11, p.PE12, p.PE13, p.PE14, p.PE15);

    if config.ping_on_boot {
        info!("Pinging sensor at {=u8:#x}", config.sensor_addr);
        match i2c.blocking_write(config.sensor_addr, &[0x00]) {
            Ok(()) => info!("Sensor responded to ping"),
            Err(e) => warn!("Sensor did not respond to ping: {}", e),
        }
    }

    // Shown until the first successful reading
    let mut result = aqi::calculate(&Readings::empty());

    loop {
        button.wait_for_any_edge().await;
        if button.is_low() {
            leds.all_off();
            continue;
        }

        match measure(&mut i2c, &config).await {
            Ok(latest) => result = latest,
            Err(e) => {
                warn!("Keeping previous AQI: {}", e);
                hprintln!("Sensor error: {}", e);
            }
        }

        leds.show(result.category);
        report(&result);
    }
}

/// Reads one frame and runs it through the AQI engine.
async fn measure(
    i2c: &mut I2c<'static, embassy_stm32::mode::Async>,
    config: &MonitorConfig,
) -> Result<AqiResult, pmsa003i::SensorError> {
    let buffer = pmsa003i::fetch_data(i2c, config.sensor_addr).await?;
    let frame = SensorFrame::parse(&buffer).inspect_err(|_| pmsa003i::log_registers(&buffer))?;

    info!(
        "PM2.5 {=u16} ug/m3, PM10 {=u16} ug/m3",
        frame.pm2_5_env, frame.pm10_env
    );
    let readings = frame.checked_readings()?;

    Ok(aqi::calculate(&readings))
}

fn report(result: &AqiResult) {
    let band = result.category.index_range();
    info!("{} (gauge {=u16}/{=u16})", result, result.gauge_value(), GAUGE_MAX);
    hprintln!("{}", result);
    hprintln!(
        "Band {}-{}, gauge {}/{}",
        band.start(),
        band.end(),
        result.gauge_value(),
        GAUGE_MAX
    );
    hprintln!("{}", result.recommendation);
    // Newline to separate output between readings
    hprintln!("");
}
