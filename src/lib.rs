//! Board support for the AQI monitor: the PMSA003I particulate sensor, the
//! Discovery board LEDs and the runtime configuration tying them together.

#![no_std]

pub mod config;
pub mod led;
pub mod pmsa003i;
