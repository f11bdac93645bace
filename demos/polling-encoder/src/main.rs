//! Polling encoder demo
//!
//! Polls a KY-040 rotary encoder module on the Raspberry Pi Pico 2 and logs
//! position changes and button presses via defmt. The encoder is sampled
//! every millisecond; the delay is awaited, so the executor stays free for
//! other tasks.
//!
//! # Wiring
//!
//! | Signal | Pico 2 Pin | Notes                       |
//! |--------|------------|-----------------------------|
//! | CLK    | GP17       | Phase A                     |
//! | DT     | GP18       | Phase B                     |
//! | SW     | GP27       | Active-low, pull-up enabled |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use poll_encoder::{EmbassyClock, Encoder, EncoderPins, HalInputs};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- Encoder pins (the module has its own pull-ups on CLK/DT) ---
    let clk = Input::new(p.PIN_17, Pull::None);
    let dt = Input::new(p.PIN_18, Pull::None);
    let sw = Input::new(p.PIN_27, Pull::Up);

    let inputs = HalInputs::new(clk, dt, sw);
    let mut encoder = match Encoder::new(inputs, EmbassyClock, Delay, EncoderPins::lines()) {
        Ok(encoder) => encoder,
        Err(e) => defmt::panic!("Encoder init failed: {}", e),
    };

    info!("Encoder example started, rotate the knob or press it");

    let mut last_count = encoder.count();

    loop {
        match encoder.update_async().await {
            Ok(pressed) => {
                if pressed {
                    info!("Button pressed at count {}", encoder.count());
                }
            }
            Err(e) => error!("Poll failed: {}", e),
        }

        let count = encoder.count();
        if count != last_count {
            info!("Count: {} ({})", count, encoder.direction());
            last_count = count;
        }
    }
}
