//! Rainbow sequence player
//!
//! Drives a 120 pixel WBGR strip on D13 through four rainbow animations,
//! switching every five seconds, until interrupted. The strip is turned off
//! on the way out.

mod terminal;

use std::time::Duration as StdDuration;

use anyhow::Context;
use log::{LevelFilter, info};
use myrtio_light_sequence::{
    Instant, PixelBuf, StopReason, StopSignal,
    preset::{self, MAX_BYTES, NUM_PIXELS, PIN},
    run,
};

use crate::terminal::TerminalTransmitter;

/// Loop poll period, well below the frame time
const POLL: StdDuration = StdDuration::from_millis(1);

static STOP: StopSignal = StopSignal::new();

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();

    ctrlc::set_handler(|| {
        STOP.raise(StopReason::Interrupted);
    })
    .context("failed to install the interrupt handler")?;

    let config = preset::pixel_config()?;
    let mut pixels = PixelBuf::<_, MAX_BYTES>::new(
        TerminalTransmitter::new(config.byte_order),
        PIN,
        NUM_PIXELS,
        config,
    )?;
    let mut sequence = preset::rainbow_sequence(Instant::now().as_ticks())?;

    let reason = run(&mut sequence, &mut pixels, &STOP, || {
        std::thread::sleep(POLL);
        Instant::now()
    })
    .context("animation loop failed")?;

    println!();
    info!(
        "stopped ({:?}) after {} frames",
        reason,
        pixels.transmitter().frames()
    );
    Ok(())
}
