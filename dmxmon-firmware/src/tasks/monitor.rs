//! Monitor task
//!
//! Runs the monitor tick at a fixed cadence until reset. A failed tick is
//! logged and signalled on the LED, then the loop carries on.

use defmt::*;
use embassy_time::{Duration, Instant, Timer};

use dmxmon_core::config::Fixture;
use dmxmon_core::indicator::FlashPattern;
use dmxmon_core::Monitor;
use dmxmon_hal::OutputPin;

use crate::device::Device;

/// Time between ticks
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Pause after the first full screen draw
const SETTLE_DELAY: Duration = Duration::from_secs(2);

/// Interval between heartbeat log lines
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(10);

/// Monitor task - owns the device for the life of the firmware
#[embassy_executor::task]
pub async fn monitor_task(mut device: Device, fixtures: &'static [Fixture]) {
    info!("Monitor task started ({} fixtures)", fixtures.len());

    let mut monitor = Monitor::new(fixtures);
    let mut last_heartbeat = Instant::now();

    loop {
        let now = Instant::now();
        // Millisecond clock wraps after ~49 days; all comparisons wrap too
        let now_ms = now.as_millis() as u32;

        match monitor.tick(
            now_ms,
            &mut device.serial,
            &mut device.display,
            &mut device.led,
        ) {
            Ok(report) => {
                if report.ingested {
                    trace!("Frame: {} bytes", report.bytes_read);
                } else if report.bytes_read > 0 {
                    trace!("Dropped short chunk: {} bytes", report.bytes_read);
                }

                if report.render.status {
                    if report.live {
                        info!("Receiving DMX data");
                    } else {
                        warn!("Waiting for DMX data");
                    }
                }

                if report.render.layout {
                    debug!("Layout drawn");
                    Timer::after(SETTLE_DELAY).await;
                }

                if now.duration_since(last_heartbeat) >= HEARTBEAT_INTERVAL {
                    info!(
                        "Heartbeat: {} packets, live={}",
                        monitor.receiver().packet_count(),
                        report.live
                    );
                    last_heartbeat = now;
                }
            }
            Err(e) => {
                error!("Monitor tick failed: {:?}", Debug2Format(&e));
                play_pattern(&mut device.led, FlashPattern::RECOVERABLE).await;
                monitor
                    .indicator_mut()
                    .resync(Instant::now().as_millis() as u32);
            }
        }

        Timer::after(TICK_INTERVAL).await;
    }
}

/// Drive the LED through a flash pattern
pub async fn play_pattern<L: OutputPin>(led: &mut L, pattern: FlashPattern) {
    for step in pattern.steps() {
        led.set_state(step.led_on);
        Timer::after_millis(step.hold_ms as u64).await;
    }
}
