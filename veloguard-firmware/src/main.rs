//! Veloguard - Cyclist safety monitor firmware
//!
//! Main firmware binary for RP2040-based boards. Samples an HC-SR04
//! ranging sensor and a triaxial analog accelerometer on independent
//! cadences and annunciates hazards over LEDs, a buzzer and a UART link.
//!
//! Wiring (Pico defaults):
//!
//! | Peripheral       | Pin            |
//! |------------------|----------------|
//! | UART0 TX / RX    | GPIO0 / GPIO1  |
//! | HC-SR04 trigger  | GPIO2          |
//! | HC-SR04 echo     | GPIO3          |
//! | LED 1..3         | GPIO10..GPIO12 |
//! | Buzzer           | GPIO13         |
//! | Accel x / y / z  | GPIO26..GPIO28 |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUart, Config as UartConfig};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::tasks::annunciate::AnnunciatorOutputs;

mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Serial link baud rate (plain terminal / bluetooth bridge)
const UART_BAUD: u32 = 9600;

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 16]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Veloguard firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Serial reporter link. Receive side is unused - the protocol is
    // one-way - but the buffered driver wants both halves.
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = UART_BAUD;
        cfg
    };
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 16]);
    let uart = BufferedUart::new(p.UART0, p.PIN_0, p.PIN_1, Irqs, tx_buf, rx_buf, uart_config);
    let (uart_tx, _uart_rx) = uart.split();
    info!("UART initialized at {} baud", UART_BAUD);

    // HC-SR04 ranging sensor
    let trigger = Output::new(p.PIN_2, Level::Low);
    let echo = Input::new(p.PIN_3, Pull::None);

    // ADC with one single-shot channel per accelerometer axis
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let ch_x = Channel::new_pin(p.PIN_26, Pull::None);
    let ch_y = Channel::new_pin(p.PIN_27, Pull::None);
    let ch_z = Channel::new_pin(p.PIN_28, Pull::None);

    // Indicator bar and buzzer, all off until the annunciator runs
    let outputs = AnnunciatorOutputs {
        led1: Output::new(p.PIN_10, Level::Low),
        led2: Output::new(p.PIN_11, Level::Low),
        led3: Output::new(p.PIN_12, Level::Low),
        buzzer: Output::new(p.PIN_13, Level::Low),
    };
    info!("Sensors and outputs initialized");

    // Spawn tasks; a failed spawn at startup is fatal
    spawner.spawn(tasks::report_task(uart_tx)).unwrap();
    spawner.spawn(tasks::range_cadence_task()).unwrap();
    spawner.spawn(tasks::accel_cadence_task()).unwrap();
    spawner.spawn(tasks::range_sampler_task(trigger, echo)).unwrap();
    spawner
        .spawn(tasks::accel_sampler_task(adc, ch_x, ch_y, ch_z))
        .unwrap();
    spawner.spawn(tasks::annunciate_task(outputs)).unwrap();

    info!("All tasks spawned, monitor running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
