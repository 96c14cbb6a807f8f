//! Serial reporter task
//!
//! Thin sink draining the report channel into the buffered UART TX.
//! Producers never block on the transport: they queue a line (or drop it
//! when the channel is full) and this task owns the actual byte pushing.
//! Lines go out with CRLF, matching a plain serial terminal.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use crate::channels::REPORT_CHANNEL;

/// Serial reporter task
#[embassy_executor::task]
pub async fn report_task(mut tx: BufferedUartTx) {
    info!("Serial reporter started");

    loop {
        let line = REPORT_CHANNEL.receive().await;

        if tx.write_all(line.as_bytes()).await.is_err() {
            warn!("UART write failed, dropping report line");
            continue;
        }
        if tx.write_all(b"\r\n").await.is_err() {
            warn!("UART write failed mid-line");
        }
    }
}
