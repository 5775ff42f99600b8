//! Terminal event forwarding into the async main loop

use crossterm::event::Event;
use std::io;
use std::thread::JoinHandle;
use tokio::sync::mpsc::UnboundedSender;

/// Pump events from `read` into `tx` until the reader fails or the
/// receiving side is dropped.
pub fn forward_events<F>(mut read: F, tx: UnboundedSender<Event>)
where
    F: FnMut() -> io::Result<Event>,
{
    loop {
        match read() {
            Ok(event) => {
                if tx.send(event).is_err() {
                    break;
                }
            }
            Err(err) => {
                tracing::error!("terminal event read failed: {err}");
                break;
            }
        }
    }
}

/// Read crossterm events on a dedicated thread, since `event::read` blocks
pub fn spawn_reader(tx: UnboundedSender<Event>) -> JoinHandle<()> {
    std::thread::spawn(move || forward_events(crossterm::event::read, tx))
}
