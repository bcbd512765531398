//! Device listener - background serial reader thread
//!
//! Opens the byte source on the spawned thread, so an open failure surfaces
//! the same way as a mid-stream failure: exactly one `InputEvent::Error` on
//! the channel, then the thread exits. Neither failure is retried and
//! neither stops the game; the main loop keeps running keyboard-only.
//!
//! Shutdown is cooperative: a stop flag checked once per read iteration,
//! observed within one read-timeout interval. The join is bounded; a thread
//! stuck past the timeout is detached rather than killed, and the process
//! exits anyway.

use std::io::{ErrorKind, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::device::error::DeviceError;
use crate::device::framer::LineFramer;
use crate::types::{InputEvent, IDLE_SLEEP_MS, READ_CHUNK, SERIAL_READ_TIMEOUT_MS};

/// Anything that yields chunks of bytes. Real pads are serial ports; tests
/// use scripted in-memory sources.
pub type ByteSource = Box<dyn Read + Send>;

/// Deferred open, run on the listener thread.
pub type SourceOpener = Box<dyn FnOnce() -> Result<ByteSource, DeviceError> + Send>;

/// Handle to one background reader. Dropping it signals stop but does not
/// wait; call [`DeviceListener::shutdown`] for the bounded join.
pub struct DeviceListener {
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl DeviceListener {
    /// Spawn the reader thread. Events arrive on the returned channel in
    /// production order; the consumer is expected to drain with `try_recv`.
    pub fn start(open: SourceOpener) -> (Self, Receiver<InputEvent>) {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let handle = thread::spawn(move || read_loop(open, tx, thread_stop));
        (
            Self {
                stop,
                handle: Some(handle),
            },
            rx,
        )
    }

    /// Request cooperative stop without waiting.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Stop and wait for the thread, bounded. Returns false if the thread
    /// did not exit in time and was left detached.
    pub fn shutdown(mut self, timeout: Duration) -> bool {
        self.stop();
        let Some(handle) = self.handle.take() else {
            return true;
        };

        let deadline = Instant::now() + timeout;
        while !handle.is_finished() {
            if Instant::now() >= deadline {
                warn!("device listener did not stop in time, detaching");
                return false;
            }
            thread::sleep(Duration::from_millis(5));
        }
        let _ = handle.join();
        debug!("device listener stopped");
        true
    }
}

impl Drop for DeviceListener {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

fn read_loop(open: SourceOpener, tx: Sender<InputEvent>, stop: Arc<AtomicBool>) {
    let mut source = match open() {
        Ok(source) => source,
        Err(err) => {
            warn!(error = %err, "device open failed");
            let _ = tx.send(InputEvent::Error(err.to_string()));
            return;
        }
    };
    debug!("device source opened");

    let mut framer = LineFramer::new();
    let mut chunk = [0u8; READ_CHUNK];

    while !stop.load(Ordering::Relaxed) {
        match source.read(&mut chunk) {
            Ok(0) => thread::sleep(Duration::from_millis(IDLE_SLEEP_MS)),
            Ok(n) => {
                for dir in framer.feed(&chunk[..n]) {
                    debug!(token = dir.as_str(), "device button");
                    if tx.send(InputEvent::Button(dir)).is_err() {
                        // Consumer went away; nothing left to publish to.
                        return;
                    }
                }
            }
            Err(err) if matches!(err.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => {
                thread::sleep(Duration::from_millis(IDLE_SLEEP_MS));
            }
            Err(err) => {
                let err = DeviceError::Read(err);
                warn!(error = %err, "device read failed, listener exiting");
                let _ = tx.send(InputEvent::Error(err.to_string()));
                return;
            }
        }
    }
    // Source handle drops here on every exit path, releasing the port.
}

/// Production opener: a serial port at `port`/`baud` with a short read
/// timeout so the reader loop stays responsive to the stop flag.
pub fn serial_opener(port: String, baud: u32) -> SourceOpener {
    Box::new(move || {
        let source = serialport::new(&port, baud)
            .timeout(Duration::from_millis(SERIAL_READ_TIMEOUT_MS))
            .open()
            .map_err(|source| DeviceError::Open {
                port: port.clone(),
                source,
            })?;
        let source: ByteSource = Box::new(source);
        Ok(source)
    })
}
