use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

use crate::vocab::cache::DiskCache;
use crate::vocab::controller::{LoadRequest, RequestToken};
use crate::vocab::loader::{self, CachePolicy};
use crate::vocab::source::DataSource;
use crate::vocab::{Coordinate, DataUnavailable, Dataset};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(#[allow(dead_code)] u16, #[allow(dead_code)] u16),
    Loaded {
        token: RequestToken,
        coord: Coordinate,
        result: Result<Dataset, DataUnavailable>,
    },
}

pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let input_tx = tx.clone();

        thread::spawn(move || {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key)) => {
                            if input_tx.send(AppEvent::Key(key)).is_err() {
                                return;
                            }
                        }
                        Ok(Event::Resize(w, h)) => {
                            if input_tx.send(AppEvent::Resize(w, h)).is_err() {
                                return;
                            }
                        }
                        _ => {}
                    }
                } else if input_tx.send(AppEvent::Tick).is_err() {
                    return;
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }

    /// Run a fetch on a worker thread; the outcome arrives as `AppEvent::Loaded`.
    pub fn spawn_load(
        &self,
        request: LoadRequest,
        source: Arc<dyn DataSource>,
        cache: Option<Arc<DiskCache>>,
        policy: CachePolicy,
    ) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result =
                loader::fetch_dataset(source.as_ref(), cache.as_deref(), policy, request.coord);
            let _ = tx.send(AppEvent::Loaded {
                token: request.token,
                coord: request.coord,
                result,
            });
        });
    }
}
