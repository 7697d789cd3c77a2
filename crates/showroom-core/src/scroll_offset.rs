use tokio::sync::watch;

/// Scroll position of one scrollable surface
///
/// Exactly one writer owns this value (the surface's scroll source); any
/// number of readers take snapshots through [`ScrollReader`]. Not `Clone`,
/// so a second producer cannot be created.
#[derive(Debug)]
pub struct ScrollOffset {
    tx: watch::Sender<f64>,
}

/// Read-only view of a [`ScrollOffset`]
#[derive(Debug, Clone)]
pub struct ScrollReader {
    rx: watch::Receiver<f64>,
}

impl ScrollOffset {
    pub fn new(initial: f64) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Publish a new position; readers are notified only on change
    pub fn set(&mut self, value: f64) {
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        });
    }

    #[inline]
    pub fn get(&self) -> f64 {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> ScrollReader {
        ScrollReader {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for ScrollOffset {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ScrollReader {
    /// Current snapshot without marking it seen
    #[inline]
    pub fn get(&self) -> f64 {
        *self.rx.borrow()
    }

    /// Snapshot, marking it seen
    pub fn read(&mut self) -> f64 {
        *self.rx.borrow_and_update()
    }

    /// Whether a new value was published since the last `read`
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Wait for the next published value; `false` once the writer is gone
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
