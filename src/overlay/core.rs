use blake3::Hash;

/// Tracks the markup last applied to the host document.
///
/// The overlay is always replaced wholesale, so a content hash of the
/// rendered fragment is enough to tell whether a fresh frame differs from
/// what the host already shows. Checking and committing are separate steps:
/// the hash is recorded only after the frame actually reached the host, so
/// a failed write never marks the frame as applied.
#[derive(Debug, Default)]
pub struct OverlayState {
    hash: Option<Hash>,
    applies: u64,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a freshly rendered frame differs from the last applied one
    /// and must be pushed to the host. Does not commit anything.
    pub fn differs(&self, frame: &[u8]) -> bool {
        let new_hash = blake3::hash(frame);
        self.hash.map(|h| h != new_hash).unwrap_or(true)
    }

    /// Commit a frame as applied. Call only after the host accepted it.
    pub fn record_applied(&mut self, frame: &[u8]) {
        self.hash = Some(blake3::hash(frame));
        self.applies = self.applies.saturating_add(1);
    }

    /// Number of frames that actually reached the host.
    pub fn applies(&self) -> u64 {
        self.applies
    }

    /// Forget the applied frame so the next render is pushed unconditionally.
    pub fn invalidate(&mut self) {
        self.hash = None;
    }
}
