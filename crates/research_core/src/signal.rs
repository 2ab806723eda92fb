/// Publisher side of the "content added" contract.
///
/// The version only ever grows; subscribers react to any change of it, never
/// to its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChangeSignal {
    version: u64,
}

impl ChangeSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn publish(&mut self) {
        self.version += 1;
    }
}

/// Subscriber side: remembers the last version it reacted to.
///
/// A fresh watcher has seen nothing, so its first observation always fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignalWatcher {
    seen: Option<u64>,
}

impl SignalWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` exactly once per version not yet observed.
    pub fn observe(&mut self, signal: &ChangeSignal) -> bool {
        if self.seen == Some(signal.version()) {
            return false;
        }
        self.seen = Some(signal.version());
        true
    }
}
