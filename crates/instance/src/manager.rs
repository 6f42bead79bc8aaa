use std::sync::atomic::{AtomicU64, Ordering};

/// Source of [`InstanceManager::serial`] numbers.
static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

/// The object shared through an [`InstanceSlot`](crate::InstanceSlot).
///
/// Immutable once created: the identifier it was first requested with sticks
/// for its whole life.
#[derive(Debug, PartialEq, Eq)]
pub struct InstanceManager {
    identifier: String,
    serial:     u64,
}

impl InstanceManager {
    /// Only the slot creates instances.
    pub(crate) fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            serial:     NEXT_SERIAL.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Process-unique number; two handles with the same serial point at the
    /// same instance.
    pub fn serial(&self) -> u64 {
        self.serial
    }

    pub fn message(&self) -> String {
        format!("Message from {}", self.identifier)
    }

    /// Emit [`message`](Self::message) to the log.
    pub fn display_message(&self) {
        tracing::info!(serial = self.serial, "{}", self.message());
    }
}
