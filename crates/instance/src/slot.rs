use crate::manager::InstanceManager;
use once_cell::unsync::OnceCell;
use std::cell::Cell;
use std::rc::Rc;

/// Holds at most one [`InstanceManager`], created on first request.
///
/// The slot is an ordinary value owned by the application root and handed
/// to whoever needs the shared instance; there is no global. Every
/// [`get_or_init`](Self::get_or_init) after the first returns a handle to
/// the same instance, whatever identifier it is called with.
///
/// # Example
///
/// ```rust
/// use lab_instance::InstanceSlot;
/// use std::rc::Rc;
///
/// let slot = InstanceSlot::new();
/// let first = slot.get_or_init("Primary");
/// let second = slot.get_or_init("Secondary");
///
/// assert!(Rc::ptr_eq(&first, &second));
/// assert_eq!(second.identifier(), "Primary");
/// ```
#[derive(Debug, Default)]
pub struct InstanceSlot {
    cell:     OnceCell<Rc<InstanceManager>>,
    accesses: Cell<u64>,
}

impl InstanceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the shared instance, creating it with `identifier` if the slot
    /// is still empty.
    pub fn get_or_init(&self, identifier: &str) -> Rc<InstanceManager> {
        self.accesses.set(self.accesses.get() + 1);

        if let Some(existing) = self.cell.get() {
            tracing::info!(requested = identifier, "Using existing instance");
            return Rc::clone(existing);
        }

        let instance = self.cell.get_or_init(|| Rc::new(InstanceManager::new(identifier)));
        tracing::info!(
            identifier = instance.identifier(),
            serial = instance.serial(),
            "New instance initialized"
        );
        Rc::clone(instance)
    }

    /// The shared instance, if one has been created.
    pub fn current(&self) -> Option<Rc<InstanceManager>> {
        self.cell.get().cloned()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Number of [`get_or_init`](Self::get_or_init) calls so far.
    pub fn accesses(&self) -> u64 {
        self.accesses.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_until_first_request() {
        let slot = InstanceSlot::new();
        assert!(!slot.is_initialized());
        assert!(slot.current().is_none());
        assert_eq!(slot.accesses(), 0);
    }

    #[test]
    fn first_identifier_sticks() {
        let slot = InstanceSlot::new();
        let first = slot.get_or_init("Primary Instance");
        let second = slot.get_or_init("Secondary Instance");

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(second.identifier(), "Primary Instance");
        assert_eq!(first.serial(), second.serial());
    }

    #[test]
    fn every_handle_is_identical() {
        let slot = InstanceSlot::new();
        let handles: Vec<_> = ["Check 1", "Check 2", "Check 3"]
            .iter()
            .map(|id| slot.get_or_init(id))
            .collect();

        assert!(handles.iter().all(|h| Rc::ptr_eq(h, &handles[0])));
        assert_eq!(slot.accesses(), 3);
        assert!(Rc::ptr_eq(&slot.current().unwrap(), &handles[0]));
    }

    #[test]
    fn separate_slots_hold_separate_instances() {
        let a = InstanceSlot::new();
        let b = InstanceSlot::new();
        let from_a = a.get_or_init("A");
        let from_b = b.get_or_init("B");

        assert!(!Rc::ptr_eq(&from_a, &from_b));
        assert_ne!(from_a.serial(), from_b.serial());
    }
}
