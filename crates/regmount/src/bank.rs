//! Dense, index-addressed composition.

use crate::mount::{Meta, Mount, MountHandle};
use crate::order::ByteOrder;

/// An ordered sequence of units addressed by index. `None` slots are
/// unmounted gaps that fail every access.
///
/// The slot sequence is fixed at construction; there is no mutating API, so
/// `size()` stays stable as the [`Mount`] contract requires.
pub struct RegisterBank {
    meta: Meta,
    slots: Vec<Option<MountHandle>>,
}

impl RegisterBank {
    pub fn new(meta: Meta, slots: Vec<Option<MountHandle>>) -> Self {
        Self { meta, slots }
    }

    /// The unit mounted at `addr`, if any.
    pub fn slot(&self, addr: u64) -> Option<&MountHandle> {
        usize::try_from(addr)
            .ok()
            .and_then(|idx| self.slots.get(idx))
            .and_then(|slot| slot.as_ref())
    }
}

impl Mount for RegisterBank {
    fn name(&self) -> &str {
        self.meta.name()
    }

    fn description(&self) -> &str {
        self.meta.description()
    }

    fn size(&self) -> u64 {
        self.slots.len() as u64
    }

    fn write_at(&mut self, addr: u64, bytes: &[u8], order: ByteOrder) -> Option<usize> {
        let idx = usize::try_from(addr).ok()?;
        let unit = self.slots.get(idx)?.as_ref()?;
        // The child's result is propagated verbatim.
        unit.borrow_mut().write_at(0, bytes, order)
    }

    fn read_at(&mut self, addr: u64, bytes: &mut [u8], order: ByteOrder) -> Option<usize> {
        let idx = usize::try_from(addr).ok()?;
        let unit = self.slots.get(idx)?.as_ref()?;
        unit.borrow_mut().read_at(0, bytes, order)
    }
}
