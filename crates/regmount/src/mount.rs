//! The addressable-unit contract shared by every register and composition.

use std::cell::RefCell;
use std::rc::Rc;

use crate::order::ByteOrder;

/// Documentation metadata carried by every unit.
///
/// Purely descriptive: content is never validated and has no effect on
/// dispatch.
#[derive(Debug, Clone, Default)]
pub struct Meta {
    name: String,
    description: String,
}

impl Meta {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Metadata with an empty description.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// An addressable unit in a register space.
///
/// Accesses carry a raw byte buffer and a [`ByteOrder`]; the outcome is
/// either `Some(n)` with `n` the full byte width transferred, or `None` for
/// every failure (unsupported direction, address out of range, buffer too
/// short, nothing mounted). There is deliberately no per-cause error code and
/// no partial-transfer state: a register transaction is all-or-nothing.
///
/// Compositions ([`RegisterBank`](crate::bank::RegisterBank),
/// [`AddressMap`](crate::map::AddressMap)) translate the address into a child
/// unit plus a child-relative offset and recurse; leaf registers terminate
/// the recursion by marshalling the buffer against their own behavior.
pub trait Mount {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Number of addressable slots the unit occupies.
    ///
    /// Must be stable for the lifetime of the unit: containers capture it for
    /// lookup and are never resized after construction.
    fn size(&self) -> u64;

    fn write_at(&mut self, addr: u64, bytes: &[u8], order: ByteOrder) -> Option<usize>;

    fn read_at(&mut self, addr: u64, bytes: &mut [u8], order: ByteOrder) -> Option<usize>;

    /// Power-of-two address decode mask: next power of two ≥ `size()`, minus
    /// one. Saturates for sizes above `2^63`.
    fn mask(&self) -> u64 {
        match self.size().checked_next_power_of_two() {
            Some(p) => p - 1,
            None => u64::MAX,
        }
    }

    /// Number of bits needed to represent `size()`.
    fn mask_width(&self) -> u32 {
        u64::BITS - self.size().leading_zeros()
    }

    /// Whether `addr` falls inside the unit's addressable span.
    fn contains(&self, addr: u64) -> bool {
        addr < self.size()
    }
}

/// Shared-ownership handle to a mounted unit.
///
/// A single unit may be referenced from multiple parents (aliased at two
/// addresses, say); parents own the address slot entry, never the unit's
/// data, so sharing is reference-counted rather than deep-copied.
pub type MountHandle = Rc<RefCell<dyn Mount>>;

/// Wraps a concrete unit into a [`MountHandle`].
pub fn mount<M: Mount + 'static>(unit: M) -> MountHandle {
    Rc::new(RefCell::new(unit))
}
