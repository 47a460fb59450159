//! Sparse, offset-addressed composition.

use std::rc::Rc;

use thiserror::Error;

use crate::mount::{Meta, Mount, MountHandle};
use crate::order::ByteOrder;

/// Errors rejecting an [`AddressMap`] at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// Two entries' half-open spans `[offset, offset + size)` intersect.
    /// Overlap would make lookups over the shared span ambiguous, so it is
    /// rejected up front.
    #[error(
        "map entries overlap: prev=[{prev_offset:#x}..{prev_end:#x}) next offset {offset:#x}"
    )]
    Overlap {
        prev_offset: u64,
        prev_end: u64,
        offset: u64,
    },
    /// An entry's span does not fit in the address type.
    #[error("map entry span overflows: offset={offset:#x} size={size:#x}")]
    AddressOverflow { offset: u64, size: u64 },
}

/// A unit mounted at a fixed offset of the parent address space.
pub struct MapEntry {
    pub offset: u64,
    pub unit: MountHandle,
}

impl MapEntry {
    pub fn new(offset: u64, unit: MountHandle) -> Self {
        Self { offset, unit }
    }
}

/// Named, independently-sized units overlaid into one address space at
/// arbitrary, non-overlapping offsets.
///
/// Entries are sorted by offset once at construction; each access is a
/// binary search plus the cost of the recursive delegate. Entries may
/// themselves be banks or maps, so composition nests to arbitrary depth.
pub struct AddressMap {
    meta: Meta,
    // Sorted by offset, spans validated disjoint.
    entries: Vec<MapEntry>,
}

impl std::fmt::Debug for AddressMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Units are `dyn Mount` and not `Debug`; report names and offsets.
        f.debug_struct("AddressMap")
            .field("name", &self.meta.name())
            .field(
                "entries",
                &self
                    .entries
                    .iter()
                    .map(|entry| (entry.offset, entry.unit.borrow().name().to_owned()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl AddressMap {
    /// Sorts `entries` by offset and validates that no two spans overlap.
    pub fn new(meta: Meta, mut entries: Vec<MapEntry>) -> Result<Self, MapError> {
        entries.sort_by_key(|entry| entry.offset);

        let mut prev: Option<(u64, u64)> = None;
        for entry in &entries {
            let size = entry.unit.borrow().size();
            let end = entry
                .offset
                .checked_add(size)
                .ok_or(MapError::AddressOverflow {
                    offset: entry.offset,
                    size,
                })?;
            if let Some((prev_offset, prev_end)) = prev {
                if entry.offset < prev_end {
                    tracing::debug!(
                        map = meta.name(),
                        offset = entry.offset,
                        prev_end,
                        "rejecting overlapping map entry"
                    );
                    return Err(MapError::Overlap {
                        prev_offset,
                        prev_end,
                        offset: entry.offset,
                    });
                }
            }
            prev = Some((entry.offset, end));
        }

        Ok(Self { meta, entries })
    }

    /// Locates the entry containing `addr`.
    ///
    /// Predecessor search over the sorted offsets, then a containment check
    /// so addresses in a gap between entries miss.
    pub fn find(&self, addr: u64) -> Option<&MapEntry> {
        let idx = self
            .entries
            .partition_point(|entry| entry.offset <= addr)
            .checked_sub(1)?;
        let entry = &self.entries[idx];
        (addr - entry.offset < entry.unit.borrow().size()).then_some(entry)
    }

    /// The entries in offset order.
    pub fn entries(&self) -> &[MapEntry] {
        &self.entries
    }
}

impl Mount for AddressMap {
    fn name(&self) -> &str {
        self.meta.name()
    }

    fn description(&self) -> &str {
        self.meta.description()
    }

    /// Highest addressed point: last entry's `offset + size`, or 0 when
    /// empty. An upper bound, not a tight occupied span.
    fn size(&self) -> u64 {
        match self.entries.last() {
            // No overflow: spans were validated at construction.
            Some(entry) => entry.offset + entry.unit.borrow().size(),
            None => 0,
        }
    }

    fn write_at(&mut self, addr: u64, bytes: &[u8], order: ByteOrder) -> Option<usize> {
        let Some(entry) = self.find(addr) else {
            tracing::trace!(map = self.meta.name(), addr, "write missed every mapped span");
            return None;
        };
        let offset = entry.offset;
        let unit = Rc::clone(&entry.unit);
        let result = unit.borrow_mut().write_at(addr - offset, bytes, order);
        result
    }

    fn read_at(&mut self, addr: u64, bytes: &mut [u8], order: ByteOrder) -> Option<usize> {
        let Some(entry) = self.find(addr) else {
            tracing::trace!(map = self.meta.name(), addr, "read missed every mapped span");
            return None;
        };
        let offset = entry.offset;
        let unit = Rc::clone(&entry.unit);
        let result = unit.borrow_mut().read_at(addr - offset, bytes, order);
        result
    }
}
