//! Fluent assembly helpers.
//!
//! Pure convenience over the constructors in [`reg`](crate::reg),
//! [`bank`](crate::bank) and [`map`](crate::map); no additional semantics.

use std::cell::Cell;
use std::rc::Rc;

use crate::bank::RegisterBank;
use crate::map::{AddressMap, MapEntry, MapError};
use crate::mount::{mount, Meta, MountHandle};
use crate::order::RegValue;
use crate::reg::{BoundRegister, CallbackRegister, ConstRegister, ReadHook, WriteHook};

/// Builds single-slot registers carrying a name and description.
pub struct RegisterBuilder {
    name: String,
    description: String,
}

impl RegisterBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    fn meta(self) -> Meta {
        Meta::new(self.name, self.description)
    }

    pub fn build_rw(self, write_hook: WriteHook, read_hook: ReadHook) -> MountHandle {
        mount(CallbackRegister::read_write(self.meta(), write_hook, read_hook))
    }

    pub fn build_wo(self, write_hook: WriteHook) -> MountHandle {
        mount(CallbackRegister::write_only(self.meta(), write_hook))
    }

    pub fn build_ro(self, read_hook: ReadHook) -> MountHandle {
        mount(CallbackRegister::read_only(self.meta(), read_hook))
    }

    pub fn build_reserved(self) -> MountHandle {
        mount(CallbackRegister::reserved(self.meta()))
    }

    /// Binds caller-owned storage, read-write.
    pub fn bind<T: RegValue + 'static>(self, target: Rc<Cell<T>>) -> MountHandle {
        mount(BoundRegister::new(self.meta(), target))
    }

    /// Binds caller-owned storage, read path only.
    pub fn bind_read_only<T: RegValue + 'static>(self, target: Rc<Cell<T>>) -> MountHandle {
        mount(BoundRegister::read_only(self.meta(), target))
    }

    pub fn constant<T: RegValue + 'static>(self, value: T) -> MountHandle {
        mount(ConstRegister::new(self.meta(), value))
    }
}

/// Accumulates slots for a [`RegisterBank`].
pub struct BankBuilder {
    name: String,
    description: String,
    slots: Vec<Option<MountHandle>>,
}

impl BankBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            slots: Vec::new(),
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends a mounted slot.
    pub fn mount(mut self, unit: MountHandle) -> Self {
        self.slots.push(Some(unit));
        self
    }

    /// Appends an unmounted slot that fails every access.
    pub fn gap(mut self) -> Self {
        self.slots.push(None);
        self
    }

    pub fn build(self) -> RegisterBank {
        RegisterBank::new(Meta::new(self.name, self.description), self.slots)
    }
}

/// Accumulates offset entries for an [`AddressMap`].
pub struct MapBuilder {
    name: String,
    description: String,
    entries: Vec<MapEntry>,
}

impl MapBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            entries: Vec::new(),
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mounts `unit` at `offset`. Entries may be added in any order; the map
    /// sorts and validates them at [`build`](Self::build).
    pub fn at(mut self, offset: u64, unit: MountHandle) -> Self {
        self.entries.push(MapEntry::new(offset, unit));
        self
    }

    pub fn build(self) -> Result<AddressMap, MapError> {
        AddressMap::new(Meta::new(self.name, self.description), self.entries)
    }
}
