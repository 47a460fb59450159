//! Leaf register variants. Each occupies exactly one address slot.

use std::cell::Cell;
use std::rc::Rc;

use crate::mount::{Meta, Mount};
use crate::order::{ByteOrder, RegValue};

/// Write behavior supplied to a [`CallbackRegister`].
pub type WriteHook = Box<dyn FnMut(&[u8], ByteOrder) -> Option<usize>>;

/// Read behavior supplied to a [`CallbackRegister`].
pub type ReadHook = Box<dyn FnMut(&mut [u8], ByteOrder) -> Option<usize>>;

/// A single-slot register whose read and write behaviors are independently
/// supplied callables. A missing hook makes that direction unsupported, which
/// also covers write-only, read-only and reserved registers.
pub struct CallbackRegister {
    meta: Meta,
    write_hook: Option<WriteHook>,
    read_hook: Option<ReadHook>,
}

impl CallbackRegister {
    pub fn read_write(meta: Meta, write_hook: WriteHook, read_hook: ReadHook) -> Self {
        Self {
            meta,
            write_hook: Some(write_hook),
            read_hook: Some(read_hook),
        }
    }

    pub fn write_only(meta: Meta, write_hook: WriteHook) -> Self {
        Self {
            meta,
            write_hook: Some(write_hook),
            read_hook: None,
        }
    }

    pub fn read_only(meta: Meta, read_hook: ReadHook) -> Self {
        Self {
            meta,
            write_hook: None,
            read_hook: Some(read_hook),
        }
    }

    /// A register that fails every access in both directions.
    pub fn reserved(meta: Meta) -> Self {
        Self {
            meta,
            write_hook: None,
            read_hook: None,
        }
    }

    pub fn write(&mut self, bytes: &[u8], order: ByteOrder) -> Option<usize> {
        self.write_hook.as_mut().and_then(|hook| hook(bytes, order))
    }

    pub fn read(&mut self, bytes: &mut [u8], order: ByteOrder) -> Option<usize> {
        self.read_hook.as_mut().and_then(|hook| hook(bytes, order))
    }
}

impl Mount for CallbackRegister {
    fn name(&self) -> &str {
        self.meta.name()
    }

    fn description(&self) -> &str {
        self.meta.description()
    }

    fn size(&self) -> u64 {
        1
    }

    fn write_at(&mut self, addr: u64, bytes: &[u8], order: ByteOrder) -> Option<usize> {
        if addr != 0 {
            return None;
        }
        self.write(bytes, order)
    }

    fn read_at(&mut self, addr: u64, bytes: &mut [u8], order: ByteOrder) -> Option<usize> {
        if addr != 0 {
            return None;
        }
        self.read(bytes, order)
    }
}

/// A register bound to caller-owned storage.
///
/// The register holds an `Rc<Cell<T>>` back-reference rather than an owning
/// copy: a write through the register is immediately visible to the owner of
/// the cell, and a direct `Cell::set` is visible to the next read. Integral
/// `T` is marshalled honoring the requested byte order; non-integral `T` is
/// raw-copied (see [`RegValue`]).
pub struct BoundRegister<T: RegValue> {
    meta: Meta,
    target: Rc<Cell<T>>,
    writable: bool,
}

impl<T: RegValue> BoundRegister<T> {
    pub fn new(meta: Meta, target: Rc<Cell<T>>) -> Self {
        Self {
            meta,
            target,
            writable: true,
        }
    }

    /// A bound register exposing only the read path.
    pub fn read_only(meta: Meta, target: Rc<Cell<T>>) -> Self {
        Self {
            meta,
            target,
            writable: false,
        }
    }

    pub fn write(&mut self, bytes: &[u8], order: ByteOrder) -> Option<usize> {
        if !self.writable || bytes.len() < T::WIDTH {
            return None;
        }
        self.target.set(T::load(bytes, order));
        Some(T::WIDTH)
    }

    pub fn read(&mut self, bytes: &mut [u8], order: ByteOrder) -> Option<usize> {
        if bytes.len() < T::WIDTH {
            return None;
        }
        self.target.get().store(bytes, order);
        Some(T::WIDTH)
    }
}

impl<T: RegValue> Mount for BoundRegister<T> {
    fn name(&self) -> &str {
        self.meta.name()
    }

    fn description(&self) -> &str {
        self.meta.description()
    }

    fn size(&self) -> u64 {
        1
    }

    fn write_at(&mut self, addr: u64, bytes: &[u8], order: ByteOrder) -> Option<usize> {
        if addr != 0 {
            return None;
        }
        self.write(bytes, order)
    }

    fn read_at(&mut self, addr: u64, bytes: &mut [u8], order: ByteOrder) -> Option<usize> {
        if addr != 0 {
            return None;
        }
        self.read(bytes, order)
    }
}

/// A register holding an immutable value. Reads copy the value out; writes
/// always fail.
pub struct ConstRegister<T: RegValue> {
    meta: Meta,
    value: T,
}

impl<T: RegValue> ConstRegister<T> {
    pub fn new(meta: Meta, value: T) -> Self {
        Self { meta, value }
    }

    pub fn read(&mut self, bytes: &mut [u8], order: ByteOrder) -> Option<usize> {
        if bytes.len() < T::WIDTH {
            return None;
        }
        self.value.store(bytes, order);
        Some(T::WIDTH)
    }
}

impl<T: RegValue> Mount for ConstRegister<T> {
    fn name(&self) -> &str {
        self.meta.name()
    }

    fn description(&self) -> &str {
        self.meta.description()
    }

    fn size(&self) -> u64 {
        1
    }

    fn write_at(&mut self, _addr: u64, _bytes: &[u8], _order: ByteOrder) -> Option<usize> {
        None
    }

    fn read_at(&mut self, addr: u64, bytes: &mut [u8], order: ByteOrder) -> Option<usize> {
        if addr != 0 {
            return None;
        }
        self.read(bytes, order)
    }
}
