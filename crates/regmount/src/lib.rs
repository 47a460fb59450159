//! Composable byte-addressable register spaces for device models and test
//! harnesses.
//!
//! A register space is a tree of [`Mount`]s. Leaf registers decide how each
//! access is serviced — caller-bound storage ([`BoundRegister`]), a fixed
//! value ([`ConstRegister`]), custom hooks or reserved slots
//! ([`CallbackRegister`]) — and are composed through dense, index-addressed
//! [`RegisterBank`]s and sparse, offset-addressed [`AddressMap`]s. Accesses
//! carry raw byte buffers plus a [`ByteOrder`]; every transfer is
//! all-or-nothing, and all failures surface as `None`.
//!
//! There is no real backing store and no concurrency model: everything is a
//! direct, synchronous computation over in-memory buffers, intended for
//! simulating memory-mapped peripherals.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use regmount::{BankBuilder, ByteOrder, Mount, RegisterBuilder};
//!
//! let status = Rc::new(Cell::new(0u32));
//! let mut bank = BankBuilder::new("ctrl")
//!     .mount(RegisterBuilder::new("status").bind(status.clone()))
//!     .gap()
//!     .build();
//!
//! assert_eq!(bank.size(), 2);
//! assert_eq!(bank.write_at(0, &7u32.to_ne_bytes(), ByteOrder::NATIVE), Some(4));
//! assert_eq!(status.get(), 7);
//! ```

pub mod bank;
pub mod builder;
pub mod map;
pub mod mount;
pub mod order;
pub mod reg;

pub use bank::RegisterBank;
pub use builder::{BankBuilder, MapBuilder, RegisterBuilder};
pub use map::{AddressMap, MapEntry, MapError};
pub use mount::{mount, Meta, Mount, MountHandle};
pub use order::{ByteOrder, RegValue};
pub use reg::{BoundRegister, CallbackRegister, ConstRegister, ReadHook, WriteHook};
