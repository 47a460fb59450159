//! End-to-end composition: builders, banks, maps, aliasing.

use std::cell::Cell;
use std::rc::Rc;

use regmount::{
    mount, BankBuilder, ByteOrder, MapBuilder, MapError, Mount, RegisterBuilder,
};

const NATIVE: ByteOrder = ByteOrder::NATIVE;

#[test]
fn three_slot_bank_scenario() {
    let a = Rc::new(Cell::new(0u32));
    let b = Rc::new(Cell::new(1u32));

    let mut bank = BankBuilder::new("range")
        .describe("desc")
        .mount(RegisterBuilder::new("a").bind(a.clone()))
        .mount(RegisterBuilder::new("b").bind(b.clone()))
        .mount(RegisterBuilder::new("c").build_reserved())
        .build();

    assert_eq!(bank.name(), "range");
    assert_eq!(bank.description(), "desc");
    assert_eq!(bank.size(), 3);
    assert_eq!(bank.mask(), 3);
    assert_eq!(bank.mask_width(), 2);

    // Writing the native encoding of 2 at address 0 sets `a` and returns 4.
    assert_eq!(bank.write_at(0, &2u32.to_ne_bytes(), NATIVE), Some(4));
    assert_eq!(a.get(), 2);

    // Reading address 1 returns the encoding of `b`.
    let mut buf = [0u8; 4];
    assert_eq!(bank.read_at(1, &mut buf, NATIVE), Some(4));
    assert_eq!(u32::from_ne_bytes(buf), 1);

    // The reserved slot fails both directions.
    assert_eq!(bank.write_at(2, &buf, NATIVE), None);
    assert_eq!(bank.read_at(2, &mut buf, NATIVE), None);

    // Any access at address 3 or beyond fails.
    assert_eq!(bank.read_at(3, &mut buf, NATIVE), None);
    assert_eq!(bank.write_at(4, &buf, NATIVE), None);
}

#[test]
fn device_model_with_nested_regions() {
    // A small "peripheral": an id block and a control block mapped into one
    // address space, one of the registers aliased into both blocks.
    let irq_mask = Rc::new(Cell::new(0u32));
    let shared = RegisterBuilder::new("irq_mask").bind(irq_mask.clone());

    let id_block = BankBuilder::new("id")
        .mount(RegisterBuilder::new("device_id").constant(0x1234_5678u32))
        .mount(RegisterBuilder::new("revision").constant(0x2u32))
        .mount(shared.clone())
        .build();

    let ctrl_block = BankBuilder::new("ctrl")
        .mount(shared)
        .gap()
        .mount(
            RegisterBuilder::new("scratch").bind(Rc::new(Cell::new(0u32))),
        )
        .build();

    let mut space = MapBuilder::new("periph")
        .describe("demo peripheral")
        .at(0x00, mount(id_block))
        .at(0x10, mount(ctrl_block))
        .build()
        .unwrap();

    assert_eq!(space.size(), 0x13);
    assert_eq!(space.mask(), 0x1F);
    assert_eq!(space.mask_width(), 5);

    // Constant register reads back the id; writing it fails.
    let mut buf = [0u8; 4];
    assert_eq!(space.read_at(0x00, &mut buf, NATIVE), Some(4));
    assert_eq!(u32::from_ne_bytes(buf), 0x1234_5678);
    assert_eq!(space.write_at(0x00, &buf, NATIVE), None);

    // The aliased register is one unit: writing through the ctrl block is
    // visible through the id block and through the bound cell.
    assert_eq!(space.write_at(0x10, &0xFFu32.to_ne_bytes(), NATIVE), Some(4));
    assert_eq!(irq_mask.get(), 0xFF);
    assert_eq!(space.read_at(0x02, &mut buf, NATIVE), Some(4));
    assert_eq!(u32::from_ne_bytes(buf), 0xFF);

    // The gap inside the ctrl block and the gap between blocks both miss.
    assert_eq!(space.read_at(0x11, &mut buf, NATIVE), None);
    assert_eq!(space.read_at(0x08, &mut buf, NATIVE), None);

    // Swapped-order read of the id register byte-swaps the value.
    let swapped = if ByteOrder::NATIVE == ByteOrder::Little {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    };
    assert_eq!(space.read_at(0x00, &mut buf, swapped), Some(4));
    assert_eq!(u32::from_ne_bytes(buf), 0x1234_5678u32.swap_bytes());
}

#[test]
fn write_only_and_custom_hooks_compose() {
    let last_command = Rc::new(Cell::new(0u8));

    let mut bank = BankBuilder::new("cmd")
        .mount(RegisterBuilder::new("doorbell").build_wo(Box::new({
            let last_command = last_command.clone();
            move |bytes, _order| {
                last_command.set(*bytes.first()?);
                Some(1)
            }
        })))
        .mount(RegisterBuilder::new("busy").build_ro(Box::new(|bytes, _order| {
            *bytes.first_mut()? = 0;
            Some(1)
        })))
        .build();

    assert_eq!(bank.write_at(0, &[0x5A], NATIVE), Some(1));
    assert_eq!(last_command.get(), 0x5A);

    let mut buf = [0xFFu8];
    assert_eq!(bank.read_at(0, &mut buf, NATIVE), None);
    assert_eq!(bank.read_at(1, &mut buf, NATIVE), Some(1));
    assert_eq!(buf[0], 0);
    assert_eq!(bank.write_at(1, &buf, NATIVE), None);
}

#[test]
fn overlapping_regions_fail_construction() {
    let wide = BankBuilder::new("wide")
        .mount(RegisterBuilder::new("w0").constant(0u8))
        .mount(RegisterBuilder::new("w1").constant(0u8))
        .mount(RegisterBuilder::new("w2").constant(0u8))
        .build();

    let err = MapBuilder::new("space")
        .at(0x4, mount(wide))
        .at(0x6, RegisterBuilder::new("x").constant(0u8))
        .build()
        .unwrap_err();

    assert!(matches!(err, MapError::Overlap { .. }));
    // Display carries the colliding spans for diagnostics.
    assert!(err.to_string().contains("overlap"));
}

#[test]
fn adjacent_regions_are_accepted() {
    let first = BankBuilder::new("first")
        .mount(RegisterBuilder::new("a").constant(1u8))
        .mount(RegisterBuilder::new("b").constant(2u8))
        .build();
    let second = BankBuilder::new("second")
        .mount(RegisterBuilder::new("c").constant(3u8))
        .build();

    let mut space = MapBuilder::new("space")
        .at(0, mount(first))
        .at(2, mount(second))
        .build()
        .unwrap();

    assert_eq!(space.size(), 3);
    let mut buf = [0u8];
    for (addr, expect) in [(0u64, 1u8), (1, 2), (2, 3)] {
        assert_eq!(space.read_at(addr, &mut buf, NATIVE), Some(1));
        assert_eq!(buf[0], expect);
    }
    assert_eq!(space.read_at(3, &mut buf, NATIVE), None);
}
