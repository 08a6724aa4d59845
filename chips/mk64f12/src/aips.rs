//! Peripheral bridge (AIPS-Lite).
//!
//! Each bridge gates access to the peripherals in its 512 KB slot range by
//! bus master and by peripheral slot. `PACRx` covers eight slots, slot 0 in
//! the most significant nibble.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub Registers {
        /// Master privilege register A
        (0x000 => pub mpra: ReadWrite<u32, MasterPrivilege::Register>),
        (0x004 => _reserved0),
        /// Peripheral access control registers
        (0x020 => pub pacra: ReadWrite<u32, PeripheralAccessControl::Register>),
        (0x024 => pub pacrb: ReadWrite<u32, PeripheralAccessControl::Register>),
        (0x028 => pub pacrc: ReadWrite<u32, PeripheralAccessControl::Register>),
        (0x02C => pub pacrd: ReadWrite<u32, PeripheralAccessControl::Register>),
        (0x030 => _reserved1),
        (0x040 => pub pacre: ReadWrite<u32, PeripheralAccessControl::Register>),
        (0x044 => pub pacrf: ReadWrite<u32, PeripheralAccessControl::Register>),
        (0x048 => pub pacrg: ReadWrite<u32, PeripheralAccessControl::Register>),
        (0x04C => pub pacrh: ReadWrite<u32, PeripheralAccessControl::Register>),
        (0x050 => pub pacri: ReadWrite<u32, PeripheralAccessControl::Register>),
        (0x054 => pub pacrj: ReadWrite<u32, PeripheralAccessControl::Register>),
        (0x058 => pub pacrk: ReadWrite<u32, PeripheralAccessControl::Register>),
        (0x05C => pub pacrl: ReadWrite<u32, PeripheralAccessControl::Register>),
        (0x060 => pub pacrm: ReadWrite<u32, PeripheralAccessControl::Register>),
        (0x064 => pub pacrn: ReadWrite<u32, PeripheralAccessControl::Register>),
        (0x068 => pub pacro: ReadWrite<u32, PeripheralAccessControl::Register>),
        (0x06C => pub pacrp: ReadWrite<u32, PeripheralAccessControl::Register>),
        (0x070 => _reserved2),
        (0x080 => pub pacru: ReadWrite<u32, PeripheralAccessControl::Register>),
        (0x084 => @END),
    }
}

register_bitfields![u32,
    pub MasterPrivilege [
        /// Master trusted for reads
        MTR0 OFFSET(30) NUMBITS(1) [],
        /// Master trusted for writes
        MTW0 OFFSET(29) NUMBITS(1) [],
        /// Master privilege level
        MPL0 OFFSET(28) NUMBITS(1) [],
        MTR1 OFFSET(26) NUMBITS(1) [],
        MTW1 OFFSET(25) NUMBITS(1) [],
        MPL1 OFFSET(24) NUMBITS(1) [],
        MTR2 OFFSET(22) NUMBITS(1) [],
        MTW2 OFFSET(21) NUMBITS(1) [],
        MPL2 OFFSET(20) NUMBITS(1) [],
        MTR3 OFFSET(18) NUMBITS(1) [],
        MTW3 OFFSET(17) NUMBITS(1) [],
        MPL3 OFFSET(16) NUMBITS(1) [],
        MTR4 OFFSET(14) NUMBITS(1) [],
        MTW4 OFFSET(13) NUMBITS(1) [],
        MPL4 OFFSET(12) NUMBITS(1) [],
        MTR5 OFFSET(10) NUMBITS(1) [],
        MTW5 OFFSET(9) NUMBITS(1) [],
        MPL5 OFFSET(8) NUMBITS(1) []
    ],
    /// Layout shared by every peripheral access control register
    pub PeripheralAccessControl [
        /// Supervisor protect
        SP0 OFFSET(30) NUMBITS(1) [],
        /// Write protect
        WP0 OFFSET(29) NUMBITS(1) [],
        /// Trusted protect
        TP0 OFFSET(28) NUMBITS(1) [],
        SP1 OFFSET(26) NUMBITS(1) [],
        WP1 OFFSET(25) NUMBITS(1) [],
        TP1 OFFSET(24) NUMBITS(1) [],
        SP2 OFFSET(22) NUMBITS(1) [],
        WP2 OFFSET(21) NUMBITS(1) [],
        TP2 OFFSET(20) NUMBITS(1) [],
        SP3 OFFSET(18) NUMBITS(1) [],
        WP3 OFFSET(17) NUMBITS(1) [],
        TP3 OFFSET(16) NUMBITS(1) [],
        SP4 OFFSET(14) NUMBITS(1) [],
        WP4 OFFSET(13) NUMBITS(1) [],
        TP4 OFFSET(12) NUMBITS(1) [],
        SP5 OFFSET(10) NUMBITS(1) [],
        WP5 OFFSET(9) NUMBITS(1) [],
        TP5 OFFSET(8) NUMBITS(1) [],
        SP6 OFFSET(6) NUMBITS(1) [],
        WP6 OFFSET(5) NUMBITS(1) [],
        TP6 OFFSET(4) NUMBITS(1) [],
        SP7 OFFSET(2) NUMBITS(1) [],
        WP7 OFFSET(1) NUMBITS(1) [],
        TP7 OFFSET(0) NUMBITS(1) []
    ]
];

/// Bit offset of the nibble controlling `slot` (0..=7) in a `PACRx` register.
pub const fn pacr_slot_shift(slot: usize) -> usize {
    28 - 4 * (slot % 8)
}

pub const AIPS0_BASE: usize = 0x4000_0000;
pub const AIPS1_BASE: usize = 0x4008_0000;

pub const AIPS0: StaticRef<Registers> = unsafe { StaticRef::new(AIPS0_BASE as *const Registers) };
pub const AIPS1: StaticRef<Registers> = unsafe { StaticRef::new(AIPS1_BASE as *const Registers) };

pub const AIPS_BASE_ADDRS: [usize; 2] = [AIPS0_BASE, AIPS1_BASE];
pub const AIPS_BASE_PTRS: [StaticRef<Registers>; 2] = [AIPS0, AIPS1];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_nibbles() {
        assert_eq!(PeripheralAccessControl::TP0.shift, pacr_slot_shift(0));
        assert_eq!(PeripheralAccessControl::TP7.shift, pacr_slot_shift(7));
        assert_eq!(PeripheralAccessControl::SP3.shift, pacr_slot_shift(3) + 2);
        assert_eq!(MasterPrivilege::MTR5.shift, 10);
        assert_eq!(MasterPrivilege::MPL0.shift, 28);
    }
}
