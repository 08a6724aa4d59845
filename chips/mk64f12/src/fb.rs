//! FlexBus external bus interface (FB).

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const NUM_CHIP_SELECTS: usize = 6;

register_structs! {
    /// FlexBus memory map.
    pub Registers {
        (0x00 => pub cs: [ChipSelect; NUM_CHIP_SELECTS]),
        (0x48 => _reserved0),
        /// Chip Select Port Multiplexing Control
        (0x60 => pub cspmcr: ReadWrite<u32, PinMultiplexingControl::Register>),
        (0x64 => @END),
    },

    pub ChipSelect {
        /// Chip Select Address
        (0x0 => pub csar: ReadWrite<u32, ChipSelectAddress::Register>),
        /// Chip Select Mask
        (0x4 => pub csmr: ReadWrite<u32, ChipSelectMask::Register>),
        /// Chip Select Control
        (0x8 => pub cscr: ReadWrite<u32, ChipSelectControl::Register>),
        (0xC => @END),
    }
}

register_bitfields![u32,
    pub ChipSelectAddress [
        /// Base Address, upper half of the decoded range
        BA OFFSET(16) NUMBITS(16) []
    ],
    pub ChipSelectMask [
        /// Base Address Mask
        BAM OFFSET(16) NUMBITS(16) [],
        /// Write Protect
        WP OFFSET(8) NUMBITS(1) [],
        /// Valid
        V OFFSET(0) NUMBITS(1) []
    ],
    pub ChipSelectControl [
        /// Secondary Wait States
        SWS OFFSET(26) NUMBITS(6) [],
        SWSEN OFFSET(23) NUMBITS(1) [],
        /// Extended Transfer Start/Extended Address Latch Enable
        EXTS OFFSET(22) NUMBITS(1) [],
        /// Address Setup
        ASET OFFSET(20) NUMBITS(2) [],
        /// Read Address Hold or Deselect
        RDAH OFFSET(18) NUMBITS(2) [],
        /// Write Address Hold or Deselect
        WRAH OFFSET(16) NUMBITS(2) [],
        /// Wait States
        WS OFFSET(10) NUMBITS(6) [],
        /// Byte-Lane Shift
        BLS OFFSET(9) NUMBITS(1) [],
        /// Auto-Acknowledge Enable
        AA OFFSET(8) NUMBITS(1) [],
        /// Port Size
        PS OFFSET(6) NUMBITS(2) [
            Bits32 = 0,
            Bits8 = 1,
            Bits16 = 2
        ],
        /// Byte-Enable Mode
        BEM OFFSET(5) NUMBITS(1) [],
        /// Burst-Read Enable
        BSTR OFFSET(4) NUMBITS(1) [],
        /// Burst-Write Enable
        BSTW OFFSET(3) NUMBITS(1) []
    ],
    pub PinMultiplexingControl [
        GROUP1 OFFSET(28) NUMBITS(4) [],
        GROUP2 OFFSET(24) NUMBITS(4) [],
        GROUP3 OFFSET(20) NUMBITS(4) [],
        GROUP4 OFFSET(16) NUMBITS(4) [],
        GROUP5 OFFSET(12) NUMBITS(4) []
    ]
];

pub const FB_BASE: usize = 0x4000_C000;

pub const FB: StaticRef<Registers> = unsafe { StaticRef::new(FB_BASE as *const Registers) };

pub const FB_BASE_ADDRS: [usize; 1] = [FB_BASE];
pub const FB_BASE_PTRS: [StaticRef<Registers>; 1] = [FB];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};

    #[repr(C, align(4))]
    struct Backing([u8; 0x64]);

    #[test]
    fn chip_selects_are_twelve_bytes_apart() {
        assert_eq!(size_of::<ChipSelect>(), 0xC);
        assert_eq!(offset_of!(Registers, cspmcr), 0x60);

        let mut backing = Backing([0; 0x64]);
        {
            let regs = unsafe { &*(backing.0.as_mut_ptr() as *const Registers) };
            regs.cs[1].csar.write(ChipSelectAddress::BA.val(0x6000));
            regs.cs[1].csmr.write(ChipSelectMask::BAM.val(0x7) + ChipSelectMask::V::SET);
            regs.cs[5].cscr.write(ChipSelectControl::PS::Bits16 + ChipSelectControl::WS.val(3));
            assert!(regs.cs[1].csmr.is_set(ChipSelectMask::V));
            assert_eq!(regs.cs[0].csar.get(), 0);
        }
        assert_eq!(&backing.0[0xC..0x10], &[0, 0, 0x00, 0x60]);
        assert_eq!(&backing.0[0x10..0x14], &[0x01, 0, 0x07, 0]);
        assert_eq!(&backing.0[0x44..0x46], &[0x80, 0x0C]);
    }
}
