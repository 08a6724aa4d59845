//! Cyclic Redundancy Check (CRC).
//!
//! The data, polynomial and control registers may also be accessed 16 or 8
//! bits at a time. [`NarrowRegisters`] and [`ByteRegisters`] overlay the same
//! block with those widths.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    /// CRC memory map.
    pub Registers {
        (0x0 => pub data: ReadWrite<u32, Data::Register>),
        (0x4 => pub gpoly: ReadWrite<u32, Polynomial::Register>),
        (0x8 => pub ctrl: ReadWrite<u32, Control::Register>),
        (0xC => @END),
    },

    /// Half-word view of the CRC block.
    pub NarrowRegisters {
        (0x0 => pub datal: ReadWrite<u16>),
        (0x2 => pub datah: ReadWrite<u16>),
        (0x4 => pub gpolyl: ReadWrite<u16>),
        (0x6 => pub gpolyh: ReadWrite<u16>),
        (0x8 => _reserved0),
        /// Upper byte of `CTRL`
        (0xB => pub ctrlhu: ReadWrite<u8, ControlHighUpper::Register>),
        (0xC => @END),
    },

    /// Byte view of the CRC block.
    pub ByteRegisters {
        (0x0 => pub ll: ReadWrite<u8>),
        (0x1 => pub lu: ReadWrite<u8>),
        (0x2 => pub hl: ReadWrite<u8>),
        (0x3 => pub hu: ReadWrite<u8>),
        (0x4 => pub gpolyll: ReadWrite<u8>),
        (0x5 => pub gpolylu: ReadWrite<u8>),
        (0x6 => pub gpolyhl: ReadWrite<u8>),
        (0x7 => pub gpolyhu: ReadWrite<u8>),
        (0x8 => _reserved0),
        (0xB => pub ctrlhu: ReadWrite<u8, ControlHighUpper::Register>),
        (0xC => @END),
    }
}

register_bitfields![u32,
    pub Data [
        HU OFFSET(24) NUMBITS(8) [],
        HL OFFSET(16) NUMBITS(8) [],
        LU OFFSET(8) NUMBITS(8) [],
        LL OFFSET(0) NUMBITS(8) []
    ],
    pub Polynomial [
        /// Upper half of the 32-bit polynomial, ignored in 16-bit mode
        HIGH OFFSET(16) NUMBITS(16) [],
        LOW OFFSET(0) NUMBITS(16) []
    ],
    pub Control [
        /// Type Of Transpose For Writes
        TOT OFFSET(30) NUMBITS(2) [
            None = 0,
            Bits = 1,
            BitsAndBytes = 2,
            Bytes = 3
        ],
        /// Type Of Transpose For Read
        TOTR OFFSET(28) NUMBITS(2) [
            None = 0,
            Bits = 1,
            BitsAndBytes = 2,
            Bytes = 3
        ],
        /// Complement Read Of CRC Data Register
        FXOR OFFSET(26) NUMBITS(1) [],
        /// Write CRC Data Register As Seed
        WAS OFFSET(25) NUMBITS(1) [],
        /// Width of CRC protocol
        TCRC OFFSET(24) NUMBITS(1) [
            Bits16 = 0,
            Bits32 = 1
        ]
    ]
];

register_bitfields![u8,
    /// `CTRL[31:24]` accessed as a byte
    pub ControlHighUpper [
        TOT OFFSET(6) NUMBITS(2) [
            None = 0,
            Bits = 1,
            BitsAndBytes = 2,
            Bytes = 3
        ],
        TOTR OFFSET(4) NUMBITS(2) [
            None = 0,
            Bits = 1,
            BitsAndBytes = 2,
            Bytes = 3
        ],
        FXOR OFFSET(2) NUMBITS(1) [],
        WAS OFFSET(1) NUMBITS(1) [],
        TCRC OFFSET(0) NUMBITS(1) [
            Bits16 = 0,
            Bits32 = 1
        ]
    ]
];

pub const CRC_BASE: usize = 0x4003_2000;

pub const CRC0: StaticRef<Registers> = unsafe { StaticRef::new(CRC_BASE as *const Registers) };
pub const CRC0_NARROW: StaticRef<NarrowRegisters> =
    unsafe { StaticRef::new(CRC_BASE as *const NarrowRegisters) };
pub const CRC0_BYTES: StaticRef<ByteRegisters> =
    unsafe { StaticRef::new(CRC_BASE as *const ByteRegisters) };

pub const CRC_BASE_ADDRS: [usize; 1] = [CRC_BASE];
pub const CRC_BASE_PTRS: [StaticRef<Registers>; 1] = [CRC0];

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};

    #[repr(C, align(4))]
    struct Backing([u8; 0xC]);

    #[test]
    fn views_alias_the_same_bytes() {
        let mut backing = Backing([0; 0xC]);
        let base = backing.0.as_mut_ptr();
        let wide = unsafe { &*(base as *const Registers) };
        let narrow = unsafe { &*(base as *const NarrowRegisters) };
        let bytes = unsafe { &*(base as *const ByteRegisters) };

        wide.ctrl.modify(Control::TCRC::Bits32 + Control::TOT::Bytes);
        assert!(narrow
            .ctrlhu
            .matches_all(ControlHighUpper::TCRC::Bits32 + ControlHighUpper::TOT::Bytes));

        let word = 0x1122_3344u32.to_ne_bytes();
        wide.data.set(0x1122_3344);
        assert_eq!(narrow.datah.get(), u16::from_ne_bytes([word[2], word[3]]));
        assert_eq!(bytes.ll.get(), word[0]);
        assert_eq!(bytes.hu.get(), word[3]);

        bytes.gpolyhu.set(0x04);
        assert_eq!(wide.gpoly.get(), u32::from_ne_bytes([0, 0, 0, 0x04]));
    }
}
