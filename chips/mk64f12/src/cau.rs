//! Memory-Mapped Cryptographic Acceleration Unit (CAU).
//!
//! Writing a command group register issues that command against the CAU
//! register named by its position: `casr`, `caa`, then `ca[0..9]`. The
//! `direct` window takes raw CAU opcodes.

use tock_registers::registers::{ReadOnly, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

/// General purpose registers `CA0`-`CA8`.
pub const NUM_CA: usize = 9;

register_structs! {
    pub Registers {
        /// Direct access
        (0x000 => pub direct: [WriteOnly<u32>; 16]),
        (0x040 => _reserved0),
        /// Load register
        (0x840 => pub ldr: CommandGroup),
        (0x86C => _reserved1),
        /// Store register
        (0x880 => pub str: StoreGroup),
        (0x8AC => _reserved2),
        /// Add to register
        (0x8C0 => pub adr: CommandGroup),
        (0x8EC => _reserved3),
        /// Reverse and add to register
        (0x900 => pub radr: CommandGroup),
        (0x92C => _reserved4),
        /// Exclusive OR
        (0x980 => pub xor: CommandGroup),
        (0x9AC => _reserved5),
        /// Rotate left
        (0x9C0 => pub rotl: CommandGroup),
        (0x9EC => _reserved6),
        /// AES column operation
        (0xB00 => pub aesc: CommandGroup),
        (0xB2C => _reserved7),
        /// AES inverse column operation
        (0xB40 => pub aesic: CommandGroup),
        (0xB6C => @END),
    },

    /// Write-only window for one command, one word per CAU register.
    pub CommandGroup {
        (0x00 => pub casr: WriteOnly<u32, Status::Register>),
        (0x04 => pub caa: WriteOnly<u32>),
        (0x08 => pub ca: [WriteOnly<u32>; NUM_CA]),
        (0x2C => @END),
    },

    /// Read-only window returning each CAU register.
    pub StoreGroup {
        (0x00 => pub casr: ReadOnly<u32, Status::Register>),
        (0x04 => pub caa: ReadOnly<u32>),
        (0x08 => pub ca: [ReadOnly<u32>; NUM_CA]),
        (0x2C => @END),
    }
}

register_bitfields![u32,
    /// Status register
    pub Status [
        /// CAU version
        VER OFFSET(28) NUMBITS(4) [
            Initial = 1,
            Second = 2
        ],
        /// DES parity error
        DPE OFFSET(1) NUMBITS(1) [],
        /// Illegal command
        IC OFFSET(0) NUMBITS(1) []
    ]
];

pub const CAU_BASE: usize = 0xE008_1000;

pub const CAU: StaticRef<Registers> = unsafe { StaticRef::new(CAU_BASE as *const Registers) };

pub const CAU_BASE_ADDRS: [usize; 1] = [CAU_BASE];
pub const CAU_BASE_PTRS: [StaticRef<Registers>; 1] = [CAU];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[test]
    fn command_groups() {
        assert_eq!(size_of::<CommandGroup>(), 0x2C);
        assert_eq!(offset_of!(Registers, ldr), 0x840);
        assert_eq!(offset_of!(Registers, str), 0x880);
        assert_eq!(offset_of!(Registers, xor), 0x980);
        assert_eq!(offset_of!(Registers, aesic), 0xB40);
        assert_eq!(offset_of!(Registers, aesic) + offset_of!(CommandGroup, ca), 0xB48);
        assert_eq!(size_of::<Registers>(), 0xB6C);
    }
}
