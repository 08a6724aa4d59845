//! Flash Memory Controller (FMC).
//!
//! Controls the flash prefetch buffers and cache, and exposes the cache tag
//! and data arrays for diagnostics.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

/// Cache ways.
pub const NUM_WAYS: usize = 4;
/// Sets per way.
pub const NUM_SETS: usize = 4;

register_structs! {
    /// FMC registers.
    pub Registers {
        (0x000 => pub pfapr: ReadWrite<u32, AccessProtection::Register>),
        (0x004 => pub pfb0cr: ReadWrite<u32, FlashBank01Control::Register>),
        (0x008 => pub pfb1cr: ReadWrite<u32, FlashBank23Control::Register>),
        (0x00C => _reserved0),
        /// Cache tag storage, indexed `[way][set]`
        (0x100 => pub tagvd: [[ReadWrite<u32, CacheTag::Register>; NUM_SETS]; NUM_WAYS]),
        (0x140 => _reserved1),
        /// Cache data storage, indexed `[way][set]`
        (0x200 => pub data: [[CacheLine; NUM_SETS]; NUM_WAYS]),
        (0x300 => @END),
    },

    /// One 128-bit cache line, most significant word first.
    pub CacheLine {
        (0x0 => pub um: ReadWrite<u32>),
        (0x4 => pub mu: ReadWrite<u32>),
        (0x8 => pub ml: ReadWrite<u32>),
        (0xC => pub lm: ReadWrite<u32>),
        (0x10 => @END),
    }
}

register_bitfields![u32,
    pub AccessProtection [
        M7PFD OFFSET(23) NUMBITS(1) [],
        M6PFD OFFSET(22) NUMBITS(1) [],
        M5PFD OFFSET(21) NUMBITS(1) [],
        M4PFD OFFSET(20) NUMBITS(1) [],
        M3PFD OFFSET(19) NUMBITS(1) [],
        M2PFD OFFSET(18) NUMBITS(1) [],
        M1PFD OFFSET(17) NUMBITS(1) [],
        /// Master 0 prefetch disable
        M0PFD OFFSET(16) NUMBITS(1) [],
        M7AP OFFSET(14) NUMBITS(2) [
            NoAccess = 0,
            ReadOnly = 1,
            WriteOnly = 2,
            ReadWrite = 3
        ],
        M6AP OFFSET(12) NUMBITS(2) [
            NoAccess = 0,
            ReadOnly = 1,
            WriteOnly = 2,
            ReadWrite = 3
        ],
        M5AP OFFSET(10) NUMBITS(2) [
            NoAccess = 0,
            ReadOnly = 1,
            WriteOnly = 2,
            ReadWrite = 3
        ],
        M4AP OFFSET(8) NUMBITS(2) [
            NoAccess = 0,
            ReadOnly = 1,
            WriteOnly = 2,
            ReadWrite = 3
        ],
        M3AP OFFSET(6) NUMBITS(2) [
            NoAccess = 0,
            ReadOnly = 1,
            WriteOnly = 2,
            ReadWrite = 3
        ],
        M2AP OFFSET(4) NUMBITS(2) [
            NoAccess = 0,
            ReadOnly = 1,
            WriteOnly = 2,
            ReadWrite = 3
        ],
        M1AP OFFSET(2) NUMBITS(2) [
            NoAccess = 0,
            ReadOnly = 1,
            WriteOnly = 2,
            ReadWrite = 3
        ],
        /// Master 0 access protection
        M0AP OFFSET(0) NUMBITS(2) [
            NoAccess = 0,
            ReadOnly = 1,
            WriteOnly = 2,
            ReadWrite = 3
        ]
    ],
    pub FlashBank01Control [
        /// Bank 0 read wait state control, read only
        B0RWSC OFFSET(28) NUMBITS(4) [],
        /// Cache lock way x
        CLCK_WAY OFFSET(24) NUMBITS(4) [],
        /// Cache invalidate way x
        CINV_WAY OFFSET(20) NUMBITS(4) [],
        /// Invalidate prefetch speculation buffer
        S_B_INV OFFSET(19) NUMBITS(1) [],
        /// Bank 0 memory width, read only
        B0MW OFFSET(17) NUMBITS(2) [
            Width32 = 0,
            Width64 = 1,
            Width128 = 2
        ],
        /// Cache replacement control
        CRC OFFSET(5) NUMBITS(3) [
            LruAllWays = 0,
            LruIfetch01Data23 = 2,
            LruIfetch012Data3 = 3
        ],
        /// Bank 0 data cache enable
        B0DCE OFFSET(4) NUMBITS(1) [],
        /// Bank 0 instruction cache enable
        B0ICE OFFSET(3) NUMBITS(1) [],
        /// Bank 0 data prefetch enable
        B0DPE OFFSET(2) NUMBITS(1) [],
        /// Bank 0 instruction prefetch enable
        B0IPE OFFSET(1) NUMBITS(1) [],
        /// Bank 0 single entry buffer enable
        B0SEBE OFFSET(0) NUMBITS(1) []
    ],
    pub FlashBank23Control [
        B1RWSC OFFSET(28) NUMBITS(4) [],
        B1MW OFFSET(17) NUMBITS(2) [
            Width32 = 0,
            Width64 = 1,
            Width128 = 2
        ],
        B1DCE OFFSET(4) NUMBITS(1) [],
        B1ICE OFFSET(3) NUMBITS(1) [],
        B1DPE OFFSET(2) NUMBITS(1) [],
        B1IPE OFFSET(1) NUMBITS(1) [],
        B1SEBE OFFSET(0) NUMBITS(1) []
    ],
    pub CacheTag [
        /// 14-bit cache tag
        TAG OFFSET(5) NUMBITS(14) [],
        /// Valid bit
        VALID OFFSET(0) NUMBITS(1) []
    ]
];

pub const FMC_BASE: usize = 0x4001_F000;

pub const FMC: StaticRef<Registers> = unsafe { StaticRef::new(FMC_BASE as *const Registers) };

pub const FMC_BASE_ADDRS: [usize; 1] = [FMC_BASE];
pub const FMC_BASE_PTRS: [StaticRef<Registers>; 1] = [FMC];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;

    #[test]
    fn cache_arrays() {
        assert_eq!(offset_of!(Registers, tagvd), 0x100);
        assert_eq!(offset_of!(Registers, data), 0x200);
        assert_eq!(core::mem::size_of::<CacheLine>(), 0x10);
        assert_eq!(CacheTag::TAG.mask << CacheTag::TAG.shift, 0x0007_FFE0);
    }
}
