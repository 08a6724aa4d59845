//! Low-Leakage Wakeup Unit (LLWU).
//!
//! Sixteen external wakeup pins and eight internal module sources can wake
//! the chip from LLS and VLLS modes.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    pub Registers {
        (0x0 => pub pe1: ReadWrite<u8, PinEnable1::Register>),
        (0x1 => pub pe2: ReadWrite<u8, PinEnable2::Register>),
        (0x2 => pub pe3: ReadWrite<u8, PinEnable3::Register>),
        (0x3 => pub pe4: ReadWrite<u8, PinEnable4::Register>),
        (0x4 => pub me: ReadWrite<u8, ModuleEnable::Register>),
        (0x5 => pub f1: ReadWrite<u8, Flag1::Register>),
        (0x6 => pub f2: ReadWrite<u8, Flag2::Register>),
        (0x7 => pub f3: ReadWrite<u8, Flag3::Register>),
        (0x8 => pub filt1: ReadWrite<u8, PinFilter::Register>),
        (0x9 => pub filt2: ReadWrite<u8, PinFilter::Register>),
        (0xA => pub rst: ReadWrite<u8, ResetEnable::Register>),
        (0xB => @END),
    }
}

register_bitfields![u8,
    /// Wakeup pin enables
    pub PinEnable1 [
        WUPE3 OFFSET(6) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            AnyEdge = 3
        ],
        WUPE2 OFFSET(4) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            AnyEdge = 3
        ],
        WUPE1 OFFSET(2) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            AnyEdge = 3
        ],
        WUPE0 OFFSET(0) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            AnyEdge = 3
        ]
    ],
    pub PinEnable2 [
        WUPE7 OFFSET(6) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            AnyEdge = 3
        ],
        WUPE6 OFFSET(4) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            AnyEdge = 3
        ],
        WUPE5 OFFSET(2) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            AnyEdge = 3
        ],
        WUPE4 OFFSET(0) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            AnyEdge = 3
        ]
    ],
    pub PinEnable3 [
        WUPE11 OFFSET(6) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            AnyEdge = 3
        ],
        WUPE10 OFFSET(4) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            AnyEdge = 3
        ],
        WUPE9 OFFSET(2) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            AnyEdge = 3
        ],
        WUPE8 OFFSET(0) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            AnyEdge = 3
        ]
    ],
    pub PinEnable4 [
        WUPE15 OFFSET(6) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            AnyEdge = 3
        ],
        WUPE14 OFFSET(4) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            AnyEdge = 3
        ],
        WUPE13 OFFSET(2) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            AnyEdge = 3
        ],
        WUPE12 OFFSET(0) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            AnyEdge = 3
        ]
    ],
    /// Wakeup module enables
    pub ModuleEnable [
        WUME7 OFFSET(7) NUMBITS(1) [],
        WUME6 OFFSET(6) NUMBITS(1) [],
        WUME5 OFFSET(5) NUMBITS(1) [],
        WUME4 OFFSET(4) NUMBITS(1) [],
        WUME3 OFFSET(3) NUMBITS(1) [],
        WUME2 OFFSET(2) NUMBITS(1) [],
        WUME1 OFFSET(1) NUMBITS(1) [],
        WUME0 OFFSET(0) NUMBITS(1) []
    ],
    /// Wakeup pin flags, write 1 to clear
    pub Flag1 [
        WUF7 OFFSET(7) NUMBITS(1) [],
        WUF6 OFFSET(6) NUMBITS(1) [],
        WUF5 OFFSET(5) NUMBITS(1) [],
        WUF4 OFFSET(4) NUMBITS(1) [],
        WUF3 OFFSET(3) NUMBITS(1) [],
        WUF2 OFFSET(2) NUMBITS(1) [],
        WUF1 OFFSET(1) NUMBITS(1) [],
        WUF0 OFFSET(0) NUMBITS(1) []
    ],
    pub Flag2 [
        WUF15 OFFSET(7) NUMBITS(1) [],
        WUF14 OFFSET(6) NUMBITS(1) [],
        WUF13 OFFSET(5) NUMBITS(1) [],
        WUF12 OFFSET(4) NUMBITS(1) [],
        WUF11 OFFSET(3) NUMBITS(1) [],
        WUF10 OFFSET(2) NUMBITS(1) [],
        WUF9 OFFSET(1) NUMBITS(1) [],
        WUF8 OFFSET(0) NUMBITS(1) []
    ],
    /// Wakeup module flags, cleared in the source module
    pub Flag3 [
        MWUF7 OFFSET(7) NUMBITS(1) [],
        MWUF6 OFFSET(6) NUMBITS(1) [],
        MWUF5 OFFSET(5) NUMBITS(1) [],
        MWUF4 OFFSET(4) NUMBITS(1) [],
        MWUF3 OFFSET(3) NUMBITS(1) [],
        MWUF2 OFFSET(2) NUMBITS(1) [],
        MWUF1 OFFSET(1) NUMBITS(1) [],
        MWUF0 OFFSET(0) NUMBITS(1) []
    ],
    /// Shared by FILT1 and FILT2
    pub PinFilter [
        /// Filter Detect Flag
        FILTF OFFSET(7) NUMBITS(1) [],
        /// Digital Filter On External Pin
        FILTE OFFSET(5) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            AnyEdge = 3
        ],
        /// Filter Pin Select
        FILTSEL OFFSET(0) NUMBITS(4) []
    ],
    pub ResetEnable [
        /// Low-Leakage Mode RESET Enable
        LLRSTE OFFSET(1) NUMBITS(1) [],
        /// Digital Filter On RESET Pin
        RSTFILT OFFSET(0) NUMBITS(1) []
    ]
];

pub const LLWU_BASE: usize = 0x4007_C000;

pub const LLWU: StaticRef<Registers> = unsafe { StaticRef::new(LLWU_BASE as *const Registers) };

pub const LLWU_BASE_ADDRS: [usize; 1] = [LLWU_BASE];
pub const LLWU_BASE_PTRS: [StaticRef<Registers>; 1] = [LLWU];
pub const LLWU_IRQS: [Interrupt; 1] = [Interrupt::LLWU];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_enables_are_two_bits_each() {
        assert_eq!(PinEnable1::WUPE0.shift, 0);
        assert_eq!(PinEnable1::WUPE3.shift, 6);
        assert_eq!(PinEnable4::WUPE15.shift, 6);
        assert_eq!(PinEnable2::WUPE5.mask, 0b11);
        assert_eq!(Flag2::WUF15.shift, 7);
    }
}
