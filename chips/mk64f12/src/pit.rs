//! Periodic Interrupt Timer (PIT).

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

pub const NUM_CHANNELS: usize = 4;

register_structs! {
    /// PIT memory map.
    pub Registers {
        (0x000 => pub mcr: ReadWrite<u32, ModuleControl::Register>),
        (0x004 => _reserved0),
        (0x100 => pub channel: [Channel; NUM_CHANNELS]),
        (0x140 => @END),
    },

    pub Channel {
        /// Timer Load Value
        (0x0 => pub ldval: ReadWrite<u32>),
        /// Current Timer Value
        (0x4 => pub cval: ReadOnly<u32>),
        (0x8 => pub tctrl: ReadWrite<u32, TimerControl::Register>),
        (0xC => pub tflg: ReadWrite<u32, TimerFlag::Register>),
        (0x10 => @END),
    }
}

register_bitfields![u32,
    pub ModuleControl [
        /// Module Disable, set out of reset
        MDIS OFFSET(1) NUMBITS(1) [],
        /// Freeze timers in debug mode
        FRZ OFFSET(0) NUMBITS(1) []
    ],
    pub TimerControl [
        /// Chain Mode
        CHN OFFSET(2) NUMBITS(1) [],
        /// Timer Interrupt Enable
        TIE OFFSET(1) NUMBITS(1) [],
        /// Timer Enable
        TEN OFFSET(0) NUMBITS(1) []
    ],
    pub TimerFlag [
        /// Timer Interrupt Flag, write 1 to clear
        TIF OFFSET(0) NUMBITS(1) []
    ]
];

pub const PIT_BASE: usize = 0x4003_7000;

pub const PIT: StaticRef<Registers> = unsafe { StaticRef::new(PIT_BASE as *const Registers) };

pub const PIT_BASE_ADDRS: [usize; 1] = [PIT_BASE];
pub const PIT_BASE_PTRS: [StaticRef<Registers>; 1] = [PIT];
pub const PIT_IRQS: [Interrupt; NUM_CHANNELS] = [
    Interrupt::PIT0,
    Interrupt::PIT1,
    Interrupt::PIT2,
    Interrupt::PIT3,
];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[test]
    fn channel_stride() {
        assert_eq!(size_of::<Channel>(), 0x10);
        assert_eq!(offset_of!(Registers, channel), 0x100);
        assert_eq!(size_of::<Registers>(), 0x140);
        assert_eq!(offset_of!(Channel, tflg), 0xC);
    }
}
