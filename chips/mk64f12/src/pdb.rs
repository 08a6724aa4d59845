//! Programmable Delay Block (PDB).
//!
//! Schedules ADC pre-triggers (`ch`), DAC interval triggers (`dac`) and
//! pulse-out signals for the comparators.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    /// PDB memory map.
    pub Registers {
        (0x000 => pub sc: ReadWrite<u32, StatusControl::Register>),
        /// Modulus
        (0x004 => pub modulus: ReadWrite<u32, Count::Register>),
        (0x008 => pub cnt: ReadOnly<u32, Count::Register>),
        /// Interrupt Delay
        (0x00C => pub idly: ReadWrite<u32, Count::Register>),
        /// ADC pre-trigger channels, one per ADC
        (0x010 => pub ch: [AdcChannel; 2]),
        (0x060 => _reserved0),
        (0x150 => pub dac: [DacTrigger; 2]),
        (0x160 => _reserved1),
        /// Pulse-Out Enable
        (0x190 => pub poen: ReadWrite<u32, PulseOutEnable::Register>),
        /// Pulse-Out Delay
        (0x194 => pub podly: [ReadWrite<u32, PulseOutDelay::Register>; 3]),
        (0x1A0 => @END),
    },

    pub AdcChannel {
        (0x00 => pub c1: ReadWrite<u32, ChannelControl1::Register>),
        (0x04 => pub s: ReadWrite<u32, ChannelStatus::Register>),
        /// Pre-trigger delays
        (0x08 => pub dly: [ReadWrite<u32, Count::Register>; 2]),
        (0x10 => _reserved0),
        (0x28 => @END),
    },

    pub DacTrigger {
        /// Interval Trigger Control
        (0x0 => pub intc: ReadWrite<u32, DacIntervalControl::Register>),
        /// Interval
        (0x4 => pub int: ReadWrite<u32, Count::Register>),
        (0x8 => @END),
    }
}

register_bitfields![u32,
    pub StatusControl [
        /// Load Mode Select
        LDMOD OFFSET(18) NUMBITS(2) [
            Immediately = 0,
            CounterEnd = 1,
            Trigger = 2,
            CounterEndOrTrigger = 3
        ],
        /// Sequence Error Interrupt Enable
        PDBEIE OFFSET(17) NUMBITS(1) [],
        /// Software Trigger
        SWTRIG OFFSET(16) NUMBITS(1) [],
        DMAEN OFFSET(15) NUMBITS(1) [],
        /// Prescaler Divider Select
        PRESCALER OFFSET(12) NUMBITS(3) [],
        /// Trigger Input Source Select
        TRGSEL OFFSET(8) NUMBITS(4) [
            Software = 15
        ],
        PDBEN OFFSET(7) NUMBITS(1) [],
        /// Interrupt Flag
        PDBIF OFFSET(6) NUMBITS(1) [],
        /// Interrupt Enable
        PDBIE OFFSET(5) NUMBITS(1) [],
        /// Multiplication Factor Select for Prescaler
        MULT OFFSET(2) NUMBITS(2) [
            Mul1 = 0,
            Mul10 = 1,
            Mul20 = 2,
            Mul40 = 3
        ],
        /// Continuous Mode Enable
        CONT OFFSET(1) NUMBITS(1) [],
        /// Load OK
        LDOK OFFSET(0) NUMBITS(1) []
    ],
    /// 16-bit counter, modulus and delay values.
    pub Count [
        VALUE OFFSET(0) NUMBITS(16) []
    ],
    pub ChannelControl1 [
        /// Pre-Trigger Back-to-Back Operation Enable
        BB OFFSET(16) NUMBITS(8) [],
        /// Pre-Trigger Output Select
        TOS OFFSET(8) NUMBITS(8) [],
        /// Pre-Trigger Enable
        EN OFFSET(0) NUMBITS(8) []
    ],
    pub ChannelStatus [
        /// Pre-Trigger Flags
        CF OFFSET(16) NUMBITS(8) [],
        /// Pre-Trigger Sequence Error Flags
        ERR OFFSET(0) NUMBITS(8) []
    ],
    pub DacIntervalControl [
        /// External Trigger Input Enable
        EXT OFFSET(1) NUMBITS(1) [],
        /// Interval Trigger Enable
        TOE OFFSET(0) NUMBITS(1) []
    ],
    pub PulseOutEnable [
        POEN OFFSET(0) NUMBITS(8) []
    ],
    pub PulseOutDelay [
        DLY1 OFFSET(16) NUMBITS(16) [],
        DLY2 OFFSET(0) NUMBITS(16) []
    ]
];

pub const PDB0_BASE: usize = 0x4003_6000;

pub const PDB0: StaticRef<Registers> = unsafe { StaticRef::new(PDB0_BASE as *const Registers) };

pub const PDB_BASE_ADDRS: [usize; 1] = [PDB0_BASE];
pub const PDB_BASE_PTRS: [StaticRef<Registers>; 1] = [PDB0];
pub const PDB_IRQS: [Interrupt; 1] = [Interrupt::PDB0];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[test]
    fn bank_layout() {
        assert_eq!(size_of::<AdcChannel>(), 0x28);
        assert_eq!(offset_of!(Registers, ch), 0x10);
        assert_eq!(offset_of!(Registers, dac), 0x150);
        assert_eq!(offset_of!(Registers, podly), 0x194);
        assert_eq!(size_of::<Registers>(), 0x1A0);
    }
}
