//! Core Platform Miscellaneous Control Module (MCM).

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    /// MCM memory map.
    pub Registers {
        (0x00 => _reserved0),
        /// Crossbar Switch (AXBS) Slave Configuration
        (0x08 => pub plasc: ReadOnly<u16, SlaveConfiguration::Register>),
        /// Crossbar Switch (AXBS) Master Configuration
        (0x0A => pub plamc: ReadOnly<u16, MasterConfiguration::Register>),
        (0x0C => pub cr: ReadWrite<u32, Control::Register>),
        /// Interrupt Status and Control
        (0x10 => pub iscr: ReadWrite<u32, InterruptStatusControl::Register>),
        /// ETB Counter Control
        (0x14 => pub etbcc: ReadWrite<u32, EtbCounterControl::Register>),
        /// ETB Reload
        (0x18 => pub etbrl: ReadWrite<u32, EtbCount::Register>),
        /// ETB Counter Value
        (0x1C => pub etbcnt: ReadOnly<u32, EtbCount::Register>),
        (0x20 => _reserved1),
        /// Process ID
        (0x30 => pub pid: ReadWrite<u32, ProcessId::Register>),
        (0x34 => @END),
    }
}

register_bitfields![u16,
    pub SlaveConfiguration [
        /// One bit per connected slave port
        ASC OFFSET(0) NUMBITS(8) []
    ],
    pub MasterConfiguration [
        /// One bit per connected master port
        AMC OFFSET(0) NUMBITS(8) []
    ]
];

register_bitfields![u32,
    pub Control [
        /// SRAM_L write protect
        SRAMLWP OFFSET(30) NUMBITS(1) [],
        /// SRAM_L arbitration priority
        SRAMLAP OFFSET(28) NUMBITS(2) [
            RoundRobin = 0,
            SpecialRoundRobin = 1,
            FixedBackdoor = 2,
            FixedCpu = 3
        ],
        /// SRAM_U write protect
        SRAMUWP OFFSET(26) NUMBITS(1) [],
        /// SRAM_U arbitration priority
        SRAMUAP OFFSET(24) NUMBITS(2) [
            RoundRobin = 0,
            SpecialRoundRobin = 1,
            FixedBackdoor = 2,
            FixedCpu = 3
        ]
    ],
    pub InterruptStatusControl [
        /// FPU input denormal interrupt enable
        FIDCE OFFSET(31) NUMBITS(1) [],
        /// FPU inexact interrupt enable
        FIXCE OFFSET(28) NUMBITS(1) [],
        /// FPU underflow interrupt enable
        FUFCE OFFSET(27) NUMBITS(1) [],
        /// FPU overflow interrupt enable
        FOFCE OFFSET(26) NUMBITS(1) [],
        /// FPU divide-by-zero interrupt enable
        FDZCE OFFSET(25) NUMBITS(1) [],
        /// FPU invalid operation interrupt enable
        FIOCE OFFSET(24) NUMBITS(1) [],
        FIDC OFFSET(15) NUMBITS(1) [],
        FIXC OFFSET(12) NUMBITS(1) [],
        FUFC OFFSET(11) NUMBITS(1) [],
        FOFC OFFSET(10) NUMBITS(1) [],
        FDZC OFFSET(9) NUMBITS(1) [],
        FIOC OFFSET(8) NUMBITS(1) [],
        /// Normal interrupt pending
        IRQ OFFSET(1) NUMBITS(1) [],
        /// Non-maskable interrupt pending
        NMI OFFSET(0) NUMBITS(1) []
    ],
    pub EtbCounterControl [
        /// Disable ITM-to-AHB conversion
        ITDIS OFFSET(5) NUMBITS(1) [],
        /// Halt Request
        SPHALT OFFSET(4) NUMBITS(1) [],
        /// Reload Request
        RLRQ OFFSET(3) NUMBITS(1) [],
        /// Response Type
        RSPT OFFSET(1) NUMBITS(2) [
            NoResponse = 0,
            Irq = 1,
            Nmi = 2,
            HaltDebug = 3
        ],
        /// Counter Enable
        CNTEN OFFSET(0) NUMBITS(1) []
    ],
    /// Shared by ETBRL and ETBCNT.
    pub EtbCount [
        COUNT OFFSET(0) NUMBITS(11) []
    ],
    pub ProcessId [
        PID OFFSET(0) NUMBITS(8) []
    ]
];

pub const MCM_BASE: usize = 0xE008_0000;

pub const MCM: StaticRef<Registers> = unsafe { StaticRef::new(MCM_BASE as *const Registers) };

pub const MCM_BASE_ADDRS: [usize; 1] = [MCM_BASE];
pub const MCM_BASE_PTRS: [StaticRef<Registers>; 1] = [MCM];
pub const MCM_IRQS: [Interrupt; 1] = [Interrupt::MCM];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[test]
    fn half_word_registers() {
        assert_eq!(offset_of!(Registers, plasc), 0x08);
        assert_eq!(offset_of!(Registers, plamc), 0x0A);
        assert_eq!(offset_of!(Registers, pid), 0x30);
        assert_eq!(size_of::<Registers>(), 0x34);
    }
}
