//! USB Device Charger Detection (USBDCD).
//!
//! `TIMER2` has two layouts: [`Timer2Bc11`] for Battery Charging 1.1 and
//! [`Timer2Bc12`] when `CONTROL[BC12]` is set. The register is typed with
//! the 1.1 layout.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    /// USBDCD memory map.
    pub Registers {
        (0x00 => pub control: ReadWrite<u32, Control::Register>),
        (0x04 => pub clock: ReadWrite<u32, Clock::Register>),
        (0x08 => pub status: ReadOnly<u32, Status::Register>),
        (0x0C => _reserved0),
        (0x10 => pub timer0: ReadWrite<u32, Timer0::Register>),
        (0x14 => pub timer1: ReadWrite<u32, Timer1::Register>),
        (0x18 => pub timer2: ReadWrite<u32, Timer2Bc11::Register>),
        (0x1C => @END),
    }
}

register_bitfields![u32,
    pub Control [
        /// Software Reset
        SR OFFSET(25) NUMBITS(1) [],
        /// Start Change Detection Sequence
        START OFFSET(24) NUMBITS(1) [],
        /// BC1.2 compatibility
        BC12 OFFSET(17) NUMBITS(1) [],
        /// Interrupt Enable
        IE OFFSET(16) NUMBITS(1) [],
        /// Interrupt Flag
        IF OFFSET(8) NUMBITS(1) [],
        /// Interrupt Acknowledge
        IACK OFFSET(0) NUMBITS(1) []
    ],
    pub Clock [
        /// Numerical value of the clock speed, in CLOCK_UNIT
        CLOCK_SPEED OFFSET(2) NUMBITS(10) [],
        CLOCK_UNIT OFFSET(0) NUMBITS(1) [
            KHz = 0,
            MHz = 1
        ]
    ],
    pub Status [
        /// Active Status Indicator
        ACTIVE OFFSET(22) NUMBITS(1) [],
        /// Timeout Flag
        TO OFFSET(21) NUMBITS(1) [],
        /// Error Flag
        ERR OFFSET(20) NUMBITS(1) [],
        /// Charger Detection Sequence Status
        SEQ_STAT OFFSET(18) NUMBITS(2) [
            NotStarted = 0,
            DataPinContact = 1,
            ChargingPort = 2,
            ChargerType = 3
        ],
        /// Charger Detection Sequence Results
        SEQ_RES OFFSET(16) NUMBITS(2) [
            NoResults = 0,
            StandardHost = 1,
            ChargingPort = 2,
            DedicatedCharger = 3
        ]
    ],
    pub Timer0 [
        /// Sequence Initiation Time
        TSEQ_INIT OFFSET(16) NUMBITS(10) [],
        /// Unit Connection Timer Elapse, in ms
        TUNITCON OFFSET(0) NUMBITS(12) []
    ],
    pub Timer1 [
        /// Time Period to Debounce D+ Signal
        TDCD_DBNC OFFSET(16) NUMBITS(10) [],
        /// Time Period Comparator Enabled
        TVDPSRC_ON OFFSET(0) NUMBITS(10) []
    ],
    pub Timer2Bc11 [
        /// Time Period Before Enabling D+ Pullup
        TVDPSRC_CON OFFSET(16) NUMBITS(10) [],
        /// Time Before Check of D- Line
        CHECK_DM OFFSET(0) NUMBITS(4) []
    ],
    pub Timer2Bc12 [
        /// Wait time after primary detection
        TWAIT_AFTER_PRD OFFSET(16) NUMBITS(10) [],
        /// Time period while VDM_SRC is on
        TVDMSRC_ON OFFSET(0) NUMBITS(10) []
    ]
];

pub const USBDCD_BASE: usize = 0x4003_5000;

pub const USBDCD: StaticRef<Registers> =
    unsafe { StaticRef::new(USBDCD_BASE as *const Registers) };

pub const USBDCD_BASE_ADDRS: [usize; 1] = [USBDCD_BASE];
pub const USBDCD_BASE_PTRS: [StaticRef<Registers>; 1] = [USBDCD];
pub const USBDCD_IRQS: [Interrupt; 1] = [Interrupt::USBDCD];

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::LocalRegisterCopy;

    #[repr(C, align(4))]
    struct Backing([u8; 0x1C]);

    #[test]
    fn timer2_layouts_share_bits() {
        let mut backing = Backing([0; 0x1C]);
        let regs = unsafe { &*(backing.0.as_mut_ptr() as *const Registers) };
        regs.timer2.write(Timer2Bc11::TVDPSRC_CON.val(40) + Timer2Bc11::CHECK_DM.val(1));

        let bc12: LocalRegisterCopy<u32, Timer2Bc12::Register> =
            LocalRegisterCopy::new(regs.timer2.get());
        assert_eq!(bc12.read(Timer2Bc12::TWAIT_AFTER_PRD), 40);
        assert_eq!(bc12.read(Timer2Bc12::TVDMSRC_ON), 1);
    }
}
