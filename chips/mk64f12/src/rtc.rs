//! Secure Real Time Clock (RTC).

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    /// RTC memory map.
    pub Registers {
        /// Time Seconds Register
        (0x000 => pub tsr: ReadWrite<u32>),
        /// Time Prescaler Register
        (0x004 => pub tpr: ReadWrite<u32, TimePrescaler::Register>),
        /// Time Alarm Register
        (0x008 => pub tar: ReadWrite<u32>),
        /// Time Compensation Register
        (0x00C => pub tcr: ReadWrite<u32, TimeCompensation::Register>),
        (0x010 => pub cr: ReadWrite<u32, Control::Register>),
        (0x014 => pub sr: ReadWrite<u32, Status::Register>),
        /// Lock Register
        (0x018 => pub lr: ReadWrite<u32, Lock::Register>),
        (0x01C => pub ier: ReadWrite<u32, InterruptEnable::Register>),
        (0x020 => _reserved0),
        /// Write Access Register
        (0x800 => pub war: ReadWrite<u32, Access::Register>),
        /// Read Access Register
        (0x804 => pub rar: ReadWrite<u32, Access::Register>),
        (0x808 => @END),
    }
}

register_bitfields![u32,
    pub TimePrescaler [
        TPR OFFSET(0) NUMBITS(16) []
    ],
    pub TimeCompensation [
        /// Compensation Interval Counter
        CIC OFFSET(24) NUMBITS(8) [],
        /// Time Compensation Value
        TCV OFFSET(16) NUMBITS(8) [],
        /// Compensation Interval Register
        CIR OFFSET(8) NUMBITS(8) [],
        /// Time Compensation Register
        TCR OFFSET(0) NUMBITS(8) []
    ],
    pub Control [
        SC2P OFFSET(13) NUMBITS(1) [],
        SC4P OFFSET(12) NUMBITS(1) [],
        SC8P OFFSET(11) NUMBITS(1) [],
        SC16P OFFSET(10) NUMBITS(1) [],
        /// Clock Output, set to gate the 32 kHz clock from other peripherals
        CLKO OFFSET(9) NUMBITS(1) [],
        /// Oscillator Enable
        OSCE OFFSET(8) NUMBITS(1) [],
        /// Wakeup Pin Select
        WPS OFFSET(4) NUMBITS(1) [],
        /// Update Mode
        UM OFFSET(3) NUMBITS(1) [],
        /// Supervisor Access
        SUP OFFSET(2) NUMBITS(1) [],
        /// Wakeup Pin Enable
        WPE OFFSET(1) NUMBITS(1) [],
        /// Software Reset
        SWR OFFSET(0) NUMBITS(1) []
    ],
    pub Status [
        /// Time Counter Enable
        TCE OFFSET(4) NUMBITS(1) [],
        /// Time Alarm Flag
        TAF OFFSET(2) NUMBITS(1) [],
        /// Time Overflow Flag
        TOF OFFSET(1) NUMBITS(1) [],
        /// Time Invalid Flag
        TIF OFFSET(0) NUMBITS(1) []
    ],
    /// Cleared bits lock the matching register until the next VBAT POR or
    /// software reset.
    pub Lock [
        LRL OFFSET(6) NUMBITS(1) [],
        SRL OFFSET(5) NUMBITS(1) [],
        CRL OFFSET(4) NUMBITS(1) [],
        TCL OFFSET(3) NUMBITS(1) []
    ],
    pub InterruptEnable [
        /// Wakeup Pin On
        WPON OFFSET(7) NUMBITS(1) [],
        /// Time Seconds Interrupt Enable
        TSIE OFFSET(4) NUMBITS(1) [],
        /// Time Alarm Interrupt Enable
        TAIE OFFSET(2) NUMBITS(1) [],
        /// Time Overflow Interrupt Enable
        TOIE OFFSET(1) NUMBITS(1) [],
        /// Time Invalid Interrupt Enable
        TIIE OFFSET(0) NUMBITS(1) []
    ],
    /// Layout shared by WAR and RAR. Cleared bits block access to the
    /// matching register until the next chip reset.
    pub Access [
        IER OFFSET(7) NUMBITS(1) [],
        LR OFFSET(6) NUMBITS(1) [],
        SR OFFSET(5) NUMBITS(1) [],
        CR OFFSET(4) NUMBITS(1) [],
        TCR OFFSET(3) NUMBITS(1) [],
        TAR OFFSET(2) NUMBITS(1) [],
        TPR OFFSET(1) NUMBITS(1) [],
        TSR OFFSET(0) NUMBITS(1) []
    ]
];

pub const RTC_BASE: usize = 0x4003_D000;

pub const RTC: StaticRef<Registers> = unsafe { StaticRef::new(RTC_BASE as *const Registers) };

pub const RTC_BASE_ADDRS: [usize; 1] = [RTC_BASE];
pub const RTC_BASE_PTRS: [StaticRef<Registers>; 1] = [RTC];
pub const RTC_IRQS: [Interrupt; 1] = [Interrupt::RTC];
pub const RTC_SECONDS_IRQS: [Interrupt; 1] = [Interrupt::RTC_Seconds];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};

    #[repr(C, align(4))]
    struct Backing([u8; 0x808]);

    #[test]
    fn access_registers_share_one_layout() {
        assert_eq!(offset_of!(Registers, war), 0x800);
        assert_eq!(offset_of!(Registers, rar), 0x804);
        assert_eq!(size_of::<Registers>(), 0x808);

        let mut backing = Backing([0; 0x808]);
        {
            let regs = unsafe { &*(backing.0.as_mut_ptr() as *const Registers) };
            regs.war.set(0xFF);
            regs.war.modify(Access::TSR::CLEAR + Access::CR::CLEAR);
            regs.rar.write(Access::IER::SET + Access::TSR::SET);
            assert!(!regs.war.is_set(Access::TSR));
            assert!(regs.war.is_set(Access::TPR));
            assert!(regs.rar.matches_all(Access::IER::SET + Access::TSR::SET));
        }
        assert_eq!(backing.0[0x800], 0xEE);
        assert_eq!(backing.0[0x804], 0x81);
    }

    #[test]
    fn compensation_fields() {
        assert_eq!(TimeCompensation::CIR.shift, 8);
        assert_eq!(TimeCompensation::CIC.shift, 24);
        assert_eq!(Control::OSCE.mask << Control::OSCE.shift, 0x100);
    }
}
