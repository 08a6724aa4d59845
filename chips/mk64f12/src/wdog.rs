//! Watchdog Timer (WDOG).
//!
//! Configuration writes need the unlock sequence and must land within the
//! window that follows it. The 32-bit timeout, window and counter values are
//! split across high and low half-word registers.

use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

/// Written to `unlock` in order to open the configuration window.
pub const UNLOCK_SEQUENCE: [u16; 2] = [0xC520, 0xD928];
/// Written to `refresh` in order to service the watchdog.
pub const REFRESH_SEQUENCE: [u16; 2] = [0xA602, 0xB480];

register_structs! {
    /// WDOG memory map.
    pub Registers {
        (0x00 => pub stctrlh: ReadWrite<u16, StatusControlHigh::Register>),
        (0x02 => pub stctrll: ReadWrite<u16, StatusControlLow::Register>),
        (0x04 => pub tovalh: ReadWrite<u16>),
        (0x06 => pub tovall: ReadWrite<u16>),
        (0x08 => pub winh: ReadWrite<u16>),
        (0x0A => pub winl: ReadWrite<u16>),
        (0x0C => pub refresh: ReadWrite<u16>),
        (0x0E => pub unlock: ReadWrite<u16>),
        /// Timer Output, high and low
        (0x10 => pub tmrouth: ReadWrite<u16>),
        (0x12 => pub tmroutl: ReadWrite<u16>),
        /// Reset Count
        (0x14 => pub rstcnt: ReadWrite<u16>),
        (0x16 => pub presc: ReadWrite<u16, Prescaler::Register>),
        (0x18 => @END),
    }
}

register_bitfields![u16,
    pub StatusControlHigh [
        DISTESTWDOG OFFSET(14) NUMBITS(1) [],
        /// Byte selected for the byte test
        BYTESEL OFFSET(12) NUMBITS(2) [
            Byte0 = 0,
            Byte1 = 1,
            Byte2 = 2,
            Byte3 = 3
        ],
        TESTSEL OFFSET(11) NUMBITS(1) [
            Quick = 0,
            Byte = 1
        ],
        TESTWDOG OFFSET(10) NUMBITS(1) [],
        WAITEN OFFSET(7) NUMBITS(1) [],
        STOPEN OFFSET(6) NUMBITS(1) [],
        DBGEN OFFSET(5) NUMBITS(1) [],
        /// Allows further updates after the write-once period
        ALLOWUPDATE OFFSET(4) NUMBITS(1) [],
        /// Windowing mode
        WINEN OFFSET(3) NUMBITS(1) [],
        /// Interrupt before reset
        IRQRSTEN OFFSET(2) NUMBITS(1) [],
        CLKSRC OFFSET(1) NUMBITS(1) [
            Lpo = 0,
            Alternate = 1
        ],
        WDOGEN OFFSET(0) NUMBITS(1) []
    ],
    pub StatusControlLow [
        /// Interrupt Flag, write 1 to clear
        INTFLG OFFSET(15) NUMBITS(1) []
    ],
    pub Prescaler [
        /// Clock divided by PRESCVAL + 1
        PRESCVAL OFFSET(8) NUMBITS(3) []
    ]
];

impl Registers {
    pub fn write_unlock_sequence(&self) {
        for key in UNLOCK_SEQUENCE {
            self.unlock.set(key);
        }
    }

    pub fn write_refresh_sequence(&self) {
        for key in REFRESH_SEQUENCE {
            self.refresh.set(key);
        }
    }

    pub fn timeout(&self) -> u32 {
        u32::from(self.tovalh.get()) << 16 | u32::from(self.tovall.get())
    }

    pub fn set_timeout(&self, value: u32) {
        self.tovalh.set((value >> 16) as u16);
        self.tovall.set(value as u16);
    }

    pub fn window(&self) -> u32 {
        u32::from(self.winh.get()) << 16 | u32::from(self.winl.get())
    }

    pub fn set_window(&self, value: u32) {
        self.winh.set((value >> 16) as u16);
        self.winl.set(value as u16);
    }

    pub fn timer_output(&self) -> u32 {
        u32::from(self.tmrouth.get()) << 16 | u32::from(self.tmroutl.get())
    }
}

pub const WDOG_BASE: usize = 0x4005_2000;

pub const WDOG: StaticRef<Registers> = unsafe { StaticRef::new(WDOG_BASE as *const Registers) };

pub const WDOG_BASE_ADDRS: [usize; 1] = [WDOG_BASE];
pub const WDOG_BASE_PTRS: [StaticRef<Registers>; 1] = [WDOG];
pub const WDOG_IRQS: [Interrupt; 1] = [Interrupt::WDOG_EWM];

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(C, align(4))]
    struct Backing([u8; 0x18]);

    #[test]
    fn split_values() {
        let mut backing = Backing([0; 0x18]);
        let regs = unsafe { &*(backing.0.as_mut_ptr() as *const Registers) };
        regs.set_timeout(0x0012_3456);
        assert_eq!(regs.tovalh.get(), 0x0012);
        assert_eq!(regs.tovall.get(), 0x3456);
        assert_eq!(regs.timeout(), 0x0012_3456);

        regs.write_unlock_sequence();
        assert_eq!(regs.unlock.get(), UNLOCK_SEQUENCE[1]);
        regs.write_refresh_sequence();
        assert_eq!(regs.refresh.get(), REFRESH_SEQUENCE[1]);
    }

    #[test]
    fn control_bits() {
        let allow = StatusControlHigh::ALLOWUPDATE;
        assert_eq!(allow.mask << allow.shift, 0x0010);
        assert_eq!(StatusControlHigh::BYTESEL.shift, 12);
        assert_eq!(Prescaler::PRESCVAL.mask, 0b111);
    }
}
