//! Reset Control Module (RCM).

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub Registers {
        /// System reset status registers
        (0x0 => pub srs0: ReadOnly<u8, SystemReset0::Register>),
        (0x1 => pub srs1: ReadOnly<u8, SystemReset1::Register>),
        (0x2 => _reserved0),
        (0x4 => pub rpfc: ReadWrite<u8, ResetPinFilterControl::Register>),
        (0x5 => pub rpfw: ReadWrite<u8, ResetPinFilterWidth::Register>),
        (0x6 => _reserved1),
        (0x7 => pub mr: ReadOnly<u8, Mode::Register>),
        (0x8 => @END),
    }
}

register_bitfields![u8,
    pub SystemReset0 [
        /// Power-On Reset
        POR OFFSET(7) NUMBITS(1) [],
        /// External Reset Pin
        PIN OFFSET(6) NUMBITS(1) [],
        /// Watchdog
        WDOG OFFSET(5) NUMBITS(1) [],
        /// Loss-of-Lock Reset
        LOL OFFSET(3) NUMBITS(1) [],
        /// Loss-of-Clock Reset
        LOC OFFSET(2) NUMBITS(1) [],
        /// Low-Voltage Detect Reset
        LVD OFFSET(1) NUMBITS(1) [],
        /// Low Leakage Wakeup Reset
        WAKEUP OFFSET(0) NUMBITS(1) []
    ],
    pub SystemReset1 [
        /// Stop Mode Acknowledge Error Reset
        SACKERR OFFSET(5) NUMBITS(1) [],
        /// EzPort Reset
        EZPT OFFSET(4) NUMBITS(1) [],
        /// MDM-AP System Reset Request
        MDM_AP OFFSET(3) NUMBITS(1) [],
        /// Software
        SW OFFSET(2) NUMBITS(1) [],
        /// Core Lockup
        LOCKUP OFFSET(1) NUMBITS(1) [],
        /// JTAG Generated Reset
        JTAG OFFSET(0) NUMBITS(1) []
    ],
    pub ResetPinFilterControl [
        /// Reset Pin Filter Select in Stop Mode
        RSTFLTSS OFFSET(2) NUMBITS(1) [],
        /// Reset Pin Filter Select in Run and Wait Modes
        RSTFLTSRW OFFSET(0) NUMBITS(2) [
            Disabled = 0,
            BusClock = 1,
            Lpo = 2
        ]
    ],
    pub ResetPinFilterWidth [
        /// Reset Pin Filter Bus Clock Select, RSTFLTSEL + 1 cycles
        RSTFLTSEL OFFSET(0) NUMBITS(5) []
    ],
    pub Mode [
        /// EZP_MS_B pin state at last reset
        EZP_MS OFFSET(1) NUMBITS(1) []
    ]
];

pub const RCM_BASE: usize = 0x4007_F000;

pub const RCM: StaticRef<Registers> = unsafe { StaticRef::new(RCM_BASE as *const Registers) };

pub const RCM_BASE_ADDRS: [usize; 1] = [RCM_BASE];
pub const RCM_BASE_PTRS: [StaticRef<Registers>; 1] = [RCM];

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{Readable, Writeable};

    #[repr(C, align(4))]
    struct Backing([u8; 8]);

    #[test]
    fn reset_sources_and_filter() {
        let mut backing = Backing([0; 8]);
        backing.0[0] = 0x82;
        backing.0[1] = 0x04;
        {
            let regs = unsafe { &*(backing.0.as_mut_ptr() as *const Registers) };
            assert!(regs.srs0.is_set(SystemReset0::POR));
            assert!(regs.srs0.is_set(SystemReset0::LVD));
            assert!(!regs.srs0.is_set(SystemReset0::PIN));
            assert!(regs.srs1.is_set(SystemReset1::SW));
            regs.rpfc.write(ResetPinFilterControl::RSTFLTSRW::Lpo);
            regs.rpfw.write(ResetPinFilterWidth::RSTFLTSEL.val(0x1F));
        }
        assert_eq!(&backing.0[4..6], &[0x02, 0x1F]);
    }
}
