//! System Mode Controller (SMC).

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub Registers {
        /// Power mode protection. Write once after reset.
        (0x0 => pub pmprot: ReadWrite<u8, PowerModeProtection::Register>),
        (0x1 => pub pmctrl: ReadWrite<u8, PowerModeControl::Register>),
        (0x2 => pub vllsctrl: ReadWrite<u8, StopControl::Register>),
        (0x3 => pub pmstat: ReadOnly<u8, PowerModeStatus::Register>),
        (0x4 => @END),
    }
}

register_bitfields![u8,
    pub PowerModeProtection [
        /// Allow very-low-power modes
        AVLP OFFSET(5) NUMBITS(1) [],
        /// Allow low-leakage stop mode
        ALLS OFFSET(3) NUMBITS(1) [],
        /// Allow very-low-leakage stop mode
        AVLLS OFFSET(1) NUMBITS(1) []
    ],
    pub PowerModeControl [
        /// Low-power wake up on interrupt
        LPWUI OFFSET(7) NUMBITS(1) [],
        RUNM OFFSET(5) NUMBITS(2) [
            RUN = 0,
            VLPR = 2
        ],
        /// Stop aborted
        STOPA OFFSET(3) NUMBITS(1) [],
        STOPM OFFSET(0) NUMBITS(3) [
            STOP = 0,
            VLPS = 2,
            LLS = 3,
            VLLSx = 4
        ]
    ],
    pub StopControl [
        /// POR power option
        PORPO OFFSET(5) NUMBITS(1) [],
        VLLSM OFFSET(0) NUMBITS(3) [
            VLLS0 = 0,
            VLLS1 = 1,
            VLLS2 = 2,
            VLLS3 = 3
        ]
    ],
    pub PowerModeStatus [
        PMSTAT OFFSET(0) NUMBITS(7) [
            RUN = 1,
            STOP = 2,
            VLPR = 4,
            VLPW = 8,
            VLPS = 16,
            LLS = 32,
            VLLS = 64
        ]
    ]
];

pub const SMC_BASE: usize = 0x4007_E000;

pub const SMC: StaticRef<Registers> = unsafe { StaticRef::new(SMC_BASE as *const Registers) };

pub const SMC_BASE_ADDRS: [usize; 1] = [SMC_BASE];
pub const SMC_BASE_PTRS: [StaticRef<Registers>; 1] = [SMC];

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn power_mode_status_decodes() {
        let pmstat: LocalRegisterCopy<u8, PowerModeStatus::Register> = LocalRegisterCopy::new(4);
        assert!(pmstat.matches_all(PowerModeStatus::PMSTAT::VLPR));
        assert_eq!(
            pmstat.read_as_enum(PowerModeStatus::PMSTAT),
            Some(PowerModeStatus::PMSTAT::Value::VLPR)
        );
    }

    #[test]
    fn stop_mode_select() {
        let mut pmctrl: LocalRegisterCopy<u8, PowerModeControl::Register> =
            LocalRegisterCopy::new(0);
        pmctrl.modify(PowerModeControl::RUNM::VLPR + PowerModeControl::STOPM::VLLSx);
        assert_eq!(pmctrl.get(), 0x44);
    }
}
