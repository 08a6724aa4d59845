//! Low-Power Timer (LPTMR).

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    pub LptmrRegisters {
        (0x0 => pub csr: ReadWrite<u32, ControlStatus::Register>),
        (0x4 => pub psr: ReadWrite<u32, Prescale::Register>),
        (0x8 => pub cmr: ReadWrite<u32, Compare::Register>),
        /// Reads return the value latched by the last write to this register.
        (0xC => pub cnr: ReadWrite<u32, Counter::Register>),
        (0x10 => @END),
    }
}

/// Alias matching the naming of the other register blocks.
pub type Registers = LptmrRegisters;

register_bitfields![u32,
    pub ControlStatus [
        /// Timer Compare Flag, write 1 to clear
        TCF OFFSET(7) NUMBITS(1) [],
        /// Timer Interrupt Enable
        TIE OFFSET(6) NUMBITS(1) [],
        /// Timer Pin Select
        TPS OFFSET(4) NUMBITS(2) [
            Input0 = 0,
            Input1 = 1,
            Input2 = 2,
            Input3 = 3
        ],
        /// Timer Pin Polarity
        TPP OFFSET(3) NUMBITS(1) [
            ActiveHigh = 0,
            ActiveLow = 1
        ],
        /// Timer Free-Running Counter
        TFC OFFSET(2) NUMBITS(1) [],
        /// Timer Mode Select
        TMS OFFSET(1) NUMBITS(1) [
            TimeCounter = 0,
            PulseCounter = 1
        ],
        /// Timer Enable
        TEN OFFSET(0) NUMBITS(1) []
    ],
    pub Prescale [
        PRESCALE OFFSET(3) NUMBITS(4) [],
        /// Prescaler Bypass
        PBYP OFFSET(2) NUMBITS(1) [],
        /// Prescaler Clock Select
        PCS OFFSET(0) NUMBITS(2) [
            MCGIRCLK = 0,
            LPO = 1,
            ERCLK32K = 2,
            OSCERCLK = 3
        ]
    ],
    pub Compare [
        COMPARE OFFSET(0) NUMBITS(16) []
    ],
    pub Counter [
        COUNTER OFFSET(0) NUMBITS(16) []
    ]
];

pub const LPTMR0_BASE: usize = 0x4004_0000;

pub const LPTMR0: StaticRef<LptmrRegisters> =
    unsafe { StaticRef::new(LPTMR0_BASE as *const LptmrRegisters) };

pub const LPTMR_BASE_ADDRS: [usize; 1] = [LPTMR0_BASE];
pub const LPTMR_BASE_PTRS: [StaticRef<LptmrRegisters>; 1] = [LPTMR0];
pub const LPTMR_IRQS: [Interrupt; 1] = [Interrupt::LPTMR0];

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn prescaler_fields() {
        assert_eq!(Prescale::PRESCALE.shift, 3);
        assert_eq!(Prescale::PRESCALE.mask, 0xF);
        let mut psr: LocalRegisterCopy<u32, Prescale::Register> = LocalRegisterCopy::new(0);
        psr.modify(Prescale::PCS::LPO + Prescale::PBYP::SET);
        assert_eq!(psr.get(), 0b101);
    }
}
