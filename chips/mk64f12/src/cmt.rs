//! Carrier Modulator Transmitter (CMT).

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    pub Registers {
        /// Carrier generator high and low data, primary set
        (0x0 => pub cgh1: ReadWrite<u8>),
        (0x1 => pub cgl1: ReadWrite<u8>),
        /// Carrier generator high and low data, secondary set
        (0x2 => pub cgh2: ReadWrite<u8>),
        (0x3 => pub cgl2: ReadWrite<u8>),
        (0x4 => pub oc: ReadWrite<u8, OutputControl::Register>),
        (0x5 => pub msc: ReadWrite<u8, ModulatorStatusControl::Register>),
        /// Modulator mark period, high and low bytes
        (0x6 => pub cmd1: ReadWrite<u8>),
        (0x7 => pub cmd2: ReadWrite<u8>),
        /// Modulator space period, high and low bytes
        (0x8 => pub cmd3: ReadWrite<u8>),
        (0x9 => pub cmd4: ReadWrite<u8>),
        (0xA => pub pps: ReadWrite<u8, PrimaryPrescaler::Register>),
        (0xB => pub dma: ReadWrite<u8, DmaControl::Register>),
        (0xC => @END),
    }
}

register_bitfields![u8,
    pub OutputControl [
        /// IRO Latch Control
        IROL OFFSET(7) NUMBITS(1) [],
        /// CMT Output Polarity
        CMTPOL OFFSET(6) NUMBITS(1) [
            ActiveLow = 0,
            ActiveHigh = 1
        ],
        /// IRO Pin Enable
        IROPEN OFFSET(5) NUMBITS(1) []
    ],
    pub ModulatorStatusControl [
        /// End Of Cycle Status Flag
        EOCF OFFSET(7) NUMBITS(1) [],
        /// CMT Clock Divide Prescaler
        CMTDIV OFFSET(5) NUMBITS(2) [
            Div1 = 0,
            Div2 = 1,
            Div4 = 2,
            Div8 = 3
        ],
        /// Extended Space Enable
        EXSPC OFFSET(4) NUMBITS(1) [],
        /// Baseband Enable
        BASE OFFSET(3) NUMBITS(1) [],
        /// FSK Mode Select
        FSK OFFSET(2) NUMBITS(1) [],
        /// End of Cycle Interrupt Enable
        EOCIE OFFSET(1) NUMBITS(1) [],
        /// Modulator and Carrier Generator Enable
        MCGEN OFFSET(0) NUMBITS(1) []
    ],
    pub PrimaryPrescaler [
        /// Primary Prescaler Divider, divide by PPSDIV + 1
        PPSDIV OFFSET(0) NUMBITS(4) []
    ],
    pub DmaControl [
        DMA OFFSET(0) NUMBITS(1) []
    ]
];

pub const CMT_BASE: usize = 0x4006_2000;

pub const CMT: StaticRef<Registers> = unsafe { StaticRef::new(CMT_BASE as *const Registers) };

pub const CMT_BASE_ADDRS: [usize; 1] = [CMT_BASE];
pub const CMT_BASE_PTRS: [StaticRef<Registers>; 1] = [CMT];
pub const CMT_IRQS: [Interrupt; 1] = [Interrupt::CMT];

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};

    #[repr(C, align(4))]
    struct Backing([u8; 0xC]);

    #[test]
    fn modulator_setup() {
        let mut backing = Backing([0; 0xC]);
        {
            let regs = unsafe { &*(backing.0.as_mut_ptr() as *const Registers) };
            regs.cgh1.set(0x12);
            regs.cgl1.set(0x34);
            regs.pps.write(PrimaryPrescaler::PPSDIV.val(0xB));
            regs.msc
                .write(ModulatorStatusControl::CMTDIV::Div4 + ModulatorStatusControl::MCGEN::SET);
            regs.msc.modify(ModulatorStatusControl::EOCIE::SET);
            assert!(matches!(
                regs.msc.read_as_enum(ModulatorStatusControl::CMTDIV),
                Some(ModulatorStatusControl::CMTDIV::Value::Div4)
            ));
        }
        assert_eq!(backing.0[0], 0x12);
        assert_eq!(backing.0[1], 0x34);
        assert_eq!(backing.0[5], 0x43);
        assert_eq!(backing.0[0xA], 0x0B);
    }
}
