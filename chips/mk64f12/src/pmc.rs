//! Power Management Controller (PMC).

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    pub Registers {
        (0x0 => pub lvdsc1: ReadWrite<u8, LowVoltageDetect1::Register>),
        (0x1 => pub lvdsc2: ReadWrite<u8, LowVoltageDetect2::Register>),
        (0x2 => pub regsc: ReadWrite<u8, RegulatorStatusControl::Register>),
        (0x3 => @END),
    }
}

register_bitfields![u8,
    pub LowVoltageDetect1 [
        /// Low-Voltage Detect Flag
        LVDF OFFSET(7) NUMBITS(1) [],
        /// Low-Voltage Detect Acknowledge
        LVDACK OFFSET(6) NUMBITS(1) [],
        /// Low-Voltage Detect Interrupt Enable
        LVDIE OFFSET(5) NUMBITS(1) [],
        /// Low-Voltage Detect Reset Enable
        LVDRE OFFSET(4) NUMBITS(1) [],
        /// Low-Voltage Detect Voltage Select
        LVDV OFFSET(0) NUMBITS(2) [
            Low = 0,
            High = 1
        ]
    ],
    pub LowVoltageDetect2 [
        /// Low-Voltage Warning Flag
        LVWF OFFSET(7) NUMBITS(1) [],
        LVWACK OFFSET(6) NUMBITS(1) [],
        LVWIE OFFSET(5) NUMBITS(1) [],
        /// Low-Voltage Warning Voltage Select
        LVWV OFFSET(0) NUMBITS(2) [
            Low = 0,
            Mid1 = 1,
            Mid2 = 2,
            High = 3
        ]
    ],
    pub RegulatorStatusControl [
        /// Bandgap Enable In VLPx Operation
        BGEN OFFSET(4) NUMBITS(1) [],
        /// Acknowledge Isolation, write 1 to release I/O after VLLS
        ACKISO OFFSET(3) NUMBITS(1) [],
        /// Regulator In Run Regulation Status
        REGONS OFFSET(2) NUMBITS(1) [],
        /// Bandgap Buffer Enable
        BGBE OFFSET(0) NUMBITS(1) []
    ]
];

pub const PMC_BASE: usize = 0x4007_D000;

pub const PMC: StaticRef<Registers> = unsafe { StaticRef::new(PMC_BASE as *const Registers) };

pub const PMC_BASE_ADDRS: [usize; 1] = [PMC_BASE];
pub const PMC_BASE_PTRS: [StaticRef<Registers>; 1] = [PMC];
pub const PMC_IRQS: [Interrupt; 1] = [Interrupt::LVD_LVW];

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{ReadWriteable, Readable};

    #[repr(C, align(4))]
    struct Backing([u8; 4]);

    #[test]
    fn acknowledge_low_voltage_detect() {
        let mut backing = Backing([0; 4]);
        backing.0[0] = 0x80 | 0x10;
        backing.0[2] = 0x08;
        {
            let regs = unsafe { &*(backing.0.as_mut_ptr() as *const Registers) };
            assert!(regs.lvdsc1.is_set(LowVoltageDetect1::LVDF));
            assert!(regs.regsc.is_set(RegulatorStatusControl::ACKISO));
            regs.lvdsc1.modify(LowVoltageDetect1::LVDACK::SET);
            regs.lvdsc2.modify(LowVoltageDetect2::LVWV::Mid2);
        }
        assert_eq!(backing.0[0], 0xD0);
        assert_eq!(backing.0[1], 0x02);
    }
}
