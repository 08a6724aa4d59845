//! Voltage Reference (VREF).

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub Registers {
        (0x0 => pub trm: ReadWrite<u8, Trim::Register>),
        (0x1 => pub sc: ReadWrite<u8, StatusControl::Register>),
        (0x2 => @END),
    }
}

register_bitfields![u8,
    pub Trim [
        /// Chop oscillator enable
        CHOPEN OFFSET(6) NUMBITS(1) [],
        /// Trim bits, about 0.5 mV per step
        TRIM OFFSET(0) NUMBITS(6) []
    ],
    pub StatusControl [
        /// Internal Voltage Reference enable
        VREFEN OFFSET(7) NUMBITS(1) [],
        /// Regulator enable
        REGEN OFFSET(6) NUMBITS(1) [],
        /// Second order curvature compensation enable
        ICOMPEN OFFSET(5) NUMBITS(1) [],
        /// Internal Voltage Reference stable
        VREFST OFFSET(2) NUMBITS(1) [],
        /// Buffer Mode selection
        MODE_LV OFFSET(0) NUMBITS(2) [
            Bandgap = 0,
            HighPower = 1,
            LowPower = 2
        ]
    ]
];

pub const VREF_BASE: usize = 0x4007_4000;

pub const VREF: StaticRef<Registers> = unsafe { StaticRef::new(VREF_BASE as *const Registers) };

pub const VREF_BASE_ADDRS: [usize; 1] = [VREF_BASE];
pub const VREF_BASE_PTRS: [StaticRef<Registers>; 1] = [VREF];

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{ReadWriteable, Writeable};

    #[repr(C, align(4))]
    struct Backing([u8; 2]);

    #[test]
    fn enable_high_power_buffer() {
        let mut backing = Backing([0; 2]);
        {
            let regs = unsafe { &*(backing.0.as_mut_ptr() as *const Registers) };
            regs.trm.write(Trim::CHOPEN::SET + Trim::TRIM.val(0x20));
            regs.sc.write(StatusControl::VREFEN::SET + StatusControl::REGEN::SET);
            regs.sc.modify(StatusControl::MODE_LV::HighPower);
        }
        assert_eq!(backing.0, [0x60, 0xC1]);
    }
}
