//! 12-bit Digital-to-Analog Converter (DAC).

use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

/// Depth of the data buffer.
pub const BUFFER_LEN: usize = 16;

register_structs! {
    /// DAC memory map.
    pub Registers {
        (0x00 => pub dat: [DataRegister; BUFFER_LEN]),
        (0x20 => pub sr: ReadWrite<u8, Status::Register>),
        (0x21 => pub c0: ReadWrite<u8, Control0::Register>),
        (0x22 => pub c1: ReadWrite<u8, Control1::Register>),
        (0x23 => pub c2: ReadWrite<u8, Control2::Register>),
        (0x24 => @END),
    },

    /// One 12-bit buffer word, split into low and high bytes.
    pub DataRegister {
        (0x0 => pub datl: ReadWrite<u8, DataLow::Register>),
        (0x1 => pub dath: ReadWrite<u8, DataHigh::Register>),
        (0x2 => @END),
    }
}

register_bitfields![u8,
    pub DataLow [
        DATA0 OFFSET(0) NUMBITS(8) []
    ],
    pub DataHigh [
        DATA1 OFFSET(0) NUMBITS(4) []
    ],
    pub Status [
        /// Buffer Watermark Flag
        DACBFWMF OFFSET(2) NUMBITS(1) [],
        /// Buffer Read Pointer Top Position Flag
        DACBFRPTF OFFSET(1) NUMBITS(1) [],
        /// Buffer Read Pointer Bottom Position Flag
        DACBFRPBF OFFSET(0) NUMBITS(1) []
    ],
    pub Control0 [
        DACEN OFFSET(7) NUMBITS(1) [],
        /// Reference Select
        DACRFS OFFSET(6) NUMBITS(1) [
            Vref1 = 0,
            Vref2 = 1
        ],
        /// Trigger Select
        DACTRGSEL OFFSET(5) NUMBITS(1) [
            Hardware = 0,
            Software = 1
        ],
        /// Software Trigger
        DACSWTRG OFFSET(4) NUMBITS(1) [],
        /// Low Power Control
        LPEN OFFSET(3) NUMBITS(1) [],
        /// Buffer Watermark Interrupt Enable
        DACBWIEN OFFSET(2) NUMBITS(1) [],
        /// Buffer Read Pointer Top Flag Interrupt Enable
        DACBTIEN OFFSET(1) NUMBITS(1) [],
        /// Buffer Read Pointer Bottom Flag Interrupt Enable
        DACBBIEN OFFSET(0) NUMBITS(1) []
    ],
    pub Control1 [
        DMAEN OFFSET(7) NUMBITS(1) [],
        /// Buffer Watermark Select, in words from the upper limit
        DACBFWM OFFSET(3) NUMBITS(2) [
            Words1 = 0,
            Words2 = 1,
            Words3 = 2,
            Words4 = 3
        ],
        /// Buffer Work Mode Select
        DACBFMD OFFSET(1) NUMBITS(2) [
            Normal = 0,
            Swing = 1,
            OneTimeScan = 2
        ],
        /// Buffer Enable
        DACBFEN OFFSET(0) NUMBITS(1) []
    ],
    pub Control2 [
        /// Buffer Read Pointer
        DACBFRP OFFSET(4) NUMBITS(4) [],
        /// Buffer Upper Limit
        DACBFUP OFFSET(0) NUMBITS(4) []
    ]
];

impl DataRegister {
    /// Writes a 12-bit sample, low byte first.
    pub fn set_sample(&self, sample: u16) {
        self.datl.write(DataLow::DATA0.val(sample as u8));
        self.dath.write(DataHigh::DATA1.val((sample >> 8) as u8));
    }

    pub fn sample(&self) -> u16 {
        u16::from(self.datl.read(DataLow::DATA0)) | u16::from(self.dath.read(DataHigh::DATA1)) << 8
    }
}

pub const DAC0_BASE: usize = 0x400C_C000;
pub const DAC1_BASE: usize = 0x400C_D000;

pub const DAC0: StaticRef<Registers> = unsafe { StaticRef::new(DAC0_BASE as *const Registers) };
pub const DAC1: StaticRef<Registers> = unsafe { StaticRef::new(DAC1_BASE as *const Registers) };

pub const DAC_BASE_ADDRS: [usize; 2] = [DAC0_BASE, DAC1_BASE];
pub const DAC_BASE_PTRS: [StaticRef<Registers>; 2] = [DAC0, DAC1];
pub const DAC_IRQS: [Interrupt; 2] = [Interrupt::DAC0, Interrupt::DAC1];

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(C, align(4))]
    struct Backing([u8; 0x24]);

    #[test]
    fn samples_split_across_bytes() {
        let mut backing = Backing([0; 0x24]);
        {
            let regs = unsafe { &*(backing.0.as_mut_ptr() as *const Registers) };
            regs.dat[3].set_sample(0xABC);
            assert_eq!(regs.dat[3].sample(), 0xABC);
            regs.dat[15].set_sample(0xFFFF);
            assert_eq!(regs.dat[15].sample(), 0xFFF);
        }
        assert_eq!(backing.0[6], 0xBC);
        assert_eq!(backing.0[7], 0x0A);
        assert_eq!(backing.0[31], 0x0F);
        assert_eq!(backing.0[0x20], 0);
    }
}
