//! Inter-Integrated Circuit (I2C).

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    /// I2C memory map.
    pub Registers {
        (0x0 => pub a1: ReadWrite<u8, Address1::Register>),
        (0x1 => pub f: ReadWrite<u8, FrequencyDivider::Register>),
        (0x2 => pub c1: ReadWrite<u8, Control1::Register>),
        (0x3 => pub s: ReadWrite<u8, Status::Register>),
        (0x4 => pub d: ReadWrite<u8>),
        (0x5 => pub c2: ReadWrite<u8, Control2::Register>),
        (0x6 => pub flt: ReadWrite<u8, Filter::Register>),
        (0x7 => pub ra: ReadWrite<u8, RangeAddress::Register>),
        (0x8 => pub smb: ReadWrite<u8, SmbusControl::Register>),
        (0x9 => pub a2: ReadWrite<u8, Address2::Register>),
        /// SCL low timeout, high and low bytes
        (0xA => pub slth: ReadWrite<u8>),
        (0xB => pub sltl: ReadWrite<u8>),
        (0xC => @END),
    }
}

register_bitfields![u8,
    pub Address1 [
        AD OFFSET(1) NUMBITS(7) []
    ],
    pub FrequencyDivider [
        /// Multiplier Factor
        MULT OFFSET(6) NUMBITS(2) [
            Mul1 = 0,
            Mul2 = 1,
            Mul4 = 2
        ],
        /// Clock Rate
        ICR OFFSET(0) NUMBITS(6) []
    ],
    pub Control1 [
        IICEN OFFSET(7) NUMBITS(1) [],
        IICIE OFFSET(6) NUMBITS(1) [],
        /// Master Mode Select
        MST OFFSET(5) NUMBITS(1) [],
        /// Transmit Mode Select
        TX OFFSET(4) NUMBITS(1) [
            Receive = 0,
            Transmit = 1
        ],
        /// Transmit Acknowledge Enable
        TXAK OFFSET(3) NUMBITS(1) [],
        /// Repeat START
        RSTA OFFSET(2) NUMBITS(1) [],
        /// Wakeup Enable
        WUEN OFFSET(1) NUMBITS(1) [],
        DMAEN OFFSET(0) NUMBITS(1) []
    ],
    pub Status [
        /// Transfer Complete Flag
        TCF OFFSET(7) NUMBITS(1) [],
        /// Addressed As A Slave
        IAAS OFFSET(6) NUMBITS(1) [],
        BUSY OFFSET(5) NUMBITS(1) [],
        /// Arbitration Lost
        ARBL OFFSET(4) NUMBITS(1) [],
        /// Range Address Match
        RAM OFFSET(3) NUMBITS(1) [],
        /// Slave Read/Write
        SRW OFFSET(2) NUMBITS(1) [],
        /// Interrupt Flag
        IICIF OFFSET(1) NUMBITS(1) [],
        /// Receive Acknowledge
        RXAK OFFSET(0) NUMBITS(1) []
    ],
    pub Control2 [
        /// General Call Address Enable
        GCAEN OFFSET(7) NUMBITS(1) [],
        /// Address Extension
        ADEXT OFFSET(6) NUMBITS(1) [
            SevenBit = 0,
            TenBit = 1
        ],
        /// High Drive Select
        HDRS OFFSET(5) NUMBITS(1) [],
        /// Slave Baud Rate Control
        SBRC OFFSET(4) NUMBITS(1) [],
        /// Range Address Matching Enable
        RMEN OFFSET(3) NUMBITS(1) [],
        /// Slave Address, upper three bits of a 10-bit address
        AD OFFSET(0) NUMBITS(3) []
    ],
    pub Filter [
        /// Stop Hold Enable
        SHEN OFFSET(7) NUMBITS(1) [],
        /// I2C Bus Stop Detect Flag
        STOPF OFFSET(6) NUMBITS(1) [],
        /// I2C Bus Stop or Start Interrupt Enable
        SSIE OFFSET(5) NUMBITS(1) [],
        /// I2C Bus Start Detect Flag
        STARTF OFFSET(4) NUMBITS(1) [],
        /// Glitch filter width in bus clocks, 0 disables
        FLT OFFSET(0) NUMBITS(4) []
    ],
    pub RangeAddress [
        RAD OFFSET(1) NUMBITS(7) []
    ],
    pub SmbusControl [
        /// Fast NACK/ACK Enable
        FACK OFFSET(7) NUMBITS(1) [],
        /// SMBus Alert Response Address Enable
        ALERTEN OFFSET(6) NUMBITS(1) [],
        /// Second I2C Address Enable
        SIICAEN OFFSET(5) NUMBITS(1) [],
        /// Timeout Counter Clock Select
        TCKSEL OFFSET(4) NUMBITS(1) [
            BusDiv64 = 0,
            Bus = 1
        ],
        /// SCL Low Timeout Flag
        SLTF OFFSET(3) NUMBITS(1) [],
        /// SCL High Timeout Flag 1
        SHTF1 OFFSET(2) NUMBITS(1) [],
        /// SCL High Timeout Flag 2
        SHTF2 OFFSET(1) NUMBITS(1) [],
        /// SHTF2 Interrupt Enable
        SHTF2IE OFFSET(0) NUMBITS(1) []
    ],
    pub Address2 [
        SAD OFFSET(1) NUMBITS(7) []
    ]
];

pub const I2C0_BASE: usize = 0x4006_6000;
pub const I2C1_BASE: usize = 0x4006_7000;
pub const I2C2_BASE: usize = 0x400E_6000;

pub const I2C0: StaticRef<Registers> = unsafe { StaticRef::new(I2C0_BASE as *const Registers) };
pub const I2C1: StaticRef<Registers> = unsafe { StaticRef::new(I2C1_BASE as *const Registers) };
pub const I2C2: StaticRef<Registers> = unsafe { StaticRef::new(I2C2_BASE as *const Registers) };

pub const I2C_BASE_ADDRS: [usize; 3] = [I2C0_BASE, I2C1_BASE, I2C2_BASE];
pub const I2C_BASE_PTRS: [StaticRef<Registers>; 3] = [I2C0, I2C1, I2C2];
pub const I2C_IRQS: [Interrupt; 3] = [Interrupt::I2C0, Interrupt::I2C1, Interrupt::I2C2];

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};

    #[repr(C, align(4))]
    struct Backing([u8; 0xC]);

    #[test]
    fn master_transmit_setup() {
        let mut backing = Backing([0; 0xC]);
        backing.0[3] = 0x82;
        {
            let regs = unsafe { &*(backing.0.as_mut_ptr() as *const Registers) };
            regs.a1.write(Address1::AD.val(0x50));
            regs.f.write(FrequencyDivider::MULT::Mul2 + FrequencyDivider::ICR.val(0x1F));
            regs.c1.write(Control1::IICEN::SET + Control1::IICIE::SET);
            regs.c1.modify(Control1::MST::SET + Control1::TX::Transmit);
            assert!(regs.s.is_set(Status::TCF));
            assert!(regs.s.is_set(Status::IICIF));
            assert!(!regs.s.is_set(Status::BUSY));
        }
        assert_eq!(backing.0[0], 0xA0);
        assert_eq!(backing.0[1], 0x5F);
        assert_eq!(backing.0[2], 0xF0);
    }

    #[test]
    fn one_vector_per_instance() {
        assert_eq!(I2C_BASE_ADDRS.len(), I2C_IRQS.len());
    }
}
