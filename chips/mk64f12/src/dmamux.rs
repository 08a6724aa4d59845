//! DMA channel multiplexer (DMAMUX).
//!
//! Routes one of 64 request sources to each of the 16 eDMA channels.

use core::fmt;

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    /// Memory registers for the DMA channel mux.
    pub Registers {
        (0x00 => pub chcfg: [ReadWrite<u8, ChannelConfiguration::Register>; 16]),
        (0x10 => @END),
    }
}

register_bitfields![u8,
    pub ChannelConfiguration [
        /// DMA Channel Enable
        ENBL OFFSET(7) NUMBITS(1) [],
        /// DMA Channel Trigger Enable
        TRIG OFFSET(6) NUMBITS(1) [],
        /// DMA Channel Source
        SOURCE OFFSET(0) NUMBITS(6) []
    ]
];

/// The peripheral request sources a channel can be assigned to (Table 3-23).
/// `*_Rx` sources move data from peripheral to memory, `*_Tx` from memory to
/// peripheral.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum DmaRequestSource {
    Disabled = 0,
    UART0_Rx = 2,
    UART0_Tx = 3,
    UART1_Rx = 4,
    UART1_Tx = 5,
    UART2_Rx = 6,
    UART2_Tx = 7,
    UART3_Rx = 8,
    UART3_Tx = 9,
    /// UART4 transmit or receive
    UART4 = 10,
    /// UART5 transmit or receive
    UART5 = 11,
    I2S0_Rx = 12,
    I2S0_Tx = 13,
    SPI0_Rx = 14,
    SPI0_Tx = 15,
    /// SPI1 transmit or receive
    SPI1 = 16,
    /// SPI2 transmit or receive
    SPI2 = 17,
    I2C0 = 18,
    /// Shared by I2C1 and I2C2
    I2C1_I2C2 = 19,
    FTM0_CH0 = 20,
    FTM0_CH1 = 21,
    FTM0_CH2 = 22,
    FTM0_CH3 = 23,
    FTM0_CH4 = 24,
    FTM0_CH5 = 25,
    FTM0_CH6 = 26,
    FTM0_CH7 = 27,
    FTM1_CH0 = 28,
    FTM1_CH1 = 29,
    FTM2_CH0 = 30,
    FTM2_CH1 = 31,
    FTM3_CH0 = 32,
    FTM3_CH1 = 33,
    FTM3_CH2 = 34,
    FTM3_CH3 = 35,
    FTM3_CH4 = 36,
    FTM3_CH5 = 37,
    FTM3_CH6 = 38,
    FTM3_CH7 = 39,
    ADC0 = 40,
    ADC1 = 41,
    CMP0 = 42,
    CMP1 = 43,
    CMP2 = 44,
    DAC0 = 45,
    DAC1 = 46,
    CMT = 47,
    PDB = 48,
    PortA = 49,
    PortB = 50,
    PortC = 51,
    PortD = 52,
    PortE = 53,
    IEEE1588_Timer0 = 54,
    IEEE1588_Timer1 = 55,
    IEEE1588_Timer2 = 56,
    IEEE1588_Timer3 = 57,
    AlwaysOn58 = 58,
    AlwaysOn59 = 59,
    AlwaysOn60 = 60,
    AlwaysOn61 = 61,
    AlwaysOn62 = 62,
    AlwaysOn63 = 63,
}

impl DmaRequestSource {
    /// The `CHCFG[SOURCE]` slot number.
    pub fn slot(self) -> u8 {
        self as u8
    }

    /// Sources that keep requesting as long as the channel is enabled.
    pub fn is_always_on(self) -> bool {
        self as u8 >= DmaRequestSource::AlwaysOn58 as u8
    }

    /// Channel configuration value routing this source, enabled.
    pub fn enabled(self) -> tock_registers::fields::FieldValue<u8, ChannelConfiguration::Register> {
        ChannelConfiguration::ENBL::SET + ChannelConfiguration::SOURCE.val(self as u8)
    }
}

impl fmt::Display for DmaRequestSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} (slot {})", self, self.slot())
    }
}

pub const DMAMUX_BASE: usize = 0x4002_1000;

pub const DMAMUX: StaticRef<Registers> =
    unsafe { StaticRef::new(DMAMUX_BASE as *const Registers) };

pub const DMAMUX_BASE_ADDRS: [usize; 1] = [DMAMUX_BASE];
pub const DMAMUX_BASE_PTRS: [StaticRef<Registers>; 1] = [DMAMUX];

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn slots() {
        assert_eq!(DmaRequestSource::UART0_Rx.slot(), 2);
        assert_eq!(DmaRequestSource::I2S0_Tx.slot(), 13);
        assert_eq!(DmaRequestSource::FTM3_CH7.slot(), 39);
        assert_eq!(DmaRequestSource::PortE.slot(), 53);
        assert!(DmaRequestSource::AlwaysOn63.is_always_on());
        assert!(!DmaRequestSource::IEEE1588_Timer3.is_always_on());
    }

    #[test]
    fn enabled_source_value() {
        let mut chcfg: LocalRegisterCopy<u8, ChannelConfiguration::Register> =
            LocalRegisterCopy::new(0);
        chcfg.modify(DmaRequestSource::ADC0.enabled());
        assert_eq!(chcfg.get(), 0x80 | 40);
        assert_eq!(chcfg.read(ChannelConfiguration::SOURCE), 40);
    }
}
