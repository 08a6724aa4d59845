//! Analog-to-Digital Converter (ADC).
//!
//! The K64 has two 16-bit SAR converters. Each has two conversion channels
//! (`A` and `B`), selected by indexing `sc1` and `r`; only channel `A` can be
//! triggered by software.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    /// Memory mapped registers for the ADC. Section 35.3 of the K64 manual.
    pub Registers {
        /// Status and control registers 1, channels A and B
        (0x000 => pub sc1: [ReadWrite<u32, Control::Register>; 2]),
        (0x008 => pub cfg1: ReadWrite<u32, Configuration1::Register>),
        (0x00C => pub cfg2: ReadWrite<u32, Configuration2::Register>),
        /// Data result registers, channels A and B
        (0x010 => pub r: [ReadOnly<u32, DataResult::Register>; 2]),
        (0x018 => pub cv1: ReadWrite<u32, CompareValue::Register>),
        (0x01C => pub cv2: ReadWrite<u32, CompareValue::Register>),
        (0x020 => pub sc2: ReadWrite<u32, StatusControl2::Register>),
        (0x024 => pub sc3: ReadWrite<u32, StatusControl3::Register>),
        (0x028 => pub ofs: ReadWrite<u32, OffsetCorrection::Register>),
        (0x02C => pub pg: ReadWrite<u32, PlusSideGain::Register>),
        (0x030 => pub mg: ReadWrite<u32, MinusSideGain::Register>),
        /// Plus-side general calibration values
        (0x034 => pub clpd: ReadWrite<u32, CalibrationD::Register>),
        (0x038 => pub clps: ReadWrite<u32, CalibrationS::Register>),
        (0x03C => pub clp4: ReadWrite<u32, Calibration4::Register>),
        (0x040 => pub clp3: ReadWrite<u32, Calibration3::Register>),
        (0x044 => pub clp2: ReadWrite<u32, Calibration2::Register>),
        (0x048 => pub clp1: ReadWrite<u32, Calibration1::Register>),
        (0x04C => pub clp0: ReadWrite<u32, Calibration0::Register>),
        (0x050 => _reserved0),
        /// Minus-side general calibration values
        (0x054 => pub clmd: ReadWrite<u32, CalibrationD::Register>),
        (0x058 => pub clms: ReadWrite<u32, CalibrationS::Register>),
        (0x05C => pub clm4: ReadWrite<u32, Calibration4::Register>),
        (0x060 => pub clm3: ReadWrite<u32, Calibration3::Register>),
        (0x064 => pub clm2: ReadWrite<u32, Calibration2::Register>),
        (0x068 => pub clm1: ReadWrite<u32, Calibration1::Register>),
        (0x06C => pub clm0: ReadWrite<u32, Calibration0::Register>),
        (0x070 => @END),
    }
}

register_bitfields![u32,
    pub Control [
        /// Conversion Complete Flag
        COCO OFFSET(7) NUMBITS(1) [],
        /// Interrupt Enable
        AIEN OFFSET(6) NUMBITS(1) [],
        /// Differential Mode Enable
        DIFF OFFSET(5) NUMBITS(1) [],
        /// Input channel select
        ADCH OFFSET(0) NUMBITS(5) [
            Temperature = 0x1A,
            Bandgap = 0x1B,
            VREFSH = 0x1D,
            VREFSL = 0x1E,
            Disabled = 0x1F
        ]
    ],

    pub Configuration1 [
        /// Low-Power Configuration
        ADLPC OFFSET(7) NUMBITS(1) [],
        /// Clock Divide Select
        ADIV OFFSET(5) NUMBITS(2) [
            Div1 = 0,
            Div2 = 1,
            Div4 = 2,
            Div8 = 3
        ],
        /// Sample Time Configuration
        ADLSMP OFFSET(4) NUMBITS(1) [
            Short = 0,
            Long = 1
        ],
        /// Conversion Mode Selection
        MODE OFFSET(2) NUMBITS(2) [
            Bit8or9 = 0,
            Bit12or13 = 1,
            Bit10or11 = 2,
            Bit16 = 3
        ],
        /// Input Clock Select
        ADICLK OFFSET(0) NUMBITS(2) [
            BUSCLK = 0,
            BUSCLKDIV2 = 1,
            ALTCLK = 2,
            ADACK = 3
        ]
    ],

    pub Configuration2 [
        /// ADC Mux Select
        MUXSEL OFFSET(4) NUMBITS(1) [
            ChannelA = 0,
            ChannelB = 1
        ],
        /// Asynchronous Clock Output Enable
        ADACKEN OFFSET(3) NUMBITS(1) [],
        /// High-Speed Configuration
        ADHSC OFFSET(2) NUMBITS(1) [
            Normal = 0,
            HighSpeed = 1
        ],
        /// Long Sample Time Select
        ADLSTS OFFSET(0) NUMBITS(2) [
            Cycles24 = 0,
            Cycles16 = 1,
            Cycles10 = 2,
            Cycles6 = 3
        ]
    ],

    pub DataResult [
        D OFFSET(0) NUMBITS(16) []
    ],

    pub CompareValue [
        CV OFFSET(0) NUMBITS(16) []
    ],

    pub StatusControl2 [
        /// Conversion Active
        ADACT OFFSET(7) NUMBITS(1) [],
        /// Conversion Trigger Select
        ADTRG OFFSET(6) NUMBITS(1) [
            Software = 0,
            Hardware = 1
        ],
        /// Compare Function Enable
        ACFE OFFSET(5) NUMBITS(1) [],
        /// Compare Function Greater Than Enable
        ACFGT OFFSET(4) NUMBITS(1) [
            LessThan = 0,
            GreaterThanEqual = 1
        ],
        /// Compare Function Range Enable
        ACREN OFFSET(3) NUMBITS(1) [],
        /// DMA Enable
        DMAEN OFFSET(2) NUMBITS(1) [],
        /// Voltage Reference Selection
        REFSEL OFFSET(0) NUMBITS(2) [
            DefaultRef = 0,
            Alternate = 1
        ]
    ],

    pub StatusControl3 [
        /// Calibration
        CAL OFFSET(7) NUMBITS(1) [],
        /// Calibration Failed Flag
        CALF OFFSET(6) NUMBITS(1) [],
        /// Continuous Conversion Enable
        ADCO OFFSET(3) NUMBITS(1) [
            One = 0,
            Continuous = 1
        ],
        /// Hardware Average Enable
        AVGE OFFSET(2) NUMBITS(1) [],
        /// Hardware Average Select
        AVGS OFFSET(0) NUMBITS(2) [
            Avg4 = 0,
            Avg8 = 1,
            Avg16 = 2,
            Avg32 = 3
        ]
    ],

    pub OffsetCorrection [
        OFS OFFSET(0) NUMBITS(16) []
    ],

    pub PlusSideGain [
        PG OFFSET(0) NUMBITS(16) []
    ],

    pub MinusSideGain [
        MG OFFSET(0) NUMBITS(16) []
    ],

    pub CalibrationD [
        CLD OFFSET(0) NUMBITS(6) []
    ],

    pub CalibrationS [
        CLS OFFSET(0) NUMBITS(6) []
    ],

    pub Calibration4 [
        CL4 OFFSET(0) NUMBITS(10) []
    ],

    pub Calibration3 [
        CL3 OFFSET(0) NUMBITS(9) []
    ],

    pub Calibration2 [
        CL2 OFFSET(0) NUMBITS(8) []
    ],

    pub Calibration1 [
        CL1 OFFSET(0) NUMBITS(7) []
    ],

    pub Calibration0 [
        CL0 OFFSET(0) NUMBITS(6) []
    ]
];

pub const ADC0_BASE: usize = 0x4003_B000;
pub const ADC1_BASE: usize = 0x400B_B000;

pub const ADC0: StaticRef<Registers> =
    unsafe { StaticRef::new(ADC0_BASE as *const Registers) };
pub const ADC1: StaticRef<Registers> =
    unsafe { StaticRef::new(ADC1_BASE as *const Registers) };

pub const ADC_BASE_ADDRS: [usize; 2] = [ADC0_BASE, ADC1_BASE];
pub const ADC_BASE_PTRS: [StaticRef<Registers>; 2] = [ADC0, ADC1];
pub const ADC_IRQS: [Interrupt; 2] = [Interrupt::ADC0, Interrupt::ADC1];

/// Index of conversion channel A in `sc1` and `r`.
pub const CHANNEL_A: usize = 0;
/// Index of conversion channel B in `sc1` and `r`.
pub const CHANNEL_B: usize = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn channel_select_packs_into_low_bits() {
        let mut sc1: LocalRegisterCopy<u32, Control::Register> = LocalRegisterCopy::new(0);
        sc1.modify(Control::ADCH::Temperature + Control::AIEN::SET);
        assert_eq!(sc1.get(), 0x5A);
        assert!(!sc1.is_set(Control::COCO));
    }

    #[test]
    fn configuration_fields() {
        assert_eq!(Configuration1::ADIV.shift, 5);
        assert_eq!(Configuration1::ADIV.mask, 0b11);
        assert_eq!(Configuration1::MODE.shift, 2);
        let mut cfg1: LocalRegisterCopy<u32, Configuration1::Register> =
            LocalRegisterCopy::new(0);
        cfg1.modify(Configuration1::MODE::Bit16 + Configuration1::ADICLK::ADACK);
        assert_eq!(cfg1.get(), 0b1111);
    }

    #[test]
    fn calibration_widths() {
        assert_eq!(Calibration4::CL4.mask, 0x3FF);
        assert_eq!(Calibration0::CL0.mask, 0x3F);
        assert_eq!(CalibrationS::CLS.mask, 0x3F);
    }
}
