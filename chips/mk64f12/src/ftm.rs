//! FlexTimer Module (FTM).
//!
//! FTM0 and FTM3 have eight channels, FTM1 and FTM2 have two. All four share
//! one register layout; the missing channels read as reserved.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

pub const NUM_CHANNELS: usize = 8;

register_structs! {
    /// FTM memory map.
    pub Registers {
        (0x00 => pub sc: ReadWrite<u32, StatusControl::Register>),
        (0x04 => pub cnt: ReadWrite<u32, Count::Register>),
        /// Modulo (MOD)
        (0x08 => pub modulo: ReadWrite<u32, Count::Register>),
        (0x0C => pub controls: [Channel; NUM_CHANNELS]),
        (0x4C => pub cntin: ReadWrite<u32, Count::Register>),
        (0x50 => pub status: ReadWrite<u32, CaptureCompareStatus::Register>),
        (0x54 => pub mode: ReadWrite<u32, FeaturesMode::Register>),
        (0x58 => pub sync: ReadWrite<u32, Synchronization::Register>),
        (0x5C => pub outinit: ReadWrite<u32, OutputInit::Register>),
        (0x60 => pub outmask: ReadWrite<u32, OutputMask::Register>),
        (0x64 => pub combine: ReadWrite<u32, Combine::Register>),
        (0x68 => pub deadtime: ReadWrite<u32, Deadtime::Register>),
        (0x6C => pub exttrig: ReadWrite<u32, ExternalTrigger::Register>),
        (0x70 => pub pol: ReadWrite<u32, ChannelPolarity::Register>),
        (0x74 => pub fms: ReadWrite<u32, FaultModeStatus::Register>),
        (0x78 => pub filter: ReadWrite<u32, InputCaptureFilter::Register>),
        (0x7C => pub fltctrl: ReadWrite<u32, FaultControl::Register>),
        (0x80 => pub qdctrl: ReadWrite<u32, QuadratureDecoder::Register>),
        (0x84 => pub conf: ReadWrite<u32, Configuration::Register>),
        (0x88 => pub fltpol: ReadWrite<u32, FaultInputPolarity::Register>),
        (0x8C => pub synconf: ReadWrite<u32, SynchronizationConfiguration::Register>),
        (0x90 => pub invctrl: ReadWrite<u32, InvertingControl::Register>),
        (0x94 => pub swoctrl: ReadWrite<u32, SoftwareOutputControl::Register>),
        (0x98 => pub pwmload: ReadWrite<u32, PwmLoad::Register>),
        (0x9C => @END),
    },

    /// Channel status and control plus channel value.
    pub Channel {
        (0x0 => pub csc: ReadWrite<u32, ChannelStatusControl::Register>),
        (0x4 => pub cv: ReadWrite<u32, Count::Register>),
        (0x8 => @END),
    }
}

register_bitfields![u32,
    pub StatusControl [
        /// Timer Overflow Flag
        TOF OFFSET(7) NUMBITS(1) [],
        /// Timer Overflow Interrupt Enable
        TOIE OFFSET(6) NUMBITS(1) [],
        /// Center-Aligned PWM Select
        CPWMS OFFSET(5) NUMBITS(1) [
            UpCounting = 0,
            UpDownCounting = 1
        ],
        /// Clock Source Selection
        CLKS OFFSET(3) NUMBITS(2) [
            None = 0,
            SystemClock = 1,
            FixedFrequency = 2,
            External = 3
        ],
        /// Prescale Factor Selection
        PS OFFSET(0) NUMBITS(3) [
            Div1 = 0,
            Div2 = 1,
            Div4 = 2,
            Div8 = 3,
            Div16 = 4,
            Div32 = 5,
            Div64 = 6,
            Div128 = 7
        ]
    ],
    /// CNT, MOD, CNTIN and CnV all hold a 16-bit count.
    pub Count [
        COUNT OFFSET(0) NUMBITS(16) []
    ],
    pub ChannelStatusControl [
        /// Channel Flag
        CHF OFFSET(7) NUMBITS(1) [],
        /// Channel Interrupt Enable
        CHIE OFFSET(6) NUMBITS(1) [],
        /// Channel Mode Select
        MSB OFFSET(5) NUMBITS(1) [],
        MSA OFFSET(4) NUMBITS(1) [],
        /// Edge or Level Select
        ELSB OFFSET(3) NUMBITS(1) [],
        ELSA OFFSET(2) NUMBITS(1) [],
        DMA OFFSET(0) NUMBITS(1) []
    ],
    pub CaptureCompareStatus [
        CH7F OFFSET(7) NUMBITS(1) [],
        CH6F OFFSET(6) NUMBITS(1) [],
        CH5F OFFSET(5) NUMBITS(1) [],
        CH4F OFFSET(4) NUMBITS(1) [],
        CH3F OFFSET(3) NUMBITS(1) [],
        CH2F OFFSET(2) NUMBITS(1) [],
        CH1F OFFSET(1) NUMBITS(1) [],
        CH0F OFFSET(0) NUMBITS(1) []
    ],
    pub FeaturesMode [
        /// Fault Interrupt Enable
        FAULTIE OFFSET(7) NUMBITS(1) [],
        /// Fault Control Mode
        FAULTM OFFSET(5) NUMBITS(2) [
            Disabled = 0,
            EvenChannelsManual = 1,
            AllChannelsManual = 2,
            AllChannelsAutomatic = 3
        ],
        /// Capture Test Mode Enable
        CAPTEST OFFSET(4) NUMBITS(1) [],
        /// PWM Synchronization Mode
        PWMSYNC OFFSET(3) NUMBITS(1) [],
        /// Write Protection Disable
        WPDIS OFFSET(2) NUMBITS(1) [],
        /// Initialize The Channels Output
        INIT OFFSET(1) NUMBITS(1) [],
        /// FTM Enable
        FTMEN OFFSET(0) NUMBITS(1) []
    ],
    pub Synchronization [
        SWSYNC OFFSET(7) NUMBITS(1) [],
        TRIG2 OFFSET(6) NUMBITS(1) [],
        TRIG1 OFFSET(5) NUMBITS(1) [],
        TRIG0 OFFSET(4) NUMBITS(1) [],
        SYNCHOM OFFSET(3) NUMBITS(1) [],
        REINIT OFFSET(2) NUMBITS(1) [],
        CNTMAX OFFSET(1) NUMBITS(1) [],
        CNTMIN OFFSET(0) NUMBITS(1) []
    ],
    pub OutputInit [
        CH7OI OFFSET(7) NUMBITS(1) [],
        CH6OI OFFSET(6) NUMBITS(1) [],
        CH5OI OFFSET(5) NUMBITS(1) [],
        CH4OI OFFSET(4) NUMBITS(1) [],
        CH3OI OFFSET(3) NUMBITS(1) [],
        CH2OI OFFSET(2) NUMBITS(1) [],
        CH1OI OFFSET(1) NUMBITS(1) [],
        CH0OI OFFSET(0) NUMBITS(1) []
    ],
    pub OutputMask [
        CH7OM OFFSET(7) NUMBITS(1) [],
        CH6OM OFFSET(6) NUMBITS(1) [],
        CH5OM OFFSET(5) NUMBITS(1) [],
        CH4OM OFFSET(4) NUMBITS(1) [],
        CH3OM OFFSET(3) NUMBITS(1) [],
        CH2OM OFFSET(2) NUMBITS(1) [],
        CH1OM OFFSET(1) NUMBITS(1) [],
        CH0OM OFFSET(0) NUMBITS(1) []
    ],
    /// Per channel pair `n` (channels 2n and 2n+1), eight bits apart.
    pub Combine [
        FAULTEN3 OFFSET(30) NUMBITS(1) [],
        SYNCEN3 OFFSET(29) NUMBITS(1) [],
        DTEN3 OFFSET(28) NUMBITS(1) [],
        DECAP3 OFFSET(27) NUMBITS(1) [],
        DECAPEN3 OFFSET(26) NUMBITS(1) [],
        COMP3 OFFSET(25) NUMBITS(1) [],
        COMBINE3 OFFSET(24) NUMBITS(1) [],
        FAULTEN2 OFFSET(22) NUMBITS(1) [],
        SYNCEN2 OFFSET(21) NUMBITS(1) [],
        DTEN2 OFFSET(20) NUMBITS(1) [],
        DECAP2 OFFSET(19) NUMBITS(1) [],
        DECAPEN2 OFFSET(18) NUMBITS(1) [],
        COMP2 OFFSET(17) NUMBITS(1) [],
        COMBINE2 OFFSET(16) NUMBITS(1) [],
        FAULTEN1 OFFSET(14) NUMBITS(1) [],
        SYNCEN1 OFFSET(13) NUMBITS(1) [],
        DTEN1 OFFSET(12) NUMBITS(1) [],
        DECAP1 OFFSET(11) NUMBITS(1) [],
        DECAPEN1 OFFSET(10) NUMBITS(1) [],
        COMP1 OFFSET(9) NUMBITS(1) [],
        COMBINE1 OFFSET(8) NUMBITS(1) [],
        FAULTEN0 OFFSET(6) NUMBITS(1) [],
        SYNCEN0 OFFSET(5) NUMBITS(1) [],
        DTEN0 OFFSET(4) NUMBITS(1) [],
        DECAP0 OFFSET(3) NUMBITS(1) [],
        DECAPEN0 OFFSET(2) NUMBITS(1) [],
        COMP0 OFFSET(1) NUMBITS(1) [],
        COMBINE0 OFFSET(0) NUMBITS(1) []
    ],
    pub Deadtime [
        /// Deadtime Prescaler Value
        DTPS OFFSET(6) NUMBITS(2) [
            Div1 = 0,
            Div4 = 2,
            Div16 = 3
        ],
        /// Deadtime Value
        DTVAL OFFSET(0) NUMBITS(6) []
    ],
    pub ExternalTrigger [
        /// Channel Trigger Flag
        TRIGF OFFSET(7) NUMBITS(1) [],
        /// Initialization Trigger Enable
        INITTRIGEN OFFSET(6) NUMBITS(1) [],
        CH1TRIG OFFSET(5) NUMBITS(1) [],
        CH0TRIG OFFSET(4) NUMBITS(1) [],
        CH5TRIG OFFSET(3) NUMBITS(1) [],
        CH4TRIG OFFSET(2) NUMBITS(1) [],
        CH3TRIG OFFSET(1) NUMBITS(1) [],
        CH2TRIG OFFSET(0) NUMBITS(1) []
    ],
    pub ChannelPolarity [
        POL7 OFFSET(7) NUMBITS(1) [],
        POL6 OFFSET(6) NUMBITS(1) [],
        POL5 OFFSET(5) NUMBITS(1) [],
        POL4 OFFSET(4) NUMBITS(1) [],
        POL3 OFFSET(3) NUMBITS(1) [],
        POL2 OFFSET(2) NUMBITS(1) [],
        POL1 OFFSET(1) NUMBITS(1) [],
        POL0 OFFSET(0) NUMBITS(1) []
    ],
    pub FaultModeStatus [
        /// Fault Detection Flag
        FAULTF OFFSET(7) NUMBITS(1) [],
        /// Write Protection Enable
        WPEN OFFSET(6) NUMBITS(1) [],
        /// Logic OR of the enabled fault inputs
        FAULTIN OFFSET(5) NUMBITS(1) [],
        FAULTF3 OFFSET(3) NUMBITS(1) [],
        FAULTF2 OFFSET(2) NUMBITS(1) [],
        FAULTF1 OFFSET(1) NUMBITS(1) [],
        FAULTF0 OFFSET(0) NUMBITS(1) []
    ],
    pub InputCaptureFilter [
        CH3FVAL OFFSET(12) NUMBITS(4) [],
        CH2FVAL OFFSET(8) NUMBITS(4) [],
        CH1FVAL OFFSET(4) NUMBITS(4) [],
        CH0FVAL OFFSET(0) NUMBITS(4) []
    ],
    pub FaultControl [
        /// Fault Input Filter
        FFVAL OFFSET(8) NUMBITS(4) [],
        FFLTR3EN OFFSET(7) NUMBITS(1) [],
        FFLTR2EN OFFSET(6) NUMBITS(1) [],
        FFLTR1EN OFFSET(5) NUMBITS(1) [],
        FFLTR0EN OFFSET(4) NUMBITS(1) [],
        FAULT3EN OFFSET(3) NUMBITS(1) [],
        FAULT2EN OFFSET(2) NUMBITS(1) [],
        FAULT1EN OFFSET(1) NUMBITS(1) [],
        FAULT0EN OFFSET(0) NUMBITS(1) []
    ],
    pub QuadratureDecoder [
        PHAFLTREN OFFSET(7) NUMBITS(1) [],
        PHBFLTREN OFFSET(6) NUMBITS(1) [],
        PHAPOL OFFSET(5) NUMBITS(1) [],
        PHBPOL OFFSET(4) NUMBITS(1) [],
        /// Quadrature Decoder Mode
        QUADMODE OFFSET(3) NUMBITS(1) [
            PhaseAB = 0,
            CountDirection = 1
        ],
        /// Counting direction, read only
        QUADIR OFFSET(2) NUMBITS(1) [],
        /// Overflow or underflow direction, read only
        TOFDIR OFFSET(1) NUMBITS(1) [],
        QUADEN OFFSET(0) NUMBITS(1) []
    ],
    pub Configuration [
        /// Global Time Base Output
        GTBEOUT OFFSET(10) NUMBITS(1) [],
        /// Global Time Base Enable
        GTBEEN OFFSET(9) NUMBITS(1) [],
        /// Behavior in debug mode
        BDMMODE OFFSET(6) NUMBITS(2) [],
        /// Overflows between TOF assertions
        NUMTOF OFFSET(0) NUMBITS(5) []
    ],
    pub FaultInputPolarity [
        FLT3POL OFFSET(3) NUMBITS(1) [],
        FLT2POL OFFSET(2) NUMBITS(1) [],
        FLT1POL OFFSET(1) NUMBITS(1) [],
        FLT0POL OFFSET(0) NUMBITS(1) []
    ],
    pub SynchronizationConfiguration [
        HWSOC OFFSET(20) NUMBITS(1) [],
        HWINVC OFFSET(19) NUMBITS(1) [],
        HWOM OFFSET(18) NUMBITS(1) [],
        HWWRBUF OFFSET(17) NUMBITS(1) [],
        HWRSTCNT OFFSET(16) NUMBITS(1) [],
        SWSOC OFFSET(12) NUMBITS(1) [],
        SWINVC OFFSET(11) NUMBITS(1) [],
        SWOM OFFSET(10) NUMBITS(1) [],
        SWWRBUF OFFSET(9) NUMBITS(1) [],
        SWRSTCNT OFFSET(8) NUMBITS(1) [],
        /// Enhanced PWM synchronization
        SYNCMODE OFFSET(7) NUMBITS(1) [],
        SWOC OFFSET(5) NUMBITS(1) [],
        INVC OFFSET(4) NUMBITS(1) [],
        CNTINC OFFSET(2) NUMBITS(1) [],
        HWTRIGMODE OFFSET(0) NUMBITS(1) []
    ],
    pub InvertingControl [
        INV3EN OFFSET(3) NUMBITS(1) [],
        INV2EN OFFSET(2) NUMBITS(1) [],
        INV1EN OFFSET(1) NUMBITS(1) [],
        INV0EN OFFSET(0) NUMBITS(1) []
    ],
    pub SoftwareOutputControl [
        CH7OCV OFFSET(15) NUMBITS(1) [],
        CH6OCV OFFSET(14) NUMBITS(1) [],
        CH5OCV OFFSET(13) NUMBITS(1) [],
        CH4OCV OFFSET(12) NUMBITS(1) [],
        CH3OCV OFFSET(11) NUMBITS(1) [],
        CH2OCV OFFSET(10) NUMBITS(1) [],
        CH1OCV OFFSET(9) NUMBITS(1) [],
        CH0OCV OFFSET(8) NUMBITS(1) [],
        CH7OC OFFSET(7) NUMBITS(1) [],
        CH6OC OFFSET(6) NUMBITS(1) [],
        CH5OC OFFSET(5) NUMBITS(1) [],
        CH4OC OFFSET(4) NUMBITS(1) [],
        CH3OC OFFSET(3) NUMBITS(1) [],
        CH2OC OFFSET(2) NUMBITS(1) [],
        CH1OC OFFSET(1) NUMBITS(1) [],
        CH0OC OFFSET(0) NUMBITS(1) []
    ],
    pub PwmLoad [
        /// Load Enable
        LDOK OFFSET(9) NUMBITS(1) [],
        CH7SEL OFFSET(7) NUMBITS(1) [],
        CH6SEL OFFSET(6) NUMBITS(1) [],
        CH5SEL OFFSET(5) NUMBITS(1) [],
        CH4SEL OFFSET(4) NUMBITS(1) [],
        CH3SEL OFFSET(3) NUMBITS(1) [],
        CH2SEL OFFSET(2) NUMBITS(1) [],
        CH1SEL OFFSET(1) NUMBITS(1) [],
        CH0SEL OFFSET(0) NUMBITS(1) []
    ]
];

pub const FTM0_BASE: usize = 0x4003_8000;
pub const FTM1_BASE: usize = 0x4003_9000;
pub const FTM2_BASE: usize = 0x4003_A000;
pub const FTM3_BASE: usize = 0x400B_9000;

pub const FTM0: StaticRef<Registers> = unsafe { StaticRef::new(FTM0_BASE as *const Registers) };
pub const FTM1: StaticRef<Registers> = unsafe { StaticRef::new(FTM1_BASE as *const Registers) };
pub const FTM2: StaticRef<Registers> = unsafe { StaticRef::new(FTM2_BASE as *const Registers) };
pub const FTM3: StaticRef<Registers> = unsafe { StaticRef::new(FTM3_BASE as *const Registers) };

pub const FTM_BASE_ADDRS: [usize; 4] = [FTM0_BASE, FTM1_BASE, FTM2_BASE, FTM3_BASE];
pub const FTM_BASE_PTRS: [StaticRef<Registers>; 4] = [FTM0, FTM1, FTM2, FTM3];
pub const FTM_IRQS: [Interrupt; 4] = [
    Interrupt::FTM0,
    Interrupt::FTM1,
    Interrupt::FTM2,
    Interrupt::FTM3,
];

/// Channels implemented by each instance, indexed like `FTM_BASE_PTRS`.
pub const FTM_CHANNEL_COUNTS: [usize; 4] = [8, 2, 2, 8];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(size_of::<Channel>(), 8);
        assert_eq!(offset_of!(Registers, controls), 0x0C);
        assert_eq!(offset_of!(Registers, cntin), 0x4C);
        assert_eq!(offset_of!(Registers, pwmload), 0x98);
        assert_eq!(size_of::<Registers>(), 0x9C);
    }

    #[test]
    fn combine_pairs_are_byte_spaced() {
        assert_eq!(Combine::COMBINE0.shift, 0);
        assert_eq!(Combine::COMBINE1.shift, 8);
        assert_eq!(Combine::FAULTEN3.shift, 30);
        let mut sc: LocalRegisterCopy<u32, StatusControl::Register> = LocalRegisterCopy::new(0);
        sc.modify(StatusControl::CLKS::SystemClock + StatusControl::PS::Div128);
        assert_eq!(sc.get(), 0x0F);
    }
}
