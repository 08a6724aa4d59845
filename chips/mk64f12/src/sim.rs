//! System Integration Module (SIM).
//!
//! Besides the register block this module describes which `SCGCn` bit gates
//! each peripheral's clock. A peripheral's registers fault on access while its
//! gate is closed.

use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    /// SIM memory map. Section 12.2 of the K64 manual.
    pub Registers {
        (0x0000 => pub sopt1: ReadWrite<u32, SystemOptions1::Register>),
        (0x0004 => pub sopt1cfg: ReadWrite<u32, SystemOptions1Config::Register>),
        (0x0008 => _reserved0),
        (0x1004 => pub sopt2: ReadWrite<u32, SystemOptions2::Register>),
        (0x1008 => _reserved1),
        (0x100C => pub sopt4: ReadWrite<u32, SystemOptions4::Register>),
        (0x1010 => pub sopt5: ReadWrite<u32, SystemOptions5::Register>),
        (0x1014 => _reserved2),
        (0x1018 => pub sopt7: ReadWrite<u32, SystemOptions7::Register>),
        (0x101C => _reserved3),
        (0x1024 => pub sdid: ReadOnly<u32, DeviceIdentification::Register>),
        (0x1028 => pub scgc1: ReadWrite<u32, SystemClockGatingControl1::Register>),
        (0x102C => pub scgc2: ReadWrite<u32, SystemClockGatingControl2::Register>),
        (0x1030 => pub scgc3: ReadWrite<u32, SystemClockGatingControl3::Register>),
        (0x1034 => pub scgc4: ReadWrite<u32, SystemClockGatingControl4::Register>),
        (0x1038 => pub scgc5: ReadWrite<u32, SystemClockGatingControl5::Register>),
        (0x103C => pub scgc6: ReadWrite<u32, SystemClockGatingControl6::Register>),
        (0x1040 => pub scgc7: ReadWrite<u32, SystemClockGatingControl7::Register>),
        (0x1044 => pub clkdiv1: ReadWrite<u32, ClockDivider1::Register>),
        (0x1048 => pub clkdiv2: ReadWrite<u32, ClockDivider2::Register>),
        (0x104C => pub fcfg1: ReadWrite<u32, FlashConfiguration1::Register>),
        (0x1050 => pub fcfg2: ReadOnly<u32, FlashConfiguration2::Register>),
        /// Unique identification, most significant word first
        (0x1054 => pub uidh: ReadOnly<u32>),
        (0x1058 => pub uidmh: ReadOnly<u32>),
        (0x105C => pub uidml: ReadOnly<u32>),
        (0x1060 => pub uidl: ReadOnly<u32>),
        (0x1064 => @END),
    }
}

register_bitfields![u32,
    pub SystemOptions1 [
        /// USB voltage regulator enable
        USBREGEN OFFSET(31) NUMBITS(1) [],
        /// USB voltage regulator in standby mode during Stop, VLPS, LLS and VLLS
        USBSSTBY OFFSET(30) NUMBITS(1) [],
        /// USB voltage regulator in standby mode during VLPR and VLPW
        USBVSTBY OFFSET(29) NUMBITS(1) [],
        /// 32K oscillator clock select
        OSC32KSEL OFFSET(18) NUMBITS(2) [
            System32kOsc = 0,
            Rtc32kOsc = 2,
            Lpo1kHz = 3
        ],
        RAMSIZE OFFSET(12) NUMBITS(4) [
            Size64KB = 0b0101,
            Size96KB = 0b0111,
            Size128KB = 0b1000,
            Size256KB = 0b1001
        ]
    ],

    pub SystemOptions1Config [
        /// USB voltage regulator stop standby write enable
        USSWE OFFSET(26) NUMBITS(1) [],
        /// USB voltage regulator VLP standby write enable
        UVSWE OFFSET(25) NUMBITS(1) [],
        /// USB voltage regulator enable write enable
        URWE OFFSET(24) NUMBITS(1) []
    ],

    pub SystemOptions2 [
        /// SDHC clock source select
        SDHCSRC OFFSET(28) NUMBITS(2) [
            CoreSystemClock = 0,
            PllFllSelect = 1,
            OscErClk = 2,
            External = 3
        ],
        /// IEEE 1588 timestamp clock source select
        TIMESRC OFFSET(20) NUMBITS(2) [
            CoreSystemClock = 0,
            PllFllSelect = 1,
            OscErClk = 2,
            External = 3
        ],
        /// RMII clock source select
        RMIISRC OFFSET(19) NUMBITS(1) [
            Extal = 0,
            External = 1
        ],
        /// USB clock source select
        USBSRC OFFSET(18) NUMBITS(1) [
            External = 0,
            PllFllSelect = 1
        ],
        /// PLL/FLL clock select
        PLLFLLSEL OFFSET(16) NUMBITS(2) [
            McgFllClk = 0,
            McgPllClk = 1,
            Irc48M = 3
        ],
        /// Debug trace clock select
        TRACECLKSEL OFFSET(12) NUMBITS(1) [
            McgOutClk = 0,
            CoreClk = 1
        ],
        /// PTD7 pad drive strength
        PTD7PAD OFFSET(11) NUMBITS(1) [],
        /// FlexBus security level
        FBSL OFFSET(8) NUMBITS(2) [
            NoCpuAccess = 0,
            DataOnly = 2,
            All = 3
        ],
        /// CLKOUT select
        CLKOUTSEL OFFSET(5) NUMBITS(3) [
            FlexBusClk = 0,
            FlashClk = 2,
            Lpo = 3,
            McgIrClk = 4,
            RtcClk = 5,
            OscErClk0 = 6,
            Irc48M = 7
        ],
        /// RTC clock out select
        RTCCLKOUTSEL OFFSET(4) NUMBITS(1) [
            OneHz = 0,
            Clk32kHz = 1
        ]
    ],

    pub SystemOptions4 [
        FTM3TRG1SRC OFFSET(31) NUMBITS(1) [],
        FTM3TRG0SRC OFFSET(30) NUMBITS(1) [],
        FTM0TRG1SRC OFFSET(29) NUMBITS(1) [],
        FTM0TRG0SRC OFFSET(28) NUMBITS(1) [],
        FTM3CLKSEL OFFSET(27) NUMBITS(1) [],
        FTM2CLKSEL OFFSET(26) NUMBITS(1) [],
        FTM1CLKSEL OFFSET(25) NUMBITS(1) [],
        FTM0CLKSEL OFFSET(24) NUMBITS(1) [],
        /// FTM2 channel 0 input capture source select
        FTM2CH0SRC OFFSET(20) NUMBITS(2) [],
        /// FTM1 channel 0 input capture source select
        FTM1CH0SRC OFFSET(18) NUMBITS(2) [],
        FTM3FLT0 OFFSET(12) NUMBITS(1) [],
        FTM2FLT0 OFFSET(8) NUMBITS(1) [],
        FTM1FLT0 OFFSET(4) NUMBITS(1) [],
        FTM0FLT2 OFFSET(2) NUMBITS(1) [],
        FTM0FLT1 OFFSET(1) NUMBITS(1) [],
        FTM0FLT0 OFFSET(0) NUMBITS(1) []
    ],

    pub SystemOptions5 [
        UART1RXSRC OFFSET(6) NUMBITS(2) [
            RxPin = 0,
            Cmp0 = 1,
            Cmp1 = 2
        ],
        UART1TXSRC OFFSET(4) NUMBITS(2) [
            TxPin = 0,
            Ftm1Ch0 = 1,
            Ftm2Ch0 = 2
        ],
        UART0RXSRC OFFSET(2) NUMBITS(2) [
            RxPin = 0,
            Cmp0 = 1,
            Cmp1 = 2
        ],
        UART0TXSRC OFFSET(0) NUMBITS(2) [
            TxPin = 0,
            Ftm1Ch0 = 1,
            Ftm2Ch0 = 2
        ]
    ],

    pub SystemOptions7 [
        ADC1ALTTRGEN OFFSET(15) NUMBITS(1) [],
        ADC1PRETRGSEL OFFSET(12) NUMBITS(1) [],
        ADC1TRGSEL OFFSET(8) NUMBITS(4) [],
        ADC0ALTTRGEN OFFSET(7) NUMBITS(1) [],
        ADC0PRETRGSEL OFFSET(4) NUMBITS(1) [],
        ADC0TRGSEL OFFSET(0) NUMBITS(4) []
    ],

    pub DeviceIdentification [
        FAMILYID OFFSET(28) NUMBITS(4) [],
        SUBFAMID OFFSET(24) NUMBITS(4) [],
        SERIESID OFFSET(20) NUMBITS(4) [],
        REVID OFFSET(12) NUMBITS(4) [],
        DIEID OFFSET(7) NUMBITS(5) [],
        FAMID OFFSET(4) NUMBITS(3) [],
        PINID OFFSET(0) NUMBITS(4) []
    ],

    pub SystemClockGatingControl1 [
        UART5 OFFSET(11) NUMBITS(1) [],
        UART4 OFFSET(10) NUMBITS(1) [],
        I2C2 OFFSET(6) NUMBITS(1) []
    ],
    pub SystemClockGatingControl2 [
        DAC1 OFFSET(13) NUMBITS(1) [],
        DAC0 OFFSET(12) NUMBITS(1) [],
        ENET OFFSET(0) NUMBITS(1) []
    ],
    pub SystemClockGatingControl3 [
        ADC1 OFFSET(27) NUMBITS(1) [],
        FTM3 OFFSET(25) NUMBITS(1) [],
        FTM2 OFFSET(24) NUMBITS(1) [],
        SDHC OFFSET(17) NUMBITS(1) [],
        SPI2 OFFSET(12) NUMBITS(1) [],
        RNGA OFFSET(0) NUMBITS(1) []
    ],
    pub SystemClockGatingControl4 [
        VREF OFFSET(20) NUMBITS(1) [],
        CMP OFFSET(19) NUMBITS(1) [],
        USBOTG OFFSET(18) NUMBITS(1) [],
        UART3 OFFSET(13) NUMBITS(1) [],
        UART2 OFFSET(12) NUMBITS(1) [],
        UART1 OFFSET(11) NUMBITS(1) [],
        UART0 OFFSET(10) NUMBITS(1) [],
        I2C1 OFFSET(7) NUMBITS(1) [],
        I2C0 OFFSET(6) NUMBITS(1) [],
        CMT OFFSET(2) NUMBITS(1) [],
        EWM OFFSET(1) NUMBITS(1) []
    ],
    pub SystemClockGatingControl5 [
        PORTE OFFSET(13) NUMBITS(1) [],
        PORTD OFFSET(12) NUMBITS(1) [],
        PORTC OFFSET(11) NUMBITS(1) [],
        PORTB OFFSET(10) NUMBITS(1) [],
        PORTA OFFSET(9) NUMBITS(1) [],
        LPTMR OFFSET(0) NUMBITS(1) []
    ],
    pub SystemClockGatingControl6 [
        DAC0 OFFSET(31) NUMBITS(1) [],
        RTC OFFSET(29) NUMBITS(1) [],
        ADC0 OFFSET(27) NUMBITS(1) [],
        FTM2 OFFSET(26) NUMBITS(1) [],
        FTM1 OFFSET(25) NUMBITS(1) [],
        FTM0 OFFSET(24) NUMBITS(1) [],
        PIT OFFSET(23) NUMBITS(1) [],
        PDB OFFSET(22) NUMBITS(1) [],
        USBDCD OFFSET(21) NUMBITS(1) [],
        CRC OFFSET(18) NUMBITS(1) [],
        I2S OFFSET(15) NUMBITS(1) [],
        SPI1 OFFSET(13) NUMBITS(1) [],
        SPI0 OFFSET(12) NUMBITS(1) [],
        RNGA OFFSET(9) NUMBITS(1) [],
        FLEXCAN0 OFFSET(4) NUMBITS(1) [],
        DMAMUX OFFSET(1) NUMBITS(1) [],
        FTF OFFSET(0) NUMBITS(1) []
    ],
    pub SystemClockGatingControl7 [
        MPU OFFSET(2) NUMBITS(1) [],
        DMA OFFSET(1) NUMBITS(1) [],
        FLEXBUS OFFSET(0) NUMBITS(1) []
    ],

    pub ClockDivider1 [
        /// Core/system clock divider
        OUTDIV1 OFFSET(28) NUMBITS(4) [],
        /// Bus clock divider
        OUTDIV2 OFFSET(24) NUMBITS(4) [],
        /// FlexBus clock divider
        OUTDIV3 OFFSET(20) NUMBITS(4) [],
        /// Flash clock divider
        OUTDIV4 OFFSET(16) NUMBITS(4) []
    ],

    pub ClockDivider2 [
        /// USB clock divider divisor
        USBDIV OFFSET(1) NUMBITS(3) [],
        /// USB clock divider fraction
        USBFRAC OFFSET(0) NUMBITS(1) []
    ],

    pub FlashConfiguration1 [
        /// Program flash size
        NVMSIZE OFFSET(28) NUMBITS(4) [],
        PFSIZE OFFSET(24) NUMBITS(4) [
            Size1MB = 0xF
        ],
        /// EEPROM size
        EESIZE OFFSET(16) NUMBITS(4) [],
        /// FlexNVM partition
        DEPART OFFSET(8) NUMBITS(4) [],
        FLASHDOZE OFFSET(1) NUMBITS(1) [],
        FLASHDIS OFFSET(0) NUMBITS(1) []
    ],

    pub FlashConfiguration2 [
        /// Max address block 0
        MAXADDR0 OFFSET(24) NUMBITS(7) [],
        /// Max address block 1
        MAXADDR1 OFFSET(16) NUMBITS(7) []
    ]
];

pub const SIM_BASE: usize = 0x4004_7000;

pub const SIM: StaticRef<Registers> = unsafe { StaticRef::new(SIM_BASE as *const Registers) };

pub const SIM_BASE_ADDRS: [usize; 1] = [SIM_BASE];
pub const SIM_BASE_PTRS: [StaticRef<Registers>; 1] = [SIM];

/// A peripheral clock gate, by `SCGCn` register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClockGate {
    Gate1(ClockGate1),
    Gate2(ClockGate2),
    Gate3(ClockGate3),
    Gate4(ClockGate4),
    Gate5(ClockGate5),
    Gate6(ClockGate6),
    Gate7(ClockGate7),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClockGate1 {
    I2C2 = 6,
    UART4 = 10,
    UART5,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClockGate2 {
    ENET = 0,
    DAC0 = 12,
    DAC1,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClockGate3 {
    RNGA,
    SPI2 = 12,
    SDHC = 17,
    FTM2 = 24,
    FTM3,
    ADC1 = 27,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClockGate4 {
    EWM = 1,
    CMT,
    I2C0 = 6,
    I2C1,
    UART0 = 10,
    UART1,
    UART2,
    UART3,
    USBOTG = 18,
    CMP,
    VREF,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClockGate5 {
    LPTMR,
    PORTA = 9,
    PORTB,
    PORTC,
    PORTD,
    PORTE,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClockGate6 {
    FTF,
    DMAMUX,
    FLEXCAN0 = 4,
    RNGA = 9,
    SPI0 = 12,
    SPI1,
    I2S = 15,
    CRC = 18,
    USBDCD = 21,
    PDB,
    PIT,
    FTM0,
    FTM1,
    FTM2,
    ADC0,
    RTC = 29,
    DAC0 = 31,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClockGate7 {
    FLEXBUS,
    DMA,
    MPU,
}

impl ClockGate {
    /// The `n` of the `SCGCn` register holding this gate.
    pub fn register(self) -> u8 {
        match self {
            ClockGate::Gate1(_) => 1,
            ClockGate::Gate2(_) => 2,
            ClockGate::Gate3(_) => 3,
            ClockGate::Gate4(_) => 4,
            ClockGate::Gate5(_) => 5,
            ClockGate::Gate6(_) => 6,
            ClockGate::Gate7(_) => 7,
        }
    }

    /// Bit position of the gate within its register.
    pub fn bit(self) -> u32 {
        match self {
            ClockGate::Gate1(v) => v as u32,
            ClockGate::Gate2(v) => v as u32,
            ClockGate::Gate3(v) => v as u32,
            ClockGate::Gate4(v) => v as u32,
            ClockGate::Gate5(v) => v as u32,
            ClockGate::Gate6(v) => v as u32,
            ClockGate::Gate7(v) => v as u32,
        }
    }

    pub fn mask(self) -> u32 {
        1 << self.bit()
    }

    fn scgc(self, regs: &Registers) -> u32 {
        match self {
            ClockGate::Gate1(_) => regs.scgc1.get(),
            ClockGate::Gate2(_) => regs.scgc2.get(),
            ClockGate::Gate3(_) => regs.scgc3.get(),
            ClockGate::Gate4(_) => regs.scgc4.get(),
            ClockGate::Gate5(_) => regs.scgc5.get(),
            ClockGate::Gate6(_) => regs.scgc6.get(),
            ClockGate::Gate7(_) => regs.scgc7.get(),
        }
    }

    fn set_scgc(self, regs: &Registers, value: u32) {
        match self {
            ClockGate::Gate1(_) => regs.scgc1.set(value),
            ClockGate::Gate2(_) => regs.scgc2.set(value),
            ClockGate::Gate3(_) => regs.scgc3.set(value),
            ClockGate::Gate4(_) => regs.scgc4.set(value),
            ClockGate::Gate5(_) => regs.scgc5.set(value),
            ClockGate::Gate6(_) => regs.scgc6.set(value),
            ClockGate::Gate7(_) => regs.scgc7.set(value),
        }
    }

    pub fn is_enabled(self, regs: &Registers) -> bool {
        self.scgc(regs) & self.mask() != 0
    }

    /// Open the gate. This is a read-modify-write of the `SCGCn` register.
    pub fn enable(self, regs: &Registers) {
        self.set_scgc(regs, self.scgc(regs) | self.mask());
    }

    pub fn disable(self, regs: &Registers) {
        self.set_scgc(regs, self.scgc(regs) & !self.mask());
    }
}

/// The clock gate of each gateable peripheral instance.
pub mod clocks {
    use super::*;

    pub const I2C2: ClockGate = ClockGate::Gate1(ClockGate1::I2C2);
    pub const UART4: ClockGate = ClockGate::Gate1(ClockGate1::UART4);
    pub const UART5: ClockGate = ClockGate::Gate1(ClockGate1::UART5);

    pub const ENET: ClockGate = ClockGate::Gate2(ClockGate2::ENET);
    pub const DAC0: ClockGate = ClockGate::Gate2(ClockGate2::DAC0);
    pub const DAC1: ClockGate = ClockGate::Gate2(ClockGate2::DAC1);

    pub const SPI2: ClockGate = ClockGate::Gate3(ClockGate3::SPI2);
    pub const SDHC: ClockGate = ClockGate::Gate3(ClockGate3::SDHC);
    pub const FTM3: ClockGate = ClockGate::Gate3(ClockGate3::FTM3);
    pub const ADC1: ClockGate = ClockGate::Gate3(ClockGate3::ADC1);

    pub const EWM: ClockGate = ClockGate::Gate4(ClockGate4::EWM);
    pub const CMT: ClockGate = ClockGate::Gate4(ClockGate4::CMT);
    pub const I2C0: ClockGate = ClockGate::Gate4(ClockGate4::I2C0);
    pub const I2C1: ClockGate = ClockGate::Gate4(ClockGate4::I2C1);
    pub const UART0: ClockGate = ClockGate::Gate4(ClockGate4::UART0);
    pub const UART1: ClockGate = ClockGate::Gate4(ClockGate4::UART1);
    pub const UART2: ClockGate = ClockGate::Gate4(ClockGate4::UART2);
    pub const UART3: ClockGate = ClockGate::Gate4(ClockGate4::UART3);
    pub const USBOTG: ClockGate = ClockGate::Gate4(ClockGate4::USBOTG);
    pub const CMP: ClockGate = ClockGate::Gate4(ClockGate4::CMP);
    pub const VREF: ClockGate = ClockGate::Gate4(ClockGate4::VREF);

    pub const LPTMR: ClockGate = ClockGate::Gate5(ClockGate5::LPTMR);
    pub const PORTA: ClockGate = ClockGate::Gate5(ClockGate5::PORTA);
    pub const PORTB: ClockGate = ClockGate::Gate5(ClockGate5::PORTB);
    pub const PORTC: ClockGate = ClockGate::Gate5(ClockGate5::PORTC);
    pub const PORTD: ClockGate = ClockGate::Gate5(ClockGate5::PORTD);
    pub const PORTE: ClockGate = ClockGate::Gate5(ClockGate5::PORTE);

    pub const FTF: ClockGate = ClockGate::Gate6(ClockGate6::FTF);
    pub const DMAMUX: ClockGate = ClockGate::Gate6(ClockGate6::DMAMUX);
    pub const FLEXCAN0: ClockGate = ClockGate::Gate6(ClockGate6::FLEXCAN0);
    pub const RNGA: ClockGate = ClockGate::Gate6(ClockGate6::RNGA);
    pub const SPI0: ClockGate = ClockGate::Gate6(ClockGate6::SPI0);
    pub const SPI1: ClockGate = ClockGate::Gate6(ClockGate6::SPI1);
    pub const I2S0: ClockGate = ClockGate::Gate6(ClockGate6::I2S);
    pub const CRC: ClockGate = ClockGate::Gate6(ClockGate6::CRC);
    pub const USBDCD: ClockGate = ClockGate::Gate6(ClockGate6::USBDCD);
    pub const PDB: ClockGate = ClockGate::Gate6(ClockGate6::PDB);
    pub const PIT: ClockGate = ClockGate::Gate6(ClockGate6::PIT);
    pub const FTM0: ClockGate = ClockGate::Gate6(ClockGate6::FTM0);
    pub const FTM1: ClockGate = ClockGate::Gate6(ClockGate6::FTM1);
    pub const FTM2: ClockGate = ClockGate::Gate6(ClockGate6::FTM2);
    pub const ADC0: ClockGate = ClockGate::Gate6(ClockGate6::ADC0);
    pub const RTC: ClockGate = ClockGate::Gate6(ClockGate6::RTC);

    pub const FLEXBUS: ClockGate = ClockGate::Gate7(ClockGate7::FLEXBUS);
    pub const DMA: ClockGate = ClockGate::Gate7(ClockGate7::DMA);
    pub const MPU: ClockGate = ClockGate::Gate7(ClockGate7::MPU);
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[repr(C, align(4))]
    struct Backing([u32; 0x1064 / 4]);

    #[test]
    fn layout() {
        assert_eq!(offset_of!(Registers, sopt2), 0x1004);
        assert_eq!(offset_of!(Registers, sdid), 0x1024);
        assert_eq!(offset_of!(Registers, scgc5), 0x1038);
        assert_eq!(offset_of!(Registers, uidl), 0x1060);
        assert_eq!(size_of::<Registers>(), 0x1064);
    }

    #[test]
    fn gates_match_bitfields() {
        assert_eq!(clocks::PORTC.register(), 5);
        assert_eq!(clocks::PORTC.mask(), SystemClockGatingControl5::PORTC::SET.mask());
        assert_eq!(clocks::DMA.mask(), SystemClockGatingControl7::DMA::SET.mask());
        assert_eq!(clocks::UART5.mask(), SystemClockGatingControl1::UART5::SET.mask());
        assert_eq!(clocks::ADC0.mask(), SystemClockGatingControl6::ADC0::SET.mask());
        assert_eq!(clocks::DAC0.bit(), 12);
    }

    #[test]
    fn enable_and_disable_touch_only_their_bit() {
        let mut backing = Backing([0; 0x1064 / 4]);
        {
            let regs = unsafe { &*(backing.0.as_mut_ptr() as *const Registers) };
            regs.scgc6.set(0x4000_0001);

            clocks::PIT.enable(regs);
            assert!(clocks::PIT.is_enabled(regs));
            assert!(!clocks::PDB.is_enabled(regs));
            assert_eq!(regs.scgc6.get(), 0x4080_0001);

            clocks::FTF.disable(regs);
            assert_eq!(regs.scgc6.get(), 0x4080_0000);

            clocks::PORTA.enable(regs);
            assert!(clocks::PORTA.is_enabled(regs));
        }
        assert_eq!(backing.0[0x103C / 4], 0x4080_0000);
        assert_eq!(backing.0[0x1038 / 4], 1 << 9);
    }
}
