//! Interrupt and exception numbers of the MK64F12.
//!
//! Device interrupts are numbered from zero, matching their position in the
//! vector table after the sixteen Cortex-M system entries. Core exceptions use
//! the negative CMSIS numbering, so `Exception::SysTick` is `-1`.

use core::fmt;

/// Core revision r0p1.
pub const CM4_REV: u16 = 0x0001;
/// The core MPU is absent; memory protection is provided by `SYSMPU`.
pub const MPU_PRESENT: bool = false;
/// Number of priority bits implemented in the NVIC.
pub const NVIC_PRIO_BITS: u8 = 4;
pub const VENDOR_SYSTICK_CONFIG: bool = false;
pub const FPU_PRESENT: bool = true;

/// Number of device interrupt vectors, including the reserved vector 55.
pub const NUM_INTERRUPTS: usize = 86;

/// Reserved device vector between `USBDCD` and `DAC0`.
pub const RESERVED_VECTOR: u16 = 55;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// No device interrupt has this number.
    InvalidInterrupt(u16),
    /// No core exception has this number.
    InvalidException(i16),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidInterrupt(n) => write!(f, "invalid interrupt number {}", n),
            Error::InvalidException(n) => write!(f, "invalid exception number {}", n),
        }
    }
}

/// Cortex-M4 core exceptions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(i16)]
pub enum Exception {
    NonMaskableInt = -14,
    HardFault = -13,
    MemoryManagement = -12,
    BusFault = -11,
    UsageFault = -10,
    SVCall = -5,
    DebugMonitor = -4,
    PendSV = -2,
    SysTick = -1,
}

impl Exception {
    /// Position of the exception in the vector table.
    pub fn vector(self) -> usize {
        (16 + self as i16) as usize
    }
}

impl TryFrom<i16> for Exception {
    type Error = Error;

    fn try_from(n: i16) -> Result<Self, Self::Error> {
        use self::Exception::*;
        Ok(match n {
            -14 => NonMaskableInt,
            -13 => HardFault,
            -12 => MemoryManagement,
            -11 => BusFault,
            -10 => UsageFault,
            -5 => SVCall,
            -4 => DebugMonitor,
            -2 => PendSV,
            -1 => SysTick,
            _ => return Err(Error::InvalidException(n)),
        })
    }
}

/// Device specific interrupts.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum Interrupt {
    /// DMA channel 0 transfer complete
    DMA0 = 0,
    DMA1 = 1,
    DMA2 = 2,
    DMA3 = 3,
    DMA4 = 4,
    DMA5 = 5,
    DMA6 = 6,
    DMA7 = 7,
    DMA8 = 8,
    DMA9 = 9,
    DMA10 = 10,
    DMA11 = 11,
    DMA12 = 12,
    DMA13 = 13,
    DMA14 = 14,
    DMA15 = 15,
    /// DMA error interrupt, all channels
    DMA_Error = 16,
    /// Normal interrupt of the miscellaneous control module
    MCM = 17,
    /// Flash memory command complete
    FTFE = 18,
    /// Flash memory read collision
    Read_Collision = 19,
    /// Low-voltage detect, low-voltage warning
    LVD_LVW = 20,
    /// Low leakage wakeup unit
    LLWU = 21,
    /// Watchdog and external watchdog monitor, shared
    WDOG_EWM = 22,
    RNG = 23,
    I2C0 = 24,
    I2C1 = 25,
    SPI0 = 26,
    SPI1 = 27,
    I2S0_Tx = 28,
    I2S0_Rx = 29,
    /// UART0 LON interrupt
    UART0_LON = 30,
    /// UART0 receive/transmit interrupt
    UART0_RX_TX = 31,
    /// UART0 error interrupt
    UART0_ERR = 32,
    UART1_RX_TX = 33,
    UART1_ERR = 34,
    UART2_RX_TX = 35,
    UART2_ERR = 36,
    UART3_RX_TX = 37,
    UART3_ERR = 38,
    ADC0 = 39,
    CMP0 = 40,
    CMP1 = 41,
    FTM0 = 42,
    FTM1 = 43,
    FTM2 = 44,
    CMT = 45,
    /// RTC alarm interrupt
    RTC = 46,
    /// RTC seconds interrupt
    RTC_Seconds = 47,
    PIT0 = 48,
    PIT1 = 49,
    PIT2 = 50,
    PIT3 = 51,
    PDB0 = 52,
    USB0 = 53,
    /// USB device charger detect
    USBDCD = 54,
    DAC0 = 56,
    MCG = 57,
    LPTMR0 = 58,
    PORTA = 59,
    PORTB = 60,
    PORTC = 61,
    PORTD = 62,
    PORTE = 63,
    /// Software interrupt
    SWI = 64,
    SPI2 = 65,
    UART4_RX_TX = 66,
    UART4_ERR = 67,
    UART5_RX_TX = 68,
    UART5_ERR = 69,
    CMP2 = 70,
    FTM3 = 71,
    DAC1 = 72,
    ADC1 = 73,
    I2C2 = 74,
    /// OR'ed interrupt for all CAN0 message buffers
    CAN0_ORed_Message_buffer = 75,
    CAN0_Bus_Off = 76,
    CAN0_Error = 77,
    CAN0_Tx_Warning = 78,
    CAN0_Rx_Warning = 79,
    CAN0_Wake_Up = 80,
    SDHC = 81,
    /// Ethernet MAC IEEE 1588 timer
    ENET_1588_Timer = 82,
    ENET_Transmit = 83,
    ENET_Receive = 84,
    ENET_Error = 85,
}

/// Every device interrupt in vector order.
#[rustfmt::skip]
pub const INTERRUPTS: [Interrupt; NUM_INTERRUPTS - 1] = {
    use self::Interrupt::*;
    [
        DMA0, DMA1, DMA2, DMA3, DMA4, DMA5, DMA6, DMA7,
        DMA8, DMA9, DMA10, DMA11, DMA12, DMA13, DMA14, DMA15,
        DMA_Error, MCM, FTFE, Read_Collision, LVD_LVW, LLWU, WDOG_EWM, RNG,
        I2C0, I2C1, SPI0, SPI1, I2S0_Tx, I2S0_Rx, UART0_LON, UART0_RX_TX,
        UART0_ERR, UART1_RX_TX, UART1_ERR, UART2_RX_TX, UART2_ERR, UART3_RX_TX, UART3_ERR, ADC0,
        CMP0, CMP1, FTM0, FTM1, FTM2, CMT, RTC, RTC_Seconds,
        PIT0, PIT1, PIT2, PIT3, PDB0, USB0, USBDCD, /* 55 reserved */
        DAC0, MCG, LPTMR0, PORTA, PORTB, PORTC, PORTD, PORTE,
        SWI, SPI2, UART4_RX_TX, UART4_ERR, UART5_RX_TX, UART5_ERR, CMP2, FTM3,
        DAC1, ADC1, I2C2, CAN0_ORed_Message_buffer, CAN0_Bus_Off, CAN0_Error, CAN0_Tx_Warning, CAN0_Rx_Warning,
        CAN0_Wake_Up, SDHC, ENET_1588_Timer, ENET_Transmit, ENET_Receive, ENET_Error,
    ]
};

impl Interrupt {
    /// The device interrupt number (the CMSIS `IRQn` value).
    pub fn number(self) -> u16 {
        self as u16
    }

    /// Position of the interrupt in the vector table.
    pub fn vector(self) -> usize {
        16 + self as usize
    }
}

impl TryFrom<u16> for Interrupt {
    type Error = Error;

    fn try_from(n: u16) -> Result<Self, Self::Error> {
        match n {
            RESERVED_VECTOR => Err(Error::InvalidInterrupt(n)),
            0..=54 => Ok(INTERRUPTS[n as usize]),
            56..=85 => Ok(INTERRUPTS[n as usize - 1]),
            _ => Err(Error::InvalidInterrupt(n)),
        }
    }
}

unsafe impl cortex_m::interrupt::InterruptNumber for Interrupt {
    #[inline(always)]
    fn number(self) -> u16 {
        self as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_in_vector_order() {
        for pair in INTERRUPTS.windows(2) {
            assert!(pair[0].number() < pair[1].number());
        }
        assert_eq!(INTERRUPTS[0], Interrupt::DMA0);
        assert_eq!(INTERRUPTS[INTERRUPTS.len() - 1], Interrupt::ENET_Error);
    }

    #[test]
    fn conversion_round_trips() {
        for irq in INTERRUPTS.iter() {
            assert_eq!(Interrupt::try_from(irq.number()), Ok(*irq));
        }
    }

    #[test]
    fn reserved_and_out_of_range_are_rejected() {
        assert_eq!(Interrupt::try_from(55u16), Err(Error::InvalidInterrupt(55)));
        assert_eq!(Interrupt::try_from(86u16), Err(Error::InvalidInterrupt(86)));
        assert_eq!(Interrupt::try_from(0xffffu16), Err(Error::InvalidInterrupt(0xffff)));
    }

    #[test]
    fn known_numbers() {
        assert_eq!(Interrupt::DMA_Error.number(), 16);
        assert_eq!(Interrupt::WDOG_EWM.number(), 22);
        assert_eq!(Interrupt::UART0_RX_TX.number(), 31);
        assert_eq!(Interrupt::PIT0.number(), 48);
        assert_eq!(Interrupt::DAC0.number(), 56);
        assert_eq!(Interrupt::PORTA.number(), 59);
        assert_eq!(Interrupt::CAN0_Wake_Up.number(), 80);
        assert_eq!(Interrupt::ENET_Error.number(), 85);
        assert_eq!(Interrupt::DMA0.vector(), 16);
    }

    #[test]
    fn exceptions() {
        assert_eq!(Exception::SysTick.vector(), 15);
        assert_eq!(Exception::NonMaskableInt.vector(), 2);
        assert_eq!(Exception::try_from(-5i16), Ok(Exception::SVCall));
        assert_eq!(Exception::try_from(-3i16), Err(Error::InvalidException(-3)));
        assert_eq!(Exception::try_from(0i16), Err(Error::InvalidException(0)));
    }
}
