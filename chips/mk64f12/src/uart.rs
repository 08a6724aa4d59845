//! Universal Asynchronous Receiver/Transmitter (UART).
//!
//! All six instances share one register layout. UART0 is the only instance
//! with a LON interrupt vector.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    /// UART memory map.
    pub Registers {
        (0x00 => pub bdh: ReadWrite<u8, BaudRateHigh::Register>),
        (0x01 => pub bdl: ReadWrite<u8, BaudRateLow::Register>),
        (0x02 => pub c1: ReadWrite<u8, Control1::Register>),
        (0x03 => pub c2: ReadWrite<u8, Control2::Register>),
        (0x04 => pub s1: ReadOnly<u8, Status1::Register>),
        (0x05 => pub s2: ReadWrite<u8, Status2::Register>),
        (0x06 => pub c3: ReadWrite<u8, Control3::Register>),
        (0x07 => pub d: ReadWrite<u8>),
        /// Match address registers 1 and 2
        (0x08 => pub ma1: ReadWrite<u8>),
        (0x09 => pub ma2: ReadWrite<u8>),
        (0x0A => pub c4: ReadWrite<u8, Control4::Register>),
        (0x0B => pub c5: ReadWrite<u8, Control5::Register>),
        (0x0C => pub ed: ReadOnly<u8, ExtendedData::Register>),
        (0x0D => pub modem: ReadWrite<u8, Modem::Register>),
        (0x0E => pub ir: ReadWrite<u8, Infrared::Register>),
        (0x0F => _reserved0),
        (0x10 => pub pfifo: ReadWrite<u8, FifoParameters::Register>),
        (0x11 => pub cfifo: ReadWrite<u8, FifoControl::Register>),
        (0x12 => pub sfifo: ReadWrite<u8, FifoStatus::Register>),
        (0x13 => pub twfifo: ReadWrite<u8>),
        (0x14 => pub tcfifo: ReadOnly<u8>),
        (0x15 => pub rwfifo: ReadWrite<u8>),
        (0x16 => pub rcfifo: ReadOnly<u8>),
        (0x17 => _reserved1),
        (0x18 => pub c7816: ReadWrite<u8, Iso7816Control::Register>),
        (0x19 => pub ie7816: ReadWrite<u8, Iso7816Interrupts::Register>),
        (0x1A => pub is7816: ReadWrite<u8, Iso7816Interrupts::Register>),
        /// Wait parameter. Typed for T = 0; use [`WaitParameterT1`] for T = 1.
        (0x1B => pub wp7816: ReadWrite<u8, WaitParameterT0::Register>),
        (0x1C => pub wn7816: ReadWrite<u8>),
        (0x1D => pub wf7816: ReadWrite<u8>),
        (0x1E => pub et7816: ReadWrite<u8, ErrorThreshold7816::Register>),
        (0x1F => pub tl7816: ReadWrite<u8>),
        (0x20 => @END),
    }
}

register_bitfields![u8,
    pub BaudRateHigh [
        /// LIN Break Detect Interrupt Enable
        LBKDIE OFFSET(7) NUMBITS(1) [],
        /// RxD Input Active Edge Interrupt Enable
        RXEDGIE OFFSET(6) NUMBITS(1) [],
        /// Baud Rate Modulo Divisor, upper 5 bits
        SBR OFFSET(0) NUMBITS(5) []
    ],
    pub BaudRateLow [
        SBR OFFSET(0) NUMBITS(8) []
    ],
    pub Control1 [
        LOOPS OFFSET(7) NUMBITS(1) [],
        /// UART Stops in Wait Mode
        UARTSWAI OFFSET(6) NUMBITS(1) [],
        /// Receiver Source Select
        RSRC OFFSET(5) NUMBITS(1) [],
        /// 9-bit or 8-bit Mode Select
        M OFFSET(4) NUMBITS(1) [
            EightBit = 0,
            NineBit = 1
        ],
        /// Receiver Wakeup Method Select
        WAKE OFFSET(3) NUMBITS(1) [
            Idle = 0,
            AddressMark = 1
        ],
        /// Idle Line Type Select
        ILT OFFSET(2) NUMBITS(1) [
            AfterStart = 0,
            AfterStop = 1
        ],
        /// Parity Enable
        PE OFFSET(1) NUMBITS(1) [],
        /// Parity Type
        PT OFFSET(0) NUMBITS(1) [
            Even = 0,
            Odd = 1
        ]
    ],
    pub Control2 [
        /// Transmitter Interrupt or DMA Transfer Enable
        TIE OFFSET(7) NUMBITS(1) [],
        /// Transmission Complete Interrupt Enable
        TCIE OFFSET(6) NUMBITS(1) [],
        /// Receiver Full Interrupt or DMA Transfer Enable
        RIE OFFSET(5) NUMBITS(1) [],
        /// Idle Line Interrupt Enable
        ILIE OFFSET(4) NUMBITS(1) [],
        /// Transmitter Enable
        TE OFFSET(3) NUMBITS(1) [],
        /// Receiver Enable
        RE OFFSET(2) NUMBITS(1) [],
        /// Receiver Wakeup Control
        RWU OFFSET(1) NUMBITS(1) [],
        /// Send Break
        SBK OFFSET(0) NUMBITS(1) []
    ],
    pub Status1 [
        /// Transmit Data Register Empty Flag
        TDRE OFFSET(7) NUMBITS(1) [],
        /// Transmit Complete Flag
        TC OFFSET(6) NUMBITS(1) [],
        /// Receive Data Register Full Flag
        RDRF OFFSET(5) NUMBITS(1) [],
        /// Idle Line Flag
        IDLE OFFSET(4) NUMBITS(1) [],
        /// Receiver Overrun Flag
        OR OFFSET(3) NUMBITS(1) [],
        /// Noise Flag
        NF OFFSET(2) NUMBITS(1) [],
        /// Framing Error Flag
        FE OFFSET(1) NUMBITS(1) [],
        /// Parity Error Flag
        PF OFFSET(0) NUMBITS(1) []
    ],
    pub Status2 [
        LBKDIF OFFSET(7) NUMBITS(1) [],
        RXEDGIF OFFSET(6) NUMBITS(1) [],
        /// Most Significant Bit First
        MSBF OFFSET(5) NUMBITS(1) [],
        RXINV OFFSET(4) NUMBITS(1) [],
        RWUID OFFSET(3) NUMBITS(1) [],
        /// Break Transmit Character Length
        BRK13 OFFSET(2) NUMBITS(1) [],
        LBKDE OFFSET(1) NUMBITS(1) [],
        /// Receiver Active Flag
        RAF OFFSET(0) NUMBITS(1) []
    ],
    pub Control3 [
        /// Received Bit 8
        R8 OFFSET(7) NUMBITS(1) [],
        /// Transmit Bit 8
        T8 OFFSET(6) NUMBITS(1) [],
        TXDIR OFFSET(5) NUMBITS(1) [],
        TXINV OFFSET(4) NUMBITS(1) [],
        ORIE OFFSET(3) NUMBITS(1) [],
        NEIE OFFSET(2) NUMBITS(1) [],
        FEIE OFFSET(1) NUMBITS(1) [],
        PEIE OFFSET(0) NUMBITS(1) []
    ],
    pub Control4 [
        MAEN1 OFFSET(7) NUMBITS(1) [],
        MAEN2 OFFSET(6) NUMBITS(1) [],
        /// 10-bit Mode select
        M10 OFFSET(5) NUMBITS(1) [],
        /// Baud Rate Fine Adjust, in 1/32 increments
        BRFA OFFSET(0) NUMBITS(5) []
    ],
    pub Control5 [
        TDMAS OFFSET(7) NUMBITS(1) [],
        RDMAS OFFSET(5) NUMBITS(1) [],
        LBKDDMAS OFFSET(3) NUMBITS(1) []
    ],
    pub ExtendedData [
        NOISY OFFSET(7) NUMBITS(1) [],
        PARITYE OFFSET(6) NUMBITS(1) []
    ],
    pub Modem [
        RXRTSE OFFSET(3) NUMBITS(1) [],
        TXRTSPOL OFFSET(2) NUMBITS(1) [],
        TXRTSE OFFSET(1) NUMBITS(1) [],
        TXCTSE OFFSET(0) NUMBITS(1) []
    ],
    pub Infrared [
        IREN OFFSET(2) NUMBITS(1) [],
        /// Transmitter narrow pulse
        TNP OFFSET(0) NUMBITS(2) [
            Pulse3_16 = 0,
            Pulse1_16 = 1,
            Pulse1_32 = 2,
            Pulse1_4 = 3
        ]
    ],
    pub FifoParameters [
        TXFE OFFSET(7) NUMBITS(1) [],
        /// Transmit FIFO buffer depth
        TXFIFOSIZE OFFSET(4) NUMBITS(3) [
            Depth1 = 0,
            Depth4 = 1,
            Depth8 = 2,
            Depth16 = 3,
            Depth32 = 4,
            Depth64 = 5,
            Depth128 = 6
        ],
        RXFE OFFSET(3) NUMBITS(1) [],
        RXFIFOSIZE OFFSET(0) NUMBITS(3) [
            Depth1 = 0,
            Depth4 = 1,
            Depth8 = 2,
            Depth16 = 3,
            Depth32 = 4,
            Depth64 = 5,
            Depth128 = 6
        ]
    ],
    pub FifoControl [
        TXFLUSH OFFSET(7) NUMBITS(1) [],
        RXFLUSH OFFSET(6) NUMBITS(1) [],
        RXOFE OFFSET(2) NUMBITS(1) [],
        TXOFE OFFSET(1) NUMBITS(1) [],
        RXUFE OFFSET(0) NUMBITS(1) []
    ],
    pub FifoStatus [
        TXEMPT OFFSET(7) NUMBITS(1) [],
        RXEMPT OFFSET(6) NUMBITS(1) [],
        RXOF OFFSET(2) NUMBITS(1) [],
        TXOF OFFSET(1) NUMBITS(1) [],
        RXUF OFFSET(0) NUMBITS(1) []
    ],
    pub Iso7816Control [
        /// Generate NACK on Overflow
        ONACK OFFSET(4) NUMBITS(1) [],
        /// Generate NACK on Error
        ANACK OFFSET(3) NUMBITS(1) [],
        /// Detect Initial Character
        INIT OFFSET(2) NUMBITS(1) [],
        /// Transfer Type
        TTYPE OFFSET(1) NUMBITS(1) [
            T0 = 0,
            T1 = 1
        ],
        ISO_7816E OFFSET(0) NUMBITS(1) []
    ],
    /// Shared by IE7816 (enables) and IS7816 (flags, write 1 to clear)
    pub Iso7816Interrupts [
        /// Wait Timer
        WT OFFSET(7) NUMBITS(1) [],
        /// Character Wait Timer
        CWT OFFSET(6) NUMBITS(1) [],
        /// Block Wait Timer
        BWT OFFSET(5) NUMBITS(1) [],
        /// Initial Character Detected
        INITD OFFSET(4) NUMBITS(1) [],
        /// Guard Timer Violated
        GTV OFFSET(2) NUMBITS(1) [],
        /// Transmit Threshold Exceeded
        TXT OFFSET(1) NUMBITS(1) [],
        /// Receive Threshold Exceeded
        RXT OFFSET(0) NUMBITS(1) []
    ],
    pub WaitParameterT0 [
        WI OFFSET(0) NUMBITS(8) []
    ],
    pub WaitParameterT1 [
        /// Character Wait Time Integer
        CWI OFFSET(4) NUMBITS(4) [],
        /// Block Wait Time Integer
        BWI OFFSET(0) NUMBITS(4) []
    ],
    pub ErrorThreshold7816 [
        TXTHRESHOLD OFFSET(4) NUMBITS(4) [],
        RXTHRESHOLD OFFSET(0) NUMBITS(4) []
    ]
];

pub const UART0_BASE: usize = 0x4006_A000;
pub const UART1_BASE: usize = 0x4006_B000;
pub const UART2_BASE: usize = 0x4006_C000;
pub const UART3_BASE: usize = 0x4006_D000;
pub const UART4_BASE: usize = 0x400E_A000;
pub const UART5_BASE: usize = 0x400E_B000;

pub const UART0: StaticRef<Registers> = unsafe { StaticRef::new(UART0_BASE as *const Registers) };
pub const UART1: StaticRef<Registers> = unsafe { StaticRef::new(UART1_BASE as *const Registers) };
pub const UART2: StaticRef<Registers> = unsafe { StaticRef::new(UART2_BASE as *const Registers) };
pub const UART3: StaticRef<Registers> = unsafe { StaticRef::new(UART3_BASE as *const Registers) };
pub const UART4: StaticRef<Registers> = unsafe { StaticRef::new(UART4_BASE as *const Registers) };
pub const UART5: StaticRef<Registers> = unsafe { StaticRef::new(UART5_BASE as *const Registers) };

pub const UART_BASE_ADDRS: [usize; 6] = [
    UART0_BASE, UART1_BASE, UART2_BASE, UART3_BASE, UART4_BASE, UART5_BASE,
];
pub const UART_BASE_PTRS: [StaticRef<Registers>; 6] = [UART0, UART1, UART2, UART3, UART4, UART5];

pub const UART_RX_TX_IRQS: [Interrupt; 6] = [
    Interrupt::UART0_RX_TX,
    Interrupt::UART1_RX_TX,
    Interrupt::UART2_RX_TX,
    Interrupt::UART3_RX_TX,
    Interrupt::UART4_RX_TX,
    Interrupt::UART5_RX_TX,
];
pub const UART_ERR_IRQS: [Interrupt; 6] = [
    Interrupt::UART0_ERR,
    Interrupt::UART1_ERR,
    Interrupt::UART2_ERR,
    Interrupt::UART3_ERR,
    Interrupt::UART4_ERR,
    Interrupt::UART5_ERR,
];
pub const UART_LON_IRQS: [Option<Interrupt>; 6] =
    [Some(Interrupt::UART0_LON), None, None, None, None, None];

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn baud_divisor_splits_across_bdh_and_bdl() {
        // 13-bit SBR: upper five bits in BDH, lower eight in BDL
        let sbr: u16 = 0x1234 & 0x1FFF;
        let mut bdh: LocalRegisterCopy<u8, BaudRateHigh::Register> = LocalRegisterCopy::new(0);
        let mut bdl: LocalRegisterCopy<u8, BaudRateLow::Register> = LocalRegisterCopy::new(0);
        bdh.modify(BaudRateHigh::SBR.val((sbr >> 8) as u8));
        bdl.modify(BaudRateLow::SBR.val(sbr as u8));
        assert_eq!(bdh.get(), 0x12);
        assert_eq!(bdl.get(), 0x34);
    }

    #[test]
    fn wait_parameter_views() {
        let t1: LocalRegisterCopy<u8, WaitParameterT1::Register> = LocalRegisterCopy::new(0x4A);
        assert_eq!(t1.read(WaitParameterT1::CWI), 4);
        assert_eq!(t1.read(WaitParameterT1::BWI), 0xA);
        assert_eq!(WaitParameterT0::WI.mask, 0xFF);
    }

    #[test]
    fn only_uart0_has_lon() {
        assert_eq!(UART_LON_IRQS[0], Some(Interrupt::UART0_LON));
        assert!(UART_LON_IRQS[1..].iter().all(|irq| irq.is_none()));
    }
}
