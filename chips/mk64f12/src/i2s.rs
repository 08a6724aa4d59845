//! Synchronous Audio Interface (I2S).
//!
//! Transmit registers (`t*`) sit at 0x00-0x7F and receive registers (`r*`)
//! mirror them at 0x80-0xFF. Both sides share the bitfield groups below;
//! `E` is `TE` on the transmitter and `RE` on the receiver.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

/// Data channels per direction.
pub const NUM_CHANNELS: usize = 2;

register_structs! {
    /// I2S memory map.
    pub Registers {
        (0x000 => pub tcsr: ReadWrite<u32, ControlStatus::Register>),
        (0x004 => pub tcr1: ReadWrite<u32, Configuration1::Register>),
        (0x008 => pub tcr2: ReadWrite<u32, Configuration2::Register>),
        (0x00C => pub tcr3: ReadWrite<u32, Configuration3::Register>),
        (0x010 => pub tcr4: ReadWrite<u32, Configuration4::Register>),
        (0x014 => pub tcr5: ReadWrite<u32, Configuration5::Register>),
        (0x018 => _reserved0),
        /// Transmit Data
        (0x020 => pub tdr: [WriteOnly<u32>; NUM_CHANNELS]),
        (0x028 => _reserved1),
        /// Transmit FIFO
        (0x040 => pub tfr: [ReadOnly<u32, FifoPosition::Register>; NUM_CHANNELS]),
        (0x048 => _reserved2),
        /// Transmit Mask, one bit per word of the frame
        (0x060 => pub tmr: ReadWrite<u32>),
        (0x064 => _reserved3),
        (0x080 => pub rcsr: ReadWrite<u32, ControlStatus::Register>),
        (0x084 => pub rcr1: ReadWrite<u32, Configuration1::Register>),
        (0x088 => pub rcr2: ReadWrite<u32, Configuration2::Register>),
        (0x08C => pub rcr3: ReadWrite<u32, Configuration3::Register>),
        (0x090 => pub rcr4: ReadWrite<u32, Configuration4::Register>),
        (0x094 => pub rcr5: ReadWrite<u32, Configuration5::Register>),
        (0x098 => _reserved4),
        /// Receive Data
        (0x0A0 => pub rdr: [ReadOnly<u32>; NUM_CHANNELS]),
        (0x0A8 => _reserved5),
        /// Receive FIFO
        (0x0C0 => pub rfr: [ReadOnly<u32, FifoPosition::Register>; NUM_CHANNELS]),
        (0x0C8 => _reserved6),
        /// Receive Mask
        (0x0E0 => pub rmr: ReadWrite<u32>),
        (0x0E4 => _reserved7),
        /// MCLK Control
        (0x100 => pub mcr: ReadWrite<u32, MclkControl::Register>),
        /// MCLK Divide
        (0x104 => pub mdr: ReadWrite<u32, MclkDivide::Register>),
        (0x108 => @END),
    }
}

register_bitfields![u32,
    pub ControlStatus [
        /// Transmitter or Receiver Enable
        E OFFSET(31) NUMBITS(1) [],
        /// Stop Enable
        STOPE OFFSET(30) NUMBITS(1) [],
        /// Debug Enable
        DBGE OFFSET(29) NUMBITS(1) [],
        /// Bit Clock Enable
        BCE OFFSET(28) NUMBITS(1) [],
        /// FIFO Reset
        FR OFFSET(25) NUMBITS(1) [],
        /// Software Reset
        SR OFFSET(24) NUMBITS(1) [],
        /// Word Start Flag
        WSF OFFSET(20) NUMBITS(1) [],
        /// Sync Error Flag
        SEF OFFSET(19) NUMBITS(1) [],
        /// FIFO Error Flag
        FEF OFFSET(18) NUMBITS(1) [],
        /// FIFO Warning Flag
        FWF OFFSET(17) NUMBITS(1) [],
        /// FIFO Request Flag
        FRF OFFSET(16) NUMBITS(1) [],
        WSIE OFFSET(12) NUMBITS(1) [],
        SEIE OFFSET(11) NUMBITS(1) [],
        FEIE OFFSET(10) NUMBITS(1) [],
        FWIE OFFSET(9) NUMBITS(1) [],
        FRIE OFFSET(8) NUMBITS(1) [],
        /// FIFO Warning DMA Enable
        FWDE OFFSET(1) NUMBITS(1) [],
        /// FIFO Request DMA Enable
        FRDE OFFSET(0) NUMBITS(1) []
    ],
    pub Configuration1 [
        /// FIFO watermark
        WM OFFSET(0) NUMBITS(3) []
    ],
    pub Configuration2 [
        /// Synchronous Mode
        SYNC OFFSET(30) NUMBITS(2) [
            Asynchronous = 0,
            SynchronousWithOther = 1,
            SynchronousWithOtherTx = 2,
            SynchronousWithOtherRx = 3
        ],
        /// Bit Clock Swap
        BCS OFFSET(29) NUMBITS(1) [],
        /// Bit Clock Input
        BCI OFFSET(28) NUMBITS(1) [],
        /// MCLK Select
        MSEL OFFSET(26) NUMBITS(2) [
            BusClock = 0,
            Mclk1 = 1,
            Mclk2 = 2,
            Mclk3 = 3
        ],
        /// Bit Clock Polarity
        BCP OFFSET(25) NUMBITS(1) [],
        /// Bit Clock Direction
        BCD OFFSET(24) NUMBITS(1) [
            External = 0,
            Internal = 1
        ],
        /// Bit Clock Divide, (DIV + 1) * 2
        DIV OFFSET(0) NUMBITS(8) []
    ],
    pub Configuration3 [
        /// Channel Enable
        CE OFFSET(16) NUMBITS(2) [],
        /// Word Flag Configuration
        WDFL OFFSET(0) NUMBITS(5) []
    ],
    pub Configuration4 [
        /// Frame size, in words, minus one
        FRSZ OFFSET(16) NUMBITS(5) [],
        /// Sync width, in bit clocks, minus one
        SYWD OFFSET(8) NUMBITS(5) [],
        /// MSB First
        MF OFFSET(4) NUMBITS(1) [],
        /// Frame Sync Early
        FSE OFFSET(3) NUMBITS(1) [],
        /// Frame Sync Polarity
        FSP OFFSET(1) NUMBITS(1) [
            ActiveHigh = 0,
            ActiveLow = 1
        ],
        /// Frame Sync Direction
        FSD OFFSET(0) NUMBITS(1) [
            External = 0,
            Internal = 1
        ]
    ],
    pub Configuration5 [
        /// Word N Width
        WNW OFFSET(24) NUMBITS(5) [],
        /// Word 0 Width
        W0W OFFSET(16) NUMBITS(5) [],
        /// First Bit Shifted
        FBT OFFSET(8) NUMBITS(5) []
    ],
    pub FifoPosition [
        /// Write FIFO Pointer
        WFP OFFSET(16) NUMBITS(4) [],
        /// Read FIFO Pointer
        RFP OFFSET(0) NUMBITS(4) []
    ],
    pub MclkControl [
        /// Divider Update Flag
        DUF OFFSET(31) NUMBITS(1) [],
        /// MCLK Output Enable
        MOE OFFSET(30) NUMBITS(1) [],
        /// MCLK Input Clock Select
        MICS OFFSET(24) NUMBITS(2) [
            SystemClock = 0,
            OscErClk = 1,
            McgPllClk = 3
        ]
    ],
    /// MCLK output is input * (FRACT + 1) / (DIVIDE + 1).
    pub MclkDivide [
        FRACT OFFSET(12) NUMBITS(8) [],
        DIVIDE OFFSET(0) NUMBITS(12) []
    ]
];

pub const I2S0_BASE: usize = 0x4002_F000;

pub const I2S0: StaticRef<Registers> = unsafe { StaticRef::new(I2S0_BASE as *const Registers) };

pub const I2S_BASE_ADDRS: [usize; 1] = [I2S0_BASE];
pub const I2S_BASE_PTRS: [StaticRef<Registers>; 1] = [I2S0];
pub const I2S_RX_IRQS: [Interrupt; 1] = [Interrupt::I2S0_Rx];
pub const I2S_TX_IRQS: [Interrupt; 1] = [Interrupt::I2S0_Tx];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[test]
    fn receive_mirrors_transmit() {
        assert_eq!(offset_of!(Registers, rcsr) - offset_of!(Registers, tcsr), 0x80);
        assert_eq!(offset_of!(Registers, rdr) - offset_of!(Registers, tdr), 0x80);
        assert_eq!(offset_of!(Registers, rmr) - offset_of!(Registers, tmr), 0x80);
        assert_eq!(size_of::<Registers>(), 0x108);
    }
}
