//! Enhanced Direct Memory Access controller (eDMA).
//!
//! Sixteen channels, each with a 32-byte transfer control descriptor (TCD).
//! The channel priority registers are laid out in big-endian byte order
//! within each word: `DCHPRI3` is at offset `0x100` and `DCHPRI0` at `0x103`.
//! Use [`Registers::channel_priority`] to index them by channel number.

use core::ops::Index;

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

/// Number of DMA channels.
pub const NUM_CHANNELS: usize = 16;

register_structs! {
    /// DMA memory map.
    pub Registers {
        (0x0000 => pub cr: ReadWrite<u32, ControlRegister::Register>),
        (0x0004 => pub es: ReadOnly<u32, ErrorStatus::Register>),
        (0x0008 => _reserved0),
        /// Enable request register
        (0x000C => pub erq: ReadWrite<u32, Channels::Register>),
        (0x0010 => _reserved1),
        /// Enable error interrupt register
        (0x0014 => pub eei: ReadWrite<u32, Channels::Register>),
        (0x0018 => pub ceei: WriteOnly<u8, ChannelSelect::Register>),
        (0x0019 => pub seei: WriteOnly<u8, ChannelSelect::Register>),
        (0x001A => pub cerq: WriteOnly<u8, ChannelSelect::Register>),
        (0x001B => pub serq: WriteOnly<u8, ChannelSelect::Register>),
        (0x001C => pub cdne: WriteOnly<u8, ChannelSelect::Register>),
        (0x001D => pub ssrt: WriteOnly<u8, ChannelSelect::Register>),
        (0x001E => pub cerr: WriteOnly<u8, ChannelSelect::Register>),
        (0x001F => pub cint: WriteOnly<u8, ChannelSelect::Register>),
        (0x0020 => _reserved2),
        /// Interrupt request register, write 1 to clear
        (0x0024 => pub int: ReadWrite<u32, Channels::Register>),
        (0x0028 => _reserved3),
        /// Error register, write 1 to clear
        (0x002C => pub err: ReadWrite<u32, Channels::Register>),
        (0x0030 => _reserved4),
        /// Hardware request status register
        (0x0034 => pub hrs: ReadOnly<u32, Channels::Register>),
        (0x0038 => _reserved5),
        /// Channel priority registers in hardware order (3, 2, 1, 0, 7, 6, ...)
        (0x0100 => pub dchpri: [ReadWrite<u8, ChannelPriority::Register>; NUM_CHANNELS]),
        (0x0110 => _reserved6),
        (0x1000 => pub tcd: [TransferControlDescriptor; NUM_CHANNELS]),
        (0x1200 => @END),
    },

    /// One transfer control descriptor.
    pub TransferControlDescriptor {
        (0x00 => pub saddr: ReadWrite<u32>),
        (0x04 => pub soff: ReadWrite<u16>),
        (0x06 => pub attr: ReadWrite<u16, TransferAttributes::Register>),
        /// Minor byte count. Interpreted as [`MinorByteCount`] unless minor
        /// loop mapping (`CR[EMLM]`) is enabled, in which case
        /// [`MinorLoopOffsetDisabled`] or [`MinorLoopOffset`] apply.
        (0x08 => pub nbytes: ReadWrite<u32, MinorByteCount::Register>),
        (0x0C => pub slast: ReadWrite<u32>),
        (0x10 => pub daddr: ReadWrite<u32>),
        (0x14 => pub doff: ReadWrite<u16>),
        /// Current major iteration count. Interpreted as
        /// [`CurrentMinorLoopLink`] when `ELINK` is set.
        (0x16 => pub citer: ReadWrite<u16, CurrentMajorCount::Register>),
        /// Last destination address adjustment, or scatter/gather address
        (0x18 => pub dlast_sga: ReadWrite<u32>),
        (0x1C => pub csr: ReadWrite<u16, ControlAndStatus::Register>),
        /// Beginning major iteration count. Interpreted as
        /// [`BeginningMinorLoopLink`] when `ELINK` is set.
        (0x1E => pub biter: ReadWrite<u16, BeginningMajorCount::Register>),
        (0x20 => @END),
    }
}

register_bitfields![u32,
    pub ControlRegister [
        /// Cancel Transfer
        CX OFFSET(17) NUMBITS(1) [],
        /// Error Cancel Transfer
        ECX OFFSET(16) NUMBITS(1) [],
        /// Enable Minor Loop Mapping
        EMLM OFFSET(7) NUMBITS(1) [],
        /// Continuous Link Mode
        CLM OFFSET(6) NUMBITS(1) [],
        /// Halt DMA Operations
        HALT OFFSET(5) NUMBITS(1) [],
        /// Halt On Error
        HOE OFFSET(4) NUMBITS(1) [],
        /// Enable Round Robin Channel Arbitration
        ERCA OFFSET(2) NUMBITS(1) [
            FixedPriority = 0,
            RoundRobin = 1
        ],
        /// Enable Debug
        EDBG OFFSET(1) NUMBITS(1) []
    ],

    pub ErrorStatus [
        /// Logical OR of all ERR status bits
        VLD OFFSET(31) NUMBITS(1) [],
        /// Transfer Canceled
        ECX OFFSET(16) NUMBITS(1) [],
        /// Channel Priority Error
        CPE OFFSET(14) NUMBITS(1) [],
        /// Error Channel Number
        ERRCHN OFFSET(8) NUMBITS(4) [],
        /// Source Address Error
        SAE OFFSET(7) NUMBITS(1) [],
        /// Source Offset Error
        SOE OFFSET(6) NUMBITS(1) [],
        /// Destination Address Error
        DAE OFFSET(5) NUMBITS(1) [],
        /// Destination Offset Error
        DOE OFFSET(4) NUMBITS(1) [],
        /// NBYTES/CITER Configuration Error
        NCE OFFSET(3) NUMBITS(1) [],
        /// Scatter/Gather Configuration Error
        SGE OFFSET(2) NUMBITS(1) [],
        /// Source Bus Error
        SBE OFFSET(1) NUMBITS(1) [],
        /// Destination Bus Error
        DBE OFFSET(0) NUMBITS(1) []
    ],

    /// One bit per channel, shared by ERQ, EEI, INT, ERR and HRS.
    pub Channels [
        CH0 OFFSET(0) NUMBITS(1) [],
        CH1 OFFSET(1) NUMBITS(1) [],
        CH2 OFFSET(2) NUMBITS(1) [],
        CH3 OFFSET(3) NUMBITS(1) [],
        CH4 OFFSET(4) NUMBITS(1) [],
        CH5 OFFSET(5) NUMBITS(1) [],
        CH6 OFFSET(6) NUMBITS(1) [],
        CH7 OFFSET(7) NUMBITS(1) [],
        CH8 OFFSET(8) NUMBITS(1) [],
        CH9 OFFSET(9) NUMBITS(1) [],
        CH10 OFFSET(10) NUMBITS(1) [],
        CH11 OFFSET(11) NUMBITS(1) [],
        CH12 OFFSET(12) NUMBITS(1) [],
        CH13 OFFSET(13) NUMBITS(1) [],
        CH14 OFFSET(14) NUMBITS(1) [],
        CH15 OFFSET(15) NUMBITS(1) []
    ],

    /// NBYTES with minor loop mapping disabled (MLNO)
    pub MinorByteCount [
        NBYTES OFFSET(0) NUMBITS(32) []
    ],

    /// NBYTES with minor loop mapping enabled and offsets disabled (MLOFFNO)
    pub MinorLoopOffsetDisabled [
        /// Source Minor Loop Offset Enable
        SMLOE OFFSET(31) NUMBITS(1) [],
        /// Destination Minor Loop Offset Enable
        DMLOE OFFSET(30) NUMBITS(1) [],
        NBYTES OFFSET(0) NUMBITS(30) []
    ],

    /// NBYTES with minor loop mapping and offsets enabled (MLOFFYES)
    pub MinorLoopOffset [
        /// Source minor loop offset enable
        SMLOE OFFSET(31) NUMBITS(1) [],
        /// Destination minor loop offset enable
        DMLOE OFFSET(30) NUMBITS(1) [],
        /// Minor loop offset
        MLOFF OFFSET(10) NUMBITS(20) [],
        /// Minor byte transfer count
        NBYTES OFFSET(0) NUMBITS(10) []
    ]
];

register_bitfields![u16,
    pub TransferAttributes [
        /// Source address modulo
        SMOD OFFSET(11) NUMBITS(5) [],
        /// Source data transfer size
        SSIZE OFFSET(8) NUMBITS(3) [
            Bits8 = 0b000,
            Bits16 = 0b001,
            Bits32 = 0b010,
            Burst16 = 0b100
        ],
        /// Destination address modulo
        DMOD OFFSET(3) NUMBITS(5) [],
        /// Destination data transfer size
        DSIZE OFFSET(0) NUMBITS(3) [
            Bits8 = 0b000,
            Bits16 = 0b001,
            Bits32 = 0b010,
            Burst16 = 0b100
        ]
    ],

    /// CITER with channel linking disabled (ELINKNO)
    pub CurrentMajorCount [
        ELINK OFFSET(15) NUMBITS(1) [],
        CITER OFFSET(0) NUMBITS(15) []
    ],

    /// CITER with channel linking enabled (ELINKYES)
    pub CurrentMinorLoopLink [
        /// Enable channel-to-channel linking on minor-loop complete
        ELINK OFFSET(15) NUMBITS(1) [],
        /// Minor loop link channel number
        LINKCH OFFSET(9) NUMBITS(4) [],
        /// Current major iteration count
        CITER OFFSET(0) NUMBITS(9) []
    ],

    pub ControlAndStatus [
        /// Bandwidth control
        BWC OFFSET(14) NUMBITS(2) [
            NoStall = 0,
            Stall4Cycles = 2,
            Stall8Cycles = 3
        ],
        /// Major loop link channel number
        MAJORLINKCH OFFSET(8) NUMBITS(4) [],
        /// Channel done
        DONE OFFSET(7) NUMBITS(1) [],
        /// Channel active
        ACTIVE OFFSET(6) NUMBITS(1) [],
        /// Enable channel-to-channel linking on major loop complete
        MAJORELINK OFFSET(5) NUMBITS(1) [],
        /// Enable scatter/gather processing
        ESG OFFSET(4) NUMBITS(1) [],
        /// Disable request
        DREQ OFFSET(3) NUMBITS(1) [],
        /// Enable an interrupt when major counter is half complete
        INTHALF OFFSET(2) NUMBITS(1) [],
        /// Enable an interrupt when major iteration count completes
        INTMAJOR OFFSET(1) NUMBITS(1) [],
        /// Channel start
        START OFFSET(0) NUMBITS(1) []
    ],

    /// BITER with channel linking disabled (ELINKNO)
    pub BeginningMajorCount [
        ELINK OFFSET(15) NUMBITS(1) [],
        BITER OFFSET(0) NUMBITS(15) []
    ],

    /// BITER with channel linking enabled (ELINKYES)
    pub BeginningMinorLoopLink [
        ELINK OFFSET(15) NUMBITS(1) [],
        LINKCH OFFSET(9) NUMBITS(4) [],
        BITER OFFSET(0) NUMBITS(9) []
    ]
];

register_bitfields![u8,
    /// Layout shared by the CEEI, SEEI, CERQ, SERQ, CDNE, SSRT, CERR and CINT
    /// channel-select registers.
    pub ChannelSelect [
        /// No Op enable
        NOP OFFSET(7) NUMBITS(1) [],
        /// Apply to all channels
        ALL OFFSET(6) NUMBITS(1) [],
        /// Channel number
        CH OFFSET(0) NUMBITS(4) []
    ],

    pub ChannelPriority [
        /// Enable Channel Preemption
        ECP OFFSET(7) NUMBITS(1) [],
        /// Disable Preempt Ability
        DPA OFFSET(6) NUMBITS(1) [],
        /// Channel n Arbitration Priority
        CHPRI OFFSET(0) NUMBITS(4) []
    ]
];

/// Position of `channel`'s priority register in [`Registers::dchpri`].
pub const fn dchpri_index(channel: usize) -> usize {
    channel ^ 3
}

/// The channel priority registers indexed by channel number.
pub struct ChannelPriorityRegisters<'a> {
    registers: &'a [ReadWrite<u8, ChannelPriority::Register>; NUM_CHANNELS],
}

impl<'a> Index<usize> for ChannelPriorityRegisters<'a> {
    type Output = ReadWrite<u8, ChannelPriority::Register>;

    fn index(&self, channel: usize) -> &Self::Output {
        &self.registers[dchpri_index(channel)]
    }
}

impl Registers {
    pub fn channel_priority(&self) -> ChannelPriorityRegisters<'_> {
        ChannelPriorityRegisters {
            registers: &self.dchpri,
        }
    }
}

pub const DMA0_BASE: usize = 0x4000_8000;

pub const DMA0: StaticRef<Registers> = unsafe { StaticRef::new(DMA0_BASE as *const Registers) };

pub const DMA_BASE_ADDRS: [usize; 1] = [DMA0_BASE];
pub const DMA_BASE_PTRS: [StaticRef<Registers>; 1] = [DMA0];

/// Transfer complete interrupts, by channel.
#[rustfmt::skip]
pub const DMA_CHN_IRQS: [Interrupt; NUM_CHANNELS] = [
    Interrupt::DMA0, Interrupt::DMA1, Interrupt::DMA2, Interrupt::DMA3,
    Interrupt::DMA4, Interrupt::DMA5, Interrupt::DMA6, Interrupt::DMA7,
    Interrupt::DMA8, Interrupt::DMA9, Interrupt::DMA10, Interrupt::DMA11,
    Interrupt::DMA12, Interrupt::DMA13, Interrupt::DMA14, Interrupt::DMA15,
];
pub const DMA_ERROR_IRQS: [Interrupt; 1] = [Interrupt::DMA_Error];

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn priority_registers_are_byte_swapped() {
        assert_eq!(dchpri_index(0), 3);
        assert_eq!(dchpri_index(3), 0);
        assert_eq!(dchpri_index(4), 7);
        assert_eq!(dchpri_index(13), 14);
        assert_eq!(dchpri_index(15), 12);
    }

    #[test]
    fn priority_index_writes_the_channel_byte() {
        #[repr(C, align(4))]
        struct Backing([u8; 0x1200]);
        let mut backing = Backing([0; 0x1200]);
        {
            let regs = unsafe { &*(backing.0.as_mut_ptr() as *const Registers) };
            regs.channel_priority()[0].write(ChannelPriority::CHPRI.val(5));
            regs.channel_priority()[6].write(ChannelPriority::ECP::SET);
            assert_eq!(regs.channel_priority()[0].read(ChannelPriority::CHPRI), 5);
        }
        assert_eq!(backing.0[0x103], 5);
        assert_eq!(backing.0[0x105], 0x80);
        assert_eq!(backing.0[0x100], 0);
    }

    #[test]
    fn descriptor_layout() {
        assert_eq!(size_of::<TransferControlDescriptor>(), 0x20);
        assert_eq!(offset_of!(Registers, tcd), 0x1000);
        assert_eq!(offset_of!(Registers, dchpri), 0x100);
        assert_eq!(offset_of!(TransferControlDescriptor, citer), 0x16);
        assert_eq!(offset_of!(TransferControlDescriptor, biter), 0x1E);
    }

    #[test]
    fn minor_loop_interpretations() {
        let mut nbytes: LocalRegisterCopy<u32, MinorLoopOffset::Register> =
            LocalRegisterCopy::new(0);
        nbytes.modify(
            MinorLoopOffset::SMLOE::SET + MinorLoopOffset::MLOFF.val(0x1) + MinorLoopOffset::NBYTES.val(4),
        );
        assert_eq!(nbytes.get(), 0x8000_0404);

        let no_offset: LocalRegisterCopy<u32, MinorLoopOffsetDisabled::Register> =
            LocalRegisterCopy::new(nbytes.get());
        assert!(no_offset.is_set(MinorLoopOffsetDisabled::SMLOE));
        assert_eq!(no_offset.read(MinorLoopOffsetDisabled::NBYTES), 0x404);
    }

    #[test]
    fn linked_iteration_count() {
        let mut citer: LocalRegisterCopy<u16, CurrentMinorLoopLink::Register> =
            LocalRegisterCopy::new(0);
        citer.modify(
            CurrentMinorLoopLink::ELINK::SET
                + CurrentMinorLoopLink::LINKCH.val(2)
                + CurrentMinorLoopLink::CITER.val(10),
        );
        assert_eq!(citer.get(), 0x840A);
        assert_eq!(CurrentMajorCount::CITER.mask, 0x7FFF);
    }

    #[test]
    fn instance_tables() {
        assert_eq!(DMA_BASE_PTRS[0].address(), DMA_BASE_ADDRS[0]);
        for (n, irq) in DMA_CHN_IRQS.iter().enumerate() {
            assert_eq!(irq.number() as usize, n);
        }
        assert_eq!(DMA_ERROR_IRQS[0].number(), 16);
    }
}
