//! Register blocks driven through fake memory, the way a driver would use
//! them on the device.

use core::mem::{offset_of, size_of};

use mk64f12::*;
use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
use tock_registers::LocalRegisterCopy;

/// Zeroed, word aligned storage that a register block can be laid over.
#[repr(C, align(4))]
struct Backing<const N: usize>([u8; N]);

impl<const N: usize> Backing<N> {
    fn new() -> Self {
        Backing([0; N])
    }

    fn view<T>(&mut self) -> &T {
        assert!(size_of::<T>() <= N);
        unsafe { &*(self.0.as_mut_ptr() as *const T) }
    }

    fn word(&self, offset: usize) -> u32 {
        u32::from_le_bytes([
            self.0[offset],
            self.0[offset + 1],
            self.0[offset + 2],
            self.0[offset + 3],
        ])
    }
}

#[test]
fn block_sizes() {
    assert_eq!(size_of::<uart::Registers>(), 0x20);
    assert_eq!(size_of::<sim::Registers>(), 0x1064);
    assert_eq!(size_of::<mcg::Registers>(), 0xE);
    assert_eq!(size_of::<port::Registers>(), 0xCC);
    assert_eq!(size_of::<ftfe::Registers>(), 0x18);
    assert_eq!(size_of::<wdog::Registers>(), 0x18);
    assert_eq!(size_of::<usb::Registers>(), 0x15D);
    assert_eq!(size_of::<enet::Registers>(), 0x628);
}

#[test]
fn clock_gate_opens_one_bit() {
    let mut backing = Backing::<0x1064>::new();
    {
        let regs: &sim::Registers = backing.view();
        regs.scgc5.set(0x0004_0182);

        let gate = sim::clocks::PORTB;
        assert_eq!(gate.register(), 5);
        assert_eq!(gate.bit(), 10);
        assert!(!gate.is_enabled(regs));
        gate.enable(regs);
        assert!(gate.is_enabled(regs));
        assert!(!sim::clocks::PORTA.is_enabled(regs));

        sim::clocks::DMA.enable(regs);
        sim::clocks::DMA.disable(regs);
        assert!(!sim::clocks::DMA.is_enabled(regs));
    }
    assert_eq!(
        backing.word(offset_of!(sim::Registers, scgc5)),
        0x0004_0182 | 1 << 10
    );
}

#[test]
fn channel_priority_addresses_the_swapped_byte() {
    let mut backing = Backing::<0x1200>::new();
    {
        let regs: &dma::Registers = backing.view();
        let priority = regs.channel_priority();
        priority[0].write(dma::ChannelPriority::CHPRI.val(0xA));
        priority[6].modify(dma::ChannelPriority::DPA::SET);
    }
    let base = offset_of!(dma::Registers, dchpri);
    assert_eq!(backing.0[base + 3], 0xA);
    assert_eq!(backing.0[base + 5], 0x40);
}

#[test]
fn pin_configuration() {
    let mut backing = Backing::<0xCC>::new();
    {
        let regs: &port::Registers = backing.view();
        regs.pcr[17].write(
            port::PinControl::MUX::Alt3 + port::PinControl::PE::SET + port::PinControl::PS::PullUp,
        );
        assert!(regs.pcr[17].matches_all(port::PinControl::MUX::Alt3));
        regs.isfr.set(gpio::pin_mask(17));
    }
    assert_eq!(backing.word(17 * 4), 0x0000_0303);
    assert_eq!(backing.word(0xA0), 1 << 17);
}

#[test]
fn uart_control_bytes() {
    let mut backing = Backing::<0x20>::new();
    {
        let regs: &uart::Registers = backing.view();
        regs.c2.write(uart::Control2::TE::SET + uart::Control2::RE::SET);
    }
    assert_eq!(backing.0[offset_of!(uart::Registers, c2)], 0x0C);
    assert_eq!(offset_of!(uart::Registers, c2), 3);
}

#[test]
fn mcg_reports_clock_mode() {
    let mut backing = Backing::<0x10>::new();
    backing.0[offset_of!(mcg::Registers, s)] = 0x10;
    assert_eq!(backing.view::<mcg::Registers>().mode(), Some(mcg::Mode::Fei));

    backing.0[offset_of!(mcg::Registers, s)] = 0x6C;
    assert_eq!(backing.view::<mcg::Registers>().mode(), Some(mcg::Mode::Pee));
}

#[test]
fn factory_security_byte_is_unsecure() {
    let state = ftfe::SecurityState::from_fsec(0xFE);
    assert!(!state.secure);
    assert!(!state.backdoor_key_enabled);
    assert!(state.mass_erase_enabled);

    let blank = ftfe::SecurityState::from_fsec(0xFF);
    assert!(blank.secure);
}

#[test]
fn local_copies_decode_enums() {
    let c1: LocalRegisterCopy<u8, mcg::Control1::Register> = LocalRegisterCopy::new(0x98);
    assert_eq!(c1.read(mcg::Control1::FRDIV), 3);
    assert_eq!(
        c1.read_as_enum(mcg::Control1::CLKS),
        Some(mcg::OscSource::External)
    );
}
