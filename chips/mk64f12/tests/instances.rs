//! Instance tables agree with the per-instance constants, and IRQ tables map
//! instance `n` to its vector.

use mk64f12::nvic::Interrupt;
use mk64f12::*;

fn addresses<T>(ptrs: &[StaticRef<T>]) -> impl Iterator<Item = usize> + '_ {
    ptrs.iter().map(|p| p.address())
}

macro_rules! assert_table {
    ($ptrs:expr, $addrs:expr) => {
        assert!(addresses(&$ptrs).eq($addrs.iter().copied()));
    };
}

#[test]
fn pointer_tables_match_base_tables() {
    assert_table!(adc::ADC_BASE_PTRS, adc::ADC_BASE_ADDRS);
    assert_table!(aips::AIPS_BASE_PTRS, aips::AIPS_BASE_ADDRS);
    assert_table!(axbs::AXBS_BASE_PTRS, axbs::AXBS_BASE_ADDRS);
    assert_table!(can::CAN_BASE_PTRS, can::CAN_BASE_ADDRS);
    assert_table!(cau::CAU_BASE_PTRS, cau::CAU_BASE_ADDRS);
    assert_table!(cmp::CMP_BASE_PTRS, cmp::CMP_BASE_ADDRS);
    assert_table!(cmt::CMT_BASE_PTRS, cmt::CMT_BASE_ADDRS);
    assert_table!(crc::CRC_BASE_PTRS, crc::CRC_BASE_ADDRS);
    assert_table!(dac::DAC_BASE_PTRS, dac::DAC_BASE_ADDRS);
    assert_table!(dma::DMA_BASE_PTRS, dma::DMA_BASE_ADDRS);
    assert_table!(dmamux::DMAMUX_BASE_PTRS, dmamux::DMAMUX_BASE_ADDRS);
    assert_table!(enet::ENET_BASE_PTRS, enet::ENET_BASE_ADDRS);
    assert_table!(ewm::EWM_BASE_PTRS, ewm::EWM_BASE_ADDRS);
    assert_table!(fb::FB_BASE_PTRS, fb::FB_BASE_ADDRS);
    assert_table!(fmc::FMC_BASE_PTRS, fmc::FMC_BASE_ADDRS);
    assert_table!(ftfe::FTFE_BASE_PTRS, ftfe::FTFE_BASE_ADDRS);
    assert_table!(ftm::FTM_BASE_PTRS, ftm::FTM_BASE_ADDRS);
    assert_table!(gpio::GPIO_BASE_PTRS, gpio::GPIO_BASE_ADDRS);
    assert_table!(i2c::I2C_BASE_PTRS, i2c::I2C_BASE_ADDRS);
    assert_table!(i2s::I2S_BASE_PTRS, i2s::I2S_BASE_ADDRS);
    assert_table!(llwu::LLWU_BASE_PTRS, llwu::LLWU_BASE_ADDRS);
    assert_table!(lptmr::LPTMR_BASE_PTRS, lptmr::LPTMR_BASE_ADDRS);
    assert_table!(mcg::MCG_BASE_PTRS, mcg::MCG_BASE_ADDRS);
    assert_table!(mcm::MCM_BASE_PTRS, mcm::MCM_BASE_ADDRS);
    assert_table!(nv::NV_BASE_PTRS, nv::NV_BASE_ADDRS);
    assert_table!(osc::OSC_BASE_PTRS, osc::OSC_BASE_ADDRS);
    assert_table!(pdb::PDB_BASE_PTRS, pdb::PDB_BASE_ADDRS);
    assert_table!(pit::PIT_BASE_PTRS, pit::PIT_BASE_ADDRS);
    assert_table!(pmc::PMC_BASE_PTRS, pmc::PMC_BASE_ADDRS);
    assert_table!(port::PORT_BASE_PTRS, port::PORT_BASE_ADDRS);
    assert_table!(rcm::RCM_BASE_PTRS, rcm::RCM_BASE_ADDRS);
    assert_table!(rfsys::RFSYS_BASE_PTRS, rfsys::RFSYS_BASE_ADDRS);
    assert_table!(rfvbat::RFVBAT_BASE_PTRS, rfvbat::RFVBAT_BASE_ADDRS);
    assert_table!(rng::RNG_BASE_PTRS, rng::RNG_BASE_ADDRS);
    assert_table!(rtc::RTC_BASE_PTRS, rtc::RTC_BASE_ADDRS);
    assert_table!(sdhc::SDHC_BASE_PTRS, sdhc::SDHC_BASE_ADDRS);
    assert_table!(sim::SIM_BASE_PTRS, sim::SIM_BASE_ADDRS);
    assert_table!(smc::SMC_BASE_PTRS, smc::SMC_BASE_ADDRS);
    assert_table!(spi::SPI_BASE_PTRS, spi::SPI_BASE_ADDRS);
    assert_table!(sysmpu::SYSMPU_BASE_PTRS, sysmpu::SYSMPU_BASE_ADDRS);
    assert_table!(uart::UART_BASE_PTRS, uart::UART_BASE_ADDRS);
    assert_table!(usb::USB_BASE_PTRS, usb::USB_BASE_ADDRS);
    assert_table!(usbdcd::USBDCD_BASE_PTRS, usbdcd::USBDCD_BASE_ADDRS);
    assert_table!(vref::VREF_BASE_PTRS, vref::VREF_BASE_ADDRS);
    assert_table!(wdog::WDOG_BASE_PTRS, wdog::WDOG_BASE_ADDRS);
}

#[test]
fn instance_constants() {
    assert_eq!(uart::UART3.address(), 0x4006_D000);
    assert_eq!(uart::UART4.address(), 0x400E_A000);
    assert_eq!(gpio::PTC.address(), 0x400F_F080);
    assert_eq!(port::PORTE.address(), 0x4004_D000);
    assert_eq!(cmp::CMP2.address(), 0x4007_3010);
    assert_eq!(ftm::FTM3.address(), 0x400B_9000);
    assert_eq!(nv::FTFE_FLASH_CONFIG.address(), 0x400);
    assert_eq!(crc::CRC0_NARROW.address(), crc::CRC0.address());
}

fn numbers(table: &[Interrupt]) -> impl Iterator<Item = u16> + '_ {
    table.iter().map(|irq| irq.number())
}

macro_rules! assert_vectors {
    ($table:expr, [$($n:expr),+ $(,)?]) => {
        assert!(numbers(&$table).eq([$($n as u16),+]));
    };
}

#[test]
fn irq_tables_map_instances_to_vectors() {
    assert_vectors!(adc::ADC_IRQS, [39, 73]);
    assert_vectors!(cmp::CMP_IRQS, [40, 41, 70]);
    assert_vectors!(dac::DAC_IRQS, [56, 72]);
    assert_vectors!(ftm::FTM_IRQS, [42, 43, 44, 71]);
    assert_vectors!(i2c::I2C_IRQS, [24, 25, 74]);
    assert_vectors!(spi::SPI_IRQS, [26, 27, 65]);
    assert_vectors!(port::PORT_IRQS, [59, 60, 61, 62, 63]);
    assert_vectors!(pit::PIT_IRQS, [48, 49, 50, 51]);
    assert_vectors!(uart::UART_RX_TX_IRQS, [31, 33, 35, 37, 66, 68]);
    assert_vectors!(uart::UART_ERR_IRQS, [32, 34, 36, 38, 67, 69]);
    assert_vectors!(dma::DMA_ERROR_IRQS, [16]);
    assert_vectors!(i2s::I2S_TX_IRQS, [28]);
    assert_vectors!(i2s::I2S_RX_IRQS, [29]);
    assert_vectors!(ftfe::FTFE_COMMAND_COMPLETE_IRQS, [18]);
    assert_vectors!(ftfe::FTFE_READ_COLLISION_IRQS, [19]);
    assert_vectors!(rtc::RTC_IRQS, [46]);
    assert_vectors!(rtc::RTC_SECONDS_IRQS, [47]);
    assert_vectors!(ewm::EWM_IRQS, [22]);
    assert_vectors!(wdog::WDOG_IRQS, [22]);
    assert_vectors!(can::CAN_ORED_MESSAGE_BUFFER_IRQS, [75]);
    assert_vectors!(can::CAN_WAKE_UP_IRQS, [80]);
    assert_vectors!(sdhc::SDHC_IRQS, [81]);
    assert_vectors!(enet::ENET_1588_TIMER_IRQS, [82]);
    assert_vectors!(enet::ENET_ERROR_IRQS, [85]);

    for (channel, irq) in dma::DMA_CHN_IRQS.iter().enumerate() {
        assert_eq!(usize::from(irq.number()), channel);
    }
}

#[test]
fn irq_tables_in_instance_order() {
    assert_eq!(adc::ADC_IRQS, [Interrupt::ADC0, Interrupt::ADC1]);
    assert_eq!(dma::DMA_CHN_IRQS[15], Interrupt::DMA15);
    assert_eq!(uart::UART_RX_TX_IRQS[5], Interrupt::UART5_RX_TX);
    assert_eq!(uart::UART_LON_IRQS[0], Some(Interrupt::UART0_LON));
    assert!(uart::UART_LON_IRQS[1..].iter().all(Option::is_none));
    assert_eq!(pit::PIT_IRQS[3].number(), 51);
    assert_eq!(port::PORT_IRQS[0].number(), 59);
}
