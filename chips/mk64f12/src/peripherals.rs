//! Chip memory map: every register block instance with its base address and
//! size, in address order.

use core::fmt;
use core::mem::size_of;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PeripheralInfo {
    /// CMSIS instance name
    pub name: &'static str,
    pub base: usize,
    /// Size of the register block in bytes
    pub size: usize,
}

impl PeripheralInfo {
    const fn new<T>(name: &'static str, base: usize) -> PeripheralInfo {
        PeripheralInfo {
            name,
            base,
            size: size_of::<T>(),
        }
    }

    /// One past the last byte of the block.
    pub const fn end(&self) -> usize {
        self.base + self.size
    }

    pub const fn contains(&self, address: usize) -> bool {
        address >= self.base && address < self.end()
    }
}

impl fmt::Display for PeripheralInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} @ {:#010x}..{:#010x}", self.name, self.base, self.end())
    }
}

pub const NUM_PERIPHERALS: usize = 70;

pub static PERIPHERALS: [PeripheralInfo; NUM_PERIPHERALS] = [
    PeripheralInfo::new::<nv::Registers>("FTFE_FlashConfig", nv::FTFE_FLASH_CONFIG_BASE),
    PeripheralInfo::new::<aips::Registers>("AIPS0", aips::AIPS0_BASE),
    PeripheralInfo::new::<axbs::Registers>("AXBS", axbs::AXBS_BASE),
    PeripheralInfo::new::<dma::Registers>("DMA0", dma::DMA0_BASE),
    PeripheralInfo::new::<fb::Registers>("FB", fb::FB_BASE),
    PeripheralInfo::new::<sysmpu::Registers>("SYSMPU", sysmpu::SYSMPU_BASE),
    PeripheralInfo::new::<fmc::Registers>("FMC", fmc::FMC_BASE),
    PeripheralInfo::new::<ftfe::Registers>("FTFE", ftfe::FTFE_BASE),
    PeripheralInfo::new::<dmamux::Registers>("DMAMUX", dmamux::DMAMUX_BASE),
    PeripheralInfo::new::<can::Registers>("CAN0", can::CAN0_BASE),
    PeripheralInfo::new::<rng::Registers>("RNG", rng::RNG_BASE),
    PeripheralInfo::new::<spi::Registers>("SPI0", spi::SPI0_BASE),
    PeripheralInfo::new::<spi::Registers>("SPI1", spi::SPI1_BASE),
    PeripheralInfo::new::<i2s::Registers>("I2S0", i2s::I2S0_BASE),
    PeripheralInfo::new::<crc::Registers>("CRC", crc::CRC_BASE),
    PeripheralInfo::new::<usbdcd::Registers>("USBDCD", usbdcd::USBDCD_BASE),
    PeripheralInfo::new::<pdb::Registers>("PDB0", pdb::PDB0_BASE),
    PeripheralInfo::new::<pit::Registers>("PIT", pit::PIT_BASE),
    PeripheralInfo::new::<ftm::Registers>("FTM0", ftm::FTM0_BASE),
    PeripheralInfo::new::<ftm::Registers>("FTM1", ftm::FTM1_BASE),
    PeripheralInfo::new::<ftm::Registers>("FTM2", ftm::FTM2_BASE),
    PeripheralInfo::new::<adc::Registers>("ADC0", adc::ADC0_BASE),
    PeripheralInfo::new::<rtc::Registers>("RTC", rtc::RTC_BASE),
    PeripheralInfo::new::<rfvbat::Registers>("RFVBAT", rfvbat::RFVBAT_BASE),
    PeripheralInfo::new::<lptmr::Registers>("LPTMR0", lptmr::LPTMR0_BASE),
    PeripheralInfo::new::<rfsys::Registers>("RFSYS", rfsys::RFSYS_BASE),
    PeripheralInfo::new::<sim::Registers>("SIM", sim::SIM_BASE),
    PeripheralInfo::new::<port::Registers>("PORTA", port::PORTA_BASE),
    PeripheralInfo::new::<port::Registers>("PORTB", port::PORTB_BASE),
    PeripheralInfo::new::<port::Registers>("PORTC", port::PORTC_BASE),
    PeripheralInfo::new::<port::Registers>("PORTD", port::PORTD_BASE),
    PeripheralInfo::new::<port::Registers>("PORTE", port::PORTE_BASE),
    PeripheralInfo::new::<wdog::Registers>("WDOG", wdog::WDOG_BASE),
    PeripheralInfo::new::<ewm::Registers>("EWM", ewm::EWM_BASE),
    PeripheralInfo::new::<cmt::Registers>("CMT", cmt::CMT_BASE),
    PeripheralInfo::new::<mcg::Registers>("MCG", mcg::MCG_BASE),
    PeripheralInfo::new::<osc::Registers>("OSC", osc::OSC_BASE),
    PeripheralInfo::new::<i2c::Registers>("I2C0", i2c::I2C0_BASE),
    PeripheralInfo::new::<i2c::Registers>("I2C1", i2c::I2C1_BASE),
    PeripheralInfo::new::<uart::Registers>("UART0", uart::UART0_BASE),
    PeripheralInfo::new::<uart::Registers>("UART1", uart::UART1_BASE),
    PeripheralInfo::new::<uart::Registers>("UART2", uart::UART2_BASE),
    PeripheralInfo::new::<uart::Registers>("UART3", uart::UART3_BASE),
    PeripheralInfo::new::<usb::Registers>("USB0", usb::USB0_BASE),
    PeripheralInfo::new::<cmp::Registers>("CMP0", cmp::CMP0_BASE),
    PeripheralInfo::new::<cmp::Registers>("CMP1", cmp::CMP1_BASE),
    PeripheralInfo::new::<cmp::Registers>("CMP2", cmp::CMP2_BASE),
    PeripheralInfo::new::<vref::Registers>("VREF", vref::VREF_BASE),
    PeripheralInfo::new::<llwu::Registers>("LLWU", llwu::LLWU_BASE),
    PeripheralInfo::new::<pmc::Registers>("PMC", pmc::PMC_BASE),
    PeripheralInfo::new::<smc::Registers>("SMC", smc::SMC_BASE),
    PeripheralInfo::new::<rcm::Registers>("RCM", rcm::RCM_BASE),
    PeripheralInfo::new::<aips::Registers>("AIPS1", aips::AIPS1_BASE),
    PeripheralInfo::new::<spi::Registers>("SPI2", spi::SPI2_BASE),
    PeripheralInfo::new::<sdhc::Registers>("SDHC", sdhc::SDHC_BASE),
    PeripheralInfo::new::<ftm::Registers>("FTM3", ftm::FTM3_BASE),
    PeripheralInfo::new::<adc::Registers>("ADC1", adc::ADC1_BASE),
    PeripheralInfo::new::<enet::Registers>("ENET", enet::ENET_BASE),
    PeripheralInfo::new::<dac::Registers>("DAC0", dac::DAC0_BASE),
    PeripheralInfo::new::<dac::Registers>("DAC1", dac::DAC1_BASE),
    PeripheralInfo::new::<i2c::Registers>("I2C2", i2c::I2C2_BASE),
    PeripheralInfo::new::<uart::Registers>("UART4", uart::UART4_BASE),
    PeripheralInfo::new::<uart::Registers>("UART5", uart::UART5_BASE),
    PeripheralInfo::new::<gpio::Registers>("PTA", gpio::PTA_BASE),
    PeripheralInfo::new::<gpio::Registers>("PTB", gpio::PTB_BASE),
    PeripheralInfo::new::<gpio::Registers>("PTC", gpio::PTC_BASE),
    PeripheralInfo::new::<gpio::Registers>("PTD", gpio::PTD_BASE),
    PeripheralInfo::new::<gpio::Registers>("PTE", gpio::PTE_BASE),
    PeripheralInfo::new::<mcm::Registers>("MCM", mcm::MCM_BASE),
    PeripheralInfo::new::<cau::Registers>("CAU", cau::CAU_BASE),
];

/// The register block instance that decodes `address`, if any.
pub fn find(address: usize) -> Option<&'static PeripheralInfo> {
    PERIPHERALS.iter().find(|p| p.contains(address))
}

/// Looks an instance up by its CMSIS name.
pub fn by_name(name: &str) -> Option<&'static PeripheralInfo> {
    PERIPHERALS.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_and_disjoint() {
        for pair in PERIPHERALS.windows(2) {
            assert!(
                pair[0].end() <= pair[1].base,
                "{} overlaps {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in PERIPHERALS.iter().enumerate() {
            for b in &PERIPHERALS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn lookup() {
        let uart0 = find(uart::UART0_BASE + 0x7).unwrap();
        assert_eq!(uart0.name, "UART0");
        assert_eq!(uart0.size, 0x20);
        assert!(find(0x2000_0000).is_none());
        assert_eq!(by_name("PIT").unwrap().base, pit::PIT_BASE);
        assert_eq!(by_name("DMA0").unwrap().size, 0x1200);
    }
}
