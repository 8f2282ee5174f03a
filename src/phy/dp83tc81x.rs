//! DP83TC81x PHY Driver
//!
//! Driver for the Texas Instruments DP83TC812, DP83TC813 and DP83TC814
//! 100BASE-T1 automotive Ethernet PHYs.
//!
//! All three parts share one register map and one set of tuning tables;
//! they differ only in their PHY identifier.
//!
//! # Strap Configuration
//!
//! The strap pins are latched at power-on and read back from the STRAP
//! register (MMD 0x1F, 0x045D):
//!
//! | Bit | Meaning |
//! |-----|---------|
//! | 9 | BASE-T1 master |
//! | 7 | RGMII host interface enabled |
//!
//! The decoded [`Straps`] value is taken at attach time and replaced as a
//! whole by [`PhyDriver::soft_reset`].
//!
//! # Bring-up Sequence
//!
//! 1. Hardware reset, 100 ms settle
//! 2. Forced 100 Mbps full duplex, auto-negotiation off
//! 3. PMA/PMD role (MMD 1, 0x0834) from the master strap
//! 4. Role-specific tuning table
//! 5. Autonomous mode (MMD 0x1F, 0x018B bit 6)
//! 6. 10 ms settle, then software reset, 100 ms settle
//! 7. Host interface: RGMII clock shift or SGMII mode
//!
//! Every write is checked; the first failure aborts the sequence.
//!
//! # Example
//!
//! ```ignore
//! use dp83tc81x::{DriverConfig, Dp83tc81x, PhyDriver, PhyInterface};
//!
//! let config = DriverConfig::new().with_interface(PhyInterface::RgmiiId);
//! let mut phy = Dp83tc81x::attach(0, config, &mut mdio, &mut delay)?;
//!
//! let status = phy.read_status(&mut mdio)?;
//! let sqi = phy.get_sqi(&mut mdio)?;
//! ```

use embedded_hal::delay::DelayNs;

use crate::config::{DriverConfig, InterruptMode, LinkConfig, PhyInterface};
use crate::error::{ConfigError, Result};
use crate::hal::mdio::{MdioBus, set_bits_mmd};
use crate::internal::constants::{CHIP_INIT_SETTLE_MS, RESET_SETTLE_MS, SQI_MAX};
use crate::internal::init_seq::{MASTER_CS2_0_INIT, SLAVE_CS2_0_INIT};
use crate::internal::phy_regs::dp83tc81x::{
    autonomous, c22, int_stat1, int_stat2, int_stat3, phy_id, pma_ctrl, reg, reset_ctrl, rgmii_id, sgmii, sqi,
    strap,
};
use crate::internal::phy_regs::standard::{bt1_ctrl, mmd};

use super::cable_test::{self, CableTestReporter};
use super::generic::{LinkStatus, PhyDriver, Role, baset1, ieee802_3};

pub use crate::internal::init_seq::InitReg;

// =============================================================================
// DP83TC81x Constants
// =============================================================================

/// DP83TC812 PHY identifier (exact match)
pub const DP83TC812_PHY_ID: u32 = phy_id::DP83TC812;
/// DP83TC813 PHY identifier (exact match)
pub const DP83TC813_PHY_ID: u32 = phy_id::DP83TC813;
/// DP83TC814 PHY identifier (exact match)
pub const DP83TC814_PHY_ID: u32 = phy_id::DP83TC814;

/// INT_STAT1 sources enabled by [`InterruptMode::Enabled`]
const INT_STAT1_EN: u16 =
    int_stat1::ESD_EVENT | int_stat1::LINK_STAT | int_stat1::ENERGY_DET | int_stat1::LINK_QUAL;

/// INT_STAT2 sources enabled by [`InterruptMode::Enabled`]
const INT_STAT2_EN: u16 =
    int_stat2::SLEEP_MODE | int_stat2::OVERTEMP | int_stat2::OVERVOLTAGE | int_stat2::UNDERVOLTAGE;

/// INT_STAT3 sources enabled by [`InterruptMode::Enabled`]
const INT_STAT3_EN: u16 = int_stat3::LPS | int_stat3::WAKE_REQ | int_stat3::NO_FRAME | int_stat3::POR_DONE;

// =============================================================================
// Chip Variants
// =============================================================================

/// Supported chip variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipVariant {
    /// TI DP83TC812
    Dp83tc812,
    /// TI DP83TC813
    Dp83tc813,
    /// TI DP83TC814
    Dp83tc814,
}

impl ChipVariant {
    /// All supported variants
    pub const ALL: [ChipVariant; 3] = [ChipVariant::Dp83tc812, ChipVariant::Dp83tc813, ChipVariant::Dp83tc814];

    /// Map a PHY identifier to a variant
    pub const fn from_phy_id(id: u32) -> Option<Self> {
        match id {
            phy_id::DP83TC812 => Some(ChipVariant::Dp83tc812),
            phy_id::DP83TC813 => Some(ChipVariant::Dp83tc813),
            phy_id::DP83TC814 => Some(ChipVariant::Dp83tc814),
            _ => None,
        }
    }

    /// PHY identifier of this variant
    pub const fn phy_id(self) -> u32 {
        match self {
            ChipVariant::Dp83tc812 => phy_id::DP83TC812,
            ChipVariant::Dp83tc813 => phy_id::DP83TC813,
            ChipVariant::Dp83tc814 => phy_id::DP83TC814,
        }
    }

    /// Human readable name
    pub const fn name(self) -> &'static str {
        match self {
            ChipVariant::Dp83tc812 => "TI DP83TC812",
            ChipVariant::Dp83tc813 => "TI DP83TC813",
            ChipVariant::Dp83tc814 => "TI DP83TC814",
        }
    }
}

impl core::fmt::Display for ChipVariant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Role-dependent tuning tables of one variant
struct RoleTables {
    master: &'static [InitReg],
    slave: &'static [InitReg],
}

/// Indexed by `ChipVariant as usize`; every variant runs the CS2.0 tables
static INIT_TABLES: [RoleTables; 3] = [
    RoleTables {
        master: &MASTER_CS2_0_INIT,
        slave: &SLAVE_CS2_0_INIT,
    },
    RoleTables {
        master: &MASTER_CS2_0_INIT,
        slave: &SLAVE_CS2_0_INIT,
    },
    RoleTables {
        master: &MASTER_CS2_0_INIT,
        slave: &SLAVE_CS2_0_INIT,
    },
];

/// Tuning table for a variant in a given role
pub fn init_sequence(variant: ChipVariant, role: Role) -> &'static [InitReg] {
    let tables = &INIT_TABLES[variant as usize];
    match role {
        Role::Master => tables.master,
        Role::Slave => tables.slave,
    }
}

/// Write an init table in order, stopping at the first failure
pub(crate) fn write_seq<M: MdioBus>(mdio: &mut M, phy_addr: u8, table: &[InitReg]) -> Result<()> {
    #[cfg(feature = "defmt")]
    defmt::debug!("PHY {}: writing {} init registers", phy_addr, table.len());

    for entry in table {
        mdio.write_mmd(phy_addr, entry.mmd, entry.reg, entry.value)?;
    }
    Ok(())
}

// =============================================================================
// Straps
// =============================================================================

/// Strap-pin configuration latched at reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Straps {
    /// BASE-T1 role
    pub role: Role,
    /// RGMII host interface enabled
    pub rgmii_enabled: bool,
}

impl Straps {
    /// Decode the STRAP register
    pub const fn from_register(value: u16) -> Self {
        let role = if (value & strap::MASTER_MODE) != 0 {
            Role::Master
        } else {
            Role::Slave
        };

        Self {
            role,
            rgmii_enabled: (value & strap::RGMII_IS_EN) != 0,
        }
    }

    /// Read and decode the STRAP register
    pub fn read<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<Self> {
        let value = mdio.read_mmd(phy_addr, mmd::VEND2, reg::STRAP)?;
        let straps = Self::from_register(value);

        #[cfg(feature = "defmt")]
        defmt::debug!("PHY {}: straps {} ({=u16:#x})", phy_addr, straps, value);

        Ok(straps)
    }

    /// Strapped as master
    pub const fn is_master(&self) -> bool {
        matches!(self.role, Role::Master)
    }
}

/// RESET_CTRL reset flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetKind {
    /// Full chip reset, registers return to defaults
    Hardware,
    /// Restart with current register values
    Software,
}

// =============================================================================
// DP83TC81x Driver
// =============================================================================

/// DP83TC81x PHY Driver
#[derive(Debug)]
pub struct Dp83tc81x {
    /// PHY address (0-31)
    addr: u8,
    /// Identified chip
    chip: ChipVariant,
    /// Strap configuration
    straps: Straps,
    /// Attach-time configuration
    config: DriverConfig,
    /// Link parameters applied by `config_aneg`
    link: LinkConfig,
}

impl Dp83tc81x {
    /// Attach to a PHY whose identifier is already known
    ///
    /// Reads the straps, identifies the variant, brings the chip up and
    /// applies the configured interrupt mode.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidConfig`] if `config` does not validate
    /// - [`ConfigError::UnsupportedDevice`] if `phy_id` is not a DP83TC81x
    pub fn probe<M: MdioBus, D: DelayNs>(
        addr: u8,
        phy_id: u32,
        config: DriverConfig,
        mdio: &mut M,
        delay: &mut D,
    ) -> Result<Self> {
        config.validate()?;
        let straps = Straps::read(mdio, addr)?;

        let Some(chip) = ChipVariant::from_phy_id(phy_id) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("PHY {}: unsupported id {=u32:#x}", addr, phy_id);
            return Err(ConfigError::UnsupportedDevice.into());
        };

        #[cfg(feature = "defmt")]
        defmt::info!("PHY {}: {} ({})", addr, chip, straps.role);

        let mut phy = Self {
            addr,
            chip,
            straps,
            config,
            link: LinkConfig::forced_100_full(),
        };

        phy.config_init(mdio, delay)?;
        phy.config_intr(mdio, config.interrupts)?;
        Ok(phy)
    }

    /// Read the PHY identifier from PHYIDR1/2, then [`probe`](Self::probe)
    pub fn attach<M: MdioBus, D: DelayNs>(
        addr: u8,
        config: DriverConfig,
        mdio: &mut M,
        delay: &mut D,
    ) -> Result<Self> {
        let id = ieee802_3::read_phy_id(mdio, addr)?;
        Self::probe(addr, id, config, mdio, delay)
    }

    /// Identified chip variant
    pub const fn chip(&self) -> ChipVariant {
        self.chip
    }

    /// Current strap configuration
    pub const fn straps(&self) -> Straps {
        self.straps
    }

    /// Attach-time configuration
    pub const fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Link parameters used by [`PhyDriver::config_aneg`]
    pub const fn link_config(&self) -> LinkConfig {
        self.link
    }

    /// Replace the link parameters; takes effect at the next `config_aneg`
    pub fn set_link_config(&mut self, link: LinkConfig) {
        self.link = link;
    }

    /// Reset through RESET_CTRL and wait out the settle time
    pub fn reset<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D, kind: ResetKind) -> Result<()> {
        let bit = match kind {
            ResetKind::Hardware => reset_ctrl::HW_RESET,
            ResetKind::Software => reset_ctrl::SW_RESET,
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("PHY {}: {} reset", self.addr, kind);

        mdio.write_mmd(self.addr, mmd::VEND2, reg::RESET_CTRL, bit)?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }

    /// Reset and retune the chip for its strapped role
    pub fn chip_init<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()> {
        self.reset(mdio, delay, ResetKind::Hardware)?;

        self.link = LinkConfig::forced_100_full();

        let pma = if self.straps.is_master() {
            pma_ctrl::MASTER
        } else {
            pma_ctrl::SLAVE
        };
        mdio.write_mmd(self.addr, mmd::PMAPMD, bt1_ctrl::REG, pma)?;

        write_seq(mdio, self.addr, init_sequence(self.chip, self.straps.role))?;
        set_bits_mmd(mdio, self.addr, mmd::VEND2, reg::AUTONOMOUS_CTRL, autonomous::EN)?;

        delay.delay_ms(CHIP_INIT_SETTLE_MS);

        self.reset(mdio, delay, ResetKind::Software)
    }

    /// Apply the host interface electrical configuration
    fn configure_interface<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        let interface = self.config.interface;

        if interface.is_rgmii() {
            if !self.straps.rgmii_enabled {
                #[cfg(feature = "defmt")]
                defmt::warn!("PHY {}: {} requested but RGMII is not strapped", self.addr, interface);
            }

            let mut shift = 0;
            if self.config.rx_delay_enabled() {
                shift |= rgmii_id::RX_CLK_SHIFT;
            }
            if self.config.tx_delay_enabled() {
                shift |= rgmii_id::TX_CLK_SHIFT;
            }

            if shift != 0 {
                set_bits_mmd(mdio, self.addr, mmd::PMAPMD, reg::RGMII_ID_CTRL, shift)?;
            }
        }

        if interface == PhyInterface::Sgmii {
            self.write_sgmii_config(mdio)?;
        }

        Ok(())
    }

    fn write_sgmii_config<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        mdio.write_mmd(self.addr, mmd::VEND2, reg::SGMII_CTRL, sgmii::CONFIG_VAL)
    }
}

impl PhyDriver for Dp83tc81x {
    fn address(&self) -> u8 {
        self.addr
    }

    /// Hardware reset without settle time, then re-read the straps
    fn soft_reset<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        mdio.write_mmd(self.addr, mmd::VEND2, reg::RESET_CTRL, reset_ctrl::HW_RESET)?;
        self.straps = Straps::read(mdio, self.addr)?;
        Ok(())
    }

    fn config_init<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()> {
        self.chip_init(mdio, delay)?;
        self.configure_interface(mdio)
    }

    fn config_aneg<M: MdioBus>(&mut self, mdio: &mut M) -> Result<bool> {
        if self.config.interface == PhyInterface::Sgmii {
            self.write_sgmii_config(mdio)?;
        }

        let changed = baset1::setup_master_slave(mdio, self.addr, self.config.master_slave)?;

        if self.link.autoneg {
            ieee802_3::enable_auto_negotiation(mdio, self.addr)?;
        } else {
            ieee802_3::setup_forced(mdio, self.addr, self.link)?;
        }

        Ok(changed)
    }

    fn config_intr<M: MdioBus>(&mut self, mdio: &mut M, mode: InterruptMode) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::debug!("PHY {}: interrupts {}", self.addr, mode);

        match mode {
            InterruptMode::Enabled => {
                for (reg_addr, bits) in [
                    (c22::INT_STAT1, INT_STAT1_EN),
                    (c22::INT_STAT2, INT_STAT2_EN),
                    (c22::INT_STAT3, INT_STAT3_EN),
                ] {
                    let value = mdio.read(self.addr, reg_addr)?;
                    mdio.write(self.addr, reg_addr, value | bits)?;
                }
            }
            InterruptMode::Disabled => {
                for reg_addr in [c22::INT_STAT1, c22::INT_STAT2, c22::INT_STAT3] {
                    mdio.write(self.addr, reg_addr, 0)?;
                }
            }
        }

        self.config.interrupts = mode;
        Ok(())
    }

    fn read_status<M: MdioBus>(&mut self, mdio: &mut M) -> Result<LinkStatus> {
        let status = ieee802_3::read_status_fixed(mdio, self.addr)?;
        let role = baset1::read_master_slave(mdio, self.addr)?;
        Ok(status.with_role(role))
    }

    fn get_sqi<M: MdioBus>(&self, mdio: &mut M) -> Result<u8> {
        let value = mdio.read_mmd(self.addr, mmd::VEND2, reg::DSP_REG_71)?;
        Ok(((value >> sqi::SHIFT) & sqi::MASK) as u8)
    }

    fn get_sqi_max(&self) -> u8 {
        SQI_MAX
    }

    fn cable_test_start<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()> {
        cable_test::start(mdio, self.addr, delay)
    }

    fn cable_test_get_status<M: MdioBus, R: CableTestReporter>(
        &mut self,
        mdio: &mut M,
        reporter: &mut R,
    ) -> Result<bool> {
        cable_test::get_status(mdio, self.addr, reporter)
    }
}
