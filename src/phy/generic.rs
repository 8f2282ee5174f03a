//! Generic PHY Driver Trait
//!
//! This module defines the operations a host PHY framework invokes on a
//! driver, plus the standard-register helpers drivers delegate to:
//!
//! - [`ieee802_3`]: Clause 22 BMCR/BMSR handling (reset, forced link,
//!   auto-negotiation, power down, PHY id)
//! - [`baset1`]: Clause 45 PMA/PMD BASE-T1 master/slave control

use embedded_hal::delay::DelayNs;

use crate::config::{Duplex, InterruptMode, Speed};
use crate::error::Result;
use crate::hal::mdio::MdioBus;
use crate::phy::cable_test::CableTestReporter;

// =============================================================================
// Link Status
// =============================================================================

/// BASE-T1 master/slave role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Role {
    /// Clock master on the single pair
    Master,
    /// Clock slave, recovers timing from the master
    Slave,
}

/// Ethernet link status information
///
/// Reflects the current register state; `role` is `None` when the driver
/// does not read BASE-T1 master/slave state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStatus {
    /// Link established
    pub link_up: bool,
    /// Link speed
    pub speed: Speed,
    /// Duplex mode
    pub duplex: Duplex,
    /// BASE-T1 role
    pub role: Option<Role>,
}

impl LinkStatus {
    /// Create a new link status without role information
    pub const fn new(link_up: bool, speed: Speed, duplex: Duplex) -> Self {
        Self {
            link_up,
            speed,
            duplex,
            role: None,
        }
    }

    /// Attach a BASE-T1 role
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }
}

// =============================================================================
// PHY Driver Trait
// =============================================================================

/// Trait for Ethernet PHY drivers
///
/// These are the callbacks a host PHY framework invokes over a device's
/// lifetime. Every operation reports the first register access error it
/// hits and stops there.
///
/// The bus is passed per call; the driver never stores it. Exclusive
/// borrows of the driver and the bus serialize all access to one device.
pub trait PhyDriver {
    /// Get the PHY address (0-31)
    fn address(&self) -> u8;

    /// Device-specific reset
    fn soft_reset<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Bring the device to its operating configuration
    fn config_init<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()>;

    /// Apply link configuration
    ///
    /// Returns `true` when the BASE-T1 master/slave setting changed.
    fn config_aneg<M: MdioBus>(&mut self, mdio: &mut M) -> Result<bool>;

    /// Enable or disable device interrupt sources
    fn config_intr<M: MdioBus>(&mut self, mdio: &mut M, mode: InterruptMode) -> Result<()>;

    /// Read the current link state
    fn read_status<M: MdioBus>(&mut self, mdio: &mut M) -> Result<LinkStatus>;

    /// Enter low-power mode
    fn suspend<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::power_down(mdio, self.address())
    }

    /// Leave low-power mode
    fn resume<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::power_up(mdio, self.address())
    }

    /// Current signal quality index, `0..=get_sqi_max()`
    fn get_sqi<M: MdioBus>(&self, mdio: &mut M) -> Result<u8>;

    /// Highest value `get_sqi` can return
    fn get_sqi_max(&self) -> u8;

    /// Arm a TDR cable test
    fn cable_test_start<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()>;

    /// Poll a running cable test
    ///
    /// Returns `Ok(true)` once the result has been published to `reporter`.
    fn cable_test_get_status<M: MdioBus, R: CableTestReporter>(
        &mut self,
        mdio: &mut M,
        reporter: &mut R,
    ) -> Result<bool>;

    /// Read the PHY identifier (OUI + model + revision)
    ///
    /// Returns a 32-bit value: `(PHYIDR1 << 16) | PHYIDR2`
    fn phy_id<M: MdioBus>(&self, mdio: &mut M) -> Result<u32> {
        ieee802_3::read_phy_id(mdio, self.address())
    }

    /// Check if the link is up
    fn is_link_up<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        ieee802_3::is_link_up(mdio, self.address())
    }
}

// =============================================================================
// Default Implementations
// =============================================================================

/// Helper functions using standard IEEE 802.3 registers
pub mod ieee802_3 {
    use super::*;
    use crate::config::LinkConfig;
    use crate::hal::mdio::modify;
    use crate::internal::phy_regs::standard::{bmcr, bmsr, phy_reg};

    /// Read BMSR and check link status bit
    pub fn is_link_up<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        Ok((bmsr_val & bmsr::LINK_STATUS) != 0)
    }

    /// Read PHY ID from PHYIDR1 and PHYIDR2
    pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<u32> {
        let id1 = mdio.read(phy_addr, phy_reg::PHYIDR1)? as u32;
        let id2 = mdio.read(phy_addr, phy_reg::PHYIDR2)? as u32;
        Ok((id1 << 16) | id2)
    }

    /// Force speed and duplex with auto-negotiation off
    pub fn setup_forced<M: MdioBus>(mdio: &mut M, phy_addr: u8, link: LinkConfig) -> Result<()> {
        let mut set = 0;
        if matches!(link.speed, Speed::Mbps100) {
            set |= bmcr::SPEED_100;
        }
        if matches!(link.duplex, Duplex::Full) {
            set |= bmcr::DUPLEX_FULL;
        }

        let mask = bmcr::AN_ENABLE | bmcr::ISOLATE | bmcr::SPEED_100 | bmcr::DUPLEX_FULL;
        modify(mdio, phy_addr, phy_reg::BMCR, mask, set).map(|_| ())
    }

    /// Enable auto-negotiation and restart
    pub fn enable_auto_negotiation<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
        mdio.write(
            phy_addr,
            phy_reg::BMCR,
            (bmcr_val | bmcr::AN_ENABLE | bmcr::AN_RESTART) & !bmcr::ISOLATE,
        )
    }

    /// Set BMCR power down
    pub fn power_down<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        modify(mdio, phy_addr, phy_reg::BMCR, 0, bmcr::POWER_DOWN).map(|_| ())
    }

    /// Clear BMCR power down
    pub fn power_up<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        modify(mdio, phy_addr, phy_reg::BMCR, bmcr::POWER_DOWN, 0).map(|_| ())
    }

    /// Link state from BMSR, speed and duplex from BMCR
    ///
    /// For PHYs without a resolved-speed register, or with
    /// auto-negotiation off, BMCR holds the operating mode.
    pub fn read_status_fixed<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<LinkStatus> {
        let link_up = is_link_up(mdio, phy_addr)?;
        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;

        let speed = if (bmcr_val & bmcr::SPEED_100) != 0 {
            Speed::Mbps100
        } else {
            Speed::Mbps10
        };

        let duplex = if (bmcr_val & bmcr::DUPLEX_FULL) != 0 {
            Duplex::Full
        } else {
            Duplex::Half
        };

        Ok(LinkStatus::new(link_up, speed, duplex))
    }
}

/// Helper functions for the Clause 45 BASE-T1 PMA/PMD control register
pub mod baset1 {
    use super::*;
    use crate::config::MasterSlaveConfig;
    use crate::hal::mdio::modify_mmd;
    use crate::internal::phy_regs::standard::{bt1_ctrl, mmd};

    /// Read the configured master/slave role
    pub fn read_master_slave<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<Role> {
        let ctrl = mdio.read_mmd(phy_addr, mmd::PMAPMD, bt1_ctrl::REG)?;
        if (ctrl & bt1_ctrl::CFG_MASTER) != 0 {
            Ok(Role::Master)
        } else {
            Ok(Role::Slave)
        }
    }

    /// Program the master/slave role
    ///
    /// `Unsupported` leaves the register untouched. Returns `true` when
    /// the register value changed.
    pub fn setup_master_slave<M: MdioBus>(
        mdio: &mut M,
        phy_addr: u8,
        config: MasterSlaveConfig,
    ) -> Result<bool> {
        let set = match config {
            MasterSlaveConfig::PreferredMaster | MasterSlaveConfig::ForcedMaster => bt1_ctrl::CFG_MASTER,
            MasterSlaveConfig::PreferredSlave | MasterSlaveConfig::ForcedSlave => 0,
            MasterSlaveConfig::Unsupported => return Ok(false),
        };

        modify_mmd(mdio, phy_addr, mmd::PMAPMD, bt1_ctrl::REG, bt1_ctrl::CFG_MASTER, set)
    }
}
