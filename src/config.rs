//! Configuration types for the DP83TC81x PHY driver
//!
//! Everything here is decided by the board/host before the PHY is attached
//! and stays fixed for the lifetime of the driver instance.

use crate::error::ConfigError;

/// Ethernet link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 10 Mbps
    Mbps10,
    /// 100 Mbps (the only speed a 100BASE-T1 PHY links at)
    #[default]
    Mbps100,
}

/// Ethernet duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Half duplex
    Half,
    /// Full duplex
    #[default]
    Full,
}

/// Host-facing (MAC side) interface type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyInterface {
    /// Media Independent Interface
    Mii,
    /// Reduced Media Independent Interface
    Rmii,
    /// RGMII, clock delays provided by the MAC or the board
    #[default]
    Rgmii,
    /// RGMII with internal RX and TX clock delay in the PHY
    RgmiiId,
    /// RGMII with internal RX clock delay only
    RgmiiRxid,
    /// RGMII with internal TX clock delay only
    RgmiiTxid,
    /// Serial Gigabit MII
    Sgmii,
}

impl PhyInterface {
    /// Whether this is one of the RGMII variants
    pub const fn is_rgmii(self) -> bool {
        matches!(
            self,
            PhyInterface::Rgmii | PhyInterface::RgmiiId | PhyInterface::RgmiiRxid | PhyInterface::RgmiiTxid
        )
    }

    /// Whether the PHY should add the RX clock delay for this mode
    pub const fn rx_internal_delay(self) -> bool {
        matches!(self, PhyInterface::RgmiiId | PhyInterface::RgmiiRxid)
    }

    /// Whether the PHY should add the TX clock delay for this mode
    pub const fn tx_internal_delay(self) -> bool {
        matches!(self, PhyInterface::RgmiiId | PhyInterface::RgmiiTxid)
    }
}

/// Interrupt generation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptMode {
    /// Leave every interrupt source masked (polling host)
    #[default]
    Disabled,
    /// Raise the interrupt line for link, quality, power and wake events
    Enabled,
}

/// Requested BASE-T1 master/slave role
///
/// A single-pair link needs exactly one master. The strap pins pick a role at
/// reset; this setting lets the host override it when auto-negotiation is
/// reconfigured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MasterSlaveConfig {
    /// Keep whatever role the PHY currently has
    #[default]
    Unsupported,
    /// Prefer master
    PreferredMaster,
    /// Prefer slave
    PreferredSlave,
    /// Force master
    ForcedMaster,
    /// Force slave
    ForcedSlave,
}

/// Forced or negotiated link parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    /// Auto-negotiation enabled
    pub autoneg: bool,
    /// Forced speed (ignored when `autoneg` is set)
    pub speed: Speed,
    /// Forced duplex (ignored when `autoneg` is set)
    pub duplex: Duplex,
}

impl LinkConfig {
    /// 100 Mbps full duplex, no auto-negotiation
    pub const fn forced_100_full() -> Self {
        Self {
            autoneg: false,
            speed: Speed::Mbps100,
            duplex: Duplex::Full,
        }
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self::forced_100_full()
    }
}

/// Attach-time driver configuration
///
/// # Example
///
/// ```ignore
/// let config = DriverConfig::new()
///     .with_interface(PhyInterface::RgmiiId)
///     .with_interrupts(InterruptMode::Enabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverConfig {
    /// Host-facing interface
    pub interface: PhyInterface,
    /// RX internal delay override (`None` follows `interface`)
    pub rx_internal_delay: Option<bool>,
    /// TX internal delay override (`None` follows `interface`)
    pub tx_internal_delay: Option<bool>,
    /// Interrupt policy
    pub interrupts: InterruptMode,
    /// BASE-T1 role request
    pub master_slave: MasterSlaveConfig,
}

impl DriverConfig {
    /// Default configuration: plain RGMII, interrupts off, strap-selected role
    pub const fn new() -> Self {
        Self {
            interface: PhyInterface::Rgmii,
            rx_internal_delay: None,
            tx_internal_delay: None,
            interrupts: InterruptMode::Disabled,
            master_slave: MasterSlaveConfig::Unsupported,
        }
    }

    /// Set the host interface
    #[must_use]
    pub const fn with_interface(mut self, interface: PhyInterface) -> Self {
        self.interface = interface;
        self
    }

    /// Override the RX internal delay (e.g. from `rx-internal-delay-ps`)
    #[must_use]
    pub const fn with_rx_internal_delay(mut self, enabled: bool) -> Self {
        self.rx_internal_delay = Some(enabled);
        self
    }

    /// Override the TX internal delay (e.g. from `tx-internal-delay-ps`)
    #[must_use]
    pub const fn with_tx_internal_delay(mut self, enabled: bool) -> Self {
        self.tx_internal_delay = Some(enabled);
        self
    }

    /// Set the interrupt policy
    #[must_use]
    pub const fn with_interrupts(mut self, interrupts: InterruptMode) -> Self {
        self.interrupts = interrupts;
        self
    }

    /// Set the master/slave request
    #[must_use]
    pub const fn with_master_slave(mut self, master_slave: MasterSlaveConfig) -> Self {
        self.master_slave = master_slave;
        self
    }

    /// Check the configuration for contradictions
    ///
    /// Enabling an internal clock delay only makes sense on an RGMII
    /// interface.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if !self.interface.is_rgmii()
            && (matches!(self.rx_internal_delay, Some(true)) || matches!(self.tx_internal_delay, Some(true)))
        {
            return Err(ConfigError::InvalidConfig);
        }
        Ok(())
    }

    /// Effective RX internal delay
    pub const fn rx_delay_enabled(&self) -> bool {
        match self.rx_internal_delay {
            Some(enabled) => enabled,
            None => self.interface.rx_internal_delay(),
        }
    }

    /// Effective TX internal delay
    pub const fn tx_delay_enabled(&self) -> bool {
        match self.tx_internal_delay {
            Some(enabled) => enabled,
            None => self.interface.tx_internal_delay(),
        }
    }
}
