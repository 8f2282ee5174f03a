//! MDIO (Management Data Input/Output) HAL
//!
//! This module defines the register transport the PHY driver talks through.
//! The transport itself belongs to the host: an SoC MDIO controller, a
//! bit-banged bus, or an OS PHY framework. The driver only needs the
//! [`MdioBus`] trait.
//!
//! # Register Spaces
//!
//! The DP83TC81x keeps almost everything that matters in Clause 45 MMD
//! space (MMD 0x1F vendor registers and MMD 0x01 PMA/PMD), while interrupt
//! and basic status registers live in Clause 22 space. Transports that
//! only speak Clause 22 get MMD access for free through the default
//! [`MdioBus::read_mmd`]/[`MdioBus::write_mmd`] implementations, which use
//! the indirect MMD access registers (13 and 14) defined by IEEE 802.3
//! Clause 22.

use crate::error::{BusError, Error, Result};
use crate::internal::phy_regs::standard::{mmd_ctrl, phy_reg};

// =============================================================================
// MDIO Constants
// =============================================================================

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

/// Maximum valid Clause 22 register address (5-bit field)
pub const MAX_REG_ADDR: u8 = 31;

/// Maximum valid MMD device address (5-bit field)
pub const MAX_MMD: u8 = 31;

/// Check a Clause 22 PHY/register address pair against the 5-bit fields
///
/// Transports without their own range checks can call this before issuing
/// a frame.
pub const fn check_c22_address(phy_addr: u8, reg_addr: u8) -> Result<()> {
    if phy_addr > MAX_PHY_ADDR || reg_addr > MAX_REG_ADDR {
        return Err(Error::Bus(BusError::InvalidAddress));
    }
    Ok(())
}

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// Implementations must serialize accesses for a given PHY; the driver
/// issues one access at a time and never from more than one context, which
/// `&mut self` already guarantees on the driver side.
///
/// Errors are returned verbatim to the caller of the driver operation that
/// issued the access. No retries are attempted anywhere in the driver.
pub trait MdioBus {
    /// Read a Clause 22 PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a Clause 22 PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;

    /// Read a register in an MMD (Clause 45 address space)
    ///
    /// The default implementation performs an indirect access through
    /// registers 13/14. Override it if the transport can issue native
    /// Clause 45 frames.
    fn read_mmd(&mut self, phy_addr: u8, mmd: u8, reg_addr: u16) -> Result<u16> {
        select_mmd_register(self, phy_addr, mmd, reg_addr)?;
        self.read(phy_addr, phy_reg::MMD_DATA)
    }

    /// Write a register in an MMD (Clause 45 address space)
    ///
    /// See [`read_mmd`](Self::read_mmd) for the default access method.
    fn write_mmd(&mut self, phy_addr: u8, mmd: u8, reg_addr: u16, value: u16) -> Result<()> {
        select_mmd_register(self, phy_addr, mmd, reg_addr)?;
        self.write(phy_addr, phy_reg::MMD_DATA, value)
    }
}

impl<M: MdioBus + ?Sized> MdioBus for &mut M {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        (**self).read(phy_addr, reg_addr)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        (**self).write(phy_addr, reg_addr, value)
    }

    fn read_mmd(&mut self, phy_addr: u8, mmd: u8, reg_addr: u16) -> Result<u16> {
        (**self).read_mmd(phy_addr, mmd, reg_addr)
    }

    fn write_mmd(&mut self, phy_addr: u8, mmd: u8, reg_addr: u16, value: u16) -> Result<()> {
        (**self).write_mmd(phy_addr, mmd, reg_addr, value)
    }
}

/// Point the indirect MMD data register at `mmd`/`reg_addr`
///
/// Leaves MMD_CTRL in data/no-post-increment mode so the next access to
/// MMD_DATA hits the selected register.
fn select_mmd_register<M: MdioBus + ?Sized>(
    mdio: &mut M,
    phy_addr: u8,
    mmd: u8,
    reg_addr: u16,
) -> Result<()> {
    if phy_addr > MAX_PHY_ADDR || mmd > MAX_MMD {
        return Err(BusError::InvalidAddress.into());
    }

    let devad = mmd as u16 & mmd_ctrl::DEVAD_MASK;
    mdio.write(phy_addr, phy_reg::MMD_CTRL, mmd_ctrl::FUNC_ADDRESS | devad)?;
    mdio.write(phy_addr, phy_reg::MMD_DATA, reg_addr)?;
    mdio.write(phy_addr, phy_reg::MMD_CTRL, mmd_ctrl::FUNC_DATA | devad)
}

// =============================================================================
// Read-Modify-Write Helpers
// =============================================================================

/// Read-modify-write a Clause 22 register
///
/// Clears `mask`, sets `set`, and writes back only if the value changed.
/// Returns `true` when a write was issued.
pub fn modify<M: MdioBus>(mdio: &mut M, phy_addr: u8, reg_addr: u8, mask: u16, set: u16) -> Result<bool> {
    let old = mdio.read(phy_addr, reg_addr)?;
    let new = (old & !mask) | set;
    if new == old {
        return Ok(false);
    }
    mdio.write(phy_addr, reg_addr, new)?;
    Ok(true)
}

/// Read-modify-write an MMD register
///
/// Clears `mask`, sets `set`, and writes back only if the value changed.
/// Returns `true` when a write was issued.
pub fn modify_mmd<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
    mmd: u8,
    reg_addr: u16,
    mask: u16,
    set: u16,
) -> Result<bool> {
    let old = mdio.read_mmd(phy_addr, mmd, reg_addr)?;
    let new = (old & !mask) | set;
    if new == old {
        return Ok(false);
    }
    mdio.write_mmd(phy_addr, mmd, reg_addr, new)?;
    Ok(true)
}

/// Set bits in an MMD register
pub fn set_bits_mmd<M: MdioBus>(mdio: &mut M, phy_addr: u8, mmd: u8, reg_addr: u16, bits: u16) -> Result<()> {
    modify_mmd(mdio, phy_addr, mmd, reg_addr, 0, bits).map(|_| ())
}

/// Clear bits in an MMD register
pub fn clear_bits_mmd<M: MdioBus>(mdio: &mut M, phy_addr: u8, mmd: u8, reg_addr: u16, bits: u16) -> Result<()> {
    modify_mmd(mdio, phy_addr, mmd, reg_addr, bits, 0).map(|_| ())
}

// =============================================================================
// Unit Tests
// =============================================================================
