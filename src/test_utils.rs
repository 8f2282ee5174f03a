//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the PHY driver
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::vec::Vec;

use crate::error::{BusError, Result};
use crate::hal::mdio::{MdioBus, check_c22_address};
use crate::internal::phy_regs::dp83tc81x::{reg, strap};
use crate::internal::phy_regs::standard::{mmd, phy_reg};
use crate::phy::cable_test::{CablePair, CableTestCode, CableTestReporter};

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// One bus transaction, in issue order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read { phy: u8, reg: u8 },
    Write { phy: u8, reg: u8, value: u16 },
    ReadMmd { phy: u8, mmd: u8, reg: u16 },
    WriteMmd { phy: u8, mmd: u8, reg: u16, value: u16 },
}

/// Mock MDIO bus with native Clause 45 access
///
/// Clause 22 and MMD registers are kept in separate maps. Unset registers
/// read as zero. Every transaction is logged in order, and individual
/// registers can be made to fail with [`BusError::Timeout`].
///
/// # Example
///
/// ```ignore
/// let mut mdio = MockMdioBus::new();
/// mdio.set_mmd_register(0, 0x1F, 0x001E, 0x0002); // TDR done
///
/// let phy = Dp83tc81x::probe(0, DP83TC812_PHY_ID, config, &mut mdio, &mut delay)?;
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Clause 22 values: (phy_addr, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u8), u16>>,
    /// MMD values: (phy_addr, mmd, reg_addr) -> value
    mmd_registers: RefCell<HashMap<(u8, u8, u16), u16>>,
    /// Every transaction in issue order
    log: RefCell<Vec<Access>>,
    /// Clause 22 registers that fail on read
    failing_reads: RefCell<HashSet<(u8, u8)>>,
    /// Clause 22 registers that fail on write
    failing_writes: RefCell<HashSet<(u8, u8)>>,
    /// MMD registers that fail on read
    failing_mmd_reads: RefCell<HashSet<(u8, u8, u16)>>,
    /// MMD registers that fail on write
    failing_mmd_writes: RefCell<HashSet<(u8, u8, u16)>>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a Clause 22 register value
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.registers.borrow_mut().insert((phy_addr, reg_addr), value);
    }

    /// Get the current value of a Clause 22 register
    pub fn get_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.registers.borrow().get(&(phy_addr, reg_addr)).copied()
    }

    /// Set an MMD register value
    pub fn set_mmd_register(&self, phy_addr: u8, mmd: u8, reg_addr: u16, value: u16) {
        self.mmd_registers.borrow_mut().insert((phy_addr, mmd, reg_addr), value);
    }

    /// Get the current value of an MMD register
    pub fn get_mmd_register(&self, phy_addr: u8, mmd: u8, reg_addr: u16) -> Option<u16> {
        self.mmd_registers.borrow().get(&(phy_addr, mmd, reg_addr)).copied()
    }

    /// Full transaction log
    pub fn log(&self) -> Vec<Access> {
        self.log.borrow().clone()
    }

    /// Clause 22 writes: (phy_addr, reg_addr, value)
    pub fn get_writes(&self) -> Vec<(u8, u8, u16)> {
        self.log
            .borrow()
            .iter()
            .filter_map(|a| match *a {
                Access::Write { phy, reg, value } => Some((phy, reg, value)),
                _ => None,
            })
            .collect()
    }

    /// MMD writes: (phy_addr, mmd, reg_addr, value)
    pub fn get_mmd_writes(&self) -> Vec<(u8, u8, u16, u16)> {
        self.log
            .borrow()
            .iter()
            .filter_map(|a| match *a {
                Access::WriteMmd { phy, mmd, reg, value } => Some((phy, mmd, reg, value)),
                _ => None,
            })
            .collect()
    }

    /// MMD reads: (phy_addr, mmd, reg_addr)
    pub fn get_mmd_reads(&self) -> Vec<(u8, u8, u16)> {
        self.log
            .borrow()
            .iter()
            .filter_map(|a| match *a {
                Access::ReadMmd { phy, mmd, reg } => Some((phy, mmd, reg)),
                _ => None,
            })
            .collect()
    }

    /// Whether an MMD register was read at all
    pub fn was_mmd_read(&self, phy_addr: u8, mmd: u8, reg_addr: u16) -> bool {
        self.get_mmd_reads().contains(&(phy_addr, mmd, reg_addr))
    }

    /// Clear the transaction log
    pub fn clear_log(&self) {
        self.log.borrow_mut().clear();
    }

    /// Make reads of a Clause 22 register fail
    pub fn fail_read(&self, phy_addr: u8, reg_addr: u8) {
        self.failing_reads.borrow_mut().insert((phy_addr, reg_addr));
    }

    /// Make writes of a Clause 22 register fail
    pub fn fail_write(&self, phy_addr: u8, reg_addr: u8) {
        self.failing_writes.borrow_mut().insert((phy_addr, reg_addr));
    }

    /// Make reads of an MMD register fail
    pub fn fail_mmd_read(&self, phy_addr: u8, mmd: u8, reg_addr: u16) {
        self.failing_mmd_reads.borrow_mut().insert((phy_addr, mmd, reg_addr));
    }

    /// Make writes of an MMD register fail
    pub fn fail_mmd_write(&self, phy_addr: u8, mmd: u8, reg_addr: u16) {
        self.failing_mmd_writes.borrow_mut().insert((phy_addr, mmd, reg_addr));
    }

    /// Set up PHY id and strap registers for a DP83TC81x
    pub fn setup_dp83tc81x(&self, phy_addr: u8, phy_id: u32, master: bool, rgmii: bool) {
        self.set_register(phy_addr, phy_reg::PHYIDR1, (phy_id >> 16) as u16);
        self.set_register(phy_addr, phy_reg::PHYIDR2, phy_id as u16);

        let mut straps = 0;
        if master {
            straps |= strap::MASTER_MODE;
        }
        if rgmii {
            straps |= strap::RGMII_IS_EN;
        }
        self.set_mmd_register(phy_addr, mmd::VEND2, reg::STRAP, straps);
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        self.log.borrow_mut().push(Access::Read { phy: phy_addr, reg: reg_addr });
        check_c22_address(phy_addr, reg_addr)?;
        if self.failing_reads.borrow().contains(&(phy_addr, reg_addr)) {
            return Err(BusError::Timeout.into());
        }
        Ok(self.get_register(phy_addr, reg_addr).unwrap_or(0))
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        self.log.borrow_mut().push(Access::Write {
            phy: phy_addr,
            reg: reg_addr,
            value,
        });
        check_c22_address(phy_addr, reg_addr)?;
        if self.failing_writes.borrow().contains(&(phy_addr, reg_addr)) {
            return Err(BusError::Timeout.into());
        }
        self.set_register(phy_addr, reg_addr, value);
        Ok(())
    }

    fn read_mmd(&mut self, phy_addr: u8, mmd: u8, reg_addr: u16) -> Result<u16> {
        self.log.borrow_mut().push(Access::ReadMmd {
            phy: phy_addr,
            mmd,
            reg: reg_addr,
        });
        if self.failing_mmd_reads.borrow().contains(&(phy_addr, mmd, reg_addr)) {
            return Err(BusError::Timeout.into());
        }
        Ok(self.get_mmd_register(phy_addr, mmd, reg_addr).unwrap_or(0))
    }

    fn write_mmd(&mut self, phy_addr: u8, mmd: u8, reg_addr: u16, value: u16) -> Result<()> {
        self.log.borrow_mut().push(Access::WriteMmd {
            phy: phy_addr,
            mmd,
            reg: reg_addr,
            value,
        });
        if self.failing_mmd_writes.borrow().contains(&(phy_addr, mmd, reg_addr)) {
            return Err(BusError::Timeout.into());
        }
        self.set_mmd_register(phy_addr, mmd, reg_addr, value);
        Ok(())
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: RefCell<u64>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        *self.total_ns.borrow()
    }

    /// Get total milliseconds that were "delayed"
    pub fn total_ms(&self) -> u64 {
        self.total_ns() / 1_000_000
    }

    /// Reset the delay counter
    pub fn reset(&self) {
        *self.total_ns.borrow_mut() = 0;
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += ns as u64;
    }
}

// =============================================================================
// Recording Reporter
// =============================================================================

/// One reporter callback, in call order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Result(CablePair, CableTestCode),
    FaultLength(CablePair, u32),
}

/// Cable test reporter that records every callback
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub calls: Vec<Report>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CableTestReporter for RecordingReporter {
    fn cable_test_result(&mut self, pair: CablePair, code: CableTestCode) {
        self.calls.push(Report::Result(pair, code));
    }

    fn cable_test_fault_length(&mut self, pair: CablePair, length_cm: u32) {
        self.calls.push(Report::FaultLength(pair, length_cm));
    }
}

// =============================================================================
// Test Assertions
// =============================================================================

/// Assert that an MMD register was written with a specific value
#[macro_export]
macro_rules! assert_mmd_written {
    ($mdio:expr, $phy:expr, $mmd:expr, $reg:expr, $value:expr) => {
        let writes = $mdio.get_mmd_writes();
        assert!(
            writes
                .iter()
                .any(|w| w.0 == $phy && w.1 == $mmd && w.2 == $reg && w.3 == $value),
            "Expected write to PHY {} MMD {:#x} reg {:#06x} with value 0x{:04X}, but got: {:?}",
            $phy,
            $mmd,
            $reg,
            $value,
            writes
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::vec;

    #[test]
    fn mock_mdio_c22_read_write() {
        let mut mdio = MockMdioBus::new();

        assert_eq!(mdio.read(0, 1).unwrap(), 0);

        mdio.set_register(0, 1, 0x1234);
        assert_eq!(mdio.read(0, 1).unwrap(), 0x1234);

        mdio.write(0, 1, 0x5678).unwrap();
        assert_eq!(mdio.read(0, 1).unwrap(), 0x5678);

        assert_eq!(mdio.get_writes(), vec![(0, 1, 0x5678)]);
    }

    #[test]
    fn mock_mdio_mmd_space_is_separate() {
        let mut mdio = MockMdioBus::new();

        mdio.write_mmd(0, 0x1F, 0x0001, 0xAAAA).unwrap();
        assert_eq!(mdio.read(0, 1).unwrap(), 0);
        assert_eq!(mdio.read_mmd(0, 0x1F, 0x0001).unwrap(), 0xAAAA);
        assert_eq!(mdio.read_mmd(0, 0x01, 0x0001).unwrap(), 0);

        assert_eq!(mdio.get_mmd_writes(), vec![(0, 0x1F, 0x0001, 0xAAAA)]);
        assert!(mdio.was_mmd_read(0, 0x01, 0x0001));
    }

    #[test]
    fn mock_mdio_fault_injection() {
        let mut mdio = MockMdioBus::new();
        mdio.fail_mmd_read(0, 0x1F, 0x001E);
        mdio.fail_write(0, 0x12);

        assert!(mdio.read_mmd(0, 0x1F, 0x001E).is_err());
        assert!(mdio.write(0, 0x12, 1).is_err());
        assert_eq!(mdio.get_register(0, 0x12), None);

        // Failed transactions are still logged
        assert_eq!(mdio.log().len(), 2);
    }

    #[test]
    fn mock_mdio_rejects_out_of_range_c22_address() {
        let mut mdio = MockMdioBus::new();

        assert_eq!(mdio.read(0, 32), Err(Error::Bus(BusError::InvalidAddress)));
        assert_eq!(mdio.write(32, 0, 1), Err(Error::Bus(BusError::InvalidAddress)));
        assert_eq!(mdio.get_register(32, 0), None);
    }

    #[test]
    fn mock_delay_tracking() {
        let mut delay = MockDelay::new();

        embedded_hal::delay::DelayNs::delay_ns(&mut delay, 1000);
        embedded_hal::delay::DelayNs::delay_ms(&mut delay, 100);

        assert_eq!(delay.total_ms(), 100);
        delay.reset();
        assert_eq!(delay.total_ns(), 0);
    }

    #[test]
    fn mock_setup_dp83tc81x() {
        let mut mdio = MockMdioBus::new();
        mdio.setup_dp83tc81x(2, 0x2000_A271, true, false);

        assert_eq!(mdio.read(2, phy_reg::PHYIDR1).unwrap(), 0x2000);
        assert_eq!(mdio.read(2, phy_reg::PHYIDR2).unwrap(), 0xA271);
        assert_eq!(
            mdio.read_mmd(2, mmd::VEND2, reg::STRAP).unwrap(),
            strap::MASTER_MODE
        );
    }
}
