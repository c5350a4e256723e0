//! Core Kernel - Foundational types for the SmartSave savings system
//!
//! This crate provides the building blocks shared by the savings domain:
//! - Money types with precise decimal arithmetic
//! - UTC calendar periods (day, Monday-start week, month, trailing window)
//! - Ledger identifiers
//! - The error type reported by port adapters

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod ports;

pub use money::{Money, Currency, Rate, MoneyError};
pub use temporal::{CalendarPeriod, TemporalError, month_abbreviation};
pub use identifiers::EntryId;
pub use ports::{PortError, DomainPort};
