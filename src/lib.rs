//! Payroll Component Configuration and Assignment Engine
//!
//! This crate manages the definitions of payroll components (earnings,
//! deductions and allowances), validates their configuration invariants,
//! and resolves per-employee overrides into the effective values that are
//! fed to payroll processing.

#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod export;
pub mod lifecycle;
pub mod models;
pub mod resolution;
pub mod store;
pub mod validation;
