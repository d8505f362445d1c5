//! Command implementations for simplevec-cmd

pub mod demo;
pub mod growth;
pub mod workload;
