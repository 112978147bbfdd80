//! Storage key definitions for the student registry contract.

use soroban_sdk::{contracttype, Address};

/// Persistent storage keys used by the contract.
#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    /// Maps a student's account address to their encoded record string.
    /// One address holds at most one record.
    Student(Address),
}

/// Time-to-live for student records in ledger entries.
pub const RECORD_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const RECORD_TTL_EXTEND: u32 = 2592000; // ~150 days
