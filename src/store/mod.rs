//! Credential storage
//!
//! Persists username/salt/digest records in an append-oriented flat file and
//! offers lookup, insert, and compaction over it.

pub mod file;
pub mod record;

pub use file::CredentialStore;
pub use record::CredentialRecord;
