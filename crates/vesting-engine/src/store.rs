//! Persisted record store abstraction.
//!
//! The engine never owns record storage; the host injects an
//! implementation and serializes operations that touch the same records.

use std::collections::BTreeMap;

use crate::address::Address;
use crate::error::{Result, VestingError};

/// Keyed store mapping a derived address to opaque record bytes.
pub trait RecordStore {
    fn read(&self, address: &Address) -> Option<Vec<u8>>;

    fn write(&mut self, address: Address, record: &[u8]);

    fn contains(&self, address: &Address) -> bool {
        self.read(address).is_some()
    }
}

/// Decode the record at `address` as a fixed-size `T`.
pub(crate) fn read_record<T: bytemuck::Pod>(
    store: &dyn RecordStore,
    address: &Address,
) -> Result<T> {
    let bytes = store.read(address).ok_or(VestingError::RecordNotFound)?;
    bytemuck::try_pod_read_unaligned(&bytes).map_err(|_| VestingError::CorruptedRecord)
}

pub(crate) fn write_record<T: bytemuck::Pod>(
    store: &mut dyn RecordStore,
    address: Address,
    record: &T,
) {
    store.write(address, bytemuck::bytes_of(record));
}

/// In-memory reference implementation.
#[derive(Default, Debug, Clone)]
pub struct MemoryRecordStore {
    records: BTreeMap<Address, Vec<u8>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryRecordStore {
    fn read(&self, address: &Address) -> Option<Vec<u8>> {
        self.records.get(address).cloned()
    }

    fn write(&mut self, address: Address, record: &[u8]) {
        self.records.insert(address, record.to_vec());
    }

    fn contains(&self, address: &Address) -> bool {
        self.records.contains_key(address)
    }
}
