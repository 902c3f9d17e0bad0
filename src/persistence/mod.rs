pub mod rollover;
pub mod snapshot;
pub mod store;

pub use rollover::load_for_today;
pub use snapshot::{Snapshot, StoredShape, DATE_FORMAT, STORAGE_KEY};
pub use store::{
    atomic_write, ensure_data_dir, get_data_dir, init_local_dir, FileStore, MemoryStore, Store,
};
