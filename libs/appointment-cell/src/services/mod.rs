pub mod seed;
pub mod storage;
pub mod store;

pub use seed::seed_appointments;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::AppointmentStore;
