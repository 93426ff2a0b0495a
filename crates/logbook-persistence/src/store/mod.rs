pub mod atomic_writer;
pub mod json_file_backend;
pub mod memory_backend;

pub use atomic_writer::AtomicWriter;
pub use json_file_backend::{JsonEnvelope, JsonFileBackend};
pub use memory_backend::MemoryBackend;
