pub mod log_store;
pub mod serialization;
pub mod session;
pub mod store;
pub mod traits;

pub use log_store::LogStore;
pub use serialization::JsonSerializer;
pub use session::LogbookSession;
pub use store::*;
pub use traits::*;
