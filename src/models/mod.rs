mod message;
mod session;

pub use message::{Message, Part, Role, StoredEntry};
pub use session::Session;
