// handlers/public/mod.rs - endpoints served without authentication
pub mod system;

pub use system::health;
pub use system::not_found;
pub use system::root;
