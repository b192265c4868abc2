// handlers/protected/mod.rs - endpoints behind jwt_auth_middleware
//
// Route prefixes: /api/like, /api/view
// Handlers take the identity as an Option and answer 401 when it is absent.
pub mod like;
pub mod utils;
pub mod view;

// Re-export handler functions for use in routing
pub use like::create as like_create;
pub use like::list as like_list;
pub use like::remove as like_delete;

pub use view::create as view_create;
pub use view::list as view_list;
