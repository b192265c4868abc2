pub mod like;
pub mod view;

pub use like::{Like, NewLike};
pub use view::{NewView, View};
