pub mod like;
pub mod token;
pub mod view;
