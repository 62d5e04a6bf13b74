pub mod countdown;
pub mod messages;
pub mod render;
