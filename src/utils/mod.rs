pub mod extract;
pub mod time;
