pub mod notification;
pub mod postulation;
pub mod profile;
