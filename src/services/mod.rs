pub mod notification_service;
pub mod postulation_service;
pub mod profile_service;
pub mod seed_service;
pub mod upload_service;
