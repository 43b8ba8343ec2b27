pub mod db_dto;
pub mod notification_dto;
pub mod postulation_dto;
pub mod profile_dto;
pub mod upload_dto;
