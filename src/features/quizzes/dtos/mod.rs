mod quiz_dto;

pub use quiz_dto::*;
