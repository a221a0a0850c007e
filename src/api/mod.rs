pub mod av;
pub mod av_dto;
pub mod fmp;
pub mod fmp_dto;
pub mod utils;
