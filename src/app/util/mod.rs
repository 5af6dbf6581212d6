pub mod multipart;
pub mod time;
