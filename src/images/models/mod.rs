pub mod backend_profile;
pub mod images_response;
