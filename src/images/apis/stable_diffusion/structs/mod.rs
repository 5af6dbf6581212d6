pub mod sd_images_response;
