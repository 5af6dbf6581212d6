pub mod create_variation_dto;
pub mod generate_images_dto;
