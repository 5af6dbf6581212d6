use crate::{app::models::api_error::ApiError, images::errors::ImagesApiError};

pub fn parse_size(size: &str) -> Result<(u32, u32), ApiError> {
    let Some((width, height)) = size.split_once('x') else {
        return Err(ImagesApiError::InvalidSize.value());
    };

    match (width.parse::<u32>(), height.parse::<u32>()) {
        (Ok(width), Ok(height)) if width > 0 && height > 0 => Ok((width, height)),
        _ => Err(ImagesApiError::InvalidSize.value()),
    }
}
