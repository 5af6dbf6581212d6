use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, util::multipart::models::multipart_form::MultipartForm},
    images::{enums::response_format::ResponseFormat, errors::ImagesApiError},
};

use super::generate_images_dto::{default_number, DEFAULT_MODEL, DEFAULT_SIZE, SIZE_REGEX};

#[derive(Debug, Clone, Validate)]
pub struct CreateVariationDto {
    pub model: String,
    #[validate(regex(path = "SIZE_REGEX", message = "size must be formatted as WIDTHxHEIGHT."))]
    pub size: String,
    pub response_format: ResponseFormat,
    #[validate(range(min = 1, max = 10, message = "n must be between 1 and 10."))]
    pub n: u8,
    pub user: Option<String>,
}

impl CreateVariationDto {
    pub fn from_form(form: &MultipartForm) -> Result<Self, ApiError> {
        let response_format = match form.field("response_format") {
            Some(value) => match ResponseFormat::from_value(value.trim()) {
                Some(response_format) => response_format,
                None => return Err(ImagesApiError::InvalidResponseFormat.value()),
            },
            None => ResponseFormat::default(),
        };

        let n = match form.field("n") {
            Some(value) => match value.trim().parse::<u8>() {
                Ok(n) => n,
                Err(_) => return Err(ImagesApiError::InvalidNumber.value()),
            },
            None => default_number(),
        };

        Ok(Self {
            model: form.field("model").unwrap_or(DEFAULT_MODEL).trim().to_string(),
            size: form.field("size").unwrap_or(DEFAULT_SIZE).trim().to_string(),
            response_format,
            n,
            user: form.field("user").map(|s| s.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(fields: &[(&str, &str)]) -> MultipartForm {
        let mut form = MultipartForm::default();
        for (name, value) in fields {
            form.fields.insert(name.to_string(), value.to_string());
        }
        form
    }

    #[test]
    fn empty_form_takes_defaults() {
        let dto = CreateVariationDto::from_form(&form(&[])).unwrap();

        assert_eq!(dto.model, "dall-e-2");
        assert_eq!(dto.size, "1024x1024");
        assert_eq!(dto.response_format, ResponseFormat::Url);
        assert_eq!(dto.n, 1);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn fields_are_parsed() {
        let dto = CreateVariationDto::from_form(&form(&[
            ("size", "512x512"),
            ("response_format", "b64_json"),
            ("n", "4"),
            ("user", "someone"),
        ]))
        .unwrap();

        assert_eq!(dto.size, "512x512");
        assert_eq!(dto.response_format, ResponseFormat::B64Json);
        assert_eq!(dto.n, 4);
        assert_eq!(dto.user.as_deref(), Some("someone"));
    }

    #[test]
    fn bad_fields_are_rejected() {
        assert!(CreateVariationDto::from_form(&form(&[("n", "many")])).is_err());
        assert!(CreateVariationDto::from_form(&form(&[("response_format", "png")])).is_err());

        let dto = CreateVariationDto::from_form(&form(&[("n", "0")])).unwrap();
        assert!(dto.validate().is_err());
    }
}
