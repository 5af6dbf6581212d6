use crate::{
    app::{
        models::api_error::ApiError, util::multipart::models::multipart_form::MultipartForm,
    },
    AppState,
};

use super::{
    apis::{
        openai::prompt_enhancer::PromptEnhancer,
        stable_diffusion::{enums::sd_api::SdApi, service::StableDiffusionApi},
    },
    dtos::{create_variation_dto::CreateVariationDto, generate_images_dto::GenerateImagesDto},
    enums::image_model::ImageModel,
    errors::ImagesApiError,
    models::images_response::ImagesResponse,
    util::{request_generator::RequestGenerator, size::parse_size},
};

pub const VARIATION_MODEL: ImageModel = ImageModel::DallE2;

pub async fn generate_images(
    dto: &GenerateImagesDto,
    state: &AppState,
) -> Result<ImagesResponse, ApiError> {
    let Some(model) = ImageModel::from_alias(&dto.model) else {
        return Err(ImagesApiError::UnknownModel.value());
    };
    let (width, height) = parse_size(&dto.size)?;

    if let Some(user) = &dto.user {
        tracing::debug!("generation requested by {}", user);
    }

    let settings = state.config.load_settings().await;

    let mut prompt = dto.prompt.clone();
    let mut revised_prompt = None;

    if settings.enhanced_prompt.enhances(model.value()) {
        let enhancer =
            PromptEnhancer::from_settings(state.client.clone(), &settings.enhanced_prompt, &state.envy);
        prompt = enhancer.enhance(&dto.prompt).await?;
        revised_prompt = Some(prompt.clone());
    }

    tracing::info!(
        "generating {} image(s) at {}x{} with {} ({})",
        dto.n,
        width,
        height,
        model.value(),
        model.profile().name
    );

    let generator = RequestGenerator::new(model.profile(), &state.config);
    let payload = generator.create_request(&prompt, width, height, dto.n).await;
    tracing::debug!("txt2img payload: {:?}", payload);

    let api = StableDiffusionApi::new(
        state.client.clone(),
        StableDiffusionApi::resolve_base_url(&state.envy, &settings),
    );
    let images = api.submit(&payload, SdApi::Txt2Img).await;

    Ok(ImagesResponse::from_images(
        images,
        dto.response_format,
        revised_prompt.as_deref(),
    ))
}

pub async fn create_variations(
    dto: &CreateVariationDto,
    form: &MultipartForm,
    state: &AppState,
) -> Result<ImagesResponse, ApiError> {
    let (width, height) = parse_size(&dto.size)?;

    let Some(image) = form.file("image") else {
        return Err(ImagesApiError::MissingImage.value());
    };

    if let Some(user) = &dto.user {
        tracing::debug!("variation requested by {}", user);
    }

    if dto.model != VARIATION_MODEL.value() {
        tracing::debug!(
            "variations requested with {}, using {}",
            dto.model,
            VARIATION_MODEL.value()
        );
    }

    tracing::info!(
        "creating {} variation(s) of {} ({}, {} bytes)",
        dto.n,
        image.file_name,
        image.id,
        image.data.len()
    );

    let generator = RequestGenerator::new(VARIATION_MODEL.profile(), &state.config);
    let payload = generator
        .create_variation(&image.data, width, height, dto.n)
        .await?;

    let settings = state.config.load_settings().await;
    let api = StableDiffusionApi::new(
        state.client.clone(),
        StableDiffusionApi::resolve_base_url(&state.envy, &settings),
    );
    let images = api.submit(&payload, SdApi::Img2Img).await;

    Ok(ImagesResponse::from_images(images, dto.response_format, None))
}

pub fn edit_images() -> ImagesResponse {
    ImagesResponse::empty()
}
