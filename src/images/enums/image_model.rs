use crate::images::models::backend_profile::BackendProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageModel {
    DallE1,
    DallE2,
    DallE3,
}

impl ImageModel {
    pub const ALL: [Self; 3] = [Self::DallE1, Self::DallE2, Self::DallE3];

    pub fn from_alias(alias: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|model| model.value() == alias)
    }

    pub fn value(&self) -> &'static str {
        match *self {
            Self::DallE1 => "dall-e-1",
            Self::DallE2 => "dall-e-2",
            Self::DallE3 => "dall-e-3",
        }
    }

    pub fn profile(&self) -> BackendProfile {
        match *self {
            Self::DallE1 => BackendProfile::SD15,
            Self::DallE2 => BackendProfile::SDXL_LIGHTNING,
            Self::DallE3 => BackendProfile::SDXL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_map_to_families() {
        assert_eq!(ImageModel::from_alias("dall-e-1"), Some(ImageModel::DallE1));
        assert_eq!(ImageModel::from_alias("dall-e-3"), Some(ImageModel::DallE3));
        assert_eq!(ImageModel::from_alias("gpt-image-1"), None);

        assert_eq!(ImageModel::DallE1.profile().native_scale, 512);
        assert_eq!(ImageModel::DallE2.profile().name, "sdxl_lightning");
        assert_eq!(ImageModel::DallE3.profile().name, "sdxl");
    }
}
