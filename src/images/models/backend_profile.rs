use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy)]
pub struct BackendProfile {
    pub name: &'static str,
    pub native_scale: u32,
    pub defaults_file: &'static str,
    pub fallback_defaults: fn() -> Map<String, Value>,
}

impl BackendProfile {
    pub const SD15: Self = Self {
        name: "sd15",
        native_scale: 512,
        defaults_file: "default_sd15_conf.json",
        fallback_defaults: sd15_defaults,
    };

    pub const SDXL_LIGHTNING: Self = Self {
        name: "sdxl_lightning",
        native_scale: 1024,
        defaults_file: "default_sdxl_lightning_conf.json",
        fallback_defaults: sdxl_lightning_defaults,
    };

    pub const SDXL: Self = Self {
        name: "sdxl",
        native_scale: 1024,
        defaults_file: "default_sdxl_conf.json",
        fallback_defaults: sdxl_defaults,
    };
}

fn into_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn sd15_defaults() -> Map<String, Value> {
    into_map(json!({
        "sampler_name": "DPM++ 2M Karras",
        "steps": 30,
        "cfg_scale": 7,
        "hr_upscaler": "Latent",
        "hr_second_pass_steps": 15,
        "denoising_strength": 0.6,
    }))
}

fn sdxl_lightning_defaults() -> Map<String, Value> {
    into_map(json!({
        "sampler_name": "DPM++ SDE",
        "steps": 4,
        "cfg_scale": 1,
        "hr_upscaler": "Latent",
        "hr_second_pass_steps": 4,
        "denoising_strength": 0.6,
    }))
}

fn sdxl_defaults() -> Map<String, Value> {
    into_map(json!({
        "sampler_name": "DPM++ 2M Karras",
        "steps": 30,
        "cfg_scale": 7,
        "refiner_checkpoint": "sd_xl_refiner_1.0",
        "refiner_switch_at": 0.8,
        "hr_upscaler": "Latent",
        "hr_second_pass_steps": 15,
        "denoising_strength": 0.6,
    }))
}
