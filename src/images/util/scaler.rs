use serde_json::{json, Map, Value};

pub const SCALE_THRESHOLD: f64 = 0.2;

pub const PIXEL_ALIGNMENT: u32 = 8;

pub const LATENT_UPSCALE_RESIZE_MODE: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleStrategy {
    HighResFix,
    ResizeMode,
}

pub fn scale_factor(width: u32, height: u32, native_scale: u32) -> f64 {
    (f64::from(width) * f64::from(height)).sqrt() / f64::from(native_scale)
}

pub fn generation_size(width: u32, height: u32, native_scale: u32) -> Option<(u32, u32)> {
    let scale = scale_factor(width, height, native_scale);

    if (scale - 1.0).abs() < SCALE_THRESHOLD {
        return None;
    }

    Some((align(width, scale), align(height, scale)))
}

fn align(side: u32, scale: f64) -> u32 {
    let unit = f64::from(PIXEL_ALIGNMENT);
    let units = (f64::from(side) / (scale * unit)).round() as u32;

    PIXEL_ALIGNMENT * units.max(1)
}

pub fn apply(
    payload: &mut Map<String, Value>,
    width: u32,
    height: u32,
    native_scale: u32,
    strategy: ScaleStrategy,
) -> bool {
    let Some((gen_width, gen_height)) = generation_size(width, height, native_scale) else {
        return false;
    };

    tracing::debug!(
        "scaling {}x{} to {}x{} ({:?})",
        width,
        height,
        gen_width,
        gen_height,
        strategy
    );

    payload.insert("width".to_string(), json!(gen_width));
    payload.insert("height".to_string(), json!(gen_height));

    match strategy {
        ScaleStrategy::HighResFix => {
            payload.insert("enable_hr".to_string(), json!(true));
            payload.insert("hr_resize_x".to_string(), json!(width));
            payload.insert("hr_resize_y".to_string(), json!(height));
        }
        ScaleStrategy::ResizeMode => {
            payload.insert("resize_mode".to_string(), json!(LATENT_UPSCALE_RESIZE_MODE));
        }
    }

    true
}
