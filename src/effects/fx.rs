use crate::effects::{blur::render_gaussian_blur, convolve};
use crate::foundation::{
    core::RectI,
    error::{LithoError, LithoResult},
};
use crate::surface::buffer::Surface;

const DEFAULT_ANGLE_DEG: f64 = 45.0;
const DEFAULT_BLUR_RADIUS: u32 = 2;
const MAX_BLUR_RADIUS: u32 = 200;

/// A renderable effect variant. Every variant exposes the same capability:
/// write the destination ROIs from the source, with parameters baked in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    EdgeDetect { angle_rad: f64 },
    Relief { angle_rad: f64 },
    GaussianBlur { radius: u32 },
}

impl Effect {
    pub fn render(&self, src: &Surface, dst: &mut Surface, rois: &[RectI]) -> LithoResult<()> {
        match *self {
            // Edge detect and relief share the directional kernel; they
            // differ only in how the editor composes the result.
            Effect::EdgeDetect { angle_rad } | Effect::Relief { angle_rad } => {
                let weights = convolve::directional_weights(angle_rad);
                convolve::render_color_difference(&weights, src, dst, rois)
            }
            Effect::GaussianBlur { radius } => render_gaussian_blur(src, dst, rois, radius),
        }
    }
}

/// Resolves an effect from a `kind` string and a JSON params blob, applying
/// the editor's dialog defaults (45° angle, radius 2) when a parameter is
/// absent.
pub fn parse_effect(kind: &str, params: &serde_json::Value) -> LithoResult<Effect> {
    let kind = kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(LithoError::validation("effect kind must be non-empty"));
    }

    match kind.as_str() {
        "edgedetect" | "edge_detect" | "edge-detect" => Ok(Effect::EdgeDetect {
            angle_rad: parse_angle(params)?,
        }),
        "relief" => Ok(Effect::Relief {
            angle_rad: parse_angle(params)?,
        }),
        "gaussianblur" | "gaussian_blur" | "gaussian-blur" | "blur" => {
            let radius = match params.get("radius") {
                None => DEFAULT_BLUR_RADIUS,
                Some(v) => {
                    let n = v.as_u64().ok_or_else(|| {
                        LithoError::validation("GaussianBlur.radius must be an integer >= 0")
                    })?;
                    u32::try_from(n).map_err(|_| {
                        LithoError::validation("GaussianBlur.radius is out of range")
                    })?
                }
            };
            if radius > MAX_BLUR_RADIUS {
                return Err(LithoError::validation(format!(
                    "GaussianBlur.radius must be <= {MAX_BLUR_RADIUS}"
                )));
            }
            Ok(Effect::GaussianBlur { radius })
        }
        _ => Err(LithoError::validation(format!(
            "unknown effect kind '{kind}'"
        ))),
    }
}

fn parse_angle(params: &serde_json::Value) -> LithoResult<f64> {
    let angle_rad = match (params.get("angle_rad"), params.get("angle_deg")) {
        (Some(v), _) => v
            .as_f64()
            .ok_or_else(|| LithoError::validation("angle_rad must be a number"))?,
        (None, Some(v)) => v
            .as_f64()
            .ok_or_else(|| LithoError::validation("angle_deg must be a number"))?
            .to_radians(),
        (None, None) => DEFAULT_ANGLE_DEG.to_radians(),
    };
    if !angle_rad.is_finite() {
        return Err(LithoError::validation("effect angle must be finite"));
    }
    Ok(angle_rad)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/fx.rs"]
mod tests;
