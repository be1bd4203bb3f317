use crate::api::*;
use crate::colorize::{colorize, PixelBuffer};
use crate::field::{synthesize, synthesize_par, NoiseField};
use crate::gradient::Palette;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Everything needed to produce one frame. Built fresh by the caller per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameRequest {
    pub size: FieldSize,
    pub params: NoiseParams,
    pub variant: NoiseVariant,
    pub palette: Palette,
    pub parallel: bool,
}

impl FrameRequest {
    pub fn new(size: FieldSize, params: NoiseParams) -> Self { Self { size, params, ..Self::default() } }
    pub fn with_params(self, params: NoiseParams) -> Self { Self { params, ..self } }

    pub fn synthesize<S: NoiseSource + ?Sized>(&self, source: &S) -> NoiseField {
        if self.parallel { synthesize_par(source, self.size, &self.params, self.variant) }
        else { synthesize(source, self.size, &self.params, self.variant) }
    }
}

/// Field synthesis followed by colorization through the request's palette.
///
/// Parameters are re-validated on every call; a non-finite frequency,
/// lacunarity or gain yields a flat frame in the gradient's first color.
pub fn synthesize_and_colorize<S: NoiseSource + ?Sized>(source: &S, request: &FrameRequest) -> PixelBuffer {
    let field = match request.params.validate() {
        Ok(()) => request.synthesize(source),
        Err(e) => {
            warn!("{e}, rendering flat frame");
            NoiseField::flat(request.size, 0.0)
        }
    };
    let gradient = request.palette.build();
    let pixels = colorize(&field, &gradient);
    info!("Rendered {}x{} frame ({:?}, {} octaves, range {:.4}..{:.4})",
        request.size.width, request.size.height, request.variant, request.params.octaves, field.min(), field.max());
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::{ConstantSource, SimplexSource, SourceKind};

    #[test]
    fn test_constant_frame_is_single_color() {
        let request = FrameRequest {
            size: FieldSize::new(2, 1),
            params: NoiseParams { frequency: 0.0, octaves: 1, ..NoiseParams::default() },
            ..FrameRequest::default()
        };
        let pixels = synthesize_and_colorize(&SimplexSource::new(4), &request);
        let c = request.palette.build().first();
        assert_eq!(pixels.as_bytes(), &[c.red, c.green, c.blue, 0, c.red, c.green, c.blue, 0]);
    }

    #[test]
    fn test_zero_octaves_frame_is_flat() {
        let request = FrameRequest::new(FieldSize::new(5, 4), NoiseParams { octaves: 0, ..NoiseParams::default() });
        let pixels = synthesize_and_colorize(&ConstantSource(3.0), &request);
        let first = pixels.pixel(0, 0);
        for y in 0..4 { for x in 0..5 {
            assert_eq!(pixels.pixel(x, y), first);
        }}
    }

    #[test]
    fn test_parallel_flag_does_not_change_output() {
        let source = SimplexSource::new(21);
        let request = FrameRequest::new(FieldSize::new(40, 30), NoiseParams::default());
        let sequential = synthesize_and_colorize(&source, &request);
        let parallel = synthesize_and_colorize(&source, &FrameRequest { parallel: true, ..request });
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_extreme_parameters_render_for_every_source() {
        let size = FieldSize::new(800, 1);
        let cases = [
            NoiseParams { octaves: 40, ..NoiseParams::default() },
            NoiseParams { octaves: 200, ..NoiseParams::default() },
            NoiseParams { frequency: 1e30, ..NoiseParams::default() },
            NoiseParams { lacunarity: 1e20, octaves: 6, ..NoiseParams::default() },
            NoiseParams { gain: -3.0, octaves: 12, ..NoiseParams::default() },
        ];
        for kind in [SourceKind::Simplex, SourceKind::Perlin] {
            let source = kind.build(1);
            for params in cases {
                for variant in [NoiseVariant::Fbm, NoiseVariant::Turbulence] {
                    let request = FrameRequest { size, params, variant, ..FrameRequest::default() };
                    let pixels = synthesize_and_colorize(&*source, &request);
                    assert_eq!(pixels.as_bytes().len(), 800 * 4, "{kind:?} {params:?}");
                }
            }
        }
    }

    #[test]
    fn test_non_finite_parameters_render_flat() {
        let size = FieldSize::new(16, 4);
        for kind in [SourceKind::Simplex, SourceKind::Perlin] {
            let source = kind.build(1);
            for params in [
                NoiseParams { frequency: f32::NAN, ..NoiseParams::default() },
                NoiseParams { frequency: f32::INFINITY, ..NoiseParams::default() },
                NoiseParams { lacunarity: f32::NEG_INFINITY, ..NoiseParams::default() },
                NoiseParams { gain: f32::NAN, ..NoiseParams::default() },
            ] {
                let request = FrameRequest::new(size, params);
                let pixels = synthesize_and_colorize(&*source, &request);
                let c = request.palette.build().first();
                assert!(pixels.as_bytes().chunks_exact(4).all(|px| px[..3] == [c.red, c.green, c.blue]), "{kind:?} {params:?}");
            }
        }
    }

    #[test]
    fn test_request_defaults_from_ron() {
        let request: FrameRequest = ron::from_str("(size: (width: 16, height: 8), variant: Turbulence)").unwrap();
        assert_eq!(request.size, FieldSize::new(16, 8));
        assert_eq!(request.variant, NoiseVariant::Turbulence);
        assert_eq!(request.params, NoiseParams::default());
        assert_eq!(request.palette, Palette::default());
        assert!(!request.parallel);
    }
}
