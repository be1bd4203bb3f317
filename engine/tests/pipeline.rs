use noise_field::*;

fn request(width: u32, height: u32, variant: NoiseVariant) -> FrameRequest {
    FrameRequest { size: FieldSize::new(width, height), variant, ..FrameRequest::default() }
}

#[test]
fn frame_has_rgba_layout_for_every_source() {
    for kind in [SourceKind::Simplex, SourceKind::Perlin] {
        let source = kind.build(1337);
        for variant in [NoiseVariant::Fbm, NoiseVariant::Turbulence] {
            let req = request(80, 60, variant);
            let pixels = synthesize_and_colorize(&*source, &req);
            assert_eq!(pixels.as_bytes().len(), 80 * 60 * 4);
            assert_eq!(pixels.stride(), 80 * 4);
            assert!(pixels.as_bytes().chunks_exact(4).all(|px| px[3] == 0));
        }
    }
}

#[test]
fn every_pixel_comes_from_the_gradient() {
    let source = SimplexSource::new(8);
    let req = request(64, 64, NoiseVariant::Turbulence);
    let gradient = req.palette.build();
    let pixels = synthesize_and_colorize(&source, &req);
    for px in pixels.as_bytes().chunks_exact(4) {
        let c = Color::new(px[0], px[1], px[2]);
        assert!(gradient.as_slice().contains(&c), "{c:?} not in gradient");
    }
}

#[test]
fn rescaled_field_spans_the_gradient() {
    // The minimum maps to index 0; the maximum lands on the top index up to rounding.
    let source = PerlinSource::new(2);
    let req = request(96, 72, NoiseVariant::Fbm);
    let field = req.synthesize(&source);
    assert!(!field.stats().is_degenerate());
    let gradient = Gradient::linear(Color::new(0, 0, 0), Color::new(255, 255, 255));
    let pixels = colorize(&field, &gradient);
    let reds: Vec<u8> = pixels.as_bytes().chunks_exact(4).map(|px| px[0]).collect();
    assert_eq!(reds.iter().min(), Some(&0));
    assert!(*reds.iter().max().unwrap() >= 253);
}

#[test]
fn tuning_session_drives_new_frames() {
    let source = SimplexSource::new(5);
    let base = request(32, 24, NoiseVariant::Fbm);
    let mut session = TuningSession::new(base.params);
    let first = synthesize_and_colorize(&source, &base);

    assert!(session.apply(TuneKey::Octaves));
    let second = synthesize_and_colorize(&source, &base.with_params(session.params()));
    assert_ne!(first, second);

    // Stepping back restores the original frame.
    session.apply(TuneKey::FlipDirection);
    session.apply(TuneKey::Octaves);
    assert_eq!(session.params(), base.params);
    assert_eq!(synthesize_and_colorize(&source, &base.with_params(session.params())), first);
}

#[test]
fn config_drives_the_pipeline() {
    let config = FieldConfig::from_ron_str("(frame: (size: (width: 20, height: 10), parallel: true), source: Perlin, seed: Some(4))").unwrap();
    let source = config.build_source();
    let a = synthesize_and_colorize(&*source, &config.frame);
    let b = synthesize_and_colorize(&PerlinSource::new(4), &FrameRequest { parallel: false, ..config.frame });
    assert_eq!(a, b);
}

#[test]
fn octave_key_held_past_forty_octaves_keeps_rendering() {
    let base = request(800, 2, NoiseVariant::Fbm);
    for kind in [SourceKind::Simplex, SourceKind::Perlin] {
        let source = kind.build(1);
        let mut session = TuningSession::new(base.params);
        for _ in 0..45 {
            session.apply(TuneKey::Octaves);
        }
        assert_eq!(session.params().octaves, 48);
        let pixels = synthesize_and_colorize(&*source, &base.with_params(session.params()));
        assert_eq!(pixels.as_bytes().len(), 800 * 2 * 4);
    }
}

#[test]
fn nan_frequency_gives_a_flat_frame() {
    let req = FrameRequest {
        params: NoiseParams { frequency: f32::NAN, ..NoiseParams::default() },
        ..request(40, 3, NoiseVariant::Turbulence)
    };
    for kind in [SourceKind::Simplex, SourceKind::Perlin] {
        let pixels = synthesize_and_colorize(&*kind.build(9), &req);
        let first = pixels.pixel(0, 0);
        assert!((0..3).all(|y| (0..40).all(|x| pixels.pixel(x, y) == first)));
    }
}
