mod common;

use common::{
    frame_without_table, parse_output, static_frame, static_frame_with_control, table_bytes,
    BLACK, GREEN, MAGENTA, WHITE,
};
use encoder::{encode_animation, AnimationConfig, EncodeLimits, Rgb};
use layout::SIGNATURE_89A;
use proptest::prelude::*;

#[derive(Clone, Debug)]
struct FrameCase {
    palette: Option<Vec<[u8; 3]>>,
    with_control: bool,
    delay: u32,
}

impl FrameCase {
    fn bytes(&self) -> Vec<u8> {
        match (&self.palette, self.with_control) {
            (None, _) => frame_without_table(),
            (Some(palette), false) => static_frame(palette),
            (Some(palette), true) => static_frame_with_control(palette),
        }
    }
}

fn color_strategy() -> impl Strategy<Value = [u8; 3]> {
    // a small pool keeps palette collisions frequent
    prop::sample::select(vec![BLACK, WHITE, MAGENTA, GREEN])
}

fn palette_strategy() -> impl Strategy<Value = Vec<[u8; 3]>> {
    prop_oneof![
        prop::collection::vec(color_strategy(), 2),
        prop::collection::vec(color_strategy(), 4),
    ]
}

fn frame_strategy() -> impl Strategy<Value = FrameCase> {
    (
        prop::option::weighted(0.85, palette_strategy()),
        any::<bool>(),
        0u32..=65_535,
    )
        .prop_map(|(palette, with_control, delay)| FrameCase {
            palette,
            with_control,
            delay,
        })
}

proptest! {
    #[test]
    fn prop_encoded_structure(
        cases in prop::collection::vec(frame_strategy(), 1..8),
        loop_count in 0u16..4,
        transparent in prop::option::of(color_strategy()),
    ) {
        let frames: Vec<Vec<u8>> = cases.iter().map(FrameCase::bytes).collect();
        let mut config = AnimationConfig::new(cases.iter().map(|case| case.delay).collect())
            .with_loop_count(loop_count);
        if let Some(color) = transparent {
            config = config.with_transparent(Rgb::from(color));
        }

        let animation = encode_animation(&frames, &config, &EncodeLimits::for_testing()).unwrap();
        let bytes = animation.as_bytes();
        let parsed = parse_output(bytes);

        prop_assert_eq!(&bytes[..6], &SIGNATURE_89A[..]);
        prop_assert_eq!(parsed.end, bytes.len());
        prop_assert_eq!(parsed.frames.len(), cases.len());
        prop_assert_eq!(parsed.loop_count.is_some(), loop_count > 0);

        let global = cases[0].palette.as_deref().map(table_bytes);
        prop_assert_eq!(&parsed.global_table, &global);

        for (i, (case, frame)) in cases.iter().zip(&parsed.frames).enumerate() {
            prop_assert_eq!(u32::from(frame.control.delay), case.delay);

            let expected_index = match (&case.palette, transparent) {
                (Some(palette), Some(color)) => palette
                    .iter()
                    .position(|entry| *entry == color)
                    .map(|j| u8::try_from(j).unwrap()),
                _ => None,
            };
            prop_assert_eq!(frame.control.transparent_index, expected_index);

            let own = case.palette.as_deref().map(table_bytes);
            let expected_local = match own {
                Some(own) if i > 0 && global.as_ref() != Some(&own) => Some(own),
                _ => None,
            };
            prop_assert_eq!(&frame.local_table, &expected_local);
        }
    }

    #[test]
    fn prop_encoding_is_deterministic(cases in prop::collection::vec(frame_strategy(), 1..6)) {
        let frames: Vec<Vec<u8>> = cases.iter().map(FrameCase::bytes).collect();
        let config = AnimationConfig::new(cases.iter().map(|case| case.delay).collect())
            .with_transparent(Rgb::from(MAGENTA));
        let limits = EncodeLimits::for_testing();
        let first = encode_animation(&frames, &config, &limits).unwrap();
        let second = encode_animation(&frames, &config, &limits).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_arbitrary_input_never_panics(
        data in prop::collection::vec(any::<u8>(), 0..96),
        prefix in any::<bool>(),
    ) {
        let mut frame = if prefix { SIGNATURE_89A.to_vec() } else { Vec::new() };
        frame.extend_from_slice(&data);
        let _ = encode_animation(
            &[frame],
            &AnimationConfig::uniform(1, 1),
            &EncodeLimits::for_testing(),
        );
    }
}
