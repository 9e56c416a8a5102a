//! Cross-checks encoder output against an independent GIF decoder.

mod common;

use common::{frame_without_table, static_frame, BLACK, GREEN, MAGENTA, WHITE};
use encoder::{encode_animation, AnimationConfig, DisposalMethod, EncodeLimits, Rgb};

const WIDTH: u16 = 4;
const HEIGHT: u16 = 4;

/// Renders a static GIF with a real LZW stream using the `gif` crate.
fn render(palette: &[u8], pixels: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut writer = gif::Encoder::new(&mut out, WIDTH, HEIGHT, palette).unwrap();
        let mut frame = gif::Frame::default();
        frame.width = WIDTH;
        frame.height = HEIGHT;
        frame.buffer = std::borrow::Cow::Borrowed(pixels);
        writer.write_frame(&frame).unwrap();
    }
    out
}

struct Decoded {
    global_palette: Option<Vec<u8>>,
    frames: Vec<DecodedFrame>,
}

struct DecodedFrame {
    delay: u16,
    dispose: gif::DisposalMethod,
    transparent: Option<u8>,
    palette: Option<Vec<u8>>,
    indices: Vec<u8>,
}

fn decode(bytes: &[u8]) -> Decoded {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(bytes).unwrap();
    let global_palette = decoder.global_palette().map(<[u8]>::to_vec);

    let mut frames = Vec::new();
    while let Some(frame) = decoder.read_next_frame().unwrap() {
        frames.push(DecodedFrame {
            delay: frame.delay,
            dispose: frame.dispose,
            transparent: frame.transparent,
            palette: frame.palette.clone(),
            indices: frame.buffer.to_vec(),
        });
    }
    Decoded {
        global_palette,
        frames,
    }
}

#[test]
fn decoder_sees_every_frame_with_its_timing() {
    let frames = vec![
        static_frame(&[BLACK, WHITE]),
        static_frame(&[BLACK, WHITE]),
        static_frame(&[MAGENTA, GREEN]),
    ];
    let config = AnimationConfig::new(vec![5, 50, 500]).with_transparent(Rgb::from(MAGENTA));
    let animation =
        encode_animation(&frames, &config, &EncodeLimits::for_testing()).unwrap();
    let decoded = decode(animation.as_bytes());

    assert_eq!(decoded.frames.len(), 3);
    let delays: Vec<_> = decoded.frames.iter().map(|frame| frame.delay).collect();
    assert_eq!(delays, vec![5, 50, 500]);
    assert!(decoded
        .frames
        .iter()
        .all(|frame| frame.dispose == gif::DisposalMethod::Background));
    let transparent: Vec<_> = decoded.frames.iter().map(|frame| frame.transparent).collect();
    assert_eq!(transparent, vec![None, None, Some(0)]);
}

#[test]
fn real_lzw_streams_survive_unchanged() {
    let palette = [0, 0, 0, 255, 255, 255, 255, 0, 255, 0, 128, 0];
    let first: Vec<u8> = (0..16).map(|i| i % 4).collect();
    let second: Vec<u8> = (0..16).map(|i| 3 - i % 4).collect();
    let other_palette = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120];

    let frames = vec![
        render(&palette, &first),
        render(&palette, &second),
        render(&other_palette, &first),
    ];
    let config = AnimationConfig::uniform(8, 3)
        .with_loop_count(1)
        .with_disposal(DisposalMethod::Keep);
    let animation = encode_animation(&frames, &config, &EncodeLimits::default()).unwrap();
    let decoded = decode(animation.as_bytes());

    assert_eq!(decoded.global_palette.as_deref(), Some(&palette[..]));
    assert_eq!(decoded.frames.len(), 3);
    assert_eq!(decoded.frames[0].indices, first);
    assert_eq!(decoded.frames[1].indices, second);
    assert_eq!(decoded.frames[2].indices, first);
    assert!(decoded.frames[1].palette.is_none());
    assert_eq!(decoded.frames[2].palette.as_deref(), Some(&other_palette[..]));
    assert!(decoded
        .frames
        .iter()
        .all(|frame| frame.dispose == gif::DisposalMethod::Keep));
}

#[test]
fn frames_without_a_table_decode_with_the_global_palette() {
    let frames = vec![static_frame(&[BLACK, WHITE]), frame_without_table()];
    let animation = encode_animation(
        &frames,
        &AnimationConfig::uniform(10, 2),
        &EncodeLimits::for_testing(),
    )
    .unwrap();
    let decoded = decode(animation.as_bytes());
    assert_eq!(decoded.frames.len(), 2);
    assert!(decoded.frames[1].palette.is_none());
    assert_eq!(decoded.frames[1].indices, vec![0]);
}
