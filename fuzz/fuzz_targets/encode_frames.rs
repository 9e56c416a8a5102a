#![no_main]

use encoder::{encode_animation, AnimationConfig, DelayOverflow, EncodeLimits, Rgb};
use layout::{parse_header, BlockScanner, HEADER_SIZE};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First bytes drive the config, the rest is split into frames.
    if data.len() < 5 {
        return;
    }
    let (control, rest) = data.split_at(5);
    let transparent = Rgb::new(control[0], control[1], control[2]);
    let loop_count = u16::from(control[3]);
    let split = usize::from(control[4]).min(rest.len());
    let frames = [&rest[..split], &rest[split..]];

    let mut config = AnimationConfig::new(vec![u32::from(control[4]) * 300; 2])
        .with_loop_count(loop_count)
        .with_transparent(transparent);
    if control[3] & 1 == 1 {
        config = config.with_delay_overflow(DelayOverflow::Clamp);
    }

    let Ok(animation) = encode_animation(&frames, &config, &EncodeLimits::for_testing()) else {
        return;
    };
    let bytes = animation.as_bytes();
    assert_eq!(&bytes[..6], b"GIF89a");
    assert_eq!(bytes.last(), Some(&0x3B));

    // output must scan cleanly back to its trailer
    let header = parse_header(bytes).expect("encoded header parses");
    assert!(header.body_offset >= HEADER_SIZE);
    for block in BlockScanner::new(bytes, header.body_offset) {
        assert!(block.is_ok());
    }
});
