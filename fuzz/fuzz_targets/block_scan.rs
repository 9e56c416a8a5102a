#![no_main]

use layout::{parse_header, BlockKind, BlockScanner, GraphicControl, GRAPHIC_CONTROL_LABEL};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(header) = parse_header(data) else {
        return;
    };
    let mut end = header.body_offset;
    for block in BlockScanner::new(data, header.body_offset) {
        let Ok(block) = block else {
            break;
        };
        // blocks are contiguous and in bounds
        assert_eq!(block.offset, end);
        end = block.offset + block.bytes.len();
        assert!(end <= data.len());

        match block.kind {
            BlockKind::Extension {
                label: GRAPHIC_CONTROL_LABEL,
            } => {
                let _ = GraphicControl::parse(block.bytes);
            }
            BlockKind::Extension { .. } => {
                let _ = block.is_loop_extension();
            }
            BlockKind::Image => {
                let _ = block.image_data();
            }
            BlockKind::Trailer => {}
        }
    }
});
