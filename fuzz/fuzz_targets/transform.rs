#![no_main]
use libfuzzer_sys::fuzz_target;
use vd2svg::{transform, TransformOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = transform(s, &TransformOptions::default());
        if let Ok(svg) = transform(s, &TransformOptions::new().pretty(true)) {
            // pretty output must itself be well-formed
            assert!(vd2svg::from_xml_str(&svg).is_ok());
        }
    }
});
