#![no_main]
use libfuzzer_sys::fuzz_target;
use vd2svg::parse_android_resource;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(resources) = parse_android_resource(s) {
            for key in resources.keys() {
                assert!(key.starts_with('@'));
            }
        }
    }
});
