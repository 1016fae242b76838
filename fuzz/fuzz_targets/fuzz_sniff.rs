#![no_main]

use libfuzzer_sys::fuzz_target;

use pictor_core::{detect_dimensions, detect_format, resolve_mime};

fuzz_target!(|data: &[u8]| {
    let format = detect_format(data);
    let _ = detect_dimensions(data);
    let _ = resolve_mime(None, format);
});
