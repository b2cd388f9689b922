#![no_main]

use std::io::Read;

use csv2tsv::DecodingReader;
use encoding_rs::SHIFT_JIS;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // data[0] picks the internal buffer size (1..=256).
    let buf_size = usize::from(data[0]) + 1;
    let payload = &data[1..];

    let mut streamed = String::new();
    DecodingReader::new(payload, SHIFT_JIS, buf_size)
        .read_to_string(&mut streamed)
        .expect("decoding reader must always yield UTF-8");

    let (whole, _) = SHIFT_JIS.decode_without_bom_handling(payload);
    assert_eq!(streamed, whole, "streamed decode differs from one-shot decode");
});
