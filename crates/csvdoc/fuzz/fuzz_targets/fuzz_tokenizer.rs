//! Fuzz target for the escape-aware tokenizer.
//!
//! Checks that any encoded field splits back to the original value.

#![no_main]

use arbitrary::Arbitrary;
use csvdoc::codec::{encode_field, split_escaped};
use csvdoc::{CsvFormat, Value};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    value: String,
    delimiter: char,
    quote: char,
}

fuzz_target!(|input: Input| {
    let format = CsvFormat::default()
        .with_delimiter(input.delimiter)
        .with_quote(input.quote);
    if input.value.contains(['\r', '\n']) {
        return;
    }
    let Ok(encoded) = encode_field(&Value::from(input.value.as_str()), &format) else {
        assert!(split_escaped("", format.delimiter, format.quote).is_err());
        return;
    };

    let fields = split_escaped(&encoded, format.delimiter, format.quote).unwrap();
    assert_eq!(fields, vec![input.value]);
});
