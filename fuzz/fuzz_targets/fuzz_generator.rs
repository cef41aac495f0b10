#![no_main]

use arbitrary::Arbitrary;
use base64::engine::general_purpose::STANDARD;
use jsonloom::TreeGenerator;
use libfuzzer_sys::fuzz_target;

/// One write call, drawn unbiased from the whole generator surface.
#[derive(Arbitrary, Debug)]
enum Call {
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    FieldName(String),
    WriteString(String),
    WriteInt(i64),
    WriteUnsigned(u64),
    WriteWide(i128),
    WriteFloat(f64),
    WriteBoolean(bool),
    WriteNull,
    WriteBinary {
        data: Vec<u8>,
        offset: usize,
        len: usize,
    },
    WriteRaw(String),
    Flush,
    Root,
}

// Any call order must either apply cleanly or fail without touching the
// tree, and nothing here may panic.
fuzz_target!(|calls: Vec<Call>| {
    let mut g = TreeGenerator::new();
    for call in calls {
        let before = g.root().map(|root| format!("{root:?}"));
        let result = match &call {
            Call::StartObject => g.start_object(),
            Call::EndObject => g.end_object(),
            Call::StartArray => g.start_array(),
            Call::EndArray => g.end_array(),
            Call::FieldName(name) => g.field_name(name.clone()),
            Call::WriteString(text) => g.write_string(text.clone()),
            Call::WriteInt(n) => g.write_number(*n),
            Call::WriteUnsigned(n) => g.write_number(*n),
            Call::WriteWide(n) => g.write_number(*n),
            Call::WriteFloat(n) => g.write_number(*n),
            Call::WriteBoolean(flag) => g.write_boolean(*flag),
            Call::WriteNull => g.write_null(),
            Call::WriteBinary { data, offset, len } => {
                g.write_binary(&STANDARD, data, *offset, *len)
            }
            Call::WriteRaw(text) => g.write_raw(text),
            Call::Flush => {
                g.flush();
                Ok(())
            }
            Call::Root => {
                let _ = g.root();
                Ok(())
            }
        };
        if result.is_err() {
            let after = g.root().map(|root| format!("{root:?}"));
            assert_eq!(before, after);
        }
    }
});
