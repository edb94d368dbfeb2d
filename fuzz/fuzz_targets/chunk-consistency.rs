//! feeding a stream decoder one byte at a time must produce exactly the instructions and counts
//! that feeding it the whole buffer does, for any input and any model.

#![no_main]
use libfuzzer_sys::fuzz_target;

use yaxpeax_8086::{DecodeOutcome, Instruction, Model, StreamDecoder};

fn drive(model: Model, bytes: &[u8], chunk: usize) -> Vec<(usize, Instruction)> {
    let mut decoder = StreamDecoder::new(model);
    let mut decoded = Vec::new();
    let mut pos = 0;
    let mut carried = 0;
    while pos < bytes.len() {
        let end = (pos + chunk).min(bytes.len());
        match decoder.decode(&bytes[pos..end]) {
            DecodeOutcome::Complete(inst, count) => {
                decoded.push((count, inst));
                pos += count - carried;
                carried = 0;
            }
            DecodeOutcome::NeedBytes(_) | DecodeOutcome::Pending => {
                carried += end - pos;
                pos = end;
            }
        }
    }
    decoded
}

fuzz_target!(|data: &[u8]| {
    for model in [
        Model::Intel8086,
        Model::Intel80186,
        Model::Intel80286,
        Model::Intel80386,
    ] {
        let whole = drive(model, data, data.len().max(1));
        let bytewise = drive(model, data, 1);
        assert_eq!(whole, bytewise);
    }
});
