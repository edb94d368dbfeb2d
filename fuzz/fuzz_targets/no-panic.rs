//! decoding arbitrary bytes must never panic, on any model, and decoding into a pre-existing
//! instruction must match decoding into a fresh one.

#![no_main]
use libfuzzer_sys::fuzz_target;

use yaxpeax_arch::Decoder;

fuzz_target!(|data: &[u8]| {

    let decoders = [
        yaxpeax_8086::InstDecoder::i8086(),
        yaxpeax_8086::InstDecoder::i80186(),
        yaxpeax_8086::InstDecoder::i80286(),
        yaxpeax_8086::InstDecoder::i80386(),
    ];

    let mut reused_inst = yaxpeax_8086::Instruction::default();

    for decoder in decoders {
        let mut words = yaxpeax_arch::U8Reader::new(data);
        // test decoding, may be ok or not, but should not panic
        if let Ok(()) = decoder.decode_into(&mut reused_inst, &mut words) {
            let mut words = yaxpeax_arch::U8Reader::new(data);
            let fresh_inst = decoder.decode(&mut words).expect("decoded before, can decode again");
            assert_eq!(reused_inst, fresh_inst);
        }
    }
});
