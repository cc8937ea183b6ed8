//! Sequential and parallel codecs must be byte-for-byte interchangeable.

#![cfg(feature = "parallel")]

use huffpack_codec::{PARALLEL_THRESHOLD, decode, decode_parallel, encode, encode_parallel};

fn mixed_input(len: usize) -> Vec<u8> {
    let phrase = b"pack my box with five dozen liquor jugs. ";
    (0..len)
        .map(|i| {
            if i % 97 == 0 {
                (i / 97) as u8
            } else {
                phrase[i % phrase.len()]
            }
        })
        .collect()
}

#[test]
fn test_containers_are_identical_above_threshold() {
    let input = mixed_input(PARALLEL_THRESHOLD + 777);
    assert_eq!(encode_parallel(&input).unwrap(), encode(&input).unwrap());
}

#[test]
fn test_cross_decoding() {
    let input = mixed_input(PARALLEL_THRESHOLD + 777);
    let container = encode_parallel(&input).unwrap();
    assert_eq!(decode(&container).unwrap(), input);
    assert_eq!(decode_parallel(&container).unwrap(), input);

    let container = encode(&input[..1024]).unwrap();
    assert_eq!(decode_parallel(&container).unwrap(), &input[..1024]);
}
