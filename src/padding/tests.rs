use super::*;

#[test]
fn pad_fills_a_partial_block() {
    let padded = pad(b"helloworld", 16);
    assert_eq!(padded.len(), 16);
    assert_eq!(&padded[..10], b"helloworld");
    assert!(padded[10..].iter().all(|&b| b == 6));
}

#[test]
fn pad_adds_a_full_block_when_aligned() {
    let padded = pad(&[0xAA; 16], 16);
    assert_eq!(padded.len(), 32);
    assert!(padded[16..].iter().all(|&b| b == 16));

    let padded = pad(b"", 16);
    assert_eq!(padded, vec![16u8; 16]);
}

#[test]
fn pad_result_is_aligned_and_longer() {
    for block_size in [1usize, 2, 8, 16, 255] {
        for len in 0..40 {
            let data = vec![0x5Au8; len];
            let padded = pad(&data, block_size);
            assert_eq!(padded.len() % block_size, 0);
            assert!(padded.len() > data.len());
        }
    }
}

#[test]
fn unpad_inverts_pad() {
    for block_size in [1usize, 7, 16, 32] {
        for len in 0..50 {
            let data: Vec<u8> = (0..len as u8).collect();
            assert_eq!(unpad(&pad(&data, block_size)).unwrap(), &data[..]);
            assert_eq!(
                unpad_strict(&pad(&data, block_size), block_size).unwrap(),
                &data[..]
            );
        }
    }
}

#[test]
fn unpad_rejects_oversized_pad_byte() {
    // Last byte claims more padding than the buffer holds.
    let bogus = [1u8, 2, 3, 200];
    assert!(matches!(unpad(&bogus), Err(Error::Padding)));
}

#[test]
fn unpad_rejects_empty_input() {
    assert!(matches!(unpad(&[]), Err(Error::Padding)));
    assert!(matches!(unpad_strict(&[], 16), Err(Error::Padding)));
}

#[test]
fn lenient_unpad_ignores_inconsistent_pad_bytes() {
    // The length byte says 3, but the other two pad bytes disagree.
    let mut padded = pad(b"abcdefghijklm", 16);
    padded[13] = 0x11;
    padded[14] = 0x22;
    assert_eq!(unpad(&padded).unwrap(), b"abcdefghijklm");
}

#[test]
fn strict_unpad_rejects_inconsistent_pad_bytes() {
    let mut padded = pad(b"abcdefghijklm", 16);
    padded[13] = 0x11;
    assert!(matches!(
        unpad_strict(&padded, 16),
        Err(Error::Padding)
    ));
}

#[test]
fn strict_unpad_rejects_zero_and_oversized_pad_lengths() {
    let mut buf = vec![0u8; 16];
    buf[15] = 0; // zero pad length
    assert!(matches!(unpad_strict(&buf, 16), Err(Error::Padding)));

    let mut buf = vec![17u8; 32];
    buf[31] = 17; // pad length larger than one block
    assert!(matches!(unpad_strict(&buf, 16), Err(Error::Padding)));
}
