use steganographer_core::codec::bits::{char_to_bits, message_to_bits};
use steganographer_core::codec::dct::{embed_bit_in_coefficient, extract_bit_from_coefficient};
use steganographer_core::{
    Algorithm, Channel, CodecOptions, Concealer, DctAlgorithm, DctCodecOptions, LsbAlgorithm,
    SteganoError,
};

fn plane(height: usize, width: usize) -> Channel {
    Channel::from_fn(height, width, |row, col| (96 + (row * 7 + col * 5) % 64) as u8)
}

#[test]
fn should_hide_hello_in_a_64_by_64_plane_with_lsb() {
    let channel = plane(64, 64);
    let lsb: Algorithm = LsbAlgorithm.into();

    assert_eq!(lsb.capacity(channel.shape()).unwrap(), 585);

    let secret = lsb.embed(&channel, "Hello!").unwrap();
    assert!(lsb.extract(&secret).unwrap().starts_with("Hello!"));
}

#[test]
fn should_compute_dct_capacity_of_a_128_by_128_plane() {
    let dct = CodecOptions::Dct(DctCodecOptions::default().with_block_size(8))
        .algorithm()
        .unwrap();

    assert_eq!(dct.capacity(&[128, 128]).unwrap(), 35);
}

#[test]
fn should_quantize_coefficients_to_parity() {
    assert_eq!(embed_bit_in_coefficient(10.5, 0, 10), 0.0);
    assert_eq!(embed_bit_in_coefficient(10.5, 1, 10), 10.0);
    assert_eq!(extract_bit_from_coefficient(15.3, 10), 0);
    assert_eq!(extract_bit_from_coefficient(-10.0, 10), 1);
}

#[test]
fn should_encode_characters_msb_first_in_7_bits() {
    assert_eq!(char_to_bits('A').unwrap(), [1, 0, 0, 0, 0, 0, 1]);
    assert_eq!(message_to_bits("").unwrap(), Vec::<u8>::new());
    assert!(matches!(
        message_to_bits("naïve"),
        Err(SteganoError::UnsupportedCharacter('ï'))
    ));
}

#[test]
fn should_fill_a_dct_plane_to_the_last_character() {
    let channel = plane(128, 128);
    let dct: Algorithm = DctAlgorithm::new(8, 10, 12).unwrap().into();
    let message: String = ('a'..='z').chain('A'..='I').collect();
    assert_eq!(message.len(), 35);

    let secret = dct.embed(&channel, &message).unwrap();

    assert_eq!(dct.extract(&secret).unwrap(), message);
    assert!(matches!(
        dct.embed(&channel, &format!("{message}!")),
        Err(SteganoError::CapacityExceeded {
            required: 36,
            available: 35
        })
    ));
}

#[test]
fn should_treat_both_algorithms_the_same_way() {
    let channel = plane(96, 96);
    let algorithms: Vec<Algorithm> = vec![
        LsbAlgorithm.into(),
        DctAlgorithm::new(4, 5, 16).unwrap().into(),
        DctAlgorithm::new(8, 1, 10).unwrap().into(),
    ];

    for algorithm in algorithms {
        let secret = algorithm.embed(&channel, "same contract").unwrap();
        assert_eq!(secret.shape(), channel.shape());
        assert!(algorithm
            .extract(&secret)
            .unwrap()
            .starts_with("same contract"));
    }
}

#[test]
fn should_refuse_dct_on_flat_shapes() {
    let dct: Algorithm = DctAlgorithm::new(8, 3, 10).unwrap().into();
    let flat = Channel::new(vec![4096], vec![128; 4096]).unwrap();

    assert!(matches!(
        dct.capacity(flat.shape()),
        Err(SteganoError::InvalidShape(_))
    ));
    assert!(matches!(
        dct.embed(&flat, "x"),
        Err(SteganoError::InvalidShape(_))
    ));
    assert!(matches!(dct.extract(&flat), Err(SteganoError::InvalidShape(_))));
}

/// samples between 40 and 215 without any smoothness
fn rough_plane(height: usize, width: usize) -> Channel {
    Channel::from_fn(height, width, |row, col| {
        (40 + (row * 31 + col * 17 + row * col * 7) % 176) as u8
    })
}

#[test]
fn should_round_trip_exactly_when_the_step_exceeds_the_block_size() {
    let channel = rough_plane(128, 128);

    for (block_size, quantization) in [(2, 3), (2, 10), (8, 9), (16, 17), (16, 24)] {
        let dct = DctAlgorithm::new(block_size, 3, quantization).unwrap();
        let message = "x".repeat(dct.capacity(channel.shape()).unwrap().min(40));

        let secret = dct.embed(&channel, &message).unwrap();

        assert_eq!(
            dct.extract(&secret).unwrap(),
            message,
            "block size {block_size}, quantization {quantization}"
        );
    }
}

#[test]
fn should_lose_bits_when_the_step_vanishes_in_pixel_rounding() {
    // on a flat plane a parity flip of one small step moves no sample by half a level
    let flat = Channel::from_fn(128, 128, |_, _| 128);

    for (block_size, quantization) in [(8, 1), (16, 2), (16, 4)] {
        let dct = DctAlgorithm::new(block_size, 3, quantization).unwrap();

        let secret = dct.embed(&flat, "xxxxxxxx").unwrap();

        assert_eq!(secret, flat, "block size {block_size}, quantization {quantization}");
        assert_eq!(dct.extract(&secret).unwrap(), "");
    }
}
