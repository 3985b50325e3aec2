// Tests for the IDX container decoder and the Target/Example types.

use std::env;
use std::fs;

use approx::assert_relative_eq;

use magnetite_nn::data::{decode_idx_pair, load_data_wrapper, read_idx_pair, LabelEncoding};
use magnetite_nn::{Error, Example, Target};

/// IDX3 image bytes: magic, item count, rows, cols, then raw pixels.
fn idx_images(n: u32, rows: u32, cols: u32, pixels: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0x00, 0x00, 0x08, 0x03];
    bytes.extend(n.to_be_bytes());
    bytes.extend(rows.to_be_bytes());
    bytes.extend(cols.to_be_bytes());
    bytes.extend_from_slice(pixels);
    bytes
}

/// IDX1 label bytes: magic, item count, then raw labels.
fn idx_labels(labels: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0x00, 0x00, 0x08, 0x01];
    bytes.extend((labels.len() as u32).to_be_bytes());
    bytes.extend_from_slice(labels);
    bytes
}

#[test]
fn decode_normalizes_pixels_and_one_hot_encodes_labels() {
    let images = idx_images(2, 2, 2, &[0, 255, 128, 64, 10, 20, 30, 40]);
    let labels = idx_labels(&[3, 7]);

    let examples =
        decode_idx_pair(&images, &labels, LabelEncoding::OneHot { classes: 10 }).unwrap();
    assert_eq!(examples.len(), 2);

    assert_eq!(examples[0].input.len(), 4);
    assert_relative_eq!(examples[0].input[0], 0.0);
    assert_relative_eq!(examples[0].input[1], 1.0);
    assert_relative_eq!(examples[0].input[2], 128.0 / 255.0);
    assert_relative_eq!(examples[0].input[3], 64.0 / 255.0);

    let mut expected = vec![0.0; 10];
    expected[3] = 1.0;
    assert_eq!(examples[0].target, Target::OneHot(expected));
    assert_eq!(examples[1].target.class(), 7);
}

#[test]
fn decode_keeps_bare_class_labels_when_asked() {
    let images = idx_images(2, 2, 2, &[0; 8]);
    let labels = idx_labels(&[3, 7]);

    let examples = decode_idx_pair(&images, &labels, LabelEncoding::Class).unwrap();
    assert_eq!(examples[0].target, Target::Class(3));
    assert_eq!(examples[1].target, Target::Class(7));
}

#[test]
fn decode_rejects_malformed_headers() {
    let labels = idx_labels(&[1]);

    // Non-zero leading bytes.
    let mut images = idx_images(1, 1, 1, &[0]);
    images[0] = 0xFF;
    assert!(matches!(
        decode_idx_pair(&images, &labels, LabelEncoding::Class),
        Err(Error::Dataset { .. })
    ));

    // Wrong dtype byte (only uint8 / 0x08 is supported).
    let mut images = idx_images(1, 1, 1, &[0]);
    images[2] = 0x0D;
    assert!(matches!(
        decode_idx_pair(&images, &labels, LabelEncoding::Class),
        Err(Error::Dataset { .. })
    ));

    // Wrong dimension count for an image file.
    let mut images = idx_images(1, 1, 1, &[0]);
    images[3] = 0x01;
    assert!(matches!(
        decode_idx_pair(&images, &labels, LabelEncoding::Class),
        Err(Error::Dataset { .. })
    ));

    // Header shorter than the declared dimension list.
    let images = vec![0x00, 0x00, 0x08, 0x03, 0x00];
    assert!(matches!(
        decode_idx_pair(&images, &labels, LabelEncoding::Class),
        Err(Error::Dataset { .. })
    ));
}

#[test]
fn decode_rejects_truncated_and_mismatched_files() {
    // Header declares 2 images of 4 pixels but only 5 data bytes follow.
    let truncated_images = idx_images(2, 2, 2, &[0; 5]);
    let labels = idx_labels(&[1, 2]);
    assert!(matches!(
        decode_idx_pair(&truncated_images, &labels, LabelEncoding::Class),
        Err(Error::Dataset { .. })
    ));

    // 2 images but 3 labels.
    let images = idx_images(2, 2, 2, &[0; 8]);
    let labels = idx_labels(&[1, 2, 3]);
    assert!(matches!(
        decode_idx_pair(&images, &labels, LabelEncoding::Class),
        Err(Error::Dataset { .. })
    ));

    // Label header declares 2 labels but only 1 data byte follows.
    let mut short_labels = idx_labels(&[1, 2]);
    short_labels.pop();
    assert!(matches!(
        decode_idx_pair(&images, &short_labels, LabelEncoding::Class),
        Err(Error::Dataset { .. })
    ));
}

#[test]
fn decode_rejects_out_of_range_class_labels() {
    let images = idx_images(1, 2, 2, &[0; 4]);
    let labels = idx_labels(&[12]);
    assert!(matches!(
        decode_idx_pair(&images, &labels, LabelEncoding::OneHot { classes: 10 }),
        Err(Error::Dataset { .. })
    ));
}

#[test]
fn read_idx_pair_surfaces_io_errors() {
    let err = read_idx_pair(
        "/nonexistent/images-idx3-ubyte",
        "/nonexistent/labels-idx1-ubyte",
        LabelEncoding::Class,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn load_data_wrapper_reads_the_standard_four_file_layout() {
    let dir = env::temp_dir().join(format!("magnetite-nn-idx-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    // 6 training examples (all below the 50,000 split, so validation is
    // empty) and 2 test examples.
    fs::write(
        dir.join("train-images-idx3-ubyte"),
        idx_images(6, 2, 2, &[0; 24]),
    )
    .unwrap();
    fs::write(
        dir.join("train-labels-idx1-ubyte"),
        idx_labels(&[0, 1, 2, 3, 4, 5]),
    )
    .unwrap();
    fs::write(
        dir.join("t10k-images-idx3-ubyte"),
        idx_images(2, 2, 2, &[0; 8]),
    )
    .unwrap();
    fs::write(dir.join("t10k-labels-idx1-ubyte"), idx_labels(&[8, 9])).unwrap();

    let (training, validation, test) = load_data_wrapper(&dir).unwrap();
    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(training.len(), 6);
    assert_eq!(validation.len(), 0);
    assert_eq!(test.len(), 2);

    // Training targets are one-hot, test targets stay bare class labels.
    assert!(matches!(training[2].target, Target::OneHot(_)));
    assert_eq!(training[2].target.class(), 2);
    assert_eq!(test[1].target, Target::Class(9));
}

#[test]
fn target_resolves_class_from_both_forms() {
    assert_eq!(Target::Class(4).class(), 4);
    assert_eq!(Target::OneHot(vec![0.0, 0.2, 0.9, 0.1]).class(), 2);
}

#[test]
fn target_expands_to_one_hot_vectors() {
    let expanded = Target::Class(1).one_hot(3).unwrap();
    assert_eq!(expanded, vec![0.0, 1.0, 0.0]);

    let passthrough = Target::OneHot(vec![0.0, 1.0, 0.0]).one_hot(3).unwrap();
    assert_eq!(passthrough, vec![0.0, 1.0, 0.0]);
}

#[test]
fn target_one_hot_rejects_bad_shapes_and_labels() {
    assert!(matches!(
        Target::OneHot(vec![1.0, 0.0]).one_hot(3),
        Err(Error::ShapeMismatch { .. })
    ));
    assert!(matches!(
        Target::Class(3).one_hot(3),
        Err(Error::Dataset { .. })
    ));
}

#[test]
fn example_constructors_store_both_target_forms() {
    let one_hot = Example::one_hot(vec![0.1, 0.2], vec![1.0, 0.0]);
    assert_eq!(one_hot.target, Target::OneHot(vec![1.0, 0.0]));

    let labeled = Example::labeled(vec![0.1, 0.2], 1);
    assert_eq!(labeled.target, Target::Class(1));
    assert_eq!(labeled.input, vec![0.1, 0.2]);
}
