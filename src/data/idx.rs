use std::fs;
use std::path::Path;

use crate::data::dataset::Example;
use crate::error::{Error, Result};

/// How labels should be attached to decoded examples.
///
/// Training and validation sets want full target vectors; test sets keep the
/// bare class index (the evaluator handles both).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelEncoding {
    OneHot { classes: usize },
    Class,
}

/// Decodes an IDX3 image / IDX1 label byte pair (the MNIST container format)
/// into labeled examples. Pixels are normalized from [0, 255] to [0.0, 1.0].
pub fn decode_idx_pair(
    image_bytes: &[u8],
    label_bytes: &[u8],
    encoding: LabelEncoding,
) -> Result<Vec<Example>> {
    let (image_dims, image_data) = idx_sections(image_bytes, 3, "image")?;
    let (label_dims, label_data) = idx_sections(label_bytes, 1, "label")?;

    let n_items = image_dims[0];
    let n_pixels = image_dims[1]
        .checked_mul(image_dims[2])
        .ok_or_else(|| Error::dataset("IDX image file: rows * cols overflows usize"))?;

    let expected_pixels = n_items
        .checked_mul(n_pixels)
        .ok_or_else(|| Error::dataset("IDX image file: item count * pixel count overflows usize"))?;
    if image_data.len() < expected_pixels {
        return Err(Error::dataset(format!(
            "IDX image file truncated: header declares {} items of {} pixels but only {} data bytes follow",
            n_items,
            n_pixels,
            image_data.len()
        )));
    }

    if label_dims[0] != n_items {
        return Err(Error::dataset(format!(
            "IDX pair mismatch: {} images but {} labels",
            n_items, label_dims[0]
        )));
    }
    if label_data.len() < n_items {
        return Err(Error::dataset(format!(
            "IDX label file truncated: header declares {} labels but only {} data bytes follow",
            n_items,
            label_data.len()
        )));
    }

    let mut examples = Vec::with_capacity(n_items);
    for (chunk, &label) in image_data[..expected_pixels]
        .chunks_exact(n_pixels)
        .zip(label_data[..n_items].iter())
    {
        let input: Vec<f64> = chunk.iter().map(|&px| px as f64 / 255.0).collect();
        let example = match encoding {
            LabelEncoding::OneHot { classes } => {
                let class = label as usize;
                if class >= classes {
                    return Err(Error::dataset(format!(
                        "IDX label {class} is out of range for {classes} classes"
                    )));
                }
                let mut target = vec![0.0; classes];
                target[class] = 1.0;
                Example::one_hot(input, target)
            }
            LabelEncoding::Class => Example::labeled(input, label as usize),
        };
        examples.push(example);
    }

    Ok(examples)
}

/// Reads and decodes an IDX image/label file pair from disk.
pub fn read_idx_pair(
    image_path: impl AsRef<Path>,
    label_path: impl AsRef<Path>,
    encoding: LabelEncoding,
) -> Result<Vec<Example>> {
    let image_bytes = fs::read(image_path)?;
    let label_bytes = fs::read(label_path)?;
    decode_idx_pair(&image_bytes, &label_bytes, encoding)
}

/// Loads the standard four-file MNIST layout from `dir` and returns
/// `(training, validation, test)`:
/// the 60k-example train pair is split into the first 50,000 (training) and
/// the rest (validation), both one-hot; the 10k test pair keeps bare class
/// labels.
pub fn load_data_wrapper(dir: impl AsRef<Path>) -> Result<(Vec<Example>, Vec<Example>, Vec<Example>)> {
    let dir = dir.as_ref();
    let encoding = LabelEncoding::OneHot { classes: 10 };

    let mut training = read_idx_pair(
        dir.join("train-images-idx3-ubyte"),
        dir.join("train-labels-idx1-ubyte"),
        encoding,
    )?;
    let test = read_idx_pair(
        dir.join("t10k-images-idx3-ubyte"),
        dir.join("t10k-labels-idx1-ubyte"),
        LabelEncoding::Class,
    )?;

    let split = training.len().min(50_000);
    let validation = training.split_off(split);
    Ok((training, validation, test))
}

/// Validates an IDX header and splits the file into its dimension sizes and
/// its data bytes.
///
/// Every IDX file starts with two zero bytes, a dtype byte (0x08 = uint8 is
/// the only one used here), a dimension-count byte, and one big-endian u32
/// per dimension.
fn idx_sections<'a>(
    bytes: &'a [u8],
    expected_dims: usize,
    kind: &str,
) -> Result<(Vec<usize>, &'a [u8])> {
    let header_len = 4 + 4 * expected_dims;
    if bytes.len() < header_len {
        return Err(Error::dataset(format!(
            "IDX {kind} file too short: need at least {header_len} header bytes, got {}",
            bytes.len()
        )));
    }

    if bytes[0] != 0x00 || bytes[1] != 0x00 {
        return Err(Error::dataset(format!(
            "IDX {kind} file: bytes 0-1 must be 0x00 0x00, got 0x{:02X} 0x{:02X}",
            bytes[0], bytes[1]
        )));
    }
    if bytes[2] != 0x08 {
        return Err(Error::dataset(format!(
            "IDX {kind} file: dtype byte must be 0x08 (uint8), got 0x{:02X}",
            bytes[2]
        )));
    }
    if bytes[3] as usize != expected_dims {
        return Err(Error::dataset(format!(
            "IDX {kind} file: expected {expected_dims} dimensions, got {}",
            bytes[3]
        )));
    }

    let dims = (0..expected_dims)
        .map(|i| {
            let at = 4 + 4 * i;
            u32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]) as usize
        })
        .collect();

    Ok((dims, &bytes[header_len..]))
}
