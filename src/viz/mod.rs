use std::io::Cursor;

use image::{DynamicImage, GrayImage};

use crate::data::Example;
use crate::error::{Error, Result};
use crate::eval::argmax;
use crate::network::Network;

/// One rendered prediction: the example's input as a grayscale image plus the
/// true and predicted class labels.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub image: GrayImage,
    pub truth: usize,
    pub predicted: usize,
}

impl Comparison {
    /// `"truth -> predicted"`, e.g. `"7 -> 2"` for a misclassified seven.
    pub fn caption(&self) -> String {
        format!("{} -> {}", self.truth, self.predicted)
    }

    /// Encodes the rendered image as PNG bytes.
    pub fn png_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        DynamicImage::ImageLuma8(self.image.clone())
            .write_to(&mut Cursor::new(&mut buf), image::ImageOutputFormat::Png)
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
        Ok(buf)
    }
}

/// Lazy walk over a labeled set: each step runs the plain forward pass on one
/// example and renders the comparison. Nothing is computed until the consumer
/// asks for the next item, so stopping is just dropping the iterator.
///
/// Only `feedforward` is used; neither the network nor the examples are
/// mutated.
#[derive(Debug)]
pub struct Inspector<'a> {
    network: &'a Network,
    examples: &'a [Example],
    width: u32,
    height: u32,
    cursor: usize,
}

impl<'a> Inspector<'a> {
    /// `width * height` must match the network's input layer size.
    pub fn new(
        network: &'a Network,
        examples: &'a [Example],
        width: u32,
        height: u32,
    ) -> Result<Inspector<'a>> {
        let pixels = (width as usize) * (height as usize);
        if pixels != network.sizes()[0] {
            return Err(Error::ShapeMismatch {
                context: "inspector image dimensions",
                expected: network.sizes()[0],
                got: pixels,
            });
        }
        Ok(Inspector {
            network,
            examples,
            width,
            height,
            cursor: 0,
        })
    }

    fn render(&self, example: &Example) -> Result<Comparison> {
        let output = self.network.feedforward(&example.input)?;

        let pixels: Vec<u8> = example
            .input
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0) as u8)
            .collect();
        // from_raw only fails on a length mismatch, which new() rules out.
        let image = GrayImage::from_raw(self.width, self.height, pixels)
            .expect("pixel count matches width * height");

        Ok(Comparison {
            image,
            truth: example.target.class(),
            predicted: argmax(&output),
        })
    }
}

impl<'a> Iterator for Inspector<'a> {
    type Item = Result<Comparison>;

    fn next(&mut self) -> Option<Self::Item> {
        let example = self.examples.get(self.cursor)?;
        self.cursor += 1;
        Some(self.render(example))
    }
}
