use crate::error::{Error, Result};
use crate::eval::argmax;

/// The desired output of one example.
///
/// Training and validation data carry full target vectors (`OneHot`); test
/// data may instead carry a bare class index (`Class`). Both resolve to a
/// class label for evaluation, and `Class` can be expanded to a one-hot
/// vector for training.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    OneHot(Vec<f64>),
    Class(usize),
}

impl Target {
    /// The class label: the bare index, or the arg-max of a one-hot vector.
    pub fn class(&self) -> usize {
        match self {
            Target::Class(label) => *label,
            Target::OneHot(v) => argmax(v),
        }
    }

    /// The target as a vector of length `classes`.
    pub fn one_hot(&self, classes: usize) -> Result<Vec<f64>> {
        match self {
            Target::OneHot(v) => {
                if v.len() != classes {
                    return Err(Error::ShapeMismatch {
                        context: "target vector",
                        expected: classes,
                        got: v.len(),
                    });
                }
                Ok(v.clone())
            }
            Target::Class(label) => {
                if *label >= classes {
                    return Err(Error::dataset(format!(
                        "class label {label} is out of range for {classes} output neurons"
                    )));
                }
                let mut v = vec![0.0; classes];
                v[*label] = 1.0;
                Ok(v)
            }
        }
    }
}

/// One labeled example: an input vector paired with its desired output.
/// Read-only as far as the numeric core is concerned.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub input: Vec<f64>,
    pub target: Target,
}

impl Example {
    pub fn one_hot(input: Vec<f64>, target: Vec<f64>) -> Example {
        Example {
            input,
            target: Target::OneHot(target),
        }
    }

    pub fn labeled(input: Vec<f64>, class: usize) -> Example {
        Example {
            input,
            target: Target::Class(class),
        }
    }
}
