//! SEC1 encoding of points over prime fields.
//!
//! | tag            | length      | contents                             |
//! |----------------|-------------|--------------------------------------|
//! | `0x00`         | 1           | identity                             |
//! | `0x02`, `0x03` | `1 + L`     | `x`, parity of `y` in the tag        |
//! | `0x04`         | `1 + 2L`    | `x ‖ y`                              |
//! | `0x06`, `0x07` | `1 + 2L`    | `x ‖ y`, parity of `y` in the tag    |
//!
//! where `L` is the length of an encoded field element.

use crate::{Curve, Error, Point, Result};
use primefield::FieldElement;

/// Tag of the identity encoding.
const TAG_IDENTITY: u8 = 0x00;

/// Tag of a compressed point with even `y`; the odd tag is one higher.
const TAG_COMPRESSED: u8 = 0x02;

/// Tag of an uncompressed point.
const TAG_UNCOMPRESSED: u8 = 0x04;

/// Tag of a hybrid point with even `y`; the odd tag is one higher.
const TAG_HYBRID: u8 = 0x06;

impl Curve<FieldElement> {
    /// Decode a SEC1 encoded point, validating it.
    pub fn decode_point(&self, bytes: &[u8]) -> Result<Point<FieldElement>> {
        let Some(&tag) = bytes.first() else {
            return Err(Error::InvalidLength {
                expected: 1,
                actual: 0,
            });
        };

        let len = self.field_len();

        let point = match tag {
            TAG_IDENTITY => {
                check_length(bytes, 1)?;
                self.infinity()
            }
            0x02 | 0x03 => {
                check_length(bytes, 1 + len)?;
                let x = self.modulus().element_from_bytes(&bytes[1..])?;
                self.decompress(x, tag & 1 == 1)?
            }
            0x04 | 0x06 | 0x07 => {
                check_length(bytes, 1 + 2 * len)?;
                let x = self.modulus().element_from_bytes(&bytes[1..1 + len])?;
                let y = self.modulus().element_from_bytes(&bytes[1 + len..])?;

                if tag != TAG_UNCOMPRESSED && y.is_odd() != (tag & 1 == 1) {
                    return Err(Error::ParityMismatch);
                }

                self.create_point(x, y)?
            }
            _ => return Err(Error::InvalidEncoding { tag }),
        };

        Ok(point)
    }

    /// Recover `y` from `x` and its parity.
    fn decompress(&self, x: FieldElement, y_is_odd: bool) -> Result<Point<FieldElement>> {
        let alpha = x.square().add(self.a()).multiply(&x).add(self.b());
        let beta = alpha.sqrt().ok_or(Error::InvalidPoint)?;

        let y = if beta.is_odd() == y_is_odd {
            beta
        } else {
            beta.negate()
        };

        if y.is_odd() != y_is_odd {
            return Err(Error::ParityMismatch);
        }

        self.create_point(x, y)
    }
}

impl Point<FieldElement> {
    /// Serialize this point using the compressed or the uncompressed SEC1 encoding.
    pub fn to_encoded_point(&self, compress: bool) -> Vec<u8> {
        let tag = if compress {
            TAG_COMPRESSED
        } else {
            TAG_UNCOMPRESSED
        };

        self.encode(tag, compress)
    }

    /// Serialize this point using the hybrid SEC1 encoding.
    pub fn to_hybrid_encoded_point(&self) -> Vec<u8> {
        self.encode(TAG_HYBRID, false)
    }

    fn encode(&self, tag: u8, compress: bool) -> Vec<u8> {
        let point = self.normalize();

        let (false, Some(x), Some(y)) = (point.is_infinity(), point.raw_x(), point.raw_y()) else {
            return vec![TAG_IDENTITY];
        };

        let tag = match tag {
            TAG_UNCOMPRESSED => tag,
            _ => tag | u8::from(y.is_odd()),
        };

        let mut out = Vec::with_capacity(1 + 2 * self.curve().field_len());
        out.push(tag);
        out.extend_from_slice(&x.to_bytes());
        if !compress {
            out.extend_from_slice(&y.to_bytes());
        }
        out
    }
}

fn check_length(bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() == expected {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            expected,
            actual: bytes.len(),
        })
    }
}
