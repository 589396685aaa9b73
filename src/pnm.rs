//! Reading and writing of images in the binary PPM format (`P6`).
//!
//! Header is parsed and written by [PnmDecoder] and [PnmEncoder]
//! from the `image` crate. Only images with max sample value equal to 255
//! are supported. Header tokens may be separated by any whitespace and
//! comments (from `#` to the end of line). Exactly one whitespace byte
//! must follow the max sample value; pixels data starts right after it.
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

use ::image::codecs::pnm::{PnmDecoder, PnmEncoder, PnmSubtype, SampleEncoding};
use ::image::{ExtendedColorType, ImageError};
use log::debug;

use crate::image::buffer_size;
use crate::{Image, ImageBufferError, PnmError};

/// Magic token of the binary PPM format.
pub const MAGIC: &[u8] = b"P6";
/// The only supported max sample value.
pub const MAX_VALUE: u32 = 255;

const SUBTYPE: PnmSubtype = PnmSubtype::Pixmap(SampleEncoding::Binary);

/// Decodes image from the reader.
///
/// Bytes after pixels data are ignored.
pub fn decode<R: BufRead>(mut reader: R) -> Result<Image, PnmError> {
    if !starts_with_magic(reader.fill_buf()?) {
        return Err(PnmError::InvalidMagic);
    }
    let decoder = PnmDecoder::new(reader).map_err(header_error)?;
    if decoder.subtype() != SUBTYPE {
        return Err(PnmError::InvalidMagic);
    }
    let (reader, header) = decoder.into_inner();
    let max_value = header.maximal_sample();
    if max_value != MAX_VALUE {
        return Err(PnmError::UnsupportedMaxValue(max_value));
    }

    let (width, height) = (header.width(), header.height());
    let expected = buffer_size(width, height)?;
    let mut buffer = Vec::new();
    reader.take(expected as u64).read_to_end(&mut buffer)?;
    if buffer.len() < expected {
        return Err(PnmError::TruncatedPixelData {
            expected,
            actual: buffer.len(),
        });
    }
    Ok(Image::from_vec_u8(width, height, buffer)?)
}

/// Encodes image into the writer.
pub fn encode<W: Write>(image: &Image, mut writer: W) -> Result<(), PnmError> {
    PnmEncoder::new(&mut writer)
        .with_subtype(SUBTYPE)
        .encode(
            image.buffer(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|err| match err {
            ImageError::IoError(err) => PnmError::Io(err),
            err => PnmError::Encoding(err.to_string()),
        })?;
    writer.flush()?;
    Ok(())
}

/// Reads and decodes image from the file.
pub fn read_file(path: impl AsRef<Path>) -> Result<Image, PnmError> {
    let path = path.as_ref();
    debug!("Read image from {:?}", path);
    let file = File::open(path)?;
    decode(BufReader::new(file))
}

/// Encodes image and writes it into the file.
///
/// Image is encoded in memory first, so the file is not touched
/// if encoding fails.
pub fn write_file(path: impl AsRef<Path>, image: &Image) -> Result<(), PnmError> {
    let path = path.as_ref();
    let mut data = Vec::with_capacity(image.buffer().len() + 32);
    encode(image, &mut data)?;
    debug!("Write image into {:?}", path);
    fs::write(path, data)?;
    Ok(())
}

/// `PnmDecoder` accepts any two-byte magic of the PNM family
/// and doesn't require whitespace after it.
fn starts_with_magic(buf: &[u8]) -> bool {
    matches!(buf, [b'P', b'6', sep, ..] if sep.is_ascii_whitespace())
}

fn header_error(err: ImageError) -> PnmError {
    match err {
        ImageError::IoError(err) if err.kind() != io::ErrorKind::UnexpectedEof => {
            PnmError::Io(err)
        }
        // Header ended before all numbers were read.
        ImageError::IoError(_) => PnmError::InvalidHeader("header ends too early".into()),
        ImageError::Unsupported(_) => PnmError::InvalidDimensions(ImageBufferError::TooLarge),
        err => PnmError::InvalidHeader(err.to_string()),
    }
}
