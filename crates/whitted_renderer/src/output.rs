//! Image file output.
//!
//! Images are first written to a hidden sibling file and renamed into place,
//! so a failed write never leaves a truncated image at the destination.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{RenderError, RenderResult};
use crate::renderer::ImageBuffer;

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Binary PPM (P6)
    Ppm,
    Png,
}

impl OutputFormat {
    /// Pick the format from a path's extension.
    pub fn from_path(path: &Path) -> RenderResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "ppm" => Ok(Self::Ppm),
            "png" => Ok(Self::Png),
            _ => Err(RenderError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Encode an image as binary PPM (P6).
pub fn encode_ppm(image: &ImageBuffer) -> Vec<u8> {
    let header = format!("P6\n{} {}\n255\n", image.width, image.height);
    let mut bytes = Vec::with_capacity(header.len() + image.pixels.len() * 3);
    bytes.extend_from_slice(header.as_bytes());
    bytes.extend_from_slice(&image.to_rgb8());
    bytes
}

/// Write `image` to `path` in the format named by its extension.
pub fn save_image(path: &Path, image: &ImageBuffer) -> RenderResult<()> {
    let format = OutputFormat::from_path(path)?;
    let tmp = temp_path(path);

    let result = write_format(&tmp, image, format).and_then(|()| {
        fs::rename(&tmp, path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })
    });

    if result.is_err() {
        // Best effort, the temp file may never have been created
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn write_format(tmp: &Path, image: &ImageBuffer, format: OutputFormat) -> RenderResult<()> {
    match format {
        OutputFormat::Ppm => write_ppm(tmp, image).map_err(|source| RenderError::Io {
            path: tmp.to_path_buf(),
            source,
        }),
        OutputFormat::Png => {
            let buffer = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8())
                .ok_or(RenderError::InvalidResolution {
                    width: image.width,
                    height: image.height,
                })?;
            buffer.save_with_format(tmp, image::ImageFormat::Png)?;
            Ok(())
        }
    }
}

fn write_ppm(path: &Path, image: &ImageBuffer) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(&encode_ppm(image))?;
    file.sync_all()
}

/// `dir/.name.tmp` next to the destination.
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}
