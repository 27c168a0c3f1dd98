//! Entry points combining the fitter with an encoder.
//!
//! All of these run synchronously on the caller's thread and own their
//! buffers; the input grid is only read.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::decode::decode_image;
use crate::encode::{encode_jpeg, encode_png, EncodeError};
use crate::error::CompressError;
use crate::fit::fit;
use crate::grid::PixelGrid;
use crate::options::CompressOptions;
use crate::search::compress_to_size;

/// Shrink `grid` to the size limits in `opts`.
///
/// Returns the input borrowed when no resize is needed.
pub fn compress<'a>(grid: &'a PixelGrid, opts: &CompressOptions) -> Cow<'a, PixelGrid> {
    if opts.is_unbounded() {
        return Cow::Borrowed(grid);
    }
    fit(grid, opts.max_width, opts.max_height, opts.filter)
}

/// Fit and JPEG-encode `grid`, writing the result to `sink`.
///
/// The quality is normalized with [`CompressOptions::effective_quality`].
///
/// # Errors
///
/// `CompressError::Encode` if the encoder fails, `CompressError::Io` if
/// writing to `sink` fails.
pub fn compress_jpeg<W: Write>(
    grid: &PixelGrid,
    mut sink: W,
    opts: &CompressOptions,
) -> Result<(), CompressError> {
    let fitted = compress(grid, opts);
    let bytes = encode_jpeg(&fitted, opts.effective_quality())?;

    sink.write_all(&bytes)?;
    sink.flush()?;
    Ok(())
}

/// Fit and PNG-encode `grid` at maximum compression, writing to `sink`.
///
/// `opts.quality` has no effect.
pub fn compress_png<W: Write>(
    grid: &PixelGrid,
    mut sink: W,
    opts: &CompressOptions,
) -> Result<(), CompressError> {
    let fitted = compress(grid, opts);
    let bytes = encode_png(&fitted)?;

    sink.write_all(&bytes)?;
    sink.flush()?;
    Ok(())
}

/// Fit `grid` to `opts`, then run the quality search against `target_bytes`.
///
/// `opts.quality` is ignored; the search picks the quality.
pub fn compress_to_size_with_options(
    grid: &PixelGrid,
    target_bytes: usize,
    opts: &CompressOptions,
) -> Result<Vec<u8>, EncodeError> {
    let fitted = compress(grid, opts);
    compress_to_size(&fitted, target_bytes)
}

/// Read, decode, fit and re-encode `input` into `output`.
///
/// The output is always JPEG, whatever extension `output` has. The output
/// file is only created once the input has decoded successfully.
pub fn compress_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    opts: &CompressOptions,
) -> Result<(), CompressError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let bytes = fs::read(input)?;
    let grid = decode_image(&bytes)?;

    let file = File::create(output)?;
    compress_jpeg(&grid, BufWriter::new(file), opts)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        width = grid.width(),
        height = grid.height(),
        "compressed file"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::DecodeError;
    use crate::grid::ColorLayout;
    use std::io;

    fn gradient_grid(width: u32, height: u32) -> PixelGrid {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 255 / width) as u8);
                pixels.push((y * 255 / height) as u8);
                pixels.push(((x + y) * 127 / (width + height)) as u8);
            }
        }
        PixelGrid::from_raw(width, height, ColorLayout::Rgb8, pixels).unwrap()
    }

    fn jpeg_with(grid: &PixelGrid, opts: &CompressOptions) -> Vec<u8> {
        let mut out = Vec::new();
        compress_jpeg(grid, &mut out, opts).unwrap();
        out
    }

    /// Sink that rejects every write.
    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_compress_without_limits_borrows() {
        let grid = gradient_grid(40, 30);
        let fitted = compress(&grid, &CompressOptions::default());
        assert!(matches!(fitted, Cow::Borrowed(_)));
    }

    #[test]
    fn test_compress_unbounded_ignores_filter() {
        let grid = gradient_grid(40, 30);
        let opts = CompressOptions::new().with_filter(crate::fit::ResampleFilter::Nearest);
        assert!(opts.is_unbounded());

        match compress(&grid, &opts) {
            Cow::Borrowed(inner) => assert!(std::ptr::eq(inner, &grid)),
            Cow::Owned(_) => panic!("unbounded options must not resample"),
        }
    }

    #[test]
    fn test_compress_jpeg_applies_limits() {
        let grid = gradient_grid(200, 100);
        let opts = CompressOptions::new().with_max_dimensions(100, 0);

        let bytes = jpeg_with(&grid, &opts);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (100, 50));
    }

    #[test]
    fn test_out_of_range_quality_behaves_as_80() {
        let grid = gradient_grid(64, 64);
        let reference = jpeg_with(&grid, &CompressOptions::new().with_quality(80));

        for quality in [0, -1, -100, 101, 1000] {
            let bytes = jpeg_with(&grid, &CompressOptions::new().with_quality(quality));
            assert_eq!(bytes, reference, "quality {quality} should act as 80");
        }
    }

    #[test]
    fn test_quality_100_is_kept() {
        let grid = gradient_grid(64, 64);
        let at_80 = jpeg_with(&grid, &CompressOptions::new().with_quality(80));
        let at_100 = jpeg_with(&grid, &CompressOptions::new().with_quality(100));

        assert_ne!(at_100, at_80);
        assert_eq!(at_100, encode_jpeg(&grid, 100).unwrap());
    }

    #[test]
    fn test_compress_jpeg_sink_failure_is_io() {
        let grid = gradient_grid(16, 16);
        let result = compress_jpeg(&grid, BrokenSink, &CompressOptions::default());
        assert!(matches!(result, Err(CompressError::Io(_))));
    }

    #[test]
    fn test_compress_png_ignores_quality() {
        let grid = gradient_grid(32, 32);

        let mut low = Vec::new();
        compress_png(&grid, &mut low, &CompressOptions::new().with_quality(10)).unwrap();
        let mut high = Vec::new();
        compress_png(&grid, &mut high, &CompressOptions::new().with_quality(100)).unwrap();

        assert_eq!(low, high);
        assert_eq!(&low[1..4], b"PNG");
    }

    #[test]
    fn test_compress_png_applies_limits() {
        let grid = gradient_grid(90, 120);
        let opts = CompressOptions::new().with_max_dimensions(0, 60);

        let mut out = Vec::new();
        compress_png(&grid, &mut out, &opts).unwrap();

        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (45, 60));
    }

    #[test]
    fn test_compress_to_size_with_options_fits_first() {
        let grid = gradient_grid(120, 80);
        let opts = CompressOptions::new().with_max_dimensions(60, 0);

        let bytes = compress_to_size_with_options(&grid, 1024 * 1024, &opts).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (60, 40));
    }

    #[test]
    fn test_compress_file_writes_jpeg_even_for_png_extension() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("output.png");

        fs::write(&input, encode_png(&gradient_grid(80, 40)).unwrap()).unwrap();

        let opts = CompressOptions::new().with_max_dimensions(40, 0);
        compress_file(&input, &output, &opts).unwrap();

        let written = fs::read(&output).unwrap();
        assert_eq!(&written[0..2], &[0xFF, 0xD8]);

        let decoded = image::load_from_memory(&written).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (40, 20));
    }

    #[test]
    fn test_compress_file_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.jpg");

        let result = compress_file(dir.path().join("nope.jpg"), &output, &CompressOptions::default());

        assert!(matches!(result, Err(CompressError::Io(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_compress_file_undecodable_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.jpg");
        let output = dir.path().join("out.jpg");
        fs::write(&input, b"not an image at all").unwrap();

        let result = compress_file(&input, &output, &CompressOptions::default());

        assert!(matches!(
            result,
            Err(CompressError::Decode(DecodeError::InvalidFormat))
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_compress_file_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        fs::write(&input, encode_png(&gradient_grid(8, 8)).unwrap()).unwrap();

        let output = dir.path().join("missing-dir").join("out.jpg");
        let result = compress_file(&input, &output, &CompressOptions::default());

        assert!(matches!(result, Err(CompressError::Io(_))));
    }
}
