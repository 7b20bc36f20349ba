use crate::core::actions::cancellation::{
    CancelToken, Cancelled, NeverCancel, CANCEL_CHECK_INTERVAL_PIXELS,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{
    PixelBuffer, PixelBufferData, PixelBufferError, BYTES_PER_PIXEL, OPAQUE_ALPHA,
};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

/// Error type for cancelable pixel buffer generation.
#[derive(Debug)]
pub enum GeneratePixelBufferCancelableError {
    /// The operation was cancelled before completion.
    Cancelled(Cancelled),
    /// A pixel buffer construction error occurred.
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferCancelableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferCancelableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

/// Colours every input value and packs the result into an RGBA raster with
/// fully opaque alpha.
///
/// `input` must be row-major and hold exactly one value per pixel of
/// `pixel_rect`.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, PixelBufferError> {
    generate_pixel_buffer_cancelable(input, mapper, pixel_rect, &NeverCancel).map_err(|e| match e {
        GeneratePixelBufferCancelableError::PixelBuffer(err) => err,
        GeneratePixelBufferCancelableError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Like [`generate_pixel_buffer`], but checks `cancel` every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub fn generate_pixel_buffer_cancelable<T, CMap, C>(
    input: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferCancelableError>
where
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let buffer_size = pixel_rect.size() as usize * BYTES_PER_PIXEL;
    let mut buffer: PixelBufferData = Vec::with_capacity(buffer_size);

    for (i, value) in input.into_iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferCancelableError::Cancelled(Cancelled));
        }

        let Colour { r, g, b } = mapper.map(value);

        buffer.extend_from_slice(&[r, g, b, OPAQUE_ALPHA]);
    }

    PixelBuffer::from_data(pixel_rect, buffer)
        .map_err(GeneratePixelBufferCancelableError::PixelBuffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Debug)]
    struct StubColourMap {}

    impl ColourMap<u8> for StubColourMap {
        fn map(&self, value: u8) -> Colour {
            Colour {
                r: value,
                g: value,
                b: value,
            }
        }

        fn display_name(&self) -> &str {
            "Stub"
        }
    }

    #[test]
    fn test_generates_rgba_pixel_buffer() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMap {};
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 2, y: 1 }).unwrap();
        let expected_buffer: PixelBufferData = vec![
            1, 1, 1, 255, 2, 2, 2, 255, 3, 3, 3, 255, //
            4, 4, 4, 255, 5, 5, 5, 255, 6, 6, 6, 255,
        ];

        let results = generate_pixel_buffer(input, &mapper, pixel_rect).unwrap();

        assert_eq!(results.buffer(), &expected_buffer);
        assert_eq!(results.pixel_rect(), pixel_rect);
    }

    #[test]
    fn test_pixel_rect_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMap {};
        let pixel_rect = PixelRect::from_size(2, 2).unwrap();

        let results = generate_pixel_buffer(input, &mapper, pixel_rect);

        assert_eq!(
            results,
            Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: 16,
                buffer_size: 24
            })
        );
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_token_is_cancelled() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMap {};
        let pixel_rect = PixelRect::from_size(3, 2).unwrap();
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = generate_pixel_buffer_cancelable(input, &mapper, pixel_rect, &cancel_token);

        assert!(matches!(
            result,
            Err(GeneratePixelBufferCancelableError::Cancelled(_))
        ));
    }

    #[test]
    fn test_cancelable_completes_with_never_cancel() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMap {};
        let pixel_rect = PixelRect::from_size(3, 2).unwrap();

        let pixel_buffer =
            generate_pixel_buffer_cancelable(input, &mapper, pixel_rect, &NeverCancel).unwrap();

        assert_eq!(pixel_buffer.buffer().len(), 24); // 6 pixels * 4 bytes
    }

    #[test]
    fn test_cancelable_error_displays_cancelled() {
        let err = GeneratePixelBufferCancelableError::Cancelled(Cancelled);
        assert_eq!(format!("{}", err), "render cancelled");
    }
}
