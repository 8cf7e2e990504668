use image::imageops::FilterType;
use image::DynamicImage;
use ndarray::Array4;

/// Resize to the model's expected resolution and scale into a
/// `(1, height, width, 3)` tensor with channel values in `[0, 1]`.
///
/// The resize is exact: aspect ratio is not preserved, a non-square source
/// is distorted to the target dimensions.
pub fn to_input_tensor(image: &DynamicImage, (width, height): (u32, u32)) -> Array4<f32> {
    let resized = image
        .resize_exact(width, height, FilterType::Lanczos3)
        .to_rgb8();

    let mut tensor = Array4::<f32>::zeros((1, height as usize, width as usize, 3));
    for (x, y, pixel) in resized.enumerate_pixels() {
        for channel in 0..3 {
            tensor[[0, y as usize, x as usize, channel]] = pixel[channel] as f32 / 255.0;
        }
    }
    tensor
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn solid_image(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)))
    }

    #[test]
    fn output_shape_is_batch_height_width_channels() {
        let image = solid_image(640, 480, [12, 34, 56]);
        let tensor = to_input_tensor(&image, (224, 299));
        assert_eq!(tensor.dim(), (1, 299, 224, 3));
    }

    #[test]
    fn solid_color_scales_into_unit_range() {
        let image = solid_image(100, 100, [255, 0, 128]);
        let tensor = to_input_tensor(&image, (250, 250));

        assert!(tensor.iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert_eq!(tensor[[0, 0, 0, 0]], 1.0);
        assert_eq!(tensor[[0, 0, 0, 1]], 0.0);
        assert!((tensor[[0, 0, 0, 2]] - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn non_square_source_is_distorted_to_target() {
        let image = solid_image(37, 113, [7, 7, 7]);
        let tensor = to_input_tensor(&image, (299, 299));
        assert_eq!(tensor.dim(), (1, 299, 299, 3));
    }
}
