//! Floor texture tiling.
//!
//! Repeats a small texture pattern across an image and blends it into the
//! region selected by a floor mask. A mask value above zero marks a floor
//! pixel; everything else keeps its original value.
//!
//! Arrays follow image layout: `(height, width)` for grayscale and masks,
//! `(height, width, channels)` for color.

use std::io::Cursor;
use std::ops::Range;

use image::{GrayImage, Luma, Rgb, RgbImage};
use ndarray::{Array2, Array3, ArrayView2, ArrayView3, Zip};
use ndarray_npy::{ReadNpyError, ReadNpyExt};

use crate::error::{PageError, Result};

fn check_repeats(reps: (usize, usize)) -> Result<()> {
    if reps.0 == 0 || reps.1 == 0 {
        return Err(PageError::ZeroRepeats);
    }
    Ok(())
}

/// Output size of tiling an `h` x `w` pattern by `reps`, with `channels` per pixel.
fn tiled_dims(h: usize, w: usize, channels: usize, reps: (usize, usize)) -> Result<(usize, usize)> {
    let too_large = || PageError::TileTooLarge {
        texture: (h, w),
        reps,
    };
    let rows = h.checked_mul(reps.0).ok_or_else(too_large)?;
    let cols = w.checked_mul(reps.1).ok_or_else(too_large)?;
    rows.checked_mul(cols)
        .and_then(|n| n.checked_mul(channels))
        .filter(|&n| n <= isize::MAX as usize)
        .ok_or_else(too_large)?;
    Ok((rows, cols))
}

/// Set every element inside `rows` x `cols` to `value`.
///
/// Ranges are clipped to the array bounds.
pub fn fill_rect<T: Clone>(array: &mut Array2<T>, rows: Range<usize>, cols: Range<usize>, value: T) {
    array
        .indexed_iter_mut()
        .filter(|((y, x), _)| rows.contains(y) && cols.contains(x))
        .for_each(|(_, v)| *v = value.clone());
}

/// Repeat `texture` `reps.0` times vertically and `reps.1` times horizontally.
pub fn tile_texture<T: Clone>(texture: ArrayView2<'_, T>, reps: (usize, usize)) -> Result<Array2<T>> {
    check_repeats(reps)?;
    if texture.is_empty() {
        return Err(PageError::EmptyTexture);
    }
    let (h, w) = texture.dim();
    let dims = tiled_dims(h, w, 1, reps)?;
    Ok(Array2::from_shape_fn(dims, |(y, x)| {
        texture[[y % h, x % w]].clone()
    }))
}

/// Repeat a color texture along its two spatial axes, keeping channels.
pub fn tile_texture_rgb<T: Clone>(
    texture: ArrayView3<'_, T>,
    reps: (usize, usize),
) -> Result<Array3<T>> {
    check_repeats(reps)?;
    if texture.is_empty() {
        return Err(PageError::EmptyTexture);
    }
    let (h, w, channels) = texture.dim();
    let (rows, cols) = tiled_dims(h, w, channels, reps)?;
    Ok(Array3::from_shape_fn(
        (rows, cols, channels),
        |(y, x, c)| texture[[y % h, x % w, c]].clone(),
    ))
}

/// Replace floor pixels (`floor > 0`) with the matching texture pixel.
///
/// `texture` must have the same shape as `floor`.
pub fn apply_floor_texture_simple(
    floor: ArrayView2<'_, u8>,
    texture: ArrayView2<'_, u8>,
) -> Result<Array2<u8>> {
    if floor.dim() != texture.dim() {
        return Err(PageError::shape_mismatch(floor.shape(), texture.shape()));
    }
    Ok(Zip::from(&floor)
        .and(&texture)
        .map_collect(|&f, &t| if f > 0 { t } else { f }))
}

/// Tile `texture` by `reps` and blend it into the floor region.
///
/// The tiled pattern must come out exactly the size of `floor`.
pub fn apply_tiled_texture_to_floor(
    floor: ArrayView2<'_, u8>,
    texture: ArrayView2<'_, u8>,
    reps: (usize, usize),
) -> Result<Array2<u8>> {
    let tiled = tile_texture(texture, reps)?;
    apply_floor_texture_simple(floor, tiled.view())
}

/// Fill the masked region of a color image with a repeating texture.
///
/// The pattern is anchored at the top-left corner of the image and tiled far
/// enough to cover it. Pixels where `mask` is zero are copied unchanged.
pub fn fill_masked_region(
    image: ArrayView3<'_, u8>,
    mask: ArrayView2<'_, u8>,
    texture: ArrayView3<'_, u8>,
) -> Result<Array3<u8>> {
    let (h, w, channels) = image.dim();
    if mask.dim() != (h, w) {
        return Err(PageError::shape_mismatch(&[h, w], mask.shape()));
    }
    if texture.is_empty() {
        return Err(PageError::EmptyTexture);
    }
    let (th, tw, tc) = texture.dim();
    if tc != channels {
        return Err(PageError::shape_mismatch(&[th, tw, channels], texture.shape()));
    }

    let covered = mask.iter().filter(|&&m| m > 0).count();
    log::debug!(
        "Filling {} of {} pixels with a {}x{} texture",
        covered,
        h * w,
        tw,
        th
    );

    Ok(Array3::from_shape_fn((h, w, channels), |(y, x, c)| {
        if mask[[y, x]] > 0 {
            texture[[y % th, x % tw, c]]
        } else {
            image[[y, x, c]]
        }
    }))
}

/// Convert an RGB image to a `(height, width, 3)` array.
pub fn rgb_to_array(img: &RgbImage) -> Array3<u8> {
    let (w, h) = img.dimensions();
    Array3::from_shape_fn((h as usize, w as usize, 3), |(y, x, c)| {
        img.get_pixel(x as u32, y as u32)[c]
    })
}

/// Convert a `(height, width, 3)` array back to an RGB image.
pub fn array_to_rgb(array: ArrayView3<'_, u8>) -> Result<RgbImage> {
    let (h, w, channels) = array.dim();
    if channels != 3 {
        return Err(PageError::shape_mismatch(&[h, w, 3], array.shape()));
    }
    Ok(RgbImage::from_fn(w as u32, h as u32, |x, y| {
        let (x, y) = (x as usize, y as usize);
        Rgb([array[[y, x, 0]], array[[y, x, 1]], array[[y, x, 2]]])
    }))
}

/// Convert a grayscale image to a `(height, width)` array.
pub fn gray_to_array(img: &GrayImage) -> Array2<u8> {
    let (w, h) = img.dimensions();
    Array2::from_shape_fn((h as usize, w as usize), |(y, x)| {
        img.get_pixel(x as u32, y as u32)[0]
    })
}

/// Convert a `(height, width)` array to a grayscale image.
pub fn array_to_gray(array: ArrayView2<'_, u8>) -> GrayImage {
    let (h, w) = array.dim();
    GrayImage::from_fn(w as u32, h as u32, |x, y| {
        Luma([array[[y as usize, x as usize]]])
    })
}

/// Read a 2D floor mask from `.npy` bytes.
///
/// Boolean, `u8` and `f32` masks are accepted. The result holds 255 for floor
/// pixels and 0 elsewhere.
pub fn mask_from_npy(bytes: &[u8]) -> Result<Array2<u8>> {
    fn to_mask<T>(array: Array2<T>, is_set: impl Fn(&T) -> bool) -> Array2<u8> {
        array.map(|v| if is_set(v) { 255 } else { 0 })
    }

    fn rejected(dtype: &str, e: ReadNpyError) -> ReadNpyError {
        log::debug!("Mask is not a {} array: {}", dtype, e);
        e
    }

    let attempt: std::result::Result<Array2<u8>, ReadNpyError> =
        Array2::<bool>::read_npy(Cursor::new(bytes))
            .map(|a| to_mask(a, |&v| v))
            .or_else(|e| {
                rejected("bool", e);
                Array2::<u8>::read_npy(Cursor::new(bytes)).map(|a| to_mask(a, |&v| v > 0))
            })
            .or_else(|e| {
                rejected("u8", e);
                Array2::<f32>::read_npy(Cursor::new(bytes)).map(|a| to_mask(a, |&v| v > 0.0))
            })
            .map_err(|e| rejected("f32", e));

    let mask = attempt?;
    log::debug!("Loaded floor mask {:?}", mask.dim());
    Ok(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array, array};
    use ndarray_npy::WriteNpyExt;

    fn checkerboard() -> Array2<u8> {
        array![
            [255, 0, 255, 0],
            [0, 255, 0, 255],
            [255, 0, 255, 0],
            [0, 255, 0, 255]
        ]
    }

    #[test]
    fn test_tile_shape_and_values() {
        let texture = array![[1u8, 2, 3], [4, 5, 6]];
        let tiled = tile_texture(texture.view(), (2, 3)).unwrap();

        assert_eq!(tiled.dim(), (4, 9));
        assert_eq!(tiled[[0, 0]], 1);
        assert_eq!(tiled[[0, 3]], 1);
        assert_eq!(tiled[[1, 5]], 6);
        assert_eq!(tiled[[3, 8]], 6);
        assert_eq!(tiled[[2, 4]], 2);
    }

    #[test]
    fn test_tile_sizes() {
        let base = checkerboard();
        for (reps, expected) in [(2, 8), (5, 20), (10, 40)] {
            let tiled = tile_texture(base.view(), (reps, reps)).unwrap();
            assert_eq!(tiled.dim(), (expected, expected));
        }
    }

    #[test]
    fn test_tile_rejects_zero_and_empty() {
        let base = checkerboard();
        assert!(matches!(
            tile_texture(base.view(), (0, 3)),
            Err(PageError::ZeroRepeats)
        ));
        let empty = Array2::<u8>::zeros((0, 4));
        assert!(matches!(
            tile_texture(empty.view(), (2, 2)),
            Err(PageError::EmptyTexture)
        ));
    }

    #[test]
    fn test_tile_rgb_keeps_channels() {
        let texture = Array::from_shape_fn((2, 2, 3), |(y, x, c)| (y * 100 + x * 10 + c) as u8);
        let tiled = tile_texture_rgb(texture.view(), (3, 2)).unwrap();
        assert_eq!(tiled.dim(), (6, 4, 3));
        assert_eq!(tiled[[5, 3, 2]], texture[[1, 1, 2]]);
    }

    #[test]
    fn test_floor_mask_blend() {
        let mut floor = Array2::<u8>::zeros((400, 600));
        fill_rect(&mut floor, 200..350, 100..500, 128);
        let pattern = array![
            [200u8, 150, 200, 150],
            [150, 200, 150, 200],
            [200, 150, 200, 150],
            [150, 200, 150, 200]
        ];

        let result = apply_tiled_texture_to_floor(floor.view(), pattern.view(), (100, 150)).unwrap();

        assert_eq!(result.dim(), (400, 600));
        // Outside the floor stays untouched
        assert!(
            result
                .indexed_iter()
                .filter(|((y, _), _)| !(200..350).contains(y))
                .all(|(_, &v)| v == 0)
        );
        // Inside follows the pattern
        assert_eq!(result[[200, 100]], 200);
        assert_eq!(result[[200, 101]], 150);
        assert_eq!(result[[201, 100]], 150);
    }

    #[test]
    fn test_tiled_shape_must_match_floor() {
        let floor = Array2::<u8>::ones((10, 10));
        let err = apply_tiled_texture_to_floor(floor.view(), checkerboard().view(), (2, 2))
            .unwrap_err();
        assert!(matches!(err, PageError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_fill_masked_region() {
        let image = Array3::<u8>::from_elem((6, 7, 3), 9);
        let mut mask = Array2::<u8>::zeros((6, 7));
        fill_rect(&mut mask, 3..6, 1..6, 255);
        let texture = Array::from_shape_fn((2, 3, 3), |(y, x, _)| (10 + y * 3 + x) as u8);

        let out = fill_masked_region(image.view(), mask.view(), texture.view()).unwrap();

        assert_eq!(out.dim(), (6, 7, 3));
        for ((y, x, c), &v) in out.indexed_iter() {
            if mask[[y, x]] > 0 {
                assert_eq!(v, texture[[y % 2, x % 3, c]]);
            } else {
                assert_eq!(v, 9);
            }
        }
    }

    #[test]
    fn test_fill_masked_region_shape_checks() {
        let image = Array3::<u8>::zeros((4, 4, 3));
        let texture = Array3::<u8>::zeros((2, 2, 3));
        let bad_mask = Array2::<u8>::zeros((4, 5));
        assert!(fill_masked_region(image.view(), bad_mask.view(), texture.view()).is_err());

        let mask = Array2::<u8>::zeros((4, 4));
        let gray_texture = Array3::<u8>::zeros((2, 2, 1));
        assert!(fill_masked_region(image.view(), mask.view(), gray_texture.view()).is_err());
    }

    #[test]
    fn test_image_bridges() {
        let img = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 7]));
        let array = rgb_to_array(&img);
        assert_eq!(array.dim(), (2, 3, 3));
        assert_eq!(array[[1, 2, 0]], 2);
        assert_eq!(array[[1, 2, 1]], 1);
        assert_eq!(array_to_rgb(array.view()).unwrap(), img);

        let gray = array_to_gray(checkerboard().view());
        assert_eq!(gray.dimensions(), (4, 4));
        assert_eq!(gray_to_array(&gray), checkerboard());
    }

    #[test]
    fn test_array_to_rgb_needs_three_channels() {
        let array = Array3::<u8>::zeros((2, 2, 4));
        assert!(array_to_rgb(array.view()).is_err());
    }

    #[test]
    fn test_tile_overflow_is_error() {
        let base = checkerboard();
        assert!(matches!(
            tile_texture(base.view(), (usize::MAX / 2 + 1, 1)),
            Err(PageError::TileTooLarge { .. })
        ));

        let rgb = Array3::<u8>::zeros((2, 2, 3));
        assert!(matches!(
            tile_texture_rgb(rgb.view(), (1, usize::MAX / 2 + 1)),
            Err(PageError::TileTooLarge { .. })
        ));
    }

    #[test]
    fn test_fill_rect_clips_to_bounds() {
        let mut array = Array2::<u8>::zeros((3, 4));
        fill_rect(&mut array, 1..10, 2..4, 5);
        assert_eq!(array, array![[0, 0, 0, 0], [0, 0, 5, 5], [0, 0, 5, 5]]);
    }

    #[test]
    fn test_mask_from_npy_bool() {
        let mask = array![[true, false], [false, true]];
        let mut bytes = Vec::new();
        mask.write_npy(&mut bytes).unwrap();

        assert_eq!(mask_from_npy(&bytes).unwrap(), array![[255u8, 0], [0, 255]]);
    }

    #[test]
    fn test_mask_from_npy_u8() {
        let mask: Array2<u8> = array![[0, 7], [1, 0]];
        let mut bytes = Vec::new();
        mask.write_npy(&mut bytes).unwrap();

        assert_eq!(mask_from_npy(&bytes).unwrap(), array![[0u8, 255], [255, 0]]);
    }

    #[test]
    fn test_mask_from_npy_f32() {
        let mask: Array2<f32> = array![[0.0, 0.5], [-1.0, 2.0]];
        let mut bytes = Vec::new();
        mask.write_npy(&mut bytes).unwrap();

        assert_eq!(mask_from_npy(&bytes).unwrap(), array![[0u8, 255], [0, 255]]);
    }

    #[test]
    fn test_mask_from_npy_garbage() {
        assert!(matches!(
            mask_from_npy(b"not a numpy file"),
            Err(PageError::Npy(_))
        ));
    }
}
