#![cfg(feature = "image")]

use chromacut::{
    ImageRef, Pipeline,
    deps::image::{Rgb, RgbImage},
    luminance,
};

#[test]
fn rgb_image_round_trip_through_pipeline() {
    // A 16x16 image with four solid quadrants.
    let image = RgbImage::from_fn(16, 16, |x, y| match (x < 8, y < 8) {
        (true, true) => Rgb([220, 30, 30]),
        (false, true) => Rgb([30, 220, 30]),
        (true, false) => Rgb([30, 30, 220]),
        (false, false) => Rgb([230, 230, 230]),
    });
    let image = ImageRef::try_from(&image).unwrap();
    assert_eq!(image.dimensions(), (16, 16));

    let mut pipeline = Pipeline::new();
    let colors = pipeline.process(image);

    assert_eq!(colors.unique_colors().len(), 4);
    assert_eq!(colors.palette().len(), 4);
    for pair in colors.palette().windows(2) {
        assert!(luminance(pair[0]) <= luminance(pair[1]));
    }
}

#[test]
fn empty_rgb_image_is_degenerate_not_an_error() {
    let image = RgbImage::new(0, 0);
    let image = ImageRef::try_from(&image).unwrap();

    let mut pipeline = Pipeline::new();
    let colors = pipeline.process(image);
    assert!(colors.unique_colors().is_empty());
    assert!(colors.palette().is_empty());
}
