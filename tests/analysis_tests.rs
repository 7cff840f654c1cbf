use rstest::*;
use veil::signatures::{BMP_SIGNATURE, GIF_SIGNATURE, JPEG_SIGNATURE, PNG_SIGNATURE};
use veil::{ImageFormat, ScanOptions, SourceImage, analyze, analyze_with, build};

/// An image-like buffer: the signature followed by zero padding.
fn image(prefix: &[u8], len: usize) -> Vec<u8> {
    let mut data = prefix.to_vec();
    data.resize(len, 0);
    data
}

#[rstest]
fn test_png_then_jpeg_scenario() {
    let mut data = PNG_SIGNATURE.to_vec();
    data.extend_from_slice(&[0u8; 1200]);
    data.extend_from_slice(&JPEG_SIGNATURE);
    data.extend_from_slice(&[0u8; 50]);

    let report = analyze(&data);
    assert_eq!(report.total_len(), 1261);
    assert!(report.is_composite());

    let regions = report.regions();
    assert_eq!(regions.len(), 2);

    assert_eq!(regions[0].index, 1);
    assert_eq!(regions[0].format, ImageFormat::Png);
    assert_eq!(regions[0].start, 0);
    assert_eq!(regions[0].len(), 1208);

    assert_eq!(regions[1].index, 2);
    assert_eq!(regions[1].format, ImageFormat::Jpeg);
    assert_eq!(regions[1].start, 1208);
    assert_eq!(regions[1].len(), 53);
    assert_eq!(regions[1].end, data.len());
}

#[rstest]
fn test_no_signature_scenario() {
    let report = analyze(&[0u8; 10]);
    assert!(report.regions().is_empty());
    assert!(!report.is_composite());
    assert_eq!(report.total_len(), 10);
}

#[rstest]
fn test_single_image_is_not_composite() {
    let report = analyze(&image(&GIF_SIGNATURE, 5000));
    assert_eq!(report.regions().len(), 1);
    assert!(!report.is_composite());
    assert_eq!(report.regions()[0].len(), 5000);
}

#[rstest]
#[case(&PNG_SIGNATURE, &JPEG_SIGNATURE, ImageFormat::Png, ImageFormat::Jpeg)]
#[case(&JPEG_SIGNATURE, &PNG_SIGNATURE, ImageFormat::Jpeg, ImageFormat::Png)]
#[case(&GIF_SIGNATURE, &BMP_SIGNATURE, ImageFormat::Gif, ImageFormat::Bmp)]
#[case(&BMP_SIGNATURE, &GIF_SIGNATURE, ImageFormat::Bmp, ImageFormat::Gif)]
fn test_built_container_has_two_regions(
    #[case] first: &[u8],
    #[case] second: &[u8],
    #[case] first_format: ImageFormat,
    #[case] second_format: ImageFormat,
) {
    let a = image(first, 2400);
    let b = image(second, 1800);
    let built = build(&SourceImage::sniffed(a.clone()), &SourceImage::sniffed(b.clone()));

    let report = analyze(&built.bytes);
    let regions = report.regions();
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].format, first_format);
    assert_eq!(regions[1].format, second_format);
    assert_eq!(regions[0].range(), 0..a.len());
    assert_eq!(regions[1].range(), a.len()..a.len() + b.len());
}

#[rstest]
fn test_region_cap_stops_at_ten() {
    let data: Vec<u8> = (0..12).flat_map(|_| image(&PNG_SIGNATURE, 1500)).collect();

    let report = analyze(&data);
    assert_eq!(report.regions().len(), 10);
    assert_eq!(report.regions()[9].index, 10);
    assert_eq!(report.regions()[9].start, 9 * 1500);
    assert_eq!(report.regions()[9].end, 10 * 1500);
    assert_eq!(report.total_len(), 12 * 1500);
}

#[rstest]
fn test_region_cap_is_configurable() {
    let data: Vec<u8> = (0..12).flat_map(|_| image(&JPEG_SIGNATURE, 1500)).collect();

    let report = analyze_with(&data, &ScanOptions::default().with_max_regions(12));
    assert_eq!(report.regions().len(), 12);
    assert_eq!(report.regions()[11].end, data.len());
}

#[rstest]
fn test_regions_are_ordered_and_disjoint() {
    let mut data = image(&PNG_SIGNATURE, 1300);
    data.extend(image(&GIF_SIGNATURE, 2500));
    data.extend(image(&BMP_SIGNATURE, 1100));

    let report = analyze(&data);
    let regions = report.regions();
    assert_eq!(regions.len(), 3);
    for pair in regions.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    assert_eq!(regions.iter().map(|r| r.len()).sum::<usize>(), data.len());
}

#[rstest]
fn test_small_image_merges_into_next_region() {
    // A 400-byte first image is shorter than the gap, so the search for its
    // end starts inside the second image and the two are reported as one.
    let mut data = image(&JPEG_SIGNATURE, 400);
    data.extend(image(&PNG_SIGNATURE, 1600));

    let report = analyze(&data);
    assert_eq!(report.regions().len(), 1);
    assert_eq!(report.regions()[0].format, ImageFormat::Jpeg);
    assert_eq!(report.regions()[0].len(), 2000);
}

#[rstest]
fn test_signature_bytes_inside_payload_are_ignored_within_gap() {
    let mut data = image(&PNG_SIGNATURE, 3000);
    data[300..302].copy_from_slice(&BMP_SIGNATURE);
    data[700..703].copy_from_slice(&JPEG_SIGNATURE);

    let report = analyze(&data);
    assert_eq!(report.regions().len(), 1);
    assert_eq!(report.regions()[0].len(), 3000);
}

#[rstest]
fn test_zero_gap_still_advances() {
    let mut data = image(&PNG_SIGNATURE, 2000);
    data.extend(image(&JPEG_SIGNATURE, 3000));

    let options = ScanOptions::default().with_min_gap(0);
    assert_eq!(options.min_gap(), 1);

    let report = analyze_with(&data, &options);
    let regions = report.regions();
    assert_eq!(regions.len(), 2);
    assert!(regions.iter().all(|r| !r.is_empty()));
    for pair in regions.windows(2) {
        assert!(pair[0].start < pair[1].start);
        assert_eq!(pair[0].end, pair[1].start);
    }
    assert_eq!(regions[0].range(), 0..2000);
    assert_eq!(regions[1].format, ImageFormat::Jpeg);
    assert_eq!(regions[1].range(), 2000..5000);
}
