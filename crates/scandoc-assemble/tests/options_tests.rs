use scandoc_assemble::*;

#[test]
fn defaults_are_a4_portrait_centered() {
    let options = AssembleOptions::default();
    assert_eq!(options.page_size, PageSize::A4);
    assert_eq!(options.orientation, Orientation::Portrait);
    assert_eq!(options.placement, PlacementPolicy::Centered);
    assert_eq!(options.page_dimensions_pt(), (595.0, 842.0));
}

#[test]
fn custom_page_size_converts_from_mm() {
    let (w, h) = PageSize::custom_mm(210.0, 297.0).dimensions_pt();
    // A4 in mm lands within a point of the standard point values
    assert!((w - 595.0).abs() < 1.0);
    assert!((h - 842.0).abs() < 1.0);
}

#[test]
fn orientation_swaps_dimensions() {
    let options = AssembleOptions {
        page_size: PageSize::Letter,
        orientation: Orientation::Landscape,
        ..Default::default()
    };
    assert_eq!(options.page_dimensions_pt(), (792.0, 612.0));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn options_round_trip_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.json");

    let options = AssembleOptions {
        page_size: PageSize::Custom {
            width_pt: 500.0,
            height_pt: 700.0,
        },
        orientation: Orientation::Portrait,
        placement: PlacementPolicy::Origin,
        title: Some("Receipts".to_string()),
    };

    options.save(&path).await.unwrap();
    let loaded = AssembleOptions::load(&path).await.unwrap();
    assert_eq!(loaded, options);
}
