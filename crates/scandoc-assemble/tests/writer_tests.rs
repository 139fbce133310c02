use scandoc_assemble::{DocumentWriter, ImageInfo, Placement, compose, probe};
use scandoc_assemble::PlacementPolicy;

fn number(obj: &lopdf::Object) -> f32 {
    match obj {
        lopdf::Object::Integer(i) => *i as f32,
        lopdf::Object::Real(r) => *r,
        other => panic!("not a number: {:?}", other),
    }
}

fn jpeg_fixture(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 180, 160]));
    let mut bytes = Vec::new();
    img.write_with_encoder(image::codecs::jpeg::JpegEncoder::new(&mut bytes))
        .unwrap();
    bytes
}

fn probed(bytes: &[u8]) -> ImageInfo {
    probe("fixture", bytes).unwrap()
}

fn fit(info: &ImageInfo) -> Placement {
    compose(info.width, info.height, 595.0, 842.0, PlacementPolicy::Centered).unwrap()
}

#[test]
fn writes_a_well_formed_document() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.pdf");

    let mut writer = DocumentWriter::create(&target, 595.0, 842.0, None).unwrap();
    for (w, h) in [(800, 600), (1200, 1600)] {
        let bytes = jpeg_fixture(w, h);
        let info = probed(&bytes);
        let placement = fit(&info);
        writer.add_page(bytes, &info, &placement).unwrap();
    }
    assert_eq!(writer.page_count(), 2);

    let written = writer.finalize().unwrap();
    assert_eq!(written, target);

    let doc = lopdf::Document::load(&target).unwrap();
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 2);

    for (_, page_id) in pages {
        let page = doc.get_dictionary(page_id).unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
        assert_eq!(number(&media_box[2]), 595.0);
        assert_eq!(number(&media_box[3]), 842.0);

        let content = doc.get_page_content(page_id).unwrap();
        let content = String::from_utf8(content).unwrap();
        assert!(content.contains("cm /Im0 Do"));
    }
}

#[test]
fn embeds_capture_bytes_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.pdf");

    let bytes = jpeg_fixture(640, 480);
    let info = probed(&bytes);
    let placement = fit(&info);

    let mut writer = DocumentWriter::create(&target, 595.0, 842.0, None).unwrap();
    writer.add_page(bytes.clone(), &info, &placement).unwrap();
    writer.finalize().unwrap();

    let doc = lopdf::Document::load(&target).unwrap();
    let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
    let page = doc.get_dictionary(page_id).unwrap();
    let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
    let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
    let image_ref = xobjects.get(b"Im0").unwrap().as_reference().unwrap();
    let stream = doc.get_object(image_ref).unwrap().as_stream().unwrap();

    assert_eq!(stream.dict.get(b"Filter").unwrap().as_name().unwrap(), b"DCTDecode");
    assert_eq!(stream.dict.get(b"Width").unwrap().as_i64().unwrap(), 640);
    assert_eq!(stream.dict.get(b"Height").unwrap().as_i64().unwrap(), 480);
    assert_eq!(
        stream.dict.get(b"ColorSpace").unwrap().as_name().unwrap(),
        b"DeviceRGB"
    );
    // The embedded stream is the input encoding, byte for byte.
    assert_eq!(stream.content, bytes);
}

#[test]
fn dropped_writer_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.pdf");

    {
        let bytes = jpeg_fixture(100, 100);
        let info = probed(&bytes);
        let placement = fit(&info);
        let mut writer = DocumentWriter::create(&target, 595.0, 842.0, None).unwrap();
        writer.add_page(bytes, &info, &placement).unwrap();
        // Dropped without finalize: simulates an aborted assembly.
    }

    assert!(!target.exists());
    // The temp file is cleaned up as well.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn title_lands_in_info_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.pdf");

    let bytes = jpeg_fixture(100, 100);
    let info = probed(&bytes);
    let placement = fit(&info);

    let mut writer =
        DocumentWriter::create(&target, 595.0, 842.0, Some("Field Notes".to_string())).unwrap();
    writer.add_page(bytes, &info, &placement).unwrap();
    writer.finalize().unwrap();

    let doc = lopdf::Document::load(&target).unwrap();
    let info_ref = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let info_dict = doc.get_dictionary(info_ref).unwrap();
    match info_dict.get(b"Title").unwrap() {
        lopdf::Object::String(bytes, _) => assert_eq!(bytes, b"Field Notes"),
        other => panic!("not a string: {:?}", other),
    }
}

#[test]
fn create_fails_in_unwritable_directory() {
    let missing = std::path::Path::new("/nonexistent-scandoc-dir/out.pdf");
    let err = DocumentWriter::create(missing, 595.0, 842.0, None).unwrap_err();
    assert!(matches!(err, scandoc_assemble::AssembleError::Write(_)));
}
