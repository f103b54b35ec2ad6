use patchwork_schema::defaults::style_entries;
use patchwork_swatch::{make_rng, SwatchError, SwatchGenerator};

#[test]
fn writes_one_jpeg_per_style() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("sample_images");
    let styles = style_entries();

    let generator = SwatchGenerator::new(&out, 240, 85);
    let written = generator.generate_all(&styles, &mut make_rng(Some(42))).unwrap();

    assert_eq!(written.len(), styles.len());
    let mut names: Vec<String> = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names.len(), styles.len());
    for style in &styles {
        let name = format!("sample_{}.jpg", style.key);
        assert!(names.contains(&name), "missing {name}");
    }

    let decoded = image::open(out.join("sample_pop_art.jpg")).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (240, 240));
}

#[test]
fn equal_seeds_write_identical_files() {
    let styles = style_entries();
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    SwatchGenerator::new(a.path(), 200, 85)
        .generate_all(&styles, &mut make_rng(Some(9)))
        .unwrap();
    SwatchGenerator::new(b.path(), 200, 85)
        .generate_all(&styles, &mut make_rng(Some(9)))
        .unwrap();
    for style in &styles {
        let name = format!("sample_{}.jpg", style.key);
        let left = std::fs::read(a.path().join(&name)).unwrap();
        let right = std::fs::read(b.path().join(&name)).unwrap();
        assert_eq!(left, right, "{name} differs");
    }
}

#[test]
fn unwritable_output_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let err = SwatchGenerator::new(blocker.join("out"), 200, 85)
        .generate_all(&style_entries(), &mut make_rng(Some(1)))
        .unwrap_err();
    assert!(matches!(err, SwatchError::CreateDir { .. }));
}
