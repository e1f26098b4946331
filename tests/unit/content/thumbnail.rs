use super::*;
use std::io::Cursor;

fn png_bytes() -> Vec<u8> {
    let img = image::RgbaImage::from_raw(1, 1, vec![1u8, 2u8, 3u8, 255u8]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn local_path_sanitizes_ids() {
    let mirror = ThumbnailMirror::new(reqwest::Client::new(), "/tmp/thumbs");
    assert_eq!(
        mirror.local_path("2a3b-c/../d"),
        PathBuf::from("/tmp/thumbs/2a3b-c____d.png")
    );
}

#[test]
fn persist_writes_decodable_png() {
    let dir = tempfile::tempdir().unwrap();
    let mirror = ThumbnailMirror::new(reqwest::Client::new(), dir.path().join("thumbs"));
    let path = mirror.persist("e1", &png_bytes()).unwrap();
    let back = image::open(&path).unwrap();
    assert_eq!(back.width(), 1);
}

#[test]
fn persist_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let mirror = ThumbnailMirror::new(reqwest::Client::new(), dir.path());
    assert!(mirror.persist("e1", b"not an image").is_err());
}

#[tokio::test]
async fn unreachable_thumbnail_falls_back_to_remote_url() {
    let dir = tempfile::tempdir().unwrap();
    let mirror = ThumbnailMirror::new(reqwest::Client::new(), dir.path());
    let url = "http://127.0.0.1:9/thumb.png";
    assert_eq!(mirror.resolve("e1", url).await, url);
}
