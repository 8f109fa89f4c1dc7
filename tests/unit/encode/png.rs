use super::*;
use crate::encode::sink::SinkConfig;
use crate::foundation::core::Fps;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "banim_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn frame(rgba: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data: [rgba, rgba].concat(),
        premultiplied: true,
    }
}

#[test]
fn file_names_are_zero_padded() {
    assert_eq!(PngSequenceSink::frame_file_name(0), "frame_00000.png");
    assert_eq!(PngSequenceSink::frame_file_name(42), "frame_00042.png");
}

#[test]
fn sequence_writes_numbered_pngs() {
    let dir = temp_dir("png_sequence");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(SinkConfig {
        width: 2,
        height: 1,
        fps: Fps::new(24, 1).unwrap(),
    })
    .unwrap();
    sink.push_frame(&frame([255, 0, 0, 255])).unwrap();
    sink.push_frame(&frame([128, 0, 0, 128])).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written().len(), 2);
    assert!(dir.join("frame_00000.png").is_file());
    assert!(dir.join("frame_00001.png").is_file());

    let img = image::open(dir.join("frame_00001.png")).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 128]);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn push_before_begin_fails() {
    let mut sink = PngSequenceSink::new(temp_dir("png_unbegun"));
    assert!(sink.push_frame(&frame([0, 0, 0, 255])).is_err());
    assert!(sink.written().is_empty());
}
