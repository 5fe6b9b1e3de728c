use crate::record::RecordCategory;

/// Classify a file by the extension after its last `.`, case-insensitively.
/// Names without an extension, or with one not in the table, are `Generic`.
pub fn classify(file_name: &str) -> RecordCategory {
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return RecordCategory::Generic;
    };
    match ext.to_lowercase().as_str() {
        "txt" | "md" => RecordCategory::Text,
        "png" | "jpg" | "jpeg" | "bmp" => RecordCategory::Image,
        "wav" | "mp3" => RecordCategory::Audio,
        "mp4" | "avi" | "mov" => RecordCategory::Video,
        _ => RecordCategory::Generic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_extensions() {
        let cases = [
            ("notes.txt", RecordCategory::Text),
            ("README.md", RecordCategory::Text),
            ("a.png", RecordCategory::Image),
            ("a.jpg", RecordCategory::Image),
            ("a.jpeg", RecordCategory::Image),
            ("a.bmp", RecordCategory::Image),
            ("a.wav", RecordCategory::Audio),
            ("a.mp3", RecordCategory::Audio),
            ("a.mp4", RecordCategory::Video),
            ("a.avi", RecordCategory::Video),
            ("a.mov", RecordCategory::Video),
        ];
        for (name, expected) in cases {
            assert_eq!(classify(name), expected, "classify({name})");
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("PHOTO.JPG"), RecordCategory::Image);
        assert_eq!(classify("Clip.MoV"), RecordCategory::Video);
    }

    #[test]
    fn test_last_dot_wins() {
        assert_eq!(classify("archive.txt.mp3"), RecordCategory::Audio);
        assert_eq!(classify("song.mp3.bak"), RecordCategory::Generic);
    }

    #[test]
    fn test_missing_or_unknown_extension() {
        assert_eq!(classify("Makefile"), RecordCategory::Generic);
        assert_eq!(classify(""), RecordCategory::Generic);
        assert_eq!(classify("trailing."), RecordCategory::Generic);
        assert_eq!(classify("data.xyz"), RecordCategory::Generic);
    }

    proptest! {
        #[test]
        fn prop_unlisted_extension_is_generic(stem in "[a-z]{1,8}", ext in "[a-z]{4,6}") {
            // No supported extension is 4+ letters except "jpeg".
            prop_assume!(ext != "jpeg");
            let name = format!("{stem}.{ext}");
            prop_assert_eq!(classify(&name), RecordCategory::Generic);
        }

        #[test]
        fn prop_classify_is_total(name in ".*") {
            let category = classify(&name);
            prop_assert!(RecordCategory::ALL.contains(&category));
        }
    }
}
