//! Persistence tests: the save path writes only validated documents.

#[cfg(test)]
mod tests {
    use std::fs;

    use merchfeed_xml::save;

    use crate::sample_feed;

    #[test]
    fn test_should_write_validated_feed_to_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("feed.xml");

        save(&sample_feed(), &path).expect("save should succeed");

        let written = fs::read_to_string(&path).expect("file exists");
        assert!(written.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(written.ends_with("</ProductFeed>"));
    }

    #[test]
    fn test_should_write_byte_identical_documents() {
        let dir = tempfile::tempdir().expect("temp dir");
        let first_path = dir.path().join("first.xml");
        let second_path = dir.path().join("second.xml");

        let feed = sample_feed();
        save(&feed, &first_path).expect("save should succeed");
        save(&feed, &second_path).expect("save should succeed");

        let first = fs::read(&first_path).expect("first file");
        let second = fs::read(&second_path).expect("second file");
        assert_eq!(first, second);
    }

    #[test]
    fn test_should_leave_no_file_behind_on_gate_failure() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("feed.xml");

        let mut feed = sample_feed();
        feed.items_mut()[0].set_title("&amp;bull;");

        let err = save(&feed, &path).expect_err("malformed feed must not save");
        assert_eq!(err.to_string(), "Entity 'bull' not defined");
        assert!(!path.exists(), "nothing written on failure");
    }
}
