//! Seed files: a JSON array of circles used to initialize a registry.
//!
//! ```json
//! [
//!   { "place": "A-11a", "artist_name": "...", "reference_id": "11",
//!     "direction": "East", "priority": "High" }
//! ]
//! ```
//!
//! Seeds are read once at startup. Nothing is ever written back.

use crate::error::Result;
use crate::model::NewCircle;
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<Vec<NewCircle>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let circles = parse_seed(&content)?;
    debug!(path = %path.display(), count = circles.len(), "loaded seed file");
    Ok(circles)
}

pub fn parse_seed(content: &str) -> Result<Vec<NewCircle>> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CircleError;
    use crate::model::Priority;

    #[test]
    fn parses_seed_array() {
        let json = r#"[
            {"place": "A-1a", "artist_name": "One", "reference_id": "r1",
             "direction": "East", "priority": "High"},
            {"place": "B-2b", "artist_name": "Two", "reference_id": "r2",
             "direction": "West", "priority": "whenever"}
        ]"#;

        let circles = parse_seed(json).unwrap();
        assert_eq!(circles.len(), 2);
        assert_eq!(circles[0].priority, Priority::High);
        assert_eq!(circles[1].priority, Priority::Unranked("whenever".into()));
    }

    #[test]
    fn empty_array_is_a_valid_seed() {
        assert!(parse_seed("[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_seed_is_a_serialization_error() {
        assert!(matches!(
            parse_seed(r#"[{"place": "A-1a"}]"#),
            Err(CircleError::Serialization(_))
        ));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        fs::write(
            &path,
            r#"[{"place": "A-1a", "artist_name": "One", "reference_id": "r1",
                 "direction": "East", "priority": "Low"}]"#,
        )
        .unwrap();

        let circles = load_seed(&path).unwrap();
        assert_eq!(circles[0].artist_name, "One");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_seed(dir.path().join("nope.json")),
            Err(CircleError::Io(_))
        ));
    }
}
