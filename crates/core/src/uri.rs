//! Request path construction
//!
//! Every control-plane request the client can issue is one of a closed set
//! of operation shapes. Rendering a path is a pure function of the variant,
//! so the full request surface can be tested without a transport.

use crate::entry::{EntryPath, encode_segment};

/// One resource-service operation, rendered to its request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsOp {
    /// Resolve a download descriptor for an object
    Get(EntryPath),
    /// Metadata snapshot of an object
    Stat(EntryPath),
    /// Remove an object
    Delete(EntryPath),
    /// Copy `src` to `dest`; `force` permits overwriting `dest`
    Copy {
        src: EntryPath,
        dest: EntryPath,
        force: bool,
    },
    /// Move `src` to `dest`; `force` permits overwriting `dest`
    Move {
        src: EntryPath,
        dest: EntryPath,
        force: bool,
    },
    /// Change an object's stored MIME type
    ChangeMime { entry: EntryPath, mime: String },
    /// Change an object's storage type code
    ChangeType { entry: EntryPath, file_type: i32 },
    /// Schedule deletion a number of days from now
    DeleteAfterDays { entry: EntryPath, days: u32 },
    /// Ask the service to pull the object from its upstream source
    Prefetch(EntryPath),
}

impl RsOp {
    /// Render the request path, without scheme or host.
    ///
    /// Entry segments and MIME strings are base64 encoded; integer values
    /// (`type`, day counts) are raw decimal digits, and the force flag is the
    /// literal `true` or `false`.
    pub fn to_path(&self) -> String {
        match self {
            RsOp::Get(entry) => format!("/get/{}", entry.encode()),
            RsOp::Stat(entry) => format!("/stat/{}", entry.encode()),
            RsOp::Delete(entry) => format!("/delete/{}", entry.encode()),
            RsOp::Prefetch(entry) => format!("/prefetch/{}", entry.encode()),
            RsOp::Copy { src, dest, force } => {
                format!("/copy/{}/{}/force/{}", src.encode(), dest.encode(), force)
            }
            RsOp::Move { src, dest, force } => {
                format!("/move/{}/{}/force/{}", src.encode(), dest.encode(), force)
            }
            RsOp::ChangeMime { entry, mime } => {
                format!("/chgm/{}/mime/{}", entry.encode(), encode_segment(mime))
            }
            RsOp::ChangeType { entry, file_type } => {
                format!("/chtype/{}/type/{}", entry.encode(), file_type)
            }
            RsOp::DeleteAfterDays { entry, days } => {
                format!("/deleteAfterDays/{}/{}", entry.encode(), days)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(bucket: &str, key: &str) -> EntryPath {
        EntryPath::new(bucket, key)
    }

    #[test]
    fn test_single_entry_paths() {
        assert_eq!(RsOp::Stat(entry("b", "k")).to_path(), "/stat/Yjpr");
        assert_eq!(RsOp::Delete(entry("b", "k")).to_path(), "/delete/Yjpr");
        assert_eq!(RsOp::Get(entry("b", "k")).to_path(), "/get/Yjpr");
        assert_eq!(RsOp::Prefetch(entry("b", "k")).to_path(), "/prefetch/Yjpr");
    }

    #[test]
    fn test_copy_path_carries_force_flag() {
        let forced = RsOp::Copy {
            src: entry("b1", "k1"),
            dest: entry("b2", "k2"),
            force: true,
        };
        assert_eq!(forced.to_path(), "/copy/YjE6azE=/YjI6azI=/force/true");

        let unforced = RsOp::Copy {
            src: entry("b1", "k1"),
            dest: entry("b2", "k2"),
            force: false,
        };
        assert!(unforced.to_path().ends_with("/force/false"));
    }

    #[test]
    fn test_move_path_shape() {
        let op = RsOp::Move {
            src: entry("b1", "k1"),
            dest: entry("b2", "k2"),
            force: false,
        };
        assert_eq!(op.to_path(), "/move/YjE6azE=/YjI6azI=/force/false");
    }

    #[test]
    fn test_change_mime_encodes_mime_string() {
        let op = RsOp::ChangeMime {
            entry: entry("b", "k"),
            mime: "image/png".into(),
        };
        assert_eq!(op.to_path(), "/chgm/Yjpr/mime/aW1hZ2UvcG5n");
    }

    #[test]
    fn test_change_type_keeps_raw_decimal() {
        let op = RsOp::ChangeType {
            entry: entry("b", "k"),
            file_type: 7,
        };
        let path = op.to_path();
        assert!(path.ends_with("type/7"));
        assert_eq!(path, "/chtype/Yjpr/type/7");
    }

    #[test]
    fn test_delete_after_days_has_no_label() {
        let op = RsOp::DeleteAfterDays {
            entry: entry("b", "k"),
            days: 30,
        };
        assert_eq!(op.to_path(), "/deleteAfterDays/Yjpr/30");
    }

    #[test]
    fn test_rendering_is_pure() {
        let op = RsOp::Stat(entry("photos", "a.jpg"));
        assert_eq!(op.to_path(), op.to_path());
        assert_eq!(op.to_path(), "/stat/cGhvdG9zOmEuanBn");
    }
}
