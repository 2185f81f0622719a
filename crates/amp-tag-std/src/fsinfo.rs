//! FsInfo: filesystem metadata carried by a cell.

use std::time::SystemTime;

use amp_tag_core::{timestamp_field, Spec, StoreRecord, Tag};
use serde::{Deserialize, Serialize};

use crate::attrs::attr_spec;

/// Maximum length of [`FsInfo::name`], in bytes.
pub const MAX_NAME_LEN: usize = 255;

/// Maximum length of [`FsInfo::mime_type`], in bytes.
pub const MAX_MIME_TYPE_LEN: usize = 127;

/// Filesystem metadata. Time fields hold Time-Tag component 0 (Unix
/// microseconds).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsInfo {
    pub item_type: String,
    pub mime_type: String,
    pub name: String,
    pub is_dir: bool,
    pub mode: u32,
    pub byte_size: i64,
    pub created_at: i64,
    pub modified_at: i64,
}

impl FsInfo {
    pub fn set_created_at(&mut self, t: SystemTime) {
        self.created_at = timestamp_field(t);
    }

    pub fn set_modified_at(&mut self, t: SystemTime) {
        self.modified_at = timestamp_field(t);
    }

    pub fn created_at_time(&self) -> Option<SystemTime> {
        Tag::new(self.created_at.max(0) as u64, 0, 0, 0).to_system_time()
    }

    pub fn modified_at_time(&self) -> Option<SystemTime> {
        Tag::new(self.modified_at.max(0) as u64, 0, 0, 0).to_system_time()
    }
}

impl StoreRecord for FsInfo {
    fn spec() -> Spec {
        attr_spec().with("FSInfo")
    }

    fn check(&self) -> Result<(), String> {
        if self.name.len() > MAX_NAME_LEN {
            return Err(format!(
                "name is {} bytes, max {}",
                self.name.len(),
                MAX_NAME_LEN
            ));
        }
        if self.mime_type.len() > MAX_MIME_TYPE_LEN {
            return Err(format!(
                "mime type is {} bytes, max {}",
                self.mime_type.len(),
                MAX_MIME_TYPE_LEN
            ));
        }
        if self.byte_size < 0 {
            return Err(format!("negative byte size {}", self.byte_size));
        }
        Ok(())
    }
}
