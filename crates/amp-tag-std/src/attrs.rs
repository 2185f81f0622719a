//! Standard attribute identifiers.
//!
//! Every identifier here is derived, not assigned: any process that derives
//! the same path gets the same Tag.

use std::sync::OnceLock;

use amp_tag_core::{Spec, Tag};

fn cached_spec(cell: &'static OnceLock<Spec>, derive: impl FnOnce() -> Spec) -> Spec {
    cell.get_or_init(derive).clone()
}

fn cached_id(cell: &'static OnceLock<Tag>, derive: impl FnOnce() -> Tag) -> Tag {
    *cell.get_or_init(derive)
}

/// Namespace for attribute types: `Root / AttrSpec`.
pub fn attr_spec() -> Spec {
    static SPEC: OnceLock<Spec> = OnceLock::new();
    cached_spec(&SPEC, || Spec::root().with("AttrSpec"))
}

/// Namespace for cell properties: `Root / cell-property`.
pub fn cell_property() -> Spec {
    static SPEC: OnceLock<Spec> = OnceLock::new();
    cached_spec(&SPEC, || Spec::root().with("cell-property"))
}

/// `AttrSpec.Login`: a login request.
pub fn login() -> Tag {
    static ID: OnceLock<Tag> = OnceLock::new();
    cached_id(&ID, || attr_spec().with("Login").id())
}

/// `AttrSpec.LoginChallenge`: see [`crate::LoginChallenge`].
pub fn login_challenge() -> Tag {
    static ID: OnceLock<Tag> = OnceLock::new();
    cached_id(&ID, || attr_spec().with("LoginChallenge").id())
}

/// `AttrSpec.LoginResponse`: see [`crate::LoginResponse`].
pub fn login_response() -> Tag {
    static ID: OnceLock<Tag> = OnceLock::new();
    cached_id(&ID, || attr_spec().with("LoginResponse").id())
}

/// `AttrSpec.LoginCheckpoint`: a session checkpoint after a successful login.
pub fn login_checkpoint() -> Tag {
    static ID: OnceLock<Tag> = OnceLock::new();
    cached_id(&ID, || attr_spec().with("LoginCheckpoint").id())
}

/// Children of a cell. The `TagID` suffix marks that the series index holds
/// a cell ID.
pub fn cell_children() -> Spec {
    static SPEC: OnceLock<Spec> = OnceLock::new();
    cached_spec(&SPEC, || attr_spec().with("children.TagID"))
}

/// Property set of a cell.
pub fn cell_properties() -> Spec {
    static SPEC: OnceLock<Spec> = OnceLock::new();
    cached_spec(&SPEC, || attr_spec().with("cell-properties"))
}

/// `AttrSpec.LaunchURL`: a URL to open for a cell.
pub fn launch_url() -> Tag {
    static ID: OnceLock<Tag> = OnceLock::new();
    cached_id(&ID, || attr_spec().with("LaunchURL").id())
}

/// Display label of a cell.
pub fn cell_label() -> Tag {
    static ID: OnceLock<Tag> = OnceLock::new();
    cached_id(&ID, || cell_property().with("text.Tag.label").id())
}

/// One-line caption of a cell.
pub fn cell_caption() -> Tag {
    static ID: OnceLock<Tag> = OnceLock::new();
    cached_id(&ID, || cell_property().with("text.Tag.caption").id())
}

/// Longer synopsis of a cell.
pub fn cell_synopsis() -> Tag {
    static ID: OnceLock<Tag> = OnceLock::new();
    cached_id(&ID, || cell_property().with("text.Tag.synopsis").id())
}

/// Name of the collection a cell belongs to.
pub fn cell_collection() -> Tag {
    static ID: OnceLock<Tag> = OnceLock::new();
    cached_id(&ID, || cell_property().with("text.Tag.collection").id())
}

/// Glyphs (icons) of a cell.
pub fn cell_glyphs() -> Tag {
    static ID: OnceLock<Tag> = OnceLock::new();
    cached_id(&ID, || cell_property().with("Tag.glyphs").id())
}

/// Link to a cell's primary content.
pub fn cell_content_link() -> Tag {
    static ID: OnceLock<Tag> = OnceLock::new();
    cached_id(&ID, || cell_property().with("content-link").id())
}

/// Author of a cell.
pub fn cell_author() -> Tag {
    static ID: OnceLock<Tag> = OnceLock::new();
    cached_id(&ID, || cell_property().with("author").id())
}

/// Links from a cell to outside resources.
pub fn cell_external_links() -> Tag {
    static ID: OnceLock<Tag> = OnceLock::new();
    cached_id(&ID, || cell_property().with("external-link").id())
}

/// File metadata of a cell; see [`crate::FsInfo`].
pub fn cell_file_info() -> Tag {
    static ID: OnceLock<Tag> = OnceLock::new();
    cached_id(&ID, || cell_property().with("FileInfo").id())
}

/// Portrait image of a cell.
pub fn cell_portrait() -> Tag {
    static ID: OnceLock<Tag> = OnceLock::new();
    cached_id(&ID, || cell_property().with("portrait").id())
}

/// URL prefix for a glyph, typically followed by a media (mime) type.
pub const GENERIC_GLYPH_URL: &str = "amp:glyph/";

/// Media types matching any image, audio or video format.
pub const GENERIC_IMAGE_TYPE: &str = "image/*";
pub const GENERIC_AUDIO_TYPE: &str = "audio/*";
pub const GENERIC_VIDEO_TYPE: &str = "video/*";

/// Glyph URL for a folder.
pub fn generic_folder_glyph_url() -> String {
    format!("{}application/x-directory", GENERIC_GLYPH_URL)
}

/// An attribute that can be pinned to a cell by its Spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnableAttr {
    pub spec: Spec,
}

impl PinnableAttr {
    /// Pin attributes bound to `spec`.
    pub fn new(spec: Spec) -> Self {
        Self { spec }
    }

    /// The pinned attribute's ID.
    pub fn id(&self) -> Tag {
        self.spec.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_login_id_is_published_value() {
        assert_eq!(
            login().to_hex(),
            "cfaff3e2d45b00720a09210fd350b40457c12fbcc84cb6f565c3fe537e1a7ff0"
        );
    }

    #[test]
    fn test_cell_label_is_published_value() {
        assert_eq!(
            cell_label().to_hex(),
            "b4f04fd4445199fb68c408d6e29a0f99f9e3e93cd2004746316bc802318291f3"
        );
    }

    #[test]
    fn test_all_ids_distinct() {
        let ids = [
            login(),
            login_challenge(),
            login_response(),
            login_checkpoint(),
            cell_children().id(),
            cell_properties().id(),
            launch_url(),
            cell_label(),
            cell_caption(),
            cell_synopsis(),
            cell_collection(),
            cell_glyphs(),
            cell_content_link(),
            cell_author(),
            cell_external_links(),
            cell_file_info(),
            cell_portrait(),
        ];
        let unique: HashSet<Tag> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_label_nested_under_text_tag() {
        let text_tag = cell_property().with("text").with("tag");
        assert_eq!(text_tag.with("label").id(), cell_label());
        assert_eq!(cell_children().path(), "attrspec.children.tagid");
    }

    #[test]
    fn test_cached_ids_match_fresh_derivation() {
        assert!(Spec::ptr_eq(&attr_spec(), &attr_spec()));
        assert!(Spec::ptr_eq(&attr_spec(), &Spec::root().with("AttrSpec")));
        assert!(Spec::ptr_eq(&cell_children(), &cell_children()));
        assert_eq!(login(), Spec::root().with("attrspec.login").id());
        assert_eq!(
            cell_portrait(),
            Spec::root().with("cell-property").with("portrait").id()
        );
        assert_eq!(login_checkpoint(), login_checkpoint());
    }

    #[test]
    fn test_folder_glyph_url() {
        assert_eq!(generic_folder_glyph_url(), "amp:glyph/application/x-directory");
    }

    #[test]
    fn test_pinnable_attr() {
        let pin = PinnableAttr::new(cell_properties());
        assert_eq!(pin.id(), cell_properties().id());
    }
}
