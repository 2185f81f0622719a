//! Spec: a hierarchical namespace node with a content-addressed identity.
//!
//! A Spec's ID is derived purely from its parent's ID and its canonical name,
//! so independent processes agree on every ID without coordination:
//!
//! ```text
//! root.id  = BLAKE3("amp.tag.root/v1")
//! child.id = BLAKE3("amp.tag.spec/v1\0" || parent.id (32 bytes, big-endian) || segment)
//! ```
//!
//! The 32-byte digest becomes a [`Tag`] by reading four big-endian `u64`s.
//! Changing either domain string is a breaking change to every ID.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock, PoisonError, RwLock, Weak};

use crate::error::TagError;
use crate::tag::Tag;
use crate::validation::canonical_segments;

/// Domain prefix for child derivation.
pub const SPEC_DOMAIN: &[u8] = b"amp.tag.spec/v1\0";

/// Seed hashed to produce the root ID.
pub const ROOT_SEED: &[u8] = b"amp.tag.root/v1";

/// Derive a child ID from a parent ID and one canonical segment.
///
/// The segment must already be canonical; see [`crate::validation`].
pub fn derive_child_id(parent: &Tag, segment: &str) -> Tag {
    let mut hasher = blake3::Hasher::new();
    hasher.update(SPEC_DOMAIN);
    hasher.update(&parent.to_bytes());
    hasher.update(segment.as_bytes());
    Tag::from_bytes(*hasher.finalize().as_bytes())
}

/// The published root ID.
pub fn root_id() -> Tag {
    Tag::from_bytes(*blake3::hash(ROOT_SEED).as_bytes())
}

struct SpecNode {
    name: Box<str>,
    id: Tag,
    parent: Option<Weak<SpecNode>>,
    children: RwLock<HashMap<Box<str>, Spec>>,
}

/// A handle to an immutable namespace node.
///
/// Handles are cheap to clone. Equality, ordering and hashing follow the ID;
/// use [`Spec::ptr_eq`] to test object identity.
#[derive(Clone)]
pub struct Spec(Arc<SpecNode>);

static ROOT: OnceLock<Spec> = OnceLock::new();

impl Spec {
    /// The process-wide root Spec.
    pub fn root() -> Spec {
        ROOT.get_or_init(|| Spec::new_node("", root_id(), None))
            .clone()
    }

    fn new_node(name: &str, id: Tag, parent: Option<Weak<SpecNode>>) -> Spec {
        Spec(Arc::new(SpecNode {
            name: name.into(),
            id,
            parent,
            children: RwLock::new(HashMap::new()),
        }))
    }

    /// The derived identifier.
    pub fn id(&self) -> Tag {
        self.0.id
    }

    /// The canonical name of this node (empty for the root).
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The Spec this node was derived from.
    pub fn parent(&self) -> Option<Spec> {
        self.0.parent.as_ref().and_then(Weak::upgrade).map(Spec)
    }

    /// Check if this Spec has no parent.
    pub fn is_root(&self) -> bool {
        self.0.parent.is_none()
    }

    /// Number of derivation steps from the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut cur = self.parent();
        while let Some(spec) = cur {
            depth += 1;
            cur = spec.parent();
        }
        depth
    }

    /// Dotted path from the root, e.g. `attrspec.login`.
    pub fn path(&self) -> String {
        let mut names = vec![self.name().to_string()];
        let mut cur = self.parent();
        while let Some(spec) = cur {
            if !spec.is_root() {
                names.push(spec.name().to_string());
            }
            cur = spec.parent();
        }
        names.reverse();
        names.join(".")
    }

    /// Derive (or fetch the cached) child for `name`.
    pub fn try_with(&self, name: &str) -> Result<Spec, TagError> {
        let mut spec = self.clone();
        for segment in canonical_segments(name)? {
            spec = spec.child(segment);
        }
        Ok(spec)
    }

    /// Derive (or fetch the cached) child for `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid spec name. Spec names are program
    /// text, so an invalid one is a bug that must surface at declaration
    /// time. Use [`Spec::try_with`] for names that come from input.
    pub fn with(&self, name: &str) -> Spec {
        match self.try_with(name) {
            Ok(spec) => spec,
            Err(e) => panic!("{}", e),
        }
    }

    fn child(&self, segment: String) -> Spec {
        {
            let children = self.0.children.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(existing) = children.get(segment.as_str()) {
                return existing.clone();
            }
        }

        let mut children = self.0.children.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have derived it between the two locks.
        children
            .entry(segment.clone().into_boxed_str())
            .or_insert_with(|| {
                let id = derive_child_id(&self.0.id, &segment);
                Spec::new_node(&segment, id, Some(Arc::downgrade(&self.0)))
            })
            .clone()
    }

    /// Children derived so far in this process, sorted by name.
    pub fn children(&self) -> Vec<Spec> {
        let children = self.0.children.read().unwrap_or_else(PoisonError::into_inner);
        let mut out: Vec<Spec> = children.values().cloned().collect();
        out.sort_by(|a, b| a.name().cmp(b.name()));
        out
    }

    /// Check whether two handles point at the same node.
    pub fn ptr_eq(a: &Spec, b: &Spec) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl PartialEq for Spec {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Spec {}

impl Hash for Spec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl PartialOrd for Spec {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Spec {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.id.cmp(&other.0.id)
    }
}

impl fmt::Debug for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "Spec(<root>, {:?})", self.0.id)
        } else {
            write!(f, "Spec({}, {:?})", self.path(), self.0.id)
        }
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
