use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use string_cache::DefaultAtom as Atom;

/// Opaque identifier of one image stimulus.
///
/// Ids are interned, so cloning one into many trials costs a refcount bump.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageId(Atom);

impl ImageId {
    pub fn new(id: &str) -> Self {
        Self(Atom::from(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ImageId {
    fn from(id: String) -> Self {
        Self(Atom::from(id))
    }
}

impl AsRef<str> for ImageId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ImageId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ImageId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(ImageId::from)
    }
}

/// Builds a pool of ids from anything string-like.
pub fn image_pool<I, S>(ids: I) -> Vec<ImageId>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ids.into_iter().map(|s| ImageId::new(s.as_ref())).collect()
}
