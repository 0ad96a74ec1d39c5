//! Art resource loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::buffer::ArtBuffer;
use super::error::ArtError;
use super::{Figure, Orientation};

/// Art compiled into the binary, keyed by resource name.
const EMBEDDED: &[(&str, &str)] = &[
    ("cucumber", include_str!("../../assets/cucumber.txt")),
    (
        "cucumber-reverse",
        include_str!("../../assets/cucumber-reverse.txt"),
    ),
    ("eggplant", include_str!("../../assets/eggplant.txt")),
    (
        "eggplant-reverse",
        include_str!("../../assets/eggplant-reverse.txt"),
    ),
];

/// Where art resources are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Resources {
    /// Art compiled into the binary.
    #[default]
    Embedded,
    /// A directory holding `<name>.txt` files.
    Directory(PathBuf),
}

impl Resources {
    /// Read from a directory of `<name>.txt` files.
    pub fn dir(path: impl AsRef<Path>) -> Self {
        Self::Directory(path.as_ref().to_path_buf())
    }

    /// Load the resource called `name`.
    pub fn load(&self, name: &str) -> Result<ArtBuffer, ArtError> {
        match self {
            Self::Embedded => EMBEDDED
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, text)| ArtBuffer::parse(name, text))
                .ok_or_else(|| {
                    ArtError::unavailable(
                        name,
                        io::Error::new(io::ErrorKind::NotFound, "no embedded art with that name"),
                    )
                }),
            Self::Directory(dir) => {
                let path = dir.join(format!("{}.txt", name));
                let text =
                    fs::read_to_string(&path).map_err(|e| ArtError::unavailable(name, e))?;
                Ok(ArtBuffer::parse(name, &text))
            }
        }
    }
}

/// Load an embedded art resource by name.
pub fn load(name: &str) -> Result<ArtBuffer, ArtError> {
    Resources::Embedded.load(name)
}

/// The four art buffers used by a session, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ArtStore {
    cucumber: ArtBuffer,
    cucumber_reverse: ArtBuffer,
    eggplant: ArtBuffer,
    eggplant_reverse: ArtBuffer,
}

impl ArtStore {
    /// Load every figure in both orientations.
    ///
    /// Fails on the first resource that cannot be read.
    pub fn load(resources: &Resources) -> Result<Self, ArtError> {
        let store = Self {
            cucumber: resources.load(Figure::Cucumber.resource_name(Orientation::Forward))?,
            cucumber_reverse: resources
                .load(Figure::Cucumber.resource_name(Orientation::Reverse))?,
            eggplant: resources.load(Figure::Eggplant.resource_name(Orientation::Forward))?,
            eggplant_reverse: resources
                .load(Figure::Eggplant.resource_name(Orientation::Reverse))?,
        };
        tracing::debug!(
            cucumber_width = store.cucumber.width(),
            cucumber_height = store.cucumber.height(),
            eggplant_width = store.eggplant.width(),
            eggplant_height = store.eggplant.height(),
            "art loaded"
        );
        Ok(store)
    }

    /// Load the art compiled into the binary.
    pub fn embedded() -> Result<Self, ArtError> {
        Self::load(&Resources::Embedded)
    }

    /// Art for `figure` facing the given way.
    pub fn get(&self, figure: Figure, orientation: Orientation) -> &ArtBuffer {
        match (figure, orientation) {
            (Figure::Cucumber, Orientation::Forward) => &self.cucumber,
            (Figure::Cucumber, Orientation::Reverse) => &self.cucumber_reverse,
            (Figure::Eggplant, Orientation::Forward) => &self.eggplant,
            (Figure::Eggplant, Orientation::Reverse) => &self.eggplant_reverse,
        }
    }
}
