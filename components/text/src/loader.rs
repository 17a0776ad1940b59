//! Custom font registration and load tracking.
//!
//! A [`FontLibrary`] maps face names to their sources and tracks each
//! face's load state. Views sample [`is_ready`](FontLibrary::is_ready)
//! on every render pass and render nothing until all faces are loaded;
//! hosts that prefer subscriptions can watch [`ready`](FontLibrary::ready)
//! instead. Readiness is one-way: once the library reports ready it stays
//! ready for the life of the process, since loaded font data is never
//! evicted.
//!
//! The library performs no IO itself. Byte-backed faces are loaded at
//! construction; asset-backed faces stay pending until a driver (such as
//! the kit's async asset loader) marks them loaded or failed. A failed
//! face pins the library in the not-ready state.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use ripple_core::Str;
use ripple_reactive::{Binding, Computed, SignalExt, binding};

use crate::font::family;

/// Where a font face's data comes from.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum FontSource {
    /// Raw font data already in memory.
    Bytes(Arc<[u8]>),
    /// A named asset resolved by the host, e.g. a bundle-relative path.
    Asset(Str),
}

/// A named font face and the source of its data.
#[derive(Debug, Clone)]
pub struct FontFace {
    name: Str,
    source: FontSource,
}

impl FontFace {
    /// Creates a face from a name and source.
    pub fn new(name: impl Into<Str>, source: FontSource) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    /// A face backed by a host asset path.
    pub fn asset(name: impl Into<Str>, path: impl Into<Str>) -> Self {
        Self::new(name, FontSource::Asset(path.into()))
    }

    /// A face backed by in-memory font data.
    pub fn bytes(name: impl Into<Str>, data: impl Into<Arc<[u8]>>) -> Self {
        Self::new(name, FontSource::Bytes(data.into()))
    }

    /// The face name, as referenced by font families.
    #[must_use]
    pub const fn name(&self) -> &Str {
        &self.name
    }

    /// The face's data source.
    #[must_use]
    pub const fn source(&self) -> &FontSource {
        &self.source
    }
}

/// Load state of a single face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceState {
    /// Waiting for a driver to provide the data.
    Pending,
    /// Data is available.
    Loaded,
    /// Loading failed; the library will never become ready.
    Failed,
}

struct Record {
    source: FontSource,
    state: FaceState,
    data: Option<Arc<[u8]>>,
}

struct Shared {
    faces: RefCell<BTreeMap<Str, Record>>,
    ready: Binding<bool>,
}

/// A registry of custom font faces with a monotonic readiness signal.
#[derive(Clone)]
pub struct FontLibrary {
    shared: Rc<Shared>,
}

impl fmt::Debug for FontLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontLibrary")
            .field("faces", &self.shared.faces.borrow().len())
            .field("ready", &self.is_ready())
            .finish()
    }
}

impl FontLibrary {
    /// Creates a library from a set of faces.
    ///
    /// Byte-backed faces count as loaded immediately; an empty set is
    /// ready from the start.
    pub fn new(faces: impl IntoIterator<Item = FontFace>) -> Self {
        let mut map = BTreeMap::new();
        for face in faces {
            let (state, data) = match &face.source {
                FontSource::Bytes(data) => (FaceState::Loaded, Some(Arc::clone(data))),
                FontSource::Asset(_) => (FaceState::Pending, None),
            };
            map.insert(
                face.name,
                Record {
                    source: face.source,
                    state,
                    data,
                },
            );
        }
        let ready = map.values().all(|record| record.state == FaceState::Loaded);
        Self {
            shared: Rc::new(Shared {
                faces: RefCell::new(map),
                ready: binding(ready),
            }),
        }
    }

    /// The stock Baloo Tamma 2 face set used by the kit's typography.
    #[must_use]
    pub fn baloo_tamma() -> Self {
        Self::new([
            FontFace::asset(family::REGULAR, "fonts/BalooTamma2-Regular.ttf"),
            FontFace::asset(family::MEDIUM, "fonts/BalooTamma2-Medium.ttf"),
            FontFace::asset(family::SEMI_BOLD, "fonts/BalooTamma2-SemiBold.ttf"),
            FontFace::asset(family::BOLD, "fonts/BalooTamma2-Bold.ttf"),
            FontFace::asset(family::EXTRA_BOLD, "fonts/BalooTamma2-ExtraBold.ttf"),
        ])
    }

    /// Samples the readiness flag synchronously.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.shared.ready.get()
    }

    /// The readiness flag as an observable signal.
    #[must_use]
    pub fn ready(&self) -> Computed<bool> {
        self.shared.ready.clone().computed()
    }

    /// The load state of a face, if it is registered.
    #[must_use]
    pub fn state(&self, name: &str) -> Option<FaceState> {
        self.shared
            .faces
            .borrow()
            .get(name)
            .map(|record| record.state)
    }

    /// Faces still waiting for data, for a driver to process.
    #[must_use]
    pub fn pending(&self) -> Vec<FontFace> {
        self.shared
            .faces
            .borrow()
            .iter()
            .filter(|(_, record)| record.state == FaceState::Pending)
            .map(|(name, record)| FontFace {
                name: name.clone(),
                source: record.source.clone(),
            })
            .collect()
    }

    /// The loaded data of a face, once available.
    #[must_use]
    pub fn data(&self, name: &str) -> Option<Arc<[u8]>> {
        self.shared
            .faces
            .borrow()
            .get(name)
            .and_then(|record| record.data.clone())
    }

    /// Stores a face's data and marks it loaded.
    pub fn install(&self, name: &str, data: impl Into<Arc<[u8]>>) {
        {
            let mut faces = self.shared.faces.borrow_mut();
            let Some(record) = faces.get_mut(name) else {
                return;
            };
            record.data = Some(data.into());
        }
        self.mark_loaded(name);
    }

    /// Marks a face as loaded and refreshes the readiness flag.
    pub fn mark_loaded(&self, name: &str) {
        self.transition(name, FaceState::Loaded);
    }

    /// Marks a face as failed, pinning the library in the not-ready state.
    pub fn mark_failed(&self, name: &str) {
        self.transition(name, FaceState::Failed);
    }

    fn transition(&self, name: &str, state: FaceState) {
        {
            let mut faces = self.shared.faces.borrow_mut();
            let Some(record) = faces.get_mut(name) else {
                return;
            };
            record.state = state;
        }
        self.refresh();
    }

    fn refresh(&self) {
        // One-way: never regress a ready library.
        if self.shared.ready.get() {
            return;
        }
        let all_loaded = self
            .shared
            .faces
            .borrow()
            .values()
            .all(|record| record.state == FaceState::Loaded);
        if all_loaded {
            self.shared.ready.set(true);
        }
    }
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::baloo_tamma()
    }
}
