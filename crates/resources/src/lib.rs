//! Resolves named data resources to their contents.
//!
//! The lookup directories never open files themselves. They ask a [`ResourceProvider`] for the
//! bytes of a named resource, so the same loading code reads from a directory on disk, from
//! tables compiled into the binary, or from test fixtures held in memory.

extern crate failure;
#[macro_use]
extern crate failure_derive;
#[macro_use]
extern crate log;

use std::{
    collections::BTreeMap,
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

/// Failures that may occur while resolving a named resource.
#[derive(Debug, Fail)]
pub enum ResourceError {
    #[fail(display = "resource '{}' was not found", name)]
    NotFound { name: String },
    #[fail(display = "unable to read resource at {:?}: {}", path, why)]
    Read { path: PathBuf, why: io::Error },
}

pub fn open<P: AsRef<Path>>(path: P) -> io::Result<File> {
    File::open(&path).map_err(|why| {
        io::Error::new(why.kind(), format!("unable to open file at {:?}: {}", path.as_ref(), why))
    })
}

pub fn read<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
    open(path).and_then(read_to_vec)
}

/// Drains a stream into a buffer.
pub fn read_to_vec<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer).map(|_| buffer)
}

/// Resolves a resource name to the full contents of that resource.
pub trait ResourceProvider {
    fn load(&self, name: &str) -> Result<Vec<u8>, ResourceError>;
}

impl<'a, P: ResourceProvider + ?Sized> ResourceProvider for &'a P {
    fn load(&self, name: &str) -> Result<Vec<u8>, ResourceError> { (**self).load(name) }
}

/// Resolves resource names as paths relative to a root directory.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectoryProvider {
    root: PathBuf,
}

impl DirectoryProvider {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self { Self { root: root.into() } }

    pub fn root(&self) -> &Path { &self.root }

    /// The path that a resource name resolves to.
    pub fn path(&self, name: &str) -> PathBuf { self.root.join(name) }
}

impl ResourceProvider for DirectoryProvider {
    fn load(&self, name: &str) -> Result<Vec<u8>, ResourceError> {
        let path = self.path(name);
        debug!("resolving resource '{}' at {:?}", name, path);
        read(&path).map_err(|why| match why.kind() {
            io::ErrorKind::NotFound => ResourceError::NotFound { name: name.into() },
            _ => ResourceError::Read { path, why },
        })
    }
}

/// Serves resources from memory.
#[derive(Clone, Debug, Default)]
pub struct EmbeddedProvider {
    entries: BTreeMap<String, Vec<u8>>,
}

impl EmbeddedProvider {
    pub fn new() -> Self { Self::default() }

    pub fn insert<N: Into<String>, B: Into<Vec<u8>>>(&mut self, name: N, contents: B) {
        self.entries.insert(name.into(), contents.into());
    }

    pub fn with<N: Into<String>, B: Into<Vec<u8>>>(mut self, name: N, contents: B) -> Self {
        self.insert(name, contents);
        self
    }
}

impl ResourceProvider for EmbeddedProvider {
    fn load(&self, name: &str) -> Result<Vec<u8>, ResourceError> {
        debug!("resolving embedded resource '{}'", name);
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound { name: name.into() })
    }
}
