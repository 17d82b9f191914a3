use std::any::{Any, TypeId, type_name};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Mutex, PoisonError};

use super::type_info::TypeInfo;

/// A lookup of a reflected type that has not been registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryError {
    pub type_name: &'static str,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type `{}` is not registered for inspection", self.type_name)
    }
}

impl std::error::Error for RegistryError {}

/// The set of reflected types, built once at startup and handed to the
/// renderer by reference.
#[derive(Default)]
pub struct Registry {
    types: HashMap<TypeId, Entry>,
    // Types already reported as missing, so each is warned about once.
    reported: Mutex<HashSet<TypeId>>,
}

struct Entry {
    name: &'static str,
    info: Box<dyn Any>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `info` as the shape of `T`, replacing any earlier registration.
    pub fn register<T: 'static>(&mut self, info: TypeInfo<T>) -> &mut Self {
        let name = info.name();
        log::debug!("registered `{name}` with {} members", info.members().len());
        let previous = self.types.insert(TypeId::of::<T>(), Entry { name, info: Box::new(info) });
        if let Some(previous) = previous {
            log::warn!("`{}` was already registered as `{}`; replaced", type_name::<T>(), previous.name);
        }
        self
    }

    pub fn get<T: 'static>(&self) -> Option<&TypeInfo<T>> {
        self.types.get(&TypeId::of::<T>()).and_then(|e| e.info.downcast_ref())
    }

    pub fn try_get<T: 'static>(&self) -> Result<&TypeInfo<T>, RegistryError> {
        self.get::<T>().ok_or(RegistryError { type_name: type_name::<T>() })
    }

    #[inline]
    pub fn contains<T: 'static>(&self) -> bool {
        self.types.contains_key(&TypeId::of::<T>())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// `true` the first time `T` is reported as missing.
    pub(crate) fn first_miss<T: 'static>(&self) -> bool {
        self.reported.lock().unwrap_or_else(PoisonError::into_inner).insert(TypeId::of::<T>())
    }

    /// Registered names, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.types.values().map(|e| e.name).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.type_names()).finish()
    }
}
