//! Read-only view over a borrowed key/value map.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::{Iter, Keys, Values};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};
use umcp_error::{LookupError, UmcpResult};

/// Non-owning, read-only view of a `HashMap`.
///
/// Every read is forwarded to the underlying map, so the view always reflects
/// the map's current contents. Handing out a `MappingProxy` lets callers
/// inspect state they must not mutate.
///
/// # Example
///
/// ```
/// use umcp_util::MappingProxy;
/// use std::collections::HashMap;
///
/// let map = HashMap::from([("a", 1), ("b", 2)]);
/// let view = MappingProxy::new(&map);
///
/// assert_eq!(view.len(), 2);
/// assert!(view.contains_key("a"));
/// assert!(view.get("c").is_err());
/// assert_eq!(*view.get_or("c", &0), 0);
/// ```
#[derive(Debug)]
pub struct MappingProxy<'a, K, V, S = std::collections::hash_map::RandomState> {
    proxied: &'a HashMap<K, V, S>,
}

// Derived impls would require K, V and S to be Clone.
impl<K, V, S> Clone for MappingProxy<'_, K, V, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, S> Copy for MappingProxy<'_, K, V, S> {}

impl<'a, K, V, S> MappingProxy<'a, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Wrap an existing map.
    pub fn new(proxied: &'a HashMap<K, V, S>) -> Self {
        Self { proxied }
    }

    /// Value for `key`.
    ///
    /// # Errors
    ///
    /// Returns a `KeyNotFound` lookup error if the key is absent.
    #[track_caller]
    pub fn get<Q>(&self, key: &Q) -> UmcpResult<&'a V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        match self.proxied.get(key) {
            Some(value) => Ok(value),
            None => Err(LookupError::key_not_found(&key).into()),
        }
    }

    /// Value for `key`, if present.
    pub fn get_opt<Q>(&self, key: &Q) -> Option<&'a V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.proxied.get(key)
    }

    /// Value for `key`, or `default` when absent.
    pub fn get_or<'b, Q>(&self, key: &Q, default: &'b V) -> &'b V
    where
        'a: 'b,
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.proxied.get(key).unwrap_or(default)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.proxied.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.proxied.is_empty()
    }

    /// Check if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.proxied.contains_key(key)
    }

    /// Lazily iterate the keys.
    pub fn iter(&self) -> Keys<'a, K, V> {
        self.proxied.keys()
    }

    /// Keys of the map.
    pub fn keys(&self) -> Keys<'a, K, V> {
        self.proxied.keys()
    }

    /// Key/value pairs of the map.
    pub fn items(&self) -> Iter<'a, K, V> {
        self.proxied.iter()
    }

    /// Values of the map.
    pub fn values(&self) -> Values<'a, K, V> {
        self.proxied.values()
    }
}

impl<'a, K, V, S> IntoIterator for &MappingProxy<'a, K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.proxied.iter()
    }
}

impl<'a, K, V, S> From<&'a HashMap<K, V, S>> for MappingProxy<'a, K, V, S> {
    fn from(proxied: &'a HashMap<K, V, S>) -> Self {
        Self { proxied }
    }
}
