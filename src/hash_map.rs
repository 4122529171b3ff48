use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;

use crate::DefaultHashBuilder;
use crate::error::Error;
use crate::hash_table::Entry as TableEntry;
use crate::hash_table::HashTable;

/// A hash map implemented over the linear-probing [`HashTable`].
///
/// `HashMap<K, V, S>` stores key-value pairs where keys implement `Hash + Eq`
/// and uses a configurable hasher builder `S` to hash keys. Deletion uses
/// backward shifting, so removals never leave tombstones behind.
///
/// Queries on absent keys return `None`. A map can additionally carry a
/// configured *default return value*; [`get_or_default`] and
/// [`remove_or_default`] fall back to it, while [`contains_key`] still
/// distinguishes an absent key from a present key whose value happens to
/// equal the default.
///
/// [`get_or_default`]: HashMap::get_or_default
/// [`remove_or_default`]: HashMap::remove_or_default
/// [`contains_key`]: HashMap::contains_key
///
/// # Examples
///
/// ```rust
/// use probe_hash::HashMap;
///
/// let mut map: HashMap<_, _> = HashMap::new();
/// map.insert("a", 1);
/// map.insert("b", 2);
///
/// assert_eq!(map.get(&"a"), Some(&1));
/// assert_eq!(map.remove(&"b"), Some(2));
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Clone)]
pub struct HashMap<K, V, S = DefaultHashBuilder> {
    table: HashTable<(K, V)>,
    hash_builder: S,
    default_return_value: Option<V>,
}

impl<K, V, S> Debug for HashMap<K, V, S>
where
    K: Debug + Hash + Eq,
    V: Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.iter() {
            map.entry(k, v);
        }
        map.finish()
    }
}

impl<K, V, S> PartialEq for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K, V, S> Eq for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates a new hash map with the given hasher builder.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(0, hash_builder)
    }

    /// Creates a new hash map with the specified capacity and hasher builder.
    ///
    /// The actual capacity may be larger than requested because the
    /// underlying table rounds its slot count to a power of two.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            hash_builder,
            default_return_value: None,
        }
    }

    /// Creates a new hash map with the given capacity, load factor, and
    /// hasher builder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLoadFactor`] if `load_factor` is not in the
    /// open interval `(0, 1)`.
    pub fn with_capacity_load_factor_and_hasher(
        capacity: usize,
        load_factor: f32,
        hash_builder: S,
    ) -> Result<Self, Error> {
        Ok(Self {
            table: HashTable::with_capacity_and_load_factor(capacity, load_factor)?,
            hash_builder,
            default_return_value: None,
        })
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the current capacity of the map.
    ///
    /// The capacity represents the maximum number of elements the map can
    /// hold before it needs to resize.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the load factor the map grows at.
    pub fn load_factor(&self) -> f32 {
        self.table.load_factor()
    }

    /// Removes all elements from the map.
    ///
    /// This operation preserves the map's allocated capacity and leaves the
    /// configured default return value in place.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Shrinks the capacity of the map as much as possible.
    ///
    /// Removal never shrinks the map on its own; this is the explicit way to
    /// give memory back after a burst of deletions.
    pub fn shrink_to_fit(&mut self) {
        self.table.shrink_to_fit();
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.table.reserve(additional);
    }

    /// Configures the default return value and returns the previous one.
    ///
    /// The default return value is what [`get_or_default`] and
    /// [`remove_or_default`] produce for absent keys. It plays no part in
    /// [`get`], [`insert`], or [`remove`], which report absence as `None`.
    ///
    /// [`get_or_default`]: HashMap::get_or_default
    /// [`remove_or_default`]: HashMap::remove_or_default
    /// [`get`]: HashMap::get
    /// [`insert`]: HashMap::insert
    /// [`remove`]: HashMap::remove
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert("present", 1);
    /// map.set_default_return_value(-1);
    ///
    /// assert_eq!(map.get_or_default(&"present"), Some(&1));
    /// assert_eq!(map.get_or_default(&"absent"), Some(&-1));
    /// assert_eq!(map.get(&"absent"), None);
    /// ```
    pub fn set_default_return_value(&mut self, value: V) -> Option<V> {
        self.default_return_value.replace(value)
    }

    /// Returns the configured default return value, if any.
    pub fn default_return_value(&self) -> Option<&V> {
        self.default_return_value.as_ref()
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, `None` is returned. If the
    /// map did have this key present, the value is updated, and the old value
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map.get(&37), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash_builder.hash_one(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(mut entry) => {
                let old_value = core::mem::replace(&mut entry.get_mut().1, value);
                Some(old_value)
            }
            TableEntry::Vacant(entry) => {
                entry.insert((key, value));
                None
            }
        }
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.find(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns a reference to the value for the key, falling back to the
    /// configured default return value when the key is absent.
    ///
    /// Returns `None` only when the key is absent and no default has been
    /// configured. Use [`contains_key`] to tell a stored value apart from the
    /// fallback.
    ///
    /// [`contains_key`]: HashMap::contains_key
    pub fn get_or_default(&self, key: &K) -> Option<&V> {
        self.get(key).or(self.default_return_value.as_ref())
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.find_mut(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.remove(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning its value or a clone of the
    /// configured default return value when the key is absent.
    pub fn remove_or_default(&mut self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        match self.remove(key) {
            Some(value) => Some(value),
            None => self.default_return_value.clone(),
        }
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was previously in the map.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let hash = self.hash_builder.hash_one(key);
        self.table.remove(hash, |(k, _)| k == key)
    }

    /// Copies the key-value pairs from a pair of parallel slices into the
    /// map.
    ///
    /// The whole operation is validated before any pair is inserted: on
    /// error the map is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the slices have different
    /// lengths.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::Error;
    /// use probe_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert_from_slices(&["a", "b"], &[1, 2]).unwrap();
    /// assert_eq!(map.get(&"a"), Some(&1));
    ///
    /// let result = map.insert_from_slices(&["x", "y", "z"], &[1, 2]);
    /// assert_eq!(result, Err(Error::LengthMismatch { keys: 3, values: 2 }));
    /// assert!(!map.contains_key(&"x"));
    /// ```
    pub fn insert_from_slices(&mut self, keys: &[K], values: &[V]) -> Result<(), Error>
    where
        K: Clone,
        V: Clone,
    {
        if keys.len() != values.len() {
            return Err(Error::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }

        self.reserve(keys.len());
        for (key, value) in keys.iter().zip(values) {
            self.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    /// Copies `len` key-value pairs starting at `offset` from a pair of
    /// parallel slices into the map.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the slices have different
    /// lengths, or [`Error::RangeOutOfBounds`] if the window does not fit.
    /// Both are detected before any mutation.
    pub fn insert_from_slice_range(
        &mut self,
        keys: &[K],
        values: &[V],
        offset: usize,
        len: usize,
    ) -> Result<(), Error>
    where
        K: Clone,
        V: Clone,
    {
        if keys.len() != values.len() {
            return Err(Error::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        let end = offset
            .checked_add(len)
            .filter(|&end| end <= keys.len())
            .ok_or(Error::RangeOutOfBounds {
                offset,
                len,
                actual: keys.len(),
            })?;
        self.insert_from_slices(&keys[offset..end], &values[offset..end])
    }

    /// Gets the given key's corresponding entry in the map for in-place
    /// manipulation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    ///
    /// map.entry(1).or_insert("a");
    /// map.entry(1).and_modify(|v| *v = "b");
    ///
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        let hash = self.hash_builder.hash_one(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(entry) => Entry::Occupied(OccupiedEntry { entry }),
            TableEntry::Vacant(entry) => Entry::Vacant(VacantEntry { entry, key }),
        }
    }

    /// Returns an iterator over the key-value pairs of the map.
    ///
    /// The iterator yields `(&K, &V)` pairs in an arbitrary order without
    /// allocating per step.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over the key-value pairs of the map with mutable
    /// references to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.table.iter_mut(),
        }
    }

    /// Returns an iterator over the keys of the map.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values of the map.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator over mutable references to the values of the map.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    /// Returns an iterator that removes and yields all key-value pairs from
    /// the map.
    ///
    /// After calling `drain()`, the map will be empty but keeps its capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let pairs: Vec<_> = map.drain().collect();
    /// assert!(map.is_empty());
    /// assert_eq!(pairs.len(), 2);
    /// ```
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        Drain {
            inner: self.table.drain(),
        }
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Creates a new hash map using the default hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::HashMap;
    ///
    /// let map: HashMap<i32, String> = HashMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }

    /// Creates a new hash map with the specified capacity using the default
    /// hasher builder.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }

    /// Creates a new hash map with the specified capacity and load factor
    /// using the default hasher builder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLoadFactor`] if `load_factor` is not in the
    /// open interval `(0, 1)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::HashMap;
    ///
    /// let map: HashMap<i32, i32> = HashMap::with_capacity_and_load_factor(16, 0.5).unwrap();
    /// assert!(map.capacity() >= 16);
    /// ```
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f32) -> Result<Self, Error> {
        Self::with_capacity_load_factor_and_hasher(capacity, load_factor, S::default())
    }

    /// Builds a map from a pair of parallel slices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the slices have different
    /// lengths.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::HashMap;
    ///
    /// let map: HashMap<_, _> = HashMap::from_slices(&["a", "b", "c"], &[1, 2, 3]).unwrap();
    /// assert_eq!(map.len(), 3);
    /// assert_eq!(map.get(&"b"), Some(&2));
    /// ```
    pub fn from_slices(keys: &[K], values: &[V]) -> Result<Self, Error>
    where
        K: Clone,
        V: Clone,
    {
        let mut map = Self::with_capacity(keys.len().min(values.len()));
        map.insert_from_slices(keys, values)?;
        Ok(map)
    }

    /// Builds a map from `len` pairs starting at `offset` in a pair of
    /// parallel slices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the slices have different
    /// lengths, or [`Error::RangeOutOfBounds`] if the window does not fit.
    pub fn from_slice_range(
        keys: &[K],
        values: &[V],
        offset: usize,
        len: usize,
    ) -> Result<Self, Error>
    where
        K: Clone,
        V: Clone,
    {
        let mut map = Self::with_capacity(len.min(keys.len()));
        map.insert_from_slice_range(keys, values, offset, len)?;
        Ok(map)
    }
}

impl<K, V, S> Default for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Extend<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type IntoIter = Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type IntoIter = IterMut<'a, K, V>;
    type Item = (&'a K, &'a mut V);

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

impl<K, V, S> IntoIterator for HashMap<K, V, S> {
    type IntoIter = IntoIter<K, V>;
    type Item = (K, V);

    /// Consumes the map into an owning iterator over its pairs.
    ///
    /// This is the snapshot form of iteration: the yielded pairs are owned
    /// and live independently of the map.
    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.table.into_iter(),
        }
    }
}

/// A view into a single entry in the map, which may either be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashMap`].
///
/// [`entry`]: HashMap::entry
pub enum Entry<'a, K, V> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Inserts a default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts a value computed from a closure if the entry is vacant and
    /// returns a mutable reference.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts.
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, K, V> Entry<'a, K, V>
where
    V: Default,
{
    /// Inserts the default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry in the map.
pub struct VacantEntry<'a, K, V> {
    entry: crate::hash_table::VacantEntry<'a, (K, V)>,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// Gets a reference to the key that would be used when inserting a value.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Take ownership of the key.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts the value into the map and returns a mutable reference to it.
    pub fn insert(self, value: V) -> &'a mut V {
        &mut self.entry.insert((self.key, value)).1
    }
}

/// A view into an occupied entry in the map.
pub struct OccupiedEntry<'a, K, V> {
    entry: crate::hash_table::OccupiedEntry<'a, (K, V)>,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Gets a reference to the key in the entry.
    pub fn key(&self) -> &K {
        &self.entry.get().0
    }

    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.entry.get().1
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.entry.get_mut().1
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.entry.into_mut().1
    }

    /// Inserts a value into the entry and returns the old value.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(&mut self.entry.get_mut().1, value)
    }

    /// Removes the entry from the map and returns the value.
    pub fn remove(self) -> V {
        self.entry.remove().1
    }

    /// Removes the entry from the map and returns the key and value.
    pub fn remove_entry(self) -> (K, V) {
        self.entry.remove()
    }
}

/// An iterator over the key-value pairs of a `HashMap`.
pub struct Iter<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }
}

/// A mutable iterator over the key-value pairs of a `HashMap`.
pub struct IterMut<'a, K, V> {
    inner: crate::hash_table::IterMut<'a, (K, V)>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| {
            let (key, value) = entry;
            (&*key, value)
        })
    }
}

/// An iterator over the keys of a `HashMap`.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

/// An iterator over the values of a `HashMap`.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}

/// A mutable iterator over the values of a `HashMap`.
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}

/// A draining iterator over the key-value pairs of a `HashMap`.
pub struct Drain<'a, K, V> {
    inner: crate::hash_table::Drain<'a, (K, V)>,
}

impl<K, V> Iterator for Drain<'_, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// An owning iterator over the key-value pairs of a `HashMap`.
pub struct IntoIter<K, V> {
    inner: crate::hash_table::IntoIter<(K, V)>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::hash::BuildHasher;

    use rand::TryRngCore;
    use rand::rngs::OsRng;
    use siphasher::sip::SipHasher;

    use super::*;

    #[derive(Clone)]
    struct SipHashBuilder {
        k1: u64,
        k2: u64,
    }

    impl BuildHasher for SipHashBuilder {
        type Hasher = SipHasher;

        fn build_hasher(&self) -> Self::Hasher {
            SipHasher::new_with_keys(self.k1, self.k2)
        }
    }

    impl Default for SipHashBuilder {
        fn default() -> Self {
            let mut rng = OsRng;
            Self {
                k1: rng.try_next_u64().unwrap_or(0),
                k2: rng.try_next_u64().unwrap_or(0),
            }
        }
    }

    #[test]
    fn test_new_and_with_hasher() {
        let map: HashMap<i32, String, SipHashBuilder> = HashMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);

        let map2 = HashMap::<i32, String, _>::with_hasher(SipHashBuilder::default());
        assert!(map2.is_empty());
        assert_eq!(map2.len(), 0);
    }

    #[test]
    fn test_with_capacity() {
        let map: HashMap<i32, String, SipHashBuilder> = HashMap::with_capacity(100);
        assert!(map.capacity() >= 100);
        assert!(map.is_empty());

        let map2 =
            HashMap::<i32, String, _>::with_capacity_and_hasher(200, SipHashBuilder::default());
        assert!(map2.capacity() >= 200);
        assert!(map2.is_empty());
    }

    #[test]
    fn test_with_capacity_and_load_factor() {
        let map =
            HashMap::<i32, i32, SipHashBuilder>::with_capacity_and_load_factor(16, 0.5).unwrap();
        assert!(map.capacity() >= 16);
        assert_eq!(map.load_factor(), 0.5);

        let result = HashMap::<i32, i32, SipHashBuilder>::with_capacity_and_load_factor(16, 0.0);
        assert!(matches!(result, Err(Error::InvalidLoadFactor { .. })));
    }

    #[test]
    fn test_insert_and_get() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());

        assert_eq!(map.insert(1, "hello".to_string()), None);
        assert_eq!(map.len(), 1);
        assert!(!map.is_empty());

        assert_eq!(map.get(&1), Some(&"hello".to_string()));
        assert_eq!(map.get(&2), None);

        assert_eq!(
            map.insert(1, "world".to_string()),
            Some("hello".to_string())
        );
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some(&"world".to_string()));
    }

    #[test]
    fn test_get_mut() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert(1, "hello".to_string());

        if let Some(value) = map.get_mut(&1) {
            value.push_str(" world");
        }

        assert_eq!(map.get(&1), Some(&"hello world".to_string()));
        assert_eq!(map.get_mut(&2), None);
    }

    #[test]
    fn test_contains_key() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        assert!(!map.contains_key(&1));

        map.insert(1, "value".to_string());
        assert!(map.contains_key(&1));
        assert!(!map.contains_key(&2));
    }

    #[test]
    fn test_remove() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert(1, "hello".to_string());
        map.insert(2, "world".to_string());

        assert_eq!(map.remove(&1), Some("hello".to_string()));
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key(&1));
        assert!(map.contains_key(&2));

        assert_eq!(map.remove(&1), None);
        assert_eq!(map.remove(&3), None);
    }

    #[test]
    fn test_remove_entry() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert(1, "hello".to_string());

        assert_eq!(map.remove_entry(&1), Some((1, "hello".to_string())));
        assert_eq!(map.len(), 0);
        assert_eq!(map.remove_entry(&1), None);
    }

    #[test]
    fn test_default_return_value_contract() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert("a", true);
        map.insert("b", false);

        assert_eq!(map.set_default_return_value(false), None);
        assert_eq!(map.default_return_value(), Some(&false));

        assert_eq!(map.remove(&"a"), Some(true));
        assert_eq!(map.get(&"a"), None);
        assert_eq!(map.get_or_default(&"a"), Some(&false));
        assert!(!map.contains_key(&"a"));

        // A stored value equal to the default is only distinguishable from an
        // absent key through contains_key.
        assert_eq!(map.get_or_default(&"b"), Some(&false));
        assert!(map.contains_key(&"b"));

        assert_eq!(map.remove_or_default(&"missing"), Some(false));
        assert_eq!(map.remove_or_default(&"b"), Some(false));
        assert!(!map.contains_key(&"b"));

        assert_eq!(map.set_default_return_value(true), Some(false));
    }

    #[test]
    fn test_no_default_return_value() {
        let mut map: HashMap<i32, i32, SipHashBuilder> = HashMap::new();
        map.insert(1, 10);

        assert_eq!(map.default_return_value(), None);
        assert_eq!(map.get_or_default(&1), Some(&10));
        assert_eq!(map.get_or_default(&2), None);
        assert_eq!(map.remove_or_default(&2), None);
    }

    #[test]
    fn test_bulk_length_mismatch_is_all_or_nothing() {
        let mut map: HashMap<String, i32, SipHashBuilder> = HashMap::new();
        let keys = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let values = vec![1, 2];

        let result = map.insert_from_slices(&keys, &values);
        assert_eq!(result, Err(Error::LengthMismatch { keys: 3, values: 2 }));
        assert!(map.is_empty());
        assert!(!map.contains_key(&"a".to_string()));

        let result = HashMap::<String, i32, SipHashBuilder>::from_slices(&keys, &values);
        assert!(result.is_err());
    }

    #[test]
    fn test_bulk_range_out_of_bounds() {
        let mut map: HashMap<i32, i32, SipHashBuilder> = HashMap::new();
        let keys = [1, 2, 3];
        let values = [10, 20, 30];

        let result = map.insert_from_slice_range(&keys, &values, 2, 2);
        assert_eq!(
            result,
            Err(Error::RangeOutOfBounds {
                offset: 2,
                len: 2,
                actual: 3
            })
        );
        assert!(map.is_empty());

        map.insert_from_slice_range(&keys, &values, 1, 2).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&2), Some(&20));
        assert_eq!(map.get(&3), Some(&30));
        assert!(!map.contains_key(&1));
    }

    #[test]
    fn test_bulk_constructor_random_keys() {
        use rand::Rng;
        use rand::SeedableRng;
        use rand::rngs::SmallRng;

        let mut rng = SmallRng::seed_from_u64(0xDEADBEEF);
        let mut keys: Vec<u64> = Vec::with_capacity(1000);
        let mut seen = std::collections::HashSet::new();
        while keys.len() < 1000 {
            let key = rng.random::<u64>();
            if seen.insert(key) {
                keys.push(key);
            }
        }
        let values: Vec<u64> = keys.iter().map(|k| k.wrapping_mul(3)).collect();

        let map = HashMap::<u64, u64, SipHashBuilder>::from_slices(&keys, &values).unwrap();
        assert_eq!(map.len(), 1000);
        for (k, v) in keys.iter().zip(&values) {
            assert_eq!(map.get(k), Some(v));
        }
    }

    #[test]
    fn test_clear() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert(1, "hello".to_string());
        map.insert(2, "world".to_string());

        assert_eq!(map.len(), 2);
        map.clear();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert!(!map.contains_key(&1));
        assert!(!map.contains_key(&2));
    }

    #[test]
    fn test_reserve() {
        let mut map = HashMap::<i32, String, _>::with_hasher(SipHashBuilder::default());
        let initial_capacity = map.capacity();

        map.reserve(1000);
        assert!(map.capacity() >= initial_capacity + 1000);
    }

    #[test]
    fn test_entry_api() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());

        let value = map.entry(1).or_insert("hello".to_string());
        assert_eq!(value, &"hello".to_string());
        assert_eq!(map.len(), 1);

        let value = map.entry(1).or_insert("world".to_string());
        assert_eq!(value, &"hello".to_string());
        assert_eq!(map.len(), 1);

        map.entry(2).or_insert_with(|| "computed".to_string());
        assert_eq!(map.get(&2), Some(&"computed".to_string()));

        map.entry(1)
            .and_modify(|v| v.push_str(" world"))
            .or_insert("default".to_string());
        assert_eq!(map.get(&1), Some(&"hello world".to_string()));

        assert_eq!(map.entry(3).key(), &3);
    }

    #[test]
    fn test_entry_or_default() {
        let mut map: HashMap<i32, Vec<i32>, SipHashBuilder> =
            HashMap::with_hasher(SipHashBuilder::default());

        map.entry(1).or_default().push(42);
        assert_eq!(map.get(&1), Some(&vec![42]));

        map.entry(1).or_default().push(24);
        assert_eq!(map.get(&1), Some(&vec![42, 24]));
    }

    #[test]
    fn test_occupied_entry() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert(1, "hello".to_string());

        match map.entry(1) {
            Entry::Occupied(mut entry) => {
                assert_eq!(entry.key(), &1);
                assert_eq!(entry.get(), &"hello".to_string());

                *entry.get_mut() = "world".to_string();
                assert_eq!(entry.get(), &"world".to_string());

                let old_value = entry.insert("new".to_string());
                assert_eq!(old_value, "world".to_string());
                assert_eq!(entry.get(), &"new".to_string());

                let (key, value) = entry.remove_entry();
                assert_eq!(key, 1);
                assert_eq!(value, "new".to_string());
            }
            Entry::Vacant(_) => panic!("Expected occupied entry"),
        }

        assert!(map.is_empty());
    }

    #[test]
    fn test_vacant_entry() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());

        match map.entry(1) {
            Entry::Vacant(entry) => {
                assert_eq!(entry.key(), &1);

                let value = entry.insert("hello".to_string());
                assert_eq!(value, &"hello".to_string());
            }
            Entry::Occupied(_) => panic!("Expected vacant entry"),
        }

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some(&"hello".to_string()));
    }

    #[test]
    fn test_iterators() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert(1, "one".to_string());
        map.insert(2, "two".to_string());
        map.insert(3, "three".to_string());

        let pairs: std::collections::HashMap<i32, String> =
            map.iter().map(|(k, v)| (*k, v.clone())).collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs.get(&1), Some(&"one".to_string()));
        assert_eq!(pairs.get(&2), Some(&"two".to_string()));
        assert_eq!(pairs.get(&3), Some(&"three".to_string()));

        let keys: std::collections::HashSet<i32> = map.keys().copied().collect();
        assert_eq!(keys.len(), 3);
        assert!(keys.contains(&1));
        assert!(keys.contains(&2));
        assert!(keys.contains(&3));

        let values: std::collections::HashSet<String> = map.values().cloned().collect();
        assert_eq!(values.len(), 3);
        assert!(values.contains("one"));
        assert!(values.contains("two"));
        assert!(values.contains("three"));
    }

    #[test]
    fn test_iter_mut_and_values_mut() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        for i in 0..10 {
            map.insert(i, i * 10);
        }

        for (key, value) in map.iter_mut() {
            *value += *key;
        }
        for i in 0..10 {
            assert_eq!(map.get(&i), Some(&(i * 10 + i)));
        }

        for value in map.values_mut() {
            *value = 0;
        }
        assert!(map.values().all(|&v| v == 0));
    }

    #[test]
    fn test_drain() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert(1, "one".to_string());
        map.insert(2, "two".to_string());
        map.insert(3, "three".to_string());

        let drained: std::collections::HashMap<i32, String> = map.drain().collect();
        assert_eq!(drained.len(), 3);
        assert!(map.is_empty());

        assert_eq!(drained.get(&1), Some(&"one".to_string()));
        assert_eq!(drained.get(&2), Some(&"two".to_string()));
        assert_eq!(drained.get(&3), Some(&"three".to_string()));
    }

    #[test]
    fn test_into_iter() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        map.insert(1, "one".to_string());
        map.insert(2, "two".to_string());

        let pairs: std::collections::HashMap<i32, String> = map.into_iter().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs.get(&1), Some(&"one".to_string()));
        assert_eq!(pairs.get(&2), Some(&"two".to_string()));
    }

    #[test]
    fn test_from_iterator_and_extend() {
        let mut map: HashMap<i32, i32, SipHashBuilder> =
            (0..5).map(|i| (i, i * i)).collect();
        assert_eq!(map.len(), 5);
        assert_eq!(map.get(&3), Some(&9));

        map.extend((5..8).map(|i| (i, i * i)));
        assert_eq!(map.len(), 8);
        assert_eq!(map.get(&7), Some(&49));
    }

    #[test]
    fn test_clone_independence() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());
        for i in 0..50 {
            map.insert(i, i.to_string());
        }

        let mut copy = map.clone();
        copy.remove(&10);
        copy.insert(0, "changed".to_string());

        assert_eq!(map.get(&10), Some(&"10".to_string()));
        assert_eq!(map.get(&0), Some(&"0".to_string()));
        assert_eq!(copy.len(), map.len() - 1);
        for i in 1..50 {
            if i != 10 {
                assert_eq!(map.get(&i), copy.get(&i));
            }
        }
    }

    #[test]
    fn test_partial_eq() {
        let mut a = HashMap::with_hasher(SipHashBuilder::default());
        let mut b = HashMap::with_hasher(SipHashBuilder::default());
        for i in 0..10 {
            a.insert(i, i * 2);
            b.insert(9 - i, (9 - i) * 2);
        }
        assert_eq!(a, b);

        b.insert(3, 0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_multiple_insertions() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());

        for i in 0..100 {
            map.insert(i, alloc::format!("value_{}", i));
        }

        assert_eq!(map.len(), 100);

        for i in 0..100 {
            assert_eq!(map.get(&i), Some(&alloc::format!("value_{}", i)));
        }
    }

    #[test]
    fn test_collision_handling() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());

        for i in 0..1000 {
            map.insert(i, i * 2);
        }

        assert_eq!(map.len(), 1000);

        for i in 0..1000 {
            assert_eq!(map.get(&i), Some(&(i * 2)));
        }

        for i in (0..1000).step_by(2) {
            assert_eq!(map.remove(&i), Some(i * 2));
        }

        assert_eq!(map.len(), 500);

        for i in (1..1000).step_by(2) {
            assert_eq!(map.get(&i), Some(&(i * 2)));
        }
    }

    #[test]
    fn test_string_keys() {
        let mut map = HashMap::with_hasher(SipHashBuilder::default());

        map.insert("hello".to_string(), 1);
        map.insert("world".to_string(), 2);
        map.insert("rust".to_string(), 3);

        assert_eq!(map.get(&"hello".to_string()), Some(&1));
        assert_eq!(map.get(&"world".to_string()), Some(&2));
        assert_eq!(map.get(&"rust".to_string()), Some(&3));
        assert_eq!(map.get(&"missing".to_string()), None);
    }

    #[test]
    fn test_default_trait() {
        let map: HashMap<i32, String, SipHashBuilder> = HashMap::default();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }
}
