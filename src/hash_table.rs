use alloc::vec::Vec;
use core::fmt::Debug;
use core::mem;

/// Smallest nonzero slot count. Capacities are always zero or a power of two
/// at least this large, so masking works for the natural-index computation.
const MIN_CAPACITY: usize = 8;

#[derive(Clone)]
enum Slot<V> {
    Empty,
    Occupied { hash: u64, value: V },
}

/// A snapshot of low-level probe statistics.
///
/// Only available with the `stats` feature.
#[cfg(feature = "stats")]
#[derive(Debug, Clone)]
pub struct ProbeStats {
    /// Number of elements currently in the table
    pub populated: usize,
    /// Maximum number of elements before the table grows
    pub capacity: usize,
    /// Total number of slots allocated
    pub total_slots: usize,
    /// Load factor (populated / total_slots)
    pub load_factor: f64,
    /// Largest displacement from a natural slot since the last rehash
    pub max_probe_offset: usize,
}

#[cfg(feature = "stats")]
impl ProbeStats {
    /// Pretty-print the probe statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Probe Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.populated,
            self.total_slots,
            self.load_factor * 100.0
        );
        println!("Capacity before growth: {}", self.capacity);
        println!("Max probe offset: {}", self.max_probe_offset);
    }
}

/// A hash table using linear probing with a tracked maximum probe span.
///
/// `HashTable<V>` stores values of type `V` and provides fast insertion,
/// lookup, and removal operations. Unlike standard hash maps, this
/// implementation requires you to provide both the hash value and an equality
/// predicate for each operation.
///
/// Every entry records the full 64-bit hash it was inserted under, so growing
/// the table never re-invokes a hash function. Removal simply empties the
/// slot: the table tracks the largest displacement any entry has ever been
/// placed at since the last rehash, and lookups walk exactly that far, so no
/// tombstone markers are needed and no entries are moved.
///
/// ## Example
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use siphasher::sip::SipHasher;
/// # use span_hash::hash_table::HashTable;
/// #
/// # #[derive(Debug, PartialEq)]
/// # struct Person {
/// #     id: u64,
/// #     name: String,
/// # }
/// #
/// # fn hash_id(id: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     id.hash(&mut hasher);
/// #     hasher.finish()
/// # }
///
/// let mut table = HashTable::with_capacity(100);
/// let hash = hash_id(123);
///
/// match table.entry(hash, |p: &Person| p.id == 123) {
///     span_hash::hash_table::Entry::Vacant(entry) => {
///         entry.insert(Person {
///             id: 123,
///             name: "Alice".to_string(),
///         });
///     }
///     span_hash::hash_table::Entry::Occupied(_) => {
///         println!("Person already exists");
///     }
/// }
/// ```
pub struct HashTable<V> {
    slots: Vec<Slot<V>>,
    populated: usize,
    max_offset: usize,
}

impl<V> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashTable")
            .field("populated", &self.populated)
            .field("slots", &self.slots.len())
            .field("max_offset", &self.max_offset)
            .finish()
    }
}

impl<V: Clone> Clone for HashTable<V> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            populated: self.populated,
            max_offset: self.max_offset,
        }
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Creates a new, empty hash table.
    ///
    /// The table does not allocate until the first insertion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use span_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<String> = HashTable::new();
    /// assert!(table.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            populated: 0,
            max_offset: 0,
        }
    }

    /// Creates a new hash table with the specified capacity.
    ///
    /// The table will be able to hold at least `capacity` elements without
    /// growing. The actual slot count is the smallest power of two, at least
    /// 8, that keeps `capacity` elements under the 75% load-factor ceiling.
    /// A capacity of zero allocates nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use span_hash::hash_table::HashTable;
    /// #
    /// // Create a table that can hold at least 100 items without resizing
    /// let table: HashTable<String> = HashTable::with_capacity(100);
    /// assert!(table.capacity() >= 100);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        if capacity == 0 {
            return Self::new();
        }

        // Smallest slot count that keeps `capacity` entries at or below the
        // 0.75 ceiling, rounded up to a power of two.
        let min_slots = capacity
            .checked_mul(4)
            .expect("allocation size overflow")
            .div_ceil(3);
        let len = min_slots.next_power_of_two().max(MIN_CAPACITY);

        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || Slot::Empty);

        Self {
            slots,
            populated: 0,
            max_offset: 0,
        }
    }

    /// Returns the number of elements in the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use siphasher::sip::SipHasher;
    /// # use span_hash::hash_table::HashTable;
    /// #
    /// # fn hash_u64(n: u64) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     n.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// assert_eq!(table.len(), 0);
    ///
    /// table.entry(hash_u64(1), |&n: &u64| n == 1).or_insert(1);
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use span_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<i32> = HashTable::with_capacity(10);
    /// assert!(table.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the current capacity of the table.
    ///
    /// The capacity represents the maximum number of elements the table can
    /// hold before it needs to grow: three quarters of the allocated slot
    /// count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use span_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<i32> = HashTable::with_capacity(100);
    /// assert!(table.capacity() >= 100);
    /// ```
    pub fn capacity(&self) -> usize {
        self.slots.len() * 3 / 4
    }

    /// Returns the table's load factor: elements per allocated slot.
    ///
    /// Returns NaN for a table with no allocated slots. Diagnostic only; the
    /// growth policy keeps this at or below 0.75.
    pub fn load_factor(&self) -> f64 {
        self.populated as f64 / self.slots.len() as f64
    }

    /// Removes all elements from the table and releases its storage.
    ///
    /// The table returns to the zero-capacity state of a freshly created one:
    /// the slot array is dropped and the probe span resets to zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use siphasher::sip::SipHasher;
    /// # use span_hash::hash_table::HashTable;
    /// #
    /// # fn hash_u64(n: u64) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     n.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// table.entry(hash_u64(1), |&n: &u64| n == 1).or_insert(1);
    /// assert_eq!(table.len(), 1);
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.slots = Vec::new();
        self.populated = 0;
        self.max_offset = 0;
    }

    /// Finds a value in the table by hash and equality predicate.
    ///
    /// Returns a reference to the value if found, or `None` if no matching
    /// value exists.
    ///
    /// # Arguments
    ///
    /// * `hash` - The hash value to search for
    /// * `eq` - A predicate function that returns `true` for the desired value
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use siphasher::sip::SipHasher;
    /// # use span_hash::hash_table::HashTable;
    /// #
    /// # fn hash_u64(n: u64) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     n.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// table.entry(hash_u64(42), |&n: &u64| n == 42).or_insert(42);
    ///
    /// let found = table.find(hash_u64(42), |&n| n == 42);
    /// assert_eq!(found, Some(&42));
    ///
    /// let not_found = table.find(hash_u64(99), |&n| n == 99);
    /// assert_eq!(not_found, None);
    /// ```
    #[inline]
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        let index = self.find_index(hash, eq)?;
        Some(self.value_at(index))
    }

    /// Finds a value in the table by hash and equality predicate, returning a
    /// mutable reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use siphasher::sip::SipHasher;
    /// # use span_hash::hash_table::HashTable;
    /// #
    /// # fn hash_u64(n: u64) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     n.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// table.entry(hash_u64(42), |&n: &u64| n == 42).or_insert(42);
    ///
    /// if let Some(value) = table.find_mut(hash_u64(42), |&n| n == 42) {
    ///     *value = 100;
    /// }
    ///
    /// assert_eq!(table.find(hash_u64(42), |&n| n == 100), Some(&100));
    /// ```
    #[inline]
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        let index = self.find_index(hash, eq)?;
        Some(self.value_at_mut(index))
    }

    /// Gets an entry for the given hash and equality predicate.
    ///
    /// This method returns an `Entry` enum that allows for efficient
    /// insertion or modification of values. Looking up the entry never grows
    /// the table; growth happens only when a value is inserted through a
    /// vacant entry, so overwriting an existing value never rehashes.
    ///
    /// # Arguments
    ///
    /// * `hash` - The hash value for the entry
    /// * `eq` - A predicate function that returns `true` for matching values
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use siphasher::sip::SipHasher;
    /// # use span_hash::hash_table::HashTable;
    /// #
    /// # fn hash_str(s: &str) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     s.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// let hash = hash_str("hello");
    ///
    /// match table.entry(hash, |s: &String| s == "hello") {
    ///     span_hash::hash_table::Entry::Vacant(entry) => {
    ///         entry.insert("world".to_string());
    ///     }
    ///     span_hash::hash_table::Entry::Occupied(mut entry) => {
    ///         *entry.get_mut() = "updated".to_string();
    ///     }
    /// }
    ///
    /// // Or use the convenience method
    /// table
    ///     .entry(hash, |s: &String| s == "hello")
    ///     .or_insert("hello".to_string());
    /// ```
    #[inline]
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Entry<'_, V> {
        match self.find_index(hash, eq) {
            Some(index) => Entry::Occupied(OccupiedEntry { table: self, index }),
            None => Entry::Vacant(VacantEntry { table: self, hash }),
        }
    }

    /// Removes and returns a value from the table.
    ///
    /// The value is identified by its hash and an equality predicate. If the
    /// value is found, its slot is emptied in place; no other entries move,
    /// and the tracked probe span is left as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use siphasher::sip::SipHasher;
    /// # use span_hash::hash_table::HashTable;
    /// #
    /// # fn hash_u64(n: u64) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     n.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// table.entry(hash_u64(42), |&n: &u64| n == 42).or_insert(42);
    ///
    /// assert_eq!(table.remove(hash_u64(42), |&n| n == 42), Some(42));
    /// assert!(table.is_empty());
    ///
    /// // Removing a non-existent value returns None
    /// assert_eq!(table.remove(hash_u64(99), |&n| n == 99), None);
    /// ```
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<V> {
        let index = self.find_index(hash, eq)?;
        Some(self.take_slot(index))
    }

    /// Retains only the values specified by the predicate.
    ///
    /// Removal through the predicate behaves exactly like [`remove`]: slots
    /// are emptied in place and nothing is relocated.
    ///
    /// [`remove`]: HashTable::remove
    pub fn retain(&mut self, mut f: impl FnMut(&mut V) -> bool) {
        for index in 0..self.slots.len() {
            let keep = match &mut self.slots[index] {
                Slot::Occupied { value, .. } => f(value),
                Slot::Empty => continue,
            };
            if !keep {
                self.take_slot(index);
            }
        }
    }

    /// Returns an iterator over all values in the table.
    ///
    /// The iterator yields `&V` references in slot-array order, which depends
    /// on capacity and insertion history.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use siphasher::sip::SipHasher;
    /// # use span_hash::hash_table::HashTable;
    /// #
    /// # fn hash_str(s: &str) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     s.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// table
    ///     .entry(hash_str("key1"), |s: &String| s == "key1")
    ///     .or_insert("key1".to_string());
    ///
    /// for value in table.iter() {
    ///     println!("Value: {}", value);
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            table: self,
            index: 0,
        }
    }

    /// Returns an iterator that removes and yields all values from the table.
    ///
    /// After calling `drain()`, the table will be empty. Values are yielded
    /// in slot-array order; dropping the iterator removes any values it has
    /// not yielded yet.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use siphasher::sip::SipHasher;
    /// # use span_hash::hash_table::HashTable;
    /// #
    /// # fn hash_str(s: &str) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     s.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// table
    ///     .entry(hash_str("key1"), |s: &String| s == "key1")
    ///     .or_insert("key1".to_string());
    ///
    /// let values: Vec<String> = table.drain().collect();
    /// assert!(table.is_empty());
    /// assert_eq!(values.len(), 1);
    /// ```
    pub fn drain(&mut self) -> Drain<'_, V> {
        Drain {
            table: self,
            index: 0,
        }
    }

    /// Returns a snapshot of low-level probe statistics.
    ///
    /// Only available with the `stats` feature.
    #[cfg(feature = "stats")]
    pub fn probe_stats(&self) -> ProbeStats {
        ProbeStats {
            populated: self.populated,
            capacity: self.capacity(),
            total_slots: self.slots.len(),
            load_factor: self.load_factor(),
            max_probe_offset: self.max_offset,
        }
    }

    #[inline(always)]
    fn mask(&self) -> usize {
        debug_assert!(
            self.slots.len().is_power_of_two(),
            "table size must be a power of two"
        );
        self.slots.len() - 1
    }

    /// Walk up to `max_offset + 1` slots from the hash's natural index,
    /// wrapping. Empty slots do not terminate the walk: a removal may have
    /// punched a hole in the middle of a longer probe chain, and the tracked
    /// bound is the only thing that ends the search.
    #[inline]
    fn find_index(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<usize> {
        // An empty table has no values; do not mask by zero.
        if self.slots.is_empty() {
            return None;
        }

        let mask = self.mask();
        let mut index = (hash as usize) & mask;

        for _ in 0..=self.max_offset {
            if let Slot::Occupied {
                hash: stored,
                value,
            } = &self.slots[index]
                && *stored == hash
                && eq(value)
            {
                return Some(index);
            }
            index = (index + 1) & mask;
        }

        None
    }

    /// Find the first empty slot at or after the hash's natural index,
    /// raising `max_offset` to cover it. The bound is updated before the
    /// caller writes the slot, so nothing is ever reachable beyond it.
    fn probe_vacant(&mut self, hash: u64) -> usize {
        debug_assert!(self.populated < self.slots.len());

        let mask = self.mask();
        let mut index = (hash as usize) & mask;
        let mut offset = 0;

        while matches!(self.slots[index], Slot::Occupied { .. }) {
            index = (index + 1) & mask;
            offset += 1;
        }

        if offset > self.max_offset {
            self.max_offset = offset;
        }

        index
    }

    #[inline(always)]
    fn should_grow(&self) -> bool {
        // Keep the load factor at or below 0.75 after the pending insertion.
        self.slots.is_empty() || self.populated + 1 > self.slots.len() * 3 / 4
    }

    /// Doubles the slot array (or allocates the first one) and reinserts
    /// every live entry from its cached hash. The replacement store is built
    /// in full before the live one is touched, so a failed allocation leaves
    /// the table unchanged. The probe span restarts at zero and is rebuilt by
    /// the reinsertion loop.
    fn grow(&mut self) {
        let new_len = if self.slots.is_empty() {
            MIN_CAPACITY
        } else {
            self.slots.len() * 2
        };

        let mut new_slots = Vec::with_capacity(new_len);
        new_slots.resize_with(new_len, || Slot::Empty);

        let old_slots = mem::replace(&mut self.slots, new_slots);
        self.populated = 0;
        self.max_offset = 0;

        for slot in old_slots {
            if let Slot::Occupied { hash, value } = slot {
                let index = self.probe_vacant(hash);
                self.slots[index] = Slot::Occupied { hash, value };
                self.populated += 1;
            }
        }
    }

    fn take_slot(&mut self, index: usize) -> V {
        match mem::replace(&mut self.slots[index], Slot::Empty) {
            Slot::Occupied { value, .. } => {
                self.populated -= 1;
                value
            }
            Slot::Empty => unreachable!("removal of a slot that was proven occupied"),
        }
    }

    fn value_at(&self, index: usize) -> &V {
        match &self.slots[index] {
            Slot::Occupied { value, .. } => value,
            Slot::Empty => unreachable!("probe result points at an empty slot"),
        }
    }

    fn value_at_mut(&mut self, index: usize) -> &mut V {
        match &mut self.slots[index] {
            Slot::Occupied { value, .. } => value,
            Slot::Empty => unreachable!("probe result points at an empty slot"),
        }
    }
}

/// A view into a single entry in the table, which may either be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
pub enum Entry<'a, V> {
    /// A vacant entry - the value is not present in the table
    Vacant(VacantEntry<'a, V>),
    /// An occupied entry - the value is present in the table
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts a default value if the entry is vacant and returns a mutable
    /// reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use siphasher::sip::SipHasher;
    /// # use span_hash::hash_table::HashTable;
    /// #
    /// # fn hash_str(s: &str) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     s.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// let hash = hash_str("key");
    ///
    /// let value = table
    ///     .entry(hash, |s: &String| s == "key")
    ///     .or_insert("key".to_string());
    /// assert_eq!(value, "key");
    ///
    /// // A second call returns the existing value
    /// let existing = table
    ///     .entry(hash, |s: &String| s == "key")
    ///     .or_insert("other".to_string());
    /// assert_eq!(existing, "key");
    /// ```
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts a value computed from a closure if the entry is vacant and
    /// returns a mutable reference.
    pub fn or_insert_with(self, default: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }
}

/// A view into a vacant entry in the table.
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    hash: u64,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Inserts the value into the table and returns a mutable reference to
    /// it.
    ///
    /// This is the only point at which the table grows: if the insertion
    /// would push the load factor past 0.75 (or the table has no slots yet),
    /// the table rehashes before the value is placed.
    pub fn insert(self, value: V) -> &'a mut V {
        let table = self.table;
        if table.should_grow() {
            table.grow();
        }

        let index = table.probe_vacant(self.hash);
        table.slots[index] = Slot::Occupied {
            hash: self.hash,
            value,
        };
        table.populated += 1;

        table.value_at_mut(index)
    }
}

/// A view into an occupied entry in the table.
pub struct OccupiedEntry<'a, V> {
    table: &'a mut HashTable<V>,
    index: usize,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        self.table.value_at(self.index)
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        self.table.value_at_mut(self.index)
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        self.table.value_at_mut(self.index)
    }

    /// Removes the entry from the table and returns the value.
    ///
    /// The slot is emptied in place; no other entries move.
    pub fn remove(self) -> V {
        self.table.take_slot(self.index)
    }
}

/// An iterator over the values of a `HashTable`.
///
/// Advances through the slot array in order, skipping empty slots.
pub struct Iter<'a, V> {
    table: &'a HashTable<V>,
    index: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.table.slots.len() {
            let index = self.index;
            self.index += 1;
            if let Slot::Occupied { value, .. } = &self.table.slots[index] {
                return Some(value);
            }
        }
        None
    }
}

/// A draining iterator over the values of a `HashTable`.
pub struct Drain<'a, V> {
    table: &'a mut HashTable<V>,
    index: usize,
}

impl<V> Iterator for Drain<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.table.slots.len() {
            let index = self.index;
            self.index += 1;
            if matches!(self.table.slots[index], Slot::Occupied { .. }) {
                return Some(self.table.take_slot(index));
            }
        }
        None
    }
}

impl<V> Drop for Drain<'_, V> {
    fn drop(&mut self) {
        for _ in self {}
    }
}

/// A consuming iterator over the values of a `HashTable`.
pub struct IntoIter<V> {
    slots: alloc::vec::IntoIter<Slot<V>>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.slots.next()? {
                Slot::Occupied { value, .. } => return Some(value),
                Slot::Empty => {}
            }
        }
    }
}

impl<V> IntoIterator for HashTable<V> {
    type IntoIter = IntoIter<V>;
    type Item = V;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            slots: self.slots.into_iter(),
        }
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type IntoIter = Iter<'a, V>;
    type Item = &'a V;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
