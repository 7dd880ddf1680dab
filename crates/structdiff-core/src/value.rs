/// Dynamically-typed values compared, rendered, and diffed by this crate.
///
/// [`Value`] is a closed sum type: every algorithm in the crate matches on it
/// exhaustively. Containers and functions are reference-counted handles so
/// that identity (used for the matcher's short-circuit, for function
/// equality, and for cycle detection) is a property of the handle rather than
/// of the data.
///
/// Containers are interior-mutable so callers can build self-referential
/// graphs after construction. Every walk over a container takes a snapshot of
/// its current entries, so no lock is held across recursion.
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

// ---------------------------------------------------------------------------
// Value
// ---------------------------------------------------------------------------

/// A single comparable, renderable datum.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absent marker, distinct from [`Value::Null`].
    Undefined,
    /// The explicit null marker.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// An IEEE 754 double. `NaN` is the distinguished not-a-number state and
    /// matches only another `NaN`.
    Number(f64),
    /// UTF-8 text.
    String(String),
    /// A callable, compared by identity.
    Function(Function),
    /// An ordered key/value mapping tagged as array or object.
    Container(Container),
}

impl Value {
    /// Builds an `Object` container with `Null` prototype from `(key, value)`
    /// pairs, preserving their order.
    pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        let container = Container::new(ContainerKind::Object);
        for (key, value) in entries {
            container.insert(key, value);
        }
        Self::Container(container)
    }

    /// Builds a dense `Array` container whose length equals the item count.
    pub fn array<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
        let container = Container::new(ContainerKind::Array);
        for (index, item) in items.into_iter().enumerate() {
            container.insert(index, item);
        }
        Self::Container(container)
    }

    /// Builds an `Array` container with only the given indices present.
    ///
    /// The array length is the larger of `length` and the highest index + 1.
    pub fn sparse_array<V: Into<Value>>(
        length: usize,
        entries: impl IntoIterator<Item = (usize, V)>,
    ) -> Self {
        let container = Container::new(ContainerKind::Array);
        container.set_length(length);
        for (index, item) in entries {
            container.insert(index, item);
        }
        Self::Container(container)
    }

    /// An `Object` container with no keys.
    pub fn empty_object() -> Self {
        Self::Container(Container::new(ContainerKind::Object))
    }

    /// An `Array` container with no indices and length zero.
    pub fn empty_array() -> Self {
        Self::Container(Container::new(ContainerKind::Array))
    }

    /// A fresh named function. Each call yields a distinct identity.
    pub fn function(name: impl Into<String>) -> Self {
        Self::Function(Function::named(name))
    }

    /// A fresh anonymous function. Each call yields a distinct identity.
    pub fn anonymous_function() -> Self {
        Self::Function(Function::anonymous())
    }

    /// The not-a-number state.
    pub fn nan() -> Self {
        Self::Number(f64::NAN)
    }

    /// Returns the container handle if this is a [`Value::Container`].
    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Self::Container(c) => Some(c),
            Self::Undefined
            | Self::Null
            | Self::Boolean(_)
            | Self::Number(_)
            | Self::String(_)
            | Self::Function(_) => None,
        }
    }

    /// Returns `true` for every variant except [`Value::Container`].
    pub fn is_flat(&self) -> bool {
        self.as_container().is_none()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: usize) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Self::Function(f)
    }
}

impl From<Container> for Value {
    fn from(c: Container) -> Self {
        Self::Container(c)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Undefined
    }
}

/// Clones the value. Containers and functions share the handle.
impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

// ---------------------------------------------------------------------------
// Function
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct FunctionInner {
    name: Option<String>,
}

/// A callable handle. Two functions are equal only if they are the same
/// handle (or clones of it); name and body are irrelevant.
#[derive(Clone)]
pub struct Function(Arc<FunctionInner>);

impl Function {
    /// Creates a function with a display name.
    ///
    /// An empty name is treated as anonymous.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self(Arc::new(FunctionInner {
            name: if name.is_empty() { None } else { Some(name) },
        }))
    }

    /// Creates a function with no display name.
    pub fn anonymous() -> Self {
        Self(Arc::new(FunctionInner { name: None }))
    }

    /// The display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// Returns `true` if `self` and `other` are the same function.
    pub fn same_as(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Function")
            .field(&self.name().unwrap_or("<anon>"))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A property key: a non-negative integer index or a name.
///
/// Converting a string that spells a canonical index (`"0"`, `"17"`, but not
/// `"007"` or `"-1"`) yields [`Key::Index`], so `"1"` and `1` address the
/// same property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// An integer index.
    Index(usize),
    /// Any other property name.
    Name(String),
}

impl Key {
    /// Parses `name`, normalising canonical integer spellings to an index.
    pub fn parse(name: &str) -> Self {
        let canonical = !name.is_empty()
            && name.bytes().all(|b| b.is_ascii_digit())
            && (name == "0" || !name.starts_with('0'));
        if canonical {
            if let Ok(index) = name.parse::<usize>() {
                return Self::Index(index);
            }
        }
        Self::Name(name.to_owned())
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        match Self::parse(&name) {
            Self::Index(index) => Self::Index(index),
            Self::Name(_) => Self::Name(name),
        }
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

// ---------------------------------------------------------------------------
// Container
// ---------------------------------------------------------------------------

/// Whether a container is list-like or a plain keyed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Sparse integer-indexed container with an implicit length.
    Array,
    /// Keyed container listed in insertion order.
    Object,
}

impl ContainerKind {
    /// Opening and closing brackets used when rendering this kind.
    pub fn brackets(self) -> (char, char) {
        match self {
            Self::Array => ('[', ']'),
            Self::Object => ('{', '}'),
        }
    }

    /// Lower-case name used in diff annotations.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
struct ContainerState {
    prototype: Value,
    /// Always zero for objects.
    length: usize,
    /// Array indices. Unused for objects, which keep every key in `named`.
    indexed: BTreeMap<usize, Value>,
    named: IndexMap<Key, Value>,
}

#[derive(Debug)]
struct ContainerCell {
    kind: ContainerKind,
    state: RwLock<ContainerState>,
}

/// A shared, interior-mutable key/value container.
///
/// Cloning the handle shares the container; [`Container::same_as`] tests
/// handle identity.
#[derive(Clone)]
pub struct Container(Arc<ContainerCell>);

/// A point-in-time copy of a container's entries in listing order.
///
/// Sub-values are handle clones, so building a snapshot is shallow.
#[derive(Debug, Clone)]
pub(crate) struct Snapshot {
    pub(crate) kind: ContainerKind,
    pub(crate) prototype: Value,
    /// `Some` for arrays only.
    pub(crate) length: Option<usize>,
    pub(crate) properties: IndexMap<Key, Value>,
}

impl Container {
    /// Creates an empty container of `kind` with a `Null` prototype.
    pub fn new(kind: ContainerKind) -> Self {
        Self::with_prototype(kind, Value::Null)
    }

    /// Creates an empty container of `kind` with the given prototype.
    pub fn with_prototype(kind: ContainerKind, prototype: impl Into<Value>) -> Self {
        Self(Arc::new(ContainerCell {
            kind,
            state: RwLock::new(ContainerState {
                prototype: prototype.into(),
                length: 0,
                indexed: BTreeMap::new(),
                named: IndexMap::new(),
            }),
        }))
    }

    fn read(&self) -> RwLockReadGuard<'_, ContainerState> {
        self.0.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ContainerState> {
        self.0.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// The container kind, fixed at construction.
    pub fn kind(&self) -> ContainerKind {
        self.0.kind
    }

    /// The current prototype value.
    pub fn prototype(&self) -> Value {
        self.read().prototype.clone()
    }

    /// Replaces the prototype value.
    pub fn set_prototype(&self, prototype: impl Into<Value>) {
        self.write().prototype = prototype.into();
    }

    /// Inserts or replaces a property, returning the previous value.
    ///
    /// On arrays an index insert raises the length to at least `index + 1`.
    /// Re-inserting an existing object key keeps its original position.
    pub fn insert(&self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        let mut state = self.write();
        match (self.0.kind, key) {
            (ContainerKind::Array, Key::Index(index)) => {
                state.length = state.length.max(index.saturating_add(1));
                state.indexed.insert(index, value)
            }
            (ContainerKind::Array | ContainerKind::Object, key) => state.named.insert(key, value),
        }
    }

    /// Removes a property, returning its value. Array length is unchanged.
    pub fn remove(&self, key: &Key) -> Option<Value> {
        let mut state = self.write();
        match (self.0.kind, key) {
            (ContainerKind::Array, Key::Index(index)) => state.indexed.remove(index),
            (ContainerKind::Array | ContainerKind::Object, key) => state.named.shift_remove(key),
        }
    }

    /// Returns a handle clone of the value stored under `key`.
    pub fn get(&self, key: &Key) -> Option<Value> {
        let state = self.read();
        match (self.0.kind, key) {
            (ContainerKind::Array, Key::Index(index)) => state.indexed.get(index).cloned(),
            (ContainerKind::Array | ContainerKind::Object, key) => state.named.get(key).cloned(),
        }
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.get(key).is_some()
    }

    /// Number of present keys. The implicit array length is not counted.
    pub fn len(&self) -> usize {
        let state = self.read();
        state.indexed.len() + state.named.len()
    }

    /// Returns `true` if no keys are present, regardless of array length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The implicit length of an array; `None` for objects.
    pub fn array_length(&self) -> Option<usize> {
        match self.0.kind {
            ContainerKind::Array => Some(self.read().length),
            ContainerKind::Object => None,
        }
    }

    /// Sets the implicit length of an array. Indices at or beyond the new
    /// length are dropped. Has no effect on objects.
    pub fn set_length(&self, length: usize) {
        if self.0.kind == ContainerKind::Object {
            return;
        }
        let mut state = self.write();
        state.length = length;
        let _dropped = state.indexed.split_off(&length);
    }

    /// Present keys in listing order.
    pub fn keys(&self) -> Vec<Key> {
        self.snapshot().properties.into_keys().collect()
    }

    /// Present entries in listing order.
    pub fn entries(&self) -> Vec<(Key, Value)> {
        self.snapshot().properties.into_iter().collect()
    }

    /// Returns `true` if `self` and `other` are the same container.
    pub fn same_as(&self, other: &Container) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the shared cell; stable for the lifetime of the handle.
    pub(crate) fn identity(&self) -> usize {
        Arc::as_ptr(&self.0).addr()
    }

    /// Copies the current state in listing order: array indices ascending,
    /// then named keys in insertion order.
    pub(crate) fn snapshot(&self) -> Snapshot {
        let state = self.read();
        let mut properties = IndexMap::with_capacity(state.indexed.len() + state.named.len());
        for (index, value) in &state.indexed {
            properties.insert(Key::Index(*index), value.clone());
        }
        for (key, value) in &state.named {
            properties.insert(key.clone(), value.clone());
        }
        Snapshot {
            kind: self.0.kind,
            prototype: state.prototype.clone(),
            length: match self.0.kind {
                ContainerKind::Array => Some(state.length),
                ContainerKind::Object => None,
            },
            properties,
        }
    }
}

impl fmt::Debug for Container {
    /// Shallow: containers may be cyclic.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("kind", &self.0.kind)
            .field("len", &self.len())
            .field("id", &format_args!("{:#x}", self.identity()))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
