use crate::domain::ports::CacheStore;
use crate::utils::error::{Result, ShowcaseError};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Largest `n` whose factorial fits in a `u128`.
pub const MAX_FACTORIAL_INPUT: u32 = 34;

/// Cache that keeps every entry for the life of the process.
#[derive(Debug)]
pub struct UnboundedStore<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> Default for UnboundedStore<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V> CacheStore<K, V> for UnboundedStore<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    fn insert(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// A pure function paired with a cache keyed by its exact argument.
///
/// The wrapped function receives the wrapper itself so that recursive calls
/// go through the cache. Use a tuple for `K` when the function takes several
/// arguments. Only pure functions should be wrapped: a cached value is
/// returned as-is for every later call with an equal key.
pub struct Memoized<K, V, S = UnboundedStore<K, V>> {
    func: fn(&Memoized<K, V, S>, K) -> V,
    store: Mutex<S>,
    invocations: AtomicUsize,
    _entry: PhantomData<fn(K) -> V>,
}

impl<K, V, S> Memoized<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: CacheStore<K, V>,
{
    pub fn new(func: fn(&Memoized<K, V, S>, K) -> V) -> Self {
        Self::with_store(func, S::default())
    }

    pub fn with_store(func: fn(&Memoized<K, V, S>, K) -> V, store: S) -> Self {
        Self {
            func,
            store: Mutex::new(store),
            invocations: AtomicUsize::new(0),
            _entry: PhantomData,
        }
    }

    pub fn call(&self, key: K) -> V {
        if let Some(value) = self.store.lock().get(&key) {
            return value.clone();
        }

        // The lock is released here; the wrapped function may re-enter `call`.
        self.invocations.fetch_add(1, Ordering::Relaxed);
        let value = (self.func)(self, key.clone());
        self.store.lock().insert(key, value.clone());
        value
    }

    /// How many times the wrapped function has actually run.
    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::Relaxed)
    }

    pub fn cached_len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn clear(&self) {
        self.store.lock().clear();
        self.invocations.store(0, Ordering::Relaxed);
    }
}

fn factorial_step(memo: &Memoized<u32, u128>, n: u32) -> u128 {
    if n <= 1 {
        1
    } else {
        u128::from(n) * memo.call(n - 1)
    }
}

/// The process-wide cache behind [`factorial`].
pub fn factorial_cache() -> &'static Memoized<u32, u128> {
    static FACTORIAL: OnceLock<Memoized<u32, u128>> = OnceLock::new();
    FACTORIAL.get_or_init(|| Memoized::new(factorial_step))
}

pub fn factorial(n: u32) -> Result<u128> {
    if n > MAX_FACTORIAL_INPUT {
        return Err(ShowcaseError::overflow("factorial", n));
    }
    Ok(factorial_cache().call(n))
}
