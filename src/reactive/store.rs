use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Observer invoked with every new value of a node.
pub type Callback<T> = Rc<dyn Fn(&T)>;

/// Read side of a reactive value: its current value plus change notification.
///
/// `subscribe` does not replay the current value; callers that need it read
/// [`Readable::get`] first.
pub trait Readable<T> {
    fn get(&self) -> T;

    fn subscribe(&self, callback: Callback<T>) -> Subscription;
}

/// Handle for one registered observer. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Explicitly release the observer. Same as dropping the handle.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

struct SubscriberList<T> {
    next_id: Cell<u64>,
    generation: Cell<u64>,
    entries: RefCell<Vec<(u64, Callback<T>)>>,
}

/// Observer registry shared by stores and derived nodes.
pub(crate) struct Subscribers<T> {
    list: Rc<SubscriberList<T>>,
}

impl<T: 'static> Subscribers<T> {
    pub(crate) fn new() -> Self {
        Self {
            list: Rc::new(SubscriberList {
                next_id: Cell::new(0),
                generation: Cell::new(0),
                entries: RefCell::new(Vec::new()),
            }),
        }
    }

    pub(crate) fn add(&self, callback: Callback<T>) -> Subscription {
        let id = self.list.next_id.get();
        self.list.next_id.set(id + 1);
        self.list.entries.borrow_mut().push((id, callback));

        let list = Rc::downgrade(&self.list);
        Subscription::new(move || {
            if let Some(list) = list.upgrade() {
                list.entries.borrow_mut().retain(|(entry, _)| *entry != id);
            }
        })
    }

    /// Call every observer registered at the time of the call.
    ///
    /// A nested `notify` started by one of the observers supersedes this
    /// one: it has already delivered a newer value to every observer, so the
    /// remaining deliveries of `value` are dropped.
    pub(crate) fn notify(&self, value: &T) {
        let generation = self.list.generation.get().wrapping_add(1);
        self.list.generation.set(generation);

        let snapshot: Vec<Callback<T>> = self
            .list
            .entries
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in snapshot {
            if self.list.generation.get() != generation {
                break;
            }
            callback(value);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.list.entries.borrow().len()
    }
}

struct StoreInner<T> {
    value: RefCell<T>,
    subscribers: Subscribers<T>,
}

/// Writable reactive source. Clones share the same value and observers.
pub struct Store<T> {
    inner: Rc<StoreInner<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                value: RefCell::new(value),
                subscribers: Subscribers::new(),
            }),
        }
    }

    /// Read-only handle sharing this store's value and observers.
    pub fn reader(&self) -> StoreReader<T> {
        StoreReader {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Replace the value and notify every observer with it.
    ///
    /// All observers of one `set` see the same snapshot, even if one of them
    /// writes to the store again while being notified.
    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value.clone();
        self.inner.subscribers.notify(&value);
    }

    /// Compute the next value from the current one and publish it.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.get());
        self.set(next);
    }

    /// Borrow the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.len()
    }
}

impl<T: Clone + 'static> Readable<T> for Store<T> {
    fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    fn subscribe(&self, callback: Callback<T>) -> Subscription {
        self.inner.subscribers.add(callback)
    }
}

/// Observe-only side of a [`Store`]. Holders can read and subscribe but
/// never publish; only the owner of the `Store` writes.
///
/// ```compile_fail
/// use day_planner::reactive::Store;
///
/// let store = Store::new(1);
/// let reader = store.reader();
/// reader.set(2);
/// ```
pub struct StoreReader<T> {
    inner: Rc<StoreInner<T>>,
}

impl<T> Clone for StoreReader<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> StoreReader<T> {
    /// Borrow the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.len()
    }
}

impl<T: Clone + 'static> Readable<T> for StoreReader<T> {
    fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    fn subscribe(&self, callback: Callback<T>) -> Subscription {
        self.inner.subscribers.add(callback)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for StoreReader<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreReader")
            .field("value", &self.inner.value.borrow())
            .finish()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("value", &self.inner.value.borrow())
            .finish()
    }
}
