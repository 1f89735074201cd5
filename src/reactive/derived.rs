use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::store::{Callback, Readable, Subscribers, Subscription};

struct DerivedInner<T> {
    value: RefCell<T>,
    subscribers: Subscribers<T>,
    recomputes: Cell<u64>,
    upstream: RefCell<Vec<Subscription>>,
}

impl<T: Clone + PartialEq + 'static> DerivedInner<T> {
    fn new(initial: T) -> Self {
        Self {
            value: RefCell::new(initial),
            subscribers: Subscribers::new(),
            recomputes: Cell::new(0),
            upstream: RefCell::new(Vec::new()),
        }
    }

    /// Store a freshly computed value and forward it downstream if it changed.
    fn accept(&self, next: T) {
        self.recomputes.set(self.recomputes.get() + 1);
        let changed = *self.value.borrow() != next;
        if changed {
            *self.value.borrow_mut() = next.clone();
            self.subscribers.notify(&next);
        }
    }
}

/// A value computed from one or two upstream sources.
///
/// The node owns its upstream subscriptions; the upstream only holds a weak
/// reference back, so dropping the last handle detaches the node.
/// Downstream observers are notified only when the recomputed value differs
/// from the previous one.
pub struct Derived<T> {
    inner: Rc<DerivedInner<T>>,
}

impl<T> Clone for Derived<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Derived<T> {
    /// Derive from a single source.
    pub fn new<A, S>(source: &S, compute: impl Fn(&A) -> T + 'static) -> Self
    where
        A: 'static,
        S: Readable<A> + ?Sized,
    {
        let inner = Rc::new(DerivedInner::new(compute(&source.get())));
        let node = Rc::downgrade(&inner);
        let subscription = source.subscribe(Rc::new(move |value: &A| {
            if let Some(node) = node.upgrade() {
                node.accept(compute(value));
            }
        }));
        inner.upstream.borrow_mut().push(subscription);
        Self { inner }
    }

    /// Derive from two sources. Either source emitting recomputes the node
    /// against that source's new value and the last value seen from the other.
    pub fn combine<A, B, SA, SB>(a: &SA, b: &SB, compute: impl Fn(&A, &B) -> T + 'static) -> Self
    where
        A: Clone + 'static,
        B: Clone + 'static,
        SA: Readable<A> + ?Sized,
        SB: Readable<B> + ?Sized,
    {
        let latest = Rc::new(RefCell::new((a.get(), b.get())));
        let compute = Rc::new(compute);
        let initial = {
            let pair = latest.borrow();
            compute(&pair.0, &pair.1)
        };
        let inner = Rc::new(DerivedInner::new(initial));

        let on_a = {
            let node = Rc::downgrade(&inner);
            let latest = Rc::clone(&latest);
            let compute = Rc::clone(&compute);
            move |value: &A| {
                let Some(node) = node.upgrade() else { return };
                let next = {
                    let mut pair = latest.borrow_mut();
                    pair.0 = value.clone();
                    compute(&pair.0, &pair.1)
                };
                node.accept(next);
            }
        };
        let on_b = {
            let node = Rc::downgrade(&inner);
            let latest = Rc::clone(&latest);
            move |value: &B| {
                let Some(node) = node.upgrade() else { return };
                let next = {
                    let mut pair = latest.borrow_mut();
                    pair.1 = value.clone();
                    compute(&pair.0, &pair.1)
                };
                node.accept(next);
            }
        };

        let mut upstream = inner.upstream.borrow_mut();
        upstream.push(a.subscribe(Rc::new(on_a)));
        upstream.push(b.subscribe(Rc::new(on_b)));
        drop(upstream);
        Self { inner }
    }

    /// Number of times this node has been re-evaluated after construction.
    pub fn recompute_count(&self) -> u64 {
        self.inner.recomputes.get()
    }

    /// Borrow the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }
}

impl<T: Clone + PartialEq + 'static> Readable<T> for Derived<T> {
    fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    fn subscribe(&self, callback: Callback<T>) -> Subscription {
        self.inner.subscribers.add(callback)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Derived")
            .field("value", &self.inner.value.borrow())
            .field("recomputes", &self.inner.recomputes.get())
            .finish()
    }
}
