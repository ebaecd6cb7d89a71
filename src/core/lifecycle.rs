// Registration lifetimes for listeners, animation loops and timers.
//
// Every registration hands back a `Subscription`. Dropping it (or calling
// `dispose`) releases the registration exactly once. Callbacks that may still
// be queued by the host after release check a shared `Liveness` flag first.

use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;

/// Whether a repeating callback wants to keep running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

impl Flow {
    #[inline]
    pub fn is_stop(self) -> bool {
        matches!(self, Flow::Stop)
    }
}

/// Shared alive flag for one registration. Clones observe the same flag.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    #[inline]
    pub fn kill(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap `f` so it becomes a no-op once `live` has been killed.
pub fn guarded<A>(live: &Liveness, mut f: impl FnMut(A)) -> impl FnMut(A) {
    let live = live.clone();
    move |arg| {
        if live.is_alive() {
            f(arg);
        }
    }
}

/// Releases one registration when disposed or dropped.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Subscription that owns nothing.
    pub fn empty() -> Self {
        Self { release: None }
    }

    /// Tie `live` to this subscription: disposing kills it before running `release`.
    pub fn with_liveness(live: &Liveness, release: impl FnOnce() + 'static) -> Self {
        let live = live.clone();
        Self::new(move || {
            live.kill();
            release();
        })
    }

    pub fn dispose(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

/// Owns a component's subscriptions and releases them newest-first.
#[derive(Default)]
pub struct DisposeBag {
    subs: SmallVec<[Subscription; 4]>,
}

impl DisposeBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sub: Subscription) {
        self.subs.push(sub);
    }

    pub fn dispose_all(&mut self) {
        while let Some(sub) = self.subs.pop() {
            sub.dispose();
        }
    }
}

impl Extend<Subscription> for DisposeBag {
    fn extend<I: IntoIterator<Item = Subscription>>(&mut self, iter: I) {
        self.subs.extend(iter);
    }
}

impl Drop for DisposeBag {
    fn drop(&mut self) {
        self.dispose_all();
    }
}
