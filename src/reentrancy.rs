//! Debug-only reentrancy check.
//!
//! The map is single-threaded and non-reentrant: the only user code that can
//! run while its internals are mid-mutation is `K: Eq`/`K: Hash` during chain
//! probing. In debug builds this tracker panics if such user code calls back
//! into the same map instance. In release builds entering compiles to nothing.

use core::cell::Cell;
use core::marker::PhantomData;

/// Embedded per-map tracker. Public entry points open a scope with
/// `let _g = self.reentrancy.lock();` and the scope closes on drop.
#[derive(Debug, Default)]
pub(crate) struct ReentryCheck {
    #[cfg(debug_assertions)]
    active: Cell<bool>,
    // The phantom Cell keeps the owning map !Sync in every build profile,
    // matching the single-threaded contract.
    _not_sync: PhantomData<Cell<()>>,
}

impl ReentryCheck {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            active: Cell::new(false),
            _not_sync: PhantomData,
        }
    }

    /// Open a non-reentrant scope. Panics in debug builds if one is already
    /// open on this instance.
    #[inline]
    pub(crate) fn lock(&self) -> ReentryScope<'_> {
        #[cfg(debug_assertions)]
        {
            assert!(
                !self.active.replace(true),
                "reentrant call into OrderedHashMap from key Eq/Hash code"
            );
            return ReentryScope { owner: self };
        }

        #[cfg(not(debug_assertions))]
        {
            return ReentryScope { _scope: PhantomData };
        }
    }
}

/// RAII scope returned by [`ReentryCheck::lock`].
pub(crate) struct ReentryScope<'a> {
    #[cfg(debug_assertions)]
    owner: &'a ReentryCheck,
    #[cfg(not(debug_assertions))]
    _scope: PhantomData<&'a ()>,
}

impl Drop for ReentryScope<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        self.owner.active.set(false);
    }
}
