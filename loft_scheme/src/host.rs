// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities consumed by [`SchemeScope`](crate::SchemeScope).
//!
//! A host supplies the system preference signal and somewhere to put the
//! generated stylesheet. [`ManualPreference`] and [`StyleSheets`] are in-memory
//! implementations for headless hosts and tests.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

/// Callback invoked with `true` when the system switches to dark, `false` for light.
pub type PreferenceListener = Box<dyn FnMut(bool)>;

/// Identifier of an attached preference listener.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubscriptionId(pub u64);

/// The host's `prefers-color-scheme` signal.
pub trait PreferenceSource {
    /// Whether the system currently prefers a dark scheme.
    fn prefers_dark(&self) -> bool;
    /// Attach `listener`; it fires on every preference change until detached.
    fn subscribe(&self, listener: PreferenceListener) -> SubscriptionId;
    /// Detach a listener previously returned by [`PreferenceSource::subscribe`].
    fn unsubscribe(&self, id: SubscriptionId);
}

/// Identifier of one installed stylesheet.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SheetId(pub u64);

/// Destination for generated stylesheets.
///
/// Every injection gets its own [`SheetId`], even when several sheets target the
/// same selector. Later sheets win in the cascade.
pub trait StyleSink {
    /// Install a new stylesheet for `selector`.
    fn inject(&mut self, selector: &str, css: &str) -> SheetId;
    /// Replace the contents of an installed stylesheet.
    fn update(&mut self, id: SheetId, css: &str);
    /// Remove an installed stylesheet. Unknown ids are ignored.
    fn retract(&mut self, id: SheetId);
}

type SharedListener = Rc<RefCell<PreferenceListener>>;

#[derive(Default)]
struct ManualInner {
    dark: Cell<bool>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(SubscriptionId, SharedListener)>>,
}

/// A preference source driven by hand.
///
/// Clones share state, so a test (or a host bridging an OS notification) can
/// keep one clone and flip the preference with [`ManualPreference::set_prefers_dark`].
#[derive(Clone, Default)]
pub struct ManualPreference {
    inner: Rc<ManualInner>,
}

impl core::fmt::Debug for ManualPreference {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ManualPreference")
            .field("dark", &self.inner.dark.get())
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}

impl ManualPreference {
    /// A source with the given initial preference.
    pub fn new(prefers_dark: bool) -> Self {
        let source = Self::default();
        source.inner.dark.set(prefers_dark);
        source
    }

    /// Change the preference and notify every attached listener.
    ///
    /// Listeners fire even when the value is unchanged, as a platform
    /// notification would. A listener that changes the preference from inside
    /// its own callback is not re-entered; the value is still recorded and the
    /// other listeners are notified.
    pub fn set_prefers_dark(&self, dark: bool) {
        self.inner.dark.set(dark);
        let listeners: Vec<SharedListener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            let Ok(mut listener) = listener.try_borrow_mut() else {
                continue;
            };
            (*listener)(dark);
        }
    }

    /// Number of attached listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl PreferenceSource for ManualPreference {
    fn prefers_dark(&self) -> bool {
        self.inner.dark.get()
    }

    fn subscribe(&self, listener: PreferenceListener) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        let shared: SharedListener = Rc::new(RefCell::new(listener));
        self.inner.listeners.borrow_mut().push((id, shared));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.listeners.borrow_mut().retain(|(i, _)| *i != id);
    }
}

/// In-memory stylesheet store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSheets {
    sheets: BTreeMap<SheetId, (String, String)>,
    next_id: u64,
    injections: usize,
}

impl StyleSheets {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The winning stylesheet for `selector`: the most recently injected one.
    pub fn get(&self, selector: &str) -> Option<&str> {
        self.sheets
            .values()
            .rev()
            .find(|(s, _)| s == selector)
            .map(|(_, css)| css.as_str())
    }

    /// Every stylesheet for `selector`, in cascade order.
    pub fn sheets_for<'a>(&'a self, selector: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.sheets
            .values()
            .filter(move |(s, _)| s == selector)
            .map(|(_, css)| css.as_str())
    }

    /// Contents of the stylesheet `id`.
    pub fn sheet(&self, id: SheetId) -> Option<&str> {
        self.sheets.get(&id).map(|(_, css)| css.as_str())
    }

    /// Number of installed stylesheets.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// True when nothing is installed.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Total number of [`StyleSink::inject`] and [`StyleSink::update`] calls seen.
    pub fn injections(&self) -> usize {
        self.injections
    }
}

impl StyleSink for StyleSheets {
    fn inject(&mut self, selector: &str, css: &str) -> SheetId {
        let id = SheetId(self.next_id);
        self.next_id += 1;
        self.injections += 1;
        self.sheets.insert(id, (selector.into(), css.into()));
        id
    }

    fn update(&mut self, id: SheetId, css: &str) {
        self.injections += 1;
        if let Some((_, sheet)) = self.sheets.get_mut(&id) {
            *sheet = css.into();
        }
    }

    fn retract(&mut self, id: SheetId) {
        self.sheets.remove(&id);
    }
}

impl<S: StyleSink> StyleSink for Rc<RefCell<S>> {
    fn inject(&mut self, selector: &str, css: &str) -> SheetId {
        self.borrow_mut().inject(selector, css)
    }

    fn update(&mut self, id: SheetId, css: &str) {
        self.borrow_mut().update(id, css);
    }

    fn retract(&mut self, id: SheetId) {
        self.borrow_mut().retract(id);
    }
}
