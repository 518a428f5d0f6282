// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A color-scheme scope: one selection, one token set, at most one listener.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use tracing::debug;

use crate::error::SchemeError;
use crate::host::{PreferenceSource, SheetId, StyleSink, SubscriptionId};
use crate::style;
use crate::tokens::{ColorScheme, Palette, ThemeName, ThemeTokens};

/// Callback fired after each wholesale token replacement.
pub type ChangeListener = Box<dyn FnMut(&Rc<ThemeTokens>)>;

struct Shared<S> {
    selection: ColorScheme,
    prefers_dark: bool,
    tokens: Rc<ThemeTokens>,
    palette: Palette,
    selector: String,
    sink: S,
    sheet: SheetId,
    listeners: Vec<(u64, ChangeListener)>,
    next_listener: u64,
    /// Nesting depth of [`replace`] calls currently notifying listeners.
    dispatching: u32,
    /// Listeners detached while their list was out of the cell.
    detached: Vec<u64>,
    replacements: u64,
}

impl<S: StyleSink> Shared<S> {
    fn refresh_sheet(&mut self) {
        let css = style::stylesheet(&self.selector, self.selection, &self.tokens, &self.palette);
        self.sink.update(self.sheet, &css);
    }

    fn detach(&mut self, id: u64) {
        let before = self.listeners.len();
        self.listeners.retain(|(key, _)| *key != id);
        if self.listeners.len() == before && self.dispatching > 0 {
            self.detached.push(id);
        }
    }
}

/// Swap in a freshly resolved token set, re-inject styles, and notify listeners.
///
/// Listeners run with the state unborrowed so they may query the scope.
fn replace<S: StyleSink>(shared: &RefCell<Shared<S>>) {
    let (tokens, mut listeners) = {
        let mut s = shared.borrow_mut();
        let tokens = s.palette.resolve(s.selection, s.prefers_dark);
        s.tokens = Rc::clone(&tokens);
        s.replacements += 1;
        s.refresh_sheet();
        s.dispatching += 1;
        debug!(theme = tokens.name().as_str(), selection = ?s.selection, "replaced theme tokens");
        (tokens, core::mem::take(&mut s.listeners))
    };
    for (id, listener) in &mut listeners {
        if shared.borrow().detached.contains(id) {
            continue;
        }
        listener(&tokens);
    }
    let mut s = shared.borrow_mut();
    s.dispatching -= 1;
    listeners.retain(|(id, _)| !s.detached.contains(id));
    if s.dispatching == 0 {
        s.detached.clear();
    }
    listeners.append(&mut s.listeners);
    s.listeners = listeners;
}

/// Registration returned by [`SchemeScope::on_change`].
///
/// The listener stays attached until this is dropped or [cancelled](Self::cancel).
/// Outliving the scope is harmless.
#[must_use = "dropping the subscription detaches the listener"]
pub struct ChangeSubscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ChangeSubscription {
    fn new<S: StyleSink + 'static>(shared: Weak<RefCell<Shared<S>>>, id: u64) -> Self {
        Self {
            detach: Some(Box::new(move || {
                if let Some(shared) = shared.upgrade() {
                    shared.borrow_mut().detach(id);
                }
            })),
        }
    }

    /// Detach the listener now.
    pub fn cancel(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for ChangeSubscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl core::fmt::Debug for ChangeSubscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChangeSubscription")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

/// Owner of a color-scheme selection for a subtree (or the whole document).
///
/// Created when the provider mounts and dropped when it unmounts. While alive it:
///
/// - resolves its [`ColorScheme`] to a [`ThemeTokens`] set,
/// - keeps its own stylesheet for its [`selector`](SchemeScope::selector) installed
///   in the [`StyleSink`], updating it in place and retracting only that sheet,
/// - holds at most one [`PreferenceSource`] subscription. It is attached the
///   first time the selection is [`ColorScheme::FollowSystem`] and released
///   exactly once, on drop, however often the selection changes in between.
///
/// Every selection change and every preference change observed while following
/// the system replaces the token set once, as a whole.
///
/// ## Scoping hazard
///
/// With a `scope_id`, styles apply only to the scope's own subtree. Overlays
/// rendered through a portal leave that subtree and silently fall back to the
/// global styles. Keep the application's main scope global.
pub struct SchemeScope<P: PreferenceSource, S: StyleSink + 'static> {
    source: P,
    shared: Rc<RefCell<Shared<S>>>,
    subscription: Option<SubscriptionId>,
    class_name: Option<String>,
}

impl<P: PreferenceSource, S: StyleSink + 'static> core::fmt::Debug for SchemeScope<P, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = self.shared.borrow();
        f.debug_struct("SchemeScope")
            .field("selection", &s.selection)
            .field("theme", &s.tokens.name())
            .field("selector", &s.selector)
            .field("subscription", &self.subscription)
            .field("replacements", &s.replacements)
            .finish_non_exhaustive()
    }
}

impl<P: PreferenceSource, S: StyleSink + 'static> SchemeScope<P, S> {
    /// Create a scope with the built-in palette and install its stylesheet.
    ///
    /// Pass `scope_id: None` for the application's main scope.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::InvalidScopeId`] for an id that cannot be a class name.
    pub fn new(
        source: P,
        sink: S,
        selection: ColorScheme,
        scope_id: Option<&str>,
    ) -> Result<Self, SchemeError> {
        Self::with_palette(source, sink, selection, scope_id, Palette::default())
    }

    /// Like [`SchemeScope::new`] with custom token sets.
    ///
    /// # Errors
    ///
    /// Same as [`SchemeScope::new`].
    pub fn with_palette(
        source: P,
        mut sink: S,
        selection: ColorScheme,
        scope_id: Option<&str>,
        palette: Palette,
    ) -> Result<Self, SchemeError> {
        let selector = style::selector(scope_id)?;
        let class_name = scope_id.map(style::class_name).transpose()?;
        let prefers_dark = selection == ColorScheme::FollowSystem && source.prefers_dark();
        let tokens = palette.resolve(selection, prefers_dark);
        let sheet = sink.inject(
            &selector,
            &style::stylesheet(&selector, selection, &tokens, &palette),
        );
        debug!(%selector, ?selection, ?sheet, "mounted color scheme scope");
        let shared = Shared {
            selection,
            prefers_dark,
            tokens,
            palette,
            selector,
            sink,
            sheet,
            listeners: Vec::new(),
            next_listener: 0,
            dispatching: 0,
            detached: Vec::new(),
            replacements: 0,
        };

        let mut scope = Self {
            source,
            shared: Rc::new(RefCell::new(shared)),
            subscription: None,
            class_name,
        };
        if selection == ColorScheme::FollowSystem {
            scope.subscribe();
        }
        Ok(scope)
    }

    fn subscribe(&mut self) {
        if self.subscription.is_some() {
            return;
        }
        let weak = Rc::downgrade(&self.shared);
        let id = self.source.subscribe(Box::new(move |dark| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let following = {
                let mut s = shared.borrow_mut();
                s.prefers_dark = dark;
                s.selection == ColorScheme::FollowSystem
            };
            if following {
                replace(&shared);
            }
        }));
        debug!(?id, "attached system preference listener");
        self.subscription = Some(id);
    }

    /// Change the selection. A no-op when it is unchanged.
    pub fn set_selection(&mut self, selection: ColorScheme) {
        if self.selection() == selection {
            return;
        }
        if selection == ColorScheme::FollowSystem {
            self.subscribe();
            let dark = self.source.prefers_dark();
            self.shared.borrow_mut().prefers_dark = dark;
        }
        self.shared.borrow_mut().selection = selection;
        replace(&self.shared);
    }

    /// Current selection.
    pub fn selection(&self) -> ColorScheme {
        self.shared.borrow().selection
    }

    /// Current token set. Cheap to clone and never mutated.
    pub fn tokens(&self) -> Rc<ThemeTokens> {
        Rc::clone(&self.shared.borrow().tokens)
    }

    /// Name of the current token set.
    pub fn theme(&self) -> ThemeName {
        self.shared.borrow().tokens.name()
    }

    /// CSS selector the stylesheet targets: `:root` for a global scope.
    pub fn selector(&self) -> String {
        self.shared.borrow().selector.clone()
    }

    /// Class to put on the scope's subtree root, for a narrowly scoped provider.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// True when the stylesheet applies to the whole document.
    pub fn is_global(&self) -> bool {
        self.class_name.is_none()
    }

    /// Whether the system preference listener is attached.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Number of token replacements since the scope was created.
    pub fn replacements(&self) -> u64 {
        self.shared.borrow().replacements
    }

    /// Register `listener` to run after every token replacement.
    ///
    /// The listener is detached when the returned subscription is dropped.
    pub fn on_change(
        &self,
        listener: impl FnMut(&Rc<ThemeTokens>) + 'static,
    ) -> ChangeSubscription {
        let id = {
            let mut s = self.shared.borrow_mut();
            let id = s.next_listener;
            s.next_listener += 1;
            s.listeners.push((id, Box::new(listener)));
            id
        };
        ChangeSubscription::new(Rc::downgrade(&self.shared), id)
    }

    /// Number of attached change listeners.
    pub fn change_listener_count(&self) -> usize {
        self.shared.borrow().listeners.len()
    }
}

impl<P: PreferenceSource, S: StyleSink + 'static> Drop for SchemeScope<P, S> {
    fn drop(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.source.unsubscribe(id);
            debug!(?id, "detached system preference listener");
        }
        let mut s = self.shared.borrow_mut();
        let s = &mut *s;
        s.sink.retract(s.sheet);
        s.listeners.clear();
    }
}
