// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host a surface renders into.

use alloc::vec::Vec;

use bitflags::bitflags;

use crate::options::SurfaceOptions;

/// Identifier of an attached host listener.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(pub u64);

bitflags! {
    /// Geometry changes a surface needs to hear about.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GeometrySignals: u8 {
        /// The anchor moved or resized.
        const ANCHOR   = 0b0000_0001;
        /// The viewport resized.
        const VIEWPORT = 0b0000_0010;
        /// The scroll boundary (or an ancestor) scrolled.
        const SCROLL   = 0b0000_0100;
        /// The panel content resized.
        const CONTENT  = 0b0000_1000;
    }
}

impl Default for GeometrySignals {
    fn default() -> Self {
        Self::all()
    }
}

/// What a listener observes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ListenerKind {
    /// Geometry changes.
    Geometry(GeometrySignals),
    /// Document-level key presses.
    Keyboard,
}

/// Capabilities a host provides to a [`FloatingSurface`](crate::FloatingSurface).
///
/// The host delivers observed changes back through
/// [`FloatingSurface::handle`](crate::FloatingSurface::handle).
pub trait SurfaceHost {
    /// Create the portal the panel renders into.
    ///
    /// Completion is reported later with [`SurfaceEvent::Mounted`](crate::SurfaceEvent::Mounted).
    fn mount(&mut self, options: &SurfaceOptions);
    /// Remove the portal.
    fn unmount(&mut self);
    /// Move focus into the panel.
    fn acquire_focus(&mut self);
    /// Return focus to where it was before [`SurfaceHost::acquire_focus`].
    fn release_focus(&mut self);
    /// Start observing `kind`.
    fn listen(&mut self, kind: ListenerKind) -> ListenerId;
    /// Stop observing.
    fn unlisten(&mut self, id: ListenerId);
}

impl<H: SurfaceHost + ?Sized> SurfaceHost for &mut H {
    fn mount(&mut self, options: &SurfaceOptions) {
        (**self).mount(options);
    }

    fn unmount(&mut self) {
        (**self).unmount();
    }

    fn acquire_focus(&mut self) {
        (**self).acquire_focus();
    }

    fn release_focus(&mut self) {
        (**self).release_focus();
    }

    fn listen(&mut self, kind: ListenerKind) -> ListenerId {
        (**self).listen(kind)
    }

    fn unlisten(&mut self, id: ListenerId) {
        (**self).unlisten(id);
    }
}

/// A call recorded by [`HeadlessHost`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HostCall {
    /// [`SurfaceHost::mount`].
    Mount,
    /// [`SurfaceHost::unmount`].
    Unmount,
    /// [`SurfaceHost::acquire_focus`].
    AcquireFocus,
    /// [`SurfaceHost::release_focus`].
    ReleaseFocus,
    /// [`SurfaceHost::listen`].
    Listen(ListenerKind, ListenerId),
    /// [`SurfaceHost::unlisten`].
    Unlisten(ListenerId),
}

/// A host with no display that records what a surface asks of it.
#[derive(Clone, Debug, Default)]
pub struct HeadlessHost {
    calls: Vec<HostCall>,
    live: Vec<(ListenerId, ListenerKind)>,
    next_id: u64,
    mounted: bool,
    focused: bool,
}

impl HeadlessHost {
    /// A fresh host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Listeners currently attached.
    pub fn live_listeners(&self) -> impl Iterator<Item = ListenerKind> + '_ {
        self.live.iter().map(|&(_, kind)| kind)
    }

    /// Whether a portal is mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the panel holds focus.
    pub fn has_focus(&self) -> bool {
        self.focused
    }
}

impl SurfaceHost for HeadlessHost {
    fn mount(&mut self, _options: &SurfaceOptions) {
        self.mounted = true;
        self.calls.push(HostCall::Mount);
    }

    fn unmount(&mut self) {
        self.mounted = false;
        self.calls.push(HostCall::Unmount);
    }

    fn acquire_focus(&mut self) {
        self.focused = true;
        self.calls.push(HostCall::AcquireFocus);
    }

    fn release_focus(&mut self) {
        self.focused = false;
        self.calls.push(HostCall::ReleaseFocus);
    }

    fn listen(&mut self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.live.push((id, kind));
        self.calls.push(HostCall::Listen(kind, id));
        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.live.retain(|&(live, _)| live != id);
        self.calls.push(HostCall::Unlisten(id));
    }
}
