// Copyright 2025 the Loft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The floating surface lifecycle.

use alloc::rc::Rc;

use kurbo::{Rect, Size};
use loft_placement::{PlacementRequest, resolve};
use loft_scheme::{ChangeSubscription, ThemeTokens};
use loft_stacking::StackingScope;
use tracing::{debug, trace};

use crate::error::SurfaceError;
use crate::frame::{SurfaceColors, SurfaceFrame};
use crate::host::{GeometrySignals, ListenerId, ListenerKind, SurfaceHost};
use crate::options::{CARET_HEIGHT, CARET_WIDTH, SurfaceOptions};

/// Keys a surface reacts to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// Dismisses the surface.
    Escape,
    /// Anything else.
    Other,
}

/// Input delivered by the host after [`FloatingSurface::open`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SurfaceEvent {
    /// The portal finished mounting.
    Mounted,
    /// The anchor has a new rectangle.
    AnchorMoved(Rect),
    /// The viewport resized; carries the new scroll boundary.
    ViewportResized(Option<Rect>),
    /// Something scrolled; carries fresh anchor and boundary snapshots.
    Scrolled {
        /// Anchor rectangle after the scroll.
        anchor: Rect,
        /// Boundary rectangle after the scroll.
        boundary: Option<Rect>,
    },
    /// The panel content was re-measured.
    ContentResized(Size),
    /// A document-level key press.
    Key(Key),
}

/// Result of [`FloatingSurface::handle`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceUpdate {
    /// Draw this frame.
    Reposition(SurfaceFrame),
    /// Nothing to redraw.
    Unchanged,
    /// The user asked to dismiss; the owner should [`close`](FloatingSurface::close).
    Dismiss,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Phase {
    Closed,
    Mounting,
    Open,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Geometry {
    anchor: Rect,
    boundary: Option<Rect>,
    content: Size,
}

/// A panel anchored to another element, drawn above everything in its stacking
/// scope.
///
/// The surface owns no geometry or focus implementation. It asks its
/// [`SurfaceHost`] to mount a portal, attach listeners and move focus, and turns
/// the events the host reports into [`SurfaceFrame`]s.
///
/// Lifecycle:
///
/// 1. [`open`](Self::open) resolves the first frame, mounts the portal and
///    attaches one geometry and one keyboard listener.
/// 2. [`SurfaceEvent::Mounted`] completes the mount and acquires focus. Key
///    presses before this point are ignored.
/// 3. Geometry events recompute synchronously; the latest snapshot wins.
/// 4. [`close`](Self::close), or dropping the surface, detaches both listeners,
///    drops any [held theme subscription](Self::hold_theme_subscription),
///    releases focus and unmounts before returning.
#[derive(Debug)]
pub struct FloatingSurface<H: SurfaceHost> {
    host: H,
    options: SurfaceOptions,
    z_index: Option<u32>,
    tokens: Rc<ThemeTokens>,
    phase: Phase,
    geometry: Option<Geometry>,
    frame: Option<SurfaceFrame>,
    geometry_listener: Option<ListenerId>,
    key_listener: Option<ListenerId>,
    theme_subscription: Option<ChangeSubscription>,
    focused: bool,
}

impl<H: SurfaceHost> FloatingSurface<H> {
    /// A closed surface with light theme colors and no z-index.
    pub fn new(host: H, options: SurfaceOptions) -> Self {
        Self {
            host,
            options,
            z_index: None,
            tokens: Rc::new(ThemeTokens::light()),
            phase: Phase::Closed,
            geometry: None,
            frame: None,
            geometry_listener: None,
            key_listener: None,
            theme_subscription: None,
            focused: false,
        }
    }

    /// Take the z-index for [`SurfaceOptions::stacking_label`] from `scope`.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::Stacking`] when the label is not registered in `scope`.
    pub fn with_stacking(mut self, scope: &StackingScope) -> Result<Self, SurfaceError> {
        self.z_index = scope.depth_of(self.options.stacking_label.as_deref())?;
        Ok(self)
    }

    /// Use `tokens` for colors.
    #[must_use]
    pub fn with_theme(mut self, tokens: Rc<ThemeTokens>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Switch to a new token set. Returns the recolored frame when open.
    pub fn set_theme(&mut self, tokens: Rc<ThemeTokens>) -> Option<SurfaceFrame> {
        self.tokens = tokens;
        let colors = SurfaceColors::from_tokens(
            &self.tokens,
            self.options.background,
            self.options.border,
        );
        let frame = self.frame.as_mut()?;
        if frame.colors == colors {
            return None;
        }
        frame.colors = colors;
        Some(frame.clone())
    }

    /// Keep `subscription` alive until the surface closes.
    ///
    /// Pass the guard returned by [`SchemeScope::on_change`] for the listener
    /// that forwards theme changes to this surface.
    ///
    /// [`SchemeScope::on_change`]: loft_scheme::SchemeScope::on_change
    pub fn hold_theme_subscription(&mut self, subscription: ChangeSubscription) {
        self.theme_subscription = Some(subscription);
    }

    /// Open the surface anchored to `anchor`, with content measuring `content`.
    ///
    /// # Errors
    ///
    /// - [`SurfaceError::AlreadyOpen`] if the surface is open.
    /// - [`SurfaceError::Placement`] for malformed geometry. Nothing is mounted
    ///   in that case.
    pub fn open(
        &mut self,
        anchor: Rect,
        boundary: Option<Rect>,
        content: Size,
    ) -> Result<SurfaceFrame, SurfaceError> {
        if self.phase != Phase::Closed {
            return Err(SurfaceError::AlreadyOpen);
        }
        let geometry = Geometry {
            anchor,
            boundary,
            content,
        };
        let frame = self.resolve_frame(&geometry)?;

        self.host.mount(&self.options);
        self.geometry_listener = Some(
            self.host
                .listen(ListenerKind::Geometry(geometry_signals(boundary))),
        );
        self.key_listener = Some(self.host.listen(ListenerKind::Keyboard));
        self.phase = Phase::Mounting;
        self.geometry = Some(geometry);
        self.frame = Some(frame.clone());
        debug!(side = ?frame.side, z_index = ?self.z_index, "opened floating surface");
        Ok(frame)
    }

    /// React to a host event.
    ///
    /// # Errors
    ///
    /// - [`SurfaceError::NotOpen`] when the surface is closed.
    /// - [`SurfaceError::Placement`] when the new geometry is malformed. The
    ///   previous geometry and frame are kept.
    pub fn handle(&mut self, event: SurfaceEvent) -> Result<SurfaceUpdate, SurfaceError> {
        let Some(current) = self.geometry else {
            return Err(SurfaceError::NotOpen);
        };
        trace!(?event, "surface event");
        let next = match event {
            SurfaceEvent::Mounted => {
                if self.phase == Phase::Mounting {
                    self.phase = Phase::Open;
                    if self.options.should_focus {
                        self.host.acquire_focus();
                        self.focused = true;
                    }
                    debug!("floating surface mounted");
                }
                return Ok(SurfaceUpdate::Unchanged);
            }
            SurfaceEvent::Key(key) => {
                return Ok(match (self.phase, key) {
                    (Phase::Open, Key::Escape) => SurfaceUpdate::Dismiss,
                    _ => SurfaceUpdate::Unchanged,
                });
            }
            SurfaceEvent::AnchorMoved(anchor) => Geometry { anchor, ..current },
            SurfaceEvent::ViewportResized(boundary) => Geometry { boundary, ..current },
            SurfaceEvent::Scrolled { anchor, boundary } => Geometry {
                anchor,
                boundary,
                ..current
            },
            SurfaceEvent::ContentResized(content) => Geometry { content, ..current },
        };

        let frame = self.resolve_frame(&next)?;
        if next.boundary.is_some() != current.boundary.is_some() {
            if let Some(id) = self.geometry_listener.take() {
                self.host.unlisten(id);
            }
            let signals = geometry_signals(next.boundary);
            self.geometry_listener = Some(self.host.listen(ListenerKind::Geometry(signals)));
            debug!(?signals, "reattached geometry listener");
        }
        self.geometry = Some(next);
        if self.frame.as_ref() == Some(&frame) {
            return Ok(SurfaceUpdate::Unchanged);
        }
        self.frame = Some(frame.clone());
        Ok(SurfaceUpdate::Reposition(frame))
    }

    /// Detach listeners, release focus and unmount. A no-op when closed.
    pub fn close(&mut self) {
        self.theme_subscription = None;
        if self.phase == Phase::Closed {
            return;
        }
        for id in [self.key_listener.take(), self.geometry_listener.take()]
            .into_iter()
            .flatten()
        {
            self.host.unlisten(id);
        }
        if core::mem::take(&mut self.focused) {
            self.host.release_focus();
        }
        self.host.unmount();
        self.phase = Phase::Closed;
        self.geometry = None;
        self.frame = None;
        debug_assert!(
            self.key_listener.is_none() && self.geometry_listener.is_none(),
            "closed surface still holds a listener"
        );
        debug!("closed floating surface");
    }

    /// True from [`open`](Self::open) until [`close`](Self::close).
    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }

    /// True once the host has reported [`SurfaceEvent::Mounted`].
    pub fn is_mounted(&self) -> bool {
        self.phase == Phase::Open
    }

    /// The latest frame, while open.
    pub fn frame(&self) -> Option<&SurfaceFrame> {
        self.frame.as_ref()
    }

    /// Options this surface was created with.
    pub fn options(&self) -> &SurfaceOptions {
        &self.options
    }

    /// The z-index resolved from the stacking scope.
    pub fn z_index(&self) -> Option<u32> {
        self.z_index
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    fn resolve_frame(&self, geometry: &Geometry) -> Result<SurfaceFrame, SurfaceError> {
        let size = Size::new(
            self.options.width.unwrap_or(geometry.content.width),
            geometry.content.height,
        );
        let mut request = PlacementRequest::new(geometry.anchor, size)
            .with_direction(self.options.ideal_direction);
        if self.options.caret {
            request = request
                .with_caret(Size::new(CARET_WIDTH, CARET_HEIGHT))
                .with_offset(CARET_HEIGHT)
                .with_caret_padding(self.options.rounding.radius());
        }
        if let Some(boundary) = geometry.boundary {
            request = request.with_boundary(boundary);
        }
        let placement = resolve(&request)?;
        Ok(SurfaceFrame::new(
            &placement,
            &self.options,
            self.z_index,
            &self.tokens,
        ))
    }
}

/// Scroll tracking only matters when there is a boundary to scroll.
fn geometry_signals(boundary: Option<Rect>) -> GeometrySignals {
    let mut signals = GeometrySignals::default();
    if boundary.is_none() {
        signals.remove(GeometrySignals::SCROLL);
    }
    signals
}

impl<H: SurfaceHost> Drop for FloatingSurface<H> {
    fn drop(&mut self) {
        self.close();
    }
}
