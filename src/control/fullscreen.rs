/// Global side effects the host performs when entering fullscreen.
///
/// Typical implementations disable page scroll and install window-level key
/// and resize listeners. Each acquire method has a matching release method;
/// [`FullscreenGuard`] guarantees the pairing.
pub trait HostEffects {
    /// Disable host scrolling while fullscreen is active.
    fn lock_scroll(&mut self);
    /// Restore host scrolling.
    fn unlock_scroll(&mut self);
    /// Install window-level key/resize listeners.
    fn attach_window_listeners(&mut self);
    /// Remove window-level key/resize listeners.
    fn detach_window_listeners(&mut self);
}

/// Scoped acquisition of the fullscreen side effects.
///
/// Effects are acquired on construction and released in `Drop`, so every exit
/// path (Escape key, explicit toggle, component teardown) releases exactly
/// once regardless of how exit occurs.
pub struct FullscreenGuard<'a, H: HostEffects> {
    host: &'a mut H,
}

impl<'a, H: HostEffects> FullscreenGuard<'a, H> {
    /// Enter fullscreen: lock scroll and attach window listeners.
    pub fn enter(host: &'a mut H) -> Self {
        host.lock_scroll();
        host.attach_window_listeners();
        Self { host }
    }

    /// Leave fullscreen explicitly. Equivalent to dropping the guard.
    pub fn exit(self) {}
}

impl<H: HostEffects> Drop for FullscreenGuard<'_, H> {
    fn drop(&mut self) {
        self.host.detach_window_listeners();
        self.host.unlock_scroll();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/control/fullscreen.rs"]
mod tests;
