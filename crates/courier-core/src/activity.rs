//! Busy state shown while a request is in flight.

/// Whether the form accepts input and whether the spinner is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityState {
    pub form_enabled: bool,
    pub indicator_visible: bool,
}

impl Default for ActivityState {
    fn default() -> Self {
        Self {
            form_enabled: true,
            indicator_visible: false,
        }
    }
}

impl ActivityState {
    /// Lock the form and show the spinner before calling an API.
    pub fn begin(&mut self) {
        self.form_enabled = false;
        self.indicator_visible = true;
    }

    /// Unlock the form and hide the spinner.
    pub fn finish(&mut self) {
        self.form_enabled = true;
        self.indicator_visible = false;
    }

    pub const fn is_busy(&self) -> bool {
        self.indicator_visible
    }

    /// Begin now and finish when the returned guard drops, even on early return.
    pub fn guard(&mut self) -> ActivityGuard<'_> {
        self.begin();
        ActivityGuard { state: self }
    }
}

/// Finishes the borrowed [`ActivityState`] on drop
#[derive(Debug)]
pub struct ActivityGuard<'a> {
    state: &'a mut ActivityState,
}

impl ActivityGuard<'_> {
    pub fn state(&self) -> &ActivityState {
        &*self.state
    }
}

impl Drop for ActivityGuard<'_> {
    fn drop(&mut self) {
        self.state.finish();
    }
}
