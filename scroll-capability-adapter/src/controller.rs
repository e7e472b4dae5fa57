use scroll_capability::{LoadOptions, ScrollBarState, ScrollProp, ToNumber};

use crate::{DebounceOptions, Debouncer};

/// Where a [`LoadMoreController`] is in its load cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadStatus {
    /// Waiting for the list to reach its load zone.
    #[default]
    Idle,
    /// A request was handed out and has not been finished yet.
    Loading,
    /// The data source reported that nothing is left to load.
    Exhausted,
}

/// A request to fetch the next page, handed out by [`LoadMoreController`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadRequest {
    /// Zero-based index of the page to load.
    pub page: u64,
    /// Scroll offset on the load axis when the request was made.
    pub offset: f64,
    /// Scroll limit on the load axis when the request was made.
    pub limit: f64,
}

/// A framework-neutral controller that turns scroll events into load-more requests.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` / `on_limit` when UI events occur
/// - `tick(now_ms)` each frame/timer tick (for debounced checks)
/// - `finish_loading` / `fail_loading` when the data source answers
///
/// At most one request is outstanding at a time.
#[derive(Clone, Debug)]
pub struct LoadMoreController {
    options: LoadOptions,
    state: ScrollBarState,
    debouncer: Debouncer<()>,
    status: LoadStatus,
    page: u64,
}

impl LoadMoreController {
    pub fn new(options: LoadOptions) -> Self {
        adebug!(
            enabled = options.enabled,
            axis = options.axis.as_str(),
            load_threshold = options.load_threshold,
            debounce_ms = options.debounce_ms,
            "LoadMoreController::new"
        );
        Self {
            options,
            state: ScrollBarState::default(),
            debouncer: Debouncer::new(debounce_options(&options)),
            status: LoadStatus::Idle,
            page: 0,
        }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// Disabling drops any debounced check in progress.
    pub fn set_options(&mut self, options: LoadOptions) {
        self.options = options;
        self.debouncer.set_options(debounce_options(&options));
        if !options.enabled {
            self.debouncer.cancel();
        }
    }

    pub fn state(&self) -> &ScrollBarState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ScrollBarState {
        &mut self.state
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// The page the next request will ask for.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Whether a debounced check is waiting for the scroll burst to settle.
    pub fn has_pending_check(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// See [`Debouncer::next_deadline_ms`].
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.debouncer.next_deadline_ms()
    }

    /// Call this when the scroll limit changes (content appended, viewport resized).
    ///
    /// This does not check for a load by itself; use `check_now` if the new limit should be
    /// evaluated right away.
    pub fn on_limit(&mut self, limit: impl ToNumber) {
        self.state
            .set_axis(ScrollProp::Limit, self.options.axis, limit);
    }

    /// Call this when the UI reports a scroll offset change.
    ///
    /// The load check is debounced by `debounce_ms`. With a zero debounce it runs immediately and
    /// a request may be returned right away.
    pub fn on_scroll(&mut self, offset: impl ToNumber, now_ms: u64) -> Option<LoadRequest> {
        self.state
            .set_axis(ScrollProp::Offset, self.options.axis, offset);
        atrace!(
            offset = self.state.get_axis(ScrollProp::Offset, self.options.axis),
            now_ms,
            "on_scroll"
        );
        if !self.options.enabled {
            return None;
        }

        if self.debouncer.call((), now_ms).is_some() {
            return self.check_now();
        }
        self.tick(now_ms)
    }

    /// Applies an offset and a limit from the same frame.
    pub fn on_scroll_frame(
        &mut self,
        offset: impl ToNumber,
        limit: impl ToNumber,
        now_ms: u64,
    ) -> Option<LoadRequest> {
        self.on_limit(limit);
        self.on_scroll(offset, now_ms)
    }

    /// Advances the controller.
    ///
    /// Returns a request once the debounced check fires and the list is inside its load zone.
    pub fn tick(&mut self, now_ms: u64) -> Option<LoadRequest> {
        self.debouncer.poll(now_ms)?;
        self.check_now()
    }

    /// Checks the current state immediately, bypassing the debounce.
    pub fn check_now(&mut self) -> Option<LoadRequest> {
        if !self.options.enabled || self.status != LoadStatus::Idle {
            return None;
        }

        let axis = self.options.axis;
        if !self.state.can_load(axis, self.options.load_threshold) {
            return None;
        }

        self.status = LoadStatus::Loading;
        let request = LoadRequest {
            page: self.page,
            offset: self.state.get_axis(ScrollProp::Offset, axis),
            limit: self.state.get_axis(ScrollProp::Limit, axis),
        };
        adebug!(
            page = request.page,
            offset = request.offset,
            limit = request.limit,
            "load requested"
        );
        Some(request)
    }

    /// Completes the outstanding request.
    ///
    /// `has_more = false` stops all further requests until `reset`.
    pub fn finish_loading(&mut self, has_more: bool) {
        if self.status != LoadStatus::Loading {
            return;
        }
        self.page = self.page.saturating_add(1);
        self.status = if has_more {
            LoadStatus::Idle
        } else {
            LoadStatus::Exhausted
        };
        adebug!(page = self.page, has_more, "load finished");
    }

    /// Abandons the outstanding request so the same page can be requested again.
    pub fn fail_loading(&mut self) {
        if self.status == LoadStatus::Loading {
            self.status = LoadStatus::Idle;
            adebug!(page = self.page, "load failed");
        }
    }

    /// Starts over from the first page (e.g. after a refresh).
    pub fn reset(&mut self) {
        self.debouncer.cancel();
        self.status = LoadStatus::Idle;
        self.page = 0;
    }
}

impl Default for LoadMoreController {
    fn default() -> Self {
        Self::new(LoadOptions::default())
    }
}

fn debounce_options(options: &LoadOptions) -> DebounceOptions {
    DebounceOptions::new(options.debounce_ms)
}
