/// Configuration for [`Debouncer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DebounceOptions {
    /// Quiet period after the last call before the trailing invocation fires.
    pub wait_ms: u64,
    /// Invoke on the first call of a burst.
    pub leading: bool,
    /// Invoke with the latest argument once the burst settles.
    pub trailing: bool,
    /// Upper bound on how long a continuous burst may delay an invocation.
    pub max_wait_ms: Option<u64>,
}

impl DebounceOptions {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            leading: false,
            trailing: true,
            max_wait_ms: None,
        }
    }

    pub fn with_leading(mut self, leading: bool) -> Self {
        self.leading = leading;
        self
    }

    pub fn with_trailing(mut self, trailing: bool) -> Self {
        self.trailing = trailing;
        self
    }

    pub fn with_max_wait_ms(mut self, max_wait_ms: Option<u64>) -> Self {
        self.max_wait_ms = max_wait_ms;
        self
    }
}

impl Default for DebounceOptions {
    fn default() -> Self {
        Self::new(150)
    }
}

/// An adapter-driven debouncer.
///
/// This type does not own a timer. Adapters report calls with `call(arg, now_ms)` and drive it
/// with `poll(now_ms)` on each frame/timer tick; an invocation is "fired" by returning the argument
/// it should run with. Only the latest argument of a burst is kept.
///
/// A burst that settled without being polled is closed by the next `call`; its trailing
/// argument is then returned by the next `poll` (or `flush`).
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    options: DebounceOptions,
    pending: Option<T>,
    /// Trailing argument of a settled burst, with the time it became due.
    ready: Option<(T, u64)>,
    last_call_ms: Option<u64>,
    burst_start_ms: Option<u64>,
}

impl<T> Debouncer<T> {
    pub fn new(options: DebounceOptions) -> Self {
        Self {
            options,
            pending: None,
            ready: None,
            last_call_ms: None,
            burst_start_ms: None,
        }
    }

    pub fn options(&self) -> &DebounceOptions {
        &self.options
    }

    /// Replaces the options. A burst in progress keeps its pending argument.
    pub fn set_options(&mut self, options: DebounceOptions) {
        self.options = options;
    }

    /// Records a call.
    ///
    /// Returns `Some(arg)` when the call should run right away (leading edge); otherwise `arg`
    /// becomes the pending argument of the current burst.
    ///
    /// If the previous burst already settled, it is closed first and a new burst starts here.
    /// Its trailing argument is kept for the next `poll`, even when this call fires a leading
    /// edge.
    pub fn call(&mut self, arg: T, now_ms: u64) -> Option<T> {
        if let Some(last) = self.last_call_ms {
            if now_ms.saturating_sub(last) >= self.options.wait_ms {
                self.settle(last.saturating_add(self.options.wait_ms));
            }
        }

        let starts_burst = self.last_call_ms.is_none();
        self.last_call_ms = Some(now_ms);

        if starts_burst {
            self.burst_start_ms = Some(now_ms);
            if self.options.leading {
                self.pending = None;
                return Some(arg);
            }
        }

        self.pending = Some(arg);
        None
    }

    /// Fires the trailing invocation once the burst settled (or `max_wait_ms` ran out).
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        if let Some((arg, _)) = self.ready.take() {
            return Some(arg);
        }

        let last = self.last_call_ms?;
        let settled = now_ms.saturating_sub(last) >= self.options.wait_ms;
        let overdue = match (self.options.max_wait_ms, self.burst_start_ms) {
            (Some(max_wait), Some(start)) => now_ms.saturating_sub(start) >= max_wait,
            _ => false,
        };

        if settled {
            self.last_call_ms = None;
            self.burst_start_ms = None;
        } else if overdue {
            // The burst continues; the next forced invocation is measured from here.
            self.burst_start_ms = Some(now_ms);
        } else {
            return None;
        }

        self.take_trailing()
    }

    /// Ends the current burst immediately, returning the trailing invocation if there is one.
    ///
    /// A settled trailing argument still waiting for `poll` is returned first; the current
    /// burst's argument then stays for the next `flush` or `poll`.
    pub fn flush(&mut self) -> Option<T> {
        if let Some((arg, _)) = self.ready.take() {
            return Some(arg);
        }
        self.last_call_ms = None;
        self.burst_start_ms = None;
        self.take_trailing()
    }

    /// Drops the current burst without invoking.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.ready = None;
        self.last_call_ms = None;
        self.burst_start_ms = None;
    }

    /// Whether a burst is in progress or a settled trailing argument awaits `poll`.
    pub fn is_pending(&self) -> bool {
        self.ready.is_some() || self.last_call_ms.is_some()
    }

    /// The earliest time at which `poll` may fire, if a burst is in progress.
    ///
    /// Adapters with real timers can sleep until this deadline instead of polling every frame.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        if let Some((_, due_ms)) = &self.ready {
            return Some(*due_ms);
        }
        let last = self.last_call_ms?;
        let settle_at = last.saturating_add(self.options.wait_ms);
        let forced_at = match (self.options.max_wait_ms, self.burst_start_ms) {
            (Some(max_wait), Some(start)) => Some(start.saturating_add(max_wait)),
            _ => None,
        };
        Some(forced_at.map_or(settle_at, |forced_at| forced_at.min(settle_at)))
    }

    fn settle(&mut self, due_ms: u64) {
        self.last_call_ms = None;
        self.burst_start_ms = None;
        if let Some(arg) = self.take_trailing() {
            self.ready = Some((arg, due_ms));
        }
    }

    fn take_trailing(&mut self) -> Option<T> {
        let pending = self.pending.take();
        if self.options.trailing { pending } else { None }
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DebounceOptions::default())
    }
}
