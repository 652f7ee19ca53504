//! [`Scheduler`] over `gloo_timers` intervals.
//!
//! Every interval started here calls the same `on_tick` callback. Dropping a
//! `gloo_timers::callback::Interval` clears it, so cancelling is just removing
//! it from the map.

use std::collections::HashMap;
use std::rc::Rc;

use effects::timer::{Scheduler, TimerHandle};
use gloo_timers::callback::Interval;

pub struct IntervalScheduler {
    on_tick: Rc<dyn Fn()>,
    running: HashMap<TimerHandle, Interval>,
    next_id: u64,
}

impl IntervalScheduler {
    pub fn new(on_tick: impl Fn() + 'static) -> Self {
        Self { on_tick: Rc::new(on_tick), running: HashMap::new(), next_id: 0 }
    }
}

impl Scheduler for IntervalScheduler {
    fn start_interval(&mut self, period_ms: u32) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        let on_tick = Rc::clone(&self.on_tick);
        self.running.insert(handle, Interval::new(period_ms, move || on_tick()));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.running.remove(&handle);
    }
}
