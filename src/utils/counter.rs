//! Process-wide diagnostic counters, reported through the log facade at
//! the end of a render.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
};

pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    pub const fn new() -> Self {
        Self {
            value: AtomicU64::new(0),
        }
    }

    pub fn inc(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    pub fn value(&self) -> u64 {
        self.value.load(Ordering::Acquire)
    }
}

lazy_static::lazy_static! {
    static ref REGISTRY: Mutex<HashMap<&'static str, Arc<Counter>>> = Mutex::new(HashMap::new());
}

pub fn register(name: &'static str) -> Arc<Counter> {
    REGISTRY
        .lock()
        .unwrap()
        .entry(name)
        .or_insert_with(|| Arc::new(Counter::new()))
        .clone()
}

pub fn report() {
    for (name, counter) in REGISTRY.lock().unwrap().iter() {
        log::info!(target: "counter_report", "{}: {}", name, counter.value());
    }
}

#[macro_export]
macro_rules! counter {
    ($descr:literal) => {{
        lazy_static::lazy_static! {
            static ref COUNTER: std::sync::Arc<$crate::utils::counter::Counter> =
                $crate::utils::counter::register($descr);
        }
        COUNTER.inc();
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_counters_accumulate() {
        let counter = register("test counter");
        let before = counter.value();
        crate::counter!("test counter");
        crate::counter!("test counter");
        assert_eq!(register("test counter").value(), before + 2);
    }
}
