//! The containers under test and the single timed trial they share.

use std::collections::{BTreeMap, HashMap};
use std::hint::black_box;
use std::time::Instant;

use crate::workload::Workload;

/// Slots reserved per key before a hash map trial.
pub const HASH_PRESIZE_FACTOR: usize = 2;
/// Highest occupancy a presized hash map may reach during a trial.
pub const HASH_MAX_LOAD_FACTOR: f64 = 0.7;

/// A map the harness can fill and query.
pub trait BenchMap {
    /// A fresh, empty map tuned for `len` keys.
    fn prepared(len: usize) -> Self;

    fn insert_key(&mut self, key: u64, value: u64);

    fn lookup(&self, key: &u64) -> Option<&u64>;
}

impl BenchMap for BTreeMap<u64, u64> {
    fn prepared(_len: usize) -> Self {
        BTreeMap::new()
    }

    fn insert_key(&mut self, key: u64, value: u64) {
        self.insert(key, value);
    }

    fn lookup(&self, key: &u64) -> Option<&u64> {
        self.get(key)
    }
}

impl BenchMap for HashMap<u64, u64> {
    fn prepared(len: usize) -> Self {
        HashMap::with_capacity(hash_capacity(len))
    }

    fn insert_key(&mut self, key: u64, value: u64) {
        self.insert(key, value);
    }

    fn lookup(&self, key: &u64) -> Option<&u64> {
        self.get(key)
    }
}

/// Capacity requested for a hash map that will hold `len` keys.
///
/// Large enough that `len` keys never push occupancy past
/// `HASH_MAX_LOAD_FACTOR`, so growth never happens inside the timed region.
pub fn hash_capacity(len: usize) -> usize {
    let by_load = (len as f64 / HASH_MAX_LOAD_FACTOR).ceil() as usize;
    len.saturating_mul(HASH_PRESIZE_FACTOR).max(by_load)
}

/// Outcome of one timed trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    pub elapsed_ms: f64,
    /// Sum of every value found by the lookups.
    pub sink: u64,
}

/// Build a fresh `M`, insert every key mapped to itself, then look up every
/// query key. The timer covers construction, inserts and lookups but not
/// the drop of the map.
pub fn run_trial<M: BenchMap>(workload: &Workload) -> Trial {
    let start = Instant::now();
    let mut map = M::prepared(workload.len());
    for &key in workload.keys() {
        map.insert_key(key, key);
    }
    let mut sink = 0u64;
    for query in workload.queries() {
        if let Some(&value) = map.lookup(query) {
            sink = sink.wrapping_add(value);
        }
    }
    let sink = black_box(sink);
    let elapsed = start.elapsed();
    drop(map);

    Trial {
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        sink,
    }
}

/// The two container kinds compared in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKind {
    Ordered,
    Hashed,
}

impl MapKind {
    pub const ALL: [MapKind; 2] = [MapKind::Ordered, MapKind::Hashed];

    /// Column label used in the CSV header and log lines.
    pub fn label(self) -> &'static str {
        match self {
            MapKind::Ordered => "map",
            MapKind::Hashed => "unordered_map",
        }
    }

    pub fn run_trial(self, workload: &Workload) -> Trial {
        match self {
            MapKind::Ordered => run_trial::<BTreeMap<u64, u64>>(workload),
            MapKind::Hashed => run_trial::<HashMap<u64, u64>>(workload),
        }
    }
}
