//! Latency benchmark for ordered and hashed maps.
//!
//! Each configured size gets a deterministic shuffled workload. Both a
//! `BTreeMap` and a presized `HashMap` are built from scratch and queried
//! once per trial, and the trials are reduced to their median.

pub mod config;
pub mod error;
pub mod logging;
pub mod maps;
pub mod report;
pub mod runner;
pub mod timing;
pub mod workload;

pub use config::BenchConfig;
pub use error::{BenchError, BenchResult};
pub use maps::{hash_capacity, run_trial, BenchMap, MapKind, Trial};
pub use report::{Reporter, ResultRow};
pub use runner::{bench_kind, run};
pub use timing::{median, median_time};
pub use workload::{shuffled_keys, Workload};
