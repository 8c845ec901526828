//! Shared infrastructure utilities for the collapsible scaffold.
//!
//! - **`atomic_write`**: Crash-safe file persistence (temp + rename), used to
//!   store the saved header state between runs.

pub mod atomic_write;

pub use atomic_write::{
    AtomicWriteOptions, FileSyncPolicy, atomic_write, atomic_write_with_options,
    recover_bak_file,
};
