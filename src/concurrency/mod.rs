//! Chapter 5: concurrency patterns on OS threads.
//!
//! 1. **Printers** - two threads interleaving output, joined via `thread::scope`
//! 2. **Pipeline** - generator and transform stages over rendezvous channels
//! 3. **Workers** - launch N, join N with a `WaitGroup`
//! 4. **Counter** - `Arc<Mutex<_>>` shared across tasks
//! 5. **Select** - first message wins with `crossbeam::select!`

pub mod counter;
pub mod pipeline;
pub mod printers;
pub mod select;
pub mod workers;

pub use counter::SharedCounter;
pub use pipeline::{run_pipeline, StageReport};
pub use printers::{interleave, PrinterEvent};
pub use select::{first_completed, SELECT_MESSAGES};
pub use workers::{run_workers, WorkerReport};
