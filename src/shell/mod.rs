pub mod fsm;
mod handle;
mod state;
pub mod trace;

pub use fsm::{Activity, Command, ShellEvent, ShellPhase};
pub use handle::ShellHandle;
pub use state::{SAMPLE_DESCRIPTION, Shell, ShellSnapshot};
pub use trace::{DebugEntry, DebugTrace, TraceLevel};
