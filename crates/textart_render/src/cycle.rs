//! Render-cycle bookkeeping with stale-completion protection.
//!
//! Image decode may finish after the user has already switched mode or
//! image. Each cycle carries a generation tag; a completion arriving with an
//! old tag is discarded so it can never overwrite a newer cycle's result.

use log::debug;

use crate::TextGrid;

/// Opaque tag identifying one render cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

/// Tracks the latest render cycle and the output it produced.
#[derive(Debug, Default)]
pub struct RenderSession {
    latest: u64,
    output: Option<TextGrid>,
}

impl RenderSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle, superseding all earlier ones.
    pub fn begin(&mut self) -> Generation {
        self.latest += 1;
        Generation(self.latest)
    }

    /// Install a finished grid. Returns false, changing nothing, when a
    /// newer cycle has begun since `generation` was issued.
    pub fn complete(&mut self, generation: Generation, grid: TextGrid) -> bool {
        if generation.0 != self.latest {
            debug!("discarding stale render cycle {}", generation.0);
            return false;
        }
        self.output = Some(grid);
        true
    }

    /// Record a failed cycle. Clears the stored output when the failure
    /// belongs to the current cycle; stale failures are ignored.
    pub fn fail(&mut self, generation: Generation) -> bool {
        if generation.0 != self.latest {
            debug!("ignoring stale render failure {}", generation.0);
            return false;
        }
        self.output = None;
        true
    }

    pub fn output(&self) -> Option<&TextGrid> {
        self.output.as_ref()
    }
}
