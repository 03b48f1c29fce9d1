//! Output formatting for generate command results.

use super::execute::GenerateResult;
use crate::output::Outputable;

impl Outputable for GenerateResult {
    /// The SDL document itself; skipped models are reported through logging.
    fn to_table(&self) -> String {
        self.sdl.trim_end().to_string()
    }
}
