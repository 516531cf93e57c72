/// Scale thresholds that raise the point budget.
///
/// Steps are checked in order; the first whose threshold is exceeded while the
/// current count is still below its count wins. Counts never go back down.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailLadder {
    pub initial: usize,
    pub steps: Vec<DetailStep>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailStep {
    pub min_scale_exclusive: f64,
    pub render_count: usize,
}

impl Default for DetailLadder {
    fn default() -> Self {
        Self {
            initial: 10_000,
            steps: vec![
                DetailStep {
                    min_scale_exclusive: 200.0,
                    render_count: 50_000,
                },
                DetailStep {
                    min_scale_exclusive: 1_000.0,
                    render_count: 100_000,
                },
            ],
        }
    }
}

impl DetailLadder {
    /// Render count to use after the scale changed to `new_scale`.
    #[must_use]
    pub fn on_scale_changed(&self, new_scale: f64, current: usize) -> usize {
        self.steps
            .iter()
            .find(|step| new_scale > step.min_scale_exclusive && current < step.render_count)
            .map_or(current, |step| step.render_count)
    }

    /// Every count the ladder can produce, starting with the initial one.
    #[must_use]
    pub fn counts(&self) -> Vec<usize> {
        std::iter::once(self.initial)
            .chain(self.steps.iter().map(|step| step.render_count))
            .collect()
    }
}
