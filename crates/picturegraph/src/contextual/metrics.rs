use std::time::Duration;

/// Counters and timings of contextual-picture construction.
///
/// Owned by the caller and passed in as `&mut`; nothing is recorded globally.
/// Durations are per sub-phase and do not nest: `adding_points` covers the
/// incidence scan of a new point, not the line/circle resolution that follows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConstructionMetrics {
    pub objects_added: u64,
    pub incidence_checks: u64,
    pub lines_resolved: u64,
    pub circles_resolved: u64,
    pub lines_created: u64,
    pub circles_created: u64,
    pub adding_points: Duration,
    pub adding_lines_and_circles: Duration,
    pub resolving_lines: Duration,
    pub resolving_circles: Duration,
    pub cloning: Duration,
}

impl ConstructionMetrics {
    /// Accumulate `other` into `self`.
    pub fn merge(&mut self, other: &ConstructionMetrics) {
        self.objects_added += other.objects_added;
        self.incidence_checks += other.incidence_checks;
        self.lines_resolved += other.lines_resolved;
        self.circles_resolved += other.circles_resolved;
        self.lines_created += other.lines_created;
        self.circles_created += other.circles_created;
        self.adding_points += other.adding_points;
        self.adding_lines_and_circles += other.adding_lines_and_circles;
        self.resolving_lines += other.resolving_lines;
        self.resolving_circles += other.resolving_circles;
        self.cloning += other.cloning;
    }

    /// Sum of all recorded phases.
    pub fn total(&self) -> Duration {
        self.adding_points
            + self.adding_lines_and_circles
            + self.resolving_lines
            + self.resolving_circles
            + self.cloning
    }
}
