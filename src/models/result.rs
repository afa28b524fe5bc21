/// One recorded point of the charge history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub t_s: f64,
    pub charge_wh: f64,
    pub sunlit: bool,
}

/// Charge history of one run.
///
/// Built incrementally by the simulator and frozen once returned: the public API is
/// read-only and every series has the same length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimulationResult {
    timestamps_s: Vec<f64>,
    charge_wh: Vec<f64>,
    sunlit: Vec<bool>,
    depleted_at_s: Option<f64>,
    curtailed_wh: f64,
    interrupted: bool,
}

impl SimulationResult {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            timestamps_s: Vec::with_capacity(capacity),
            charge_wh: Vec::with_capacity(capacity),
            sunlit: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub(crate) fn record(&mut self, t_s: f64, charge_wh: f64, sunlit: bool) {
        self.timestamps_s.push(t_s);
        self.charge_wh.push(charge_wh);
        self.sunlit.push(sunlit);
    }

    pub(crate) fn mark_depleted(&mut self, t_s: f64) {
        self.depleted_at_s = Some(t_s);
    }

    pub(crate) fn mark_interrupted(&mut self) {
        self.interrupted = true;
    }

    pub(crate) fn add_curtailed(&mut self, energy_wh: f64) {
        self.curtailed_wh += energy_wh;
    }

    pub fn timestamps_s(&self) -> &[f64] {
        &self.timestamps_s
    }

    pub fn charge_wh(&self) -> &[f64] {
        &self.charge_wh
    }

    /// Illumination of the step that produced each sample.
    pub fn sunlit(&self) -> &[bool] {
        &self.sunlit
    }

    pub fn depleted(&self) -> bool {
        self.depleted_at_s.is_some()
    }

    pub fn depleted_at_s(&self) -> Option<f64> {
        self.depleted_at_s
    }

    /// Solar energy discarded because the battery was already full.
    pub fn curtailed_wh(&self) -> f64 {
        self.curtailed_wh
    }

    /// Set when a cancellation request stopped the run before `duration_s`.
    pub fn interrupted(&self) -> bool {
        self.interrupted
    }

    pub fn len(&self) -> usize {
        self.timestamps_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps_s.is_empty()
    }

    pub fn final_charge_wh(&self) -> Option<f64> {
        self.charge_wh.last().copied()
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.timestamps_s
            .iter()
            .zip(&self.charge_wh)
            .zip(&self.sunlit)
            .map(|((&t_s, &charge_wh), &sunlit)| Sample {
                t_s,
                charge_wh,
                sunlit,
            })
    }
}
