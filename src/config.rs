pub mod constant {
    /// Beta close to 1 collapses BRA to an almost-deterministic pick of
    /// index 0 — used wherever the search wants near-greedy behaviour.
    pub const GREEDY_BETA: f64 = 0.9999;

    /// Lower bound of the open interval BRA draws its uniform sample from.
    pub const BRA_EPSILON: f64 = 1e-7;

    pub const DEFAULT_MIN_BETA: f64 = 0.1;
    pub const DEFAULT_MAX_BETA: f64 = 0.3;
    pub const DEFAULT_MAX_ITER: usize = 1000;
    pub const DEFAULT_NELITES: usize = 5;
}
