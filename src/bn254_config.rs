//! Pairing scheduling knobs, read from the environment once per process.

use std::sync::OnceLock;

const DEFAULT_PAR_MIN_PAIRS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairingConfig {
    /// Run the Miller loops of a multi-pairing on the rayon pool.
    pub parallel: bool,
    /// Minimum number of non-trivial pairs before going parallel.
    pub par_min_pairs: usize,
}

impl PairingConfig {
    pub fn sequential() -> Self {
        Self { parallel: false, par_min_pairs: usize::MAX }
    }

    /// `BN254_PARALLEL=0` disables parallel Miller loops, `BN254_PAR_MIN_PAIRS` sets the threshold.
    pub fn from_env() -> Self {
        let parallel = std::env::var("BN254_PARALLEL")
            .ok()
            .as_deref()
            .map(|v| v != "0")
            .unwrap_or(true);
        let par_min_pairs = std::env::var("BN254_PAR_MIN_PAIRS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_PAR_MIN_PAIRS);
        Self { parallel, par_min_pairs }
    }

    pub fn global() -> &'static PairingConfig {
        static CONFIG: OnceLock<PairingConfig> = OnceLock::new();
        CONFIG.get_or_init(|| {
            let cfg = Self::from_env();
            tracing::debug!(parallel = cfg.parallel, par_min_pairs = cfg.par_min_pairs, "bn254 pairing config");
            cfg
        })
    }

    pub fn use_parallel(&self, pairs: usize) -> bool {
        self.parallel && pairs >= self.par_min_pairs && rayon::current_num_threads() > 1
    }
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self { parallel: true, par_min_pairs: DEFAULT_PAR_MIN_PAIRS }
    }
}
