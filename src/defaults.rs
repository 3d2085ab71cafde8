// config file
pub const CONFIG_FILE_NAME: &str = "scc_mixer.toml";

// SCF ITERATION
// stop SCF calculation after maxiter iterations
pub const MAX_ITER: usize = 250;
// convergence threshold for the largest charge difference in the SCC iteration
pub const SCF_CHARGE_CONV: f64 = 1.0e-5;

// MIXING
// the next guess for the charges is constructed as q_next = q + a * (q_out - q)
pub const LINEAR_MIXING_COEFFICIENT: f64 = 0.33;
