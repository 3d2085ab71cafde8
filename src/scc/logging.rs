use crate::utils::Timer;
use log::info;

pub fn print_scc_init(mixer: &str, n: usize, max_iter: usize, conv: f64) {
    info!("{:^80}", "");
    info!("{: ^80}", "SCC-Routine");
    info!("{:-^80}", "");
    info!("{: <25} {}", "mixing scheme:", mixer);
    info!("{: <25} {}", "mixed quantities:", n);
    info!("{: <25} {:.2e}", "convergence criterium:", conv);
    info!("{: <25} {}", "max. iterations:", max_iter);
    info!("{:^80}", "");
    info!("{: <5} {: >24}", "Iter.", "max. residual");
    info!("{:-^45} ", "");
}

pub fn print_scc_iteration(iter: usize, max_residual: f64) {
    info!("{: >5} {:>24.14e}", iter + 1, max_residual);
}

pub fn print_scc_end(timer: &Timer, iterations: usize, converged: bool) {
    info!("{:-^45} ", "");
    if converged {
        info!("{: ^80}", format!("SCC converged in {} iterations", iterations));
    } else {
        info!(
            "{: ^80}",
            format!("SCC not converged after {} iterations", iterations)
        );
    }
    info!("{:-<80} ", "");
    info!("{}", timer);
}
