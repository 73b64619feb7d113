use log::info;

use long_running::{get_process_id, run_to_exit, Simulator, SimulatorConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Diagnostics go to stderr; stdout carries only the tagged workload lines
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let config = SimulatorConfig::default();
    info!(
        "Starting workload for pid {} (work={}, quick={}, deep={}x{}, pause={}ms)",
        get_process_id(),
        config.work_iterations,
        config.quick_iterations,
        config.deep_depth,
        config.deep_unit_iterations,
        config.pause_ms,
    );

    let mut sim = Simulator::stdout(config);
    let status = run_to_exit(&mut sim).await;
    std::process::exit(status);
}
