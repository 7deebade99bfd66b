use clap::Parser;
use loader_crane_tco::{app, config};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 계산 요청 한 건을 처리한다.
fn main() -> std::process::ExitCode {
    let cli = app::Cli::parse();
    let cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("config error: {err}");
            config::Config::default()
        }
    };
    init_logging(&cfg);

    match app::run(&cli, &cfg) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "calculation failed");
            eprintln!("error: {err}");
            std::process::ExitCode::FAILURE
        }
    }
}

/// `tracing` 구독자를 설치한다. 로그는 보고서와 섞이지 않게 stderr로 보낸다.
fn init_logging(cfg: &config::Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
