// src/main.rs
use clap::Parser;
use football_data_viewer::cli::{Args, is_config_operation};
use football_data_viewer::commands::{
    handle_config_update_command, handle_list_config_command, handle_view_command,
};
use football_data_viewer::config::Config;
use football_data_viewer::error::AppError;
use football_data_viewer::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if is_config_operation(&args) {
        // Config commands must work even when the stored config is invalid
        let config = Config::load_unvalidated().await.ok();
        let (_log_file_path, _guard) = setup_logging(&args, config.as_ref()).await?;

        if args.list_config {
            return handle_list_config_command().await;
        }
        return handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;
    let (log_file_path, _guard) = setup_logging(&args, Some(&config)).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    handle_view_command(&args, &config).await
}
