use std::io;

use series_client::{RestError, Runner, RunnerConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), RestError> {
    env_logger::builder()
        .format_timestamp(Some(env_logger::TimestampPrecision::Millis))
        .init();

    let runner = Runner::new(RunnerConfig::default());
    runner.run(&mut io::stdout().lock()).await?;

    Ok(())
}
