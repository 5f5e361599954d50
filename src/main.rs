use anyhow::Result;
use console::style;
use log::{info, warn};
use video_length_calculator::component::VideoLengthCalculator;
use video_length_calculator::config::Config;
use video_length_calculator::init;

fn main() -> Result<()> {
    init::init();

    let config = Config::new()?;
    let mut calculator = VideoLengthCalculator::new(config);

    match calculator.run() {
        Ok(()) => info!("Program exited normally"),
        Err(e) => {
            warn!("Program error: {e:#}");
            eprintln!("{} {e:#}", style("Error:").red().bold());
        }
    }

    Ok(())
}
