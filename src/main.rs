use std::sync::Arc;

use csv_average::pipeline::{
    run_pipeline_with_options, LogObserver, PipelineConfig, PipelineOptions, PipelineReport,
};

fn main() {
    env_logger::init();

    let config = PipelineConfig::default();
    let options = PipelineOptions {
        observer: Some(Arc::new(LogObserver)),
        ..Default::default()
    };

    // Exit status is 0 whatever the outcome; the printed line carries the result.
    let result = run_pipeline_with_options(&config, &options);
    println!("{}", PipelineReport::new(&result));
}
