#![no_main]

use libfuzzer_sys::fuzz_target;
use publication_nodes::config::Config;
use publication_nodes::csv_io::RowReader;
use publication_nodes::pipeline;

fuzz_target!(|data: &[u8]| {
    // Treat arbitrary bytes as a nodes.csv body; should never panic
    let config = Config::default();
    if let Ok(reader) = RowReader::new(data, &config) {
        let _ = pipeline::summarize(pipeline::process_rows(reader, &config));
    }
});
