//! Encoding Inspector Binary
//!
//! Prints the observation layout, maximum vector, and sample encodings.

use stsnet::*;

fn main() {
    log();
    if let Err(e) = cli::Query::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
