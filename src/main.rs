use std::process::exit;

use rolodex_vault::prelude::{helper, run_app};

fn main() {
    helper::load_env();
    helper::init_tracing();

    if let Err(e) = run_app() {
        eprintln!("{}", e);
        exit(1);
    }
}
