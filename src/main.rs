//! presenca main entrypoint.

use presenca::run;
use presenca::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
