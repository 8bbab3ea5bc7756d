//! rClics main entrypoint.

use rclics::run;
use rclics::ui::messages::report;

fn main() {
    println!();
    if let Err(e) = run() {
        report(&e);
        std::process::exit(1);
    }
}
