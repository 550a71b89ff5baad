//! WaterBuddy main entrypoint.

use waterbuddy::run;

fn main() {
    if let Err(e) = run() {
        waterbuddy::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
