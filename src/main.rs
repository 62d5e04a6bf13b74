//! rDeparture main entrypoint.

use rdeparture::run;
use rdeparture::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
