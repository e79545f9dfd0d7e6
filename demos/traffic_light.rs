//! State demo: a traffic light cycling through its phases.
//!
//! Run with: `cargo run --example traffic_light`

use patternkit::behavioral::state::TrafficLight;

fn main() {
    let mut light = TrafficLight::new();
    println!("start: {:?}", light.phase());

    // Toy loop: eight transitions and done.
    for phase in light.run(8) {
        println!("-> {phase:?} (hold {:?})", phase.hold());
    }
}
