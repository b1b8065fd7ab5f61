//! Timed drive example.
//!
//! Loads named maneuvers from TOML, then runs a sequence against fake motor
//! lines and a wall-clock millisecond counter, polling at the configured
//! interval.

use std::cell::Cell;
use std::time::{Duration, Instant};

use drive_motion::{
    parse_config, Direction, ManeuverRegistry, ManeuverSequencer, MotionController,
    SequenceStatus, Ticks,
};

/// Mock output line that prints every level change.
struct PrintPin {
    label: &'static str,
    state: Cell<bool>,
}

impl PrintPin {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            state: Cell::new(false),
        }
    }

    fn set(&self, high: bool) {
        if self.state.replace(high) != high {
            println!("  {} -> {}", self.label, if high { "HIGH" } else { "LOW" });
        }
    }
}

impl embedded_hal::digital::OutputPin for PrintPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false);
        Ok(())
    }
}

impl embedded_hal::digital::ErrorType for PrintPin {
    type Error = core::convert::Infallible;
}

const CONFIG: &str = r#"
[drive]
name = "demo_rover"
poll_interval_ticks = 20

[maneuvers.ahead]
direction = "forward"
duration_ticks = 300

[maneuvers.veer_left]
direction = "turn_left"
duration_ticks = 150

[maneuvers.veer_right]
direction = "turn_right"
duration_ticks = 150

[maneuvers.pause]
direction = "idle"
duration_ticks = 100

[sequences.zigzag]
steps = ["ahead", "veer_left", "ahead", "veer_right", "pause"]
"#;

fn main() {
    println!("=== Timed Drive Example ===\n");

    let config = parse_config(CONFIG).expect("Failed to parse config");
    let registry = ManeuverRegistry::from_config(&config);
    println!(
        "Loaded {} maneuver(s): {}",
        registry.len(),
        registry.names().collect::<Vec<_>>().join(", ")
    );

    // Milliseconds since start, truncated to the 32-bit counter width.
    let epoch = Instant::now();
    let clock = move || epoch.elapsed().as_millis() as u32;

    let mut drive = MotionController::builder()
        .from_config(&config)
        .left_pin(PrintPin::new("left"))
        .right_pin(PrintPin::new("right"))
        .clock(clock)
        .build()
        .expect("Failed to build controller");

    println!("\n=== Single move ===");
    drive
        .move_for(Direction::Forward, Ticks(200))
        .expect("pin write");
    while drive.is_moving() {
        std::thread::sleep(Duration::from_millis(20));
        drive.check_timeout().expect("pin write");
    }
    println!("  stopped after {} ms", epoch.elapsed().as_millis());

    println!("\n=== Sequence 'zigzag' ===");
    let poll = Duration::from_millis(config.drive.poll_interval.value() as u64);
    let mut zigzag =
        ManeuverSequencer::from_registry(&registry, "zigzag").expect("sequence exists");
    let mut last = zigzag.start(&mut drive, &registry).expect("start");
    println!("  step 0 ({})", drive.direction());

    while !zigzag.is_finished() {
        std::thread::sleep(poll);
        let status = zigzag.poll(&mut drive, &registry).expect("poll");
        if status != last {
            if let SequenceStatus::Running { step } = status {
                println!("  step {} ({})", step, drive.direction());
            }
            last = status;
        }
    }

    println!("\n=== Example Complete ===");
    println!("Drive '{}' is {}", drive.name(), drive.direction());
}
