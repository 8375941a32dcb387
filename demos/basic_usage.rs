// ============================================================================
// Basic Usage Example
// ============================================================================

use rolling_number::format;
use rolling_number::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn main() {
    rolling_number::utils::init_logging();

    println!("=== Rolling Number Example ===\n");

    // Arithmetic and text output
    let bet = NumericValue::new("2.5");
    let win = bet.multiplied_by(1200).plus(0.75);
    println!("Bet:            {}", bet);
    println!("Win:            {}", win.to_format(Some(2), None, None));
    println!("Win (tiny):     {}", format::format_tiny(win.multiplied_by(1000), 6, 3));
    println!("0.3 - 0.2:      {}", NumericValue::new(0.3).minus(0.2));
    match win.to_string_radix(16) {
        Ok(hex) => println!("Win (hex):      {}", hex),
        Err(e) => println!("Radix error:    {}", e),
    }

    // Roll a counter at 60 fps
    println!("\nRolling 0 -> {} over 1.5 s...", win);
    let handler = Arc::new(RecordingEventHandler::new());
    let mut roller = RollingNumber::new(
        RollingConfig::point_counter(1500).with_refresh_interval_ms(100),
        handler.clone(),
    );

    roller.roll_number(0, win, None, false);
    let frame = Duration::from_micros(16_667);
    while roller.is_rolling() {
        for event in roller.update(frame) {
            if let RollingEvent::NumberRolling { current, .. } = event {
                println!("  {:>12}", current.to_format(Some(2), Some(RoundingMode::Down), None));
            }
        }
    }

    println!(
        "Finished at {} ({} progress events, {} finish)",
        roller.current(),
        handler.rolling_count(),
        handler.finished_count()
    );

    // A label with deferred start
    println!("\nLabel rolling to 12,345,678 with max width 6...");
    let mut label = RollingLabel::new(RollingConfig::integer_counter(500));
    label.set_formatter(LabelFormatter::Grouped { max_length: 6 });
    label.roll_number_to(12_345_678, true);
    label.late_update();

    while label.is_rolling() {
        label.update(Duration::from_millis(100));
        println!("  {}", label.text());
    }

    println!("\n=== Example Complete ===");
}
