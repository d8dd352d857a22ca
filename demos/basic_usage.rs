// ============================================================================
// Basic Usage Example
// ============================================================================

use fixq::{NumericError, Q24_8};

fn main() {
    println!("=== Q24.8 Fixed-Point Example ===\n");

    // Construction from the three scalar sources
    let three = Q24_8::from_int(3);
    let half = Q24_8::from_f32(0.5);
    let pi = Q24_8::from_f64(std::f64::consts::PI);

    println!("from_int(3)      = {} (raw {})", three, three.raw_value());
    println!("from_f32(0.5)    = {} (raw {})", half, half.raw_value());
    println!("from_f64(pi)     = {} (raw {})", pi, pi.raw_value());

    // Operators
    println!("\n3 + 0.5          = {}", three + half);
    println!("3 - 0.5          = {}", three - half);
    println!("3 * 0.5          = {}", three * half);
    println!("pi % 3           = {}", pi % three);

    // Division reports its domain error instead of trapping
    match three.checked_div(Q24_8::ZERO) {
        Ok(v) => println!("3 / 0            = {}", v),
        Err(NumericError::DivisionByZero) => println!("3 / 0            = division by zero"),
        Err(e) => println!("3 / 0            = {}", e),
    }

    // Math functions
    println!("\nfloor(pi)        = {}", pi.floor());
    println!("ceil(pi)         = {}", pi.ceil());
    println!("abs(-pi)         = {}", (-pi).abs());
    match (three + three).sqrt() {
        Ok(v) => println!("sqrt(6)          = {}", v),
        Err(e) => println!("sqrt(6)          = {}", e),
    }

    // The integer view floors, the float constructors truncate toward zero
    let neg = Q24_8::from_f32(-1.5);
    println!("\nto_int(-1.5)     = {}", neg.to_int());
    println!("fract_raw(-1.5)  = {}", neg.fract_raw());
}
