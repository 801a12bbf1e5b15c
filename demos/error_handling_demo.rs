// demos/error_handling_demo.rs
use wiener_walk::error::WalkError;
use wiener_walk::mc::ensemble::generate_ensemble;
use wiener_walk::rng::{seed_rng_from_u64, ReplaySource};
use wiener_walk::{generate_path, RandomWalk, WalkConfig};

fn main() {
    println!("Error Handling Demo for wiener-walk");
    println!("===================================\n");

    let mut rng = seed_rng_from_u64(42);

    // Test 1: Negative step count
    println!("1. Testing negative step count...");
    match generate_path(0.1, 0.0, -10, &mut rng) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Non-positive dt
    println!("\n2. Testing non-positive dt...");
    match RandomWalk::new(0.0, 0.0) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Non-finite starting value
    println!("\n3. Testing non-finite x0...");
    match RandomWalk::new(0.1, f64::INFINITY) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: Empty ensemble
    println!("\n4. Testing ensemble with zero paths...");
    match RandomWalk::standard(0.1).and_then(|walk| generate_ensemble(&walk, 100, 0, 42)) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 5: Replay source shorter than the walk
    println!("\n5. Testing exhausted replay source...");
    let mut short = ReplaySource::new(vec![0.05, -0.02]);
    match generate_path(0.1, 0.0, 3, &mut short) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 6: Malformed config
    println!("\n6. Testing malformed configuration...");
    match WalkConfig::from_toml_str("steps = \"many\"") {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 7: Valid parameters should work
    println!("\n7. Testing valid parameters...");
    match generate_path(0.1, 0.0, 1000, &mut rng) {
        Ok(path) => println!("   ✓ Success: {} points, terminal value = {:.4}", path.len(), path.terminal()),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 8: Error type matching
    println!("\n8. Testing error type matching...");
    match generate_path(-0.5, 0.0, 10, &mut rng) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(WalkError::InvalidParameters { parameter, value, constraint }) => {
            println!("   ✓ Caught InvalidParameters: {} = {} ({})", parameter, value, constraint);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n✓ Error handling demo complete!");
    println!("All error cases were properly caught and handled.");
}
