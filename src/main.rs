// This binary crate is intentionally minimal.
// All trainer logic lives in the library (src/lib.rs and its modules).
// Run demos with:
//   cargo run --example xor
fn main() {
    println!("magnetite-nn: a from-scratch feedforward network trainer in Rust.");
    println!("Run `cargo run --example xor` for a quick demo,");
    println!("or `cargo run --example mnist --release -- <data-dir>` to train on MNIST.");
}
