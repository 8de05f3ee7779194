//! `st8` — Stator JavaScript shell.
//!
//! `st8` is the interactive CLI shell for the Stator engine, analogous to
//! V8's `d8`.  It will provide a REPL, script execution, and debugging
//! utilities once the interpreter is functional.  For now it prints a
//! placeholder message so the workspace compiles end-to-end.

fn main() {
    println!("st8: Stator JavaScript shell (not yet implemented)");
}
