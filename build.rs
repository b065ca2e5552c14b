fn main() {
    // Compile lalrpop grammar files (src/notation/grammar.lalrpop)
    lalrpop::process_root().unwrap();

    println!("cargo:rerun-if-changed=src/notation/grammar.lalrpop");
}
