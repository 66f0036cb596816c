use miette::Result;

/// Main entry point for the header-graph CLI tool
fn main() -> Result<()> {
    // Install miette's panic handler for readable error reporting
    miette::set_panic_hook();

    header_graph::run()
}
