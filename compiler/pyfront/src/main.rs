//! pyfront CLI

fn main() {
    pyfront::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !pyfront::commands::run(&args) {
        std::process::exit(1);
    }
}
