/// Binary entrypoint for the `mkwords` executable.
///
/// Keeps the binary thin: argument handling and file generation live in the
/// `mkwords_lib` crate so tests can call them directly.
fn main() -> std::process::ExitCode {
    mkwords_lib::run()
}
