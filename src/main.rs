use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    // keep seeds and passwords out of core dumps
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    let args: Vec<String> = env::args().collect();
    seedpass::cli::run(args)
}
