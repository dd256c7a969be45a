use std::process::Command;

fn main() {
    // Compiler version, reported as the runtime line of the startup check
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rustc_version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|| "rustc unknown".to_string());

    // Target triple the binary was built for
    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=KEYCHECK_RUSTC_VERSION={rustc_version}");
    println!("cargo:rustc-env=KEYCHECK_TARGET={target}");
    println!("cargo:rerun-if-env-changed=RUSTC");
}
