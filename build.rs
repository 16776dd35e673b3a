use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // The headless library needs no native libraries
    if env::var_os("CARGO_FEATURE_GUI").is_none() {
        return;
    }

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

    // The font is optional at runtime; make the expected location obvious
    let fonts_dir = Path::new(&manifest_dir).join("assets").join("fonts");
    if !fonts_dir.exists() {
        fs::create_dir_all(&fonts_dir).unwrap();
        println!("cargo:warning=Put a TrueType font at assets/fonts/font.ttf to see status text");
    }

    link_sdl2_libraries();
}

fn link_sdl2_libraries() {
    #[cfg(target_os = "macos")]
    {
        if is_homebrew_available() {
            for (package, lib) in [("sdl2", "SDL2"), ("sdl2_ttf", "SDL2_ttf")] {
                match get_homebrew_path(package) {
                    Ok(prefix) => {
                        println!("cargo:rustc-link-search={}/lib", prefix);
                        println!("cargo:rustc-link-lib={}", lib);
                    }
                    Err(e) => println!("cargo:warning={} (try 'brew install {}')", e, package),
                }
            }
        } else {
            println!("cargo:warning=Homebrew not found; install SDL2 and SDL2_ttf manually");
        }
    }

    #[cfg(target_os = "linux")]
    {
        println!("On Linux, install SDL2 with your package manager.");
        println!("For example: sudo apt-get install libsdl2-dev libsdl2-ttf-dev");
    }

    #[cfg(target_os = "windows")]
    {
        println!("On Windows, make sure SDL2 and SDL2_ttf are in your PATH.");
    }
}

#[allow(dead_code)]
fn is_homebrew_available() -> bool {
    Command::new("brew").arg("--version").output().is_ok()
}

#[allow(dead_code)]
fn get_homebrew_path(package: &str) -> Result<String, String> {
    match Command::new("brew").args(["--prefix", package]).output() {
        Ok(output) if output.status.success() => {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        }
        Ok(_) => Err(format!("Package {} not found in homebrew", package)),
        Err(e) => Err(format!("Failed to execute brew command: {}", e)),
    }
}
