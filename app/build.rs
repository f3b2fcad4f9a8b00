fn main() {
    // Compile the Slint file.
    //
    // The app-window.slint file is compiled into a Rust file that contains the UI code.
    slint_build::compile("ui/app-window.slint").expect("Slint build failed");
}
