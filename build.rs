#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // version metadata for the Windows kiosk build; no icon is shipped
    let mut res = WindowsResource::new();
    res.set("FileDescription", "confkiosk conference desk kiosk")
        .set("ProductName", "confkiosk")
        .set("OriginalFilename", "confkiosk.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"));

    if let Err(e) = res.compile() {
        println!("cargo:warning=failed to embed version resource: {e}");
    }
}

#[cfg(not(target_os = "windows"))]
fn main() {}
