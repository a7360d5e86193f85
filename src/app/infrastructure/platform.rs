//! System color-scheme probing.
//!
//! Desktop environments expose "prefers dark" in platform-specific places;
//! each probe returns `Some` only when it got a definitive answer, so the
//! chain can fall through to the next one. No answer at all means light.

/// One-shot query of the system dark-mode signal.
pub fn detect_system_dark_mode() -> bool {
    probe().unwrap_or(false)
}

#[cfg(target_os = "windows")]
fn probe() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let key = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    // AppsUseLightTheme: 0 = dark mode, 1 = light mode
    let value: u32 = key.get_value("AppsUseLightTheme").ok()?;
    Some(value == 0)
}

#[cfg(target_os = "linux")]
fn probe() -> Option<bool> {
    gsettings_contains("color-scheme", "prefer-dark")
        .or_else(|| gsettings_contains("gtk-theme", "dark"))
}

#[cfg(target_os = "linux")]
fn gsettings_contains(key: &str, needle: &str) -> Option<bool> {
    use std::process::Command;

    let output = Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout).to_lowercase();
    if value.contains(needle) { Some(true) } else { None }
}

#[cfg(target_os = "macos")]
fn probe() -> Option<bool> {
    use std::process::Command;

    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    if !output.status.success() {
        // Key absent entirely means light mode on macOS
        return Some(false);
    }
    let style = String::from_utf8_lossy(&output.stdout).to_lowercase();
    Some(style.contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn probe() -> Option<bool> {
    None
}
