use web_sys::Window;

fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

/// Blocking modal notification. Interaction halts until dismissed.
pub fn alert(message: &str) -> Result<(), String> {
    window()?
        .alert_with_message(message)
        .map_err(|_| "Alert failed".to_string())
}
