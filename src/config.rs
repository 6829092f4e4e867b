
#[cfg(debug_assertions)]
pub fn app_url() -> &'static str {
    "http://localhost:8501"  // Streamlit app running locally
}

#[cfg(not(debug_assertions))]
pub fn app_url() -> &'static str {
    match option_env!("ECHOVERSE_APP_URL") {
        Some(url) if !url.is_empty() => url,
        _ => "http://localhost:8501",
    }
}
