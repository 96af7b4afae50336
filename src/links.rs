use anyhow::{Context, Result, bail};
use tracing::info;

/// Open a URL in the user's default browser without waiting for it.
pub fn open_in_browser(url: &str) -> Result<()> {
    check_url(url)?;
    info!(url, "opening link");
    open::that_detached(url).with_context(|| format!("Failed to open {url}"))?;
    Ok(())
}

fn check_url(url: &str) -> Result<()> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        bail!("Refusing to open non-web link: {url}")
    }
}
