use contracts::usecases::common::Navigator;

/// Navigates by assigning `window.location.href`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) {
        let window = match web_sys::window() {
            Some(w) => w,
            None => {
                log::error!("No window available, cannot navigate to {}", url);
                return;
            }
        };
        if let Err(e) = window.location().set_href(url) {
            log::error!("Failed to navigate to {}: {:?}", url, e);
        }
    }
}
