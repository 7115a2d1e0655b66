/// Full-page navigation. Terminal from the page's point of view.
pub trait Navigator {
    fn navigate(&self, url: &str);
}
