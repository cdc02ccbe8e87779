use contracts::system::router::LocationSink;
use web_sys::window;

/// `window.location.hash` as a [`LocationSink`].
///
/// Fragments are percent-decoded on read so product ids compare equal to the
/// values the router writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHash;

impl LocationSink for BrowserHash {
    fn current(&self) -> String {
        let raw = window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        urlencoding::decode(&raw)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| raw.clone())
    }

    fn write(&mut self, fragment: &str) -> bool {
        let next = if fragment.is_empty() {
            String::new()
        } else {
            format!("#{}", fragment)
        };
        if self.current() == next {
            return false;
        }
        match window() {
            Some(w) => w.location().set_hash(fragment).is_ok(),
            None => false,
        }
    }
}
